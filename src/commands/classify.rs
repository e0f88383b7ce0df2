//! Urgency and status-code lookups

use markflow::core::models::{DeadlineStatus, StatusCode};
use markflow::core::services::classify_urgency_with;
use markflow::output::{Report, StatusReport, UrgencyReport};

use super::Context;

/// Classify a countdown using the configured thresholds
pub fn urgency(ctx: &Context, days: i64, status: DeadlineStatus) -> anyhow::Result<()> {
    UrgencyReport {
        days_remaining: days,
        status,
        urgency: classify_urgency_with(&ctx.config.urgency, days, status),
    }
    .render(ctx.mode);
    Ok(())
}

/// Describe a registry status code
pub fn status(ctx: &Context, code: u16) -> anyhow::Result<()> {
    let status = StatusCode(code);
    StatusReport {
        code,
        label: status.label(),
        category: status.category(),
        office_action_pending: status.is_office_action_pending(),
    }
    .render(ctx.mode);
    Ok(())
}
