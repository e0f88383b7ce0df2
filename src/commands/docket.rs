//! Docket file views

use std::path::Path;

use anyhow::Context as _;

use markflow::core::models::Matter;
use markflow::core::services::{
    URGENT_WINDOW_DAYS, compute_docket, due_within, office_action_for, opposition_for,
    statement_of_use_for, summarize,
};
use markflow::docket::Docket;
use markflow::output::{DocketReport, MatterDocketReport, Report, SummaryReport};

use super::Context;

fn load(ctx: &Context, explicit: Option<&Path>) -> anyhow::Result<Docket> {
    let path = ctx.config.docket_path(explicit);
    Docket::load(&path).with_context(|| format!("failed to load docket {}", path.display()))
}

fn matter_report(ctx: &Context, docket: &Docket, matter: &Matter) -> MatterDocketReport {
    MatterDocketReport {
        matter_id: matter.id.clone(),
        mark: matter.mark.clone(),
        filing_basis: matter.filing_basis,
        as_of: ctx.as_of,
        office_action: office_action_for(matter, ctx.as_of),
        statement_of_use: statement_of_use_for(matter, ctx.as_of),
        opposition: opposition_for(matter, ctx.as_of),
        entries: compute_docket(matter, &docket.deadlines, ctx.as_of, &ctx.config.urgency),
    }
}

/// Show every deadline for one matter, or for all of them
pub fn docket(ctx: &Context, path: Option<&Path>, matter_id: Option<&str>) -> anyhow::Result<()> {
    let docket = load(ctx, path)?;

    if let Some(id) = matter_id {
        let matter = docket
            .matter(id)
            .with_context(|| format!("no matter '{id}' on docket"))?;
        matter_report(ctx, &docket, matter).render(ctx.mode);
        return Ok(());
    }

    let matters = docket.matters.iter().map(|m| matter_report(ctx, &docket, m)).collect();
    DocketReport { matters }.render(ctx.mode);
    Ok(())
}

/// Dashboard counts and the deadlines due soon
pub fn summary(ctx: &Context, path: Option<&Path>) -> anyhow::Result<()> {
    let docket = load(ctx, path)?;

    SummaryReport {
        as_of: ctx.as_of,
        summary: summarize(&docket.matters, &docket.deadlines, ctx.as_of),
        urgent: due_within(&docket.deadlines, ctx.as_of, URGENT_WINDOW_DAYS)
            .into_iter()
            .cloned()
            .collect(),
    }
    .render(ctx.mode);
    Ok(())
}
