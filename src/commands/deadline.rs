//! Single-deadline calculators

use chrono::NaiveDate;

use markflow::core::models::FilingBasis;
use markflow::core::services::{
    maintenance_deadlines, office_action_deadline, opposition_deadline, statement_of_use_deadline,
};
use markflow::output::{
    MaintenanceReport, OfficeActionReport, OppositionReport, Report, StatementOfUseReport,
};

use super::Context;

/// Office action response deadline
pub fn office_action(
    ctx: &Context,
    issued: NaiveDate,
    basis: FilingBasis,
    extension_filed: bool,
) -> anyhow::Result<()> {
    let result = office_action_deadline(issued, basis, extension_filed, ctx.as_of);
    OfficeActionReport {
        issue_date: issued,
        filing_basis: basis,
        result,
    }
    .render(ctx.mode);
    Ok(())
}

/// Section 8 & 15 and Section 9 deadlines
pub fn maintenance(ctx: &Context, registered: NaiveDate) -> anyhow::Result<()> {
    MaintenanceReport {
        registration_date: registered,
        result: maintenance_deadlines(registered),
    }
    .render(ctx.mode);
    Ok(())
}

/// Statement of use deadline
pub fn statement_of_use(ctx: &Context, noa: NaiveDate, extensions: u32) -> anyhow::Result<()> {
    StatementOfUseReport {
        noa_date: noa,
        result: statement_of_use_deadline(noa, extensions, ctx.as_of),
    }
    .render(ctx.mode);
    Ok(())
}

/// Opposition period close
pub fn opposition(ctx: &Context, published: NaiveDate, extension_days: i64) -> anyhow::Result<()> {
    OppositionReport {
        publication_date: published,
        result: opposition_deadline(published, extension_days, ctx.as_of),
    }
    .render(ctx.mode);
    Ok(())
}
