//! Write a default config file

use std::path::Path;

use markflow::config::Config;
use markflow::output::{InitReport, Report};

use super::Context;

/// Write `Config::default()` to `path` unless a config already exists there
pub fn init(ctx: &Context, path: &Path, force: bool) -> anyhow::Result<()> {
    let created = if path.exists() && !force {
        false
    } else {
        Config::default().save_to(path)?;
        log::debug!("wrote default config to {}", path.display());
        true
    };

    InitReport {
        path: path.to_path_buf(),
        created,
    }
    .render(ctx.mode);
    Ok(())
}
