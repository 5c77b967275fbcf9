//! `mdh related` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the related command.
#[derive(Args)]
pub(crate) struct RelatedArgs {
    /// Suburb slug (e.g. `bondi`).
    suburb: String,

    /// Maximum number of suburbs to list (overrides config).
    #[arg(short, long)]
    limit: Option<usize>,
}

impl RelatedArgs {
    /// Execute the related command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(self.limit)?;

        let related = ctx.tables().related_suburbs(
            Some(&self.suburb),
            ctx.config().related.limit,
            ctx.related_order(),
        );
        if related.is_empty() {
            output.warning(&format!("No related suburbs for '{}'", self.suburb));
        }
        for suburb in related {
            output.info(&format!("{} ({})", suburb.name, suburb.slug));
        }
        Ok(())
    }
}
