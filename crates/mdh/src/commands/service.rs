//! `mdh service` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the service command.
#[derive(Args)]
pub(crate) struct ServiceArgs {
    /// Requested service slug (e.g. `support-workers-in-gold-coast`).
    slug: String,

    /// Print the localized page as JSON on stdout.
    #[arg(long)]
    json: bool,
}

impl ServiceArgs {
    /// Execute the service command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(None)?;
        let page = ctx.services().load(&self.slug)?;

        if self.json {
            output.data(&serde_json::to_string_pretty(&page)?);
            return Ok(());
        }

        output.highlight(&ctx.title(&page.service.title));
        output.info(&page.service.description);
        output.separator();
        output.info(&page.service.content);
        output.separator();
        if !page.related.is_empty() {
            let names: Vec<_> = page.related.iter().map(|r| r.name.as_str()).collect();
            output.field("Nearby", &names.join(", "));
        }
        Ok(())
    }
}
