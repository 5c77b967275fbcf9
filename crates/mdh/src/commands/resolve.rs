//! `mdh resolve` command implementation.

use clap::Args;
use mdh_locale::display_name;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Requested service slug (e.g. `home-care-bondi`).
    slug: String,
}

impl ResolveArgs {
    /// Execute the resolve command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(None)?;

        let resolved = ctx.tables().resolve_service_slug(&self.slug);
        output.field("Base service", &resolved.base_slug);

        match &resolved.suburb {
            Some(suburb) => {
                output.field("Suburb", &display_name(suburb));
                match ctx.tables().suburb_info(suburb) {
                    Some(info) => {
                        output.field("State", info.state.abbreviation());
                        output.field("Region", &info.region);
                    }
                    None => output.warning("Suburb is not in the suburb table; copy stays generic"),
                }
            }
            None => output.field("Suburb", "-"),
        }
        Ok(())
    }
}
