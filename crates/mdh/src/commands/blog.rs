//! `mdh blog` command implementation.

use clap::Args;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the blog command.
#[derive(Args)]
pub(crate) struct BlogArgs {
    /// Post slug; lists every post when omitted.
    slug: Option<String>,
}

impl BlogArgs {
    /// Execute the blog command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(None)?;
        let blog = ctx.blog();

        let Some(slug) = self.slug else {
            let posts = blog.posts();
            if posts.is_empty() {
                output.warning("No blog posts");
            }
            for post in posts {
                output.info(&format!("{}  {}  ({})", post.date, post.title, post.url_slug()));
            }
            return Ok(());
        };

        let post = blog.post(&slug)?;
        output.highlight(&ctx.title(&post.title));
        output.field("Date", &post.date);
        output.field("Read time", &post.read_time);
        output.info(&post.description);
        if let Some(content) = &post.content {
            output.separator();
            output.info(content);
        }
        Ok(())
    }
}
