//! `postmore excerpt` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use postmore_config::{CliSettings, Config};
use postmore_excerpt::{has_excerpt, truncate};
use postmore_template::render_markdown;

use super::{is_markdown, read_input, write_stdout};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the excerpt command.
#[derive(Args)]
pub(crate) struct ExcerptArgs {
    /// Rendered post body (default: stdin).
    input: Option<PathBuf>,

    /// Link target of the "read more" link, joined onto `site.base_url`.
    #[arg(short, long)]
    url: String,

    /// Link text (overrides config).
    #[arg(short, long)]
    text: Option<String>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Render the input as Markdown first (implied for .md files).
    #[arg(long)]
    markdown: bool,
}

impl ExcerptArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(config_path, Some(&self.cli_settings()))?;

        let source = read_input(self.input.as_deref())?;
        let body = self.body(source);
        if !has_excerpt(&body) {
            output.warning("No excerpt marker found, body left unchanged");
        }

        write_stdout(&self.apply(&config, &body))?;
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            more_text: self.text.clone(),
            base_url: self.base_url.clone(),
            ..CliSettings::default()
        }
    }

    /// Convert the input to HTML if it is Markdown.
    fn body(&self, source: String) -> String {
        let markdown = self.markdown || self.input.as_deref().is_some_and(is_markdown);
        if markdown {
            render_markdown(&source)
        } else {
            source
        }
    }

    fn apply(&self, config: &Config, body: &str) -> String {
        let url = config.post_url(&self.url);
        tracing::info!(url = %url, "Truncating post body");
        truncate(body, &url, &config.excerpt.more_text).into_owned()
    }
}
