//! `postmore render` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use postmore_config::{CliSettings, Config};
use postmore_template::{PostContext, PostTemplate, render_markdown};

use super::{is_markdown, read_input, write_stdout};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Post source (.md files are rendered as Markdown).
    post: PathBuf,

    /// URL of the full post, joined onto `site.base_url`.
    #[arg(short, long)]
    url: String,

    /// Post title (default: file stem).
    #[arg(long)]
    title: Option<String>,

    /// "Read more" link text (overrides config).
    #[arg(long)]
    text: Option<String>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Template file (overrides config, default: built-in layout).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(config_path, Some(&self.cli_settings()))?;

        let source = read_input(Some(&self.post))?;
        let html = self.render(&config, &source)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, html)?;
                output.success(&format!(
                    "Rendered {} to {}",
                    self.post.display(),
                    path.display()
                ));
            }
            None => write_stdout(&html)?,
        }
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            more_text: self.text.clone(),
            base_url: self.base_url.clone(),
            template: self.template.clone(),
        }
    }

    fn render(&self, config: &Config, source: &str) -> Result<String, CliError> {
        let template = match &config.template_path {
            Some(path) => PostTemplate::from_file(path)?,
            None => PostTemplate::builtin()?,
        };

        let content = if is_markdown(&self.post) {
            render_markdown(source)
        } else {
            source.to_owned()
        };

        let post = PostContext {
            title: self.title(),
            url: config.post_url(&self.url),
            content,
            more_text: config.excerpt.more_text.clone(),
        };
        tracing::info!(
            template = template.name(),
            url = %post.url,
            "Rendering post"
        );
        Ok(template.render(&post)?)
    }

    fn title(&self) -> String {
        self.title.clone().unwrap_or_else(|| {
            self.post
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}
