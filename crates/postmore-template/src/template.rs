//! Post page templates.
//!
//! A [`PostTemplate`] owns an environment with the excerpt filter registered
//! and a single template to render posts with. Auto-escaping follows the
//! template name's extension, so `.html` templates escape `title` while the
//! post body and the filter output are always emitted verbatim.

use std::path::{Path, PathBuf};

use minijinja::{Environment, Value, context};

use crate::filters::environment;

/// Name the built-in layout is registered under.
const BUILTIN_NAME: &str = "post.html";

/// Built-in layout: the post title linking to the full post, followed by the
/// excerpt and its "read more" link.
const BUILTIN_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
</head>
<body>
<article class="post">
<h1><a href="{{ url }}">{{ title }}</a></h1>
{{ content | postmorefilter(url, more_text) }}
</article>
</body>
</html>
"#;

/// Error returned when loading or rendering a post template fails.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template file could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    Io {
        /// Template path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Template syntax or rendering error.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Data available to a post template.
#[derive(Clone, Debug, Default)]
pub struct PostContext {
    /// Post title.
    pub title: String,
    /// URL of the full post, also the "read more" link target.
    pub url: String,
    /// Rendered post body (HTML).
    pub content: String,
    /// "Read more" link text.
    pub more_text: String,
}

/// A template for rendering posts.
pub struct PostTemplate {
    env: Environment<'static>,
    name: String,
}

impl PostTemplate {
    /// Use the built-in layout.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_source(BUILTIN_NAME, BUILTIN_LAYOUT)
    }

    /// Compile a template from source.
    ///
    /// `name` decides auto-escaping: names ending in `.html`, `.htm` or `.xml`
    /// escape interpolated values.
    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut env = environment();
        env.add_template_owned(name.clone(), source.into())?;
        Ok(Self { env, name })
    }

    /// Load and compile a template file.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map_or_else(|| BUILTIN_NAME.to_owned(), |n| n.to_string_lossy().into_owned());
        tracing::debug!(path = %path.display(), name = %name, "Loaded post template");
        Self::from_source(name, source)
    }

    /// Template name used for auto-escape detection.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render a post.
    pub fn render(&self, post: &PostContext) -> Result<String, TemplateError> {
        let template = self.env.get_template(&self.name)?;
        let html = template.render(context! {
            title => &post.title,
            url => &post.url,
            content => Value::from_safe_string(post.content.clone()),
            more_text => &post.more_text,
        })?;
        Ok(html)
    }
}
