//! Filter and test registration.

use minijinja::{Environment, Value};
use postmore_excerpt::excerpt;

use crate::markdown::render_markdown;

/// Template name of the excerpt filter: `{{ content | postmorefilter(url, text) }}`.
pub const FILTER_NAME: &str = "postmorefilter";

/// Template name of the Markdown filter: `{{ source | markdown }}`.
pub const MARKDOWN_FILTER_NAME: &str = "markdown";

/// Template name of the marker test: `{% if content is has_excerpt %}`.
pub const TEST_NAME: &str = "has_excerpt";

/// Register the excerpt filter, the Markdown filter and the marker test.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter(FILTER_NAME, postmorefilter);
    env.add_filter(MARKDOWN_FILTER_NAME, markdown);
    env.add_test(TEST_NAME, has_excerpt);
}

/// Create an environment with [`register`] applied.
#[must_use]
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    register(&mut env);
    env
}

/// Cut `input` at its excerpt marker and append the "read more" link.
///
/// The result is marked safe: neither the body nor the link markup is
/// escaped, even in auto-escaping templates.
fn postmorefilter(input: &str, url: &str, text: &str) -> Value {
    match excerpt(input) {
        Some(found) => {
            tracing::debug!(marker = %found.marker, url, "Truncated post at excerpt marker");
            Value::from_safe_string(found.with_more_link(url, text))
        }
        None => Value::from_safe_string(input.to_owned()),
    }
}

fn markdown(source: &str) -> Value {
    Value::from_safe_string(render_markdown(source))
}

fn has_excerpt(value: &str) -> bool {
    postmore_excerpt::has_excerpt(value)
}
