//! `minijinja` integration for the postmore excerpt filter.
//!
//! [`register`] adds the filter to an existing [`minijinja::Environment`]:
//!
//! ```
//! use minijinja::{Environment, context};
//!
//! let mut env = Environment::new();
//! postmore_template::register(&mut env);
//!
//! let out = env
//!     .render_str(
//!         "{{ body | postmorefilter(url, 'Read more') }}",
//!         context! { body => "A<!--more-->B", url => "/p/1" },
//!     )
//!     .unwrap();
//! assert_eq!(out, "A<p class='more'><a href='/p/1'>Read more</a></p>");
//! ```
//!
//! [`PostTemplate`] renders a whole post page with either the built-in
//! layout or a template file.

mod filters;
mod markdown;
mod template;

pub use filters::{FILTER_NAME, MARKDOWN_FILTER_NAME, TEST_NAME, environment, register};
pub use markdown::render_markdown;
pub use template::{PostContext, PostTemplate, TemplateError};
