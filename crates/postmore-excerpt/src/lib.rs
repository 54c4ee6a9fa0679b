//! Excerpt truncation for rendered posts.
//!
//! A post body marks the end of its excerpt with an HTML comment. This crate
//! cuts the body at the first marker and appends a "read more" link:
//!
//! ```text
//! <p class='more'><a href='URL'>TEXT</a></p>
//! ```
//!
//! Two markers are recognized, searched in this order:
//! - `<!--more-->`
//! - `<!-- more -->`
//!
//! Any other spelling (tabs, extra spaces, different casing) is ordinary
//! text and passes through unchanged.
//!
//! # Example
//!
//! ```
//! use postmore_excerpt::truncate;
//!
//! let body = "<p>Intro</p><!--more--><p>Rest</p>";
//! assert_eq!(
//!     truncate(body, "/posts/hello", "Read more"),
//!     "<p>Intro</p><p class='more'><a href='/posts/hello'>Read more</a></p>"
//! );
//! ```

mod marker;
mod truncate;

pub use marker::Marker;
pub use truncate::{Excerpt, excerpt, has_excerpt, more_link, truncate, write_more_link};
