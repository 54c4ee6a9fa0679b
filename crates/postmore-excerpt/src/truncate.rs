//! Cutting a post body down to its excerpt.

use std::borrow::Cow;
use std::fmt::Write;

use crate::Marker;

/// Excerpt located in a post body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Excerpt<'a> {
    /// Text before the first occurrence of `marker`.
    pub prefix: &'a str,
    /// Marker the body was cut at.
    pub marker: Marker,
}

impl Excerpt<'_> {
    /// Render the excerpt followed by the "read more" link.
    #[must_use]
    pub fn with_more_link(&self, url: &str, text: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + url.len() + text.len() + 40);
        out.push_str(self.prefix);
        write_more_link(&mut out, url, text);
        out
    }
}

/// Locate the excerpt in `input`.
///
/// Markers are tried in [`Marker::ALL`] order and the first one present wins.
/// The body is cut at that marker's first occurrence.
///
/// ```
/// use postmore_excerpt::{Marker, excerpt};
///
/// let found = excerpt("A<!-- more -->B").unwrap();
/// assert_eq!(found.prefix, "A");
/// assert_eq!(found.marker, Marker::Spaced);
/// assert!(excerpt("no marker here").is_none());
/// ```
#[must_use]
pub fn excerpt(input: &str) -> Option<Excerpt<'_>> {
    Marker::ALL.into_iter().find_map(|marker| {
        marker
            .split_once(input)
            .map(|(prefix, _)| Excerpt { prefix, marker })
    })
}

/// Whether `input` contains either excerpt marker.
#[must_use]
pub fn has_excerpt(input: &str) -> bool {
    Marker::ALL
        .into_iter()
        .any(|marker| input.contains(marker.as_str()))
}

/// Truncate `input` at its excerpt marker and append a "read more" link.
///
/// Returns `input` unchanged when no marker is present. `url` and `text` are
/// inserted verbatim, without escaping.
pub fn truncate<'a>(input: &'a str, url: &str, text: &str) -> Cow<'a, str> {
    match excerpt(input) {
        Some(found) => Cow::Owned(found.with_more_link(url, text)),
        None => Cow::Borrowed(input),
    }
}

/// The "read more" link fragment.
///
/// ```
/// use postmore_excerpt::more_link;
///
/// assert_eq!(
///     more_link("/p/1", "Read more"),
///     "<p class='more'><a href='/p/1'>Read more</a></p>"
/// );
/// ```
#[must_use]
pub fn more_link(url: &str, text: &str) -> String {
    let mut out = String::new();
    write_more_link(&mut out, url, text);
    out
}

/// Append the "read more" link fragment to `out`.
pub fn write_more_link(out: &mut String, url: &str, text: &str) {
    // Themes style `p.more`; quoting and class name must not change.
    let _ = write!(out, "<p class='more'><a href='{url}'>{text}</a></p>");
}
