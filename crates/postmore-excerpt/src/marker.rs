//! Recognized excerpt markers.

use std::fmt;

/// An excerpt marker recognized in a rendered post body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `<!--more-->`
    Compact,
    /// `<!-- more -->`
    Spaced,
}

impl Marker {
    /// All markers, in the order they are searched for.
    ///
    /// A later marker is only considered when no earlier one occurs anywhere
    /// in the input, regardless of position.
    pub const ALL: [Self; 2] = [Self::Compact, Self::Spaced];

    /// The exact literal matched in the input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "<!--more-->",
            Self::Spaced => "<!-- more -->",
        }
    }

    /// Split `input` at the first occurrence of this marker.
    ///
    /// Returns the text before and after the marker, without the marker
    /// itself.
    #[must_use]
    pub fn split_once(self, input: &str) -> Option<(&str, &str)> {
        input.split_once(self.as_str())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
