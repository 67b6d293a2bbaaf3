//! Cache key composition.

use std::fmt;

/// A cache key identifying a logical query.
///
/// Keys are ordered segment lists, e.g. `["products", "search", "phone"]`.
/// Two queries with equal keys share one cache entry and at most one
/// in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    segments: Vec<String>,
}

impl QueryKey {
    /// Build a key from its segments.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The key's segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Derive a child key with one more segment.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(":"))
    }
}
