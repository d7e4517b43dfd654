//! Character offset ranges
//!
//! A [`Span`] is a half-open range `[start, end)` of character offsets into the text of an
//! [`AnnotatedText`](super::AnnotatedText). Spans of different attributes may overlap or be
//! identical; nothing orders them across attribute kinds.
//!
//! Zero-length spans are legal. Negative offsets and `start > end` are rejected at
//! construction, never clamped.

use crate::error::{Error, Result};
use std::fmt;

/// A half-open range of character offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidSpan {
                start: i64::try_from(start).unwrap_or(i64::MAX),
                end: i64::try_from(end).unwrap_or(i64::MAX),
            });
        }
        Ok(Self { start, end })
    }

    /// Build a span from signed offsets as they arrive from a document.
    pub fn from_offsets(start: i64, end: i64) -> Result<Self> {
        if start < 0 || end < 0 || start > end {
            return Err(Error::InvalidSpan { start, end });
        }
        Ok(Self {
            start: start as usize,
            end: end as usize,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True when `other` lies entirely inside this span
    pub fn contains(&self, other: &Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(0, 8).unwrap();
        assert_eq!(span.start(), 0);
        assert_eq!(span.end(), 8);
        assert_eq!(span.len(), 8);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_zero_length_span_is_legal() {
        let span = Span::new(4, 4).unwrap();
        assert!(span.is_empty());
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        assert_eq!(
            Span::new(5, 3).unwrap_err(),
            Error::InvalidSpan { start: 5, end: 3 }
        );
    }

    #[test]
    fn test_negative_offsets_are_rejected() {
        assert!(Span::from_offsets(-1, 3).is_err());
        assert!(Span::from_offsets(0, -3).is_err());
        assert_eq!(Span::from_offsets(2, 3).unwrap(), Span::new(2, 3).unwrap());
    }

    #[test]
    fn test_contains_and_overlaps() {
        let outer = Span::new(0, 10).unwrap();
        let inner = Span::new(2, 5).unwrap();
        let disjoint = Span::new(10, 12).unwrap();

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(outer.overlaps(&inner));
        assert!(!outer.overlaps(&disjoint));
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(27, 33).unwrap().to_string(), "27..33");
    }
}
