//! Errors raised while sizing type tags.

use thiserror::Error;

/// A tag that cannot be sized without guessing.
///
/// Unrecognized shapes are not errors: they size to `0` and the caller
/// decides what to do with them. Only tags that claim to be integers but
/// carry an unusable width end up here.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// An `i`-prefixed tag whose width is not a positive multiple of 8.
    #[error("invalid integer type `{tag}`: {reason}")]
    MalformedIntegerWidth { tag: String, reason: WidthProblem },
}

/// Why an integer tag's bit width was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum WidthProblem {
    /// Nothing follows the `i` prefix.
    #[error("missing bit width")]
    Empty,
    /// The width contains something other than ASCII digits.
    #[error("bit width is not a decimal number")]
    NotDecimal,
    /// The byte count would not fit in [`ByteSize`](crate::ByteSize).
    ///
    /// A limit on what can be represented, not on which widths are valid.
    #[error("integer is too wide to size")]
    Overflow,
    /// `i0` has no storage to speak of.
    #[error("zero-width integers are not allowed")]
    Zero,
    /// The width is not a whole number of bytes.
    #[error("{bits} bits is not a multiple of 8")]
    NotByteMultiple { bits: u64 },
}

impl LayoutError {
    pub(crate) fn malformed(tag: &str, reason: WidthProblem) -> Self {
        Self::MalformedIntegerWidth {
            tag: tag.to_owned(),
            reason,
        }
    }

    /// The offending tag.
    pub fn tag(&self) -> &str {
        match self {
            Self::MalformedIntegerWidth { tag, .. } => tag,
        }
    }
}
