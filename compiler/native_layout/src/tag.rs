//! Typed view of a textual type tag.
//!
//! Tags follow the IR's surface syntax:
//!
//! | Tag                         | Variant                  |
//! |-----------------------------|--------------------------|
//! | `i1`, `i8`, ..., `i256`     | [`TypeTag::Integer`]     |
//! | `float`                     | [`TypeTag::Float`]       |
//! | `double`                    | [`TypeTag::Double`]      |
//! | `T*`                        | [`TypeTag::Pointer`]     |
//! | `%name`, `{..}`, `<{..}>`, `[N x T]` | [`TypeTag::Aggregate`] |
//! | anything else               | [`TypeTag::Opaque`]      |
//!
//! The pointer marker is checked before the integer prefix, so `i33*` is a
//! pointer and never a malformed integer.

use std::fmt;

use crate::error::{LayoutError, WidthProblem};
use crate::target::TargetConfig;
use crate::ByteSize;

/// Trailing marker meaning "pointer to the preceding type".
pub const POINTER_MARKER: char = '*';

/// Leading character of integer tags.
pub const INTEGER_PREFIX: char = 'i';

/// A parsed type tag.
///
/// Borrows from the source string; parsing never allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag<'a> {
    /// `iN`. Only built from a validated [`IntWidth`].
    Integer(IntWidth),
    /// `float`, 32-bit IEEE.
    Float,
    /// `double`, 64-bit IEEE.
    Double,
    /// `T*`. `pointee` is the tag with one marker stripped.
    Pointer { pointee: &'a str },
    /// Named or literal struct and array types.
    Aggregate(&'a str),
    /// Anything not recognized above.
    Opaque(&'a str),
}

impl<'a> TypeTag<'a> {
    /// Parse a textual tag.
    ///
    /// Fails only for `i`-prefixed tags with a bad width. Every other string
    /// parses to some variant.
    pub fn parse(tag: &'a str) -> Result<Self, LayoutError> {
        match tag {
            "i1" => return Ok(Self::Integer(IntWidth::I1)),
            "float" => return Ok(Self::Float),
            "double" => return Ok(Self::Double),
            _ => {}
        }

        if let Some(pointee) = tag.strip_suffix(POINTER_MARKER) {
            return Ok(Self::Pointer { pointee });
        }

        if let Some(digits) = tag.strip_prefix(INTEGER_PREFIX) {
            let width = parse_width(digits).map_err(|reason| LayoutError::malformed(tag, reason))?;
            return Ok(Self::Integer(width));
        }

        if is_aggregate_syntax(tag) {
            Ok(Self::Aggregate(tag))
        } else {
            Ok(Self::Opaque(tag))
        }
    }

    /// Storage size on `target`.
    ///
    /// `i1` occupies a full byte; sub-byte integers are never packed.
    pub const fn size(self, target: TargetConfig) -> ByteSize {
        match self {
            Self::Integer(width) => width.bytes(),
            Self::Float => 4,
            Self::Double => 8,
            Self::Pointer { .. } => target.pointer_size(),
            Self::Aggregate(_) | Self::Opaque(_) => 0,
        }
    }

    /// The pointee of a pointer tag.
    pub const fn pointee(self) -> Option<&'a str> {
        match self {
            Self::Pointer { pointee } => Some(pointee),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_pointer(self) -> bool {
        matches!(self, Self::Pointer { .. })
    }

    #[inline]
    pub const fn is_aggregate(self) -> bool {
        matches!(self, Self::Aggregate(_))
    }
}

impl fmt::Display for TypeTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(width) => write!(f, "{INTEGER_PREFIX}{}", width.bits()),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Pointer { pointee } => write!(f, "{pointee}{POINTER_MARKER}"),
            Self::Aggregate(tag) | Self::Opaque(tag) => f.write_str(tag),
        }
    }
}

/// Bit width of an integer tag.
///
/// Either the pinned `i1` or a positive multiple of 8 whose byte count fits
/// in [`ByteSize`]. The fields are private so a width that would size wrongly
/// cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IntWidth {
    bits: u64,
    bytes: ByteSize,
}

impl IntWidth {
    /// `i1`. Sub-byte integers are never packed, so it takes a whole byte.
    pub const I1: Self = Self { bits: 1, bytes: 1 };

    /// Validate a bit width other than the pinned `i1`.
    pub fn new(bits: u64) -> Result<Self, WidthProblem> {
        if bits == 0 {
            return Err(WidthProblem::Zero);
        }
        if bits % 8 != 0 {
            return Err(WidthProblem::NotByteMultiple { bits });
        }
        let bytes = ByteSize::try_from(bits / 8).map_err(|_| WidthProblem::Overflow)?;
        Ok(Self { bits, bytes })
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[inline]
    pub const fn bytes(self) -> ByteSize {
        self.bytes
    }
}

/// Parse the digits after the integer prefix.
fn parse_width(digits: &str) -> Result<IntWidth, WidthProblem> {
    if digits.is_empty() {
        return Err(WidthProblem::Empty);
    }
    // `u64::from_str` also accepts a leading `+`.
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WidthProblem::NotDecimal);
    }
    let bits: u64 = digits.parse().map_err(|_| WidthProblem::Overflow)?;
    IntWidth::new(bits)
}

/// Struct and array spellings: `%name`, `{ .. }`, `<{ .. }>`, `[N x T]`.
pub(crate) fn is_aggregate_syntax(tag: &str) -> bool {
    if tag.starts_with('%') {
        return true;
    }
    if (tag.starts_with('{') && tag.ends_with('}'))
        || (tag.starts_with("<{") && tag.ends_with("}>"))
    {
        return true;
    }
    is_array_syntax(tag)
}

fn is_array_syntax(tag: &str) -> bool {
    let Some(body) = tag.strip_prefix('[').and_then(|t| t.strip_suffix(']')) else {
        return false;
    };
    let Some((count, element)) = body.split_once(" x ") else {
        return false;
    };
    !count.is_empty() && count.bytes().all(|b| b.is_ascii_digit()) && !element.is_empty()
}
