//! Tag classification.
//!
//! Two closed sets name the canonical numeric tags. Membership is a direct
//! string match and is deliberately narrower than what [`native_size`]
//! accepts: `i128` sizes to 16 bytes but is not a number type here.
//!
//! [`native_size`]: crate::native_size

use crate::error::LayoutError;
use crate::tag::{is_aggregate_syntax, TypeTag, POINTER_MARKER};

/// Canonical integer tags.
pub const INT_TYPES: &[&str] = &["i1", "i8", "i16", "i32", "i64"];

/// Canonical floating-point tags.
pub const FLOAT_TYPES: &[&str] = &["float", "double"];

/// Broad category of a type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeCategory {
    /// `iN` of any valid width.
    Integer,
    /// `float` or `double`.
    Float,
    /// Anything ending in the pointer marker.
    Pointer,
    /// Named or literal struct and array types.
    Aggregate,
    /// Not recognized; sized elsewhere if at all.
    Unknown,
}

impl TypeCategory {
    /// Categories whose values are laid out by this crate.
    #[inline]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::Pointer)
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Pointer => "pointer",
            Self::Aggregate => "aggregate",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TypeTag<'_> {
    pub const fn category(self) -> TypeCategory {
        match self {
            Self::Integer(_) => TypeCategory::Integer,
            Self::Float | Self::Double => TypeCategory::Float,
            Self::Pointer { .. } => TypeCategory::Pointer,
            Self::Aggregate(_) => TypeCategory::Aggregate,
            Self::Opaque(_) => TypeCategory::Unknown,
        }
    }
}

/// Categorize a textual tag.
pub fn classify(tag: &str) -> Result<TypeCategory, LayoutError> {
    TypeTag::parse(tag).map(TypeTag::category)
}

#[inline]
pub fn is_int_tag(tag: &str) -> bool {
    INT_TYPES.contains(&tag)
}

#[inline]
pub fn is_float_tag(tag: &str) -> bool {
    FLOAT_TYPES.contains(&tag)
}

/// `true` for the seven canonical numeric tags and nothing else.
#[inline]
pub fn is_number_type(tag: &str) -> bool {
    is_int_tag(tag) || is_float_tag(tag)
}

/// `true` if `tag` ends in the pointer marker.
///
/// Same rule [`TypeTag::parse`] uses, so a tag is a pointer here exactly when
/// it sizes as one.
#[inline]
pub fn is_pointer_type(tag: &str) -> bool {
    tag.ends_with(POINTER_MARKER)
}

/// `true` for struct and array tags that are not pointers.
pub fn is_struct_type(tag: &str) -> bool {
    !is_pointer_type(tag) && is_aggregate_syntax(tag)
}
