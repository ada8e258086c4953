//! Native storage sizes for low-level IR type tags.
//!
//! A code generator lowering to a 32-bit target needs the byte footprint of
//! every scalar it lays out. This crate answers that question for the
//! primitive leaf cases and nothing more:
//!
//! - **Tags** ([`TypeTag`]): textual tags such as `i32`, `double` or
//!   `%struct.point*` parsed once into a typed variant.
//! - **Classification** ([`TypeCategory`], [`is_number_type`],
//!   [`is_pointer_type`], [`is_struct_type`]): broad category queries.
//! - **Sizing** ([`native_size`]): byte count of a tag on a given
//!   [`TargetConfig`].
//!
//! Aggregates and opaque types report size `0`; their layout belongs to the
//! caller. Integer tags whose width is not a whole number of bytes are
//! rejected with [`LayoutError::MalformedIntegerWidth`] rather than sized.
//!
//! # Example
//!
//! ```
//! use native_layout::{native_size, TargetConfig};
//!
//! let target = TargetConfig::WASM32;
//! assert_eq!(native_size("i64", target), Ok(8));
//! assert_eq!(native_size("%struct.node*", target), Ok(4));
//! assert_eq!(native_size("%struct.node", target), Ok(0));
//! assert!(native_size("i33", target).is_err());
//! ```

mod classify;
mod error;
mod size;
mod tag;
mod target;

pub use classify::{
    classify, is_float_tag, is_int_tag, is_number_type, is_pointer_type, is_struct_type,
    TypeCategory, FLOAT_TYPES, INT_TYPES,
};
pub use error::{LayoutError, WidthProblem};
pub use size::native_size;
pub use tag::{IntWidth, TypeTag, INTEGER_PREFIX, POINTER_MARKER};
pub use target::{TargetConfig, TargetError, POINTER_SIZE, QUANTUM_SIZE};

/// Storage footprint of a type in bytes.
///
/// `0` means "not a sized scalar": aggregates and opaque types.
pub type ByteSize = u32;
