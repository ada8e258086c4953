//! Target description: pointer width and allocation quantum.
//!
//! The default target is 32-bit wasm: 4-byte pointers, 4-byte quantum.
//! Everything that depends on the target takes a [`TargetConfig`] by value,
//! so two targets can be sized side by side without shared state.

use thiserror::Error;

use crate::tag::TypeTag;
use crate::ByteSize;

/// Bytes occupied by any pointer on the default target.
pub const POINTER_SIZE: ByteSize = 4;

/// Minimum allocation and alignment granularity on the default target.
pub const QUANTUM_SIZE: ByteSize = 4;

/// Error type for target description operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TargetError {
    /// Pointer size is zero or not a power of two.
    #[error("pointer size must be a non-zero power of two, got {0}")]
    InvalidPointerSize(ByteSize),
    /// Quantum is zero or not a power of two.
    #[error("alignment quantum must be a non-zero power of two, got {0}")]
    InvalidQuantum(ByteSize),
}

/// Immutable description of the machine values are laid out for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTargetConfig")
)]
pub struct TargetConfig {
    pointer_size: ByteSize,
    quantum_size: ByteSize,
}

impl TargetConfig {
    /// 32-bit wasm.
    pub const WASM32: Self = Self {
        pointer_size: POINTER_SIZE,
        quantum_size: QUANTUM_SIZE,
    };

    /// Build a target description, validating both sizes.
    pub fn new(pointer_size: ByteSize, quantum_size: ByteSize) -> Result<Self, TargetError> {
        if !pointer_size.is_power_of_two() {
            return Err(TargetError::InvalidPointerSize(pointer_size));
        }
        if !quantum_size.is_power_of_two() {
            return Err(TargetError::InvalidQuantum(quantum_size));
        }
        Ok(Self {
            pointer_size,
            quantum_size,
        })
    }

    #[inline]
    pub const fn pointer_size(self) -> ByteSize {
        self.pointer_size
    }

    #[inline]
    pub const fn quantum_size(self) -> ByteSize {
        self.quantum_size
    }

    /// Round `size` up to the next multiple of the quantum.
    ///
    /// Returns `None` if the rounded value overflows.
    #[inline]
    pub const fn align_to(self, size: ByteSize) -> Option<ByteSize> {
        size.checked_next_multiple_of(self.quantum_size)
    }

    /// Natural alignment of a scalar tag.
    ///
    /// Scalars align to their own size, capped at the quantum. Aggregates and
    /// opaque types have no alignment this crate can know, so report `0`.
    pub fn align_of(self, tag: TypeTag<'_>) -> ByteSize {
        tag.size(self).min(self.quantum_size)
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self::WASM32
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTargetConfig {
    pointer_size: ByteSize,
    quantum_size: ByteSize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTargetConfig> for TargetConfig {
    type Error = TargetError;

    fn try_from(raw: RawTargetConfig) -> Result<Self, Self::Error> {
        Self::new(raw.pointer_size, raw.quantum_size)
    }
}
