//! Byte size of a type tag.
//!
//! Decision order, first match wins:
//!
//! 1. The seven canonical numeric tags, from a fixed table.
//! 2. Any tag ending in the pointer marker: the target's pointer size.
//! 3. `iN` with `N` a positive multiple of 8: `N / 8`. Any other width is
//!    an error.
//! 4. Everything else: `0`.

use crate::error::LayoutError;
use crate::tag::TypeTag;
use crate::target::TargetConfig;
use crate::ByteSize;

/// Storage size of `tag` on `target`.
///
/// `Ok(0)` means the tag is not a scalar this crate knows how to size; an
/// aggregate's layout must be computed from its fields.
pub fn native_size(tag: &str, target: TargetConfig) -> Result<ByteSize, LayoutError> {
    if let Some(size) = canonical_size(tag) {
        return Ok(size);
    }

    let parsed = TypeTag::parse(tag).inspect_err(|err| {
        tracing::debug!(tag, error = %err, "rejected integer tag");
    })?;

    let size = parsed.size(target);
    match parsed {
        TypeTag::Integer(width) => {
            tracing::trace!(tag, bits = width.bits(), size, "sized extended-width integer");
        }
        TypeTag::Aggregate(_) | TypeTag::Opaque(_) => {
            tracing::debug!(tag, category = %parsed.category(), "no native size");
        }
        TypeTag::Float | TypeTag::Double | TypeTag::Pointer { .. } => {}
    }
    Ok(size)
}

/// Fast path for the canonical numeric tags.
#[inline]
fn canonical_size(tag: &str) -> Option<ByteSize> {
    match tag {
        "i1" | "i8" => Some(1),
        "i16" => Some(2),
        "i32" | "float" => Some(4),
        "i64" | "double" => Some(8),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
