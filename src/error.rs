//! Error types.

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

/// Error creating a UUID from a byte sequence longer than 16 bytes.
///
/// Shorter sequences are accepted and padded with trailing zeros; longer ones are rejected rather
/// than truncated.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("byte sequence too long for UUID: expected at most 16 bytes, got {len}")]
pub struct FromSliceError {
    /// Length of the rejected input, or `17` if it came from an iterator that yielded more than
    /// 16 items.
    pub len: usize,
}
