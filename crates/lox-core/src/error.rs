//! Errors for buffer growth, reads and opcode decoding.

use thiserror::Error;

/// Common result alias for the core.
pub type CoreResult<T> = core::result::Result<T, CoreError>;

/// Low-level errors shared by the bytecode primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The allocator refused to grow the storage.
    #[error("out of memory: could not reserve {requested} bytes")]
    OutOfMemory {
        /// Total capacity that was requested.
        requested: usize,
    },

    /// Next capacity would exceed `isize::MAX` bytes.
    #[error("capacity overflow: cannot grow past {capacity} bytes")]
    CapacityOverflow {
        /// Capacity before growth.
        capacity: usize,
    },

    /// Read past the logical end of the buffer.
    #[error("offset {offset} out of bounds (len {len})")]
    OutOfBounds {
        /// Requested offset.
        offset: usize,
        /// Length at the time of the read.
        len: usize,
    },

    /// Byte is not a known opcode tag.
    #[error("unknown opcode: 0x{0:02X}")]
    UnknownOpcode(u8),

    /// Growth policy rejected during validation.
    #[error("invalid growth policy: {0}")]
    InvalidPolicy(&'static str),
}
