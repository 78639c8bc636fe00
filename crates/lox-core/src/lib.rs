//! lox-core — bytecode primitives shared by the Lox toolchain
//!
//! Provides:
//! - `OpCode` : closed set of instruction tags (one byte each)
//! - `ByteBuffer` : owned, contiguous, geometrically growing byte storage
//! - `GrowthPolicy` : tunable growth constants (validated, serde-loadable)
//! - `Chunk` : instruction emitter view over a `ByteBuffer`
//! - Errors `CoreError` + alias `CoreResult<T>`
//!
//! Features:
//! - `tracing` (default) : growth/release events via `tracing`
//! - `serde` : (de)serialization of `GrowthPolicy` and `OpCode`
//!
//! # Example
//! ```
//! use lox_core::prelude::*;
//!
//! let mut chunk = Chunk::new();
//! chunk.write_op(OpCode::Return)?;
//! assert_eq!(chunk.len(), 1);
//! assert_eq!(chunk.op_at(0)?, OpCode::Return);
//! chunk.free();
//! assert!(chunk.is_empty());
//! # Ok::<(), CoreError>(())
//! ```

#![deny(missing_docs)]

/* ─────────────────────────── Public modules ─────────────────────────── */

/// Bytecode primitives (opcodes, buffer, growth policy, chunk).
pub mod bytecode;

/// Error type shared by the crate.
pub mod error;

pub use bytecode::{ByteBuffer, Chunk, GrowthPolicy, OpCode};
pub use error::{CoreError, CoreResult};

/* ─────────────────────────── Prelude ─────────────────────────── */

/// Convenience re-exports for a one-line import.
pub mod prelude {
    pub use super::{ByteBuffer, Chunk, CoreError, CoreResult, GrowthPolicy, OpCode};
}
