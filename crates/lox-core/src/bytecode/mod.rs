//! Bytecode primitives: the opcode set, the growable byte buffer that holds
//! emitted instructions, its growth policy, and the chunk wrapper used by
//! emitters.

/// Opcode tags.
pub mod opcode;
/// Growth constants for [`ByteBuffer`].
pub mod policy;
/// Owned, contiguous byte storage with geometric growth.
pub mod buffer;
/// Instruction emitter view over a buffer.
pub mod chunk;

pub use buffer::ByteBuffer;
pub use chunk::Chunk;
pub use opcode::OpCode;
pub use policy::GrowthPolicy;
