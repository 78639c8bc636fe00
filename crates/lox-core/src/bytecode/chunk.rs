//! Chunk: a sequence of emitted instructions.

use crate::{
    bytecode::{buffer::ByteBuffer, opcode::OpCode, policy::GrowthPolicy},
    CoreResult,
};

/// Bytecode chunk. Owns the instruction bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
    code: ByteBuffer,
}

impl Chunk {
    /// Empty chunk. Nothing is allocated until the first write.
    pub const fn new() -> Self { Self { code: ByteBuffer::new() } }

    /// Empty chunk whose code buffer grows with `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> CoreResult<Self> {
        Ok(Self { code: ByteBuffer::with_policy(policy)? })
    }

    /// Append a raw byte; returns its offset.
    pub fn write(&mut self, byte: u8) -> CoreResult<usize> { self.code.push(byte) }

    /// Append an opcode tag; returns its offset.
    pub fn write_op(&mut self, op: OpCode) -> CoreResult<usize> { self.write(op.as_byte()) }

    /// Decode the opcode stored at `offset`.
    pub fn op_at(&self, offset: usize) -> CoreResult<OpCode> {
        OpCode::try_from(self.code.read(offset)?)
    }

    /// Instruction bytes.
    pub fn code(&self) -> &ByteBuffer { &self.code }

    /// Number of bytes written.
    pub fn len(&self) -> usize { self.code.len() }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool { self.code.is_empty() }

    /// Free the code buffer; the chunk is empty and reusable afterwards.
    pub fn free(&mut self) { self.code.release(); }
}
