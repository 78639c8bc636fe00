//! Shared fixtures for the lox-core benchmarks.

use lox_core::{ByteBuffer, CoreResult, GrowthPolicy};

/// Append `n` bytes to a fresh buffer using `policy`.
pub fn fill(policy: GrowthPolicy, n: usize) -> CoreResult<ByteBuffer> {
    let mut b = ByteBuffer::with_policy(policy)?;
    for i in 0..n {
        b.push(i as u8)?;
    }
    Ok(b)
}
