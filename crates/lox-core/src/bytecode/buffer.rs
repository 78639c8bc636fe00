//! Owned, contiguous byte storage with geometric growth.
//!
//! The buffer tracks its own logical capacity so that growth follows the
//! configured [`GrowthPolicy`] exactly: an append on a full buffer reserves
//! `max(min_capacity, capacity * factor)` bytes, the existing bytes keep
//! their offsets, and the old region is freed. N appends cost O(N) overall.
//!
//! Storage is only ever lent out as `&[u8]`, so no view of it can survive
//! an append (which takes `&mut self`) or a release.

use core::{fmt, iter::Copied, ops::Index, slice};

use crate::{bytecode::policy::GrowthPolicy, CoreError, CoreResult};

/// Growable array of bytes.
pub struct ByteBuffer {
    data: Vec<u8>,
    capacity: usize,
    policy: GrowthPolicy,
    growths: usize,
}

impl ByteBuffer {
    /// Empty buffer with the default policy. Does not allocate.
    pub const fn new() -> Self {
        Self { data: Vec::new(), capacity: 0, policy: GrowthPolicy::DEFAULT, growths: 0 }
    }

    /// Empty buffer with a custom policy. Does not allocate.
    pub fn with_policy(policy: GrowthPolicy) -> CoreResult<Self> {
        policy.validate()?;
        Ok(Self { policy, ..Self::new() })
    }

    /// Number of bytes stored.
    pub fn len(&self) -> usize { self.data.len() }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Number of bytes reserved (always `>= len()`, 0 when unallocated).
    pub fn capacity(&self) -> usize { self.capacity }

    /// Policy driving growth.
    pub fn policy(&self) -> GrowthPolicy { self.policy }

    /// Reallocations performed since creation or the last release.
    pub fn growths(&self) -> usize { self.growths }

    /// Appends `byte` and returns its offset.
    ///
    /// On error the buffer is left untouched.
    pub fn push(&mut self, byte: u8) -> CoreResult<usize> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }
        let at = self.data.len();
        self.data.push(byte);
        Ok(at)
    }

    /// Appends every byte of `bytes`, stopping at the first failure.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> CoreResult<()> {
        for &b in bytes {
            self.push(b)?;
        }
        Ok(())
    }

    /// Byte at `offset`, if it was written.
    pub fn get(&self, offset: usize) -> Option<u8> { self.data.get(offset).copied() }

    /// Byte at `offset`, or `OutOfBounds`.
    pub fn read(&self, offset: usize) -> CoreResult<u8> {
        self.get(offset).ok_or(CoreError::OutOfBounds { offset, len: self.len() })
    }

    /// Written bytes, in append order.
    pub fn as_slice(&self) -> &[u8] { &self.data }

    /// Iterate over the written bytes.
    pub fn iter(&self) -> Copied<slice::Iter<'_, u8>> { self.data.iter().copied() }

    /// Forget the contents but keep the allocation.
    pub fn clear(&mut self) { self.data.clear(); }

    /// Copy of the buffer with the same logical capacity, or `OutOfMemory`.
    ///
    /// `Clone` aborts on allocation failure like any `Vec`; use this when
    /// the failure must be reported instead.
    pub fn try_clone(&self) -> CoreResult<Self> {
        let mut data = Vec::new();
        if data.try_reserve_exact(self.capacity).is_err() {
            return Err(CoreError::OutOfMemory { requested: self.capacity });
        }
        data.extend_from_slice(&self.data);
        Ok(Self { data, capacity: self.capacity, policy: self.policy, growths: self.growths })
    }

    /// Free the storage and return to the initial empty state.
    ///
    /// Calling it on an empty or already released buffer does nothing.
    pub fn release(&mut self) {
        if self.capacity != 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(capacity = self.capacity, len = self.data.len(), "byte buffer released");
        }
        self.data = Vec::new();
        self.capacity = 0;
        self.growths = 0;
    }

    fn grow(&mut self) -> CoreResult<()> {
        let old = self.capacity;
        let new = self.policy.next_capacity(old)?;
        debug_assert!(new > old);

        // `data.len() == old` here, so this reserves exactly `new` slots.
        // `new <= MAX_CAPACITY` is checked by the policy, so the only way
        // left for the reservation to fail is the allocator refusing it.
        if self.data.try_reserve_exact(new - self.data.len()).is_err() {
            #[cfg(feature = "tracing")]
            tracing::warn!(old, requested = new, "byte buffer allocation failed");
            return Err(CoreError::OutOfMemory { requested: new });
        }

        self.capacity = new;
        self.growths += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(old, new, len = self.data.len(), "byte buffer grown");
        Ok(())
    }
}

impl Default for ByteBuffer {
    fn default() -> Self { Self::new() }
}

/// Aborts if the copy cannot be allocated; see [`ByteBuffer::try_clone`].
impl Clone for ByteBuffer {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self { data, capacity: self.capacity, policy: self.policy, growths: self.growths }
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Two buffers are equal when they hold the same bytes.
impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool { self.data == other.data }
}

impl Eq for ByteBuffer {}

impl Index<usize> for ByteBuffer {
    type Output = u8;

    fn index(&self, offset: usize) -> &u8 {
        match self.data.get(offset) {
            Some(b) => b,
            None => panic!("offset {offset} out of bounds (len {})", self.data.len()),
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] { &self.data }
}

impl<'a> IntoIterator for &'a ByteBuffer {
    type Item = u8;
    type IntoIter = Copied<slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/* ─────────────────────────── Tests ─────────────────────────── */
