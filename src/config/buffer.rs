// Growable buffer module
// A contiguous, append-only buffer with explicit, fallible growth

use super::error::ConfigError;

/// Initial number of elements reserved on the first growth
const MIN_CAPACITY: usize = 8;

/// Append-only contiguous buffer.
///
/// Growth doubles the capacity (or grows by the requested amount, whichever is
/// larger) and reports allocation failure as [`ConfigError::OutOfMemory`]
/// instead of aborting. Any growth may move the elements, so callers keep
/// indices into the buffer, never references across an append.
#[derive(Debug, Clone)]
pub struct GrowBuffer<T> {
    items: Vec<T>,
}

impl<T> GrowBuffer<T> {
    /// Create an empty buffer without allocating
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Make room for at least `min_extra` more elements
    pub fn ensure_capacity(&mut self, min_extra: usize) -> Result<(), ConfigError> {
        let required = self
            .items
            .len()
            .checked_add(min_extra)
            .ok_or(ConfigError::OutOfMemory)?;
        if required <= self.items.capacity() {
            return Ok(());
        }

        let doubled = self.items.capacity().saturating_mul(2).max(MIN_CAPACITY);
        let target = doubled.max(required);
        self.items.try_reserve_exact(target - self.items.len())?;
        Ok(())
    }

    /// Append one element and return its index
    pub fn append(&mut self, item: T) -> Result<usize, ConfigError> {
        self.ensure_capacity(1)?;
        let index = self.items.len();
        self.items.push(item);
        Ok(index)
    }

    /// Number of elements in use
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements allocated
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Copy> GrowBuffer<T> {
    /// Append a run of elements and return the index of the first one
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<usize, ConfigError> {
        self.ensure_capacity(items.len())?;
        let index = self.items.len();
        self.items.extend_from_slice(items);
        Ok(index)
    }
}

impl<T> Default for GrowBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_indices_in_order() {
        let mut buf = GrowBuffer::new();
        assert_eq!(buf.append('a').unwrap(), 0);
        assert_eq!(buf.append('b').unwrap(), 1);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.get(1), Some(&'b'));
        assert_eq!(buf.get(2), None);
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut buf = GrowBuffer::new();
        assert_eq!(buf.capacity(), 0);
        buf.append(1u32).unwrap();
        assert_eq!(buf.capacity(), MIN_CAPACITY);

        for i in 0..MIN_CAPACITY as u32 {
            buf.append(i).unwrap();
        }
        assert_eq!(buf.capacity(), MIN_CAPACITY * 2);
        assert!(buf.len() <= buf.capacity());
    }

    #[test]
    fn test_ensure_capacity_honors_large_requests() {
        let mut buf: GrowBuffer<u8> = GrowBuffer::new();
        buf.ensure_capacity(100).unwrap();
        assert!(buf.capacity() >= 100);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_extend_from_slice() {
        let mut buf = GrowBuffer::new();
        buf.append(0u8).unwrap();
        let start = buf.extend_from_slice(b"abc").unwrap();
        assert_eq!(start, 1);
        assert_eq!(buf.as_slice(), b"\0abc");
    }

    #[test]
    fn test_overflowing_request_is_out_of_memory() {
        let mut buf = GrowBuffer::new();
        buf.append(0u8).unwrap();
        let err = buf.ensure_capacity(usize::MAX).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfMemory));
    }
}
