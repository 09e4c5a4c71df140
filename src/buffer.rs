//! Bounds-checked view over a caller-owned scratch slice.

use anyhow::{ensure, Result};

/// Mutable view pairing a borrowed slice with the capacity the caller
/// declared for it.
///
/// The original interface passes a raw pointer and a separately declared
/// length, trusting the caller to keep them consistent. The view keeps both
/// together instead: construction fails if the declared capacity exceeds the
/// real slice, and every write is checked against the declared capacity,
/// which may be shorter than the slice itself.
#[derive(Debug)]
pub struct ScratchBuffer<'a> {
    declared_len: usize,
    data: &'a mut [i32],
}

impl<'a> ScratchBuffer<'a> {
    /// Wraps `data`, trusting it for `declared_len` elements.
    pub fn new(declared_len: u32, data: &'a mut [i32]) -> Result<ScratchBuffer<'a>> {
        let declared_len = declared_len as usize;
        ensure!(
            declared_len <= data.len(),
            "declared capacity {} exceeds real buffer length {}",
            declared_len,
            data.len()
        );
        Ok(ScratchBuffer { declared_len, data })
    }

    pub fn declared_len(&self) -> usize {
        self.declared_len
    }

    /// Stores `value` at `index`, refusing anything at or past the declared
    /// capacity.
    pub fn put(&mut self, index: usize, value: i32) -> Result<()> {
        ensure!(
            index < self.declared_len,
            "write at index {} past declared capacity {}",
            index,
            self.declared_len
        );
        trace!("buffer[{}] = {}", index, value);
        self.data[index] = value;
        Ok(())
    }

    /// Reads `index`, or `None` past the declared capacity.
    pub fn get(&self, index: usize) -> Option<i32> {
        if index < self.declared_len {
            self.data.get(index).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScratchBuffer;

    #[test]
    fn put_and_get_within_declared_capacity() {
        let mut data = [0; 4];
        let mut buf = ScratchBuffer::new(4, &mut data).unwrap();
        buf.put(0, 10).unwrap();
        buf.put(3, -3).unwrap();
        assert_eq!(buf.get(0), Some(10));
        assert_eq!(buf.get(3), Some(-3));
        assert_eq!(data, [10, 0, 0, -3]);
    }

    #[test]
    fn declared_capacity_may_undersell_the_slice() {
        let mut data = [0; 8];
        let mut buf = ScratchBuffer::new(4, &mut data).unwrap();
        assert_eq!(buf.declared_len(), 4);
        assert!(buf.put(3, 1).is_ok());
        // Indices 4..8 exist in the slice but are out of contract.
        assert!(buf.put(4, 1).is_err());
        assert_eq!(buf.get(4), None);
        assert_eq!(data[4..], [0; 4]);
    }

    #[test]
    fn overclaimed_capacity_is_rejected() {
        let mut data = [0; 4];
        assert!(ScratchBuffer::new(5, &mut data).is_err());
    }
}
