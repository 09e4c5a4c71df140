use anyhow::Result;

use crate::buffer::ScratchBuffer;
use crate::MIN_BUFFER_SIZE;

/// Persistent fixture state, owned by the caller and passed by mutable
/// reference to every operation.
///
/// `counter` replaces the original file-scope static; `k` replaces the
/// function-local static inside `baz`. Both start at zero and live as long
/// as the `Storage` value does, so state carries over from one call to the
/// next exactly as static storage would.
#[derive(Debug, Default)]
pub struct Storage {
    counter: i32,
    // Initialized once and never reassigned.
    k: i32,
}

impl Storage {
    pub fn new() -> Storage {
        Storage { counter: 0, k: 0 }
    }

    /// Current counter value.
    pub fn counter(&self) -> i32 {
        self.counter
    }

    /// Bumps the counter and returns `k + 1`.
    ///
    /// `k` is never reassigned after construction, so this returns 1 on
    /// every call for the lifetime of the state.
    pub fn baz(&mut self) -> i32 {
        self.counter += 1;
        self.k + 1
    }

    /// Fills `buffer` with the fixture's write sequence.
    ///
    /// `buffer_size` is the capacity the caller claims for `buffer`. Claimed
    /// sizes below [`MIN_BUFFER_SIZE`] return early with no writes and no
    /// counter change. A claimed size larger than the real slice is an
    /// error, reported before anything is touched. The highest index written
    /// is [`MAX_INDEX_WRITTEN`](crate::MAX_INDEX_WRITTEN).
    pub fn entry(&mut self, buffer_size: u32, buffer: &mut [i32]) -> Result<()> {
        if buffer_size < MIN_BUFFER_SIZE {
            debug!(
                "entry: buffer_size {} below minimum {}, leaving buffer untouched",
                buffer_size, MIN_BUFFER_SIZE
            );
            return Ok(());
        }

        let mut out = ScratchBuffer::new(buffer_size, buffer)?;

        let v = self.baz();
        out.put(0, v)?;
        let v = self.baz();
        out.put(1, v)?;
        let v = self.baz() + 1;
        out.put(2, v)?;
        // The return value names the index here, so this lands on whatever
        // `baz` returns (always 1), overwriting the second write above.
        let idx = self.baz() as usize;
        out.put(idx, 4)?;

        out.put(7, self.counter)?;
        self.counter -= 1;
        self.baz();
        out.put(8, self.counter)?;

        debug!("entry: counter is {} after fill", self.counter);
        Ok(())
    }
}
