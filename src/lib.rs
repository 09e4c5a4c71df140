//! Safe rendition of a small C storage-class fixture.
//!
//! The original fixture keeps everything in static storage: a file-scope
//! counter with internal linkage, a function-local `static` that is
//! initialized once and never reassigned, and an `entry` function taking a
//! raw pointer plus a separately declared length. Here that storage is made
//! explicit. All persistent state lives in [`Storage`], which the caller owns
//! and threads through every operation, and the output buffer becomes a
//! bounds-checked [`ScratchBuffer`] view over a borrowed slice.
//!
//! The observable contract is unchanged: `entry` refuses buffers declared
//! smaller than [`MIN_BUFFER_SIZE`], performs the same fixed write sequence,
//! and never touches an index past [`MAX_INDEX_WRITTEN`].

#[macro_use]
extern crate log;

pub mod buffer;
pub mod diagnostics;
mod state;

pub use self::buffer::ScratchBuffer;
pub use self::state::Storage;

/// Externally visible constant from the fixture, fixed at 9 for the lifetime
/// of the process.
pub const VISIBLE_EVERYWHERE: i32 = 9;

/// [`Storage::entry`] leaves buffers declared smaller than this untouched.
pub const MIN_BUFFER_SIZE: u32 = 10;

/// Highest buffer index [`Storage::entry`] ever writes.
pub const MAX_INDEX_WRITTEN: usize = 8;
