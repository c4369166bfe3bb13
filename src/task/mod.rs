//! Async helpers on the tokio runtime.
//!
//! Everything here suspends only inside the returned futures. None of the
//! helpers offers cancellation; drop the future (or wrap it in
//! `tokio::time::timeout`) instead. [`FrameRecorder::stop`] is the exception.

pub mod frames;
pub mod parallel;
pub mod poll;
pub mod sequence;
pub mod wait;

pub use frames::{record_animation_frames, FrameRecorder};
pub use parallel::parallel;
pub use poll::{poll, PollOptions};
pub use sequence::{async_sequentializer, pipe_async_functions, AsyncPipe};
pub use wait::{wait_for_time, wait_forever};
