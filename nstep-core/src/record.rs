//! Records of learning statistics.
//!
//! Learners report what happened on each trajectory of a batch as a [`Record`]
//! written to a [`Recorder`]. [`BufferedRecorder`] keeps the records in memory,
//! [`NullRecorder`] discards them.
//!
//! ```rust
//! use nstep_core::record::{BufferedRecorder, Record, RecordValue, Recorder};
//!
//! let mut recorder = BufferedRecorder::new();
//! let mut record = Record::from_scalar("episode", 0.0);
//! record.insert("episode_return", RecordValue::Scalar(-3.0));
//! recorder.write(record);
//!
//! assert_eq!(recorder.len(), 1);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
