//! Decoded audio buffers and time-slice selection

pub mod buffer;
pub mod selector;

pub use buffer::{AudioInfo, ChannelBuffers};
pub use selector::{TimeWindow, sample_range, select};
