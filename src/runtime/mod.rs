//! Runtime module
//!
//! Spawned-task and stream handles used by the GitHub fetch layer.

pub mod async_task;

pub use async_task::{AsyncStream, AsyncTask, PageSink, TaskDropped};
