//! Writes emitted components into a per-component output directory.

pub mod sink;
pub mod writer;

pub use sink::{FsSink, TextSink};
pub use writer::{ArtifactWriter, WriteError, WrittenArtifact, COMPONENTS_DIR};
