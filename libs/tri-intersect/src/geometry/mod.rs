//! Value types for the query inputs.

pub mod segment;
pub mod triangle;

pub use segment::Segment;
pub use triangle::Triangle;
