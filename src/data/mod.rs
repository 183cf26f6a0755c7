//! Trial-structured data containers.

mod dataset;

pub use dataset::{DataError, Dataset};
