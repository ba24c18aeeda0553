//! Domain records and the data sources that produce them.

pub mod loader;
pub mod model;
pub mod source;
