pub mod batch;
pub mod error;
pub mod model;
pub mod process;
