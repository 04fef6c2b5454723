pub mod banding;
pub mod classifier;
pub mod composer;
pub mod engine;
pub mod types;
