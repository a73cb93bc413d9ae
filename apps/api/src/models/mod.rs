pub mod application;
pub mod tracker;

pub use application::{ApplicationPatch, JobApplication, JobStatus, NewApplication};
pub use tracker::TrackerState;
