// Tracker core: the state manager that owns `TrackerState` and writes it
// through the storage slot, plus input validation for the HTTP boundary.

pub mod handlers;
pub mod manager;
pub mod validation;

pub use manager::JobTracker;
