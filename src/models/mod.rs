pub mod shift;
pub mod worker;

pub use shift::{DurationLimits, Shift};
pub use worker::Worker;
