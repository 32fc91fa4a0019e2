pub mod chart;
pub mod controls;
pub mod probability;
pub mod prompt;
pub mod summary;

mod shared;
