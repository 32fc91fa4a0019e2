pub mod location;
pub mod parameter;
pub mod series;

pub use location::{Location, MAX_LOCATIONS, Selection};
pub use parameter::Parameter;
pub use series::DailySeries;
