use std::{fmt, str::FromStr};

use crate::error::ValidationError;

pub const MAX_LOCATIONS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Captures a coordinate pair, rounded to 4 decimal places.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || !(-90.0..=90.0).contains(&latitude)
            || !(-180.0..=180.0).contains(&longitude)
        {
            return Err(ValidationError::InvalidCoordinates(format!(
                "{latitude},{longitude}"
            )));
        }
        Ok(Self {
            latitude: round4(latitude),
            longitude: round4(longitude),
        })
    }

    pub fn label(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl FromStr for Location {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidCoordinates(value.trim().to_string());
        let (lat, lon) = value.split_once(',').ok_or_else(invalid)?;
        let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
        let lon = lon.trim().parse::<f64>().map_err(|_| invalid())?;
        Self::new(lat, lon)
    }
}

fn round4(value: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0 so labels never read "-0".
    (value * 10_000.0).round() / 10_000.0 + 0.0
}

/// Locations picked for comparison, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    locations: Vec<Location>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, location: Location) -> Result<usize, ValidationError> {
        if self.locations.len() >= MAX_LOCATIONS {
            return Err(ValidationError::SelectionFull { max: MAX_LOCATIONS });
        }
        self.locations.push(location);
        Ok(self.locations.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Option<Location> {
        (index < self.locations.len()).then(|| self.locations.remove(index))
    }

    pub fn clear(&mut self) {
        self.locations.clear();
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.locations.len() >= MAX_LOCATIONS
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lon: f64) -> Location {
        Location::new(lat, lon).expect("valid location")
    }

    #[test]
    fn new_rounds_to_four_decimals() {
        let location = loc(12.971_598_7, 77.594_562_3);
        assert_eq!(location.latitude, 12.9716);
        assert_eq!(location.longitude, 77.5946);
        assert_eq!(location.label(), "12.9716,77.5946");
    }

    #[test]
    fn tiny_negative_coordinate_labels_as_zero() {
        let location = loc(-0.000_01, 10.0);
        assert_eq!(location.label(), "0,10");
        assert_eq!(location.to_string(), "0, 10");
    }

    #[test]
    fn new_rejects_out_of_range_coordinates() {
        assert!(Location::new(91.0, 0.0).is_err());
        assert!(Location::new(0.0, -180.5).is_err());
        assert!(Location::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn parses_lat_lon_pair() {
        let location: Location = " 59.3293 , 18.0686 ".parse().expect("parse");
        assert_eq!(location, loc(59.3293, 18.0686));
        assert!("59.3".parse::<Location>().is_err());
        assert!("north,east".parse::<Location>().is_err());
    }

    #[test]
    fn third_location_is_rejected_and_selection_unchanged() {
        let mut selection = Selection::new();
        selection.add(loc(1.0, 1.0)).expect("first");
        selection.add(loc(2.0, 2.0)).expect("second");

        let err = selection.add(loc(3.0, 3.0)).expect_err("cap reached");
        assert_eq!(err, ValidationError::SelectionFull { max: 2 });
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.locations()[1], loc(2.0, 2.0));
    }

    #[test]
    fn remove_and_clear() {
        let mut selection = Selection::new();
        selection.add(loc(1.0, 1.0)).expect("first");
        selection.add(loc(2.0, 2.0)).expect("second");

        assert_eq!(selection.remove(5), None);
        assert_eq!(selection.remove(0), Some(loc(1.0, 1.0)));
        assert_eq!(selection.locations(), &[loc(2.0, 2.0)]);

        selection.clear();
        assert!(selection.is_empty());
    }
}
