//! Geographic coordinate in decimal degrees

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parse a `"lat,lng"` pair as used in configuration
    pub fn parse_pair(s: &str) -> Result<Self, DomainError> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| DomainError::ValidationError(format!("expected \"lat,lng\", got {s:?}")))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::ValidationError(format!("invalid latitude {lat:?}")))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| DomainError::ValidationError(format!("invalid longitude {lng:?}")))?;
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}
