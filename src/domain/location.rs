//! Location domain model.
//!
//! A [`Location`] is one named point of interest: a store-assigned id, a name,
//! a free-text postal address and a pair of coordinates. Values returned by the
//! store are disposable snapshots; mutating one never touches storage.

use serde::{Deserialize, Serialize};

/// A stored point of interest.
///
/// # Fields
///
/// - `id`: Store-assigned surrogate key, immutable once assigned
/// - `name`: Display name, not required to be unique
/// - `address`: Postal address, may be empty
/// - `latitude` / `longitude`: Decimal degrees, not range checked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Builds a location from an assigned id and the draft's fields.
    #[must_use]
    pub fn from_draft(id: i64, draft: LocationDraft) -> Self {
        Self {
            id,
            name: draft.name,
            address: draft.address,
            latitude: draft.latitude,
            longitude: draft.longitude,
        }
    }

    /// Returns the two-line marker description.
    ///
    /// # Examples
    ///
    /// ```
    /// use spotfinder::Location;
    ///
    /// let tower = Location {
    ///     id: 1,
    ///     name: "CN Tower".to_string(),
    ///     address: "290 Bremner Blvd, Toronto, ON".to_string(),
    ///     latitude: 43.6426,
    ///     longitude: -79.3871,
    /// };
    /// assert_eq!(
    ///     tower.snippet(),
    ///     "290 Bremner Blvd, Toronto, ON\nLat: 43.6426, Lng: -79.3871"
    /// );
    /// ```
    #[must_use]
    pub fn snippet(&self) -> String {
        format!(
            "{}\nLat: {:?}, Lng: {:?}",
            self.address, self.latitude, self.longitude
        )
    }

    /// Returns the coordinate pair as shown in list rows, e.g. `(43.0, -79.0)`.
    #[must_use]
    pub fn coordinates_label(&self) -> String {
        format!("({:?}, {:?})", self.latitude, self.longitude)
    }

    /// Returns the coordinates as a `(latitude, longitude)` tuple.
    #[must_use]
    pub const fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Returns the mutable fields of this location as a draft.
    #[must_use]
    pub fn to_draft(&self) -> LocationDraft {
        LocationDraft {
            name: self.name.clone(),
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// The caller-supplied fields of a location, without an id.
///
/// Passed to `create` and `update`. Input widgets hand over already-trimmed
/// strings and parsed numbers, so no validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDraft {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationDraft {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Returns `true` when both coordinates are finite numbers.
    ///
    /// `NaN` and infinities have no JSON representation and are never stored.
    #[must_use]
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_coordinates_are_detected() {
        assert!(LocationDraft::new("A", "x", -90.0, 180.0).has_finite_coordinates());
        assert!(!LocationDraft::new("A", "x", f64::NAN, 1.0).has_finite_coordinates());
        assert!(!LocationDraft::new("A", "x", 1.0, f64::NEG_INFINITY).has_finite_coordinates());
    }

    #[test]
    fn draft_round_trips_through_location() {
        let draft = LocationDraft::new("A", "1 Main St", 43.0, -79.0);
        let location = Location::from_draft(7, draft.clone());
        assert_eq!(location.id, 7);
        assert_eq!(location.to_draft(), draft);
    }

    #[test]
    fn labels_keep_a_decimal_point() {
        let location = Location::from_draft(1, LocationDraft::new("A", "", 43.0, -79.0));
        assert_eq!(location.coordinates_label(), "(43.0, -79.0)");
        assert_eq!(location.snippet(), "\nLat: 43.0, Lng: -79.0");
        assert_eq!(location.coordinates(), (43.0, -79.0));
    }
}
