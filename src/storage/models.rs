//! Storage record models for the persistence layer.
//!
//! These are the rows of the persisted `locations` collection. Field names
//! follow the column names of the table (`location_name` rather than `name`)
//! so the on-disk document reads the same as the original schema.

use crate::domain::{Location, LocationDraft};
use serde::{Deserialize, Serialize};

/// One row of the `locations` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Store-assigned primary key.
    pub id: i64,

    /// Display name of the location.
    pub location_name: String,

    /// Postal address, may be empty.
    #[serde(default)]
    pub address: String,

    /// Latitude in decimal degrees.
    pub latitude: f64,

    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl LocationRecord {
    /// Creates a row for `draft` under the given primary key.
    #[must_use]
    pub fn new(id: i64, draft: &LocationDraft) -> Self {
        Self {
            id,
            location_name: draft.name.clone(),
            address: draft.address.clone(),
            latitude: draft.latitude,
            longitude: draft.longitude,
        }
    }

    /// Replaces every mutable column with the draft's values. The id is kept.
    pub fn apply(&mut self, draft: &LocationDraft) {
        self.location_name.clone_from(&draft.name);
        self.address.clone_from(&draft.address);
        self.latitude = draft.latitude;
        self.longitude = draft.longitude;
    }
}

impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        Self {
            id: record.id,
            name: record.location_name,
            address: record.address,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}
