//! Map collaborator contract and camera framing.
//!
//! The map widget itself lives outside this crate. It only has to accept the
//! three commands of [`MapSurface`]; everything it is told to draw is computed
//! here from [`Location`] values.

use crate::domain::Location;

/// Zoom level used when the camera focuses on a single point.
pub const SINGLE_POINT_ZOOM: f32 = 12.0;

/// Padding, in pixels, between framed markers and the map edge.
pub const BOUNDS_PADDING_PX: u32 = 100;

/// A single point rendered on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    /// Shown as the info window heading.
    pub title: String,
    /// Two-line description under the title.
    pub snippet: String,
}

impl Marker {
    /// Builds the marker for a location: titled by name, described by
    /// address and coordinates.
    #[must_use]
    pub fn for_location(location: &Location) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            title: location.name.clone(),
            snippet: location.snippet(),
        }
    }
}

/// Where the camera should look.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraTarget {
    /// Center on one coordinate at a fixed zoom.
    Point {
        latitude: f64,
        longitude: f64,
        zoom: f32,
    },

    /// Fit a latitude/longitude box, keeping `padding_px` free at the edges.
    Bounds {
        south: f64,
        west: f64,
        north: f64,
        east: f64,
        padding_px: u32,
    },
}

impl CameraTarget {
    /// Focus on a single coordinate at [`SINGLE_POINT_ZOOM`].
    #[must_use]
    pub const fn point(latitude: f64, longitude: f64) -> Self {
        Self::Point {
            latitude,
            longitude,
            zoom: SINGLE_POINT_ZOOM,
        }
    }

    /// Returns the region that frames every coordinate, or `None` when there
    /// is nothing to frame.
    ///
    /// A single coordinate yields a point focus. Two or more yield the
    /// bounding box over all of them with [`BOUNDS_PADDING_PX`] padding.
    ///
    /// # Examples
    ///
    /// ```
    /// use spotfinder::sync::CameraTarget;
    ///
    /// let region = CameraTarget::framing([(43.0, -79.0), (43.1, -79.1)]);
    /// assert_eq!(
    ///     region,
    ///     Some(CameraTarget::Bounds { south: 43.0, west: -79.1, north: 43.1, east: -79.0, padding_px: 100 })
    /// );
    /// assert_eq!(CameraTarget::framing(std::iter::empty()), None);
    /// ```
    pub fn framing(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut points = points.into_iter();
        let (first_lat, first_lng) = points.next()?;

        let mut south = first_lat;
        let mut north = first_lat;
        let mut west = first_lng;
        let mut east = first_lng;
        let mut count = 1_usize;

        for (lat, lng) in points {
            south = south.min(lat);
            north = north.max(lat);
            west = west.min(lng);
            east = east.max(lng);
            count += 1;
        }

        if count == 1 {
            return Some(Self::point(first_lat, first_lng));
        }

        Some(Self::Bounds {
            south,
            west,
            north,
            east,
            padding_px: BOUNDS_PADDING_PX,
        })
    }
}

/// Commands the map widget accepts.
///
/// Implemented by the embedding UI. The terminal front-end uses
/// [`crate::ui::TerminalMap`].
pub trait MapSurface {
    /// Draws one marker without touching existing ones.
    fn add_marker(&mut self, marker: &Marker);

    /// Removes every marker.
    fn clear_markers(&mut self);

    /// Moves the camera.
    fn focus_camera(&mut self, target: &CameraTarget);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationDraft;

    #[test]
    fn marker_text_comes_from_the_location() {
        let location = Location::from_draft(
            1,
            LocationDraft::new("CN Tower", "290 Bremner Blvd, Toronto, ON", 43.6426, -79.3871),
        );
        let marker = Marker::for_location(&location);

        assert_eq!(marker.title, "CN Tower");
        assert_eq!(marker.snippet, "290 Bremner Blvd, Toronto, ON\nLat: 43.6426, Lng: -79.3871");
        assert_eq!((marker.latitude, marker.longitude), (43.6426, -79.3871));
    }

    #[test]
    fn one_point_is_a_zoomed_focus() {
        assert_eq!(
            CameraTarget::framing([(43.7, -79.4)]),
            Some(CameraTarget::Point { latitude: 43.7, longitude: -79.4, zoom: 12.0 })
        );
    }

    #[test]
    fn box_covers_every_point() {
        let region = CameraTarget::framing([(43.6, -79.5), (43.9, -78.9), (43.5, -79.2)]);
        assert_eq!(
            region,
            Some(CameraTarget::Bounds {
                south: 43.5,
                west: -79.5,
                north: 43.9,
                east: -78.9,
                padding_px: BOUNDS_PADDING_PX,
            })
        );
    }

    #[test]
    fn identical_points_still_get_a_box() {
        let region = CameraTarget::framing([(43.9459, -78.8965), (43.9459, -78.8965)]);
        assert!(matches!(region, Some(CameraTarget::Bounds { .. })));
    }
}
