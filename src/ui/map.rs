//! Text stand-in for the map widget.
//!
//! [`TerminalMap`] implements [`MapSurface`] by printing each command as a
//! line of text. Write errors are logged and otherwise ignored: a map that
//! fails to draw must not interrupt the caller.

use crate::sync::{CameraTarget, MapSurface, Marker};
use std::io::{self, Write};

/// Map surface that narrates marker and camera commands to a writer.
#[derive(Debug)]
pub struct TerminalMap<W> {
    out: W,
    marker_count: usize,
}

impl TerminalMap<io::Stdout> {
    /// A map printing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalMap<W> {
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out,
            marker_count: 0,
        }
    }

    /// Number of markers currently drawn.
    #[must_use]
    pub const fn marker_count(&self) -> usize {
        self.marker_count
    }

    /// Consumes the map and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "failed to draw map command");
        }
    }
}

impl<W: Write> MapSurface for TerminalMap<W> {
    fn add_marker(&mut self, marker: &Marker) {
        self.marker_count += 1;
        let snippet = marker.snippet.replace('\n', "\n      ");
        self.emit(format_args!(
            "[map] + {} @ ({:?}, {:?})\n      {}\n",
            marker.title, marker.latitude, marker.longitude, snippet
        ));
    }

    fn clear_markers(&mut self) {
        if self.marker_count == 0 {
            return;
        }
        self.marker_count = 0;
        self.emit(format_args!("[map] markers cleared\n"));
    }

    fn focus_camera(&mut self, target: &CameraTarget) {
        match target {
            CameraTarget::Point {
                latitude,
                longitude,
                zoom,
            } => self.emit(format_args!(
                "[map] camera centered on ({latitude:?}, {longitude:?}) at zoom {zoom}\n"
            )),
            CameraTarget::Bounds {
                south,
                west,
                north,
                east,
                padding_px,
            } => self.emit(format_args!(
                "[map] camera framing ({south:?}, {west:?}) to ({north:?}, {east:?}), padding {padding_px}px\n"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker() -> Marker {
        Marker {
            latitude: 43.0,
            longitude: -79.0,
            title: "A".to_string(),
            snippet: "1 Main St\nLat: 43.0, Lng: -79.0".to_string(),
        }
    }

    #[test]
    fn narrates_commands() {
        let mut map = TerminalMap::new(Vec::new());
        map.add_marker(&marker());
        map.focus_camera(&CameraTarget::point(43.0, -79.0));
        map.clear_markers();

        assert_eq!(map.marker_count(), 0);
        let text = String::from_utf8(map.into_inner()).unwrap();
        assert_eq!(
            text,
            "[map] + A @ (43.0, -79.0)\n      1 Main St\n      Lat: 43.0, Lng: -79.0\n\
             [map] camera centered on (43.0, -79.0) at zoom 12\n\
             [map] markers cleared\n"
        );
    }

    #[test]
    fn clearing_an_empty_map_is_silent() {
        let mut map = TerminalMap::new(Vec::new());
        map.clear_markers();
        assert!(map.into_inner().is_empty());
    }
}
