//! In-memory [`MapSurface`] that records every command it receives.
//!
//! Useful for asserting what a map widget would have been told to draw
//! without a widget.
//!
//! This module is part of the public API on purpose: applications embedding
//! [`ViewSync`](crate::sync::ViewSync) or the [`app`](crate::app) controller
//! can drive them against a [`RecordingMap`] in their own tests, and this
//! crate's integration tests do the same. It has no dependencies and is
//! never used by the store.

use crate::sync::map::{CameraTarget, MapSurface, Marker};

/// One command received by a [`RecordingMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    Add(Marker),
    Clear,
    Focus(CameraTarget),
}

/// Map double that keeps the live marker set and a log of commands.
#[derive(Debug, Default, Clone)]
pub struct RecordingMap {
    markers: Vec<Marker>,
    camera: Option<CameraTarget>,
    commands: Vec<MapCommand>,
}

impl RecordingMap {
    /// Markers currently drawn.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Where the camera points after the last focus command.
    #[must_use]
    pub const fn camera(&self) -> Option<&CameraTarget> {
        self.camera.as_ref()
    }

    /// Every command in arrival order.
    #[must_use]
    pub fn commands(&self) -> &[MapCommand] {
        &self.commands
    }
}

impl MapSurface for RecordingMap {
    fn add_marker(&mut self, marker: &Marker) {
        self.markers.push(marker.clone());
        self.commands.push(MapCommand::Add(marker.clone()));
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.commands.push(MapCommand::Clear);
    }

    fn focus_camera(&mut self, target: &CameraTarget) {
        self.camera = Some(target.clone());
        self.commands.push(MapCommand::Focus(target.clone()));
    }
}
