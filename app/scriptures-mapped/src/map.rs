use geoplace::{Bounds, Geoplace, LatLng, Viewport};
use serde::Serialize;

/// The map widget markers are plotted on.
pub trait MapView {
    fn clear_markers(&mut self);
    fn add_marker(&mut self, place: &Geoplace);
    fn pan_to(&mut self, position: LatLng);
    fn set_zoom(&mut self, zoom: f64);
    /// Picks the zoom that shows all of `bounds`.
    fn fit_bounds(&mut self, bounds: Bounds);
}

pub fn apply_viewport(map: &mut impl MapView, viewport: Viewport) {
    match viewport {
        Viewport::Unchanged => {}
        Viewport::Focus { center, zoom } => {
            map.set_zoom(zoom);
            map.pan_to(center);
        }
        Viewport::Fit { bounds, center } => {
            map.pan_to(center);
            map.fit_bounds(bounds);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum MapCommand {
    ClearMarkers,
    AddMarker { position: LatLng, label: String },
    PanTo { position: LatLng },
    SetZoom { zoom: f64 },
    FitBounds { bounds: Bounds },
}

/// Records map calls so a host page can replay them.
#[derive(Debug, Default)]
pub struct CommandMap {
    commands: Vec<MapCommand>,
}

impl CommandMap {
    pub fn commands(&self) -> &[MapCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<MapCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl MapView for CommandMap {
    fn clear_markers(&mut self) {
        self.commands.push(MapCommand::ClearMarkers);
    }

    fn add_marker(&mut self, place: &Geoplace) {
        self.commands.push(MapCommand::AddMarker {
            position: place.position(),
            label: place.label.clone(),
        });
    }

    fn pan_to(&mut self, position: LatLng) {
        self.commands.push(MapCommand::PanTo { position });
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.commands.push(MapCommand::SetZoom { zoom });
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        self.commands.push(MapCommand::FitBounds { bounds });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_zooms_then_pans() {
        let mut map = CommandMap::default();
        let center = LatLng::new(31.77, 35.23);
        apply_viewport(&mut map, Viewport::Focus { center, zoom: 7.0 });
        assert_eq!(
            map.commands(),
            &[
                MapCommand::SetZoom { zoom: 7.0 },
                MapCommand::PanTo { position: center }
            ]
        );
    }

    #[test]
    fn unchanged_does_nothing() {
        let mut map = CommandMap::default();
        apply_viewport(&mut map, Viewport::Unchanged);
        assert!(map.commands().is_empty());
    }

    #[test]
    fn commands_serialize_tagged() -> anyhow::Result<()> {
        let json = serde_json::to_string(&MapCommand::SetZoom { zoom: 6.0 })?;
        assert_eq!(json, r#"{"command":"setZoom","zoom":6.0}"#);
        let json = serde_json::to_string(&MapCommand::ClearMarkers)?;
        assert_eq!(json, r#"{"command":"clearMarkers"}"#);
        Ok(())
    }

    #[test]
    fn take_commands_drains() {
        let mut map = CommandMap::default();
        map.clear_markers();
        assert_eq!(map.take_commands(), vec![MapCommand::ClearMarkers]);
        assert!(map.commands().is_empty());
    }
}
