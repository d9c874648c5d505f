use serde::Serialize;

/// Altitude, in meters, covered by one zoom level.
pub const ZOOM_RATIO: f64 = 450.0;
pub const MIN_ZOOM_LEVEL: f64 = 6.0;
pub const MAX_ZOOM_LEVEL: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Smallest box covering a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub const fn point(at: LatLng) -> Self {
        Self {
            south_west: at,
            north_east: at,
        }
    }

    pub fn extend(&mut self, at: LatLng) {
        self.south_west.lat = self.south_west.lat.min(at.lat);
        self.south_west.lng = self.south_west.lng.min(at.lng);
        self.north_east.lat = self.north_east.lat.max(at.lat);
        self.north_east.lng = self.north_east.lng.max(at.lng);
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Where the map should look after the markers of a chapter are placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Viewport {
    /// No markers: leave the map alone.
    Unchanged,
    Focus { center: LatLng, zoom: f64 },
    /// Fitting a zoom to `bounds` is up to the map.
    Fit { bounds: Bounds, center: LatLng },
}

/// Zoom level for a camera altitude, unclamped.
pub fn altitude_zoom(altitude: f64) -> f64 {
    (altitude / ZOOM_RATIO).round()
}

/// [`altitude_zoom`] kept within the levels used for a single marker.
pub fn focus_zoom(altitude: f64) -> f64 {
    altitude_zoom(altitude).clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
}
