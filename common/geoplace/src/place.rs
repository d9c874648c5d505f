use serde::Serialize;

use crate::{
    annotation::Annotation,
    viewport::{Bounds, LatLng, Viewport, focus_zoom},
};

/// Coordinates closer than this on both axes are the same place. Values
/// lose precision on their way through markup, so equality is never exact.
pub const COORDINATE_TOLERANCE: f64 = 0.000_000_01;

/// Decimal-to-binary error allowed on top of the tolerance, so that two
/// coordinates written `1e-8` apart in text still compare as neighbours.
const PARSE_SLACK: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geoplace {
    pub latitude: f64,
    pub longitude: f64,
    /// Every distinct label seen at this place, joined with `", "`.
    pub label: String,
}

impl Geoplace {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    fn is_at(&self, latitude: f64, longitude: f64) -> bool {
        let tolerance = COORDINATE_TOLERANCE + PARSE_SLACK;
        (self.latitude - latitude).abs() < tolerance
            && (self.longitude - longitude).abs() < tolerance
    }

    fn merge_label(&mut self, label: &str) {
        if !self.label.contains(label) {
            self.label.push_str(", ");
            self.label.push_str(label);
        }
    }
}

/// Deduplicated places of one rendered chapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoplaceSet {
    places: Vec<Geoplace>,
    altitude_hint: Option<f64>,
}

impl GeoplaceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_annotations<'a>(annotations: impl IntoIterator<Item = &'a Annotation>) -> Self {
        let mut set = Self::new();
        for annotation in annotations {
            set.merge(annotation);
        }
        set
    }

    /// Adds an annotation and remembers its altitude as the hint for
    /// [`GeoplaceSet::viewport`].
    pub fn merge(&mut self, annotation: &Annotation) {
        self.add(
            &annotation.place_label(),
            annotation.latitude,
            annotation.longitude,
        );
        self.altitude_hint = annotation.view_altitude;
    }

    /// Merges into the most recently added place at the same coordinates,
    /// or starts a new place.
    pub fn add(&mut self, label: &str, latitude: f64, longitude: f64) {
        match self
            .places
            .iter_mut()
            .rev()
            .find(|place| place.is_at(latitude, longitude))
        {
            Some(place) => place.merge_label(label),
            None => self.places.push(Geoplace {
                latitude,
                longitude,
                label: label.to_string(),
            }),
        }
    }

    pub fn places(&self) -> &[Geoplace] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn clear(&mut self) {
        self.places.clear();
        self.altitude_hint = None;
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let mut places = self.places.iter().map(Geoplace::position);
        let mut bounds = Bounds::point(places.next()?);
        for position in places {
            bounds.extend(position);
        }
        Some(bounds)
    }

    pub fn viewport(&self) -> Viewport {
        match (self.places.as_slice(), self.altitude_hint) {
            ([], _) => Viewport::Unchanged,
            ([place], Some(altitude)) => Viewport::Focus {
                center: place.position(),
                zoom: focus_zoom(altitude),
            },
            _ => match self.bounds() {
                Some(bounds) => Viewport::Fit {
                    bounds,
                    center: bounds.center(),
                },
                None => Viewport::Unchanged,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(label: &str, latitude: f64, longitude: f64, altitude: Option<f64>) -> Annotation {
        Annotation {
            id: "1".to_string(),
            label: label.to_string(),
            latitude,
            longitude,
            view_latitude: Some(latitude),
            view_longitude: Some(longitude),
            view_tilt: Some(0.0),
            view_roll: Some(0.0),
            view_altitude: altitude,
            view_heading: Some(0.0),
            flag: String::new(),
        }
    }

    #[test]
    fn nearby_coordinates_merge() {
        let annotations = [
            annotation("Salt Lake", 40.0000000, -111.0000000, None),
            annotation("Great Salt Lake", 40.00000001, -111.00000001, None),
        ];
        let set = GeoplaceSet::from_annotations(&annotations);
        assert_eq!(set.len(), 1);
        assert_eq!(set.places()[0].label, "Salt Lake, Great Salt Lake");
    }

    #[test]
    fn distant_coordinates_stay_apart() {
        let mut set = GeoplaceSet::new();
        set.add("A", 40.0, -111.0);
        set.add("B", 40.0000001, -111.0);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn merging_is_idempotent() {
        let jerusalem = annotation("Jerusalem", 31.777444, 35.234935, Some(3000.0));
        let mut set = GeoplaceSet::new();
        set.merge(&jerusalem);
        set.merge(&jerusalem);
        set.merge(&jerusalem);
        assert_eq!(set.len(), 1);
        assert_eq!(set.places()[0].label, "Jerusalem");
    }

    #[test]
    fn substring_labels_are_not_appended() {
        let mut set = GeoplaceSet::new();
        set.add("Mount Zion", 31.77, 35.23);
        set.add("Zion", 31.77, 35.23);
        set.add("City of David", 31.77, 35.23);
        assert_eq!(set.places()[0].label, "Mount Zion, City of David");
    }

    #[test]
    fn rebuilding_reproduces_the_same_set() {
        let annotations = [
            annotation("A", 1.0, 2.0, Some(5000.0)),
            annotation("B", 3.0, 4.0, Some(6000.0)),
            annotation("C", 1.0, 2.0, Some(7000.0)),
        ];
        let first = GeoplaceSet::from_annotations(&annotations);
        let second = GeoplaceSet::from_annotations(&annotations);
        assert_eq!(first, second);
        assert_eq!(first.viewport(), second.viewport());
    }

    #[test]
    fn no_places_leave_the_map_alone() {
        assert_eq!(GeoplaceSet::new().viewport(), Viewport::Unchanged);
    }

    #[test]
    fn single_place_with_altitude_is_focused() {
        let set =
            GeoplaceSet::from_annotations(&[annotation("Nauvoo", 40.55, -91.38, Some(2700.0))]);
        assert_eq!(
            set.viewport(),
            Viewport::Focus {
                center: LatLng::new(40.55, -91.38),
                zoom: 6.0,
            }
        );
    }

    #[test]
    fn single_place_without_altitude_is_fitted() {
        let set = GeoplaceSet::from_annotations(&[annotation("Nauvoo", 40.55, -91.38, None)]);
        let position = LatLng::new(40.55, -91.38);
        assert_eq!(
            set.viewport(),
            Viewport::Fit {
                bounds: Bounds::point(position),
                center: position,
            }
        );
    }

    #[test]
    fn several_places_fit_their_bounds() {
        let set = GeoplaceSet::from_annotations(&[
            annotation("A", 30.0, 30.0, Some(5000.0)),
            annotation("B", 32.0, 36.0, Some(5000.0)),
        ]);
        let Viewport::Fit { bounds, center } = set.viewport() else {
            panic!("expected a fitted viewport");
        };
        assert_eq!(bounds.south_west, LatLng::new(30.0, 30.0));
        assert_eq!(bounds.north_east, LatLng::new(32.0, 36.0));
        assert_eq!(center, LatLng::new(31.0, 33.0));
    }

    #[test]
    fn clear_forgets_places_and_hint() {
        let mut set = GeoplaceSet::from_annotations(&[annotation("A", 1.0, 2.0, Some(5000.0))]);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set, GeoplaceSet::new());
    }
}
