//! Map places mentioned in chapter markup, merged by coordinate.

mod annotation;
mod place;
mod viewport;

pub use annotation::{Annotation, annotations};
pub use place::{COORDINATE_TOLERANCE, Geoplace, GeoplaceSet};
pub use viewport::{
    Bounds, LatLng, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, Viewport, ZOOM_RATIO, altitude_zoom,
    focus_zoom,
};

/// Rebuilds the place set of a rendered chapter from its markup.
pub fn from_markup(document: &scraper::Html) -> GeoplaceSet {
    let annotations: Vec<Annotation> = annotations(document).collect();
    GeoplaceSet::from_annotations(&annotations)
}
