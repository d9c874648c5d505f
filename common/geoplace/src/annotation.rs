use std::sync::LazyLock;

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till, take_until},
    character::complete::char,
    multi::count,
    sequence::terminated,
};
use scraper::{Html, Selector};
use tracing::{Level, event};

static SELECTOR_SHOW_LOCATION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[onclick^="showLocation("]"#).unwrap());

/// One `showLocation(...)` call embedded in chapter markup:
///
/// `showLocation(id,'label',lat,lon,viewLat,viewLon,viewTilt,viewRoll,viewAltitude,viewHeading,'flag')`
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub id: String,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub view_latitude: Option<f64>,
    pub view_longitude: Option<f64>,
    pub view_tilt: Option<f64>,
    pub view_roll: Option<f64>,
    pub view_altitude: Option<f64>,
    pub view_heading: Option<f64>,
    pub flag: String,
}

struct Fields<'a> {
    id: &'a str,
    label: &'a str,
    view: Vec<&'a str>,
    heading: &'a str,
    flag: &'a str,
}

impl Annotation {
    /// Parses the text of an `onclick` attribute. Returns `None` when the
    /// call does not have the expected shape or its coordinates are not
    /// numbers.
    pub fn parse(onclick: &str) -> Option<Self> {
        let (_, fields) = show_location(onclick).ok()?;
        let [lat, lon, view_lat, view_lon, tilt, roll, altitude] = fields.view.as_slice() else {
            return None;
        };
        Some(Self {
            id: fields.id.trim().to_string(),
            label: fields.label.to_string(),
            latitude: number(lat)?,
            longitude: number(lon)?,
            view_latitude: number(view_lat),
            view_longitude: number(view_lon),
            view_tilt: number(tilt),
            view_roll: number(roll),
            view_altitude: number(altitude),
            view_heading: number(fields.heading),
            flag: fields.flag.to_string(),
        })
    }

    /// Label used on the map; a non-empty flag is appended after a space.
    pub fn place_label(&self) -> String {
        if self.flag.is_empty() {
            self.label.clone()
        } else {
            format!("{} {}", self.label, self.flag)
        }
    }
}

fn show_location(input: &str) -> IResult<&str, Fields<'_>> {
    let (input, _) = take_until("(").parse(input)?;
    let (input, (_, id, label, view, heading, flag)) = (
        char('('),
        terminated(take_until(",'"), tag(",'")),
        terminated(take_until("',"), tag("',")),
        count(terminated(take_till(|c: char| c == ','), char(',')), 7),
        terminated(take_till(|c: char| c == ','), tag(",'")),
        terminated(take_until("')"), tag("')")),
    )
        .parse(input)?;
    Ok((
        input,
        Fields {
            id,
            label,
            view,
            heading,
            flag,
        },
    ))
}

fn number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Annotations of every `showLocation` anchor in document order. Anchors
/// whose call does not parse are skipped.
pub fn annotations(document: &Html) -> impl Iterator<Item = Annotation> + '_ {
    document
        .select(&SELECTOR_SHOW_LOCATION)
        .filter_map(|element| {
            let onclick = element.value().attr("onclick")?;
            let annotation = Annotation::parse(onclick);
            if annotation.is_none() {
                event!(Level::DEBUG, "skipping malformed annotation: {onclick}");
            }
            annotation
        })
}
