use std::sync::LazyLock;

use async_compat::Compat;
use geoplace::{Annotation, GeoplaceSet};
use router::NavigationTarget;
use scraper::{Html, Selector};
use smol::{
    Unblock,
    io::{AsyncBufReadExt, BufReader},
    stream::StreamExt,
};
use tracing::{Level, event};

use crate::{
    api::MapScripApi,
    errors::ScripResult,
    map::{CommandMap, MapCommand},
    scriptures::{Page, Scriptures},
};

const SHOW_LOCATION: &str = "showLocation(";

static SELECTOR_CRUMB: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

pub fn run(base_url: &str) -> ScripResult<()> {
    smol::block_on(Compat::new(browse(base_url)))
}

/// Each stdin line is handled like a change of the location hash, except
/// `showLocation(...)` lines, which act like a click on a place link.
async fn browse(base_url: &str) -> ScripResult<()> {
    let api = MapScripApi::new(base_url)?;
    let mut scriptures = Scriptures::init(api, CommandMap::default()).await?;
    event!(Level::INFO, "reading fragments from stdin");

    let mut lines = BufReader::new(Unblock::new(std::io::stdin())).lines();
    while let Some(line) = lines.next().await {
        let line = line?;
        let line = line.trim();
        if line.starts_with(SHOW_LOCATION) {
            match Annotation::parse(line) {
                Some(annotation) => {
                    scriptures.show_location(&annotation);
                    let commands = scriptures.map_mut().take_commands();
                    println!("map:    {}", serde_json::to_string(&commands)?);
                }
                None => event!(Level::WARN, "not a place link: {line}"),
            }
            continue;
        }
        let target = scriptures.on_hash_changed(line).await;
        let commands = scriptures.map_mut().take_commands();
        println!(
            "{}",
            summary(target, scriptures.page(), scriptures.geoplaces(), &commands)?
        );
    }
    Ok(())
}

fn crumbs(page: &Page) -> String {
    let document = Html::parse_fragment(&page.breadcrumbs);
    document
        .select(&SELECTOR_CRUMB)
        .map(|crumb| crumb.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" > ")
}

fn summary(
    target: NavigationTarget,
    page: &Page,
    places: &GeoplaceSet,
    commands: &[MapCommand],
) -> ScripResult<String> {
    let mut lines = vec![
        format!("target: {target:?}"),
        format!("crumbs: {}", crumbs(page)),
    ];
    for place in places.places() {
        lines.push(format!(
            "place:  {} ({}, {})",
            place.label, place.latitude, place.longitude
        ));
    }
    if !commands.is_empty() {
        lines.push(format!("map:    {}", serde_json::to_string(commands)?));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_a_chapter() -> anyhow::Result<()> {
        let page = Page {
            breadcrumbs: r##"<ul><li><a href="#">The Scriptures</a></li><li><a href="#3">Book of Mormon</a></li><li>Ether</li></ul>"##.to_string(),
            scriptures: String::new(),
        };
        let mut places = GeoplaceSet::new();
        places.add("Ramah", 21.0, -91.0);
        places.add("Cumorah", 21.0, -91.0);
        let text = summary(
            NavigationTarget::Chapter(220, 0),
            &page,
            &places,
            &[MapCommand::ClearMarkers],
        )?;
        assert_eq!(
            text,
            concat!(
                "target: Chapter(220, 0)\n",
                "crumbs: The Scriptures > Book of Mormon > Ether\n",
                "place:  Ramah, Cumorah (21, -91)\n",
                r#"map:    [{"command":"clearMarkers"}]"#
            )
        );
        Ok(())
    }

    #[test]
    fn summary_of_home() -> anyhow::Result<()> {
        let page = Page {
            breadcrumbs: "<ul><li>The Scriptures</li></ul>".to_string(),
            scriptures: String::new(),
        };
        let text = summary(NavigationTarget::Home, &page, &GeoplaceSet::new(), &[])?;
        assert_eq!(text, "target: Home\ncrumbs: The Scriptures");
        Ok(())
    }
}
