use geoplace::{Annotation, GeoplaceSet, LatLng, altitude_zoom};
use library::Library;
use router::{AdjacentChapters, NavigationTarget};
use scraper::Html;
use tracing::{Level, event};

use crate::{
    api::{ChapterRequest, ContentSource, load_library},
    breadcrumbs::{self, breadcrumbs},
    errors::ScripResult,
    html,
    map::{MapView, apply_viewport},
    views,
};

pub const DIV_BREADCRUMBS: &str = "crumbs";
pub const DIV_SCRIPTURES: &str = "scriptures";
const DIV_MAP: &str = "map";

/// The two containers of the host page the viewer writes into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub breadcrumbs: String,
    pub scriptures: String,
}

impl Page {
    /// Standalone document with both containers, a map container and the
    /// map commands as JSON for the page script to replay.
    pub fn document(&self, map_commands: &str) -> String {
        let container = |id: &str, content: &str| {
            html::div(
                html::Attrs {
                    id: Some(id),
                    ..Default::default()
                },
                content,
            )
        };
        format!(
            concat!(
                "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\" /><title>The Scriptures, Mapped</title></head>\n",
                "<body>\n{}\n{}\n{}\n",
                "<script type=\"application/json\" id=\"map-commands\">{}</script>\n",
                "</body>\n</html>\n"
            ),
            container(DIV_BREADCRUMBS, &self.breadcrumbs),
            container(DIV_SCRIPTURES, &self.scriptures),
            container(DIV_MAP, ""),
            map_commands.replace("</", "<\\/"),
        )
    }
}

/// A chapter fetch that has been issued but not rendered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChapter {
    pub request: ChapterRequest,
    pub adjacent: AdjacentChapters,
}

/// Viewer state: metadata, the rendered page and the markers of the
/// current chapter.
pub struct Scriptures<S, M> {
    library: Library,
    source: S,
    map: M,
    page: Page,
    geoplaces: GeoplaceSet,
}

impl<S: ContentSource, M: MapView> Scriptures<S, M> {
    /// Loads the metadata. Nothing can be navigated before this completes.
    pub async fn init(source: S, map: M) -> ScripResult<Self> {
        let library = load_library(&source).await?;
        Ok(Self {
            library,
            source,
            map,
            page: Page::default(),
            geoplaces: GeoplaceSet::new(),
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn geoplaces(&self) -> &GeoplaceSet {
        &self.geoplaces
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// Resolves a location fragment and renders its view.
    pub async fn on_hash_changed(&mut self, fragment: &str) -> NavigationTarget {
        let target = router::resolve(fragment, &self.library);
        event!(Level::INFO, fragment, ?target, "hash changed");
        self.navigate(target).await;
        target
    }

    pub async fn navigate(&mut self, target: NavigationTarget) {
        match target.redirect(&self.library) {
            NavigationTarget::Home => self.navigate_home(None),
            NavigationTarget::VolumeGrid(volume_id) => self.navigate_home(Some(volume_id)),
            NavigationTarget::BookGrid(book_id) => self.navigate_book(book_id),
            NavigationTarget::Chapter(book_id, chapter) => {
                self.navigate_chapter(book_id, chapter).await
            }
        }
    }

    fn navigate_home(&mut self, volume_id: Option<u32>) {
        let volume = volume_id.and_then(|id| self.library.volume(id));
        self.page.scriptures = views::volumes_grid(&self.library, volume_id);
        self.page.breadcrumbs = breadcrumbs(volume, None, None);
    }

    fn navigate_book(&mut self, book_id: u32) {
        let Some(book) = self.library.book(book_id) else {
            return self.navigate_home(None);
        };
        let volume = self.library.volume_for_book(book);
        self.page.scriptures = views::chapters_grid(book);
        self.page.breadcrumbs = breadcrumbs::for_target(
            NavigationTarget::BookGrid(book_id),
            volume,
            Some(book),
        );
    }

    /// Fetches and renders one chapter. A failed fetch is logged and leaves
    /// the page as it was.
    pub async fn navigate_chapter(&mut self, book_id: u32, chapter: u32) {
        let pending = self.request_chapter(book_id, chapter);
        match self.source.chapter_html(&pending.request).await {
            Ok(chapter_html) => self.complete_chapter(&pending, &chapter_html),
            Err(err) => event!(
                Level::ERROR,
                book_id,
                chapter,
                "chapter fetch failed: {err}"
            ),
        }
    }

    /// Captures everything the chapter render needs before the fetch goes out.
    pub fn request_chapter(&self, book_id: u32, chapter: u32) -> PendingChapter {
        PendingChapter {
            request: ChapterRequest::new(book_id, chapter),
            adjacent: AdjacentChapters::of(&self.library, book_id, chapter),
        }
    }

    /// Renders a fetched chapter. Completions are applied in the order they
    /// arrive, so a late answer for an older request replaces a newer page.
    pub fn complete_chapter(&mut self, pending: &PendingChapter, chapter_html: &str) {
        let ChapterRequest {
            book_id, chapter, ..
        } = pending.request;
        let scriptures = match views::chapter_page(chapter_html, &pending.adjacent) {
            Ok(scriptures) => scriptures,
            Err(err) => {
                event!(Level::ERROR, book_id, chapter, "chapter render failed: {err}");
                return;
            }
        };
        let book = self.library.book(book_id);
        let volume = book.and_then(|book| self.library.volume_for_book(book));
        self.page.scriptures = scriptures;
        self.page.breadcrumbs = breadcrumbs(volume, book, Some(chapter));
        self.setup_markers();
    }

    /// Replaces the markers with the places of the rendered page and moves
    /// the map to show them.
    pub fn setup_markers(&mut self) {
        if !self.geoplaces.is_empty() {
            self.map.clear_markers();
        }
        let document = Html::parse_fragment(&self.page.scriptures);
        self.geoplaces = geoplace::from_markup(&document);
        for place in self.geoplaces.places() {
            self.map.add_marker(place);
        }
        event!(Level::DEBUG, places = self.geoplaces.len(), "markers placed");
        apply_viewport(&mut self.map, self.geoplaces.viewport());
    }

    /// Centers the map on a place link's location at its camera altitude.
    pub fn show_location(&mut self, annotation: &Annotation) {
        event!(Level::INFO, label = annotation.label.as_str(), "show location");
        self.map
            .pan_to(LatLng::new(annotation.latitude, annotation.longitude));
        if let Some(altitude) = annotation.view_altitude {
            self.map.set_zoom(altitude_zoom(altitude));
        }
    }
}
