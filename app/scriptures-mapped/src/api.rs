use library::{BookTable, Library, Volume};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{Level, event};
use url::Url;

use crate::errors::ScripResult;

const PATH_BOOKS: &str = "mapscrip/model/books.php";
const PATH_SCRIPTURES: &str = "mapscrip/mapgetscrip.php";
const PATH_VOLUMES: &str = "mapscrip/model/volumes.php";

/// Chapter text to ask the content service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterRequest {
    pub book_id: u32,
    pub chapter: u32,
    /// Verse range passed through to the service as-is.
    pub verses: Option<String>,
    /// Ask for the Joseph Smith Translation of the chapter.
    pub jst: bool,
}

impl ChapterRequest {
    pub fn new(book_id: u32, chapter: u32) -> Self {
        Self {
            book_id,
            chapter,
            verses: None,
            jst: false,
        }
    }

    fn query(&self) -> String {
        let mut query = format!("book={}&chap={}&verses", self.book_id, self.chapter);
        if let Some(verses) = &self.verses {
            query.push('=');
            query.push_str(verses);
        }
        if self.jst {
            query.push_str("&jst=JST");
        }
        query
    }
}

pub trait ContentSource {
    async fn volumes(&self) -> ScripResult<Vec<Volume>>;
    async fn books(&self) -> ScripResult<BookTable>;
    async fn chapter_html(&self, request: &ChapterRequest) -> ScripResult<String>;
}

/// Loads both metadata endpoints concurrently; the library exists only once
/// both have answered.
pub async fn load_library(source: &impl ContentSource) -> ScripResult<Library> {
    let (volumes, books) = futures::try_join!(source.volumes(), source.books())?;
    event!(
        Level::INFO,
        volumes = volumes.len(),
        books = books.len(),
        "library loaded"
    );
    Ok(Library::new(volumes, books))
}

/// The scriptures.byu.edu content service.
pub struct MapScripApi {
    client: Client,
    base: Url,
}

impl MapScripApi {
    pub fn new(base_url: &str) -> ScripResult<Self> {
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{base_url}/"))?
        };
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn chapter_url(&self, request: &ChapterRequest) -> ScripResult<Url> {
        let mut url = self.base.join(PATH_SCRIPTURES)?;
        url.set_query(Some(&request.query()));
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ScripResult<T> {
        let url = self.base.join(path)?;
        event!(Level::DEBUG, "GET {url}");
        let data = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(data)
    }
}

impl ContentSource for MapScripApi {
    async fn volumes(&self) -> ScripResult<Vec<Volume>> {
        self.get_json(PATH_VOLUMES).await
    }

    async fn books(&self) -> ScripResult<BookTable> {
        self.get_json(PATH_BOOKS).await
    }

    async fn chapter_html(&self, request: &ChapterRequest) -> ScripResult<String> {
        let url = self.chapter_url(request)?;
        event!(Level::DEBUG, "GET {url}");
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
