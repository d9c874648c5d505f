use std::ops::RangeInclusive;

mod books;
mod errors;
mod model;

pub use books::{BookTable, MAX_BOOK_ID};
pub use errors::LibraryError;
pub use model::{Book, Volume};

/// Volume and book metadata, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    volumes: Vec<Volume>,
    books: BookTable,
}

impl Library {
    /// Builds the cache and fills every volume's `books` with the ids in
    /// `[min_book_id, max_book_id]` that have a book.
    pub fn new(mut volumes: Vec<Volume>, books: BookTable) -> Self {
        for volume in &mut volumes {
            let range = volume.min_book_id..=volume.max_book_id;
            volume.books = books
                .iter()
                .map(|book| book.id)
                .filter(|id| range.contains(id))
                .collect();
        }
        Self { volumes, books }
    }

    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    pub fn volume(&self, id: u32) -> Option<&Volume> {
        self.volumes.iter().find(|volume| volume.id == id)
    }

    /// Ids from the first to the last volume, inclusive.
    pub fn volume_ids(&self) -> Option<RangeInclusive<u32>> {
        let first = self.volumes.first()?;
        let last = self.volumes.last()?;
        Some(first.id..=last.id)
    }

    pub fn book(&self, id: u32) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn volume_books<'a>(&'a self, volume: &'a Volume) -> impl Iterator<Item = &'a Book> + 'a {
        volume.books.iter().filter_map(|id| self.books.get(*id))
    }

    pub fn volume_for_book(&self, book: &Book) -> Option<&Volume> {
        self.volume(book.parent_book_id)
    }
}
