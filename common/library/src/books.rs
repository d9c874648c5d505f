use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{Book, errors::LibraryError};

/// Books with any id above this are rejected instead of growing the dense table.
pub const MAX_BOOK_ID: u32 = u16::MAX as u32;

/// The books endpoint answers either with an array (holes as `null`) or with
/// an object keyed by id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBooks {
    List(Vec<Option<Book>>),
    Map(BTreeMap<String, Book>),
}

/// Dense table of books indexed by book id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBooks")]
pub struct BookTable(Vec<Option<Book>>);

impl BookTable {
    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Result<Self, LibraryError> {
        let mut table = Vec::new();
        for book in books {
            if book.id > MAX_BOOK_ID {
                return Err(LibraryError::BookIdOutOfRange(book.id));
            }
            let index = book.id as usize;
            if index >= table.len() {
                table.resize(index + 1, None);
            }
            table[index] = Some(book);
        }
        Ok(Self(table))
    }

    pub fn get(&self, id: u32) -> Option<&Book> {
        self.0.get(id as usize).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.0.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl TryFrom<RawBooks> for BookTable {
    type Error = LibraryError;

    fn try_from(raw: RawBooks) -> Result<Self, Self::Error> {
        match raw {
            RawBooks::List(books) => Self::from_books(books.into_iter().flatten()),
            RawBooks::Map(books) => Self::from_books(books.into_values()),
        }
    }
}
