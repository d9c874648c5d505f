use library::{Book, Library};

use crate::target::chapter_fragment;

/// A neighbouring chapter, as shown by the previous/next links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterLink {
    pub book_id: u32,
    pub chapter: u32,
    pub title: String,
}

impl ChapterLink {
    fn new(book: &Book, chapter: u32) -> Self {
        Self {
            book_id: book.id,
            chapter,
            title: book.chapter_title(chapter),
        }
    }

    pub fn fragment(&self) -> String {
        chapter_fragment(self.book_id, self.chapter)
    }
}

/// Previous and next links around a chapter. `None` means no link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacentChapters {
    pub previous: Option<ChapterLink>,
    pub next: Option<ChapterLink>,
}

impl AdjacentChapters {
    pub fn of(library: &Library, book_id: u32, chapter: u32) -> Self {
        Self {
            previous: previous_chapter(library, book_id, chapter),
            next: next_chapter(library, book_id, chapter),
        }
    }
}

/// The chapter after `chapter`, crossing into the next book id when needed.
pub fn next_chapter(library: &Library, book_id: u32, chapter: u32) -> Option<ChapterLink> {
    let book = library.book(book_id)?;
    if chapter < book.num_chapters {
        return Some(ChapterLink::new(book, chapter + 1));
    }
    let next_book = library.book(book_id.checked_add(1)?)?;
    let first = if next_book.num_chapters > 0 { 1 } else { 0 };
    Some(ChapterLink::new(next_book, first))
}

/// The chapter before `chapter`, falling back to the last chapter of the
/// previous book id.
pub fn previous_chapter(library: &Library, book_id: u32, chapter: u32) -> Option<ChapterLink> {
    let book = library.book(book_id)?;
    if chapter > 1 {
        return Some(ChapterLink::new(book, chapter - 1));
    }
    let previous_book = library.book(book_id.checked_sub(1)?)?;
    Some(ChapterLink::new(previous_book, previous_book.num_chapters))
}
