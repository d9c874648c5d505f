//! Hash-fragment navigation over the scripture library.

mod adjacent;
mod fragment;
mod target;

pub use adjacent::{AdjacentChapters, ChapterLink, next_chapter, previous_chapter};
pub use fragment::Fragment;
pub use target::{
    NavigationTarget, chapter_fragment, chapter_valid, resolve, resolve_fragment,
};

#[cfg(test)]
pub(crate) mod tests {
    use library::{Book, BookTable, Library, Volume};

    /// Library from `(book_id, volume_id, num_chapters)` rows. Each volume
    /// spans the ids of its books.
    pub(crate) fn library(rows: &[(u32, u32, u32)]) -> Library {
        let mut volumes: Vec<Volume> = Vec::new();
        for &(book_id, volume_id, _) in rows {
            match volumes.iter_mut().find(|volume| volume.id == volume_id) {
                Some(volume) => {
                    volume.min_book_id = volume.min_book_id.min(book_id);
                    volume.max_book_id = volume.max_book_id.max(book_id);
                }
                None => volumes.push(Volume {
                    id: volume_id,
                    full_name: format!("Volume {volume_id}"),
                    min_book_id: book_id,
                    max_book_id: book_id,
                    books: Vec::new(),
                }),
            }
        }
        volumes.sort_by_key(|volume| volume.id);
        let books = rows.iter().map(|&(id, parent_book_id, num_chapters)| Book {
            id,
            parent_book_id,
            toc_name: format!("Book {id}"),
            grid_name: format!("B{id}"),
            full_name: format!("The Book {id}"),
            num_chapters,
        });
        Library::new(volumes, BookTable::from_books(books).expect("small ids"))
    }
}
