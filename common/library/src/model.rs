use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: u32,
    pub full_name: String,
    pub min_book_id: u32,
    pub max_book_id: u32,
    /// Ids of the books in `[min_book_id, max_book_id]`, filled in by [`crate::Library::new`].
    #[serde(skip)]
    pub books: Vec<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u32,
    /// Id of the volume that owns this book.
    pub parent_book_id: u32,
    pub toc_name: String,
    pub grid_name: String,
    pub full_name: String,
    /// `0` means the book has no chapter subdivision and is addressed as chapter 0.
    pub num_chapters: u32,
}

impl Book {
    /// Link title for a chapter of this book: `"Genesis 3"`, or just the
    /// table-of-contents name for chapter 0.
    pub fn chapter_title(&self, chapter: u32) -> String {
        if chapter > 0 {
            format!("{} {}", self.toc_name, chapter)
        } else {
            self.toc_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_from_service_json() -> anyhow::Result<()> {
        let volume: Volume = serde_json::from_str(
            r#"{"id":1,"fullName":"Old Testament","gridName":"OT","minBookId":101,"maxBookId":139}"#,
        )?;
        assert_eq!(volume.full_name, "Old Testament");
        assert_eq!(volume.min_book_id, 101);
        assert_eq!(volume.max_book_id, 139);
        assert!(volume.books.is_empty());
        Ok(())
    }

    #[test]
    fn chapter_title_omits_chapter_zero() {
        let book = Book {
            id: 305,
            parent_book_id: 3,
            toc_name: "Enos".to_string(),
            grid_name: "Enos".to_string(),
            full_name: "The Book of Enos".to_string(),
            num_chapters: 0,
        };
        assert_eq!(book.chapter_title(0), "Enos");
        assert_eq!(book.chapter_title(1), "Enos 1");
    }
}
