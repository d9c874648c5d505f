use library::{Book, Library};

use crate::fragment::Fragment;

/// The view a fragment navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationTarget {
    Home,
    VolumeGrid(u32),
    BookGrid(u32),
    /// `(book_id, chapter)`
    Chapter(u32, u32),
}

impl NavigationTarget {
    /// Formats the target the way grids and chapter links address it:
    /// `""`, `"1"`, `"1:101"` or `"0:101:3"`.
    pub fn fragment(&self, library: &Library) -> String {
        match *self {
            NavigationTarget::Home => String::new(),
            NavigationTarget::VolumeGrid(volume_id) => volume_id.to_string(),
            NavigationTarget::BookGrid(book_id) => {
                let volume_id = library
                    .book(book_id)
                    .map(|book| book.parent_book_id)
                    .unwrap_or_default();
                format!("{volume_id}:{book_id}")
            }
            NavigationTarget::Chapter(book_id, chapter) => chapter_fragment(book_id, chapter),
        }
    }

    /// A book with at most one chapter has no grid worth showing and goes
    /// straight to its only chapter.
    pub fn redirect(self, library: &Library) -> Self {
        match self {
            NavigationTarget::BookGrid(book_id) => match library.book(book_id) {
                Some(book) if book.num_chapters <= 1 => {
                    NavigationTarget::Chapter(book_id, book.num_chapters)
                }
                _ => self,
            },
            _ => self,
        }
    }
}

pub fn chapter_fragment(book_id: u32, chapter: u32) -> String {
    format!("0:{book_id}:{chapter}")
}

/// Resolves a fragment to the view to render. Anything that does not
/// name an existing volume, book or chapter lands on [`NavigationTarget::Home`].
pub fn resolve(fragment: &str, library: &Library) -> NavigationTarget {
    resolve_fragment(&Fragment::parse(fragment), library)
}

pub fn resolve_fragment(fragment: &Fragment, library: &Library) -> NavigationTarget {
    let target = match fragment.len() {
        0 => Some(NavigationTarget::Home),
        1 => volume_grid(fragment, library),
        2 => book_grid(fragment, library),
        _ => chapter(fragment, library),
    };
    target
        .unwrap_or(NavigationTarget::Home)
        .redirect(library)
}

fn volume_grid(fragment: &Fragment, library: &Library) -> Option<NavigationTarget> {
    let volume_id = u32::try_from(fragment.number(0)?).ok()?;
    library
        .volume_ids()?
        .contains(&volume_id)
        .then_some(NavigationTarget::VolumeGrid(volume_id))
}

fn book_grid(fragment: &Fragment, library: &Library) -> Option<NavigationTarget> {
    let book = lookup_book(fragment, library)?;
    Some(NavigationTarget::BookGrid(book.id))
}

fn chapter(fragment: &Fragment, library: &Library) -> Option<NavigationTarget> {
    let book = lookup_book(fragment, library)?;
    let chapter = fragment.number(2)?;
    if !chapter_valid(book, chapter) {
        return None;
    }
    Some(NavigationTarget::Chapter(book.id, u32::try_from(chapter).ok()?))
}

fn lookup_book<'a>(fragment: &Fragment, library: &'a Library) -> Option<&'a Book> {
    let book_id = u32::try_from(fragment.number(1)?).ok()?;
    library.book(book_id)
}

/// `0 <= chapter <= num_chapters`, and a nonzero chapter needs a book that
/// actually has chapters.
pub fn chapter_valid(book: &Book, chapter: i64) -> bool {
    if chapter < 0 || chapter > i64::from(book.num_chapters) {
        return false;
    }
    chapter == 0 || book.num_chapters > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::library;

    #[test]
    fn empty_fragment_is_home() {
        let library = library(&[(1, 1, 3)]);
        assert_eq!(resolve("", &library), NavigationTarget::Home);
        assert_eq!(resolve("#", &library), NavigationTarget::Home);
    }

    #[test]
    fn volume_in_range() {
        let library = library(&[(1, 1, 3), (2, 2, 5)]);
        assert_eq!(resolve("2", &library), NavigationTarget::VolumeGrid(2));
        assert_eq!(resolve("#1", &library), NavigationTarget::VolumeGrid(1));
    }

    #[test]
    fn volume_out_of_range_is_home() {
        let library = library(&[(1, 1, 3), (2, 2, 5)]);
        assert_eq!(resolve("0", &library), NavigationTarget::Home);
        assert_eq!(resolve("3", &library), NavigationTarget::Home);
        assert_eq!(resolve("-1", &library), NavigationTarget::Home);
        assert_eq!(resolve("x", &library), NavigationTarget::Home);
    }

    #[test]
    fn book_grid_ignores_volume_token() {
        let library = library(&[(1, 1, 3), (2, 2, 5)]);
        assert_eq!(resolve("1:2", &library), NavigationTarget::BookGrid(2));
        assert_eq!(resolve("9:2", &library), NavigationTarget::BookGrid(2));
        assert_eq!(resolve("1:7", &library), NavigationTarget::Home);
    }

    #[test]
    fn single_chapter_book_grid_redirects() {
        let library = library(&[(1, 1, 3), (5, 2, 1), (6, 2, 0)]);
        assert_eq!(resolve("2:5", &library), NavigationTarget::Chapter(5, 1));
        assert_eq!(resolve("2:6", &library), NavigationTarget::Chapter(6, 0));
    }

    #[test]
    fn chapter_targets() {
        let library = library(&[(5, 1, 1), (7, 1, 10)]);
        assert_eq!(resolve("0:5:1", &library), NavigationTarget::Chapter(5, 1));
        assert_eq!(resolve("0:7:10", &library), NavigationTarget::Chapter(7, 10));
        assert_eq!(resolve("0:7:99", &library), NavigationTarget::Home);
        assert_eq!(resolve("0:7:-1", &library), NavigationTarget::Home);
        assert_eq!(resolve("0:8:1", &library), NavigationTarget::Home);
    }

    #[test]
    fn zero_chapter_book_only_accepts_chapter_zero() {
        let library = library(&[(4, 1, 0)]);
        assert_eq!(resolve("0:4:0", &library), NavigationTarget::Chapter(4, 0));
        assert_eq!(resolve("0:4:1", &library), NavigationTarget::Home);
    }

    #[test]
    fn extra_tokens_are_ignored() {
        let library = library(&[(7, 1, 10)]);
        assert_eq!(resolve("0:7:3:12", &library), NavigationTarget::Chapter(7, 3));
    }

    #[test]
    fn resolution_is_total() {
        let library = library(&[(1, 1, 3), (2, 1, 0)]);
        for fragment in [
            ":", "::", ":::", "a:b:c", "1:1:1:1:1", "99999999999999999999", "0:1:4294967296",
            "  ", "#:", "1:-2:3", "1:2:", "::1",
        ] {
            let target = resolve(fragment, &library);
            assert!(matches!(
                target,
                NavigationTarget::Home
                    | NavigationTarget::VolumeGrid(_)
                    | NavigationTarget::BookGrid(_)
                    | NavigationTarget::Chapter(..)
            ));
        }
    }

    #[test]
    fn chapter_fragment_round_trips() {
        let library = library(&[(1, 1, 3), (2, 1, 0), (3, 1, 12)]);
        for target in [
            NavigationTarget::Chapter(1, 2),
            NavigationTarget::Chapter(2, 0),
            NavigationTarget::Chapter(3, 12),
        ] {
            assert_eq!(resolve(&target.fragment(&library), &library), target);
        }
    }

    #[test]
    fn grid_fragments() {
        let library = library(&[(1, 1, 3), (3, 2, 12)]);
        assert_eq!(NavigationTarget::Home.fragment(&library), "");
        assert_eq!(NavigationTarget::VolumeGrid(2).fragment(&library), "2");
        assert_eq!(NavigationTarget::BookGrid(3).fragment(&library), "2:3");
        assert_eq!(resolve("2:3", &library), NavigationTarget::BookGrid(3));
    }
}
