use library::{Book, Volume};
use router::NavigationTarget;

use crate::html;

const TAG_UNORDERED_LIST: &str = "ul";
const TEXT_TOP_LEVEL: &str = "The Scriptures";

/// Trail from the top level down to the current volume, book and chapter.
/// Every crumb links to its grid except the last, which is plain text.
pub fn breadcrumbs(volume: Option<&Volume>, book: Option<&Book>, chapter: Option<u32>) -> String {
    let mut crumbs: Vec<(String, Option<String>)> =
        vec![(TEXT_TOP_LEVEL.to_string(), Some(String::new()))];
    if let Some(volume) = volume {
        crumbs.push((html::escape(&volume.full_name), Some(volume.id.to_string())));
        if let Some(book) = book {
            let fragment = format!("{}:{}", volume.id, book.id);
            crumbs.push((html::escape(&book.toc_name), Some(fragment)));
            if let Some(chapter) = chapter.filter(|chapter| *chapter > 0) {
                crumbs.push((chapter.to_string(), None));
            }
        }
    }

    let last = crumbs.len() - 1;
    let items: String = crumbs
        .into_iter()
        .enumerate()
        .map(|(index, (text, fragment))| match fragment {
            Some(fragment) if index != last => html::list_item_link(&text, &fragment),
            _ => html::list_item(&text),
        })
        .collect();
    html::element(TAG_UNORDERED_LIST, &items, None)
}

/// Breadcrumbs that match a grid target.
pub fn for_target(
    target: NavigationTarget,
    volume: Option<&Volume>,
    book: Option<&Book>,
) -> String {
    match target {
        NavigationTarget::Home => breadcrumbs(None, None, None),
        NavigationTarget::VolumeGrid(_) => breadcrumbs(volume, None, None),
        NavigationTarget::BookGrid(_) => breadcrumbs(volume, book, None),
        NavigationTarget::Chapter(_, chapter) => breadcrumbs(volume, book, Some(chapter)),
    }
}
