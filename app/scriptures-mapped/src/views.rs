use library::{Book, Library, Volume};
use router::{AdjacentChapters, ChapterLink, NavigationTarget, chapter_fragment};

use crate::{
    errors::ScripResult,
    html::{self, Attrs},
};

const BOTTOM_PADDING: &str = "<br /><br />";
const CLASS_BOOKS: &str = "books";
const CLASS_BUTTON: &str = "btn";
const CLASS_CHAPTER: &str = "chapter";
const CLASS_ICON: &str = "material-icons";
const CLASS_NEXTPREV: &str = "nextprev";
const CLASS_VOLUME: &str = "volume";
const DIV_SCRIPTURES_NAVIGATOR: &str = "scripnav";
const ICON_NEXT: &str = "skip_next";
const ICON_PREVIOUS: &str = "skip_previous";
const SELECTOR_NAVHEADING: &str = "[class~=navheading]";
const TAG_HEADER5: &str = "h5";
const TAG_SPAN: &str = "span";

fn navigator(content: &str) -> String {
    html::div(
        Attrs {
            id: Some(DIV_SCRIPTURES_NAVIGATOR),
            ..Default::default()
        },
        content,
    )
}

/// Every volume with its book grid, or just `volume_id` when given.
pub fn volumes_grid(library: &Library, volume_id: Option<u32>) -> String {
    let mut content = String::new();
    for volume in library.volumes() {
        if volume_id.is_some_and(|id| id != volume.id) {
            continue;
        }
        content.push_str(&html::div(
            Attrs {
                class: Some(CLASS_VOLUME),
                ..Default::default()
            },
            &format!(
                "{}{}",
                html::anchor(volume),
                html::element(TAG_HEADER5, &html::escape(&volume.full_name), None)
            ),
        ));
        content.push_str(&books_grid(library, volume));
    }
    content.push_str(BOTTOM_PADDING);
    navigator(&content)
}

fn books_grid(library: &Library, volume: &Volume) -> String {
    let buttons: String = library
        .volume_books(volume)
        .map(|book| {
            let id = book.id.to_string();
            let href = format!("#{}", NavigationTarget::BookGrid(book.id).fragment(library));
            html::link(
                Attrs {
                    id: Some(&id),
                    class: Some(CLASS_BUTTON),
                    href: Some(&href),
                    ..Default::default()
                },
                &html::escape(&book.grid_name),
            )
        })
        .collect();
    html::div(
        Attrs {
            class: Some(CLASS_BOOKS),
            ..Default::default()
        },
        &buttons,
    )
}

/// Heading with the book name followed by one button per chapter.
pub fn chapters_grid(book: &Book) -> String {
    let heading = html::div(
        Attrs {
            class: Some(CLASS_VOLUME),
            ..Default::default()
        },
        &html::element(TAG_HEADER5, &html::escape(&book.full_name), None),
    );
    let class = format!("{CLASS_BUTTON} {CLASS_CHAPTER}");
    let buttons: String = (1..=book.num_chapters)
        .map(|chapter| {
            let id = chapter.to_string();
            let href = format!("#{}", chapter_fragment(book.id, chapter));
            html::link(
                Attrs {
                    id: Some(&id),
                    class: Some(&class),
                    href: Some(&href),
                    ..Default::default()
                },
                &id,
            )
        })
        .collect();
    let grid = html::div(
        Attrs {
            class: Some(CLASS_BOOKS),
            ..Default::default()
        },
        &buttons,
    );
    navigator(&format!("{heading}{grid}"))
}

fn chapter_link(link: &ChapterLink, icon: &str) -> String {
    let href = format!("#{}", link.fragment());
    html::link(
        Attrs {
            href: Some(&href),
            title: Some(&link.title),
            ..Default::default()
        },
        &html::element(TAG_SPAN, icon, Some(CLASS_ICON)),
    )
}

/// Previous link then next link; missing neighbours render nothing.
pub fn next_previous(adjacent: &AdjacentChapters) -> String {
    let mut markup = String::new();
    if let Some(previous) = &adjacent.previous {
        markup.push_str(&chapter_link(previous, ICON_PREVIOUS));
    }
    if let Some(next) = &adjacent.next {
        markup.push_str(&chapter_link(next, ICON_NEXT));
    }
    markup
}

/// Chapter markup from the content service with the previous/next links
/// added to each navigation heading.
pub fn chapter_page(chapter_html: &str, adjacent: &AdjacentChapters) -> ScripResult<String> {
    let links = html::div(
        Attrs {
            class: Some(CLASS_NEXTPREV),
            ..Default::default()
        },
        &next_previous(adjacent),
    );
    html::append_html(chapter_html, SELECTOR_NAVHEADING, &links)
}
