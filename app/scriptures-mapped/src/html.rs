use askama::{Html as HtmlEscaper, MarkupDisplay};
use library::Volume;
use lol_html::{RewriteStrSettings, element, html_content::ContentType, rewrite_str};

use crate::errors::ScripResult;

const TAG_LIST_ITEM: &str = "li";

/// Optional attributes of a generated element, written in id, class, href,
/// title order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Attrs<'a> {
    pub id: Option<&'a str>,
    pub class: Option<&'a str>,
    pub href: Option<&'a str>,
    pub title: Option<&'a str>,
}

impl Attrs<'_> {
    fn render(&self) -> String {
        let mut attrs = String::new();
        for (name, value) in [
            ("id", self.id),
            ("class", self.class),
            ("href", self.href),
            ("title", self.title),
        ] {
            if let Some(value) = value {
                attrs.push_str(&format!(r#" {name}="{}""#, escape(value)));
            }
        }
        attrs
    }
}

pub fn escape(text: &str) -> String {
    MarkupDisplay::new_unsafe(text, HtmlEscaper).to_string()
}

pub fn anchor(volume: &Volume) -> String {
    format!(r#"<a name="v{}" />"#, volume.id)
}

pub fn div(attrs: Attrs, content: &str) -> String {
    let attrs = Attrs {
        href: None,
        title: None,
        ..attrs
    };
    format!("<div{}>{content}</div>", attrs.render())
}

pub fn element(tag: &str, content: &str, class: Option<&str>) -> String {
    let attrs = Attrs {
        class,
        ..Default::default()
    };
    format!("<{tag}{}>{content}</{tag}>", attrs.render())
}

pub fn link(attrs: Attrs, content: &str) -> String {
    format!("<a{}>{content}</a>", attrs.render())
}

pub fn list_item(content: &str) -> String {
    element(TAG_LIST_ITEM, content, None)
}

/// `<li>` holding a link to `#{fragment}`.
pub fn list_item_link(content: &str, fragment: &str) -> String {
    let href = format!("#{fragment}");
    list_item(&link(
        Attrs {
            href: Some(&href),
            ..Default::default()
        },
        content,
    ))
}

/// Appends `addition` as markup at the end of every element matching
/// `selector`, which must be a valid CSS selector. The rest of the document
/// passes through unchanged.
pub fn append_html(html: &str, selector: &str, addition: &str) -> ScripResult<String> {
    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![element!(selector, |el| {
                el.append(addition, ContentType::Html);
                Ok(())
            })],
            ..RewriteStrSettings::new()
        },
    )?;
    Ok(output)
}
