// src/core/html.rs
// Thin helpers over `scraper` so specs read like the selectors they use.

use scraper::{ElementRef, Html, Selector};

use crate::error::FlagsError;

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

pub fn selector(css: &str) -> Result<Selector, FlagsError> {
    Selector::parse(css).map_err(|e| FlagsError::Parse(format!("bad selector `{css}`: {e}")))
}

/// `document.querySelector(css)`
pub fn select_first<'a>(doc: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>, FlagsError> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).next())
}

/// Concatenated text of all descendants (`textContent`).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Direct element children, skipping text and comment nodes.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_and_text() {
        let doc = parse(r#"<div class="x"><b>one</b> two</div><div class="x">three</div>"#);
        let el = select_first(&doc, ".x").unwrap().unwrap();
        assert_eq!(text_of(el), "one two");
        assert!(select_first(&doc, ".missing").unwrap().is_none());
    }

    #[test]
    fn children_skip_text_nodes() {
        let doc = parse(r#"<ul id="l"> text <li>a</li> <li>b</li> </ul>"#);
        let ul = select_first(&doc, "#l").unwrap().unwrap();
        let names: Vec<String> = child_elements(ul).map(text_of).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn bad_selector_is_a_parse_error() {
        assert!(matches!(selector("tr:nth-of-type("), Err(FlagsError::Parse(_))));
    }
}
