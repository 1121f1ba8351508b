//! Caller-supplied decisions for the tree passes.
//!
//! Both traits are implemented for plain closures, so callers can pass a
//! lambda, a named function or a table-driven value like [`TagSet`]
//! interchangeably.

use std::collections::BTreeSet;

use crate::dom::ElementRef;

/// A pure yes/no decision about a single element.
pub trait ElementPredicate {
    fn matches(&self, element: ElementRef<'_>) -> bool;
}

impl<F> ElementPredicate for F
where
    F: Fn(ElementRef<'_>) -> bool,
{
    fn matches(&self, element: ElementRef<'_>) -> bool {
        self(element)
    }
}

/// Produces the summary text stored on a masked element.
pub trait MaskFormatter {
    fn format(&self, element: ElementRef<'_>) -> String;
}

impl<F> MaskFormatter for F
where
    F: Fn(ElementRef<'_>) -> String,
{
    fn format(&self, element: ElementRef<'_>) -> String {
        self(element)
    }
}

/// Matches elements whose tag name is in the set.
///
/// Tags are compared lowercase, which is how html5ever reports HTML element
/// names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_ascii_lowercase())
    }
}

impl ElementPredicate for TagSet {
    fn matches(&self, element: ElementRef<'_>) -> bool {
        self.contains(element.tag_name())
    }
}

/// The mask text used when the caller supplies none.
///
/// Links are summarized by their target (`href: <url>`, or `href: N/A`);
/// every other element by its full markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMaskText;

impl MaskFormatter for DefaultMaskText {
    fn format(&self, element: ElementRef<'_>) -> String {
        if element.tag_name() == "a" {
            format!("href: {}", element.attr("href").unwrap_or("N/A"))
        } else {
            element.outer_html()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;

    #[test]
    fn test_tag_set_is_case_insensitive() {
        let set = TagSet::new(["DIV", " span ", ""]);
        assert!(set.contains("div"));
        assert!(set.contains("SPAN"));
        assert!(!set.contains("p"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_closures_are_predicates() {
        let dom = parse_html(r#"<p class="lead">x</p>"#);
        let p = ElementRef::new(&dom, dom.find_by_tag("p").unwrap()).unwrap();

        let has_class = |el: ElementRef<'_>| el.attr("class").is_some();
        assert!(has_class.matches(p));

        let upper = |el: ElementRef<'_>| el.tag_name().to_uppercase();
        assert_eq!(upper.format(p), "P");
    }

    #[test]
    fn test_default_mask_text_for_links() {
        let dom = parse_html(r#"<a href="/docs">Docs</a><a name="top">Top</a>"#);
        let links: Vec<_> = dom
            .elements()
            .into_iter()
            .filter(|&id| dom.tag_name(id) == Some("a"))
            .collect();

        let first = ElementRef::new(&dom, links[0]).unwrap();
        let second = ElementRef::new(&dom, links[1]).unwrap();
        assert_eq!(DefaultMaskText.format(first), "href: /docs");
        assert_eq!(DefaultMaskText.format(second), "href: N/A");
    }

    #[test]
    fn test_default_mask_text_is_markup() {
        let dom = parse_html(r#"<ul><li>one</li><li>two</li></ul>"#);
        let ul = ElementRef::new(&dom, dom.find_by_tag("ul").unwrap()).unwrap();
        assert_eq!(DefaultMaskText.format(ul), "<ul><li>one</li><li>two</li></ul>");
    }
}
