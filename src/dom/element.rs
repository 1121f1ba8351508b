//! Read-only element handle handed to predicates and mask formatters.

use std::collections::BTreeMap;
use std::fmt;

use super::arena::{ArenaDom, Attribute, NodeId};
use super::serialize;

/// A borrowed view of one element in an [`ArenaDom`].
///
/// Predicates only ever see elements: text, comments and doctypes are opaque
/// to the tree passes.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    dom: &'a ArenaDom,
    id: NodeId,
}

impl<'a> ElementRef<'a> {
    /// Wrap a node, returning `None` unless it is an element.
    pub fn new(dom: &'a ArenaDom, id: NodeId) -> Option<Self> {
        dom.is_element(id).then_some(Self { dom, id })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn dom(&self) -> &'a ArenaDom {
        self.dom
    }

    /// Local tag name, lowercase for parsed HTML.
    pub fn tag_name(&self) -> &'a str {
        self.dom.tag_name(self.id).unwrap_or_default()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.dom.get_attr(self.id, name)
    }

    /// Attributes in source order.
    pub fn attributes(&self) -> &'a [Attribute] {
        self.dom.attributes(self.id)
    }

    /// Attributes keyed by name in lexicographic order.
    pub fn attribute_map(&self) -> BTreeMap<&'a str, &'a str> {
        self.attributes()
            .iter()
            .map(|a| (a.name.local.as_ref(), a.value.as_str()))
            .collect()
    }

    pub fn mask(&self) -> Option<&'a str> {
        self.dom.mask(self.id)
    }

    /// Element children in document order.
    pub fn children(&self) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        let dom = self.dom;
        dom.element_children(self.id)
            .map(move |id| ElementRef { dom, id })
    }

    /// Full markup of the element and everything below it.
    pub fn outer_html(&self) -> String {
        serialize::outer_html(self.dom, self.id)
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id)
            .field("tag", &self.tag_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_elements_are_rejected() {
        let mut dom = ArenaDom::new();
        let text = dom.create_text("hi".into());
        assert!(ElementRef::new(&dom, text).is_none());
        assert!(ElementRef::new(&dom, dom.document()).is_none());
    }

    #[test]
    fn test_attribute_map_is_sorted() {
        let mut dom = ArenaDom::new();
        let div = dom.create_html_element("div", &[("id", "a"), ("class", "b"), ("aria-label", "c")]);
        dom.append(dom.document(), div);

        let el = ElementRef::new(&dom, div).unwrap();
        let keys: Vec<_> = el.attribute_map().into_keys().collect();
        assert_eq!(keys, vec!["aria-label", "class", "id"]);
        assert_eq!(el.attr("class"), Some("b"));
    }

    #[test]
    fn test_children_are_elements_only() {
        let mut dom = ArenaDom::new();
        let ul = dom.create_html_element("ul", &[]);
        dom.append(dom.document(), ul);
        dom.append_text(ul, "\n  ");
        let li = dom.create_html_element("li", &[]);
        dom.append(ul, li);

        let el = ElementRef::new(&dom, ul).unwrap();
        let tags: Vec<_> = el.children().map(|c| c.tag_name()).collect();
        assert_eq!(tags, vec!["li"]);
    }
}
