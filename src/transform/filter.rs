//! Branch filter: keep matching elements and their ancestors.

use serde::{Deserialize, Serialize};

use crate::dom::{ArenaDom, ElementRef, NodeId};
use crate::error::Result;

use super::predicate::ElementPredicate;

/// How a match affects the elements below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Every element is tested on its own; a matching ancestor does not
    /// protect descendants that neither match nor contain a match.
    #[default]
    Retest,
    /// A matching element keeps its whole subtree untouched.
    KeepDescendants,
}

/// Summary of one filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Whether the starting node matched or kept a matching descendant.
    /// The starting node is never detached either way.
    pub root_kept: bool,
    /// Elements the predicate was evaluated on.
    pub visited: usize,
    /// Subtrees detached from the tree.
    pub pruned: usize,
}

/// Remove every element subtree that neither matches `keep` nor contains a
/// matching element.
///
/// The walk is post-order: an element's fate is decided after all of its
/// element children have reported back, and each child that was not kept is
/// detached by its parent. Text and comment nodes are never visited; they go
/// away only with their parent. With no predicate nothing is removed.
pub fn filter_branches(
    dom: &mut ArenaDom,
    root: NodeId,
    keep: Option<&dyn ElementPredicate>,
    mode: FilterMode,
) -> Result<FilterStats> {
    dom.ensure_attached(root)?;

    let mut stats = FilterStats {
        root_kept: true,
        visited: 0,
        pruned: 0,
    };
    let Some(keep) = keep else {
        return Ok(stats);
    };

    // Indexed by NodeId; nodes are never created during the pass.
    let mut kept = vec![false; dom.len()];
    let mut stack = vec![(root, false)];

    while let Some((id, children_done)) = stack.pop() {
        if !children_done {
            let matched = match ElementRef::new(dom, id) {
                Some(element) => {
                    stats.visited += 1;
                    keep.matches(element)
                }
                None => false,
            };
            kept[id.index()] = matched;
            tracing::trace!(node = id.0, tag = dom.tag_name(id), matched, "branch filter");

            if matched && mode == FilterMode::KeepDescendants {
                continue;
            }

            stack.push((id, true));
            let children: Vec<_> = dom.element_children(id).collect();
            stack.extend(children.into_iter().rev().map(|c| (c, false)));
            continue;
        }

        let children: Vec<_> = dom.element_children(id).collect();
        for child in children {
            if kept[child.index()] {
                kept[id.index()] = true;
            } else {
                dom.detach(child)?;
                stats.pruned += 1;
            }
        }
    }

    stats.root_kept = kept[root.index()];
    tracing::debug!(
        visited = stats.visited,
        pruned = stats.pruned,
        root_kept = stats.root_kept,
        "branch filter finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use crate::error::Error;
    use crate::transform::TagSet;

    const SAMPLE: &str =
        r#"<html><body><div id="a"><span>x</span></div><p>y</p></body></html>"#;

    fn tags(dom: &ArenaDom) -> Vec<&str> {
        dom.elements()
            .into_iter()
            .filter_map(|id| dom.tag_name(id))
            .collect()
    }

    #[test]
    fn test_keeps_ancestors_of_match() {
        let mut dom = parse_html(SAMPLE);
        let root = dom.root();
        let keep = TagSet::new(["span"]);

        let stats = filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        assert_eq!(tags(&dom), vec!["html", "body", "div", "span"]);
        assert!(stats.root_kept);
        // head and p
        assert_eq!(stats.pruned, 2);
    }

    #[test]
    fn test_no_match_leaves_empty_root() {
        let mut dom = parse_html(SAMPLE);
        let root = dom.root();
        let keep = TagSet::new(["table"]);

        let stats = filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        assert!(!stats.root_kept);
        assert!(dom.is_attached(root));
        assert_eq!(tags(&dom), vec!["html"]);
    }

    #[test]
    fn test_absent_predicate_keeps_everything() {
        let mut dom = parse_html(SAMPLE);
        let root = dom.root();
        let before = tags(&dom).len();

        let stats = filter_branches(&mut dom, root, None, FilterMode::Retest).unwrap();

        assert_eq!(stats.pruned, 0);
        assert_eq!(tags(&dom).len(), before);
    }

    #[test]
    fn test_match_is_not_inherited_downward() {
        let mut dom = parse_html("<div><em>keep</em><b>drop</b></div>");
        let root = dom.root();
        let keep = TagSet::new(["div", "em"]);

        filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        assert_eq!(tags(&dom), vec!["html", "body", "div", "em"]);
    }

    #[test]
    fn test_keep_descendants_mode() {
        let mut dom = parse_html("<div><em>keep</em><b>also kept</b></div><p>gone</p>");
        let root = dom.root();
        let keep = TagSet::new(["div"]);

        filter_branches(&mut dom, root, Some(&keep), FilterMode::KeepDescendants).unwrap();

        assert_eq!(tags(&dom), vec!["html", "body", "div", "em", "b"]);
    }

    #[test]
    fn test_text_of_kept_element_survives() {
        let mut dom = parse_html("<p>hello <b>world</b></p><i>x</i>");
        let root = dom.root();
        let keep = TagSet::new(["p"]);

        filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        let p = dom.find_by_tag("p").unwrap();
        let texts: Vec<_> = dom
            .children(p)
            .filter_map(|c| dom.text_content(c))
            .collect();
        assert_eq!(texts, vec!["hello "]);
        assert!(dom.find_by_tag("b").is_none());
        assert!(dom.find_by_tag("i").is_none());
    }

    #[test]
    fn test_closure_predicate_on_attributes() {
        let mut dom = parse_html(r#"<div><p class="x">a</p><p>b</p></div>"#);
        let root = dom.root();
        let keep = |el: ElementRef<'_>| el.attr("class") == Some("x");

        filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        let ps: Vec<_> = dom
            .elements()
            .into_iter()
            .filter(|&id| dom.tag_name(id) == Some("p"))
            .collect();
        assert_eq!(ps.len(), 1);
        assert_eq!(dom.get_attr(ps[0], "class"), Some("x"));
    }

    #[test]
    fn test_detached_root_is_invalid_state() {
        let mut dom = parse_html(SAMPLE);
        let div = dom.find_by_tag("div").unwrap();
        dom.detach(div).unwrap();
        let keep = TagSet::new(["span"]);

        let result = filter_branches(&mut dom, div, Some(&keep), FilterMode::Retest);
        assert!(matches!(result, Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        let mut dom = ArenaDom::new();
        let mut parent = dom.document();
        for _ in 0..100_000 {
            let div = dom.create_html_element("div", &[]);
            dom.append(parent, div);
            parent = div;
        }
        let leaf = dom.create_html_element("mark", &[]);
        dom.append(parent, leaf);

        let root = dom.root();
        let keep = TagSet::new(["mark"]);
        let stats = filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        assert_eq!(stats.pruned, 0);
        assert_eq!(stats.visited, 100_001);
        assert!(dom.is_attached(leaf));
    }
}
