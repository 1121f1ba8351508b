//! Property tests for the tree passes over generated documents.

use std::collections::HashSet;

use proptest::prelude::*;

use dommap::chart::{DEFAULT_WRAP_LIMIT, ROOT_PARENT, flatten};
use dommap::dom::serialize::outer_html;
use dommap::dom::{ArenaDom, ElementRef, NodeId};
use dommap::transform::{filter_branches, mask_elements};
use dommap::{DefaultMaskText, ElementPredicate, FilterMode, TagSet};

const TAGS: &[&str] = &["div", "span", "p", "a", "ul", "li", "em"];

/// One generated node: which earlier element becomes its parent, its tag,
/// and whether it gets a text sibling.
type Spec = (usize, usize, bool);

fn tree_specs() -> impl Strategy<Value = Vec<Spec>> {
    prop::collection::vec((any::<usize>(), 0..TAGS.len(), any::<bool>()), 0..60)
}

fn tag_sets() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(TAGS.to_vec(), 0..=3)
}

fn build(specs: &[Spec]) -> ArenaDom {
    let mut dom = ArenaDom::new();
    let html = dom.create_html_element("html", &[]);
    dom.append(dom.document(), html);

    let mut elements = vec![html];
    for (i, &(parent, tag, text)) in specs.iter().enumerate() {
        let parent = elements[parent % elements.len()];
        let id = i.to_string();
        let el = dom.create_html_element(TAGS[tag], &[("id", id.as_str())]);
        if text {
            dom.append_text(parent, "t");
        }
        dom.append(parent, el);
        elements.push(el);
    }
    dom
}

fn subtree_matches(dom: &ArenaDom, id: NodeId, keep: &TagSet) -> bool {
    ElementRef::new(dom, id).is_some_and(|el| keep.matches(el))
        || dom
            .element_children(id)
            .any(|child| subtree_matches(dom, child, keep))
}

fn ancestors(dom: &ArenaDom, id: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut current = dom.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE);
    while current.is_some() && current != dom.document() {
        out.push(current);
        current = dom.get(current).map(|n| n.parent).unwrap_or(NodeId::NONE);
    }
    out
}

proptest! {
    #[test]
    fn prop_filter_is_idempotent(specs in tree_specs(), keep in tag_sets()) {
        let mut dom = build(&specs);
        let root = dom.root();
        let keep = TagSet::new(keep);

        filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();
        let once = outer_html(&dom, root);
        let stats = filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        prop_assert_eq!(stats.pruned, 0);
        prop_assert_eq!(outer_html(&dom, root), once);
    }

    #[test]
    fn prop_filter_keeps_only_matching_branches(specs in tree_specs(), keep in tag_sets()) {
        let mut dom = build(&specs);
        let root = dom.root();
        let keep = TagSet::new(keep);

        let original = dom.clone();
        filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();

        for id in dom.elements() {
            if id != root {
                prop_assert!(subtree_matches(&dom, id, &keep));
            }
        }
        // Nothing that had a match below it was lost
        for id in original.elements() {
            if subtree_matches(&original, id, &keep) {
                prop_assert!(dom.is_attached(id));
            }
        }
    }

    #[test]
    fn prop_keep_descendants_retains_whole_match(specs in tree_specs(), keep in tag_sets()) {
        let mut dom = build(&specs);
        let root = dom.root();
        let keep = TagSet::new(keep);

        let original = dom.clone();
        filter_branches(&mut dom, root, Some(&keep), FilterMode::KeepDescendants).unwrap();

        for id in original.elements() {
            let matched = ElementRef::new(&original, id).is_some_and(|el| keep.matches(el));
            if matched {
                prop_assert_eq!(outer_html(&dom, id), outer_html(&original, id));
            }
        }
    }

    #[test]
    fn prop_masked_elements_are_leaves(specs in tree_specs(), mask in tag_sets()) {
        let mut dom = build(&specs);
        let root = dom.root();
        let mask = TagSet::new(mask);

        mask_elements(&mut dom, root, &mask, Some(&DefaultMaskText)).unwrap();

        for id in dom.elements() {
            if dom.mask(id).is_some() {
                prop_assert!(!dom.has_element_children(id));
                for ancestor in ancestors(&dom, id) {
                    prop_assert!(dom.mask(ancestor).is_none());
                }
            } else {
                let matched = ElementRef::new(&dom, id).is_some_and(|el| mask.matches(el));
                prop_assert!(!matched, "unmasked element still matches");
            }
        }
    }

    #[test]
    fn prop_flatten_emits_parents_first(
        specs in tree_specs(),
        keep in tag_sets(),
        mask in tag_sets(),
    ) {
        let mut dom = build(&specs);
        let root = dom.root();
        let keep = TagSet::new(keep);
        let mask = TagSet::new(mask);

        filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();
        mask_elements(&mut dom, root, &mask, Some(&DefaultMaskText)).unwrap();
        let records = flatten(&dom, root, DEFAULT_WRAP_LIMIT).unwrap();

        prop_assert_eq!(records.len(), dom.elements().len());
        let mut seen = HashSet::new();
        for record in &records {
            prop_assert!(record.parent_id == ROOT_PARENT || seen.contains(&record.parent_id));
            prop_assert!(seen.insert(record.id.clone()));
        }
        prop_assert_eq!(records.iter().filter(|r| r.parent_id == ROOT_PARENT).count(), 1);
    }
}
