//! Tree rewriting passes.
//!
//! Both passes mutate an [`ArenaDom`](crate::dom::ArenaDom) in place, visit
//! each element at most once and use an explicit work stack, so document
//! depth is bounded by memory rather than the call stack.
//!
//! ## Pipeline Order
//!
//! 1. **Branch filter** - drop subtrees with no element matching `keep`
//! 2. **Subtree masker** - collapse matching elements into annotated leaves
//!
//! The passes are independent and can run in either order; filtering first
//! means no mask text is computed for elements that are about to be pruned.
//!
//! # Example
//!
//! ```
//! use dommap::dom::parse_html;
//! use dommap::transform::{filter_branches, mask_elements, DefaultMaskText, FilterMode, TagSet};
//!
//! let mut dom = parse_html("<div><a href='/x'>x</a></div><p>y</p>");
//! let root = dom.root();
//!
//! let keep = TagSet::new(["a"]);
//! filter_branches(&mut dom, root, Some(&keep), FilterMode::Retest).unwrap();
//! assert!(dom.find_by_tag("p").is_none());
//!
//! let mask = TagSet::new(["a"]);
//! mask_elements(&mut dom, root, &mask, Some(&DefaultMaskText)).unwrap();
//! let a = dom.find_by_tag("a").unwrap();
//! assert_eq!(dom.mask(a), Some("href: /x"));
//! ```

mod filter;
mod mask;
mod predicate;

pub use filter::{FilterMode, FilterStats, filter_branches};
pub use mask::mask_elements;
pub use predicate::{DefaultMaskText, ElementPredicate, MaskFormatter, TagSet};
