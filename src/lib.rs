//! # dommap
//!
//! Turn an HTML document into a treemap of its element hierarchy.
//!
//! ## Pipeline
//!
//! 1. Parse HTML into an arena DOM ([`dom::parse_html`])
//! 2. Optionally keep only branches leading to interesting elements
//!    ([`transform::filter_branches`])
//! 3. Optionally collapse noisy subtrees into one annotated leaf
//!    ([`transform::mask_elements`])
//! 4. Flatten the tree into parent-first [`ChartRecord`]s ([`chart::flatten`])
//!
//! ## Quick Start
//!
//! ```
//! use dommap::{visualize, Options};
//!
//! let html = r#"<html><body><div id="a"><span>x</span></div><p>y</p></body></html>"#;
//! let records = visualize(html, &Options::new().with_mask(["div"])).unwrap();
//!
//! let div = records.iter().find(|r| r.label == "div").unwrap();
//! assert_eq!(div.hover_text, r#"<div id="a"><span>x</span></div>"#);
//! ```
//!
//! ## Custom predicates
//!
//! [`Pipeline`] takes any closure or [`ElementPredicate`] implementation:
//!
//! ```
//! use dommap::dom::{parse_html, ElementRef};
//! use dommap::Pipeline;
//!
//! let mut dom = parse_html(r#"<ul><li class="hot">a</li><li>b</li></ul>"#);
//! let hot = |el: ElementRef<'_>| el.attr("class") == Some("hot");
//!
//! let records = Pipeline::new().keep(&hot).run(&mut dom).unwrap();
//! assert_eq!(records.iter().filter(|r| r.label == "li").count(), 1);
//! ```

pub mod chart;
pub mod config;
pub mod dom;
pub mod error;
pub mod source;
pub mod transform;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use chart::{ChartData, ChartRecord};
pub use config::Options;
pub use error::{Error, Result};
pub use source::Source;
pub use transform::{DefaultMaskText, ElementPredicate, FilterMode, MaskFormatter, TagSet};

use chart::DEFAULT_WRAP_LIMIT;
use dom::ArenaDom;

/// Filter, mask and flatten a parsed tree, starting at [`ArenaDom::root`].
///
/// Each step is skipped when its predicate is absent. When masking is
/// requested without a formatter, [`DefaultMaskText`] is used.
#[derive(Clone, Copy)]
pub struct Pipeline<'a> {
    keep: Option<&'a dyn ElementPredicate>,
    should_mask: Option<&'a dyn ElementPredicate>,
    mask_text: Option<&'a dyn MaskFormatter>,
    filter_mode: FilterMode,
    wrap_limit: usize,
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self {
            keep: None,
            should_mask: None,
            mask_text: None,
            filter_mode: FilterMode::Retest,
            wrap_limit: DEFAULT_WRAP_LIMIT,
        }
    }

    pub fn keep(mut self, keep: &'a dyn ElementPredicate) -> Self {
        self.keep = Some(keep);
        self
    }

    pub fn mask(mut self, should_mask: &'a dyn ElementPredicate) -> Self {
        self.should_mask = Some(should_mask);
        self
    }

    pub fn mask_text(mut self, mask_text: &'a dyn MaskFormatter) -> Self {
        self.mask_text = Some(mask_text);
        self
    }

    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    pub fn wrap_limit(mut self, limit: usize) -> Self {
        self.wrap_limit = limit;
        self
    }

    /// Run the passes in order and return the chart records.
    ///
    /// The tree is mutated in place; clone it first to keep the original.
    pub fn run(&self, dom: &mut ArenaDom) -> Result<Vec<ChartRecord>> {
        let root = dom.root();

        if self.keep.is_some() {
            transform::filter_branches(dom, root, self.keep, self.filter_mode)?;
        }

        if let Some(should_mask) = self.should_mask {
            let mask_text = self.mask_text.unwrap_or(&DefaultMaskText);
            transform::mask_elements(dom, root, should_mask, Some(mask_text))?;
        }

        chart::flatten(dom, root, self.wrap_limit)
    }
}

/// Parse `html` and run the pipeline described by `options`.
pub fn visualize(html: &str, options: &Options) -> Result<Vec<ChartRecord>> {
    if html.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let mut dom = dom::parse_html(html);
    let branch = options.branch_tags();
    let mask = options.mask_tags();

    let mut pipeline = Pipeline::new()
        .filter_mode(options.filter_mode)
        .wrap_limit(options.wrap_limit);
    if let Some(branch) = &branch {
        pipeline = pipeline.keep(branch);
    }
    if let Some(mask) = &mask {
        pipeline = pipeline.mask(mask);
    }

    pipeline.run(&mut dom)
}
