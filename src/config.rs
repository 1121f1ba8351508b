//! Run options shared by the CLI and the WASM binding.

use serde::{Deserialize, Serialize};

use crate::chart::{DEFAULT_WRAP_LIMIT, Layout};
use crate::transform::{FilterMode, TagSet};

/// What to keep, what to mask and how to lay out the chart.
///
/// # Example
///
/// ```
/// use dommap::Options;
///
/// let options = Options::new()
///     .with_branch(["table"])
///     .with_mask(["a", "svg"])
///     .with_wrap_limit(80);
/// assert!(options.mask_tags().unwrap().contains("svg"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Tags whose elements (and their ancestors) survive filtering. Empty
    /// means no filtering.
    pub branch: Vec<String>,
    /// Tags whose elements are collapsed into annotated leaves. Empty means
    /// no masking.
    pub mask: Vec<String>,
    pub filter_mode: FilterMode,
    /// Hover text line length in characters.
    pub wrap_limit: usize,
    pub layout: Layout,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            branch: Vec::new(),
            mask: Vec::new(),
            filter_mode: FilterMode::default(),
            wrap_limit: DEFAULT_WRAP_LIMIT,
            layout: Layout::default(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_branch<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branch.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_mask<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mask.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    pub fn with_wrap_limit(mut self, limit: usize) -> Self {
        self.wrap_limit = limit;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Branch predicate, or `None` when no usable tag was given.
    pub fn branch_tags(&self) -> Option<TagSet> {
        Some(TagSet::new(&self.branch)).filter(|set| !set.is_empty())
    }

    /// Mask predicate, or `None` when no usable tag was given.
    pub fn mask_tags(&self) -> Option<TagSet> {
        Some(TagSet::new(&self.mask)).filter(|set| !set.is_empty())
    }
}
