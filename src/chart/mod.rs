//! Treemap-ready output.
//!
//! [`flatten`] turns a (filtered, masked) tree into [`ChartRecord`]s whose
//! parents always come first, [`ChartData`] regroups them into the parallel
//! arrays a treemap trace expects, and [`render_page`] wraps that in a
//! standalone HTML page.

mod flatten;
mod treemap;
mod wrap;

pub use flatten::{ChartData, ChartRecord, DOCUMENT_LABEL, ROOT_PARENT, flatten};
pub use treemap::{Layout, figure_json, render_page};
pub use wrap::{DEFAULT_WRAP_LIMIT, LINE_BREAK, wrap};
