//! Mutable DOM tree model.
//!
//! HTML is parsed by html5ever into an [`ArenaDom`]; everything downstream
//! (filtering, masking, flattening) works on node indices into that arena.
//!
//! # Example
//!
//! ```
//! use dommap::dom::parse_html;
//!
//! let dom = parse_html("<div id='a'><span>x</span></div>");
//! let div = dom.find_by_tag("div").unwrap();
//! assert_eq!(dom.get_attr(div, "id"), Some("a"));
//! ```

mod arena;
mod element;
pub mod serialize;
mod tree_sink;

pub use arena::{ArenaDom, Attribute, ChildrenIter, Node, NodeData, NodeId};
pub use element::ElementRef;
pub use tree_sink::ArenaSink;

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;

/// Parse an HTML document into an arena DOM.
///
/// Parsing never fails: malformed markup is repaired the way browsers do,
/// which also means implied `html`, `head` and `body` elements are always
/// present in the result.
pub fn parse_html(html: &str) -> ArenaDom {
    let sink = parse_document(ArenaSink::new(), ParseOpts::default())
        .from_utf8()
        .one(html.as_bytes());

    let errors = sink.error_count();
    let dom = sink.into_dom();
    tracing::debug!(nodes = dom.len(), errors, "parsed html document");
    dom
}
