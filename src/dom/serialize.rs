//! Markup serialization for arena subtrees.
//!
//! The arena implements html5ever's [`Serialize`] trait, so escaping, void
//! elements and raw-text content follow the HTML serialization algorithm
//! exactly as html5ever applies it.

use std::io;

use html5ever::QualName;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};

use super::arena::{ArenaDom, NodeData, NodeId};

/// A node of an [`ArenaDom`] that html5ever can serialize.
#[derive(Clone, Copy)]
pub struct SerializableNode<'a> {
    dom: &'a ArenaDom,
    id: NodeId,
}

impl<'a> SerializableNode<'a> {
    pub fn new(dom: &'a ArenaDom, id: NodeId) -> Self {
        Self { dom, id }
    }
}

enum Op<'a> {
    Open(NodeId),
    Close(&'a QualName),
}

fn push_children(dom: &ArenaDom, id: NodeId, ops: &mut Vec<Op<'_>>) {
    let children: Vec<_> = dom.children(id).collect();
    ops.extend(children.into_iter().rev().map(Op::Open));
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let dom = self.dom;
        let mut ops = Vec::new();
        match traversal_scope {
            TraversalScope::IncludeNode => ops.push(Op::Open(self.id)),
            TraversalScope::ChildrenOnly(_) => push_children(dom, self.id, &mut ops),
        }

        // Explicit stack: document depth is not bounded by the call stack
        while let Some(op) = ops.pop() {
            let id = match op {
                Op::Open(id) => id,
                Op::Close(name) => {
                    serializer.end_elem(name.clone())?;
                    continue;
                }
            };
            let Some(node) = dom.get(id) else {
                continue;
            };

            match &node.data {
                NodeData::Document => push_children(dom, id, &mut ops),
                NodeData::Element { name, attrs, .. } => {
                    serializer.start_elem(
                        name.clone(),
                        attrs.iter().map(|a| (&a.name, a.value.as_str())),
                    )?;
                    ops.push(Op::Close(name));
                    push_children(dom, id, &mut ops);
                }
                NodeData::Text(text) => serializer.write_text(text)?,
                NodeData::Comment(text) => serializer.write_comment(text)?,
                NodeData::Doctype { name, .. } => serializer.write_doctype(name)?,
            }
        }
        Ok(())
    }
}

/// Serialize a node and all of its descendants.
pub fn outer_html(dom: &ArenaDom, id: NodeId) -> String {
    let mut bytes = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    if let Err(error) = serialize(&mut bytes, &SerializableNode::new(dom, id), opts) {
        tracing::warn!(%error, node = id.0, "html serialization failed");
    }

    String::from_utf8(bytes).unwrap_or_default()
}
