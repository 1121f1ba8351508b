//! Pre-order linearization of the tree into treemap records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dom::{ArenaDom, NodeData, NodeId};
use crate::error::{Error, Result};

use super::wrap::wrap;

/// Parent id of the first record.
pub const ROOT_PARENT: &str = "";

/// Label used when the document node itself is the root.
pub const DOCUMENT_LABEL: &str = "#document";

/// One treemap node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRecord {
    /// Unique within one flatten call.
    pub id: String,
    /// [`ROOT_PARENT`] for the root, otherwise the id of an earlier record.
    pub parent_id: String,
    /// Element tag name.
    pub label: String,
    /// Mask annotation or serialized attributes, already wrapped.
    pub hover_text: String,
}

/// Records split into the parallel arrays a treemap trace takes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub ids: Vec<String>,
    pub parents: Vec<String>,
    pub labels: Vec<String>,
    #[serde(rename = "hovertext")]
    pub hover_text: Vec<String>,
}

impl ChartData {
    pub fn from_records(records: &[ChartRecord]) -> Self {
        let mut data = Self::default();
        for record in records {
            data.ids.push(record.id.clone());
            data.parents.push(record.parent_id.clone());
            data.labels.push(record.label.clone());
            data.hover_text.push(record.hover_text.clone());
        }
        data
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Walk the tree from `root` in pre-order and emit one record per element.
///
/// Ids are paths: the root's id is its label, and each child appends
/// `/{tag}[{n}]` where `n` is its position among its parent's element
/// children. Text and comment nodes produce no records. Hover text is the
/// mask annotation when present, otherwise the attributes as a JSON object
/// with sorted keys, wrapped at `wrap_limit` characters.
pub fn flatten(dom: &ArenaDom, root: NodeId, wrap_limit: usize) -> Result<Vec<ChartRecord>> {
    dom.ensure_attached(root)?;

    let root_label = match dom.get(root).map(|n| &n.data) {
        Some(NodeData::Element { name, .. }) => name.local.to_string(),
        Some(NodeData::Document) => DOCUMENT_LABEL.to_string(),
        _ => {
            return Err(Error::InvalidState(format!(
                "node {} is neither an element nor the document",
                root.0
            )));
        }
    };

    let mut records = Vec::new();
    let mut stack = vec![(root, root_label.clone(), ROOT_PARENT.to_string(), root_label)];

    while let Some((id, node_id, parent_id, label)) = stack.pop() {
        let hover = match dom.mask(id) {
            Some(mask) => mask.to_string(),
            None => attributes_json(dom, id)?,
        };

        let children: Vec<_> = dom
            .element_children(id)
            .enumerate()
            .map(|(n, child)| {
                let tag = dom.tag_name(child).unwrap_or_default().to_string();
                (child, format!("{node_id}/{tag}[{n}]"), node_id.clone(), tag)
            })
            .collect();
        stack.extend(children.into_iter().rev());

        records.push(ChartRecord {
            id: node_id,
            parent_id,
            label,
            hover_text: wrap(&hover, wrap_limit),
        });
    }

    tracing::debug!(records = records.len(), "flattened tree");
    Ok(records)
}

fn attributes_json(dom: &ArenaDom, id: NodeId) -> Result<String> {
    let map: BTreeMap<&str, &str> = dom
        .attributes(id)
        .iter()
        .map(|a| (a.name.local.as_ref(), a.value.as_str()))
        .collect();
    Ok(serde_json::to_string(&map)?)
}
