//! Subtree masker: collapse matching elements into annotated leaves.

use crate::dom::{ArenaDom, ElementRef, NodeId};
use crate::error::{Error, Result};

use super::predicate::{ElementPredicate, MaskFormatter};

/// Replace every matching element's subtree with a single annotated leaf.
///
/// The walk is pre-order. When an element matches `should_mask`, its mask
/// annotation is set to `mask_text(element)` (computed before anything is
/// removed), all of its element children are detached and the walk does not
/// descend further. Only the first match along a path is annotated.
/// Non-matching elements are walked into, so masked nodes can sit below
/// unmasked ones.
///
/// Returns the number of elements masked. A match with no `mask_text`
/// fails with [`Error::MissingPredicate`], leaving earlier masks in place.
pub fn mask_elements(
    dom: &mut ArenaDom,
    root: NodeId,
    should_mask: &dyn ElementPredicate,
    mask_text: Option<&dyn MaskFormatter>,
) -> Result<usize> {
    dom.ensure_attached(root)?;

    let mut masked = 0;
    let mut stack = vec![root];

    while let Some(id) = stack.pop() {
        let annotation = match ElementRef::new(dom, id) {
            Some(element) if should_mask.matches(element) => {
                let Some(formatter) = mask_text else {
                    return Err(Error::MissingPredicate(format!(
                        "<{}> matched the mask predicate but no mask text formatter was supplied",
                        element.tag_name()
                    )));
                };
                Some(formatter.format(element))
            }
            _ => None,
        };

        let children: Vec<_> = dom.element_children(id).collect();
        match annotation {
            Some(text) => {
                tracing::trace!(node = id.0, tag = dom.tag_name(id), "masking subtree");
                dom.set_mask(id, text)?;
                for child in children {
                    dom.detach(child)?;
                }
                masked += 1;
            }
            None => stack.extend(children.into_iter().rev()),
        }
    }

    tracing::debug!(masked, "subtree masking finished");
    Ok(masked)
}
