//! Building one output document out of pages from several sources.
//!
//! Each distinct source is imported once: inherited page attributes are
//! copied down onto its pages, its objects are renumbered above the ids
//! already in use, and everything is moved into the target. Selected pages are
//! then hung, in request order, under a fresh page tree. A page requested more
//! than once is attached as a shallow copy so that every leaf of the tree is
//! its own object. Whatever the new tree does not reach is pruned.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

use crate::error::{PdfPickError, Result};
use crate::io::{LoadedPdf, PageHandle};

/// Version written when no source is imported.
const DEFAULT_VERSION: &str = "1.5";

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Deepest page tree walked when looking up inherited attributes.
const MAX_TREE_DEPTH: usize = 64;

/// Compose a new document holding `pages` in order.
///
/// # Errors
///
/// Returns an error if a page handle does not resolve inside its source, or
/// if a page object is not a dictionary.
pub fn compose_document(pages: &[PageHandle]) -> Result<Document> {
    let mut target = Document::with_version(DEFAULT_VERSION);
    let pages_id = target.new_object_id();
    let catalog_id = target.new_object_id();

    // Source identity is the shared allocation, not the path: two opens of
    // one file are two sources.
    let mut imported: HashMap<*const LoadedPdf, BTreeMap<u32, ObjectId>> = HashMap::new();
    let mut kids = Vec::with_capacity(pages.len());
    let mut placed = HashSet::new();

    for handle in pages {
        let key = Arc::as_ptr(&handle.source);
        if !imported.contains_key(&key) {
            let page_ids = import_source(&mut target, &handle.source)?;
            imported.insert(key, page_ids);
        }

        let page_id = imported
            .get(&key)
            .and_then(|ids| ids.get(&handle.number))
            .copied()
            .ok_or_else(|| {
                PdfPickError::other(format!(
                    "Page {} does not exist in {}",
                    handle.number,
                    handle.source.path.display()
                ))
            })?;

        let leaf_id = if placed.insert(page_id) {
            page_id
        } else {
            let copy = target.get_object(page_id)?.clone();
            target.add_object(copy)
        };

        target
            .get_dictionary_mut(leaf_id)
            .map_err(|e| PdfPickError::other(format!("Page object is not a dictionary: {e}")))?
            .set("Parent", pages_id);
        kids.push(Object::Reference(leaf_id));
    }

    let count = kids.len() as i64;
    target.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    target.objects.insert(
        catalog_id,
        Object::Dictionary(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        }),
    );
    target.trailer.set("Root", catalog_id);

    target.prune_objects();

    log::debug!(
        "composed {} pages from {} source(s)",
        count,
        imported.len()
    );

    Ok(target)
}

/// Move all objects of `source` into `target`, returning its renumbered page ids.
fn import_source(target: &mut Document, source: &LoadedPdf) -> Result<BTreeMap<u32, ObjectId>> {
    let mut doc = source.document.clone();

    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    for page_id in page_ids {
        materialize_inherited(&mut doc, page_id)?;
    }

    doc.renumber_objects_with(target.max_id + 1);
    target.max_id = target.max_id.max(doc.max_id);

    if doc.version > target.version {
        target.version = doc.version.clone();
    }

    let pages = doc.get_pages();
    target.objects.extend(doc.objects);

    Ok(pages)
}

/// Copy inheritable attributes from the page's ancestors onto the page itself.
fn materialize_inherited(doc: &mut Document, page_id: ObjectId) -> Result<()> {
    let page = doc.get_dictionary(page_id)?;

    let mut inherited = Vec::new();
    for key in INHERITABLE_KEYS {
        if page.has(key) {
            continue;
        }
        if let Some(value) = find_inherited(doc, page, key) {
            inherited.push((key.to_vec(), value));
        }
    }

    if inherited.is_empty() {
        return Ok(());
    }

    let page = doc.get_dictionary_mut(page_id)?;
    for (key, value) in inherited {
        page.set(key, value);
    }

    Ok(())
}

/// Walk up the `Parent` chain looking for `key`.
fn find_inherited(doc: &Document, page: &Dictionary, key: &[u8]) -> Option<Object> {
    let mut parent_id = page.get(b"Parent").and_then(Object::as_reference).ok()?;

    for _ in 0..MAX_TREE_DEPTH {
        let node = doc.get_dictionary(parent_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(value.clone());
        }
        parent_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    }

    None
}
