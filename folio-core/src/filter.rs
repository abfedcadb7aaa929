//! Category filter over a catalog.

use crate::catalog::{CatalogItem, CategoryTag};

/// Items matching `selected`, in catalog order.
///
/// The wildcard returns the whole catalog. A category no item carries yields
/// an empty list.
pub fn filter_items<'a>(items: &'a [CatalogItem], selected: &CategoryTag) -> Vec<&'a CatalogItem> {
    filter_indexed(items, selected)
        .into_iter()
        .map(|(_, item)| item)
        .collect()
}

/// Like [`filter_items`], paired with each item's position in `items`.
pub fn filter_indexed<'a>(
    items: &'a [CatalogItem],
    selected: &CategoryTag,
) -> Vec<(usize, &'a CatalogItem)> {
    let indexed = items.iter().enumerate();
    match selected {
        CategoryTag::All => indexed.collect(),
        CategoryTag::Named(name) => indexed.filter(|(_, item)| item.has_category(name)).collect(),
    }
}
