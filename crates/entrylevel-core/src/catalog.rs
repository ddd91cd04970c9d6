//! Record catalog: template snapshots per record file, filtering and paging.

use serde::Serialize;

use crate::schema::Template;

/// A record file and the template snapshot embedded in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordInfo {
    pub file_name: String,
    pub template: Template,
}

/// Keep catalog items whose template name or any field name contains `query`.
///
/// Matching is case-insensitive. A blank query keeps everything.
pub fn filter_catalog(infos: Vec<RecordInfo>, query: &str) -> Vec<RecordInfo> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return infos;
    }
    infos
        .into_iter()
        .filter(|info| {
            info.template.name.to_lowercase().contains(&needle)
                || info
                    .template
                    .fields
                    .iter()
                    .any(|f| f.name.to_lowercase().contains(&needle))
        })
        .collect()
}

/// One page of a larger list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number, clamped into `1..=total_pages`
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice `items` into pages of `per_page` and return page `page` (1-based).
///
/// Out-of-range page numbers clamp to the nearest page; an empty list has a
/// single empty page. `per_page` of zero is treated as one.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);

    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}
