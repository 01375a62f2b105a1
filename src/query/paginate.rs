use serde::Serialize;

/// Pagination metadata returned with every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    /// Count of the candidate set before slicing, not the page's own length
    pub total: u64,
}

/// One page of records plus its metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Empty page echoing the requested window with a zero total
    pub fn empty(page: i64, per_page: i64) -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination {
                page,
                per_page,
                total: 0,
            },
        }
    }
}

/// Slice an ordered sequence into a single 1-based page.
///
/// Out-of-range pages (past the end, `page <= 0`, `per_page <= 0`) produce
/// an empty page that still reports the true total; this never fails.
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: i64) -> Page<T> {
    let total = items.len() as u64;

    let data = if page < 1 || per_page < 1 {
        Vec::new()
    } else {
        let offset = usize::try_from((page - 1).saturating_mul(per_page)).unwrap_or(usize::MAX);
        items
            .into_iter()
            .skip(offset)
            .take(per_page as usize)
            .collect()
    };

    Page {
        data,
        pagination: Pagination {
            page,
            per_page,
            total,
        },
    }
}
