//! Pure reshaping of raw payloads into display-ready rows: search, sort,
//! and pagination. Everything here is deterministic — same input, same
//! output — so the table components stay thin.

use std::cmp::Ordering;

use crate::models::churn::ChurnCustomer;
use crate::models::series::PaginationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Case-insensitive substring filter over `rows`, matching against the
/// field selected by `key`. An empty needle selects everything; zero
/// matches is an empty result, not an error.
pub fn filter_rows<T: Clone>(rows: &[T], needle: &str, key: impl Fn(&T) -> &str) -> Vec<T> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| key(row).to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable sort by a numeric key. Non-comparable values (NaN) keep their
/// relative order.
pub fn sort_by_value<T>(rows: &mut [T], key: impl Fn(&T) -> f64, order: SortOrder) {
    rows.sort_by(|a, b| {
        let cmp = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
}

/// Stable lexicographic sort, ascending.
pub fn sort_by_label<T>(rows: &mut [T], key: impl Fn(&T) -> &str) {
    rows.sort_by(|a, b| key(a).cmp(key(b)));
}

/// The current page of `rows`, clamped so the output never exceeds the page
/// size and a shrink never leaves the window past the end.
pub fn paginate<T: Clone>(rows: &[T], pagination: &PaginationState) -> Vec<T> {
    let (start, end) = pagination.bounds(rows.len());
    rows[start..end].to_vec()
}

/// Sort key toggle for the churn customer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerSort {
    /// Churn score, highest first.
    #[default]
    Score,
    /// Customer id, A to Z.
    Name,
}

/// The table's full query state: search text, sort toggle, page window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomerQuery {
    pub search: String,
    pub sort: CustomerSort,
    pub pagination: PaginationState,
}

/// One resolved page of the churn table.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPage {
    pub rows: Vec<ChurnCustomer>,
    pub total_rows: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Composed search → sort → clamp → slice pipeline for the churn table.
pub fn customer_page(rows: &[ChurnCustomer], query: &CustomerQuery) -> CustomerPage {
    let mut matched = filter_rows(rows, &query.search, |c| c.customer_id.as_str());

    match query.sort {
        CustomerSort::Score => {
            sort_by_value(&mut matched, |c| c.churn_probability, SortOrder::Descending);
        }
        CustomerSort::Name => sort_by_label(&mut matched, |c| c.customer_id.as_str()),
    }

    let pagination = query.pagination.clamped(matched.len());
    let page_rows = paginate(&matched, &pagination);

    CustomerPage {
        total_rows: matched.len(),
        total_pages: pagination.total_pages(matched.len()),
        page: pagination.page,
        rows: page_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str, probability: f64) -> ChurnCustomer {
        ChurnCustomer {
            customer_id: id.to_string(),
            churn_probability: probability,
            last_purchase_date: None,
            total_cancellations: 0,
            subscription_status: "active".to_string(),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![customer("Acme Ltd", 0.5), customer("Zenith", 0.2)];
        let hits = filter_rows(&rows, "acme", |c| c.customer_id.as_str());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer_id, "Acme Ltd");
    }

    #[test]
    fn test_empty_needle_selects_all() {
        let rows = vec![customer("a", 0.1), customer("b", 0.2)];
        assert_eq!(filter_rows(&rows, "  ", |c| c.customer_id.as_str()).len(), 2);
    }

    #[test]
    fn test_score_sort_is_descending() {
        let rows = vec![customer("a", 0.1), customer("b", 0.9), customer("c", 0.4)];
        let page = customer_page(&rows, &CustomerQuery::default());
        let scores: Vec<f64> = page.rows.iter().map(|c| c.churn_probability).collect();
        assert_eq!(scores, vec![0.9, 0.4, 0.1]);
    }

    #[test]
    fn test_page_never_exceeds_page_size() {
        let rows: Vec<_> = (0..25).map(|i| customer(&format!("c{i}"), 0.5)).collect();
        let query = CustomerQuery {
            pagination: PaginationState::new(1, 10),
            ..CustomerQuery::default()
        };
        let page = customer_page(&rows, &query);
        assert_eq!(page.rows.len(), 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_clamps_after_shrink() {
        let rows: Vec<_> = (0..5).map(|i| customer(&format!("c{i}"), 0.5)).collect();
        let query = CustomerQuery {
            pagination: PaginationState::new(9, 10),
            ..CustomerQuery::default()
        };
        let page = customer_page(&rows, &query);
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 5);
    }
}
