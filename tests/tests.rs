#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use insight_dashboard::components::sparkline::{build_path, path_for_range};
    use insight_dashboard::hooks::use_remote::{RemoteResource, RequestSequence};
    use insight_dashboard::models::churn::{ChurnCustomer, ChurnTrends};
    use insight_dashboard::models::error::AppError;
    use insight_dashboard::models::sales::{DemandForecast, FullSalesView, MainKpis};
    use insight_dashboard::models::segments::{SEGMENT_PALETTE, SegmentBreakdown};
    use insight_dashboard::models::series::{ChartSeries, PaginationState};
    use insight_dashboard::normalize::{
        CustomerQuery, CustomerSort, customer_page, filter_rows,
    };
    use insight_dashboard::services::sample::{SplitMix, placeholder_customers};
    use std::rc::Rc;

    // Helper function to create customer rows
    fn customer(id: &str, probability: f64) -> ChurnCustomer {
        ChurnCustomer {
            customer_id: id.to_string(),
            churn_probability: probability,
            last_purchase_date: None,
            total_cancellations: 1,
            subscription_status: "active".to_string(),
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_http_error_message_contains_status_code() {
        let error = AppError::Status(500);
        assert_eq!(error.to_string(), "HTTP 500");
    }

    #[test]
    fn test_transport_error_message() {
        let error = AppError::Connect("dns lookup failed".to_string());
        assert!(error.to_string().starts_with("failed to connect"));
    }

    #[test]
    fn test_parse_error_message() {
        let error = AppError::Parse("expected value at line 1".to_string());
        assert!(error.to_string().contains("failed to parse"));
    }

    // ===== RemoteResource Tests =====

    #[test]
    fn test_remote_resource_payload_only_on_success() {
        let success: RemoteResource<u32> = RemoteResource::Success(Rc::new(7));
        assert_eq!(success.data().map(|d| **d), Some(7));
        assert!(success.error().is_none());

        let loading: RemoteResource<u32> = RemoteResource::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error: RemoteResource<u32> = RemoteResource::Error("HTTP 500".to_string());
        assert!(error.data().is_none());
        assert_eq!(error.error(), Some("HTTP 500"));
    }

    // ===== Request Ordering Tests =====

    #[test]
    fn test_stale_request_never_wins() {
        let sequence = RequestSequence::default();

        // A parameter change issues a second request while the first is
        // still in flight.
        let first = sequence.issue();
        let second = sequence.issue();

        // The first resolves late: it must not commit.
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_unmount_invalidates_outstanding_requests() {
        let sequence = RequestSequence::default();
        let token = sequence.issue();
        assert!(token.is_current());

        sequence.invalidate();
        assert!(!token.is_current());
    }

    // ===== Pagination Tests =====

    #[test]
    fn test_pagination_page_size_bound() {
        let pagination = PaginationState::new(2, 10);
        let (start, end) = pagination.bounds(25);
        assert_eq!((start, end), (10, 20));
        assert!(end - start <= 10);
    }

    #[test]
    fn test_pagination_clamps_after_shrink() {
        // Page 5 of a list that shrank to 12 rows clamps to the last page.
        let pagination = PaginationState::new(5, 10);
        assert_eq!(pagination.clamped(12).page, 2);
    }

    #[test]
    fn test_pagination_empty_list_is_single_page() {
        let pagination = PaginationState::new(3, 10);
        assert_eq!(pagination.total_pages(0), 1);
        assert_eq!(pagination.clamped(0).page, 1);
        assert_eq!(pagination.bounds(0), (0, 0));
    }

    // ===== Normalizer Tests =====

    #[test]
    fn test_customer_page_sorted_by_score_descending() {
        let rows = vec![
            customer("c1", 0.42),
            customer("c2", 0.91),
            customer("c3", 0.65),
            customer("c4", 0.91),
        ];
        let page = customer_page(&rows, &CustomerQuery::default());

        for pair in page.rows.windows(2) {
            assert!(pair[0].churn_probability >= pair[1].churn_probability);
        }
    }

    #[test]
    fn test_customer_page_sort_by_name() {
        let rows = vec![customer("zeta", 0.9), customer("alpha", 0.1)];
        let query = CustomerQuery {
            sort: CustomerSort::Name,
            ..CustomerQuery::default()
        };
        let page = customer_page(&rows, &query);
        assert_eq!(page.rows[0].customer_id, "alpha");
    }

    #[test]
    fn test_customer_page_respects_page_size() {
        let rows: Vec<_> = (0..37).map(|i| customer(&format!("c{i}"), 0.5)).collect();
        let query = CustomerQuery {
            pagination: PaginationState::new(4, 10),
            ..CustomerQuery::default()
        };
        let page = customer_page(&rows, &query);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.page, 4);
        assert_eq!(page.rows.len(), 7);
    }

    #[test]
    fn test_search_with_no_matches_is_empty_not_error() {
        let rows = vec![customer("Customer #1", 0.9)];
        let query = CustomerQuery {
            search: "does-not-exist".to_string(),
            ..CustomerQuery::default()
        };
        let page = customer_page(&rows, &query);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_rows, 0);
    }

    #[test]
    fn test_normalizer_is_deterministic() {
        let rows: Vec<_> = (0..20)
            .map(|i| customer(&format!("Customer #{i}"), f64::from(i) / 20.0))
            .collect();
        let query = CustomerQuery {
            search: "customer".to_string(),
            sort: CustomerSort::Score,
            pagination: PaginationState::new(1, 10),
        };

        let first = customer_page(&rows, &query);
        let second = customer_page(&rows, &query);
        assert_eq!(first, second);
    }

    // ===== Placeholder Data Tests =====

    #[test]
    fn test_placeholder_customers_are_deterministic() {
        let first = placeholder_customers(10, &mut SplitMix::new(42));
        let second = placeholder_customers(10, &mut SplitMix::new(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholder_scores_sit_in_high_band() {
        let rows = placeholder_customers(25, &mut SplitMix::new(7));
        assert_eq!(rows.len(), 25);
        for row in &rows {
            assert!(row.churn_probability >= 0.8);
            assert!(row.churn_probability <= 1.0);
        }
    }

    #[test]
    fn test_search_matches_generated_customer_names() {
        let rows = placeholder_customers(10, &mut SplitMix::new(42));

        // "Customer #3" appears exactly once in a 10-row list, and the
        // match is case-insensitive.
        let hits = filter_rows(&rows, "Customer #3", |c| c.customer_id.as_str());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].customer_id, "Customer #3");

        let relaxed = filter_rows(&rows, "customer #3", |c| c.customer_id.as_str());
        assert_eq!(relaxed, hits);
    }

    // ===== Segmentation Tests =====

    #[test]
    fn test_segmentation_canonical_order_and_colors() {
        // Shape straight from the backend scenario: an extra "Critical"
        // bucket beyond the three canonical ones.
        let mut counts = BTreeMap::new();
        counts.insert("High Risk".to_string(), 35.0);
        counts.insert("Medium Risk".to_string(), 25.0);
        counts.insert("Low Risk".to_string(), 30.0);
        counts.insert("Critical".to_string(), 10.0);

        let breakdown = SegmentBreakdown::from_counts(&counts);
        let labels: Vec<&str> = breakdown.slices().iter().map(|s| s.segment.name()).collect();
        assert_eq!(labels, vec!["High Risk", "Medium Risk", "Low Risk", "Critical"]);

        let colors: Vec<&str> = breakdown.colors();
        assert_eq!(colors, vec!["#ef4444", "#fbbf24", "#34d399", "#60a5fa"]);

        let shares: Vec<u32> = breakdown.slices().iter().map(|s| s.share).collect();
        assert_eq!(shares, vec![35, 25, 30, 10]);
        assert_eq!(breakdown.total(), 100.0);
    }

    #[test]
    fn test_segmentation_palette_wraps_for_extra_buckets() {
        let mut counts = BTreeMap::new();
        for name in ["High Risk", "Medium Risk", "Low Risk", "A", "B", "C", "D"] {
            counts.insert(name.to_string(), 10.0);
        }

        let breakdown = SegmentBreakdown::from_counts(&counts);
        assert_eq!(breakdown.slices().len(), 7);
        // The seventh slice wraps back to the first palette entry.
        assert_eq!(breakdown.slices()[6].color, SEGMENT_PALETTE[0]);
    }

    #[test]
    fn test_segmentation_extras_keep_alphabetical_order() {
        let mut counts = BTreeMap::new();
        counts.insert("Zed".to_string(), 1.0);
        counts.insert("Alpha".to_string(), 1.0);
        counts.insert("Low Risk".to_string(), 1.0);

        let breakdown = SegmentBreakdown::from_counts(&counts);
        let labels: Vec<&str> = breakdown.slices().iter().map(|s| s.segment.name()).collect();
        assert_eq!(labels, vec!["Low Risk", "Alpha", "Zed"]);
    }

    // ===== Series Tests =====

    #[test]
    fn test_series_preserves_insertion_order() {
        let series = ChartSeries::from_pairs(["Jan", "Feb", "Mar"], &[1.0, 2.0, 3.0]);
        assert_eq!(series.labels(), vec!["Jan", "Feb", "Mar"]);
        assert_eq!(series.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_series_truncates_mismatched_lengths() {
        // The backend occasionally sends one more label than values.
        let series = ChartSeries::from_pairs(["a", "b", "c"], &[1.0, 2.0]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_churn_trends_series() {
        let trends = ChurnTrends {
            months: vec!["2025-01".to_string(), "2025-02".to_string()],
            churn_counts: vec![12.0, 9.0],
        };
        let series = trends.series();
        assert_eq!(series.labels(), vec!["2025-01", "2025-02"]);
        assert_eq!(series.total(), 21.0);
    }

    // ===== Endpoint Payload Tests =====

    #[test]
    fn test_main_kpis_tolerates_missing_fields() {
        let kpis: MainKpis = serde_json::from_str(r#"{"total_revenue": 1200.5}"#).unwrap();
        assert_eq!(kpis.total_revenue, 1200.5);
        assert_eq!(kpis.total_orders, 0);
        assert_eq!(kpis.churn_rate, 0.0);
    }

    #[test]
    fn test_demand_forecast_accepts_numeric_product_id() {
        let json = r#"[
            {"product_id": 42, "product_name": "Coffee Maker", "forecasted_demand_30_days": 95},
            {"product_id": "SKU-7", "forecasted_demand_30_days": 78}
        ]"#;

        let forecasts: Vec<DemandForecast> = serde_json::from_str(json).unwrap();
        assert_eq!(forecasts[0].product_id, "42");
        assert_eq!(forecasts[1].product_id, "SKU-7");
        assert_eq!(forecasts[1].product_name, "");
    }

    #[test]
    fn test_churn_customer_deserialization() {
        let json = r#"{
            "customer_id": 1001,
            "churn_probability": 0.874,
            "last_purchase_date": "2025-06-14",
            "total_cancellations": 3,
            "subscription_status": "cancelled"
        }"#;

        let row: ChurnCustomer = serde_json::from_str(json).unwrap();
        assert_eq!(row.customer_id, "1001");
        assert_eq!(row.score(), 87);
        assert_eq!(row.last_purchase_label(), "2025-06-14");
    }

    #[test]
    fn test_churn_customer_bad_date_becomes_none() {
        let json = r#"{"customer_id": "c1", "last_purchase_date": "not a date"}"#;
        let row: ChurnCustomer = serde_json::from_str(json).unwrap();
        assert!(row.last_purchase_date.is_none());
        assert_eq!(row.last_purchase_label(), "—");
        assert_eq!(row.churn_probability, 0.0);
    }

    #[test]
    fn test_full_sales_view_series() {
        let view = FullSalesView {
            historical_dates: vec!["2025-01-01".to_string(), "2025-01-02".to_string()],
            historical_sales: vec![100.0, 140.0],
            forecast_dates: vec!["2025-01-03".to_string()],
            forecast_sales: vec![120.0],
        };

        assert!(!view.is_empty());
        assert_eq!(view.historical_series().len(), 2);
        assert_eq!(view.forecast_series().labels(), vec!["2025-01-03"]);
        assert!(FullSalesView::default().is_empty());
    }

    // ===== Path Builder Tests =====

    #[test]
    fn test_build_path_structure() {
        let path = build_path(&[1.0, 3.0, 2.0], 100.0, 50.0, 4.0);
        assert!(path.starts_with("M "));
        assert_eq!(path.matches(" L ").count(), 2);
    }

    #[test]
    fn test_build_path_flat_line_has_no_nan() {
        let path = build_path(&[5.0, 5.0, 5.0], 100.0, 50.0, 4.0);
        assert!(!path.contains("NaN"));
    }

    #[test]
    fn test_path_for_range_respects_band() {
        // A forecast segment drawn after the historical band starts at its
        // x offset instead of zero.
        let path = path_for_range(&[1.0, 2.0], 0.0, 2.0, 600.0, 400.0, 100.0, 4.0);
        assert!(path.starts_with("M 600.00"));
    }

    #[test]
    fn test_empty_values_yield_empty_path() {
        assert_eq!(build_path(&[], 100.0, 50.0, 4.0), "");
    }
}
