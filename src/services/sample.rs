//! Deterministic placeholder rows for the churn table, shown while the
//! backend has no customer data to score yet. Randomness is isolated behind
//! `ValueSource` so tests can inject a fixed sequence.

use chrono::NaiveDate;

use crate::models::churn::ChurnCustomer;

/// Source of values in `[0, 1)` driving the generated rows.
pub trait ValueSource {
    fn next_value(&mut self) -> f64;
}

/// SplitMix64 sequence. Cheap, seedable, and stable across runs, which is
/// all placeholder data needs.
#[derive(Debug, Clone)]
pub struct SplitMix {
    state: u64,
}

impl SplitMix {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl ValueSource for SplitMix {
    fn next_value(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

const SAMPLE_STATUSES: [&str; 3] = ["active", "paused", "cancelled"];

/// Generates `count` preview rows named `Customer #1..=#count`, scored in
/// the 80-100% band the original risk board displayed.
pub fn placeholder_customers(count: usize, source: &mut impl ValueSource) -> Vec<ChurnCustomer> {
    (1..=count)
        .map(|i| {
            let spread = source.next_value();
            let cancellations = (source.next_value() * 4.0) as u32;
            let status = SAMPLE_STATUSES[(source.next_value() * 3.0) as usize % 3];
            ChurnCustomer {
                customer_id: format!("Customer #{i}"),
                churn_probability: 0.8 + spread * 0.2,
                last_purchase_date: NaiveDate::from_ymd_opt(2025, 9, 1)
                    .map(|d| d - chrono::Duration::days((spread * 60.0) as i64)),
                total_cancellations: cancellations,
                subscription_status: status.to_string(),
            }
        })
        .collect()
}
