//! Tests for the portfolio and admin dashboard figures
//! Verifies bid exposure, fee totals and system health aggregation

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::fees::FeeBreakdown;
use shared::fixtures::Fixtures;
use shared::{
    Bid, BidStatus, IngestionStatus, PortfolioSummary, SystemHealth, WorkerHealth, WorkerStatus,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn bid(amount: Decimal, status: BidStatus) -> Bid {
    Bid {
        id: "bid-test".to_string(),
        certificate_id: "go-001".to_string(),
        certificate_name: "Wexford Wind Farm • Oct 29, 2025".to_string(),
        amount,
        timestamp: Utc.with_ymd_and_hms(2025, 10, 30, 12, 0, 0).unwrap(),
        status,
        ends_at: Utc.with_ymd_and_hms(2025, 10, 31, 14, 0, 0).unwrap(),
    }
}

fn worker(status: WorkerStatus, errors: u32) -> WorkerHealth {
    WorkerHealth {
        name: "Worker".to_string(),
        status,
        last_run_secs_ago: 60,
        errors_last_hour: errors,
    }
}

fn ingestion(lag_minutes: u32) -> IngestionStatus {
    IngestionStatus {
        generator_id: "WF-NO-001".to_string(),
        name: "WindFarm Oslo North".to_string(),
        last_slice_secs_ago: 120,
        lag_minutes,
        success_24h: 144,
        failures_24h: 0,
    }
}

// =============================================================================
// Portfolio summary
// =============================================================================

mod portfolio_summary {
    use super::*;

    #[test]
    fn bundled_portfolio() {
        let fixtures = Fixtures::load().unwrap();
        let owned = fixtures.dashboard.owned(&fixtures.store);
        let summary = PortfolioSummary::build(&owned, &fixtures.dashboard.bids, dec("1250.50"));

        assert_eq!(summary.owned_count, 2);
        assert_eq!(summary.owned_volume, dec("2"));
        assert_eq!(summary.bid_exposure, dec("84.50"));
    }

    #[test]
    fn settled_bids_are_not_exposure() {
        let bids = vec![
            bid(dec("40"), BidStatus::Leading),
            bid(dec("30"), BidStatus::Won),
            bid(dec("20"), BidStatus::Lost),
        ];
        let summary = PortfolioSummary::build(&[], &bids, Decimal::ZERO);
        assert_eq!(summary.active_bids, 1);
        assert_eq!(summary.bid_exposure, dec("40"));
    }
}

// =============================================================================
// System health
// =============================================================================

mod system_health {
    use super::*;

    #[test]
    fn lag_at_threshold_counts_as_lagging() {
        let health = SystemHealth::summarize(&[], &[ingestion(4), ingestion(5), ingestion(12)]);
        assert_eq!(health.lagging_generators, 2);
    }

    #[test]
    fn errors_are_summed_across_workers() {
        let workers = vec![
            worker(WorkerStatus::Healthy, 0),
            worker(WorkerStatus::Degraded, 3),
            worker(WorkerStatus::Degraded, 2),
        ];
        let health = SystemHealth::summarize(&workers, &[]);
        assert_eq!(health.healthy_workers, 1);
        assert_eq!(health.degraded_workers, 2);
        assert_eq!(health.errors_last_hour, 5);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

mod property_tests {
    use super::*;

    /// Amounts between 0.01 and 10,000.00 USDC
    fn amount_strategy() -> impl Strategy<Value = Decimal> {
        (1i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    fn bid_status_strategy() -> impl Strategy<Value = BidStatus> {
        prop_oneof![
            Just(BidStatus::Leading),
            Just(BidStatus::Outbid),
            Just(BidStatus::Won),
            Just(BidStatus::Lost),
        ]
    }

    proptest! {
        /// The USDC total is the amount plus half a percent
        #[test]
        fn prop_fee_total(amount in amount_strategy()) {
            let fees = FeeBreakdown::for_amount(amount).unwrap();
            prop_assert_eq!(fees.total, amount * dec("1.005"));
            prop_assert!(fees.platform_fee >= Decimal::ZERO);
        }

        /// A balance equal to the total is enough; one cent less is not
        #[test]
        fn prop_affordability_boundary(amount in amount_strategy()) {
            let fees = FeeBreakdown::for_amount(amount).unwrap();
            prop_assert!(fees.affordable_with(fees.total));
            prop_assert!(!fees.affordable_with(fees.total - dec("0.01")));
        }

        /// Exposure never exceeds the sum of all bids
        #[test]
        fn prop_exposure_bounded(
            bids in prop::collection::vec((amount_strategy(), bid_status_strategy()), 0..20)
        ) {
            let bids: Vec<Bid> = bids.into_iter().map(|(a, s)| bid(a, s)).collect();
            let summary = PortfolioSummary::build(&[], &bids, Decimal::ZERO);
            let total: Decimal = bids.iter().map(|b| b.amount).sum();

            prop_assert!(summary.bid_exposure <= total);
            prop_assert!(summary.active_bids <= bids.len());
        }

        /// Every worker is either healthy or degraded
        #[test]
        fn prop_worker_partition(degraded in prop::collection::vec(any::<bool>(), 0..12)) {
            let workers: Vec<WorkerHealth> = degraded
                .iter()
                .map(|d| worker(if *d { WorkerStatus::Degraded } else { WorkerStatus::Healthy }, 0))
                .collect();
            let health = SystemHealth::summarize(&workers, &[]);
            prop_assert_eq!(health.healthy_workers + health.degraded_workers, workers.len());
        }
    }
}
