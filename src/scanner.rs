use crate::generator::UniverseGenerator;
use crate::types::{Listing, ScanAggregates, ScanParams, ScanResult, ScannedListing, Sector};
use std::collections::BTreeMap;
use tracing::debug;

pub const CLOSEST_CANDIDATE_LIMIT: usize = 10;

/// Holds the immutable universe for one session.
#[derive(Default)]
pub struct MarketScanner {
    universe: Vec<Listing>,
}

impl MarketScanner {
    pub fn new(universe: Vec<Listing>) -> Self {
        Self { universe }
    }

    pub fn initialize(&mut self, seed: u64) {
        self.universe = UniverseGenerator::new(seed).generate();
    }

    pub fn listing_count(&self) -> usize {
        self.universe.len()
    }

    pub fn universe(&self) -> &[Listing] {
        &self.universe
    }

    pub fn scan(&self, params: &ScanParams) -> ScanResult {
        scan(&self.universe, params)
    }
}

fn passes_filters(listing: &Listing, params: &ScanParams) -> bool {
    params.selected_sectors.contains(&listing.sector)
        && listing.market_cap_b >= params.min_cap
        && listing.market_cap_b <= params.max_cap
        && listing.volume_m >= params.min_volume
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Rows sorted ascending by distance from the low. The sort is stable, so
/// equal values keep universe order.
fn by_pct_from_low(rows: &[ScannedListing]) -> Vec<ScannedListing> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| a.listing.pct_from_low.total_cmp(&b.listing.pct_from_low));
    sorted
}

pub fn scan(universe: &[Listing], params: &ScanParams) -> ScanResult {
    let filtered: Vec<ScannedListing> = universe
        .iter()
        .filter(|l| passes_filters(l, params))
        .map(|l| ScannedListing {
            listing: l.clone(),
            near_low: l.pct_from_low <= params.threshold_pct,
        })
        .collect();

    let near_low: Vec<ScannedListing> = by_pct_from_low(&filtered)
        .into_iter()
        .filter(|row| row.near_low)
        .collect();

    let closest_candidates = if near_low.is_empty() {
        let mut candidates = by_pct_from_low(&filtered);
        candidates.truncate(CLOSEST_CANDIDATE_LIMIT);
        candidates
    } else {
        Vec::new()
    };

    let aggregates = aggregate(&filtered, &near_low);
    debug!(
        "Scan: {} of {} listings passed filters, {} within {}% of low",
        filtered.len(),
        universe.len(),
        near_low.len(),
        params.threshold_pct
    );

    ScanResult { filtered, near_low, aggregates, closest_candidates }
}

fn aggregate(filtered: &[ScannedListing], near_low: &[ScannedListing]) -> ScanAggregates {
    let mut sector_counts: BTreeMap<Sector, usize> = BTreeMap::new();
    for row in near_low {
        *sector_counts.entry(row.listing.sector).or_insert(0) += 1;
    }

    ScanAggregates {
        scanned_count: filtered.len(),
        near_low_count: near_low.len(),
        mean_pct_from_low: mean(filtered.iter().map(|r| r.listing.pct_from_low)),
        closest_pct_from_low: near_low.first().map(|r| r.listing.pct_from_low),
        near_low_mean_pct_from_low: mean(near_low.iter().map(|r| r.listing.pct_from_low)),
        near_low_mean_market_cap_b: mean(near_low.iter().map(|r| r.listing.market_cap_b)),
        near_low_share_pct: (!filtered.is_empty())
            .then(|| near_low.len() as f64 / filtered.len() as f64 * 100.0),
        sector_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        id: u32,
        symbol: &str,
        sector: Sector,
        current: f64,
        low: f64,
        cap: f64,
        volume: f64,
    ) -> Listing {
        let high = current * 1.3;
        Listing::from_prices(id, symbol, symbol, sector, current, low, high, cap, volume)
    }

    fn sample() -> Vec<Listing> {
        vec![
            row(0, "AAA", Sector::Technology, 103.0, 100.0, 50.0, 20.0),
            row(1, "BBB", Sector::Energy, 101.0, 100.0, 50.0, 20.0),
            row(2, "CCC", Sector::Energy, 103.0, 100.0, 50.0, 20.0),
            row(3, "DDD", Sector::Healthcare, 130.0, 100.0, 50.0, 20.0),
            row(4, "EEE", Sector::Technology, 100.5, 100.0, 5.0, 20.0),
            row(5, "FFF", Sector::Consumer, 100.5, 100.0, 50.0, 1.0),
        ]
    }

    fn params(threshold: f64) -> ScanParams {
        ScanParams { threshold_pct: threshold, ..ScanParams::default() }
    }

    #[test]
    fn filters_on_sector_cap_and_volume() {
        let result = scan(&sample(), &params(5.0));
        let ids: Vec<u32> = result.filtered.iter().map(|r| r.listing.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn near_low_is_sorted_and_stable() {
        let result = scan(&sample(), &params(5.0));
        let ids: Vec<u32> = result.near_low.iter().map(|r| r.listing.id).collect();
        assert_eq!(ids, vec![1, 0, 2]);
        assert!(result.closest_candidates.is_empty());
        assert!(result.filtered.iter().find(|r| r.listing.id == 3).is_some_and(|r| !r.near_low));
    }

    #[test]
    fn aggregates_cover_both_sets() {
        let agg = scan(&sample(), &params(5.0)).aggregates;
        assert_eq!(agg.scanned_count, 4);
        assert_eq!(agg.near_low_count, 3);
        assert_eq!(agg.closest_pct_from_low, Some(1.0));
        assert_eq!(agg.near_low_mean_market_cap_b, Some(50.0));
        assert_eq!(agg.near_low_share_pct, Some(75.0));
        assert_eq!(agg.sector_counts.get(&Sector::Energy), Some(&2));
        assert_eq!(agg.sector_counts.get(&Sector::Technology), Some(&1));
        assert!(!agg.sector_counts.contains_key(&Sector::Healthcare));
        let mean = agg.mean_pct_from_low.unwrap();
        assert!((mean - 9.25).abs() < 1e-9);
    }

    #[test]
    fn empty_sector_selection_is_not_applicable() {
        let p = ScanParams { selected_sectors: vec![], ..ScanParams::default() };
        let result = scan(&sample(), &p);
        assert!(result.filtered.is_empty());
        assert!(result.near_low.is_empty());
        assert!(result.closest_candidates.is_empty());
        assert_eq!(result.aggregates, ScanAggregates::default());
    }

    #[test]
    fn falls_back_to_closest_candidates() {
        let result = scan(&sample(), &params(0.5));
        assert!(result.near_low.is_empty());
        let ids: Vec<u32> = result.closest_candidates.iter().map(|r| r.listing.id).collect();
        assert_eq!(ids, vec![1, 0, 2, 3]);
        assert_eq!(result.aggregates.closest_pct_from_low, None);
        assert_eq!(result.aggregates.near_low_share_pct, Some(0.0));
    }

    #[test]
    fn inverted_cap_range_is_empty_not_an_error() {
        let p = ScanParams { min_cap: 100.0, max_cap: 10.0, ..ScanParams::default() };
        assert!(scan(&sample(), &p).filtered.is_empty());
    }

    #[test]
    fn threshold_boundary_scenario() {
        let xom = vec![Listing::from_prices(
            0,
            "XOM",
            "Exxon Mobil Corp.",
            Sector::Energy,
            100.0,
            95.0,
            120.0,
            50.0,
            20.0,
        )];
        assert_eq!(xom[0].pct_from_low, 5.3);
        assert!(scan(&xom, &params(5.0)).near_low.is_empty());
        assert_eq!(scan(&xom, &params(6.0)).near_low.len(), 1);
    }

    #[test]
    fn scanner_wraps_generated_universe() {
        let mut scanner = MarketScanner::default();
        assert_eq!(scanner.listing_count(), 0);
        scanner.initialize(42);
        assert_eq!(scanner.listing_count(), 243);
        let direct = scan(scanner.universe(), &params(5.0));
        assert_eq!(scanner.scan(&params(5.0)).filtered, direct.filtered);
    }

    #[test]
    fn closest_candidates_capped_at_ten_smallest() {
        // 15 rows, all between 6% and 20% off their low, listed out of order.
        let offsets = [
            20.0, 6.0, 15.0, 9.0, 11.0, 7.0, 18.0, 13.0, 8.0, 19.0, 10.0, 14.0, 12.0, 17.0, 16.0,
        ];
        let universe: Vec<Listing> = offsets
            .iter()
            .enumerate()
            .map(|(i, pct)| {
                row(i as u32, "ROW", Sector::Industrial, 100.0 + pct, 100.0, 50.0, 20.0)
            })
            .collect();

        let result = scan(&universe, &params(5.0));
        assert_eq!(result.filtered.len(), 15);
        assert!(result.near_low.is_empty());
        assert_eq!(result.closest_candidates.len(), CLOSEST_CANDIDATE_LIMIT);

        let pct = |rows: &[ScannedListing]| -> Vec<f64> {
            rows.iter().map(|r| r.listing.pct_from_low).collect()
        };
        let got = pct(&result.closest_candidates);
        let mut expected = pct(&result.filtered);
        expected.sort_by(f64::total_cmp);
        expected.truncate(CLOSEST_CANDIDATE_LIMIT);
        assert_eq!(got, expected);
        assert_eq!(got, vec![6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
    }
}
