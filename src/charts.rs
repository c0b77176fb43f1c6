//! Series handed to the charting front end: a sector heatmap and a cap vs.
//! distance scatter over the filtered set, and bar/pie breakdowns of the
//! near-low set. Nothing here draws.

use crate::types::{round_to, ScanResult, ScannedListing, Sector};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub sector: Sector,
    pub avg_pct_from_low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub symbol: String,
    pub sector: Sector,
    pub market_cap_b: f64,
    pub pct_from_low: f64,
    /// Marker size.
    pub volume_m: f64,
    pub current_price: f64,
    pub week52_low: f64,
    pub near_low: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorSlice {
    pub sector: Sector,
    pub count: usize,
    pub share_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub threshold_pct: f64,
    pub heatmap: Vec<HeatmapCell>,
    pub scatter: Vec<ScatterPoint>,
    pub sector_breakdown: Vec<SectorSlice>,
}

impl ChartData {
    pub fn build(result: &ScanResult, threshold_pct: f64) -> Self {
        Self {
            threshold_pct,
            heatmap: heatmap(&result.filtered),
            scatter: result.filtered.iter().map(scatter_point).collect(),
            sector_breakdown: sector_breakdown(&result.near_low),
        }
    }
}

/// Mean distance from the low per sector, lowest first.
pub fn heatmap(filtered: &[ScannedListing]) -> Vec<HeatmapCell> {
    let mut sums: BTreeMap<Sector, (f64, usize)> = BTreeMap::new();
    for row in filtered {
        let entry = sums.entry(row.listing.sector).or_insert((0.0, 0));
        entry.0 += row.listing.pct_from_low;
        entry.1 += 1;
    }

    let mut cells: Vec<HeatmapCell> = sums
        .into_iter()
        .map(|(sector, (sum, n))| HeatmapCell { sector, avg_pct_from_low: sum / n as f64 })
        .collect();
    cells.sort_by(|a, b| a.avg_pct_from_low.total_cmp(&b.avg_pct_from_low));
    cells
}

fn scatter_point(row: &ScannedListing) -> ScatterPoint {
    let l = &row.listing;
    ScatterPoint {
        symbol: l.symbol.clone(),
        sector: l.sector,
        market_cap_b: l.market_cap_b,
        pct_from_low: l.pct_from_low,
        volume_m: l.volume_m,
        current_price: l.current_price,
        week52_low: l.week52_low,
        near_low: row.near_low,
    }
}

/// Near-low counts per sector, largest first; ties keep sector order.
pub fn sector_breakdown(near_low: &[ScannedListing]) -> Vec<SectorSlice> {
    let mut counts: BTreeMap<Sector, usize> = BTreeMap::new();
    for row in near_low {
        *counts.entry(row.listing.sector).or_insert(0) += 1;
    }

    let total = near_low.len() as f64;
    let mut slices: Vec<SectorSlice> = counts
        .into_iter()
        .map(|(sector, count)| SectorSlice {
            sector,
            count,
            share_pct: round_to(count as f64 / total * 100.0, 1),
        })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;
    use crate::types::{Listing, ScanParams};

    fn universe() -> Vec<Listing> {
        vec![
            Listing::from_prices(0, "A", "A", Sector::Energy, 102.0, 100.0, 130.0, 50.0, 20.0),
            Listing::from_prices(1, "B", "B", Sector::Energy, 104.0, 100.0, 130.0, 50.0, 20.0),
            Listing::from_prices(2, "C", "C", Sector::Technology, 101.0, 100.0, 130.0, 50.0, 20.0),
            Listing::from_prices(3, "D", "D", Sector::Healthcare, 120.0, 100.0, 130.0, 50.0, 20.0),
        ]
    }

    #[test]
    fn heatmap_sorted_by_sector_mean() {
        let result = scan(&universe(), &ScanParams::default());
        let cells = heatmap(&result.filtered);
        let sectors: Vec<Sector> = cells.iter().map(|c| c.sector).collect();
        assert_eq!(sectors, vec![Sector::Technology, Sector::Energy, Sector::Healthcare]);
        assert!((cells[1].avg_pct_from_low - 3.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_counts_near_low_only() {
        let result = scan(&universe(), &ScanParams::default());
        let slices = sector_breakdown(&result.near_low);
        assert_eq!(
            slices,
            vec![
                SectorSlice { sector: Sector::Energy, count: 2, share_pct: 66.7 },
                SectorSlice { sector: Sector::Technology, count: 1, share_pct: 33.3 },
            ]
        );
    }

    #[test]
    fn chart_data_carries_threshold_and_flags() {
        let params = ScanParams::default();
        let result = scan(&universe(), &params);
        let charts = ChartData::build(&result, params.threshold_pct);
        assert_eq!(charts.threshold_pct, 5.0);
        assert_eq!(charts.scatter.len(), 4);
        assert!(!charts.scatter[3].near_low);
        assert!(charts.scatter[0].near_low);
    }

    #[test]
    fn empty_scan_has_empty_series() {
        let charts = ChartData::build(&scan(&[], &ScanParams::default()), 5.0);
        assert!(charts.heatmap.is_empty());
        assert!(charts.scatter.is_empty());
        assert!(charts.sector_breakdown.is_empty());
    }
}
