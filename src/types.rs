use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Sector { Technology, Healthcare, Financials, Consumer, Industrial, Energy }

impl Sector {
    /// Generation order of the curated ticker tables.
    pub const ALL: [Sector; 6] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Financials,
        Sector::Consumer,
        Sector::Industrial,
        Sector::Energy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Healthcare => "Healthcare",
            Self::Financials => "Financials",
            Self::Consumer => "Consumer",
            Self::Industrial => "Industrial",
            Self::Energy => "Energy",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Sector::ALL
            .into_iter()
            .find(|sector| sector.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown sector: {}", s))
    }
}

/// One row of the synthetic universe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub id: u32,
    pub symbol: String,
    pub name: String,
    pub sector: Sector,
    pub current_price: f64,
    pub week52_low: f64,
    pub week52_high: f64,
    pub pct_from_low: f64,
    pub pct_from_high: f64,
    pub market_cap_b: f64,
    pub volume_m: f64,
}

/// Rounds half away from zero (`f64::round`), so exact ties go up in
/// magnitude: 2.25 becomes 2.3, not the banker's 2.2.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl Listing {
    /// Builds a row from raw draws. `current` is clamped into `[low, high]`
    /// and the percentages come from the clamped, unrounded prices.
    #[allow(clippy::too_many_arguments)]
    pub fn from_prices(
        id: u32,
        symbol: &str,
        name: &str,
        sector: Sector,
        current: f64,
        low: f64,
        high: f64,
        market_cap_b: f64,
        volume_m: f64,
    ) -> Self {
        let current = current.min(high).max(low);
        let pct_from_low = (current - low) / low * 100.0;
        let pct_from_high = (current - high) / high * 100.0;

        Self {
            id,
            symbol: symbol.to_string(),
            name: name.to_string(),
            sector,
            current_price: round_to(current, 2),
            week52_low: round_to(low, 2),
            week52_high: round_to(high, 2),
            pct_from_low: round_to(pct_from_low, 1),
            pct_from_high: round_to(pct_from_high, 1),
            market_cap_b: round_to(market_cap_b, 2),
            volume_m: round_to(volume_m, 1),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanParams {
    pub threshold_pct: f64,
    pub selected_sectors: Vec<Sector>,
    pub min_cap: f64,
    pub max_cap: f64,
    pub min_volume: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            threshold_pct: 5.0,
            selected_sectors: Sector::ALL.to_vec(),
            min_cap: 10.0,
            max_cap: 200.0,
            min_volume: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub near_low: bool,
}

/// Summary figures for one scan. `None` means "not applicable" (empty set).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanAggregates {
    pub scanned_count: usize,
    pub near_low_count: usize,
    pub mean_pct_from_low: Option<f64>,
    pub closest_pct_from_low: Option<f64>,
    pub near_low_mean_pct_from_low: Option<f64>,
    pub near_low_mean_market_cap_b: Option<f64>,
    pub near_low_share_pct: Option<f64>,
    pub sector_counts: BTreeMap<Sector, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    pub filtered: Vec<ScannedListing>,
    pub near_low: Vec<ScannedListing>,
    pub aggregates: ScanAggregates,
    pub closest_candidates: Vec<ScannedListing>,
}
