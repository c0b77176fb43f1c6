use crate::types::{round_to, Listing};
use serde::Serialize;
use std::collections::BTreeSet;

pub const OVERVIEW_NEAR_LOW_PCT: f64 = 5.0;
pub const OVERVIEW_SAMPLE_SIZE: usize = 5;

/// Universe-wide stats shown before any scan has run.
#[derive(Debug, Clone, Serialize)]
pub struct UniverseOverview {
    pub total_listings: usize,
    pub sectors: Vec<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub mean_pct_from_low: Option<f64>,
    pub within_five_pct_of_low: usize,
    pub closest_to_low: Vec<Listing>,
}

impl UniverseOverview {
    pub fn from_universe(universe: &[Listing]) -> Self {
        let sectors: BTreeSet<String> = universe.iter().map(|l| l.sector.to_string()).collect();

        let prices = universe.iter().map(|l| l.current_price);
        let min_price = prices.clone().reduce(f64::min);
        let max_price = prices.reduce(f64::max);

        let mean_pct_from_low = (!universe.is_empty()).then(|| {
            let sum: f64 = universe.iter().map(|l| l.pct_from_low).sum();
            round_to(sum / universe.len() as f64, 1)
        });

        let mut closest_to_low = universe.to_vec();
        closest_to_low.sort_by(|a, b| a.pct_from_low.total_cmp(&b.pct_from_low));
        closest_to_low.truncate(OVERVIEW_SAMPLE_SIZE);

        Self {
            total_listings: universe.len(),
            sectors: sectors.into_iter().collect(),
            min_price,
            max_price,
            mean_pct_from_low,
            within_five_pct_of_low: universe
                .iter()
                .filter(|l| l.pct_from_low <= OVERVIEW_NEAR_LOW_PCT)
                .count(),
            closest_to_low,
        }
    }
}
