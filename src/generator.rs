use crate::instruments::{
    cap_range, price_range, resolve_name, sector_tickers, ADDITIONAL_TICKERS, CURRENT_MULTIPLIER,
    HIGH_MULTIPLIER, LOW_MULTIPLIER, TARGET_UNIVERSE_SIZE, TOP_UP_CAP_RANGE, TOP_UP_PRICE_RANGE,
    VOLUME_RANGE,
};
use crate::types::{Listing, Sector};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

pub const DEFAULT_SEED: u64 = 42;

/// Builds the session universe with the fixed default seed.
pub fn generate_universe() -> Vec<Listing> {
    UniverseGenerator::default().generate()
}

#[derive(Debug, Clone, Copy)]
pub struct UniverseGenerator {
    seed: u64,
}

impl Default for UniverseGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

fn draw<R: Rng>(rng: &mut R, (low, high): (f64, f64)) -> f64 {
    rng.random_range(low..high)
}

fn random_sector<R: Rng>(rng: &mut R) -> Sector {
    Sector::ALL[rng.random_range(0..Sector::ALL.len())]
}

impl UniverseGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self) -> Vec<Listing> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut listings = Vec::with_capacity(TARGET_UNIVERSE_SIZE);

        for sector in Sector::ALL {
            for &ticker in sector_tickers(sector) {
                let id = listings.len() as u32;
                let name = resolve_name(ticker, sector, &mut rng);
                let base_price = draw(&mut rng, price_range(ticker));
                let cap_multiplier_range = cap_range(ticker);
                listings.push(self.draw_listing(
                    &mut rng,
                    id,
                    ticker,
                    &name,
                    sector,
                    base_price,
                    cap_multiplier_range,
                ));
            }
        }
        let base_count = listings.len();

        let mut seen: HashSet<String> = listings.iter().map(|l| l.symbol.clone()).collect();
        for &ticker in ADDITIONAL_TICKERS {
            if listings.len() >= TARGET_UNIVERSE_SIZE {
                break;
            }
            if seen.contains(ticker) {
                continue;
            }

            let id = listings.len() as u32;
            let name_sector = random_sector(&mut rng);
            let name = resolve_name(ticker, name_sector, &mut rng);
            let base_price = draw(&mut rng, TOP_UP_PRICE_RANGE);
            let (current, low, high) = Self::draw_range(&mut rng, base_price);
            let cap_multiplier = draw(&mut rng, TOP_UP_CAP_RANGE);
            // The row's sector is drawn independently of the one used for its name.
            let sector = random_sector(&mut rng);
            let volume = draw(&mut rng, VOLUME_RANGE);

            let current = current.min(high).max(low);
            listings.push(Listing::from_prices(
                id,
                ticker,
                &name,
                sector,
                current,
                low,
                high,
                current * cap_multiplier / 1000.0,
                volume,
            ));
            seen.insert(ticker.to_string());
        }

        debug!(
            "Generated universe: {} base + {} top-up listings (seed {})",
            base_count,
            listings.len() - base_count,
            self.seed
        );
        listings
    }

    fn draw_range<R: Rng>(rng: &mut R, base_price: f64) -> (f64, f64, f64) {
        let current = base_price * draw(rng, CURRENT_MULTIPLIER);
        let low = base_price * draw(rng, LOW_MULTIPLIER);
        let high = base_price * draw(rng, HIGH_MULTIPLIER);
        (current, low, high)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_listing<R: Rng>(
        &self,
        rng: &mut R,
        id: u32,
        ticker: &str,
        name: &str,
        sector: Sector,
        base_price: f64,
        cap_multiplier_range: (f64, f64),
    ) -> Listing {
        let (current, low, high) = Self::draw_range(rng, base_price);
        let current = current.min(high).max(low);
        let market_cap_b = current * draw(rng, cap_multiplier_range) / 1000.0;
        let volume = draw(rng, VOLUME_RANGE);
        Listing::from_prices(id, ticker, name, sector, current, low, high, market_cap_b, volume)
    }
}
