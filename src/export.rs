use crate::error::AppError;
use crate::types::ScannedListing;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u32,
    symbol: &'a str,
    name: &'a str,
    sector: &'static str,
    current_price: f64,
    week52_low: f64,
    week52_high: f64,
    pct_from_low: f64,
    pct_from_high: f64,
    market_cap_b: f64,
    volume_m: f64,
    near_low: bool,
}

impl<'a> From<&'a ScannedListing> for CsvRow<'a> {
    fn from(row: &'a ScannedListing) -> Self {
        let l = &row.listing;
        Self {
            id: l.id,
            symbol: &l.symbol,
            name: &l.name,
            sector: l.sector.as_str(),
            current_price: l.current_price,
            week52_low: l.week52_low,
            week52_high: l.week52_high,
            pct_from_low: l.pct_from_low,
            pct_from_high: l.pct_from_high,
            market_cap_b: l.market_cap_b,
            volume_m: l.volume_m,
            near_low: row.near_low,
        }
    }
}

/// Column names, in `CsvRow` field order.
pub const CSV_HEADERS: [&str; 12] = [
    "ID",
    "Symbol",
    "Name",
    "Sector",
    "Current Price",
    "52W Low",
    "52W High",
    "% From Low",
    "% From High",
    "Market Cap (B)",
    "Volume (M)",
    "Near Low",
];

/// Near-low rows as CSV, header included even when there are no rows.
pub fn near_low_csv(rows: &[ScannedListing]) -> Result<String, AppError> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.serialize(CsvRow::from(row))?;
    }

    let bytes = writer.into_inner().map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("52_week_low_stocks_{}.csv", date.format("%Y%m%d"))
}
