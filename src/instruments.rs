use crate::types::Sector;
use lazy_static::lazy_static;
use rand::Rng;
use std::collections::HashMap;

// Curated base tables. Tickers may repeat across sectors (PYPL, DIS) and
// within one (FTI, HP); the generator keeps every entry.

const TECHNOLOGY: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "ADBE", "CRM", "INTC",
    "CSCO", "ORCL", "IBM", "QCOM", "AMD", "NOW", "SNOW", "NET", "CRWD", "PANW", "ZS",
    "DDOG", "MDB", "PLTR", "UBER", "SHOP", "SQ", "ROKU", "ZM", "DOCU", "FTNT", "OKTA",
    "TEAM", "SPLK", "HUBS", "TWLO", "TTD", "PYPL", "NFLX", "DIS",
];

const HEALTHCARE: &[&str] = &[
    "JNJ", "UNH", "PFE", "ABT", "TMO", "LLY", "ABBV", "DHR", "MDT", "BMY", "AMGN",
    "GILD", "VRTX", "REGN", "ISRG", "DXCM", "IDXX", "BSX", "ZTS", "SYK", "CVS", "WBA",
    "CI", "HUM", "ELV", "MCK", "ABC", "CAH", "EW", "BIIB", "ALGN", "ILMN", "MTD",
    "WST", "RMD", "STE", "WAT", "PKI", "DGX", "LH",
];

const FINANCIALS: &[&str] = &[
    "JPM", "BAC", "WFC", "C", "GS", "MS", "SCHW", "BLK", "AXP", "V", "MA", "PYPL",
    "COF", "USB", "PNC", "TFC", "BK", "STT", "MMC", "SPGI", "ICE", "CME", "NDAQ",
    "MCO", "FIS", "FISV", "GPN", "JKHY", "SYF", "ALLY", "RF", "KEY", "HBAN", "CFG",
    "MTB", "ZION", "FHN", "BKU", "WBS", "SNV",
];

const CONSUMER: &[&str] = &[
    "PG", "KO", "PEP", "WMT", "COST", "TGT", "HD", "LOW", "NKE", "MCD", "SBUX", "DIS",
    "CMCSA", "T", "VZ", "TMUS", "CHTR", "ATVI", "EA", "TTWO", "LULU", "ULTA", "ROST",
    "TJX", "DG", "DLTR", "FIVE", "BURL", "CASY", "KR", "SYY", "HSY", "K", "GIS", "CPB",
    "KHC", "MDLZ", "STZ", "BF.B", "MO",
];

const INDUSTRIAL: &[&str] = &[
    "BA", "CAT", "GE", "HON", "UPS", "FDX", "RTX", "LMT", "GD", "NOC", "DE", "EMR",
    "ITW", "ETN", "ROK", "TT", "CPRT", "CSX", "UNP", "NSC", "PCAR", "WM", "RSG", "WCN",
    "AWK", "AEP", "DUK", "SO", "NEE", "D", "EXC", "SRE", "XEL", "WEC", "ES", "EIX",
    "PEG", "AEE", "LNT", "ED",
];

const ENERGY: &[&str] = &[
    "XOM", "CVX", "COP", "SLB", "EOG", "PSX", "MPC", "VLO", "KMI", "WMB", "OXY", "HAL",
    "BKR", "FANG", "PXD", "EQT", "DVN", "MTDR", "MRO", "APA", "OKE", "TRP", "ENB",
    "EPD", "ET", "MPLX", "PAA", "LNG", "NOV", "FTI", "NBR", "HP", "PTEN", "PUMP",
    "WFRD", "TDW", "RIG", "VAL", "FTI", "HP",
];

pub fn sector_tickers(sector: Sector) -> &'static [&'static str] {
    match sector {
        Sector::Technology => TECHNOLOGY,
        Sector::Healthcare => HEALTHCARE,
        Sector::Financials => FINANCIALS,
        Sector::Consumer => CONSUMER,
        Sector::Industrial => INDUSTRIAL,
        Sector::Energy => ENERGY,
    }
}

/// Top-up list appended after the sector tables. Repeats are intentional and
/// are skipped by the generator's existing-symbol check.
pub const ADDITIONAL_TICKERS: &[&str] = &[
    "F", "GM", "GE", "F", "GM", "GE", "F",
    "TGT", "LOW", "HD", "WMT", "COST",
    "BA", "LMT", "RTX", "NOC", "GD",
    "XOM", "CVX", "COP", "SLB", "EOG",
    "JPM", "BAC", "WFC", "C", "GS",
    "PFE", "JNJ", "MRK", "ABT", "BMY",
    "AAPL", "MSFT", "GOOGL", "AMZN", "META",
];

pub const TARGET_UNIVERSE_SIZE: usize = 500;

fn sector_keywords(sector: Sector) -> &'static [&'static str] {
    match sector {
        Sector::Technology => &[
            "Tech",
            "Technologies",
            "Software",
            "Systems",
            "Digital",
            "Cloud",
            "Data",
        ],
        Sector::Healthcare => &[
            "Health",
            "Medical",
            "Pharmaceuticals",
            "Bio",
            "Care",
            "Therapeutics",
        ],
        Sector::Financials => &[
            "Financial",
            "Capital",
            "Group",
            "Holdings",
            "Bank",
            "Trust",
            "Services",
        ],
        Sector::Consumer => &["Brands", "Consumer", "Goods", "Retail", "Stores", "Products"],
        Sector::Industrial => &[
            "Industries",
            "Industrial",
            "Manufacturing",
            "Engineering",
            "Solutions",
        ],
        Sector::Energy => &["Energy", "Resources", "Petroleum", "Oil", "Gas", "Power"],
    }
}

lazy_static! {
    static ref KNOWN_NAMES: HashMap<&'static str, &'static str> = [
        ("AAPL", "Apple Inc."),
        ("MSFT", "Microsoft Corp."),
        ("GOOGL", "Alphabet Inc."),
        ("AMZN", "Amazon.com Inc."),
        ("META", "Meta Platforms Inc."),
        ("NVDA", "NVIDIA Corp."),
        ("TSLA", "Tesla Inc."),
        ("JNJ", "Johnson & Johnson"),
        ("JPM", "JPMorgan Chase & Co."),
        ("V", "Visa Inc."),
        ("PG", "Procter & Gamble Co."),
        ("UNH", "UnitedHealth Group Inc."),
        ("HD", "Home Depot Inc."),
        ("DIS", "Walt Disney Co."),
        ("BAC", "Bank of America Corp."),
        ("MA", "Mastercard Inc."),
        ("XOM", "Exxon Mobil Corp."),
        ("CVX", "Chevron Corp."),
        ("PFE", "Pfizer Inc."),
        ("ABT", "Abbott Laboratories"),
        ("WMT", "Walmart Inc."),
        ("KO", "Coca-Cola Co."),
        ("PEP", "PepsiCo Inc."),
        ("CSCO", "Cisco Systems Inc."),
        ("INTC", "Intel Corp."),
        ("IBM", "International Business Machines Corp."),
        ("ORCL", "Oracle Corp."),
        ("QCOM", "Qualcomm Inc."),
        ("AMD", "Advanced Micro Devices Inc."),
        ("ADBE", "Adobe Inc."),
        ("CRM", "Salesforce Inc."),
        ("NFLX", "Netflix Inc."),
        ("PYPL", "PayPal Holdings Inc."),
        ("COST", "Costco Wholesale Corp."),
        ("TMO", "Thermo Fisher Scientific Inc."),
        ("ABBV", "AbbVie Inc."),
        ("LLY", "Eli Lilly & Co."),
        ("DHR", "Danaher Corp."),
        ("MDT", "Medtronic plc"),
        ("BMY", "Bristol-Myers Squibb Co."),
        ("AMGN", "Amgen Inc."),
        ("T", "AT&T Inc."),
        ("VZ", "Verizon Communications Inc."),
        ("CMCSA", "Comcast Corp."),
        ("NKE", "Nike Inc."),
        ("MCD", "McDonald's Corp."),
        ("SBUX", "Starbucks Corp."),
        ("BA", "Boeing Co."),
        ("CAT", "Caterpillar Inc."),
        ("GE", "General Electric Co."),
        ("HON", "Honeywell International Inc."),
        ("UPS", "United Parcel Service Inc."),
        ("FDX", "FedEx Corp."),
        ("RTX", "Raytheon Technologies Corp."),
        ("LMT", "Lockheed Martin Corp."),
        ("GD", "General Dynamics Corp."),
        ("NOC", "Northrop Grumman Corp."),
        ("DE", "Deere & Co."),
        ("CSX", "CSX Corp."),
        ("UNP", "Union Pacific Corp."),
        ("NSC", "Norfolk Southern Corp."),
        ("LOW", "Lowe's Companies Inc."),
        ("TGT", "Target Corp."),
        ("WBA", "Walgreens Boots Alliance Inc."),
        ("CVS", "CVS Health Corp."),
        ("CI", "Cigna Corp."),
        ("HUM", "Humana Inc."),
        ("ELV", "Elevance Health Inc."),
        ("MCK", "McKesson Corp."),
        ("ABC", "AmerisourceBergen Corp."),
        ("CAH", "Cardinal Health Inc."),
        ("GS", "Goldman Sachs Group Inc."),
        ("MS", "Morgan Stanley"),
        ("BLK", "BlackRock Inc."),
        ("AXP", "American Express Co."),
        ("SPGI", "S&P Global Inc."),
        ("ICE", "Intercontinental Exchange Inc."),
        ("CME", "CME Group Inc."),
        ("NDAQ", "Nasdaq Inc."),
        ("MCO", "Moody's Corp."),
        ("FIS", "Fidelity National Information Services Inc."),
        ("FISV", "Fiserv Inc."),
        ("GPN", "Global Payments Inc."),
        ("NOW", "ServiceNow Inc."),
        ("SNOW", "Snowflake Inc."),
        ("NET", "Cloudflare Inc."),
        ("CRWD", "CrowdStrike Holdings Inc."),
        ("PANW", "Palo Alto Networks Inc."),
        ("ZS", "Zscaler Inc."),
        ("DDOG", "Datadog Inc."),
        ("MDB", "MongoDB Inc."),
        ("PLTR", "Palantir Technologies Inc."),
        ("UBER", "Uber Technologies Inc."),
        ("SHOP", "Shopify Inc."),
        ("SQ", "Block Inc."),
        ("ROKU", "Roku Inc."),
        ("ZM", "Zoom Video Communications Inc."),
        ("DOCU", "DocuSign Inc."),
        ("FTNT", "Fortinet Inc."),
        ("OKTA", "Okta Inc."),
        ("TEAM", "Atlassian Corp."),
        ("SPLK", "Splunk Inc."),
        ("HUBS", "HubSpot Inc."),
        ("TWLO", "Twilio Inc."),
        ("TTD", "The Trade Desk Inc."),
        ("ISRG", "Intuitive Surgical Inc."),
        ("VRTX", "Vertex Pharmaceuticals Inc."),
        ("REGN", "Regeneron Pharmaceuticals Inc."),
        ("DXCM", "Dexcom Inc."),
        ("IDXX", "IDEXX Laboratories Inc."),
        ("ALGN", "Align Technology Inc."),
        ("ILMN", "Illumina Inc."),
        ("MTD", "Mettler-Toledo International Inc."),
        ("WST", "West Pharmaceutical Services Inc."),
        ("RMD", "ResMed Inc."),
        ("STE", "Steris plc"),
        ("WAT", "Waters Corp."),
        ("PKI", "PerkinElmer Inc."),
        ("DGX", "Quest Diagnostics Inc."),
        ("LH", "Laboratory Corp. of America Holdings"),
        ("EW", "Edwards Lifesciences Corp."),
        ("BIIB", "Biogen Inc."),
        ("SYK", "Stryker Corp."),
        ("ZTS", "Zoetis Inc."),
        ("BSX", "Boston Scientific Corp."),
        ("LULU", "Lululemon Athletica Inc."),
        ("ULTA", "Ulta Beauty Inc."),
        ("ROST", "Ross Stores Inc."),
        ("TJX", "TJX Companies Inc."),
        ("DG", "Dollar General Corp."),
        ("DLTR", "Dollar Tree Inc."),
        ("FIVE", "Five Below Inc."),
        ("BURL", "Burlington Stores Inc."),
        ("CASY", "Casey's General Stores Inc."),
        ("KR", "Kroger Co."),
        ("SYY", "Sysco Corp."),
        ("HSY", "Hershey Co."),
        ("K", "Kellogg Co."),
        ("GIS", "General Mills Inc."),
        ("CPB", "Campbell Soup Co."),
        ("KHC", "Kraft Heinz Co."),
        ("MDLZ", "Mondelez International Inc."),
        ("STZ", "Constellation Brands Inc."),
        ("BF.B", "Brown-Forman Corp."),
        ("MO", "Altria Group Inc."),
        ("PCAR", "PACCAR Inc."),
        ("WM", "Waste Management Inc."),
        ("RSG", "Republic Services Inc."),
        ("WCN", "Waste Connections Inc."),
        ("AWK", "American Water Works Co. Inc."),
        ("AEP", "American Electric Power Co. Inc."),
        ("DUK", "Duke Energy Corp."),
        ("SO", "Southern Co."),
        ("NEE", "NextEra Energy Inc."),
        ("D", "Dominion Energy Inc."),
        ("EXC", "Exelon Corp."),
        ("SRE", "Sempra Energy"),
        ("XEL", "Xcel Energy Inc."),
        ("WEC", "WEC Energy Group Inc."),
        ("ES", "Eversource Energy"),
        ("EIX", "Edison International"),
        ("PEG", "Public Service Enterprise Group Inc."),
        ("AEE", "Ameren Corp."),
        ("LNT", "Alliant Energy Corp."),
        ("ED", "Consolidated Edison Inc."),
        ("OKE", "ONEOK Inc."),
        ("TRP", "TC Energy Corp."),
        ("ENB", "Enbridge Inc."),
        ("EPD", "Enterprise Products Partners L.P."),
        ("ET", "Energy Transfer L.P."),
        ("MPLX", "MPLX L.P."),
        ("PAA", "Plains All American Pipeline L.P."),
        ("LNG", "Cheniere Energy Inc."),
        ("NOV", "NOV Inc."),
        ("FTI", "TechnipFMC plc"),
        ("NBR", "Nabors Industries Ltd."),
        ("HP", "Helmerich & Payne Inc."),
        ("PTEN", "Patterson-UTI Energy Inc."),
        ("PUMP", "ProPetro Holding Corp."),
        ("WFRD", "Weatherford International plc"),
        ("TDW", "Tidewater Inc."),
        ("RIG", "Transocean Ltd."),
        ("VAL", "Valaris Ltd."),
        ("FANG", "Diamondback Energy Inc."),
        ("PXD", "Pioneer Natural Resources Co."),
        ("EQT", "EQT Corp."),
        ("DVN", "Devon Energy Corp."),
        ("MTDR", "Matador Resources Co."),
        ("MRO", "Marathon Oil Corp."),
        ("APA", "APA Corp."),
        ("OXY", "Occidental Petroleum Corp."),
        ("HAL", "Halliburton Co."),
        ("BKR", "Baker Hughes Co."),
        ("SLB", "Schlumberger Ltd."),
        ("EOG", "EOG Resources Inc."),
        ("PSX", "Phillips 66"),
        ("MPC", "Marathon Petroleum Corp."),
        ("VLO", "Valero Energy Corp."),
        ("KMI", "Kinder Morgan Inc."),
        ("WMB", "Williams Companies Inc."),
        ("COP", "ConocoPhillips"),
        ("ATVI", "Activision Blizzard Inc."),
        ("EA", "Electronic Arts Inc."),
        ("TTWO", "Take-Two Interactive Software Inc."),
        ("CHTR", "Charter Communications Inc."),
        ("TMUS", "T-Mobile US Inc."),
        ("F", "Ford Motor Co."),
        ("GM", "General Motors Co."),
    ]
    .into_iter()
    .collect();
}

pub fn known_name(ticker: &str) -> Option<&'static str> {
    KNOWN_NAMES.get(ticker).copied()
}

/// Display name for a ticker. Unknown tickers draw one keyword from the
/// sector's list; the draw only happens on a miss.
pub fn resolve_name<R: Rng>(ticker: &str, sector: Sector, rng: &mut R) -> String {
    if let Some(name) = known_name(ticker) {
        return name.to_string();
    }

    let keywords = sector_keywords(sector);
    let keyword = keywords[rng.random_range(0..keywords.len())];

    if ticker.len() <= 4 && ticker.chars().all(|c| c.is_alphabetic()) {
        format!("{} {}", ticker, keyword)
    } else {
        format!("{} Corporation", ticker)
    }
}

/// Uniform draw range selected by ticker membership.
#[derive(Debug, Clone, Copy)]
pub struct TierRule {
    pub members: &'static [&'static str],
    pub range: (f64, f64),
}

// Rules are evaluated first-match-wins; order matters.
pub const PRICE_TIERS: &[TierRule] = &[
    TierRule {
        members: &["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "TSLA", "META"],
        range: (100.0, 500.0),
    },
    TierRule {
        members: &["JNJ", "JPM", "V", "PG", "UNH", "HD", "MA", "XOM", "CVX"],
        range: (80.0, 300.0),
    },
    TierRule {
        members: &["PFE", "WMT", "KO", "PEP", "CSCO", "INTC", "IBM", "ORCL"],
        range: (40.0, 200.0),
    },
];
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (20.0, 150.0);

pub const CAP_TIERS: &[TierRule] = &[
    TierRule { members: &["AAPL", "MSFT", "GOOGL", "AMZN"], range: (1000.0, 5000.0) },
    TierRule {
        members: &["NVDA", "META", "TSLA", "JPM", "JNJ", "V", "PG"],
        range: (500.0, 2000.0),
    },
];
pub const DEFAULT_CAP_RANGE: (f64, f64) = (50.0, 500.0);

// Top-up rows skip the tier tables entirely.
pub const TOP_UP_PRICE_RANGE: (f64, f64) = (20.0, 300.0);
pub const TOP_UP_CAP_RANGE: (f64, f64) = (50.0, 500.0);

pub const CURRENT_MULTIPLIER: (f64, f64) = (0.8, 1.2);
pub const LOW_MULTIPLIER: (f64, f64) = (0.7, 0.95);
pub const HIGH_MULTIPLIER: (f64, f64) = (1.05, 1.4);
pub const VOLUME_RANGE: (f64, f64) = (1.0, 200.0);

pub fn tier_range(rules: &[TierRule], default: (f64, f64), ticker: &str) -> (f64, f64) {
    rules
        .iter()
        .find(|rule| rule.members.contains(&ticker))
        .map(|rule| rule.range)
        .unwrap_or(default)
}

pub fn price_range(ticker: &str) -> (f64, f64) {
    tier_range(PRICE_TIERS, DEFAULT_PRICE_RANGE, ticker)
}

/// Multiplier range; market cap in billions is `price * draw / 1000`.
pub fn cap_range(ticker: &str) -> (f64, f64) {
    tier_range(CAP_TIERS, DEFAULT_CAP_RANGE, ticker)
}
