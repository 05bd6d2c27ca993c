/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Market data field codes
//!
//! The snapshot endpoint selects attributes through numeric field codes. This
//! module maps symbolic names to those codes and back.

use crate::presentation::selector::FieldSelector;
use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use std::collections::HashMap;

api_enum! {
    /// Fields available from `/iserver/marketdata/snapshot`
    MarketDataField {
        /// Last traded price
        LastPrice => "31",
        Symbol => "55",
        Text => "58",
        /// Current day high
        High => "70",
        /// Current day low
        Low => "71",
        Position => "72",
        MarketValue => "73",
        AvgPrice => "74",
        UnrealizedPnl => "75",
        FormattedPosition => "76",
        FormattedUnrealizedPnl => "77",
        DailyPnl => "78",
        Change => "82",
        ChangePercent => "83",
        BidPrice => "84",
        AskSize => "85",
        AskPrice => "86",
        Volume => "87",
        BidSize => "88",
        Exchange => "6004",
        Conid => "6008",
        SecType => "6070",
        Months => "6072",
        RegularExpiry => "6073",
        Marker => "6119",
        UnderlyingContract => "6457",
        MarketDataAvailability => "6509",
        CompanyName => "7051",
        AskExch => "7057",
        LastExch => "7058",
        LastSize => "7059",
        BidExch => "7068",
        MarketDataAvailabilityOther => "7084",
        PutCallInterest => "7085",
        PutCallVolume => "7086",
        HistoricVolumePercent => "7087",
        HistoricVolumeClosePercent => "7088",
        OptionVolume => "7089",
        ContractIdAndExchange => "7094",
        ContractDescription => "7219",
        ContractDescriptionOther => "7220",
        ListingExchange => "7221",
        Industry => "7280",
        Category => "7281",
        AverageVolume => "7282",
        OptionImpliedVolatilityPercent => "7283",
        HistoricVolume => "7284",
        PutCallRatio => "7285",
        DividendAmount => "7286",
        DividendYield | "DividentYield" => "7287",
        /// Ex-dividend date
        Ex => "7288",
        MarketCap => "7289",
        PriceEarningsRatio => "7290",
        EarningsPerShare => "7291",
        CostBasis => "7292",
        FiftyTwoWeekLow => "7293",
        FiftyTwoWeekHigh => "7294",
        Open => "7295",
        Close => "7296",
        Delta => "7308",
        Gamma => "7309",
        Theta => "7310",
        Vega => "7311",
        OptionVolumeChangePercent => "7607",
        ImpliedVolatilityPercent => "7633",
        Mark => "7635",
        ShortableShares => "7636",
        FeeRate => "7637",
        OptionOpenInterest => "7638",
        PercentOfMarketValue => "7639",
        Shortable => "7644",
        MorningstarRating => "7655",
        Dividends => "7671",
        DividendsTtm => "7672",
        EMATwoHundred => "7674",
        EMAOneHundred => "7675",
        EMAFiftyDay => "7676",
        EMATwentyDay => "7677",
        PriceEMATwoHundredDay => "7678",
        PriceEMAOneHundredDay => "7679",
        PriceEMAFiftyDay => "7680",
        PriceEMATwentyDay => "7681",
        ChangeSinceOpen => "7682",
        UpcomingEvent => "7683",
        UpcomingEventDate => "7684",
        UpcomingAnalystMeeting => "7685",
        UpcomingEarnings => "7686",
        UpcomingMiscEvents => "7687",
        RecentAnalystMeeting => "7688",
        RecentEarnings => "7689",
        RecentMiscEvents => "7690",
        ProbabilityOfMaxReturnCustomer => "7694",
        BreakEven => "7695",
        SpxDelta => "7696",
        FuturesOpenInterest => "7697",
        LastYield => "7698",
        BidYield => "7699",
        ProbabilityMaxReturn => "7700",
        ProbabilityMaxLoss => "7702",
        ProfitProbability => "7703",
        OrganizationType => "7704",
        DebtClass => "7705",
        Ratings => "7706",
        BondStateCode => "7707",
        BondType => "7708",
        LastTradingDate => "7714",
        IssueDate => "7715",
        Beta => "7718",
        AskYield => "7720",
        PriorClose => "7741",
        VolumeLong => "7762",
    }
}

static BY_CODE: Lazy<HashMap<&'static str, MarketDataField>> = Lazy::new(|| {
    MarketDataField::ALL
        .iter()
        .map(|field| (field.as_str(), *field))
        .collect()
});

impl MarketDataField {
    /// Numeric field code, e.g. `"31"` for [`MarketDataField::LastPrice`]
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.as_str()
    }

    /// Looks a field up by its numeric code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        BY_CODE.get(code).copied()
    }

    /// Selectors for every known field
    #[must_use]
    pub fn all() -> Vec<FieldSelector> {
        Self::ALL.iter().copied().map(FieldSelector::from).collect()
    }
}

/// Renames numeric field keys of a snapshot entry to their symbolic names.
///
/// Keys that are not field codes (`conid`, `_updated`, `server_id`...) are kept
/// unchanged. Arrays are relabelled element by element; other values are
/// returned as they are.
pub fn label_snapshot(snapshot: Value) -> Value {
    match snapshot {
        Value::Array(entries) => Value::Array(entries.into_iter().map(label_snapshot).collect()),
        Value::Object(entry) => {
            let labelled: Map<String, Value> = entry
                .into_iter()
                .map(|(key, value)| match MarketDataField::from_code(&key) {
                    Some(field) => (field.name().to_string(), value),
                    None => (key, value),
                })
                .collect();
            Value::Object(labelled)
        }
        other => other,
    }
}
