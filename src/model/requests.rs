/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_CURRENCY, DEFAULT_TRANSACTION_DAYS};
use crate::presentation::enums::{BarType, SortDirection, SortField};
use crate::presentation::order::{OrderType, Side, TimeInForce};
use crate::presentation::selector::{FieldSelector, Selector};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for a market data snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotRequest {
    /// Contract ids to query
    pub conids: Vec<String>,
    /// Only return fields updated since this epoch (milliseconds)
    pub since: Option<i64>,
    /// Fields to return; the gateway default set when empty
    pub fields: Vec<FieldSelector>,
}

impl SnapshotRequest {
    /// Create new parameters for the given contracts
    pub fn new<I, S>(conids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            conids: conids.into_iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Set the `since` filter
    pub fn with_since(mut self, since: i64) -> Self {
        self.since = Some(since);
        self
    }

    /// Add one field, as a code (`"31"`) or a [`MarketDataField`](crate::presentation::fields::MarketDataField)
    pub fn with_field(mut self, field: impl Into<FieldSelector>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Replace the field selection
    pub fn with_fields(mut self, fields: Vec<FieldSelector>) -> Self {
        self.fields = fields;
        self
    }
}

/// Parameters for historical bars
#[derive(Debug, Clone, PartialEq)]
pub struct MarketHistoryRequest {
    /// Contract id
    pub conid: String,
    /// Time span: `{1-30}min`, `{1-8}h`, `{1-1000}d`, `{1-792}w`, `{1-182}m`, `{1-15}y`
    pub period: String,
    /// Bar size
    pub bar: Option<Selector<BarType>>,
    /// Exchange of the contract
    pub exchange: Option<String>,
    /// Include data outside regular trading hours (default: true)
    pub outside_rth: bool,
}

impl MarketHistoryRequest {
    /// Create new parameters with the required contract and period
    pub fn new(conid: impl ToString, period: &str) -> Self {
        Self {
            conid: conid.to_string(),
            period: period.to_string(),
            bar: None,
            exchange: None,
            outside_rth: true,
        }
    }

    /// Set the bar size, raw (`"5min"`) or symbolic (`BarType::FiveMinute`)
    pub fn with_bar(mut self, bar: impl Into<Selector<BarType>>) -> Self {
        self.bar = Some(bar.into());
        self
    }

    /// Set the exchange
    pub fn with_exchange(mut self, exchange: &str) -> Self {
        self.exchange = Some(exchange.to_string());
        self
    }

    /// Set whether bars outside regular trading hours are included
    pub fn with_outside_rth(mut self, outside_rth: bool) -> Self {
        self.outside_rth = outside_rth;
        self
    }
}

/// Parameters for a page of portfolio positions
#[derive(Debug, Clone, PartialEq)]
pub struct PositionsRequest {
    /// Account to query
    pub account_id: String,
    /// Page index, 30 positions per page
    pub page_id: u32,
    /// Sort column
    pub sort: Option<Selector<SortField>>,
    /// Sort order
    pub direction: Option<Selector<SortDirection>>,
    /// Period for the pnl column (`1D`, `7D`, `1M`...)
    pub period: Option<String>,
}

impl PositionsRequest {
    /// Create new parameters for the first page of an account
    pub fn new(account_id: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            page_id: 0,
            sort: None,
            direction: None,
            period: None,
        }
    }

    /// Set the page index
    pub fn with_page(mut self, page_id: u32) -> Self {
        self.page_id = page_id;
        self
    }

    /// Set the sort column
    pub fn with_sort(mut self, sort: impl Into<Selector<SortField>>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set the sort order
    pub fn with_direction(mut self, direction: impl Into<Selector<SortDirection>>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Set the pnl period
    pub fn with_period(mut self, period: &str) -> Self {
        self.period = Some(period.to_string());
        self
    }
}

/// Body for the portfolio analyst transactions endpoint
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransactionsRequest {
    /// Accounts to include
    #[serde(rename = "acctIds", skip_serializing_if = "Option::is_none")]
    pub account_ids: Option<Vec<String>>,
    /// Contracts to include
    #[serde(rename = "conids", skip_serializing_if = "Option::is_none")]
    pub conids: Option<Vec<i64>>,
    /// Currency of the returned values
    pub currency: String,
    /// Number of days to return
    pub days: u32,
}

impl Default for TransactionsRequest {
    fn default() -> Self {
        Self {
            account_ids: None,
            conids: None,
            currency: DEFAULT_CURRENCY.to_string(),
            days: DEFAULT_TRANSACTION_DAYS,
        }
    }
}

impl TransactionsRequest {
    /// Create new parameters with the default currency and look-back
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the accounts
    pub fn with_accounts<S: ToString>(mut self, account_ids: &[S]) -> Self {
        self.account_ids = Some(account_ids.iter().map(|a| a.to_string()).collect());
        self
    }

    /// Set the contracts
    pub fn with_conids(mut self, conids: &[i64]) -> Self {
        self.conids = Some(conids.to_vec());
        self
    }

    /// Set the currency
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    /// Set the number of days
    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }
}

/// A single order ticket
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Contract id
    pub conid: i64,
    /// `conid:type` pair, e.g. `"265598:STK"`
    #[serde(rename = "secType", skip_serializing_if = "Option::is_none")]
    pub sec_type: Option<String>,
    /// Client order id, must be unique per order
    #[serde(rename = "cOID", skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    /// Client order id of the parent when this order is a bracket child
    #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Type of order
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// Limit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Stop price for stop limit orders
    #[serde(rename = "auxPrice", skip_serializing_if = "Option::is_none")]
    pub aux_price: Option<f64>,
    /// Buy or sell
    pub side: Side,
    /// Number of units
    pub quantity: f64,
    /// Time in force
    pub tif: TimeInForce,
    /// Allow fills outside regular trading hours
    #[serde(rename = "outsideRTH", skip_serializing_if = "Option::is_none")]
    pub outside_rth: Option<bool>,
    /// Exchange to route to
    #[serde(rename = "listingExchange", skip_serializing_if = "Option::is_none")]
    pub listing_exchange: Option<String>,
}

impl OrderRequest {
    /// Creates a day limit order
    pub fn limit(conid: i64, side: Side, quantity: f64, price: f64) -> Self {
        Self {
            conid,
            sec_type: None,
            client_order_id: None,
            parent_id: None,
            order_type: OrderType::Limit,
            price: Some(price),
            aux_price: None,
            side,
            quantity,
            tif: TimeInForce::Day,
            outside_rth: None,
            listing_exchange: None,
        }
    }

    /// Creates a day market order
    pub fn market(conid: i64, side: Side, quantity: f64) -> Self {
        Self {
            order_type: OrderType::Market,
            price: None,
            ..Self::limit(conid, side, quantity, 0.0)
        }
    }

    /// Set the security type pair
    pub fn with_sec_type(mut self, sec_type: &str) -> Self {
        self.sec_type = Some(sec_type.to_string());
        self
    }

    /// Set the client order id
    pub fn with_client_order_id(mut self, id: &str) -> Self {
        self.client_order_id = Some(id.to_string());
        self
    }

    /// Attach the order to a parent by its client order id
    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.to_string());
        self
    }

    /// Set the stop price
    pub fn with_aux_price(mut self, aux_price: f64) -> Self {
        self.aux_price = Some(aux_price);
        self
    }

    /// Set the time in force
    pub fn with_tif(mut self, tif: TimeInForce) -> Self {
        self.tif = tif;
        self
    }

    /// Allow fills outside regular trading hours
    pub fn with_outside_rth(mut self, outside_rth: bool) -> Self {
        self.outside_rth = Some(outside_rth);
        self
    }

    /// Set the listing exchange
    pub fn with_listing_exchange(mut self, exchange: &str) -> Self {
        self.listing_exchange = Some(exchange.to_string());
        self
    }
}

/// Several orders submitted together, parents first
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct BracketOrderRequest {
    /// Orders, children referencing their parent through `parentId`
    pub orders: Vec<OrderRequest>,
}

/// Answer to an order confirmation question
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplyMessage {
    /// Whether the order should go ahead
    pub confirmed: bool,
}

/// One filter of a scanner definition
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ScannerFilter {
    /// Filter code, e.g. `priceAbove`
    pub code: String,
    /// Filter value, `null` to leave the filter unset
    pub value: Option<Value>,
}

/// Definition of a market scanner run
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct ScannerDefinition {
    /// Instrument class, e.g. `STK`
    pub instrument: String,
    /// Scan code, e.g. `TOP_PERC_GAIN`
    #[serde(rename = "type")]
    pub scan_type: String,
    /// Filters applied to the scan
    pub filter: Vec<ScannerFilter>,
    /// Location code, e.g. `STK.US.MAJOR`
    pub location: String,
    /// Maximum number of results, as a string
    pub size: String,
}

impl ScannerDefinition {
    /// Creates a scanner without filters returning up to 25 contracts
    pub fn new(instrument: &str, scan_type: &str, location: &str) -> Self {
        Self {
            instrument: instrument.to_string(),
            scan_type: scan_type.to_string(),
            filter: Vec::new(),
            location: location.to_string(),
            size: "25".to_string(),
        }
    }

    /// Adds a filter
    pub fn with_filter(mut self, code: &str, value: Option<Value>) -> Self {
        self.filter.push(ScannerFilter {
            code: code.to_string(),
            value,
        });
        self
    }

    /// Sets the maximum number of results
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.to_string();
        self
    }
}
