/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Raw-or-symbolic parameter values
//!
//! Several endpoints take a parameter drawn from a fixed upstream vocabulary
//! (bar size, sort field, field code...). Callers may pass either the raw string
//! or the matching enum variant; [`Selector`] holds whichever was given and
//! [`Selector::value`] yields the wire string in both cases.
//!
//! ```
//! use ibc_client::presentation::enums::BarType;
//! use ibc_client::presentation::selector::Selector;
//!
//! let raw: Selector<BarType> = "1min".into();
//! let symbolic: Selector<BarType> = BarType::OneMinute.into();
//! assert_eq!(raw.value(), symbolic.value());
//! ```

use crate::presentation::fields::MarketDataField;

/// Types that carry a fixed upstream string value
pub trait ApiValue: Copy {
    /// The string sent to the gateway
    fn api_value(&self) -> &'static str;
}

/// A parameter given either as the raw upstream string or as a symbolic variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<E> {
    /// Value passed through verbatim
    Raw(String),
    /// Value resolved through the enum table
    Symbolic(E),
}

impl<E: ApiValue> Selector<E> {
    /// Resolves the selector to the string sent upstream
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Selector::Raw(raw) => raw.as_str(),
            Selector::Symbolic(symbolic) => symbolic.api_value(),
        }
    }
}

impl<E> From<&str> for Selector<E> {
    fn from(raw: &str) -> Self {
        Selector::Raw(raw.to_string())
    }
}

impl<E> From<String> for Selector<E> {
    fn from(raw: String) -> Self {
        Selector::Raw(raw)
    }
}

/// A market-data field given as a numeric code or a symbolic field
pub type FieldSelector = Selector<MarketDataField>;

/// Joins selectors into the comma separated form used in query strings
pub fn join_selectors<E: ApiValue>(selectors: &[Selector<E>]) -> String {
    selectors
        .iter()
        .map(Selector::value)
        .collect::<Vec<_>>()
        .join(",")
}
