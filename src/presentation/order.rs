/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Order side
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy (open or add to a long position)
    #[default]
    Buy,
    /// Sell (close a long position or go short)
    Sell,
}

/// Order type as named by the Client Portal API
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderType {
    /// Limit order
    #[serde(rename = "LMT")]
    #[default]
    Limit,
    /// Market order
    #[serde(rename = "MKT")]
    Market,
    /// Stop order
    #[serde(rename = "STP")]
    Stop,
    /// Stop limit order
    #[serde(rename = "STOP_LIMIT")]
    StopLimit,
    /// Midprice order
    #[serde(rename = "MIDPRICE")]
    MidPrice,
    /// Trailing stop
    #[serde(rename = "TRAIL")]
    Trail,
    /// Trailing stop limit
    #[serde(rename = "TRAILLMT")]
    TrailLimit,
}

/// Order duration (time in force)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Valid for the current trading day
    #[default]
    Day,
    /// Good till cancelled
    Gtc,
    /// Market or limit on open
    Opg,
    /// Immediate or cancel
    Ioc,
    /// Overnight plus day
    Pax,
}
