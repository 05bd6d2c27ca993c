/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::task::Task;
use crate::model::request::{RequestDescriptor, comma_join};
use crate::model::requests::{MarketHistoryRequest, SnapshotRequest};
use crate::presentation::selector::join_selectors;

/// Market data snapshot for one or more contracts.
///
/// Without fields the gateway returns bid, ask, last, change, change percent,
/// close and listing exchange. Symbolic fields are resolved to their numeric
/// codes before being joined into the `fields` parameter. The brokerage
/// accounts listing should have been requested first in the session, and the
/// first snapshot of a contract usually only opens the subscription.
///
/// # Example
/// ```
/// use ibc_client::application::tasks::market_data::snapshot;
/// use ibc_client::model::requests::SnapshotRequest;
/// use ibc_client::presentation::fields::MarketDataField;
///
/// let task = snapshot(
///     &SnapshotRequest::new(["265598"])
///         .with_field(MarketDataField::LastPrice)
///         .with_field("84"),
/// );
/// assert_eq!(task.request().param("fields"), Some(&serde_json::json!("31,84")));
/// ```
pub fn snapshot(request: &SnapshotRequest) -> Task {
    let fields = (!request.fields.is_empty()).then(|| join_selectors(&request.fields));
    let descriptor = RequestDescriptor::get("/api/iserver/marketdata/snapshot")
        .with_param("conids", comma_join(&request.conids))
        .with_param("since", request.since)
        .with_param("fields", fields);

    Task::single("market_data.snapshot", descriptor)
}

/// Historical bars for a contract; `period` and `bar` control the length and size.
pub fn market_history(request: &MarketHistoryRequest) -> Task {
    let descriptor = RequestDescriptor::get("/api/iserver/marketdata/history")
        .with_param("conid", request.conid.as_str())
        .with_param("period", request.period.as_str())
        .with_param("bar", request.bar.as_ref().map(|bar| bar.value().to_string()))
        .with_param("exchange", request.exchange.clone())
        .with_param("outsideRth", request.outside_rth);

    Task::single("market_data.market_history", descriptor)
}
