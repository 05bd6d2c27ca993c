/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::task::Task;
use crate::model::request::{RequestDescriptor, comma_join};
use serde_json::{Map, Value, json};

/// Contract details, useful to prefill an order before submitting it.
pub fn contract_info(conid: impl ToString) -> Task {
    Task::single(
        "contract.contract_info",
        RequestDescriptor::get(format!(
            "/api/iserver/contract/{}/info",
            conid.to_string()
        )),
    )
}

/// Non-expired futures for the given case-sensitive symbols.
///
/// Symbols are sent comma joined: `["AAPL", "MSFT"]` becomes `symbols=AAPL,MSFT`.
pub fn search_futures<S: AsRef<str>>(symbols: &[S]) -> Task {
    let symbols: Vec<&str> = symbols.iter().map(|s| s.as_ref()).collect();
    Task::single(
        "contract.search_futures",
        RequestDescriptor::get("/api/trsrv/futures").with_param("symbols", comma_join(symbols)),
    )
}

/// Searches contracts by symbol, or by company name when `name` is set.
///
/// `security_type` is only sent when given.
pub fn search_symbol(symbol: &str, name: bool, security_type: Option<&str>) -> Task {
    let mut payload = Map::new();
    payload.insert("symbol".to_string(), json!(symbol));
    payload.insert("name".to_string(), json!(name));
    if let Some(sec_type) = security_type {
        payload.insert("secType".to_string(), json!(sec_type));
    }

    Task::single(
        "contract.search_symbol",
        RequestDescriptor::post("/api/iserver/secdef/search").with_body(Value::Object(payload)),
    )
}

/// Security definitions for the given contract ids, sent as a JSON array.
pub fn search_multiple_contracts(conids: &[i64]) -> Task {
    Task::single(
        "contract.search_multiple_contracts",
        RequestDescriptor::post("/api/trsrv/secdef").with_body(json!({ "conids": conids })),
    )
}
