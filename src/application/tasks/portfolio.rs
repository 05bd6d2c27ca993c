/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Portfolio endpoints
//!
//! Apart from the two account listings, every task here is chained: the
//! gateway expects `/portfolio/accounts` to have been requested before any
//! other `/portfolio` call, so it is issued first.

use crate::application::task::Task;
use crate::constants::PORTFOLIO_ACCOUNTS_ENDPOINT;
use crate::model::request::RequestDescriptor;
use crate::model::requests::PositionsRequest;
use crate::presentation::selector::Selector;
use serde_json::json;

/// Accounts with portfolio data available.
pub fn accounts() -> Task {
    Task::single(
        "portfolio.accounts",
        RequestDescriptor::get(PORTFOLIO_ACCOUNTS_ENDPOINT),
    )
}

/// Sub-accounts of a financial advisor or IBroker account (up to 100).
pub fn sub_accounts() -> Task {
    Task::single(
        "portfolio.sub_accounts",
        RequestDescriptor::get("/api/portfolio/subaccounts"),
    )
}

/// Balances, margin and equity summary of an account.
pub fn account_summary(account_id: &str) -> Task {
    Task::chained(
        "portfolio.account_summary",
        RequestDescriptor::get(format!("/api/portfolio/{account_id}/summary")),
    )
}

/// Account metadata: type, currency, trading permissions.
pub fn account_metadata(account_id: &str) -> Task {
    Task::chained(
        "portfolio.account_metadata",
        RequestDescriptor::get(format!("/api/portfolio/{account_id}/meta")),
    )
}

/// Cash balances per currency.
pub fn account_ledger(account_id: &str) -> Task {
    Task::chained(
        "portfolio.account_ledger",
        RequestDescriptor::get(format!("/api/portfolio/{account_id}/ledger")),
    )
}

/// Allocation of an account by asset class, industry and category.
pub fn account_allocation(account_id: &str) -> Task {
    Task::chained(
        "portfolio.account_allocation",
        RequestDescriptor::get(format!("/api/portfolio/{account_id}/allocation")),
    )
}

/// One page of positions, 30 per page.
///
/// Sort field and direction accept raw strings or their enum variants; unset
/// options are left out of the query string.
pub fn portfolio_positions(request: &PositionsRequest) -> Task {
    let descriptor = RequestDescriptor::get(format!(
        "/api/portfolio/{}/positions/{}",
        request.account_id, request.page_id
    ))
    .with_param("sort", request.sort.as_ref().map(|s| s.value().to_string()))
    .with_param(
        "direction",
        request.direction.as_ref().map(Selector::value).map(str::to_string),
    )
    .with_param("period", request.period.clone());

    Task::chained("portfolio.portfolio_positions", descriptor)
}

/// Consolidated allocation of several accounts.
pub fn portfolio_allocation<S: AsRef<str>>(account_ids: &[S]) -> Task {
    let ids: Vec<&str> = account_ids.iter().map(AsRef::as_ref).collect();
    Task::chained(
        "portfolio.portfolio_allocation",
        RequestDescriptor::post("/api/portfolio/allocation").with_body(json!({ "acctIds": ids })),
    )
}

/// Position of one contract in an account.
pub fn position_by_contract_id(account_id: &str, conid: impl ToString) -> Task {
    Task::chained(
        "portfolio.position_by_contract_id",
        RequestDescriptor::get(format!(
            "/api/portfolio/{account_id}/position/{}",
            conid.to_string()
        )),
    )
}

/// Positions of one contract across every account.
pub fn positions_by_contract_id(conid: impl ToString) -> Task {
    Task::chained(
        "portfolio.positions_by_contract_id",
        RequestDescriptor::get(format!("/api/portfolio/positions/{}", conid.to_string())),
    )
}

/// Drops the gateway's cached positions of an account.
pub fn invalidate_positions_cache(account_id: &str) -> Task {
    Task::chained(
        "portfolio.invalidate_positions_cache",
        RequestDescriptor::post(format!(
            "/api/portfolio/{account_id}/positions/invalidate"
        )),
    )
}
