use crate::application::task::Task;
use crate::application::tasks::to_body;
use crate::error::AppError;
use crate::model::request::RequestDescriptor;
use crate::model::requests::TransactionsRequest;
use crate::presentation::enums::Frequency;
use crate::presentation::selector::Selector;
use serde_json::json;

/// Performance (MTM) of the given accounts, consolidated when several are passed.
///
/// `frequency` is `"D"`, `"M"`, `"Q"` or the matching [`Frequency`].
pub fn account_performance<S: AsRef<str>>(
    account_ids: &[S],
    frequency: impl Into<Selector<Frequency>>,
) -> Task {
    let frequency = frequency.into();
    let ids: Vec<&str> = account_ids.iter().map(AsRef::as_ref).collect();
    Task::single(
        "portfolio_analysis.account_performance",
        RequestDescriptor::post("/api/pa/performance")
            .with_body(json!({ "acctIds": ids, "freq": frequency.value() })),
    )
}

/// Balances of the given accounts, consolidated when several are passed.
pub fn account_summary<S: AsRef<str>>(account_ids: &[S]) -> Task {
    let ids: Vec<&str> = account_ids.iter().map(AsRef::as_ref).collect();
    Task::single(
        "portfolio_analysis.account_summary",
        RequestDescriptor::post("/api/pa/summary").with_body(json!({ "acctIds": ids })),
    )
}

/// Transaction history (dividends, trades, transfers) for accounts and contracts.
///
/// # Errors
/// [`AppError::Json`] if the request cannot be serialized.
pub fn transactions_history(request: &TransactionsRequest) -> Result<Task, AppError> {
    Ok(Task::single(
        "portfolio_analysis.transactions_history",
        RequestDescriptor::post("/api/pa/transactions").with_body(to_body(request)?),
    ))
}
