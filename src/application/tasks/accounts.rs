use crate::application::task::Task;
use crate::constants::ACCOUNTS_ENDPOINT;
use crate::model::request::RequestDescriptor;

/// Returns the accounts the user can trade, their aliases and the selected account.
///
/// Must be called before modifying an order or querying open orders. A failed
/// response from this endpoint is still returned as a value.
pub fn accounts() -> Task {
    Task::single("accounts.accounts", RequestDescriptor::get(ACCOUNTS_ENDPOINT))
}
