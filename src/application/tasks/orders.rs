/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Order entry and management
//!
//! Payload parameters accept any serializable value. The typed helpers in
//! [`requests`](crate::model::requests) (`OrderRequest`, `BracketOrderRequest`,
//! `ReplyMessage`) produce the shapes the gateway expects.

use crate::application::task::Task;
use crate::application::tasks::to_body;
use crate::error::AppError;
use crate::model::request::RequestDescriptor;
use serde::Serialize;

/// Orders with activity in the current day, plus notifications.
///
/// Meant for polling.
pub fn orders() -> Task {
    Task::single(
        "orders.orders",
        RequestDescriptor::get("/api/iserver/account/orders"),
    )
}

/// Places an order.
///
/// The response may contain questions instead of an order id; answer them with
/// [`reply`] to submit the order.
pub fn place_order<T: Serialize + ?Sized>(account_id: &str, order: &T) -> Result<Task, AppError> {
    Ok(Task::single(
        "orders.place_order",
        RequestDescriptor::post(format!("/api/iserver/account/{account_id}/order"))
            .with_body(to_body(order)?),
    ))
}

/// Places several orders at once, e.g. a parent with its take-profit and stop children.
pub fn place_bracket_order<T: Serialize + ?Sized>(
    account_id: &str,
    orders: &T,
) -> Result<Task, AppError> {
    Ok(Task::single(
        "orders.place_bracket_order",
        RequestDescriptor::post(format!("/api/iserver/account/{account_id}/orders"))
            .with_body(to_body(orders)?),
    ))
}

/// Modifies an open order. The brokerage accounts listing must have been requested first.
pub fn modify_order<T: Serialize + ?Sized>(
    account_id: &str,
    order_id: &str,
    order: &T,
) -> Result<Task, AppError> {
    Ok(Task::single(
        "orders.modify_order",
        RequestDescriptor::post(format!(
            "/api/iserver/account/{account_id}/order/{order_id}"
        ))
        .with_body(to_body(order)?),
    ))
}

/// Cancels an order.
pub fn delete_order(account_id: &str, order_id: &str) -> Task {
    Task::single(
        "orders.delete_order",
        RequestDescriptor::delete(format!(
            "/api/iserver/account/{account_id}/order/{order_id}"
        )),
    )
}

/// Previews an order without submitting it, commissions included.
pub fn place_whatif_order<T: Serialize + ?Sized>(
    account_id: &str,
    order: &T,
) -> Result<Task, AppError> {
    Ok(Task::single(
        "orders.place_whatif_order",
        RequestDescriptor::post(format!("/api/iserver/account/{account_id}/order/whatif"))
            .with_body(to_body(order)?),
    ))
}

/// Answers a question raised while placing an order.
pub fn reply<T: Serialize + ?Sized>(reply_id: &str, message: &T) -> Result<Task, AppError> {
    Ok(Task::single(
        "orders.reply",
        RequestDescriptor::post(format!("/api/iserver/reply/{reply_id}"))
            .with_body(to_body(message)?),
    ))
}
