//! Public entry points: one per record kind, plus channel routing.

use gasto_core::{Channel, Expense, Income, IncomingMessage, Transaction};
use tracing::debug;

use crate::parsers::{expense_catalog, income_catalog};

/// Notification bodies containing this word go to the income path.
pub const INCOME_MARKER: &str = "recebido";

/// Which catalog a message is offered to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Expense,
    Income,
}

/// SMS always take the expense path; notifications take the income path when
/// they announce money received.
pub fn route(message: &IncomingMessage) -> Route {
    match message.channel {
        Channel::Sms => Route::Expense,
        Channel::Notification if message.body.contains(INCOME_MARKER) => Route::Income,
        Channel::Notification => Route::Expense,
    }
}

/// Extract an expense from a card-purchase or sent-PIX message.
///
/// `None` for anything unrecognized; that is the common case, not a failure.
pub fn classify_expense(sender: &str, body: &str) -> Option<Expense> {
    expense_catalog().dispatch(sender, body)
}

/// Extract an income record from a received-PIX notification.
pub fn classify_income(title: &str, body: &str) -> Option<Income> {
    income_catalog().dispatch(title, body)
}

/// Route a message to exactly one path and extract at most one record.
pub fn classify(message: &IncomingMessage) -> Option<Transaction> {
    let route = route(message);
    debug!(?route, channel = ?message.channel, "classifying message");

    match route {
        Route::Expense => classify_expense(&message.sender_or_title, &message.body).map(Into::into),
        Route::Income => classify_income(&message.sender_or_title, &message.body).map(Into::into),
    }
}
