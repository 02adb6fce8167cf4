//! PIX instant-transfer notifications, sent and received
//!
//! Examples:
//!   PIX enviado em 19/09/2025 as 16:09 no valor de R$ 0,14.
//!   PIX recebido em 19/09/2025 as 16:09 no valor de R$ 0,14.
//!
//! The amount capture keeps the sentence's final period ("0,14."); the amount
//! normalizer drops it.

use gasto_core::{Category, Expense, Income};
use regex::Captures;

use crate::amount::parse_amount;
use crate::catalog::{Envelope, Template};
use crate::error::{FieldError, TemplateError};
use crate::timestamp::parse_timestamp;

pub const SENT_NAME: &str = "pix-sent";
pub const RECEIVED_NAME: &str = "pix-received";

/// Description given to every received PIX; the message carries no payer name.
pub const RECEIVED_DESCRIPTION: &str = "you just received a pix";

const SENT_PATTERN: &str = concat!(
    r"PIX enviado em (?P<date>\d{2}/\d{2}/\d{4}) (?:as|ás|às) (?P<time>\d{2}:\d{2}) ",
    r"no valor de R\$ ?(?P<amount>[\d.,]+)"
);

const RECEIVED_PATTERN: &str = concat!(
    r"PIX recebido em (?P<date>\d{2}/\d{2}/\d{4}) (?:as|ás|às) (?P<time>\d{2}:\d{2}) ",
    r"no valor de R\$ ?(?P<amount>[\d.,]+)"
);

const GROUPS: &[&str] = &["date", "time", "amount"];

pub fn sent_template() -> Result<Template<Expense>, TemplateError> {
    Template::new(SENT_NAME, SENT_PATTERN, Category::Pix, GROUPS, extract_sent)
}

pub fn received_template() -> Result<Template<Income>, TemplateError> {
    Template::new(
        RECEIVED_NAME,
        RECEIVED_PATTERN,
        Category::Pix,
        GROUPS,
        extract_received,
    )
}

/// Merchant text for a sent PIX
pub fn sent_description(recipient: &str) -> String {
    format!("PIX para {recipient}")
}

fn extract_sent(caps: &Captures<'_>, env: &Envelope<'_>) -> Result<Expense, FieldError> {
    let amount = parse_amount(&caps["amount"])?;
    let timestamp = parse_timestamp(&caps["date"], &caps["time"])?;
    // The message never names the recipient; the slot stays empty.
    let recipient = "";

    Ok(Expense::new(
        amount,
        timestamp,
        sent_description(recipient),
        env.category,
        env.sender,
        env.body,
    ))
}

fn extract_received(caps: &Captures<'_>, env: &Envelope<'_>) -> Result<Income, FieldError> {
    let amount = parse_amount(&caps["amount"])?;
    let timestamp = parse_timestamp(&caps["date"], &caps["time"])?;

    Ok(Income::new(
        amount,
        timestamp,
        RECEIVED_DESCRIPTION,
        env.category,
        env.sender,
        env.body,
    ))
}
