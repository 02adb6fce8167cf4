//! Bank A card purchase SMS (upper-case, Bradesco-style)
//!
//! Example:
//!   BRADESCO CARTOES: COMPRA APROVADA NO CARTAO FINAL 7904 EM 14/07/2025 14:19.
//!   VALOR DE R$ 205.05 FLEXPAG*ENELSP SAO PAULO.
//!
//! Installment purchases insert `EM <n> X` between the amount and the merchant.

use gasto_core::{Category, Expense};
use regex::Captures;

use crate::amount::parse_amount;
use crate::catalog::{Envelope, Template};
use crate::error::{FieldError, TemplateError};
use crate::merchant::clean_merchant;
use crate::timestamp::parse_timestamp;

pub const NAME: &str = "card-bank-a";

const PATTERN: &str = concat!(
    r"EM (?P<date>\d{2}/\d{2}/\d{4}) (?P<time>\d{2}:\d{2})\. ",
    r"VALOR DE R\$ (?P<amount>[\d.,]+)",
    r"(?: EM \d+ X)? ",
    r"(?P<merchant>.+)"
);

pub fn template() -> Result<Template<Expense>, TemplateError> {
    Template::new(
        NAME,
        PATTERN,
        Category::CardBankA,
        &["date", "time", "amount", "merchant"],
        extract,
    )
}

fn extract(caps: &Captures<'_>, env: &Envelope<'_>) -> Result<Expense, FieldError> {
    let amount = parse_amount(&caps["amount"])?;
    let timestamp = parse_timestamp(&caps["date"], &caps["time"])?;
    // free-text tail carries a city/state tag
    let merchant = clean_merchant(&caps["merchant"]);

    Ok(Expense::new(
        amount,
        timestamp,
        merchant,
        env.category,
        env.sender,
        env.body,
    ))
}
