//! Bank B card purchase push/SMS (Santander-style)
//!
//! Example:
//!   Compra no cartão final 1001, de R$ 54,34, em 21/09/2025, ás 11:36, em AUTO POSTO, aprovada.

use gasto_core::{Category, Expense};
use regex::Captures;

use crate::amount::parse_amount;
use crate::catalog::{Envelope, Template};
use crate::error::{FieldError, TemplateError};
use crate::timestamp::parse_timestamp;

pub const NAME: &str = "card-bank-b";

// The amount must end in a digit so the comma after it is not captured.
const PATTERN: &str = concat!(
    r"R\$ ?(?P<amount>[\d.,]*\d)",
    r".*?em (?P<date>\d{2}/\d{2}/\d{4}),? (?:as|ás|às) (?P<time>\d{2}:\d{2}),? ",
    r"em (?P<merchant>.+?),? aprovada"
);

pub fn template() -> Result<Template<Expense>, TemplateError> {
    Template::new(
        NAME,
        PATTERN,
        Category::CardBankB,
        &["amount", "date", "time", "merchant"],
        extract,
    )
}

fn extract(caps: &Captures<'_>, env: &Envelope<'_>) -> Result<Expense, FieldError> {
    let amount = parse_amount(&caps["amount"])?;
    let timestamp = parse_timestamp(&caps["date"], &caps["time"])?;

    Ok(Expense::new(
        amount,
        timestamp,
        caps["merchant"].trim(),
        env.category,
        env.sender,
        env.body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::NaiveDate;

    fn catalog() -> Catalog<Expense> {
        Catalog::builder().template(template().unwrap()).build()
    }

    #[test]
    fn test_parses_purchase() {
        let body = "Compra no cartão final 1001, de R$ 54,34, em 21/09/2025, ás 11:36, em AUTO POSTO, aprovada.";
        let e = catalog().dispatch("Santander", body).unwrap();
        assert_eq!(e.amount().to_string(), "54.34");
        assert_eq!(
            e.timestamp(),
            NaiveDate::from_ymd_opt(2025, 9, 21).unwrap().and_hms_opt(11, 36, 0).unwrap()
        );
        assert_eq!(e.merchant(), "AUTO POSTO");
        assert_eq!(e.category(), Category::CardBankB);
        assert_eq!(e.source_sender(), "Santander");
    }

    #[test]
    fn test_accepts_unaccented_and_grave_as() {
        for word in ["as", "às"] {
            let body = format!(
                "Compra no cartão final 1001, de R$ 1.054,90, em 01/10/2025, {word} 08:00, em MERCADO X LTDA, aprovada."
            );
            let e = catalog().dispatch("Santander", &body).unwrap();
            assert_eq!(e.amount().to_string(), "1054.90");
            assert_eq!(e.merchant(), "MERCADO X LTDA");
        }
    }

    #[test]
    fn test_merchant_is_not_cleaned() {
        let body = "Compra no cartão final 1001, de R$ 10,00, em 01/10/2025, ás 08:00, em PADARIA SP, aprovada.";
        let e = catalog().dispatch("Santander", body).unwrap();
        assert_eq!(e.merchant(), "PADARIA SP");
    }

    #[test]
    fn test_declined_purchase_is_no_match() {
        let body = "Compra no cartão final 1001, de R$ 54,34, em 21/09/2025, ás 11:36, em AUTO POSTO, negada.";
        assert!(catalog().dispatch("Santander", body).is_none());
    }
}
