//! Bank message templates and the process-wide catalogs built from them.
//!
//! Order matters: more specific templates come first so a looser pattern
//! never claims text meant for a stricter one.

pub mod card_bank_a;
pub mod card_bank_b;
pub mod pix;

use gasto_core::{Expense, Income};
use std::sync::OnceLock;

use crate::catalog::Catalog;

/// Expense templates: card-bank-a, card-bank-b, pix-sent.
pub fn expense_catalog() -> &'static Catalog<Expense> {
    static CATALOG: OnceLock<Catalog<Expense>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::builder()
            .template(card_bank_a::template().expect("invalid card-bank-a template"))
            .template(card_bank_b::template().expect("invalid card-bank-b template"))
            .template(pix::sent_template().expect("invalid pix-sent template"))
            .build()
    })
}

/// Income templates: pix-received.
pub fn income_catalog() -> &'static Catalog<Income> {
    static CATALOG: OnceLock<Catalog<Income>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::builder()
            .template(pix::received_template().expect("invalid pix-received template"))
            .build()
    })
}
