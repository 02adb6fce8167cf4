//! Transaction record types produced by the extraction engine.
//!
//! Records are immutable once built: fields are private and only exposed
//! through accessors. Serialized field names follow the backend's JSON keys.

use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fractional digits every record amount carries.
pub const AMOUNT_SCALE: i64 = 2;

/// Closed set of category labels; each template carries exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    /// Card purchase in the Bank A (Bradesco-style, upper-case) format
    #[serde(rename = "Credit Card – Bank A")]
    CardBankA,
    /// Card purchase in the Bank B (Santander-style) format
    #[serde(rename = "Credit Card – Bank B")]
    CardBankB,
    #[serde(rename = "PIX")]
    Pix,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::CardBankA => "Credit Card – Bank A",
            Category::CardBankB => "Credit Card – Bank B",
            Category::Pix => "PIX",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Money leaving the account: a card purchase or an outgoing PIX
///
/// Serialize-only: every record is built through [`Expense::new`] so the
/// amount always carries two fractional digits.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Expense {
    #[serde(rename = "valor")]
    amount: BigDecimal,
    #[serde(rename = "dataHora")]
    timestamp: NaiveDateTime,
    #[serde(rename = "estabelecimento")]
    merchant: String,
    #[serde(rename = "categoria")]
    category: Category,
    #[serde(rename = "remetenteSms")]
    source_sender: String,
    #[serde(rename = "smsOriginal")]
    raw_text: String,
}

impl Expense {
    /// Assemble an expense from already-normalized fields.
    ///
    /// `amount` is rescaled to two fractional digits.
    pub fn new(
        amount: BigDecimal,
        timestamp: NaiveDateTime,
        merchant: impl Into<String>,
        category: Category,
        source_sender: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.with_scale(AMOUNT_SCALE),
            timestamp,
            merchant: merchant.into(),
            category,
            source_sender: source_sender.into(),
            raw_text: raw_text.into(),
        }
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    /// Local wall-clock time printed in the message; no timezone attached.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn merchant(&self) -> &str {
        &self.merchant
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn source_sender(&self) -> &str {
        &self.source_sender
    }

    /// Verbatim message body the record was extracted from
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Money entering the account (currently only received PIX notifications)
///
/// Serialize-only, like [`Expense`].
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Income {
    #[serde(rename = "valor")]
    amount: BigDecimal,
    #[serde(rename = "dataRecebimento")]
    timestamp: NaiveDateTime,
    #[serde(rename = "descricao")]
    description: String,
    #[serde(rename = "categoria")]
    category: Category,
    #[serde(rename = "notificacao")]
    notification_title: String,
    #[serde(rename = "fonte")]
    source_text: String,
}

impl Income {
    pub fn new(
        amount: BigDecimal,
        timestamp: NaiveDateTime,
        description: impl Into<String>,
        category: Category,
        notification_title: impl Into<String>,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.with_scale(AMOUNT_SCALE),
            timestamp,
            description: description.into(),
            category,
            notification_title: notification_title.into(),
            source_text: source_text.into(),
        }
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn notification_title(&self) -> &str {
        &self.notification_title
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }
}

/// Either kind of record; a message never produces both.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transaction {
    Expense(Expense),
    Income(Income),
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        matches!(self, Transaction::Expense(_))
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Transaction::Income(_))
    }

    pub fn amount(&self) -> &BigDecimal {
        match self {
            Transaction::Expense(e) => e.amount(),
            Transaction::Income(i) => i.amount(),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Transaction::Expense(e) => e.category(),
            Transaction::Income(i) => i.category(),
        }
    }
}

impl From<Expense> for Transaction {
    fn from(e: Expense) -> Self {
        Transaction::Expense(e)
    }
}

impl From<Income> for Transaction {
    fn from(i: Income) -> Self {
        Transaction::Income(i)
    }
}
