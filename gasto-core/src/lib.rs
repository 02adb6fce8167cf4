//! gasto-core: message and transaction record types for bank SMS / notification ingestion

pub mod message;
pub mod record;

pub use message::{Channel, DEFAULT_PACKAGE_FILTER, IncomingMessage, Notification};
pub use record::{AMOUNT_SCALE, Category, Expense, Income, Transaction};
