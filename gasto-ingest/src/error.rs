use thiserror::Error;

/// A captured field that could not be normalized.
///
/// Never escapes the public `classify*` functions: the dispatcher logs it and
/// reports no-match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("empty amount")]
    EmptyAmount,
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("amount '{0}' has more than two fractional digits")]
    TooManyFractionDigits(String),
    #[error("invalid date '{0}' (expected dd/mm/yyyy)")]
    InvalidDate(String),
    #[error("invalid time '{0}' (expected hh:mm)")]
    InvalidTime(String),
}

/// A template that cannot be built. Static templates failing this is a bug.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template {template}: {source}")]
    Pattern {
        template: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("template {template}: pattern does not declare capture group '{group}'")]
    MissingGroup {
        template: &'static str,
        group: &'static str,
    },
}
