//! Ordered template catalog and first-match dispatcher.
//!
//! A template pairs a regular-expression predicate with an extraction routine
//! and a fixed category. Templates are tried in the order they were registered;
//! the first predicate that matches owns the message. If its extraction then
//! fails, the message is reported as unmatched; later templates are never tried.
//! Register the most specific patterns first.

use gasto_core::Category;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::error::{FieldError, TemplateError};

/// Message metadata handed to an extraction routine alongside the captures.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
    /// SMS sender or notification title
    pub sender: &'a str,
    /// Verbatim message body
    pub body: &'a str,
    /// Category of the template that matched
    pub category: Category,
}

pub type Extractor<R> = fn(&Captures<'_>, &Envelope<'_>) -> Result<R, FieldError>;

/// One recognized bank message format.
pub struct Template<R> {
    name: &'static str,
    pattern: Regex,
    category: Category,
    extract: Extractor<R>,
}

impl<R> Template<R> {
    /// Compile a template. `groups` lists every named capture the extractor reads;
    /// the pattern must declare all of them.
    pub fn new(
        name: &'static str,
        pattern: &str,
        category: Category,
        groups: &[&'static str],
        extract: Extractor<R>,
    ) -> Result<Self, TemplateError> {
        let pattern = Regex::new(pattern).map_err(|source| TemplateError::Pattern {
            template: name,
            source,
        })?;

        for &group in groups {
            if !pattern.capture_names().flatten().any(|n| n == group) {
                return Err(TemplateError::MissingGroup {
                    template: name,
                    group,
                });
            }
        }

        Ok(Self {
            name,
            pattern,
            category,
            extract,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_match(&self, body: &str) -> bool {
        self.pattern.is_match(body)
    }

    fn extract(&self, caps: &Captures<'_>, sender: &str, body: &str) -> Result<R, FieldError> {
        let envelope = Envelope {
            sender,
            body,
            category: self.category,
        };
        (self.extract)(caps, &envelope)
    }
}

impl<R> std::fmt::Debug for Template<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("category", &self.category)
            .finish()
    }
}

/// Read-only, ordered list of templates producing records of type `R`.
#[derive(Debug)]
pub struct Catalog<R> {
    templates: Vec<Template<R>>,
}

impl<R> Catalog<R> {
    pub fn builder() -> CatalogBuilder<R> {
        CatalogBuilder {
            templates: Vec::new(),
        }
    }

    pub fn templates(&self) -> &[Template<R>] {
        &self.templates
    }

    /// The template that would own `body`, if any
    pub fn matching_template(&self, body: &str) -> Option<&Template<R>> {
        self.templates.iter().find(|t| t.is_match(body))
    }

    /// Run the first matching template's extractor.
    ///
    /// `None` covers both "no template matched" (logged at debug) and "a template
    /// matched but a field failed to normalize" (logged at warn).
    pub fn dispatch(&self, sender: &str, body: &str) -> Option<R> {
        let Some((template, caps)) = self
            .templates
            .iter()
            .find_map(|t| t.pattern.captures(body).map(|caps| (t, caps)))
        else {
            debug!(sender, "no template matched");
            return None;
        };

        match template.extract(&caps, sender, body) {
            Ok(record) => {
                debug!(template = template.name, "extracted record");
                Some(record)
            }
            Err(error) => {
                warn!(
                    template = template.name,
                    %error,
                    body,
                    "template matched but a field failed to normalize"
                );
                None
            }
        }
    }
}

pub struct CatalogBuilder<R> {
    templates: Vec<Template<R>>,
}

impl<R> CatalogBuilder<R> {
    /// Append a template; it is tried after every template added before it.
    pub fn template(mut self, template: Template<R>) -> Self {
        self.templates.push(template);
        self
    }

    pub fn build(self) -> Catalog<R> {
        Catalog {
            templates: self.templates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::parse_amount;
    use bigdecimal::BigDecimal;

    fn amount_only(caps: &Captures<'_>, _env: &Envelope<'_>) -> Result<BigDecimal, FieldError> {
        parse_amount(&caps["amount"])
    }

    fn catalog() -> Catalog<BigDecimal> {
        Catalog::builder()
            .template(
                Template::new(
                    "strict",
                    r"TOTAL R\$ (?P<amount>[\d.,]+)",
                    Category::CardBankA,
                    &["amount"],
                    amount_only,
                )
                .unwrap(),
            )
            .template(
                Template::new(
                    "loose",
                    r"R\$ (?P<amount>[\d.,]+)",
                    Category::CardBankB,
                    &["amount"],
                    amount_only,
                )
                .unwrap(),
            )
            .build()
    }

    #[test]
    fn test_first_match_wins() {
        let c = catalog();
        assert_eq!(c.matching_template("TOTAL R$ 10,00").unwrap().name(), "strict");
        assert_eq!(c.matching_template("pago R$ 10,00").unwrap().name(), "loose");
        assert_eq!(c.dispatch("s", "TOTAL R$ 10,00").unwrap().to_string(), "10.00");
    }

    #[test]
    fn test_failed_extraction_does_not_fall_through() {
        let c = catalog();
        // "loose" would also match, but "strict" owns the message and its amount is bad
        let body = "TOTAL R$ 1,2,3";
        assert_eq!(c.matching_template(body).unwrap().name(), "strict");
        assert!(c.dispatch("s", body).is_none());
    }

    #[test]
    fn test_no_match() {
        assert!(catalog().dispatch("s", "Sua fatura vence em 5 dias").is_none());
        assert!(catalog().matching_template("").is_none());
    }

    #[test]
    fn test_envelope_carries_template_category() {
        fn category_of(_: &Captures<'_>, env: &Envelope<'_>) -> Result<Category, FieldError> {
            Ok(env.category)
        }
        let c = Catalog::builder()
            .template(Template::new("x", "x", Category::Pix, &[], category_of).unwrap())
            .build();
        assert_eq!(c.dispatch("s", "x"), Some(Category::Pix));
    }

    #[test]
    fn test_undeclared_group_is_rejected() {
        let err = Template::new("bad", r"R\$ (\d+)", Category::Pix, &["amount"], amount_only)
            .unwrap_err();
        assert!(matches!(
            err,
            TemplateError::MissingGroup {
                template: "bad",
                group: "amount"
            }
        ));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Template::new("bad", r"R\$ (", Category::Pix, &[], amount_only).unwrap_err();
        assert!(matches!(err, TemplateError::Pattern { template: "bad", .. }));
    }
}
