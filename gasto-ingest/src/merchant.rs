//! Merchant cleanup for the card-bank-a template.
//!
//! That template appends a free-text point-of-sale city/state tag to the
//! merchant with no delimiter, e.g. "FLEXPAG*ENELSP SAO PAULO.". Without a
//! merchant database the tag is removed by matching a fixed suffix table.
//! Merchants whose real name ends in a listed token get truncated.

/// City/state tags stripped from the end of a merchant, in match priority order.
///
/// Only the first entry that matches is removed. Entries are upper-case ASCII;
/// matching is case-insensitive.
pub const LOCALITY_SUFFIXES: &[&str] = &[
    "SAO PAULO",
    "SP",
    "CAMPINAS",
    "RJ",
    "RIO DE JANEIRO",
    "MG",
    "MINAS GERAIS",
    "BH",
    "BELO HORIZONTE",
    "RS",
    "RIO GRANDE DO SUL",
    "CURITIBA",
    "PR",
    "OSASCO",
    "CARAPICUIBA",
    "SANTANA DE P",
    "BARUERI",
];

/// Trim, drop one trailing period, then strip the first matching locality suffix.
/// The result may be empty.
pub fn clean_merchant(raw: &str) -> String {
    let s = raw.trim();
    let s = s.strip_suffix('.').unwrap_or(s);
    strip_locality_suffix(s).to_string()
}

/// Remove `" " + suffix` for the first suffix in [`LOCALITY_SUFFIXES`] that ends `s`.
/// Single pass: whatever remains is not scanned again.
pub fn strip_locality_suffix(s: &str) -> &str {
    // ASCII upper-casing keeps byte offsets aligned with `s`
    let upper = s.to_ascii_uppercase();
    for suffix in LOCALITY_SUFFIXES {
        let Some(head) = upper.strip_suffix(*suffix) else {
            continue;
        };
        if head.ends_with(' ') {
            return s[..head.len() - 1].trim();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_city_and_trailing_period() {
        assert_eq!(clean_merchant("FLEXPAG*ENELSP SAO PAULO."), "FLEXPAG*ENELSP");
        assert_eq!(clean_merchant("  PADARIA REAL CURITIBA  "), "PADARIA REAL");
        assert_eq!(clean_merchant("DROGARIA SP."), "DROGARIA");
    }

    #[test]
    fn test_unlisted_text_only_trimmed() {
        assert_eq!(clean_merchant("  AUTO POSTO  "), "AUTO POSTO");
        assert_eq!(clean_merchant("IFOOD *RESTAURANTE"), "IFOOD *RESTAURANTE");
    }

    #[test]
    fn test_suffix_needs_preceding_space() {
        // "ENELSP" ends in SP but is one word
        assert_eq!(clean_merchant("ENELSP"), "ENELSP");
        assert_eq!(clean_merchant("SP"), "SP");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(clean_merchant("Loja Centro Sao Paulo"), "Loja Centro");
        assert_eq!(clean_merchant("mercado barueri."), "mercado");
    }

    #[test]
    fn test_only_first_match_is_stripped() {
        // "SP" precedes "BARUERI" in the table, so only the trailing SP goes
        assert_eq!(clean_merchant("LOJA BARUERI SP"), "LOJA BARUERI");
        // the MG exposed by removing the city is not scanned again
        assert_eq!(clean_merchant("CAFE MG BELO HORIZONTE"), "CAFE MG");
    }

    #[test]
    fn test_merchant_can_become_empty() {
        assert_eq!(strip_locality_suffix(" RJ"), "");
        assert_eq!(clean_merchant("X RJ"), "X");
        // after trimming nothing precedes the tag, so it stays
        assert_eq!(clean_merchant(" SAO PAULO."), "SAO PAULO");
    }

    #[test]
    fn test_space_before_period_is_kept() {
        // only the period goes; the trailing space hides the tag from the suffix scan
        assert_eq!(clean_merchant("LOJA SP ."), "LOJA SP ");
    }

    #[test]
    fn test_non_ascii_merchant() {
        assert_eq!(clean_merchant("CAFÉ SÃO JOSÉ SP"), "CAFÉ SÃO JOSÉ");
    }
}
