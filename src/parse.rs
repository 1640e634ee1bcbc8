//! Phrase parser for quantified booty entries.
//!
//! Booty is typed as free text like `"50 scu of Quantanium"` or
//! `"Titanium 12"`. The parser splits the phrase into an amount and a
//! resource name; only the resource is sent to the search endpoint.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

/// A parsed "amount of resource" phrase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantityPhrase {
    pub amount: i64,
    pub resource: String,
}

/// Unit marker stripped (case-insensitively, once) from each token.
const UNIT_MARKER: &str = "scu";

/// Connector word skipped between amount and resource.
const CONNECTOR: &str = "of";

/// Tokenize a free-text phrase into an amount and a resource name.
///
/// Tokens are inspected lowercased with one `scu` marker removed; empty
/// tokens and the connector `of` are skipped. An integer-prefixed token sets
/// the amount, anything else sets the resource to the original token. When
/// several candidates appear, the last one wins in both slots. Returns
/// `None` unless an amount and a resource were both found; a zero amount
/// counts as absent.
pub fn parse_quantity_phrase(input: &str) -> Option<QuantityPhrase> {
    let mut amount: Option<i64> = None;
    let mut resource: Option<&str> = None;

    for token in input.split_whitespace() {
        let stripped = token
            .to_lowercase()
            .replacen(UNIT_MARKER, "", 1)
            .trim()
            .to_owned();

        if stripped.is_empty() || stripped == CONNECTOR {
            continue;
        }

        match parse_leading_int(&stripped) {
            Some(n) => amount = Some(n),
            None => resource = Some(token),
        }
    }

    match (amount, resource) {
        (Some(amount), Some(resource)) if amount != 0 => Some(QuantityPhrase {
            amount,
            resource: resource.to_owned(),
        }),
        _ => None,
    }
}

/// Integer prefix parse: optional sign followed by at least one ASCII digit;
/// trailing non-digits are ignored.
fn parse_leading_int(token: &str) -> Option<i64> {
    let (sign, digits) = match token.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, token.strip_prefix('+').unwrap_or(token)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
