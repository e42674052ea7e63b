use crate::interpreter::parser::core::{ParseResult, Parser};

impl Parser {
    /// Parses a comma-separated list of items up to and including `closing`.
    ///
    /// Shared by parameter lists and call arguments. An immediately
    /// encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Errors
    /// Propagates item errors, and reports a missing `,` or `closing`.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: &str)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.accept(closing) {
            return Ok(items);
        }

        loop {
            items.push(parse_item(self)?);
            if self.accept(closing) {
                return Ok(items);
            }
            self.expect(",", &format!("',' or '{closing}'"))?;
        }
    }
}

/// Strips the delimiting quotes from a character or string literal and decodes
/// its escape sequences in a single left-to-right pass.
///
/// `\b`, `\n`, `\r` and `\t` decode to control characters; any other escaped
/// character decodes to itself.
///
/// # Example
/// ```
/// use ember::interpreter::parser::utils::unescape;
///
/// assert_eq!(unescape("\"a\\tb\""), "a\tb");
/// assert_eq!(unescape("'\\''"), "'");
/// assert_eq!(unescape("\"\\\\n\""), "\\n");
/// ```
#[must_use]
pub fn unescape(literal: &str) -> String {
    let mut chars = literal.chars();
    chars.next();
    chars.next_back();

    let mut text = String::with_capacity(literal.len());
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => text.push('\u{8}'),
            Some('n') => text.push('\n'),
            Some('r') => text.push('\r'),
            Some('t') => text.push('\t'),
            Some(other) => text.push(other),
            None => text.push('\\'),
        }
    }
    text
}
