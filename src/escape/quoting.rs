//! Quote character escaping inside quoted identifiers.

/// Double every occurrence of `quote_char`.
///
/// Applied once per call: an already doubled pair comes out quadrupled.
pub(crate) fn double_quote_chars(identifier: &str, quote_char: char) -> String {
    let mut escaped = String::with_capacity(identifier.len() + 2);
    for c in identifier.chars() {
        escaped.push(c);
        if c == quote_char {
            escaped.push(c);
        }
    }
    escaped
}

/// Check that every run of consecutive `quote_char`s has even length.
pub(crate) fn quote_runs_are_even(identifier: &str, quote_char: char) -> bool {
    let mut run = 0usize;
    for c in identifier.chars() {
        if c == quote_char {
            run += 1;
            continue;
        }
        if run % 2 != 0 {
            return false;
        }
        run = 0;
    }
    run % 2 == 0
}
