//! Name transformation helpers used to generate idiomatic Rust identifiers
//! from the message table labels (`NAV`, `POSLLH`, `TMODE2`...).
//==================================================================================NAME_HELPERS
/// Convert an upper-case protocol label into `PascalCase`.
///
/// Digits end a word (`NAV5` → `Nav5`, `HW2` → `Hw2`), separators are dropped,
/// and a leading digit is prefixed with `Val` so the result stays a valid identifier.
pub(crate) fn to_pascal_case(name: &str) -> String {
    let mut buffer = String::new();
    let mut capitalize_next = true;

    for c in name.to_lowercase().chars() {
        match c {
            ' ' | '_' | '-' | '.' | '/' | '(' | ')' => {
                capitalize_next = true;
            }
            _ if buffer.is_empty() && c.is_ascii_digit() => {
                buffer.push_str("Val");
                buffer.push(c);
                capitalize_next = true;
            }
            _ if c.is_ascii_digit() => {
                buffer.push(c);
                capitalize_next = true;
            }
            _ if capitalize_next && c.is_ascii_alphanumeric() => {
                buffer.push(c.to_ascii_uppercase());
                capitalize_next = false;
            }
            _ if c.is_ascii_alphanumeric() => {
                buffer.push(c);
            }
            _ => {}
        }
    }

    buffer
}

/// Convert a label into `SCREAMING_SNAKE_CASE`, used for generated statics.
pub(crate) fn to_screaming_snake_case(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Escape a label so it can be embedded inside a Rust string literal.
pub(crate) fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
