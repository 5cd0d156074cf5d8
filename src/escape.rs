//! Literal and identifier escaping for every language a locator passes through.
//!
//! Escaping is layered: a value is first made safe for the selector language
//! (CSS or XPath), and the finished selector is then made safe for the host
//! string literal (JavaScript or Python) it is pasted into.

/// Escape a value for use as a CSS identifier (`#id`, `.class`), following
/// the CSSOM `CSS.escape()` algorithm.
pub fn css_ident(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let mut out = String::with_capacity(value.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_hex_escape(&mut out, c),
            '0'..='9' if i == 0 => push_hex_escape(&mut out, c),
            '0'..='9' if i == 1 && chars[0] == '-' => push_hex_escape(&mut out, c),
            '-' if i == 0 && chars.len() == 1 => out.push_str("\\-"),
            c if c >= '\u{80}' || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                out.push(c)
            }
            c => {
                out.push('\\');
                out.push(c);
            }
        }
    }

    out
}

/// Escape a value for a CSS quoted string delimited by `quote`.
pub fn css_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\\' => out.push_str("\\\\"),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_hex_escape(&mut out, c),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

/// Build a CSS attribute selector `[name="value"]`.
pub fn css_attribute(name: &str, value: &str, quote: char) -> String {
    format!("[{name}={quote}{}{quote}]", css_string(value, quote))
}

/// Quote a value as an XPath 1.0 string literal.
///
/// XPath has no escape sequences, so values holding both quote kinds are
/// assembled with `concat()`.
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }

    let parts: Vec<String> = value
        .split('\'')
        .map(|part| format!("'{part}'"))
        .collect();
    format!("concat({})", parts.join(", \"'\", "))
}

/// Escape a raw value (text, role, tag) for a single-quoted JavaScript string.
pub fn js_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Escape a finished selector for a single-quoted JavaScript string.
///
/// Double quotes are left alone: inside a selector they are structural
/// (`[data-cy="x"]`) and any value-level quote was already escaped by
/// [`css_string`].
pub fn js_selector(selector: &str) -> String {
    selector
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Escape a value for a double-quoted Python string.
pub fn py_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn push_hex_escape(out: &mut String, c: char) {
    out.push_str(&format!("\\{:x} ", c as u32));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_ident_plain_passes_through() {
        assert_eq!(css_ident("submit-btn"), "submit-btn");
        assert_eq!(css_ident("_private"), "_private");
        assert_eq!(css_ident("héllo"), "héllo");
    }

    #[test]
    fn css_ident_escapes_punctuation() {
        assert_eq!(css_ident("a.b"), "a\\.b");
        assert_eq!(css_ident("x:y"), "x\\:y");
        assert_eq!(css_ident("w-1/2"), "w-1\\/2");
        assert_eq!(css_ident("a\"b"), "a\\\"b");
    }

    #[test]
    fn css_ident_leading_digit() {
        assert_eq!(css_ident("1st"), "\\31 st");
        assert_eq!(css_ident("-2x"), "-\\32 x");
        assert_eq!(css_ident("-"), "\\-");
        assert_eq!(css_ident("--x"), "--x");
    }

    #[test]
    fn css_ident_control_and_nul() {
        assert_eq!(css_ident("a\nb"), "a\\a b");
        assert_eq!(css_ident("a\0b"), "a\u{FFFD}b");
    }

    #[test]
    fn css_string_escapes_only_chosen_quote() {
        assert_eq!(css_string(r#"say "hi""#, '"'), r#"say \"hi\""#);
        assert_eq!(css_string("it's", '"'), "it's");
        assert_eq!(css_string("it's", '\''), "it\\'s");
        assert_eq!(css_string(r"C:\tmp", '"'), r"C:\\tmp");
        assert_eq!(css_string("line\nbreak", '"'), "line\\a break");
    }

    #[test]
    fn css_attribute_formats() {
        assert_eq!(css_attribute("data-cy", "login", '"'), r#"[data-cy="login"]"#);
        assert_eq!(css_attribute("name", "q", '\''), "[name='q']");
    }

    #[test]
    fn xpath_literal_quote_choice() {
        assert_eq!(xpath_literal("main"), "'main'");
        assert_eq!(xpath_literal("it's"), "\"it's\"");
        assert_eq!(
            xpath_literal(r#"it's "x""#),
            r#"concat('it', "'", 's "x"')"#
        );
    }

    #[test]
    fn js_string_escapes_quotes_and_backslash() {
        assert_eq!(js_string(r#"a'b"c\d"#), r#"a\'b\"c\\d"#);
        assert_eq!(js_string("two\nlines"), "two\\nlines");
    }

    #[test]
    fn js_selector_keeps_structural_double_quotes() {
        assert_eq!(js_selector(r#"[data-cy="x"]"#), r#"[data-cy="x"]"#);
        assert_eq!(js_selector(r#"[data-cy="a\"b"]"#), r#"[data-cy="a\\"b"]"#);
        assert_eq!(js_selector("[title='x']"), "[title=\\'x\\']");
    }

    #[test]
    fn py_string_escapes() {
        assert_eq!(py_string(r#"[data-cy='a"b']"#), r#"[data-cy='a\"b']"#);
        assert_eq!(py_string(r"a\b"), r"a\\b");
    }
}
