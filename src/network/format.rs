//! Response formatting for line-oriented display

use std::iter::Peekable;
use std::str::Chars;

use serde::de::IgnoredAny;

const INDENT: &str = "  ";

/// Pretty-print a JSON body with two-space indentation; anything that does
/// not parse as JSON is returned unchanged.
///
/// Only the whitespace between tokens is rewritten. Numbers and strings are
/// shown exactly as the server sent them, escapes included.
pub fn format_body(body: &str) -> String {
    if serde_json::from_str::<IgnoredAny>(body).is_err() {
        return body.to_string();
    }
    reindent(body)
}

/// Format a body and split it into display lines
pub fn format_lines(body: &str) -> Vec<String> {
    format_body(body).split('\n').map(String::from).collect()
}

/// Re-indent a document already known to be valid JSON
fn reindent(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut depth = 0usize;
    let mut chars = json.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => copy_string(&mut chars, &mut out),
            '{' | '[' => {
                out.push(c);
                skip_whitespace(&mut chars);
                match chars.peek() {
                    Some('}') | Some(']') => {
                        if let Some(close) = chars.next() {
                            out.push(close);
                        }
                    }
                    _ => {
                        depth += 1;
                        newline(&mut out, depth);
                    }
                }
            }
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                newline(&mut out, depth);
                out.push(c);
            }
            ',' => {
                out.push(c);
                newline(&mut out, depth);
            }
            ':' => out.push_str(": "),
            ' ' | '\t' | '\n' | '\r' => {}
            _ => out.push(c),
        }
    }

    out
}

/// Copy a string literal verbatim; the opening quote is already consumed
fn copy_string(chars: &mut Peekable<Chars>, out: &mut String) {
    out.push('"');
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => break,
            _ => {}
        }
    }
}

fn skip_whitespace(chars: &mut Peekable<Chars>) {
    while matches!(chars.peek(), Some(' ' | '\t' | '\n' | '\r')) {
        chars.next();
    }
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_prints_json_preserving_key_order() {
        let out = format_body(r#"{"b":1,"a":[true,null]}"#);
        assert_eq!(out, "{\n  \"b\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}");
    }

    #[test]
    fn test_numbers_are_shown_as_received() {
        let out = format_body(r#"{"id":12345678901234567890123,"price":1.50,"e":1e3,"neg":-0.0}"#);
        assert_eq!(
            out,
            "{\n  \"id\": 12345678901234567890123,\n  \"price\": 1.50,\n  \"e\": 1e3,\n  \"neg\": -0.0\n}"
        );
    }

    #[test]
    fn test_string_escapes_are_kept() {
        let body = r#"{"name":"caf\u00e9","quote":"say \"hi\", {ok: [1]}","path":"a\\b"}"#;
        let out = format_body(body);
        assert!(out.contains(r#""name": "caf\u00e9""#));
        assert!(out.contains(r#""quote": "say \"hi\", {ok: [1]}""#));
        assert!(out.contains(r#""path": "a\\b""#));
    }

    #[test]
    fn test_only_whitespace_changes() {
        let body = "{ \"list\" : [ 1.0 , 2E+2 ,\n\"x\" ] , \"nested\":{\"deep\":[{}]} }";
        let out = format_body(body);
        let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(squash(&out), squash(body));
        assert!(out.contains("\"nested\": {\n    \"deep\": [\n      {}\n    ]\n  }"));
    }

    #[test]
    fn test_empty_containers_stay_inline() {
        assert_eq!(format_body("{ }"), "{}");
        assert_eq!(format_body(r#"{"a":[ ]}"#), "{\n  \"a\": []\n}");
        assert_eq!(format_body("42"), "42");
    }

    #[test]
    fn test_passthrough_is_idempotent() {
        let body = "<html>oops</html>\n";
        let once = format_body(body);
        assert_eq!(once, body);
        assert_eq!(format_body(&once), once);
    }

    #[test]
    fn test_json_formatting_is_idempotent() {
        let once = format_body(r#"{"id": 7, "big": 18446744073709551616, "tags": ["x", {}]}"#);
        assert_eq!(format_body(&once), once);
    }

    #[test]
    fn test_format_lines_splits() {
        assert_eq!(format_lines(r#"{"a":1}"#), vec!["{", "  \"a\": 1", "}"]);
        assert_eq!(format_lines(""), vec![""]);
        assert_eq!(format_lines("a\nb"), vec!["a", "b"]);
    }
}
