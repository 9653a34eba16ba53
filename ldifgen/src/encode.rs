//! Value encoding and line folding -- the RFC2849 output primitives.
//!
//! Decides whether an attribute value can be written verbatim after a single
//! colon or must be base64-encoded after a double colon, and folds assembled
//! lines into continuation format.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::data::AttributeValue;
use crate::error::{Error, Result};

/// Maximum number of columns in one physical output line.
pub const MAX_LINE_LENGTH: usize = 76;

// ---------------------------------------------------------------------------
// String classification
// ---------------------------------------------------------------------------

/// Check if the first character of `value` may start a SAFE-STRING:
/// not NUL, LF, CR, space, colon or less-than, and within 7-bit ASCII.
/// An empty string has nothing to violate the rule.
pub fn is_safe_init_char(value: &str) -> bool {
    match value.chars().next() {
        None => true,
        Some(c) => c.is_ascii() && !matches!(c, '\0' | '\n' | '\r' | ' ' | ':' | '<'),
    }
}

/// Check if `value` can be printed verbatim as an LDIF SAFE-STRING:
/// safe initial character, no NUL/LF/CR anywhere, 7-bit ASCII throughout,
/// and no trailing space.
pub fn is_safe_string(value: &str) -> bool {
    is_safe_init_char(value)
        && value
            .chars()
            .all(|c| c.is_ascii() && !matches!(c, '\0' | '\n' | '\r'))
        && !value.ends_with(' ')
}

// ---------------------------------------------------------------------------
// Value-spec assembly
// ---------------------------------------------------------------------------

/// Build the unfolded `description: value` or `description:: base64` line
/// for one attribute value.
///
/// Fails if `attribute_description` is empty or whitespace-only.
pub fn value_spec(attribute_description: &str, value: &AttributeValue) -> Result<String> {
    if attribute_description.trim().is_empty() {
        return Err(Error::EmptyAttributeType);
    }
    Ok(value_spec_checked(attribute_description, value))
}

/// Same as [`value_spec`], for callers that validated the description at
/// construction time.
pub(crate) fn value_spec_checked(attribute_description: &str, value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(text) if is_safe_string(text) => {
            format!("{}: {}", attribute_description, text)
        }
        AttributeValue::Text(text) => {
            format!("{}:: {}", attribute_description, BASE64.encode(text.as_bytes()))
        }
        AttributeValue::Bytes(bytes) => {
            format!("{}:: {}", attribute_description, BASE64.encode(bytes))
        }
    }
}

// ---------------------------------------------------------------------------
// Line folding
// ---------------------------------------------------------------------------

/// Fold one logical line into RFC2849 continuation format.
///
/// The first physical line carries up to [`MAX_LINE_LENGTH`] columns, every
/// continuation line one space plus the next chunk. Splitting is purely by
/// column count (clamped to a char boundary so the result stays valid
/// UTF-8); unfolding -- stripping one leading space per continuation line
/// and concatenating -- reproduces the input byte-for-byte.
pub fn wrap(line: &str) -> String {
    if line.len() <= MAX_LINE_LENGTH {
        return line.to_string();
    }

    let mut out = String::with_capacity(line.len() + 2 * (line.len() / MAX_LINE_LENGTH + 1));
    let mut rest = line;
    let mut limit = MAX_LINE_LENGTH;
    loop {
        if rest.len() <= limit {
            out.push_str(rest);
            return out;
        }
        let cut = char_floor(rest, limit);
        let (head, tail) = rest.split_at(cut);
        out.push_str(head);
        out.push_str("\n ");
        rest = tail;
        // continuation lines spend one column on the space prefix
        limit = MAX_LINE_LENGTH - 1;
    }
}

/// Largest index <= `at` that lands on a char boundary of `s`.
fn char_floor(s: &str, at: usize) -> usize {
    let mut i = at;
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;

    use super::*;

    // Helper: undo wrap() by stripping one leading space per continuation.
    fn unfold(folded: &str) -> String {
        let mut lines = folded.split('\n');
        let mut out = String::from(lines.next().unwrap_or(""));
        for line in lines {
            out.push_str(line.strip_prefix(' ').unwrap());
        }
        out
    }

    // ── Group 1: is_safe_init_char ──────────────────────────────

    #[test]
    fn safe_init_char_empty() {
        assert!(is_safe_init_char(""));
    }

    #[test]
    fn safe_init_char_ascii() {
        assert!(is_safe_init_char("a"));
    }

    #[test]
    fn safe_init_char_rejects_space() {
        assert!(!is_safe_init_char(" "));
    }

    #[test]
    fn safe_init_char_rejects_colon_and_less_than() {
        assert!(!is_safe_init_char(":value"));
        assert!(!is_safe_init_char("<value"));
    }

    #[test]
    fn safe_init_char_rejects_non_ascii() {
        assert!(!is_safe_init_char("Émilie"));
    }

    // ── Group 2: is_safe_string ─────────────────────────────────

    #[test]
    fn safe_string_empty() {
        assert!(is_safe_string(""));
    }

    #[test]
    fn safe_string_ascii() {
        assert!(is_safe_string("ascii chars"));
    }

    #[test]
    fn safe_string_rejects_trailing_space() {
        assert!(!is_safe_string("EndsWithSpace "));
    }

    #[test]
    fn safe_string_rejects_non_ascii() {
        assert!(!is_safe_string("Châtelet"));
    }

    #[test]
    fn safe_string_rejects_control_bytes() {
        assert!(!is_safe_string("line1\nline2"));
        assert!(!is_safe_string("line1\rline2"));
        assert!(!is_safe_string("nul\0byte"));
    }

    // ── Group 3: value_spec ─────────────────────────────────────

    #[test]
    fn value_spec_safe_text_verbatim() {
        let line = value_spec("sn", &AttributeValue::Text("Wirth".to_string())).unwrap();
        assert_eq!(line, "sn: Wirth");
    }

    #[test]
    fn value_spec_bytes_always_base64() {
        let value = AttributeValue::Bytes(b"value".to_vec());
        let line = value_spec("sn", &value).unwrap();
        let encoded = line.strip_prefix("sn:: ").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), b"value");
    }

    #[test]
    fn value_spec_unsafe_init_char_base64() {
        let value = AttributeValue::Text("Émilie".to_string());
        let line = value_spec("givenName", &value).unwrap();
        let encoded = line.strip_prefix("givenName:: ").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), "Émilie".as_bytes());
    }

    #[test]
    fn value_spec_unsafe_string_base64() {
        let value = AttributeValue::Text("Châtelet".to_string());
        let line = value_spec("sn", &value).unwrap();
        let encoded = line.strip_prefix("sn:: ").unwrap();
        assert_eq!(BASE64.decode(encoded).unwrap(), "Châtelet".as_bytes());
    }

    #[test]
    fn value_spec_empty_description_fails() {
        let value = AttributeValue::Text("value".to_string());
        assert_eq!(value_spec("", &value), Err(Error::EmptyAttributeType));
        assert_eq!(value_spec(" ", &value), Err(Error::EmptyAttributeType));
    }

    // ── Group 4: base64 engine round-trip ───────────────────────

    #[test]
    fn base64_round_trip() {
        for data in [&b""[..], b"a", b"ab", b"abc", b"Random binary data"] {
            assert_eq!(BASE64.decode(BASE64.encode(data)).unwrap(), data);
        }
        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(BASE64.decode(BASE64.encode(&all)).unwrap(), all);
    }

    // ── Group 5: wrap ───────────────────────────────────────────

    #[test]
    fn wrap_short_line_unmodified() {
        assert_eq!(wrap("sn: Wirth"), "sn: Wirth");
        assert_eq!(wrap(""), "");
    }

    #[test]
    fn wrap_at_exact_limit_unmodified() {
        let line = "a".repeat(MAX_LINE_LENGTH);
        assert_eq!(wrap(&line), line);
    }

    #[test]
    fn wrap_one_past_limit_folds() {
        let line = "a".repeat(MAX_LINE_LENGTH + 1);
        let folded = wrap(&line);
        let lines: Vec<&str> = folded.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), MAX_LINE_LENGTH);
        assert_eq!(lines[1], " a");
    }

    #[test]
    fn wrap_respects_column_limit() {
        let line = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Phasellus convallis \
                    et erat at mollis. Nullam in risus laoreet, pharetra leo a, volutpat massa. \
                    Cras quis sodales velit. In sit amet augue gravida, sagittis dui a, placerat \
                    nunc. Fusce non nisi vel orci sagittis elementum. Praesent elit nulla, \
                    elementum sed sem a, semper dictum arcu. Duis luctus arcu id arcu scelerisque \
                    pharetra. Nunc a elementum felis, quis auctor diam.";
        for physical in wrap(line).split('\n') {
            assert!(physical.len() <= MAX_LINE_LENGTH);
        }
    }

    #[test]
    fn wrap_round_trip_all_lengths() {
        for n in 0..400 {
            let bytes: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();
            let line = format!("wrap:: {}", BASE64.encode(&bytes));
            let folded = wrap(&line);
            for physical in folded.split('\n') {
                assert!(physical.len() <= MAX_LINE_LENGTH);
            }
            assert_eq!(unfold(&folded), line);
        }
    }

    #[test]
    fn wrap_multibyte_round_trip() {
        // only a DN line can carry non-ASCII into wrap()
        let line = format!("dn: cn={},dc=example,dc=com", "é".repeat(80));
        let folded = wrap(&line);
        for physical in folded.split('\n') {
            assert!(physical.len() <= MAX_LINE_LENGTH);
        }
        assert_eq!(unfold(&folded), line);
    }
}
