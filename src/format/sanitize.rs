//! Printable-text filtering.

use super::hex;

/// Suffix appended when characters were removed.
pub const BINARY_MARKER: &str = "(contains binary)";

/// Remove non-printable characters from `value`.
///
/// Printable means ASCII letters, digits, punctuation, and the whitespace
/// characters space, `\t`, `\n`, `\r`, `\x0b` and `\x0c`. Everything else,
/// including all non-ASCII characters, is dropped.
///
/// If anything was dropped, [`BINARY_MARKER`] is appended, separated by a
/// single space unless nothing printable remained. `None` is returned as is.
///
/// The output only contains printable characters, so sanitizing it again
/// returns it unchanged.
///
/// # Examples
///
/// ```
/// use snmp_utils::format::sanitize::strip_non_printable;
///
/// assert_eq!(strip_non_printable(Some("hello")).as_deref(), Some("hello"));
/// assert_eq!(
///     strip_non_printable(Some("he\x01llo")).as_deref(),
///     Some("hello (contains binary)")
/// );
/// assert_eq!(
///     strip_non_printable(Some("\u{1}\u{2}")).as_deref(),
///     Some("(contains binary)")
/// );
/// assert_eq!(strip_non_printable(None), None);
/// ```
pub fn strip_non_printable(value: Option<&str>) -> Option<String> {
    let value = value?;

    let mut printable: String = value.chars().filter(|&c| is_printable(c)).collect();

    if printable.len() != value.len() {
        tracing::trace!(target: "snmp_utils::format", { snmp.raw = %hex::Bytes(value.as_bytes()) }, "stripped non-printable characters");
        if !printable.is_empty() {
            printable.push(' ');
        }
        printable.push_str(BINARY_MARKER);
    }

    Some(printable)
}

/// True for characters kept by [`strip_non_printable`].
pub fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        strip_non_printable(Some(s)).unwrap()
    }

    #[test]
    fn printable_text_is_unchanged() {
        assert_eq!(strip("hello"), "hello");
        assert_eq!(strip("Linux router 5.15.0 #1 SMP x86_64"), "Linux router 5.15.0 #1 SMP x86_64");
        assert_eq!(strip("line1\r\nline2\tcol\x0b\x0c"), "line1\r\nline2\tcol\x0b\x0c");
        assert_eq!(strip("~!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./"), "~!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./");
    }

    #[test]
    fn control_characters_are_flagged() {
        assert_eq!(strip("he\x01llo"), "hello (contains binary)");
        assert_eq!(strip("\x00abc"), "abc (contains binary)");
        assert_eq!(strip("abc\x7f"), "abc (contains binary)");
        assert_eq!(strip("a\x1b[31mred"), "a[31mred (contains binary)");
    }

    #[test]
    fn non_ascii_is_dropped() {
        assert_eq!(strip("caf\u{e9}"), "caf (contains binary)");
        assert_eq!(strip("\u{fffd}x"), "x (contains binary)");
    }

    #[test]
    fn all_binary_has_no_leading_space() {
        assert_eq!(strip("\x00\x01\x02"), "(contains binary)");
        assert_eq!(strip("\u{e9}"), "(contains binary)");
    }

    #[test]
    fn kept_whitespace_still_gets_separator() {
        assert_eq!(strip(" \u{ae}"), "  (contains binary)");
        assert_eq!(strip("\t\x00"), "\t (contains binary)");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip(""), "");
    }

    #[test]
    fn none_stays_none() {
        assert_eq!(strip_non_printable(None), None);
    }

    #[test]
    fn sanitizing_twice_is_a_fixed_point() {
        for s in ["he\x01llo", "\x00\x01", "plain", "", "caf\u{e9}\x02"] {
            let once = strip(s);
            assert_eq!(strip(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn printable_set() {
        assert!(is_printable('a'));
        assert!(is_printable(' '));
        assert!(is_printable('~'));
        assert!(is_printable('\x0c'));
        assert!(!is_printable('\x00'));
        assert!(!is_printable('\x7f'));
        assert!(!is_printable('\u{a0}'));
    }
}
