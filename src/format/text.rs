//! Conversion of loosely typed values to text.

use std::fmt;

use super::hex;

/// A value to be rendered as text.
///
/// Absence is expressed as `Option::None` at the call site, so every
/// variant here has something to show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayValue<'a> {
    /// Already text, shown unchanged.
    Text(&'a str),
    /// Signed integer, shown in decimal.
    Signed(i64),
    /// Unsigned integer (e.g. Counter64), shown in decimal.
    Unsigned(u64),
    /// Floating-point number.
    Float(f64),
    /// Raw bytes, decoded as UTF-8 with invalid sequences replaced.
    Bytes(&'a [u8]),
}

/// Floats use the shortest representation that round-trips, keeping a
/// trailing `.0` on integral values (`42.0`, `3.5`, `1e20`). NaN is `nan`.
impl fmt::Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(s) => f.write_str(s),
            DisplayValue::Signed(v) => write!(f, "{}", v),
            DisplayValue::Unsigned(v) => write!(f, "{}", v),
            DisplayValue::Float(v) if v.is_nan() => f.write_str("nan"),
            DisplayValue::Float(v) => write!(f, "{:?}", v),
            DisplayValue::Bytes(data) => f.write_str(&String::from_utf8_lossy(data)),
        }
    }
}

/// Convert an optional value to text.
///
/// `None` stays `None`; every other value is rendered through its
/// [`Display`](fmt::Display) impl.
///
/// # Examples
///
/// ```
/// use snmp_utils::format::text::{DisplayValue, to_display_text};
///
/// assert_eq!(to_display_text(None), None);
/// assert_eq!(to_display_text(Some(DisplayValue::from(42i64))).as_deref(), Some("42"));
/// assert_eq!(to_display_text(Some(DisplayValue::from(3.5))).as_deref(), Some("3.5"));
/// assert_eq!(to_display_text(Some(DisplayValue::from("up"))).as_deref(), Some("up"));
/// ```
pub fn to_display_text(value: Option<DisplayValue<'_>>) -> Option<String> {
    let value = value?;

    if let DisplayValue::Bytes(data) = value
        && std::str::from_utf8(data).is_err()
    {
        tracing::trace!(target: "snmp_utils::format", { snmp.raw = %hex::Bytes(data) }, "replacing invalid UTF-8 in byte value");
    }

    Some(value.to_string())
}

impl<'a> From<&'a str> for DisplayValue<'a> {
    fn from(s: &'a str) -> Self {
        DisplayValue::Text(s)
    }
}

impl<'a> From<&'a String> for DisplayValue<'a> {
    fn from(s: &'a String) -> Self {
        DisplayValue::Text(s)
    }
}

impl From<i32> for DisplayValue<'_> {
    fn from(v: i32) -> Self {
        DisplayValue::Signed(v.into())
    }
}

impl From<i64> for DisplayValue<'_> {
    fn from(v: i64) -> Self {
        DisplayValue::Signed(v)
    }
}

impl From<u32> for DisplayValue<'_> {
    fn from(v: u32) -> Self {
        DisplayValue::Unsigned(v.into())
    }
}

impl From<u64> for DisplayValue<'_> {
    fn from(v: u64) -> Self {
        DisplayValue::Unsigned(v)
    }
}

impl From<f64> for DisplayValue<'_> {
    fn from(v: f64) -> Self {
        DisplayValue::Float(v)
    }
}

impl<'a> From<&'a [u8]> for DisplayValue<'a> {
    fn from(data: &'a [u8]) -> Self {
        DisplayValue::Bytes(data)
    }
}

impl<'a> From<&'a bytes::Bytes> for DisplayValue<'a> {
    fn from(data: &'a bytes::Bytes) -> Self {
        DisplayValue::Bytes(data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: DisplayValue<'_>) -> String {
        to_display_text(Some(value)).unwrap()
    }

    #[test]
    fn none_stays_none() {
        assert_eq!(to_display_text(None), None);
    }

    #[test]
    fn text_is_unchanged() {
        assert_eq!(text("".into()), "");
        assert_eq!(text("he\x01llo".into()), "he\x01llo");
        let owned = String::from("sysName");
        assert_eq!(text((&owned).into()), "sysName");
    }

    #[test]
    fn integers_in_decimal() {
        assert_eq!(text(42i32.into()), "42");
        assert_eq!(text((-7i64).into()), "-7");
        assert_eq!(text(i64::MIN.into()), "-9223372036854775808");
        assert_eq!(text(4_294_967_295u32.into()), "4294967295");
        assert_eq!(text(u64::MAX.into()), "18446744073709551615");
    }

    #[test]
    fn floats() {
        assert_eq!(text(3.5.into()), "3.5");
        assert_eq!(text(42.0.into()), "42.0");
        assert_eq!(text((-0.25).into()), "-0.25");
        assert_eq!(text(1e20.into()), "1e20");
        assert_eq!(text(f64::NAN.into()), "nan");
        assert_eq!(text(f64::INFINITY.into()), "inf");
        assert_eq!(text(f64::NEG_INFINITY.into()), "-inf");
    }

    #[test]
    fn float_exponent_form() {
        // No `+` sign and no zero padding on the exponent
        assert_eq!(text(1e15.into()), "1000000000000000.0");
        assert_eq!(text(1e16.into()), "1e16");
        assert_eq!(text((-2.5e17).into()), "-2.5e17");
        assert_eq!(text(1e-7.into()), "1e-7");
    }

    #[test]
    fn bytes_decode_as_utf8() {
        assert_eq!(text((&b"eth0"[..]).into()), "eth0");
        assert_eq!(text((&"caf\u{e9}".as_bytes()[..]).into()), "caf\u{e9}");

        let data = bytes::Bytes::from_static(b"Linux");
        assert_eq!(text((&data).into()), "Linux");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(text((&b"ab\xffcd"[..]).into()), "ab\u{fffd}cd");
        assert_eq!(text((&[0x00u8, 0x1a, 0x2b][..]).into()), "\u{0}\u{1a}+");
    }
}
