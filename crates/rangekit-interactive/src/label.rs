//! Numeric labels for slider values and range endpoints

/// Decimal places shown by a [`NumericLabel`] unless configured otherwise
pub const DEFAULT_PRECISION: usize = 2;

const SUFFIXES: [&str; 9] = ["K", "M", "B", "T", "P", "E", "Z", "Y", "R"];

/// Format a value with at most `precision` decimals, trailing zeros stripped
pub fn format_value(value: f64, precision: usize) -> String {
    if precision == 0 {
        format!("{:.0}", value)
    } else {
        let formatted = format!("{:.prec$}", value, prec = precision);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }
}

/// Parse user text into a finite number
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round `value` to `places` decimal places
pub fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Six significant digits, trailing zeros stripped
fn format_significant(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    format_value(value, (5 - magnitude).max(0) as usize)
}

/// Compact notation for range endpoint labels
///
/// Values below a thousand print as they are. Larger ones are divided by the
/// largest power of a thousand that keeps the quotient under 1000 and get a
/// suffix: `1500.0` becomes `"1.5K"`, `2_000_000.0` becomes `"2M"`. With
/// `decimals == false` the quotient is truncated to an integer. NaN yields an
/// empty string.
pub fn abbreviate(value: f64, decimals: bool) -> String {
    if value.is_nan() {
        return String::new();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let num = value.abs();
    if num < 1000.0 {
        return format_significant(value);
    }

    for (i, suffix) in SUFFIXES.iter().enumerate() {
        let quotient = num / 1000f64.powi(i as i32 + 1);
        if quotient.trunc() >= 1000.0 {
            continue;
        }

        return if !decimals {
            format!("{sign}{}{suffix}", quotient.trunc())
        } else if quotient == quotient.floor() {
            format!("{sign}{:.0}{suffix}", quotient)
        } else {
            format!("{sign}{:.1}{suffix}", quotient)
        };
    }

    format!("{:e}", value)
}

/// A number paired with the editable text shown for it
#[derive(Debug, Clone, PartialEq)]
pub struct NumericLabel {
    value: f64,
    text: String,
    precision: usize,
}

impl NumericLabel {
    pub fn new(value: f64) -> Self {
        Self::with_precision(value, DEFAULT_PRECISION)
    }

    pub fn with_precision(value: f64, precision: usize) -> Self {
        let mut label = Self {
            value: 0.0,
            text: String::new(),
            precision,
        };
        label.set_value(value);
        label
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Store a rounded value and regenerate the text
    pub fn set_value(&mut self, value: f64) {
        self.value = round_to(value, self.precision);
        self.text = format_value(self.value, self.precision);
    }

    /// Replace the text without touching the value, as while typing
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Number parsed from the current text
    pub fn parsed(&self) -> Option<f64> {
        parse_value(&self.text)
    }

    /// Regenerate the text from the stored value, discarding edits
    pub fn reset_text(&mut self) {
        self.text = format_value(self.value, self.precision);
    }
}

impl Default for NumericLabel {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(12.5, 2), "12.5");
        assert_eq!(format_value(12.0, 2), "12");
        assert_eq!(format_value(33.3333, 2), "33.33");
        assert_eq!(format_value(7.6, 0), "8");
        assert_eq!(format_value(100.0, 0), "100");
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value(" 42.5 "), Some(42.5));
        assert_eq!(parse_value("-3"), Some(-3.0));
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("inf"), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(100.0 / 3.0, 2), 33.33);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_abbreviate_small_values() {
        assert_eq!(abbreviate(0.0, true), "0");
        assert_eq!(abbreviate(250.0, true), "250");
        assert_eq!(abbreviate(999.5, true), "999.5");
        assert_eq!(abbreviate(-42.0, false), "-42");
        assert_eq!(abbreviate(f64::NAN, true), "");
    }

    #[test]
    fn test_abbreviate_suffixes() {
        assert_eq!(abbreviate(1500.0, true), "1.5K");
        assert_eq!(abbreviate(1000.0, true), "1K");
        assert_eq!(abbreviate(2_000_000.0, true), "2M");
        assert_eq!(abbreviate(2_500_000.0, false), "2M");
        assert_eq!(abbreviate(-1500.0, true), "-1.5K");
        assert_eq!(abbreviate(3.0e9, true), "3B");
    }

    #[test]
    fn test_label_text_follows_value() {
        let mut label = NumericLabel::new(100.0 / 3.0);
        assert_eq!(label.value(), 33.33);
        assert_eq!(label.text(), "33.33");

        label.set_text(" 12.5");
        assert_eq!(label.value(), 33.33);
        assert_eq!(label.parsed(), Some(12.5));

        label.set_text("oops");
        assert_eq!(label.parsed(), None);
        label.reset_text();
        assert_eq!(label.text(), "33.33");
    }
}
