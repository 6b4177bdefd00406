//! Number formatting for widget display values.
//!
//! Amounts always use the fr-FR currency convention (`1 234,50 €`); only the
//! symbol glyph is swapped for the one the host app configured. Grouping,
//! decimal punctuation and symbol placement stay French whatever the symbol.

use crate::constants::PERCENT_MAX;

// ============================================================================
// CurrencyFormatter
// ============================================================================

/// Fixed-locale currency formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormatter {
    grouping_separator: char,
    decimal_separator: char,
    symbol_separator: char,
    default_symbol: &'static str,
    fraction_digits: usize,
}

impl CurrencyFormatter {
    /// French currency format: narrow no-break space grouping, decimal
    /// comma, two fraction digits, trailing `€` after a no-break space.
    pub const FR_FR: Self = Self {
        grouping_separator: '\u{202F}',
        decimal_separator: ',',
        symbol_separator: '\u{00A0}',
        default_symbol: "€",
        fraction_digits: 2,
    };

    /// Symbol the locale writes on its own.
    #[must_use]
    pub const fn default_symbol(&self) -> &'static str {
        self.default_symbol
    }

    /// Format `amount` with the locale's own symbol.
    ///
    /// Non-finite values are formatted as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartspend_widgets::format::CurrencyFormatter;
    ///
    /// let formatted = CurrencyFormatter::FR_FR.format(1234.5);
    /// assert_eq!(formatted, "1\u{202F}234,50\u{00A0}€");
    /// ```
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let digits = format!("{:.*}", self.fraction_digits, amount.abs());
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = String::with_capacity(digits.len() + 8);
        // Negative zero keeps its sign, like the platform formatter.
        if amount.is_sign_negative() {
            out.push('-');
        }
        out.push_str(&group_thousands(integer, self.grouping_separator));
        if !fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }
        out.push(self.symbol_separator);
        out.push_str(self.default_symbol);
        out
    }

    /// Format `amount`, then replace the locale symbol with `symbol`.
    ///
    /// This is a plain text substitution: a `$` ends up where the `€` was,
    /// after the number and with French punctuation.
    #[must_use]
    pub fn format_with_symbol(&self, amount: f64, symbol: &str) -> String {
        self.format(amount).replace(self.default_symbol, symbol)
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::FR_FR
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Insert `separator` between every group of three digits, from the right.
#[must_use]
pub fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Truncate toward zero, then clamp into `0..=100`.
///
/// `42.9` gives `42`, `145` gives `100`, `-10` gives `0`.
#[must_use]
pub fn clamp_percent(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    let truncated = value as i64;
    truncated.clamp(0, i64::from(PERCENT_MAX)) as u8
}

// ============================================================================
// Tests
// ============================================================================
