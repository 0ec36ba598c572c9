//! Currency display formatting for CLI output.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format an amount as a currency string, e.g. `-12.3` becomes `"-$12.30"`.
pub fn currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });
    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    if amount == 0.0 {
        // Zero is hardcoded as "0" by the formatter.
        return "$0.00".to_owned();
    }

    let mut formatted = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else {
        positive_fmt.fmt_string(amount)
    };

    // numfmt omits the last trailing zero ("12.30" renders as "12.3"), so
    // append it when the decimal point is not two places from the end.
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}

#[cfg(test)]
mod currency_tests {
    use super::currency;

    #[test]
    fn formats_positive_amounts() {
        assert_eq!(currency(1234.56), "$1,234.56");
        assert_eq!(currency(12.3), "$12.30");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(currency(-42.0), "-$42.00");
    }

    #[test]
    fn formats_zero() {
        assert_eq!(currency(0.0), "$0.00");
    }
}
