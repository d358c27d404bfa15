//! Score formatting
//!
//! Prints doubles the way C++ iostreams do by default (`%g`, 6 significant
//! digits), so batch output can be diffed against the reference tools.

const SIGNIFICANT_DIGITS: i32 = 6;

/// Format a score in `%g` style
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Exponent after rounding to the significant digits
    let sci = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= SIGNIFICANT_DIGITS {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_score(1.0), "1");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(0.692307692), "0.692308");
        assert_eq!(format_score(0.12962963), "0.12963");
        assert_eq!(format_score(0.0001234567), "0.000123457");
        assert_eq!(format_score(123456.0), "123456");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_score(0.00001234567), "1.23457e-05");
        assert_eq!(format_score(1.5e-10), "1.5e-10");
        assert_eq!(format_score(1234567.0), "1.23457e+06");
    }

    #[test]
    fn test_rounding_bumps_exponent() {
        assert_eq!(format_score(999999.7), "1e+06");
        assert_eq!(format_score(0.99999999), "1");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(f64::NAN), "nan");
        assert_eq!(format_score(f64::INFINITY), "inf");
    }
}
