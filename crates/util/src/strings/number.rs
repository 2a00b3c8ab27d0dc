/// Render a number the way the applet displays it: whole numbers without a
/// fractional part, everything else in shortest round-trip form. Magnitudes
/// of `1e21` and above, or below `1e-6`, use exponent form (`1e+21`,
/// `1.5e-7`).
///
/// # Examples
///
/// ```
/// use applet_util::strings::number_to_string;
///
/// assert_eq!(number_to_string(12.0), "12");
/// assert_eq!(number_to_string(12.5), "12.5");
/// assert_eq!(number_to_string(-0.25), "-0.25");
/// ```
pub fn number_to_string(n: f64) -> String {
    if n == 0.0 {
        // Covers -0 as well.
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", n);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        };
    }
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(number_to_string(0.0), "0");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(99.0), "99");
        assert_eq!(number_to_string(-7.0), "-7");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(12.09), "12.09");
        assert_eq!(number_to_string(0.98999), "0.98999");
        assert_eq!(number_to_string(0.000001), "0.000001");
    }

    #[test]
    fn test_exponent_form() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.23e22), "1.23e+22");
        assert_eq!(number_to_string(-1e21), "-1e+21");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
    }
}
