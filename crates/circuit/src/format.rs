// This code is part of Qiskit.
//
// (C) Copyright IBM 2026
//
// This code is licensed under the Apache License, Version 2.0. You may
// obtain a copy of this license in the LICENSE.txt file in the root directory
// of this source tree or at https://www.apache.org/licenses/LICENSE-2.0.
//
// Any modifications or derivative works of this code must retain this
// copyright notice, and modified files need to carry a notice indicating
// that they have been altered from the originals.

use crate::operators::Param;

/// Number of significant digits used for every displayed number.
pub const SIGNIFICANT_DIGITS: usize = 3;

/// Format `value` in the "general" style: `precision` significant digits, trailing zeros
/// removed, switching to scientific notation when the decimal exponent is below -4 or not less
/// than `precision`.  With `force_sign` a `+` is written in front of non-negative values.
pub fn format_general(value: f64, precision: usize, force_sign: bool) -> String {
    let precision = precision.max(1);
    let sign = if value.is_sign_negative() && !value.is_nan() {
        "-"
    } else if force_sign {
        "+"
    } else {
        ""
    };
    let magnitude = value.abs();

    if magnitude.is_nan() {
        return format!("{}nan", sign);
    }
    if magnitude.is_infinite() {
        return format!("{}inf", sign);
    }
    if magnitude == 0.0 {
        return format!("{}0", sign);
    }

    // Rounding to `precision` digits can carry into the next power of ten, so the exponent is
    // read back from the rounded scientific form.
    let scientific = format!("{:.*e}", precision - 1, magnitude);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}{}e{}{:02}",
            sign,
            trim_fraction(mantissa),
            exp_sign,
            exponent.abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, magnitude);
        format!("{}{}", sign, trim_fraction(&fixed))
    }
}

/// Format `value` as the shortest string that reads back to the same float, e.g. `0.0`, `1.5`,
/// `1e-05` or `1.5e+16`.  Exponents carry a sign and at least two digits.
pub fn format_repr(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    let debug = format!("{:?}", value);
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (exp_sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, exp_sign, digits)
        }
        None => debug,
    }
}

/// Remove trailing zeros after the decimal point, and the point itself if nothing follows it.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Resolve the representation of a single operator parameter.
///
/// Strings are returned unchanged and numbers are written with three significant digits.
/// Array-valued parameters have no compact form and fall back to their debug rendering.
pub fn single_parameter_representation(par: &Param) -> String {
    match par {
        Param::Str(text) => text.clone(),
        Param::Float(value) => format_general(*value, SIGNIFICANT_DIGITS, false),
        Param::Int(value) => format_general(*value as f64, SIGNIFICANT_DIGITS, false),
        Param::Ints(values) => format!("{:?}", values),
        Param::Real(array) => format!("{}", array),
        Param::Complex(array) => format!("{}", array),
    }
}

/// Format a term of a polynomial.  Zero coefficients drop the term, unit coefficients only
/// keep the sign, everything else is written with an explicit sign.
pub fn format_poly_term(coefficient: f64, variable: &str) -> String {
    if coefficient == 0.0 {
        return String::new();
    }
    if coefficient == 1.0 {
        return variable.to_owned();
    }
    if coefficient == -1.0 {
        return format!("-{}", variable);
    }
    format!(
        "{}{}",
        format_general(coefficient, SIGNIFICANT_DIGITS, true),
        variable
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn general_format_matches_three_significant_digits() {
        let cases = [
            (0.1, "0.1"),
            (1.0, "1"),
            (-1.5, "-1.5"),
            (3.14159, "3.14"),
            (2.0 / 3.0, "0.667"),
            (123.456, "123"),
            (999.9, "1e+03"),
            (1234.5, "1.23e+03"),
            (0.0001234, "0.000123"),
            (0.00001234, "1.23e-05"),
            (0.0, "0"),
            (-0.0, "-0"),
            (f64::INFINITY, "inf"),
            (f64::NEG_INFINITY, "-inf"),
            (f64::NAN, "nan"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_general(value, 3, false), expected, "for {}", value);
        }
    }

    #[test]
    fn forced_sign() {
        assert_eq!(format_general(2.5, 3, true), "+2.5");
        assert_eq!(format_general(-0.25, 3, true), "-0.25");
        assert_eq!(format_general(0.0, 3, true), "+0");
    }

    #[test]
    fn single_parameter() {
        assert_eq!(
            single_parameter_representation(&Param::Str("θ".into())),
            "θ"
        );
        assert_eq!(single_parameter_representation(&Param::Float(0.12345)), "0.123");
        assert_eq!(single_parameter_representation(&Param::Int(5)), "5");
        assert_eq!(single_parameter_representation(&Param::Int(12345)), "1.23e+04");
    }

    #[test]
    fn repr_of_floats() {
        assert_eq!(format_repr(0.0), "0.0");
        assert_eq!(format_repr(1.5), "1.5");
        assert_eq!(format_repr(-2.0), "-2.0");
        assert_eq!(format_repr(0.0001), "0.0001");
        assert_eq!(format_repr(1e-5), "1e-05");
        assert_eq!(format_repr(1e16), "1e+16");
        assert_eq!(format_repr(-1.5e-123), "-1.5e-123");
        assert_eq!(format_repr(f64::INFINITY), "inf");
        assert_eq!(format_repr(f64::NAN), "nan");
    }

    #[test]
    fn poly_terms() {
        assert_eq!(format_poly_term(0.0, "x"), "");
        assert_eq!(format_poly_term(1.0, "x"), "x");
        assert_eq!(format_poly_term(-1.0, "x"), "-x");
        assert_eq!(format_poly_term(2.5, "x"), "+2.5x");
        assert_eq!(format_poly_term(-0.333333, "p₁"), "-0.333p₁");
    }
}
