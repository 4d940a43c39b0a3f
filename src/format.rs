// format.rs

/// Float rendering styles, named after the `e`, `f` and `g` verbs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloatFormat {
    /// `-d.ddde±dd`
    Exponent,
    /// `-ddd.ddd`
    Decimal,
    /// `Exponent` for large or tiny exponents, `Decimal` otherwise.
    #[default]
    General,
}

impl FloatFormat {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'e' => Some(FloatFormat::Exponent),
            'f' => Some(FloatFormat::Decimal),
            'g' => Some(FloatFormat::General),
            _ => None,
        }
    }
}

/// Renders `value`. A `None` precision means the fewest digits that still
/// read back as the same value.
pub fn format_float(value: f64, fmt: FloatFormat, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    match fmt {
        FloatFormat::Decimal => match precision {
            Some(p) => format!("{:.*}", p, value),
            None => format!("{}", value),
        },
        FloatFormat::Exponent => {
            let raw = match precision {
                Some(p) => format!("{:.*e}", p, value),
                None => format!("{:e}", value),
            };
            pad_exponent(&raw)
        }
        FloatFormat::General => format_general(value, precision),
    }
}

fn split_exponent(raw: &str) -> (&str, i32) {
    match raw.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
        None => (raw, 0),
    }
}

fn pad_exponent(raw: &str) -> String {
    let (mantissa, exp) = split_exponent(raw);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exp.abs())
}

fn trim_zeros(mantissa: &str) -> &str {
    if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    }
}

fn format_general(value: f64, precision: Option<usize>) -> String {
    let raw = match precision {
        Some(p) => format!("{:.*e}", p.max(1) - 1, value),
        None => format!("{:e}", value),
    };
    let (mantissa, exp) = split_exponent(&raw);
    let mantissa = trim_zeros(mantissa);
    let digits = mantissa.chars().filter(char::is_ascii_digit).count() as i32;

    let eprec = match precision {
        None => 6,
        Some(p) => {
            let p = p.max(1) as i32;
            if p > digits && digits >= exp + 1 {
                digits
            } else {
                p
            }
        }
    };
    if exp < -4 || exp >= eprec {
        return pad_exponent(&format!("{}e{}", mantissa, exp));
    }
    let decimals = (digits - (exp + 1)).max(0) as usize;
    format!("{:.*}", decimals, value)
}
