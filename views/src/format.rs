//! Display formatting for prices and ratings.
//!
//! Prices follow en-US currency conventions for USD: a leading `$`, comma
//! thousands separators and exactly two fraction digits. Rounding is half
//! away from zero on the shortest decimal that round-trips to the `f64`, the
//! digits a browser's currency formatter sees. So `0.125` becomes `$0.13` and
//! `1.005` becomes `$1.01`.

/// Format a dollar amount, e.g. `1234.5` -> `"$1,234.50"`.
///
/// Negative amounts keep their sign in front of the symbol (`"-$5.00"`).
/// Nothing is rejected: `NaN` and infinities format as `"$NaN"` and `"$∞"`.
///
/// ```rust
/// use storefront_views::format::format_usd;
///
/// assert_eq!(format_usd(49.99), "$49.99");
/// assert_eq!(format_usd(5.0), "$5.00");
/// ```
pub fn format_usd(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".into();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let (dollars, cents) = round_to_cents(amount.abs());
    format!("{sign}${}.{cents:02}", group_thousands(&dollars))
}

/// Rating line shown in the card footer, e.g. `4.5` -> `"4.5 Stars"`.
pub fn format_rating(rating: f64) -> String {
    format!("{rating} Stars")
}

/// Split a non-negative finite amount into whole-dollar digits and cents.
fn round_to_cents(amount: f64) -> (String, u32) {
    // f64 Display is the shortest round-trip form and never uses an exponent
    let shortest = amount.to_string();
    let (whole, fraction) = shortest
        .split_once('.')
        .unwrap_or((shortest.as_str(), ""));

    let digit = |idx: usize| -> u32 {
        fraction
            .as_bytes()
            .get(idx)
            .map(|b| u32::from(b - b'0'))
            .unwrap_or(0)
    };

    let mut cents = digit(0) * 10 + digit(1);
    let mut whole = whole.to_string();
    if digit(2) >= 5 {
        cents += 1;
        if cents == 100 {
            cents = 0;
            whole = increment_digits(&whole);
        }
    }
    (whole, cents)
}

/// Add one to a string of ASCII digits.
fn increment_digits(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        if *b == b'9' {
            *b = b'0';
        } else {
            *b += 1;
            return String::from_utf8_lossy(&bytes).into_owned();
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// `"1234567"` -> `"1,234,567"`.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
