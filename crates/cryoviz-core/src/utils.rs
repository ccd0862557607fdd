use ryu_js::Buffer;

/// Formats `v` like JavaScript `Number#toString()` (shortest round-trip form, `-0` as `0`).
pub fn fmt_js_number(v: f64) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let mut b = Buffer::new();
    b.format_finite(v).to_string()
}

/// Formats `v` with exactly `digits` fractional digits, like JavaScript `Number#toFixed`.
///
/// Ties are resolved upwards on the exact binary value of `v`, so `0.145.toFixed(2)` is
/// `"0.14"` (the double is slightly below the tie) while `0.125.toFixed(2)` is `"0.13"`.
/// Rust's `{:.N}` formatting rounds ties to even and cannot be used directly. Negative values
/// keep their sign even when they round to zero (`"-0.00"`).
pub fn to_fixed(v: f64, digits: usize) -> String {
    if !v.is_finite() {
        return fmt_js_number(v);
    }
    let negative = v < 0.0;
    // Wide enough that the first dropped digit and whether anything follows it are exact for
    // every value that reaches the formatting tiers in this crate.
    let wide = format!("{:.*}", digits + 25, v.abs());
    let (int_part, frac_part) = wide.split_once('.').unwrap_or((wide.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    for d in &kept[..int_len] {
        out.push((b'0' + d) as char);
    }
    if digits > 0 {
        out.push('.');
        for d in &kept[int_len..] {
            out.push((b'0' + d) as char);
        }
    }
    out
}

/// JavaScript `Math.round`: ties go towards positive infinity.
pub fn js_round(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Parses the longest leading decimal prefix of `s`, like JavaScript `parseFloat` restricted to
/// digits and dots. Returns `None` when no digit is present.
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let mut end = 0usize;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, ch) in s.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    let prefix = s[..end].trim_end_matches('.');
    let prefix = if prefix.starts_with('.') {
        format!("0{prefix}")
    } else {
        prefix.to_string()
    };
    prefix.parse::<f64>().ok()
}

/// `value % 1 != 0` for finite values.
pub fn has_fraction(v: f64) -> bool {
    v.is_finite() && v % 1.0 != 0.0
}
