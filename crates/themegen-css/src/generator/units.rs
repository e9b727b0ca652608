//! Unit formatting for generated values.

/// Browser default root font size.
pub const ROOT_FONT_PX: f64 = 16.0;

/// `px / 16` as a rem string, e.g. `6.0` -> `0.375rem`.
pub fn px_to_rem(px: f64) -> String {
    format!("{}rem", px / ROOT_FONT_PX)
}

pub fn px(value: u32) -> String {
    format!("{value}px")
}

pub fn em(value: f64) -> String {
    format!("{value}em")
}

/// Inverse of [`px_to_rem`] for values ending in `rem` (or bare numbers,
/// taken as px). Returns `None` for other units.
pub fn length_to_px(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some(rem) = value.strip_suffix("rem") {
        return rem.trim().parse::<f64>().ok().map(|r| r * ROOT_FONT_PX);
    }
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rem_formatting_is_shortest() {
        assert_eq!(px_to_rem(16.0), "1rem");
        assert_eq!(px_to_rem(6.0), "0.375rem");
        assert_eq!(px_to_rem(0.0), "0rem");
        assert_eq!(px_to_rem(15.2), "0.95rem");
        assert_eq!(px_to_rem(24.0), "1.5rem");
    }

    #[test]
    fn em_keeps_sign() {
        assert_eq!(em(0.0), "0em");
        assert_eq!(em(-0.01), "-0.01em");
    }

    #[test]
    fn length_to_px_handles_units() {
        assert_eq!(length_to_px("0.5rem"), Some(8.0));
        assert_eq!(length_to_px("12px"), Some(12.0));
        assert_eq!(length_to_px("4"), Some(4.0));
        assert_eq!(length_to_px("1em"), None);
        assert_eq!(length_to_px("var(--x)"), None);
    }
}
