//! Badge text contrast for resolved team colors.

pub const DARK_TEXT: &str = "#000000";
pub const LIGHT_TEXT: &str = "#ffffff";

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// WCAG 2.x relative luminance in `0.0..=1.0`.
pub fn relative_luminance((r, g, b): (u8, u8, u8)) -> f64 {
    fn linear(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (light, dark) = if a >= b { (a, b) } else { (b, a) };
    (light + 0.05) / (dark + 0.05)
}

/// Black or white, whichever reads better on `background`.
///
/// Named colors and anything else that is not hex get white text.
pub fn contrast_text_color(background: &str) -> &'static str {
    let Some(rgb) = parse_hex_rgb(background) else {
        return LIGHT_TEXT;
    };
    let luminance = relative_luminance(rgb);
    if contrast_ratio(luminance, 0.0) > contrast_ratio(luminance, 1.0) {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse_hex_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_rgb(" #C8102E "), Some((200, 16, 46)));
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(parse_hex_rgb("navy"), None);
        assert_eq!(parse_hex_rgb("#12345"), None);
        assert_eq!(parse_hex_rgb("#gggggg"), None);
        assert_eq!(parse_hex_rgb("#ééé"), None);
    }

    #[test]
    fn luminance_spans_black_to_white() {
        assert_eq!(relative_luminance((0, 0, 0)), 0.0);
        assert!((relative_luminance((255, 255, 255)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn picks_readable_text() {
        assert_eq!(contrast_text_color("#FFCD00"), DARK_TEXT);
        assert_eq!(contrast_text_color("#00274C"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("#ffffff"), DARK_TEXT);
        assert_eq!(contrast_text_color("navy"), LIGHT_TEXT);
    }
}
