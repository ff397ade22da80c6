//! Color parsing for theme definitions

use gpui::Hsla;

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` into Hsla.
/// Unparseable input yields opaque black.
pub fn hex(color: &str) -> Hsla {
    let digits = color.trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_string(),
        _ => return rgba_to_hsla(0, 0, 0, 255),
    };

    let channel = |index: usize| {
        expanded
            .get(index * 2..index * 2 + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    match (channel(0), channel(1), channel(2)) {
        (Some(r), Some(g), Some(b)) => rgba_to_hsla(r, g, b, channel(3).unwrap_or(255)),
        _ => rgba_to_hsla(0, 0, 0, 255),
    }
}

fn rgba_to_hsla(r: u8, g: u8, b: u8, a: u8) -> Hsla {
    let [r, g, b, a] = [r, g, b, a].map(|c| c as f32 / 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return Hsla { h: 0.0, s: 0.0, l, a };
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsla {
        h: sector / 6.0,
        s,
        l,
        a,
    }
}
