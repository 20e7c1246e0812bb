//! Color mapping functions for data visualization.

use crate::figure::ColorScale;
use ratatui::style::Color;

const PLASMA: &[&str] = &[
    "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
    "#fdca26", "#f0f921",
];

const VIRIDIS: &[&str] = &[
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

const RAINBOW: &[&str] = &[
    "#96005a", "#0000c8", "#0019ff", "#0098ff", "#2cff96", "#97ff00", "#ffea00", "#ff6f00",
    "#ff0000",
];

const BLUERED: &[&str] = &["#0000ff", "#ff0000"];

impl ColorScale {
    /// Hex colors of the scale, evenly spaced from 0.0 to 1.0.
    pub fn hex_stops(self) -> &'static [&'static str] {
        match self {
            Self::Plasma => PLASMA,
            Self::Viridis => VIRIDIS,
            Self::Rainbow => RAINBOW,
            Self::BlueRed => BLUERED,
        }
    }

    /// Scale as `(position, "#rrggbb")` pairs, the form stored in a color axis.
    pub fn stops(self) -> Vec<(f64, String)> {
        let hex = self.hex_stops();
        let last = hex.len().saturating_sub(1).max(1) as f64;
        hex.iter()
            .enumerate()
            .map(|(i, c)| (i as f64 / last, (*c).to_string()))
            .collect()
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        interpolate(&self.stops(), t)
    }
}

/// Parse a `#rrggbb` string.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Map a normalized value onto a list of `(position, color)` stops.
///
/// Positions are expected in ascending order. Unparseable colors are
/// skipped; an empty scale maps everything to white.
pub fn interpolate(stops: &[(f64, String)], t: f64) -> Color {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

    let parsed: Vec<(f64, (u8, u8, u8))> = stops
        .iter()
        .filter_map(|(pos, hex)| parse_hex(hex).map(|rgb| (*pos, rgb)))
        .collect();

    let (Some(first), Some(last)) = (parsed.first(), parsed.last()) else {
        return Color::White;
    };

    if t <= first.0 {
        return rgb(first.1);
    }

    for pair in parsed.windows(2) {
        let (lo, (r0, g0, b0)) = pair[0];
        let (hi, (r1, g1, b1)) = pair[1];
        if t <= hi {
            let span = hi - lo;
            let f = if span <= f64::EPSILON { 1.0 } else { (t - lo) / span };
            let mix = |a: u8, b: u8| (a as f64 + f * (b as f64 - a as f64)).round() as u8;
            return Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1));
        }
    }

    rgb(last.1)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
