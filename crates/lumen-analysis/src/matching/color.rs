//! Color parsing and WCAG relative-luminance contrast.

use std::sync::LazyLock;

use regex::Regex;

use super::patterns;

/// An sRGB color with 8-bit channels and a 0.0..=1.0 alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

static RGBA_FORM: LazyLock<Option<Regex>> = LazyLock::new(|| {
    patterns::compile(
        r"(?i)^\s*rgba\s*\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)\s*$",
    )
});

const NAMED_COLORS: [(&str, (u8, u8, u8)); 9] = [
    ("white", (255, 255, 255)),
    ("black", (0, 0, 0)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("gray", (128, 128, 128)),
    ("lightgray", (211, 211, 211)),
    ("darkgray", (169, 169, 169)),
];

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `RGBA(r, g, b, a)` or a named color (`White`, `Color.White`).
    /// Anything else, including out-of-range channels, is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::parse_rgba(raw).or_else(|| Self::parse_named(raw))
    }

    fn parse_rgba(raw: &str) -> Option<Self> {
        let caps = RGBA_FORM.as_ref()?.captures(raw)?;
        let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
        let a: f64 = caps.get(4)?.as_str().parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        Some(Self {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
            a,
        })
    }

    fn parse_named(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let name = match trimmed.get(..6) {
            Some(prefix) if prefix.eq_ignore_ascii_case("color.") => &trimmed[6..],
            _ => trimmed,
        };
        NAMED_COLORS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, (r, g, b))| Self::opaque(*r, *g, *b))
    }

    /// WCAG relative luminance in 0.0..=1.0. Alpha is ignored.
    pub fn relative_luminance(&self) -> f64 {
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG contrast ratio between two colors, in 1.0..=21.0. Order-independent.
pub fn contrast_ratio(a: &Rgba, b: &Rgba) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
