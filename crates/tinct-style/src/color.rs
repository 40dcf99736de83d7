#![forbid(unsafe_code)]

//! HSL/hex color conversion and WCAG contrast metrics.
//!
//! Two layers live here:
//!
//! - **String engine**: [`relative_luminance`], [`contrast_ratio`],
//!   [`hsl_to_hex`], [`hex_to_hsl`], and [`smart_invert`] operate directly on
//!   the stored string forms (`"H S L"` and `#rrggbb`). They are total: a
//!   malformed component becomes `NaN` and flows through the arithmetic
//!   instead of raising an error. Callers validate first if they care.
//! - **Typed layer**: [`Hsl`] and [`Rgb`] with strict parsers that reject
//!   malformed input with a [`ColorError`]. Both layers share the same math.
//!
//! # HSL string form
//!
//! `"210 40 98"`: hue in degrees, saturation and lightness in percent, the
//! percent signs left off. Parsing tolerates a trailing `%` on any token so
//! `"0 50% 10%"` reads the same as `"0 50 10"`.
//!
//! # Rounding
//!
//! [`hex_to_hsl`] rounds every component to an integer and [`hsl_to_hex`]
//! quantizes to bytes, so `hex_to_hsl(hsl_to_hex(x))` may drift by one unit
//! per component. [`smart_invert`] does not round.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// WCAG AA minimum contrast for normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// WCAG AA minimum contrast for large text (18pt, or 14pt bold).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// WCAG AAA minimum contrast for normal text.
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;
/// WCAG AAA minimum contrast for large text.
pub const WCAG_AAA_LARGE_TEXT: f64 = 4.5;

/// Inverted lightness below which [`smart_invert`] desaturates.
pub const INVERT_DESATURATE_BELOW: f64 = 20.0;
/// Saturation multiplier applied by [`smart_invert`] to very dark results.
pub const INVERT_DESATURATE_FACTOR: f64 = 0.8;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Which HSL component a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Hue,
    Saturation,
    Lightness,
}

impl Component {
    const ALL: [Self; 3] = [Self::Hue, Self::Saturation, Self::Lightness];
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
        })
    }
}

/// Rejections produced by the strict parsers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("expected 3 color components, found {found}")]
    WrongTokenCount { found: usize },

    #[error("{component} is not a number: {token:?}")]
    InvalidComponent { component: Component, token: String },

    #[error("{component} {value} is outside 0..=100")]
    OutOfRange { component: Component, value: f64 },

    #[error("invalid hex color {input:?}: expected #rrggbb")]
    InvalidHex { input: String },
}

// ---------------------------------------------------------------------------
// Shared math (NaN-transparent)
// ---------------------------------------------------------------------------

/// Lenient token read: optional trailing `%`, anything unparseable is NaN.
fn lenient_component(token: Option<&str>) -> f64 {
    token
        .map(|t| t.strip_suffix('%').unwrap_or(t))
        .and_then(|t| t.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn lenient_hsl(hsl: &str) -> [f64; 3] {
    let mut tokens = hsl.split_whitespace();
    [
        lenient_component(tokens.next()),
        lenient_component(tokens.next()),
        lenient_component(tokens.next()),
    ]
}

fn lenient_hex(hex: &str) -> [f64; 3] {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let channel = |at: usize| {
        digits
            .get(at..at + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .map_or(f64::NAN, |v| f64::from(v) / 255.0)
    };
    [channel(0), channel(2), channel(4)]
}

/// sRGB gamma expansion used by the WCAG luminance formula.
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Luminance from raw HSL percentages via the 12-phase channel function.
fn luminance_of(h: f64, s: f64, l: f64) -> f64 {
    if h.is_nan() || s.is_nan() || l.is_nan() {
        return f64::NAN;
    }
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    let r = srgb_to_linear(f(0.0));
    let g = srgb_to_linear(f(8.0));
    let b = srgb_to_linear(f(4.0));
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Chroma/intermediate/match construction; returns channels in `0..=1`.
fn hsl_to_unit_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let h = h.rem_euclid(360.0);
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    [r + m, g + m, b + m]
}

/// Scale a unit channel to a byte. The cast saturates, and NaN becomes 0.
fn quantize(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

/// Inverse conversion; returns rounded `[hue°, saturation%, lightness%]`.
fn unit_rgb_to_hsl(r: f64, g: f64, b: f64) -> [f64; 3] {
    if r.is_nan() || g.is_nan() || b.is_nan() {
        return [f64::NAN; 3];
    }
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue and saturation are defined as zero.
        return [0.0, 0.0, (l * 100.0).round()];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sextant = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sextant / 6.0;

    [(h * 360.0).round(), (s * 100.0).round(), (l * 100.0).round()]
}

fn invert_components(h: f64, s: f64, l: f64) -> [f64; 3] {
    let lightness = 100.0 - l;
    let saturation = if lightness < INVERT_DESATURATE_BELOW {
        s * INVERT_DESATURATE_FACTOR
    } else {
        s
    };
    [h, saturation, lightness]
}

fn format_hsl([h, s, l]: [f64; 3]) -> String {
    format!("{h} {s} {l}")
}

// ---------------------------------------------------------------------------
// String engine
// ---------------------------------------------------------------------------

/// WCAG relative luminance of an HSL string, in `0..=1`.
///
/// Malformed input yields `NaN`.
#[must_use]
pub fn relative_luminance(hsl: &str) -> f64 {
    let [h, s, l] = lenient_hsl(hsl);
    luminance_of(h, s, l)
}

/// WCAG contrast ratio between two luminances. Order-independent, `>= 1`.
///
/// `NaN` on either side yields `NaN`.
#[must_use]
pub fn contrast_ratio(luminance_a: f64, luminance_b: f64) -> f64 {
    // f64::max/min would discard a NaN operand.
    let (lighter, darker) = if luminance_a >= luminance_b {
        (luminance_a, luminance_b)
    } else {
        (luminance_b, luminance_a)
    };
    (lighter + 0.05) / (darker + 0.05)
}

/// Convert an HSL string to `#rrggbb` (lowercase).
#[must_use]
pub fn hsl_to_hex(hsl: &str) -> String {
    let [h, s, l] = lenient_hsl(hsl);
    let [r, g, b] = hsl_to_unit_rgb(h, s, l);
    Rgb::new(quantize(r), quantize(g), quantize(b)).to_hex()
}

/// Convert `#rrggbb` to an integer-rounded HSL string.
///
/// Gray, black and white short-circuit to hue 0 and saturation 0.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> String {
    let [r, g, b] = lenient_hex(hex);
    format_hsl(unit_rgb_to_hsl(r, g, b))
}

/// Flip lightness for light/dark theme derivation.
///
/// Hue is returned untouched, lightness becomes `100 - l`, and saturation is
/// scaled by [`INVERT_DESATURATE_FACTOR`] when the new lightness falls below
/// [`INVERT_DESATURATE_BELOW`]. No rounding is applied.
#[must_use]
pub fn smart_invert(hsl: &str) -> String {
    let [h, s, l] = lenient_hsl(hsl);
    format_hsl(invert_components(h, s, l))
}

/// Contrast ratio between two HSL strings.
#[must_use]
pub fn contrast_between(a: &str, b: &str) -> f64 {
    contrast_ratio(relative_luminance(a), relative_luminance(b))
}

/// Whether `fg` on `bg` meets WCAG AA for normal text.
#[must_use]
pub fn meets_wcag_aa(fg: &str, bg: &str) -> bool {
    contrast_between(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

/// Whether `fg` on `bg` meets WCAG AA for large text.
#[must_use]
pub fn meets_wcag_aa_large_text(fg: &str, bg: &str) -> bool {
    contrast_between(fg, bg) >= WCAG_AA_LARGE_TEXT
}

/// Whether `fg` on `bg` meets WCAG AAA for normal text.
#[must_use]
pub fn meets_wcag_aaa(fg: &str, bg: &str) -> bool {
    contrast_between(fg, bg) >= WCAG_AAA_NORMAL_TEXT
}

/// Pick the candidate with the highest contrast against `bg`.
///
/// The first candidate wins ties. Malformed candidates are skipped, so the
/// result is `None` for an empty slice or a malformed `bg`.
#[must_use]
pub fn best_text_color<'a>(bg: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let bg_lum = relative_luminance(bg);
    let mut best: Option<(&'a str, f64)> = None;
    for &candidate in candidates {
        let ratio = contrast_ratio(relative_luminance(candidate), bg_lum);
        if ratio.is_nan() {
            continue;
        }
        match best {
            Some((_, best_ratio)) if ratio <= best_ratio => {}
            _ => best = Some((candidate, ratio)),
        }
    }
    best.map(|(color, _)| color)
}

// ---------------------------------------------------------------------------
// Typed layer
// ---------------------------------------------------------------------------

/// A validated HSL color. Saturation and lightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    /// Create a color from raw components without validation.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Strictly parse `"H S L"` (percent signs optional on S and L).
    ///
    /// Hue may be any finite number and is wrapped into `0..360`.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(ColorError::WrongTokenCount {
                found: tokens.len(),
            });
        }

        let mut values = [0.0; 3];
        for ((slot, &token), component) in values.iter_mut().zip(&tokens).zip(Component::ALL) {
            let digits: &str = match component {
                Component::Hue => token,
                _ => token.strip_suffix('%').unwrap_or(token),
            };
            let value = digits
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ColorError::InvalidComponent {
                    component,
                    token: token.to_string(),
                })?;
            if component != Component::Hue && !(0.0..=100.0).contains(&value) {
                return Err(ColorError::OutOfRange { component, value });
            }
            *slot = value;
        }

        let [hue, saturation, lightness] = values;
        Ok(Self::new(hue.rem_euclid(360.0), saturation, lightness))
    }

    /// Quantize to 8-bit RGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let [r, g, b] = hsl_to_unit_rgb(self.hue, self.saturation, self.lightness);
        Rgb::new(quantize(r), quantize(g), quantize(b))
    }

    /// `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        luminance_of(self.hue, self.saturation, self.lightness)
    }

    /// Contrast ratio against another color.
    #[must_use]
    pub fn contrast_ratio(self, other: Self) -> f64 {
        contrast_ratio(self.relative_luminance(), other.relative_luminance())
    }

    /// See [`smart_invert`].
    #[must_use]
    pub fn smart_invert(self) -> Self {
        let [hue, saturation, lightness] =
            invert_components(self.hue, self.saturation, self.lightness);
        Self::new(hue, saturation, lightness)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.hue, self.saturation, self.lightness)
    }
}

impl FromStr for Hsl {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb.to_hsl()
    }
}

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strictly parse `#rrggbb` (the `#` is optional, digits in either case).
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex {
            input: input.to_string(),
        };
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Integer-rounded HSL.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let unit = |c: u8| f64::from(c) / 255.0;
        let [hue, saturation, lightness] = unit_rgb_to_hsl(unit(self.r), unit(self.g), unit(self.b));
        Hsl::new(hue, saturation, lightness)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Hsl, Rgb};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Hsl {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Hsl {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Hsl::parse(&s).map_err(serde::de::Error::custom)
        }
    }

    impl Serialize for Rgb {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for Rgb {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Rgb::from_hex(&s).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn components(hsl: &str) -> [f64; 3] {
        lenient_hsl(hsl)
    }

    fn is_hex_shape(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    // ── luminance / contrast ────────────────────────────────────────────

    #[test]
    fn luminance_black_and_white_extremes() {
        assert_eq!(relative_luminance("0 0 0"), 0.0);
        assert!((relative_luminance("0 0 100") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_accepts_percent_signs() {
        assert_eq!(
            relative_luminance("210 40% 50%"),
            relative_luminance("210 40 50")
        );
    }

    #[test]
    fn luminance_pure_red_green_blue() {
        let r = relative_luminance("0 100 50");
        let g = relative_luminance("120 100 50");
        let b = relative_luminance("240 100 50");
        assert!((r - 0.2126).abs() < 1e-9, "red luminance {r}");
        assert!((g - 0.7152).abs() < 1e-9, "green luminance {g}");
        assert!((b - 0.0722).abs() < 1e-9, "blue luminance {b}");
    }

    #[test]
    fn luminance_malformed_is_nan() {
        assert!(relative_luminance("blue 50 50").is_nan());
        assert!(relative_luminance("10 50").is_nan());
        assert!(relative_luminance("").is_nan());
    }

    #[test]
    fn contrast_ratio_black_on_white_is_21() {
        let ratio = contrast_ratio(relative_luminance("0 0 0"), relative_luminance("0 0 100"));
        assert!((ratio - 21.0).abs() < 1e-9, "got {ratio}");
    }

    #[test]
    fn contrast_ratio_same_luminance_is_one() {
        assert_eq!(contrast_ratio(0.3, 0.3), 1.0);
        assert_eq!(contrast_ratio(0.0, 0.0), 1.0);
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        assert_eq!(contrast_ratio(0.1, 0.8), contrast_ratio(0.8, 0.1));
    }

    #[test]
    fn contrast_ratio_propagates_nan_from_either_side() {
        assert!(contrast_ratio(f64::NAN, 0.3).is_nan());
        assert!(contrast_ratio(0.3, f64::NAN).is_nan());
        assert!(contrast_ratio(f64::NAN, f64::NAN).is_nan());
        assert!(contrast_between("blue 50 50", "0 0 100").is_nan());
        assert!(contrast_between("0 0 100", "blue 50 50").is_nan());
        assert!(!meets_wcag_aa("blue 50 50", "0 0 100"));
        assert!(!meets_wcag_aa_large_text("0 0 0", "10 50"));
    }

    #[test]
    fn srgb_to_linear_at_threshold() {
        let below = srgb_to_linear(0.03928);
        let above = srgb_to_linear(0.03929);
        assert!((below - above).abs() < 0.001);
    }

    #[test]
    fn wcag_checks_black_on_white() {
        assert!(meets_wcag_aa("0 0 0", "0 0 100"));
        assert!(meets_wcag_aaa("0 0 0", "0 0 100"));
        assert!(meets_wcag_aa_large_text("0 0 0", "0 0 100"));
        assert!(!meets_wcag_aa("0 0 50", "0 0 50"));
    }

    #[test]
    fn best_text_color_prefers_contrast() {
        let best = best_text_color("0 0 10", &["0 0 15", "0 0 95", "0 0 50"]);
        assert_eq!(best, Some("0 0 95"));
        assert_eq!(best_text_color("0 0 10", &[]), None);
    }

    #[test]
    fn best_text_color_skips_malformed_candidates() {
        assert_eq!(
            best_text_color("0 0 100", &["oops", "0 0 60", "0 0 0"]),
            Some("0 0 0")
        );
        assert_eq!(best_text_color("0 0 100", &["oops", "1 2"]), None);
        assert_eq!(best_text_color("white", &["0 0 0"]), None);
    }

    #[test]
    fn best_text_color_first_wins_ties() {
        assert_eq!(best_text_color("0 0 50", &["0 0 0", "0 0 0"]), Some("0 0 0"));
    }

    // ── hsl → hex ──────────────────────────────────────────────────────

    #[test]
    fn hsl_to_hex_primaries() {
        assert_eq!(hsl_to_hex("0 100 50"), "#ff0000");
        assert_eq!(hsl_to_hex("120 100 50"), "#00ff00");
        assert_eq!(hsl_to_hex("240 100 50"), "#0000ff");
        assert_eq!(hsl_to_hex("60 100 50"), "#ffff00");
        assert_eq!(hsl_to_hex("180 100 50"), "#00ffff");
        assert_eq!(hsl_to_hex("300 100 50"), "#ff00ff");
    }

    #[test]
    fn hsl_to_hex_grays_are_zero_padded() {
        assert_eq!(hsl_to_hex("0 0 0"), "#000000");
        assert_eq!(hsl_to_hex("0 0 100"), "#ffffff");
        assert_eq!(hsl_to_hex("0 0 2"), "#050505");
    }

    #[test]
    fn hsl_to_hex_wraps_hue() {
        assert_eq!(hsl_to_hex("360 100 50"), hsl_to_hex("0 100 50"));
        assert_eq!(hsl_to_hex("-120 100 50"), hsl_to_hex("240 100 50"));
    }

    #[test]
    fn hsl_to_hex_keeps_shape_for_malformed_input() {
        assert!(is_hex_shape(&hsl_to_hex("nope")));
        assert!(is_hex_shape(&hsl_to_hex("10 x 50")));
    }

    // ── hex → hsl ──────────────────────────────────────────────────────

    #[test]
    fn hex_to_hsl_gray_short_circuits() {
        assert_eq!(hex_to_hsl("#808080"), "0 0 50");
        assert_eq!(hex_to_hsl("#000000"), "0 0 0");
        assert_eq!(hex_to_hsl("#ffffff"), "0 0 100");
    }

    #[test]
    fn hex_to_hsl_primaries() {
        assert_eq!(hex_to_hsl("#ff0000"), "0 100 50");
        assert_eq!(hex_to_hsl("#00ff00"), "120 100 50");
        assert_eq!(hex_to_hsl("#0000ff"), "240 100 50");
    }

    #[test]
    fn hex_to_hsl_red_dominant_wraps_negative_hue() {
        // Red is max and blue > green: hue lands just under 360.
        assert_eq!(hex_to_hsl("#ff0080"), "330 100 50");
    }

    #[test]
    fn hex_to_hsl_accepts_missing_hash_and_upper_case() {
        assert_eq!(hex_to_hsl("3B82F6"), hex_to_hsl("#3b82f6"));
    }

    #[test]
    fn hex_to_hsl_malformed_is_nan() {
        assert_eq!(hex_to_hsl("#zz0000"), "NaN NaN NaN");
        assert_eq!(hex_to_hsl("#12"), "NaN NaN NaN");
    }

    #[test]
    fn round_trip_drifts_at_most_one() {
        for hsl in ["217 91 60", "142 71 45", "0 84 60", "48 96 53", "262 83 58"] {
            let back = components(&hex_to_hsl(&hsl_to_hex(hsl)));
            let orig = components(hsl);
            for (a, b) in back.iter().zip(orig) {
                assert!((a - b).abs() <= 1.0, "{hsl} came back as {back:?}");
            }
        }
    }

    // ── smart_invert ───────────────────────────────────────────────────

    #[test]
    fn smart_invert_keeps_saturation_above_threshold() {
        assert_eq!(smart_invert("0 50% 10%"), "0 50 90");
    }

    #[test]
    fn smart_invert_desaturates_dark_results() {
        assert_eq!(smart_invert("0 50% 95%"), "0 40 5");
    }

    #[test]
    fn smart_invert_threshold_is_exclusive() {
        // New lightness exactly 20 is not "below 20".
        assert_eq!(smart_invert("10 50 80"), "10 50 20");
    }

    #[test]
    fn smart_invert_preserves_fractional_hue() {
        let [h, _, _] = components(&smart_invert("222.2 47.4 11.2"));
        assert_eq!(h, 222.2);
    }

    #[test]
    fn smart_invert_does_not_round() {
        let [_, s, l] = components(&smart_invert("0 33 99"));
        assert_eq!(s, 33.0 * 0.8);
        assert_eq!(l, 1.0);
    }

    #[test]
    fn smart_invert_propagates_nan() {
        assert_eq!(smart_invert("x 50 10"), "NaN 50 90");
    }

    // ── typed layer ────────────────────────────────────────────────────

    #[test]
    fn hsl_parse_accepts_plain_and_percent_forms() {
        let a: Hsl = "210 40 98".parse().unwrap();
        let b: Hsl = "210 40% 98%".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Hsl::new(210.0, 40.0, 98.0));
    }

    #[test]
    fn hsl_parse_wraps_hue() {
        assert_eq!(Hsl::parse("-30 10 10").unwrap().hue, 330.0);
        assert_eq!(Hsl::parse("720 10 10").unwrap().hue, 0.0);
    }

    #[test]
    fn hsl_parse_rejects_wrong_token_count() {
        assert_eq!(
            Hsl::parse("1 2"),
            Err(ColorError::WrongTokenCount { found: 2 })
        );
        assert_eq!(
            Hsl::parse("1 2 3 4"),
            Err(ColorError::WrongTokenCount { found: 4 })
        );
    }

    #[test]
    fn hsl_parse_rejects_non_numeric() {
        assert_eq!(
            Hsl::parse("10 abc 50"),
            Err(ColorError::InvalidComponent {
                component: Component::Saturation,
                token: "abc".to_string(),
            })
        );
        assert!(matches!(
            Hsl::parse("10% 10 50"),
            Err(ColorError::InvalidComponent {
                component: Component::Hue,
                ..
            })
        ));
        assert!(Hsl::parse("NaN 10 10").is_err());
        assert!(Hsl::parse("inf 10 10").is_err());
    }

    #[test]
    fn hsl_parse_rejects_out_of_range() {
        assert_eq!(
            Hsl::parse("10 50 101"),
            Err(ColorError::OutOfRange {
                component: Component::Lightness,
                value: 101.0,
            })
        );
        assert!(Hsl::parse("10 -1 50").is_err());
    }

    #[test]
    fn hsl_display_matches_string_form() {
        assert_eq!(Hsl::new(0.0, 40.0, 5.0).to_string(), "0 40 5");
        assert_eq!(
            Hsl::parse("0 50 95").unwrap().smart_invert().to_string(),
            smart_invert("0 50 95")
        );
    }

    #[test]
    fn typed_and_string_layers_agree() {
        let hsl = Hsl::parse("217 91 60").unwrap();
        assert_eq!(hsl.to_hex(), hsl_to_hex("217 91 60"));
        assert_eq!(hsl.relative_luminance(), relative_luminance("217 91 60"));
        let back = Rgb::from_hex(&hsl.to_hex()).unwrap().to_hsl();
        assert_eq!(back.to_string(), hex_to_hsl(&hsl.to_hex()));
    }

    #[test]
    fn rgb_from_hex_strict() {
        assert_eq!(Rgb::from_hex("#0a0B0c"), Ok(Rgb::new(10, 11, 12)));
        assert_eq!(Rgb::from_hex("0a0b0c"), Ok(Rgb::new(10, 11, 12)));
        for bad in ["#fff", "#12345g", "", "#1234567", "#+f0000"] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(ColorError::InvalidHex {
                    input: bad.to_string()
                }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rgb_display_is_lowercase_hex() {
        assert_eq!(Rgb::new(255, 171, 0).to_string(), "#ffab00");
    }

    #[test]
    fn conversions_via_from() {
        let rgb: Rgb = Hsl::new(0.0, 100.0, 50.0).into();
        assert_eq!(rgb, Rgb::new(255, 0, 0));
        let hsl: Hsl = rgb.into();
        assert_eq!(hsl, Hsl::new(0.0, 100.0, 50.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn hsl_serde_uses_string_form() {
        let hsl = Hsl::new(210.0, 40.0, 98.0);
        let json = serde_json::to_string(&hsl).unwrap();
        assert_eq!(json, r#""210 40 98""#);
        assert_eq!(serde_json::from_str::<Hsl>(&json).unwrap(), hsl);
        assert_eq!(serde_json::from_str::<Hsl>(r#""210 40% 98%""#).unwrap(), hsl);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rgb_serde_uses_lowercase_hex() {
        let rgb: Rgb = serde_json::from_str(r##""#3B82F6""##).unwrap();
        assert_eq!(rgb, Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(serde_json::to_string(&rgb).unwrap(), r##""#3b82f6""##);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_malformed_strings() {
        let err = serde_json::from_str::<Hsl>(r#""210 forty 98""#).unwrap_err();
        assert!(err.to_string().contains("saturation"), "{err}");
        assert!(serde_json::from_str::<Hsl>(r#""0 0 140""#).is_err());
        assert!(serde_json::from_str::<Rgb>(r##""#12345""##).is_err());
        assert!(serde_json::from_str::<Rgb>("42").is_err());
    }

    #[test]
    fn color_error_messages() {
        let err = ColorError::OutOfRange {
            component: Component::Saturation,
            value: 120.0,
        };
        assert_eq!(err.to_string(), "saturation 120 is outside 0..=100");
        let err = ColorError::WrongTokenCount { found: 1 };
        assert_eq!(err.to_string(), "expected 3 color components, found 1");
    }
}
