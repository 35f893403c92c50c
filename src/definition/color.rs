use crate::foundation::core::Color;
use serde::{Deserialize, Serialize};

/// JSON color definition.
///
/// Accepted forms: `"#RRGGBB"`, `"#RRGGBBAA"`, `{"r","g","b","a"?}`, `{"h","s","l","a"?}`,
/// `[r, g, b]` and `[r, g, b, a]`, with normalized `0..1` channels (hue in degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDef {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl ColorDef {
    /// Build from normalized channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// `true` when every channel is finite.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl From<ColorDef> for Color {
    fn from(def: ColorDef) -> Self {
        Color::new(def.r as f32, def.g as f32, def.b as f32, def.a as f32)
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HslaObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::HslaObj { h, s, l, a } => Ok(hsla_to_rgba(h, s, l, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<ColorDef, String> {
    let digits = s.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!(
            "invalid hex color \"{s}\", expected #RRGGBB or #RRGGBBAA"
        ));
    }

    // Alpha stays opaque when only three channels are given.
    let mut channels = [1.0_f64; 4];
    for (channel, pair) in channels.iter_mut().zip(digits.as_bytes().chunks(2)) {
        let byte = (nibble(pair[0]) << 4) | nibble(pair[1]);
        *channel = f64::from(byte) / 255.0;
    }
    let [r, g, b, a] = channels;
    Ok(ColorDef::rgba(r, g, b, a))
}

/// Value of one ASCII hex digit.
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

/// Hue in degrees, saturation and lightness in `0..1`.
fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> ColorDef {
    let sector = h.rem_euclid(360.0) / 60.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let second = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };
    let lift = l - chroma / 2.0;
    ColorDef::rgba(r + lift, g + lift, b + lift, a)
}

#[cfg(test)]
#[path = "../../tests/unit/definition/color.rs"]
mod tests;
