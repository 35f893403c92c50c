use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of SI seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

const UNIX_EPOCH_DAY_NUMBER: i64 = 2_440_587;
const UNIX_EPOCH_SECONDS_OF_DAY: f64 = 43_200.0;

/// A time instant expressed as a Julian day number plus seconds into that day.
///
/// Julian days start at noon, so `seconds_of_day == 0.0` is 12:00. Values are kept normalized with
/// `0 <= seconds_of_day < 86400`, which makes the derived field-wise comparison a chronological
/// one. Deserialization goes through [`JulianDate::new`], and `secondsOfDay` may be omitted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", from = "RawJulianDate")]
pub struct JulianDate {
    /// Whole Julian day number.
    pub day_number: i64,
    /// Seconds elapsed since the start (noon) of `day_number`.
    pub seconds_of_day: f64,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawJulianDate {
    day_number: i64,
    #[serde(default)]
    seconds_of_day: f64,
}

impl From<RawJulianDate> for JulianDate {
    fn from(raw: RawJulianDate) -> Self {
        Self::new(raw.day_number, raw.seconds_of_day)
    }
}

impl JulianDate {
    /// The J2000 epoch, 2000-01-01 12:00.
    pub const J2000: Self = Self {
        day_number: 2_451_545,
        seconds_of_day: 0.0,
    };

    /// Build a normalized date.
    ///
    /// Seconds outside `[0, 86400)` carry into the day number. Non-finite seconds collapse to `0`.
    pub fn new(day_number: i64, seconds_of_day: f64) -> Self {
        if !seconds_of_day.is_finite() {
            return Self {
                day_number,
                seconds_of_day: 0.0,
            };
        }

        let carry = (seconds_of_day / SECONDS_PER_DAY).floor();
        let mut day_number = day_number.saturating_add(carry as i64);
        let mut seconds = seconds_of_day - carry * SECONDS_PER_DAY;
        // Rounding in the subtraction can land exactly on the day boundary.
        if seconds >= SECONDS_PER_DAY {
            day_number = day_number.saturating_add(1);
            seconds -= SECONDS_PER_DAY;
        }
        Self {
            day_number,
            seconds_of_day: seconds.max(0.0),
        }
    }

    /// Date corresponding to `secs` seconds since the Unix epoch.
    pub fn from_unix_seconds(secs: f64) -> Self {
        Self::new(UNIX_EPOCH_DAY_NUMBER, UNIX_EPOCH_SECONDS_OF_DAY + secs)
    }

    /// Current system time.
    pub fn now() -> Self {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => d.as_secs_f64(),
            Err(e) => -e.duration().as_secs_f64(),
        };
        Self::from_unix_seconds(secs)
    }

    /// Return a new date offset by `secs` seconds.
    pub fn add_seconds(self, secs: f64) -> Self {
        Self::new(self.day_number, self.seconds_of_day + secs)
    }

    /// Seconds from `other` to `self` (`self - other`).
    pub fn seconds_difference(self, other: Self) -> f64 {
        let days = (self.day_number - other.day_number) as f64;
        days * SECONDS_PER_DAY + (self.seconds_of_day - other.seconds_of_day)
    }

    /// Fractional Julian day count.
    pub fn total_days(self) -> f64 {
        self.day_number as f64 + self.seconds_of_day / SECONDS_PER_DAY
    }
}

impl Default for JulianDate {
    fn default() -> Self {
        Self::J2000
    }
}

impl PartialOrd for JulianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.day_number.cmp(&other.day_number) {
            Ordering::Equal => self.seconds_of_day.partial_cmp(&other.seconds_of_day),
            ord => Some(ord),
        }
    }
}

/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
    /// Alpha channel.
    pub alpha: f32,
}

impl Color {
    /// `#FFFFFF`
    pub const WHITE: Self = Self::from_bytes(255, 255, 255, 255);
    /// `#000000`
    pub const BLACK: Self = Self::from_bytes(0, 0, 0, 255);
    /// `#FF0000`
    pub const RED: Self = Self::from_bytes(255, 0, 0, 255);
    /// `#008000`
    pub const GREEN: Self = Self::from_bytes(0, 128, 0, 255);
    /// `#0000FF`
    pub const BLUE: Self = Self::from_bytes(0, 0, 255, 255);
    /// `#FFFF00`
    pub const YELLOW: Self = Self::from_bytes(255, 255, 0, 255);
    /// `#A52A2A`
    pub const BROWN: Self = Self::from_bytes(165, 42, 42, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::from_bytes(0, 0, 0, 0);

    /// Create a color from normalized channels.
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a color from 8-bit channels.
    pub const fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Convert to 8-bit channels, clamping into range.
    pub fn to_bytes(self) -> [u8; 4] {
        fn to_u8(x: f32) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        [
            to_u8(self.red),
            to_u8(self.green),
            to_u8(self.blue),
            to_u8(self.alpha),
        ]
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Channel-wise comparison within `epsilon`.
    pub fn equals_epsilon(self, other: Self, epsilon: f32) -> bool {
        (self.red - other.red).abs() <= epsilon
            && (self.green - other.green).abs() <= epsilon
            && (self.blue - other.blue).abs() <= epsilon
            && (self.alpha - other.alpha).abs() <= epsilon
    }

    /// `true` when every channel is finite.
    pub fn is_finite(self) -> bool {
        self.red.is_finite()
            && self.green.is_finite()
            && self.blue.is_finite()
            && self.alpha.is_finite()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
