//! Lookup tables from provider codes to the Japanese phrases used in speech.

/// Sky/precipitation state, bucketed from the provider's numeric condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Condition {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Mist,
    Clear,
    Clouds,
    Abnormal,
}

impl Condition {
    /// Half-open range bucketing over the provider's condition groups.
    pub fn from_code(code: i64) -> Self {
        match code {
            200..300 => Self::Thunderstorm,
            300..400 => Self::Drizzle,
            500..600 => Self::Rain,
            600..700 => Self::Snow,
            700..800 => Self::Mist,
            800 => Self::Clear,
            801..900 => Self::Clouds,
            _ => Self::Abnormal,
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Self::Thunderstorm => "雷雨",
            Self::Drizzle => "霧雨",
            Self::Rain => "雨",
            Self::Snow => "雪",
            Self::Mist => "霧",
            Self::Clear => "快晴",
            Self::Clouds => "曇り",
            Self::Abnormal => "異常気象",
        }
    }
}

pub fn condition_phrase(code: i64) -> &'static str {
    Condition::from_code(code).phrase()
}

/// Sixteen-point compass, North first, clockwise in 22.5° steps.
pub const COMPASS_POINTS: [&str; 16] = [
    "北", "北北東", "北東", "東北東", "東", "東南東", "南東", "南南東", "南", "南南西", "南西",
    "西南西", "西", "西北西", "北西", "北北西",
];

const SECTOR_DEGREES: f64 = 22.5;

/// Compass label for a wind azimuth in degrees.
///
/// The azimuth is normalized into `[0, 360)` first, so 360° and -90° resolve
/// like 0° and 270°. Sector boundaries round half-up: 11.25° is already
/// North-Northeast.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wind_direction(degree: f64) -> &'static str {
    if !degree.is_finite() {
        return COMPASS_POINTS[0];
    }
    let normalized = degree.rem_euclid(360.0);
    let index = (normalized / SECTOR_DEGREES + 0.5).floor() as usize;
    COMPASS_POINTS[index % COMPASS_POINTS.len()]
}
