use rand::Rng;

use crate::error::{ChartError, ChartResult};

/// 8-bit RGB color carried through settings, data points, and primitives.
///
/// Serializes as a hex string (`"#rrggbb"`) so settings trees stay readable
/// and overrides can be written the way web-style chart configs are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);

        let expanded: String;
        let digits = match digits.len() {
            3 => {
                expanded = digits.chars().flat_map(|c| [c, c]).collect();
                expanded.as_str()
            }
            6 => digits,
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "color `{input}` must be a 3- or 6-digit hex value"
                )));
            }
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                ChartError::InvalidData(format!("color `{input}` contains non-hex digits"))
            })
        };

        Ok(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Shifts every channel by `delta`, clamping to the valid range.
    ///
    /// Positive deltas lighten, negative darken. Hover feedback feeds the
    /// eased hover magnitude straight in here.
    #[must_use]
    pub fn with_tone(self, delta: f64) -> Self {
        let shift = |channel: u8| (f64::from(channel) + delta).clamp(0.0, 255.0).round() as u8;
        Self {
            red: shift(self.red),
            green: shift(self.green),
            blue: shift(self.blue),
        }
    }

    /// Channel-wise mean of a set of colors; black for an empty slice.
    ///
    /// Used to blend funnel band seams with their vertical neighbors.
    #[must_use]
    pub fn average(colors: &[Color]) -> Self {
        if colors.is_empty() {
            return Self::rgb(0, 0, 0);
        }

        let count = colors.len() as f64;
        let mean = |pick: fn(&Color) -> u8| {
            (colors.iter().map(|c| f64::from(pick(c))).sum::<f64>() / count).round() as u8
        };
        Self {
            red: mean(|c| c.red),
            green: mean(|c| c.green),
            blue: mean(|c| c.blue),
        }
    }

    /// Random opaque color for data entries supplied without one.
    #[must_use]
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            red: rng.gen_range(0..=255),
            green: rng.gen_range(0..=255),
            blue: rng.gen_range(0..=255),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
