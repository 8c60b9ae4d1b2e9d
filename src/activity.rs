use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time within a single day, minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Returns `None` unless `hour` is in 0..=23 and `minute` in 0..=59.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Minutes since midnight, 0..=1439.
    pub fn total_minutes(self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Fractional hours since midnight, e.g. 09:30 -> 9.5.
    pub fn as_hours(self) -> f32 {
        self.hour as f32 + self.minute as f32 / 60.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// 24-bit color, stored on disk as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}: expected #RRGGBB or #RGB")]
pub struct ColorParseError(pub String);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_color(self) -> iced::Color {
        iced::Color::from_rgb8(self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
                Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
            }
            // Short form: each nibble is doubled, so #fa0 == #FFAA00.
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|n| n * 17)
                        .map_err(|_| err())
                };
                Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One time-blocked entry of the day plan.
///
/// `end` earlier than `start` means the block runs past midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub description: String,
    pub color: Rgb,
}

impl Activity {
    pub fn start_minutes(&self) -> u16 {
        self.start.total_minutes()
    }

    pub fn end_minutes(&self) -> u16 {
        self.end.total_minutes()
    }

    /// Length in minutes, wrapping past midnight. A block whose start and end
    /// coincide (only possible for loaded data) counts as a full day.
    pub fn duration_minutes(&self) -> u16 {
        let diff = (self.end_minutes() as i32 - self.start_minutes() as i32)
            .rem_euclid(MINUTES_PER_DAY as i32) as u16;
        if diff == 0 { MINUTES_PER_DAY } else { diff }
    }

    /// Row text for the schedule list, e.g. `08:00 - 09:00 : Gym`.
    pub fn display_text(&self) -> String {
        format!("{} - {} : {}", self.start, self.end, self.description)
    }
}
