use serde::{Deserialize, Serialize};

/// Format used for the combined start and end timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Details of a single event, collected from the form for one generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    /// Event name
    pub name: String,
    /// Where the event took place
    pub venue: String,
    /// Start date and time (YYYY-MM-DD HH:MM:SS)
    pub start_date_time: String,
    /// End date and time (YYYY-MM-DD HH:MM:SS)
    pub end_date_time: String,
    /// Free-text description of the event
    pub description: String,
    /// Event category, e.g. Technology
    pub category: String,
    /// The user's role or contribution
    pub involvement: String,
    /// Optional extra notes, empty when not given
    pub additional_details: String,
}

/// AI creativity level from 0 to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creativity(u8);

impl Creativity {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 50;

    /// Create a creativity level, clamping anything above the maximum
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Sampling temperature in the 0.0..=1.0 range
    pub fn temperature(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl Default for Creativity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<u8> for Creativity {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}
