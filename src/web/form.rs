use crate::models::{Creativity, EventDetails, TIMESTAMP_FORMAT};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use thiserror::Error;

/// Default start time shown in the form
pub const DEFAULT_START_TIME: &str = "09:00";
/// Default end time shown in the form
pub const DEFAULT_END_TIME: &str = "17:00";

/// Raw values posted by the event form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventForm {
    pub name: String,
    pub venue: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
    pub description: String,
    pub category: String,
    pub involvement: String,
    pub additional_details: String,
    pub creativity: String,
}

/// Form values that could not be turned into event details
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid date for {field}: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid time for {field}: '{value}'")]
    InvalidTime { field: &'static str, value: String },

    #[error("Invalid creativity level: '{0}'")]
    InvalidCreativity(String),
}

impl EventForm {
    /// Empty form with today's date and the default times filled in
    pub fn with_defaults(today: NaiveDate) -> Self {
        let date = today.format("%Y-%m-%d").to_string();
        Self {
            start_date: date.clone(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_date: date,
            end_time: DEFAULT_END_TIME.to_string(),
            creativity: Creativity::DEFAULT.to_string(),
            ..Default::default()
        }
    }

    /// Creativity value for the slider, falling back to the default
    pub fn creativity_level(&self) -> u8 {
        parse_creativity(&self.creativity)
            .map(Creativity::level)
            .unwrap_or(Creativity::DEFAULT)
    }

    /// Assemble the event record and creativity level.
    ///
    /// Text fields are passed through untouched, empty strings included.
    pub fn to_details(&self) -> Result<(EventDetails, Creativity), FormError> {
        let start = combine("start", &self.start_date, &self.start_time)?;
        let end = combine("end", &self.end_date, &self.end_time)?;
        let creativity = parse_creativity(&self.creativity)?;

        let details = EventDetails {
            name: self.name.clone(),
            venue: self.venue.clone(),
            start_date_time: start.format(TIMESTAMP_FORMAT).to_string(),
            end_date_time: end.format(TIMESTAMP_FORMAT).to_string(),
            description: self.description.clone(),
            category: self.category.clone(),
            involvement: self.involvement.clone(),
            additional_details: self.additional_details.clone(),
        };

        Ok((details, creativity))
    }
}

/// Combine separate date and time inputs into one timestamp
fn combine(field: &'static str, date: &str, time: &str) -> Result<NaiveDateTime, FormError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        FormError::InvalidDate {
            field,
            value: date.to_string(),
        }
    })?;

    // Browsers send HH:MM, or HH:MM:SS when a seconds step is set
    let trimmed = time.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| FormError::InvalidTime {
            field,
            value: time.to_string(),
        })?;

    Ok(date.and_time(time))
}

/// Missing values use the default, values above 100 are clamped
fn parse_creativity(value: &str) -> Result<Creativity, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Creativity::default());
    }

    value
        .parse::<u32>()
        .map(|level| Creativity::new(level.min(u32::from(Creativity::MAX)) as u8))
        .map_err(|_| FormError::InvalidCreativity(value.to_string()))
}
