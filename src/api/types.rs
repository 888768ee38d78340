//! API model types and fetch result enums.

use geo_types::Coord;
use serde::Deserialize;

/// A single logged dive as served by the backend.
///
/// Measurement fields are optional because the backend schema allows them
/// to be NULL; records missing coordinates are skipped by the map rather
/// than rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Dive {
    pub id: i64,
    pub dive_number: i64,
    /// ISO calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub location: String,
    pub dive_site: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub max_depth: Option<f64>,
    pub duration: Option<f64>,
    pub water_temp: Option<f64>,
    pub visibility: Option<f64>,
    pub notes: Option<String>,
}

impl Dive {
    /// Geographic position as (lon, lat), or `None` if either coordinate
    /// is missing.
    pub fn coord(&self) -> Option<Coord<f64>> {
        Some(Coord {
            x: self.longitude?,
            y: self.latitude?,
        })
    }

    /// Formats the dive date for display (e.g., "June 15, 2023"), falling
    /// back to the raw string if it does not parse.
    pub fn formatted_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }

    /// Notes text, treating an empty string the same as absent.
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// Summary statistics for the whole log.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DiveStats {
    pub total_dives: f64,
    pub total_dive_time: f64,
    pub max_depth: f64,
    pub locations: f64,
}

/// Result of a dive list fetch.
#[derive(Debug, Clone)]
pub enum DiveListResult {
    Success(Vec<Dive>),
    Error(String),
}

/// Result of a single-dive detail fetch.
#[derive(Debug, Clone)]
pub enum DiveDetailResult {
    Success(Box<Dive>),
    Error(String),
}

/// Result of a stats fetch.
#[derive(Debug, Clone)]
pub enum StatsResult {
    Success(DiveStats),
    Error(String),
}
