//! Data models for establishment loading
//!
//! This module contains the core data structures for representing physical
//! establishments, including geographic coordinates and per-hour opening
//! status, with all validation applied at construction time.

use crate::loader::TabularRecord;
use crate::render::FieldMap;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of opening-hours slots, one per hour of the day
pub const HOURS_PER_DAY: usize = 24;

// =============================================================================
// Coordinates
// =============================================================================

/// Geographic position in WGS84 decimal degrees
///
/// Bounds are enforced once, at construction; a `Coordinates` value is
/// always within range after that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, -90 to 90
    pub latitude: f64,

    /// Longitude in decimal degrees, -180 to 180
    pub longitude: f64,
}

impl Coordinates {
    /// Create a new coordinate pair with range validation
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::validation(format!(
                "Invalid latitude {}: must be between -90 and 90 degrees",
                latitude
            )));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::validation(format!(
                "Invalid longitude {}: must be between -180 and 180 degrees",
                longitude
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

// =============================================================================
// Opening Hours
// =============================================================================

/// Fixed 24-slot open/closed vector, one slot per hour of the day
///
/// Each slot is 0 (closed) or 1 (open). Two textual encodings are accepted
/// by [`FromStr`], both mapping to the same internal representation:
/// a bare string of 24 digit characters (`"0111...0"`), or a bracketed
/// comma-space-separated list of 24 tokens (`"[0, 1, 1, ...]"`). No other
/// shape is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours([u8; HOURS_PER_DAY]);

impl OpeningHours {
    /// Create an opening-hours vector, validating that every slot is 0 or 1
    pub fn new(slots: [u8; HOURS_PER_DAY]) -> Result<Self> {
        for (hour, slot) in slots.iter().enumerate() {
            if *slot > 1 {
                return Err(Error::validation(format!(
                    "Invalid opening-hours slot {} at hour {}: must be 0 (closed) or 1 (open)",
                    slot, hour
                )));
            }
        }
        Ok(Self(slots))
    }

    /// Get the raw slot values
    pub fn slots(&self) -> &[u8; HOURS_PER_DAY] {
        &self.0
    }

    /// Check whether the establishment is open during the given hour (0-23)
    pub fn is_open(&self, hour: usize) -> bool {
        self.0.get(hour).is_some_and(|slot| *slot == 1)
    }

    /// Count the hours of the day during which the establishment is open
    pub fn open_hour_count(&self) -> usize {
        self.0.iter().filter(|slot| **slot == 1).count()
    }
}

impl FromStr for OpeningHours {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut slots = [0u8; HOURS_PER_DAY];

        if let Some(inner) = trimmed.strip_prefix('[') {
            // Bracketed list form: "[0, 1, 1, ...]"
            let inner = inner.strip_suffix(']').ok_or_else(|| {
                Error::field_format("opening_hours", s, "a closing ']' on a bracketed list")
            })?;

            let tokens: Vec<&str> = inner.split(", ").collect();
            if tokens.len() != HOURS_PER_DAY {
                return Err(Error::field_format(
                    "opening_hours",
                    s,
                    format!("exactly {} slots, got {}", HOURS_PER_DAY, tokens.len()),
                ));
            }

            for (slot, token) in slots.iter_mut().zip(&tokens) {
                *slot = match *token {
                    "0" => 0,
                    "1" => 1,
                    other => {
                        return Err(Error::validation(format!(
                            "Invalid opening-hours token '{}': must be '0' (closed) or '1' (open)",
                            other
                        )));
                    }
                };
            }
        } else {
            // Bare digit-string form: "011100...", one slot per character
            let char_count = trimmed.chars().count();
            if char_count != HOURS_PER_DAY {
                return Err(Error::field_format(
                    "opening_hours",
                    s,
                    format!("exactly {} digits, got {}", HOURS_PER_DAY, char_count),
                ));
            }

            for (slot, ch) in slots.iter_mut().zip(trimmed.chars()) {
                *slot = match ch {
                    '0' => 0,
                    '1' => 1,
                    other => {
                        return Err(Error::validation(format!(
                            "Invalid opening-hours token '{}': must be '0' (closed) or '1' (open)",
                            other
                        )));
                    }
                };
            }
        }

        Ok(Self(slots))
    }
}

impl fmt::Display for OpeningHours {
    /// Renders the bracketed list form, re-parseable by [`FromStr`]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens: Vec<String> = self.0.iter().map(u8::to_string).collect();
        write!(f, "[{}]", tokens.join(", "))
    }
}

// =============================================================================
// Establishment Record
// =============================================================================

/// One physical establishment, fully validated at construction
///
/// Records are immutable value objects: all coercion and validation happens
/// in [`Establishment::from_fields`], and no component mutates a record
/// afterwards. Identifier uniqueness is not enforced here; duplicate ids in
/// a source pass through silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    /// Identifier, unique per source
    pub id: i32,

    /// District where the establishment is located
    pub district: String,

    /// County where the establishment is located
    pub county: String,

    /// Parish where the establishment is located
    pub parish: String,

    /// Physical address, free-form
    pub address: String,

    /// Geographic position, bounds-checked
    pub coords: Coordinates,

    /// Priority/weight of inspecting this establishment, unconstrained
    pub inspection_utility: f64,

    /// Inspection duration in minutes, unconstrained
    pub inspection_time: i32,

    /// Per-hour open/closed status
    pub opening_hours: OpeningHours,
}

impl Establishment {
    /// Construct a record from raw textual fields, in source column order
    ///
    /// Coerces and validates every field in one atomic step; there is no
    /// partially-valid intermediate state. Textual fields pass through
    /// unmodified.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        id: &str,
        district: &str,
        county: &str,
        parish: &str,
        address: &str,
        latitude: &str,
        longitude: &str,
        inspection_utility: &str,
        inspection_time: &str,
        opening_hours: &str,
    ) -> Result<Self> {
        let id = parse_i32_field("id", id)?;

        let latitude = parse_f64_field("latitude", latitude)?;
        let longitude = parse_f64_field("longitude", longitude)?;
        let coords = Coordinates::new(latitude, longitude)?;

        let inspection_utility = parse_f64_field("inspection_utility", inspection_utility)?;
        let inspection_time = parse_i32_field("inspection_time", inspection_time)?;

        let opening_hours = opening_hours.parse()?;

        Ok(Self {
            id,
            district: district.to_string(),
            county: county.to_string(),
            parish: parish.to_string(),
            address: address.to_string(),
            coords,
            inspection_utility,
            inspection_time,
            opening_hours,
        })
    }

    /// Get the location as a (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.coords.latitude, self.coords.longitude)
    }
}

impl TabularRecord for Establishment {
    const FIELD_NAMES: &'static [&'static str] = &[
        "id",
        "district",
        "county",
        "parish",
        "address",
        "latitude",
        "longitude",
        "inspection_utility",
        "inspection_time",
        "opening_hours",
    ];

    fn from_row(fields: &[&str]) -> Result<Self> {
        let [
            id,
            district,
            county,
            parish,
            address,
            latitude,
            longitude,
            inspection_utility,
            inspection_time,
            opening_hours,
        ] = fields
        else {
            return Err(Error::row_arity(Self::FIELD_NAMES.len(), fields.len()));
        };

        Self::from_fields(
            id,
            district,
            county,
            parish,
            address,
            latitude,
            longitude,
            inspection_utility,
            inspection_time,
            opening_hours,
        )
    }
}

impl FieldMap for Establishment {
    fn type_name(&self) -> &'static str {
        "Establishment"
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.to_string()),
            ("district", self.district.clone()),
            ("county", self.county.clone()),
            ("parish", self.parish.clone()),
            ("address", self.address.clone()),
            ("latitude", self.coords.latitude.to_string()),
            ("longitude", self.coords.longitude.to_string()),
            ("inspection_utility", self.inspection_utility.to_string()),
            ("inspection_time", self.inspection_time.to_string()),
            ("opening_hours", self.opening_hours.to_string()),
        ]
    }
}

// =============================================================================
// Field coercion helpers
// =============================================================================

fn parse_i32_field(field: &'static str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::field_format(field, value, "an integer"))
}

fn parse_f64_field(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::field_format(field, value, "a decimal number"))
}
