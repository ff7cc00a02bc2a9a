use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Athlete as returned by `GET /athlete` and inside token responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SummaryAthlete {
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub profile_medium: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
}

impl SummaryAthlete {
    pub fn display_name(&self) -> String {
        match (&self.firstname, &self.lastname) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self
                .username
                .clone()
                .unwrap_or_else(|| format!("athlete {}", self.id)),
        }
    }
}

/// Activity as listed by `GET /athlete/activities`
///
/// Distances are in meters, times in seconds, speeds in meters per second.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummaryActivity {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub activity_type: String,
    #[serde(default)]
    pub sport_type: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub start_date_local: Option<String>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: u64,
    #[serde(default)]
    pub elapsed_time: u64,
    #[serde(default)]
    pub total_elevation_gain: Option<f64>,
    #[serde(default)]
    pub average_speed: Option<f64>,
    #[serde(default)]
    pub max_speed: Option<f64>,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub max_heartrate: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
}

impl SummaryActivity {
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }

    pub fn moving_time_hours(&self) -> f64 {
        self.moving_time as f64 / 3600.0
    }
}
