use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACADEMY_NAME, DEFAULT_FADE_TRANSITION, DEFAULT_LOOP, DEFAULT_SHUFFLE,
    DEFAULT_TIMEZONE,
};

/// Raw academy configuration record as stored in the config table.
///
/// Every field is optional; `AcademyRecord::default()` is the empty record used
/// when the lookup is disabled or finds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademyRecord {
    #[serde(default)]
    pub interval: Option<i64>,
    #[serde(default)]
    pub shuffle: Option<bool>,
    #[serde(default, rename = "loop")]
    pub loop_playback: Option<bool>,
    #[serde(default)]
    pub fade_transition: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Display-loop settings sent to a signage screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistConfig {
    pub interval: i64,
    pub shuffle: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub fade_transition: bool,
    pub academy_name: String,
    pub timezone: String,
}

impl PlaylistConfig {
    /// Resolve a stored record against the defaults, field by field.
    pub fn resolve(record: &AcademyRecord, default_interval_seconds: i64) -> Self {
        Self {
            interval: record.interval.unwrap_or(default_interval_seconds),
            shuffle: record.shuffle.unwrap_or(DEFAULT_SHUFFLE),
            loop_playback: record.loop_playback.unwrap_or(DEFAULT_LOOP),
            fade_transition: record.fade_transition.unwrap_or(DEFAULT_FADE_TRANSITION),
            academy_name: record
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_ACADEMY_NAME.to_string()),
            timezone: record
                .timezone
                .clone()
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_resolves_to_defaults() {
        let config = PlaylistConfig::resolve(&AcademyRecord::default(), 10);
        assert_eq!(config.interval, 10);
        assert!(config.shuffle);
        assert!(config.loop_playback);
        assert!(config.fade_transition);
        assert_eq!(config.academy_name, "Academia");
        assert_eq!(config.timezone, "America/Sao_Paulo");
    }

    #[test]
    fn test_partial_record_overrides_only_present_fields() {
        let record = AcademyRecord {
            interval: Some(30),
            shuffle: Some(false),
            ..Default::default()
        };
        let config = PlaylistConfig::resolve(&record, 10);
        assert_eq!(config.interval, 30);
        assert!(!config.shuffle);
        assert!(config.loop_playback);
        assert!(config.fade_transition);
        assert_eq!(config.academy_name, "Academia");
        assert_eq!(config.timezone, "America/Sao_Paulo");
    }

    #[test]
    fn test_record_name_becomes_academy_name() {
        let record: AcademyRecord = serde_json::from_value(serde_json::json!({
            "name": "Iron Gym",
            "loop": false,
            "timezone": "America/Manaus"
        }))
        .unwrap();
        let config = PlaylistConfig::resolve(&record, 12);
        assert_eq!(config.interval, 12);
        assert_eq!(config.academy_name, "Iron Gym");
        assert!(!config.loop_playback);
        assert_eq!(config.timezone, "America/Manaus");

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["loop"], false);
        assert!(json.get("loop_playback").is_none());
    }
}
