//! Runtime configuration embedded in the host page.
//!
//! `index.html` may carry a `<script id="mediplant-config" type="application/json">`
//! element. Missing fields fall back to their defaults.

use std::time::Duration;

use serde::Deserialize;

use crate::error::MediPlantError;

pub const CONFIG_ELEMENT_ID: &str = "mediplant-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How long the simulated analysis takes.
    pub analysis_delay_ms: u32,
    /// `EnvFilter` directive, e.g. "info" or "mediplant=debug".
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 2500,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, MediPlantError> {
        serde_json::from_str(json).map_err(|e| MediPlantError::Config(e.to_string()))
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.analysis_delay_ms))
    }

    /// Read the config element from the current document.
    ///
    /// Runs before logging is set up, so problems go straight to the console.
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("{}; using defaults", e).into());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.analysis_delay_ms, 2500);
        assert_eq!(config.analysis_delay(), Duration::from_millis(2500));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"analysis_delay_ms": 10}"#).unwrap();
        assert_eq!(config.analysis_delay_ms, 10);
        assert_eq!(config.log_level, "info");

        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_full_json() {
        let config =
            AppConfig::from_json(r#"{"analysis_delay_ms": 500, "log_level": "mediplant=debug"}"#)
                .unwrap();
        assert_eq!(config.analysis_delay_ms, 500);
        assert_eq!(config.log_level, "mediplant=debug");
    }

    #[test]
    fn test_invalid_json() {
        let err = AppConfig::from_json(r#"{"analysis_delay_ms": "soon"}"#).unwrap_err();
        assert!(matches!(err, MediPlantError::Config(_)));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
