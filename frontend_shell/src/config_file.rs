use gloo::console::error;
use serde::Deserialize;
use thiserror::Error;
use web_sys::Element;

/// Settings embedded in the host page as
/// `<meta name="shell-config" content="{...}">`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Id of the element to mount into. The document body when unset.
    pub root_id: Option<String>,
    /// Write a console line on every navigation.
    pub log_navigation: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse shell config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("mount element #{0} not found")]
    MissingRoot(String),
}

const CONFIG_META: &str = r#"meta[name="shell-config"]"#;

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn root_element(&self) -> Result<Option<Element>, ConfigError> {
        let Some(id) = self.root_id.as_deref() else {
            return Ok(None);
        };

        gloo::utils::document()
            .get_element_by_id(id)
            .map(Some)
            .ok_or_else(|| ConfigError::MissingRoot(id.to_owned()))
    }
}

/// Reads the config meta tag. A missing tag yields the defaults; a malformed
/// one is logged and also yields the defaults.
pub fn load_config() -> ShellConfig {
    let raw = gloo::utils::document()
        .query_selector(CONFIG_META)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));

    let Some(raw) = raw else {
        return ShellConfig::default();
    };

    match ShellConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            error!(e.to_string());
            ShellConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = ShellConfig::from_json("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.root_id, None);
        assert!(!config.log_navigation);
    }

    #[test]
    fn reads_all_fields() {
        let config =
            ShellConfig::from_json(r#"{"root_id": "app", "log_navigation": true}"#).unwrap();
        assert_eq!(config.root_id.as_deref(), Some("app"));
        assert!(config.log_navigation);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = ShellConfig::from_json(r#"{"basename": "/shell"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ShellConfig::from_json("{root_id").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse shell config"));
    }

    #[test]
    fn missing_root_names_the_element() {
        let err = ConfigError::MissingRoot("app".to_owned());
        assert_eq!(err.to_string(), "mount element #app not found");
    }
}
