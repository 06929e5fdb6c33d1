use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::LanguageCode;

pub const CONFIG_FILE_NAME: &str = ".lokalrc.json";

/// Directory under the user config dir holding the preference file.
pub const APP_DIR_NAME: &str = "lokal";

pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default = "default_default_language")]
    pub default_language: String,
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
    /// Preference file path. Unset means the per-user config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_store: Option<String>,
    /// Keys whose value may legitimately equal the fallback text
    /// (brand names, prices).
    #[serde(default)]
    pub ignore_untranslated: Vec<String>,
}

fn default_messages_root() -> String {
    "./locales".to_string()
}

// The site is advertised in Mongolian first.
fn default_default_language() -> String {
    "mn".to_string()
}

fn default_fallback_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            default_language: default_default_language(),
            fallback_language: default_fallback_language(),
            preference_store: None,
            ignore_untranslated: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if either language setting is not a valid code.
    pub fn validate(&self) -> Result<()> {
        LanguageCode::parse(&self.default_language).with_context(|| {
            format!(
                "Invalid language code in 'defaultLanguage': \"{}\"",
                self.default_language
            )
        })?;
        LanguageCode::parse(&self.fallback_language).with_context(|| {
            format!(
                "Invalid language code in 'fallbackLanguage': \"{}\"",
                self.fallback_language
            )
        })?;
        Ok(())
    }

    pub fn default_language(&self) -> Result<LanguageCode> {
        LanguageCode::parse(&self.default_language).context("Invalid default language")
    }

    pub fn fallback_language(&self) -> Result<LanguageCode> {
        LanguageCode::parse(&self.fallback_language).context("Invalid fallback language")
    }

    /// Where the language preference is persisted.
    ///
    /// Falls back to `./.lokal/preferences.json` when the platform has no
    /// config directory.
    pub fn preference_store_path(&self) -> PathBuf {
        if let Some(path) = &self.preference_store {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(".lokal"))
            .join(PREFERENCES_FILE_NAME)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Load the nearest config file, or the defaults when there is none.
pub fn load_config(start_dir: &Path) -> Result<Config> {
    let Some(path) = find_config_file(start_dir) else {
        return Ok(Config::default());
    };
    let content = fs::read_to_string(&path)?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}
