use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        FileStore, LanguageCode, Localizer,
        parsers::json::{ScanTablesResult, scan_translation_files},
    },
};

/// Everything a command needs: resolved settings plus the loaded tables.
pub struct CommandContext {
    pub config: Config,
    pub messages_root: PathBuf,
    pub default_language: LanguageCode,
    pub fallback_language: LanguageCode,
    pub store_path: PathBuf,
    pub scan: ScanTablesResult,
}

impl CommandContext {
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Self::load_from(&cwd, common)
    }

    pub fn load_from(start_dir: &Path, common: &CommonArgs) -> Result<Self> {
        let mut config = load_config(start_dir)?;
        apply_overrides(&mut config, common);
        config.validate()?;

        let messages_root = PathBuf::from(&config.messages_root);
        let default_language = config.default_language()?;
        let fallback_language = config.fallback_language()?;
        let store_path = common
            .store
            .clone()
            .unwrap_or_else(|| config.preference_store_path());
        let scan = scan_translation_files(&messages_root)?;

        Ok(Self {
            config,
            messages_root,
            default_language,
            fallback_language,
            store_path,
            scan,
        })
    }

    /// Localizer starting from the saved language.
    pub fn localizer(&self) -> Result<Localizer<FileStore>> {
        self.ensure_fallback()?;
        Localizer::from_store(
            self.scan.translation_tables(),
            &self.default_language,
            &self.fallback_language,
            FileStore::new(&self.store_path),
        )
        .context("Failed to set up translations")
    }

    /// Localizer starting in `language`, ignoring the saved choice.
    pub fn localizer_in(&self, language: &str) -> Result<Localizer<FileStore>> {
        self.ensure_fallback()?;
        let language = LanguageCode::parse(language)
            .with_context(|| format!("Invalid language code: \"{}\"", language))?;
        Localizer::initialize(
            self.scan.translation_tables(),
            &language,
            &self.fallback_language,
            FileStore::new(&self.store_path),
        )
        .context("Failed to set up translations")
    }

    fn ensure_fallback(&self) -> Result<()> {
        if !self.scan.tables.contains_key(&self.fallback_language) {
            bail!(
                "No translation file for fallback language '{}' in '{}'.\n\
                 Hint: Add {}.json or change 'fallbackLanguage' in .lokalrc.json.",
                self.fallback_language,
                self.messages_root.display(),
                self.fallback_language
            );
        }
        Ok(())
    }
}

fn apply_overrides(config: &mut Config, common: &CommonArgs) {
    if let Some(root) = &common.messages_root {
        config.messages_root = root.to_string_lossy().to_string();
    }
    if let Some(language) = &common.default_language {
        config.default_language = language.clone();
    }
    if let Some(language) = &common.fallback_language {
        config.fallback_language = language.clone();
    }
}
