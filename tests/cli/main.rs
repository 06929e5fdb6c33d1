use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod language;
mod resolve;

const BIN_NAME: &str = "lokal";

/// Preference file used by every test command, relative to the project dir.
pub const STORE_PATH: &str = ".lokal/preferences.json";

pub const EN_JSON: &str = r#"{
  "nav": {
    "faq": "FAQ",
    "pricing": "Pricing",
    "contact": "Contact"
  },
  "footer": {
    "copyright": "© {{year}} {{brand}}"
  }
}"#;

pub const MN_JSON: &str = r#"{
  "nav": {
    "faq": "Түгээмэл асуулт",
    "pricing": "Үнэ"
  },
  "footer": {
    "copyright": "© {{year}} {{brand}}. Бүх эрх хамгаалагдсан."
  }
}"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    /// A project with English and Mongolian tables in `./locales`.
    pub fn with_locales() -> Result<Self> {
        let test = Self::with_file("locales/en.json", EN_JSON)?;
        test.write_file("locales/mn.json", MN_JSON)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd.env("LOKAL_STORE", self.project_dir.join(STORE_PATH));
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        let output = self.command().args(args).output()?;
        Ok(output)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// The language saved in the preference file, if any.
    pub fn saved_language(&self) -> Result<Option<String>> {
        if !self.project_dir.join(STORE_PATH).exists() {
            return Ok(None);
        }
        let content = self.read_file(STORE_PATH)?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        Ok(value
            .get("language")
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
