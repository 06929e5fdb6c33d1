use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{
    InvalidValue, LanguageCode, MessageContext, MessageLocation, TranslationTable,
    TranslationTree,
};

/// A warning from scanning translation files.
#[derive(Debug, Clone)]
pub struct TableScanWarning {
    pub file_path: String,
    pub error: String,
}

/// A table loaded from disk, with what is needed to report on it.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub table: TranslationTable,
    pub file_path: String,
    /// Every string leaf with its line in the file.
    pub entries: BTreeMap<String, MessageContext>,
    /// Values that were left out of `table`.
    pub invalid_values: Vec<(InvalidValue, MessageLocation)>,
}

impl ParsedTable {
    pub fn language(&self) -> &LanguageCode {
        self.table.language()
    }

    pub fn get(&self, key: &str) -> Option<&MessageContext> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[derive(Debug, Default)]
pub struct ScanTablesResult {
    pub tables: BTreeMap<LanguageCode, ParsedTable>,
    pub warnings: Vec<TableScanWarning>,
}

impl ScanTablesResult {
    /// The bare translation tables, for building a localizer.
    pub fn translation_tables(&self) -> impl Iterator<Item = TranslationTable> + '_ {
        self.tables.values().map(|parsed| parsed.table.clone())
    }
}

pub fn parse_json_file(path: &Path, language: LanguageCode) -> Result<ParsedTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;
    if !json.is_object() {
        bail!(
            "Translation file {:?} must contain a JSON object at the top level",
            path
        );
    }

    let file_path = path.to_string_lossy().to_string();
    Ok(parse_json_value(&json, &content, &file_path, language))
}

fn parse_json_value(
    json: &Value,
    content: &str,
    file_path: &str,
    language: LanguageCode,
) -> ParsedTable {
    // Pre-compute line index for O(log n) line lookups
    let line_index = build_line_index(content);
    let locate = |key: &str| {
        MessageLocation::with_line(file_path, find_key_line(content, key, &line_index))
    };

    let (root, invalid) = TranslationTree::from_json(json);
    let entries = root
        .flatten()
        .into_iter()
        .map(|(key, value)| {
            let context = MessageContext::new(locate(&key), key.clone(), value);
            (key, context)
        })
        .collect();
    let invalid_values = invalid
        .into_iter()
        .map(|value| {
            let location = locate(&value.key);
            (value, location)
        })
        .collect();

    ParsedTable {
        table: TranslationTable::new(language, root),
        file_path: file_path.to_string(),
        entries,
        invalid_values,
    }
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find line number for a byte offset using binary search. Returns 1-based line number.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Find the line number where a key appears in the JSON content.
///
/// Searches for each key part in sequence so that `faq.q1.answer` finds the
/// `"answer"` after `"q1"`, not one in another section. A match only counts
/// when it is followed by `:`, so string values are skipped. Array index
/// segments have no key in the source; the search stops there and reports
/// the line of the enclosing key.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let mut search_start = 0;
    for part in key_path.split('.') {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if remaining[after_pattern..].trim_start().starts_with(':') {
                search_start += after_pattern;
                found = true;
                break;
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

/// Extracts the language code from a file name.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "/path/to/locales/mn.json" -> Some("mn")
/// - "strings.v2.json" -> None
pub fn extract_language(path: impl AsRef<Path>) -> Option<LanguageCode> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| LanguageCode::parse(s).ok())
}

/// Load every `<code>.json` file in `dir`.
///
/// Files that fail to parse are reported as warnings, not errors, so one
/// broken table doesn't hide the others.
pub fn scan_translation_files(dir: impl AsRef<Path>) -> Result<ScanTablesResult> {
    let dir = dir.as_ref();
    let mut result = ScanTablesResult::default();

    if !dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .lokalrc.json 'messagesRoot' setting.",
            dir.display()
        );
    }

    if !dir.is_dir() {
        bail!("'{}' is not a directory.", dir.display());
    }

    let mut paths: Vec<_> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    paths.sort();

    for path in paths {
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(language) = extract_language(&path) else {
            debug!("skipping {:?}: file name is not a language code", path);
            continue;
        };

        match parse_json_file(&path, language.clone()) {
            Ok(parsed) => {
                for (value, _) in &parsed.invalid_values {
                    warn!(
                        "{}: `{}`: {}; treated as missing",
                        parsed.file_path, value.key, value.problem
                    );
                }
                result.tables.insert(language, parsed);
            }
            Err(e) => {
                warn!("{:#}", e);
                result.warnings.push(TableScanWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
