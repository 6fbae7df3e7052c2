// WHY: Lect and pronunciation tables are a value passed to the composer, not globals,
// so qualification rules can be exercised under alternate configurations

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Code of the Mandarin reading, preferred for the headline pronunciation
pub const MANDARIN_CODE: &str = "m";
/// Code of the Cantonese reading, headline fallback when Mandarin is absent
pub const CANTONESE_CODE: &str = "c";

/// A recognized pronunciation code and the label shown for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronunciationCode {
    pub code: String,
    pub label: String,
}

impl PronunciationCode {
    pub fn new(code: &str, label: &str) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
        }
    }
}

/// Marker characters used inside a single output record
///
/// The defaults are the private-use code points understood by the Pleco
/// flashcard importer: a record stays on one physical line while still
/// rendering as several lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFormat {
    pub newline: String,
    pub bold: String,
    pub end_bold: String,
    pub indent: String,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            newline: "\u{EAB1}".to_string(),
            bold: "\u{EAB2}".to_string(),
            end_bold: "\u{EAB3}".to_string(),
            indent: "  ".to_string(),
        }
    }
}

/// Immutable configuration for entry composition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Lect names as used by the dialect graph, in display order
    pub display_lects: Vec<String>,
    /// Lect name to the pronunciation code used when rendering its synonyms
    pub lect_pron_codes: HashMap<String, String>,
    /// Recognized pronunciation codes, in display order
    pub pronunciations: Vec<PronunciationCode>,
    /// An entry qualifies through a relevant dialect group in one of these lects...
    pub required_lects: Vec<String>,
    /// ...or through carrying one of these pronunciation codes
    pub required_prons: Vec<String>,
    pub format: RecordFormat,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        let lect_pron_codes = [("Beijing", "m"), ("Hong Kong", "c"), ("Taishan", "c-t")]
            .iter()
            .map(|(lect, code)| (lect.to_string(), code.to_string()))
            .collect();

        Self {
            display_lects: vec![
                "Hong Kong".to_string(),
                "Taishan".to_string(),
                "Beijing".to_string(),
            ],
            lect_pron_codes,
            pronunciations: vec![
                PronunciationCode::new("m", "Mandarin"),
                PronunciationCode::new("c", "Cantonese"),
                PronunciationCode::new("c-t", "Taishanese"),
            ],
            required_lects: vec!["Hong Kong".to_string(), "Taishan".to_string()],
            required_prons: vec!["c-t".to_string()],
            format: RecordFormat::default(),
        }
    }
}

impl LexiconConfig {
    /// Load a configuration from a JSON file; omitted fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Pronunciation code used to render synonyms for `lect`
    pub fn pron_code_for_lect(&self, lect: &str) -> Option<&str> {
        self.lect_pron_codes.get(lect).map(String::as_str)
    }

    pub fn is_recognized_code(&self, code: &str) -> bool {
        self.pronunciations.iter().any(|p| p.code == code)
    }
}
