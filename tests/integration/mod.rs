// Integration test utilities and common code
// WHY: Centralized fixtures avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Article data used across tests: a self-rooted group, a referenced synonym,
/// a Taishanese-only entry and an entry without pronunciations
pub const ARTICLE_DATA: &str = r#"{
    "一點": {
        "1": {"pron": {"m": "一diǎn", "c": "jat1 dim2"}, "dial": ["self"]}
    },
    "啲": {
        "1": {"pron": {"c": "di1,di=gloss"}, "dial": ["其他"]},
        "2": {"pron": {"c": "dit1"}, "dial": ["一點"]}
    },
    "開": {
        "1": {"pron": {"c-t": "hoi33"}}
    },
    "冇": {
        "1": {"dial": ["self"]}
    }
}"#;

pub const DIAL_DATA: &str = r#"{
    "一點": {
        "meaning": "a bit",
        "dials": {
            "Hong Kong": ["啲", "少少:colloquial"],
            "Beijing": ["一點_1"]
        }
    }
}"#;

/// Test fixture helper for creating temporary input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a file relative to the fixture root
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write the standard article and dialect inputs, returning their paths
    pub fn create_standard_inputs(&self) -> (PathBuf, PathBuf) {
        let articles = self.create_file("articledata.json", ARTICLE_DATA);
        let dialects = self.create_file("dial.json", DIAL_DATA);
        (articles, dialects)
    }

    /// Read an output file as lines
    pub fn read_lines<P: AsRef<Path>>(&self, relative_path: P) -> Vec<String> {
        fs::read_to_string(self.root_path.join(relative_path))
            .expect("Failed to read output file")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
