//! Corpus file loading
//!
//! Reads newline-separated word lists (e.g. a larger prohibited-passwords
//! list) to merge into a [`PolicyConfig`](crate::PolicyConfig).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CORPUS_PATH_VAR: &str = "PWD_POLICY_CORPUS_PATH";
const DEFAULT_CORPUS_PATH: &str = "./assets/prohibited.txt";

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Corpus file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read corpus file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Corpus file is empty")]
    EmptyFile,
}

/// Returns the corpus file path.
///
/// Priority:
/// 1. Environment variable `PWD_POLICY_CORPUS_PATH`
/// 2. Default path `./assets/prohibited.txt`
pub fn get_corpus_path() -> PathBuf {
    std::env::var(CORPUS_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CORPUS_PATH))
}

/// Loads the corpus at [`get_corpus_path`].
///
/// # Example
///
/// ```rust,ignore
/// let words = pwd_policy::load_corpus()?;
/// let policy = pwd_policy::PolicyConfig::default().with_extra_prohibited(&words);
/// ```
pub fn load_corpus() -> Result<HashSet<String>, CorpusError> {
    load_corpus_from_path(get_corpus_path())
}

/// Loads a corpus from a specific file path.
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no entries
pub fn load_corpus_from_path<P: AsRef<Path>>(path: P) -> Result<HashSet<String>, CorpusError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Corpus load FAILED: file not found {}", path.display());
        return Err(CorpusError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    if set.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Corpus load FAILED: empty file {}", path.display());
        return Err(CorpusError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Corpus loaded: {} entries from {}", set.len(), path.display());

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyConfig;
    use crate::rules::not_common;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn corpus_file(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_corpus_path_default() {
        remove_env(CORPUS_PATH_VAR);
        assert_eq!(get_corpus_path(), PathBuf::from(DEFAULT_CORPUS_PATH));
    }

    #[test]
    #[serial]
    fn test_get_corpus_path_from_env() {
        set_env(CORPUS_PATH_VAR, "/custom/path/words.txt");
        assert_eq!(get_corpus_path(), PathBuf::from("/custom/path/words.txt"));
        remove_env(CORPUS_PATH_VAR);
    }

    #[test]
    #[serial]
    fn test_load_corpus_file_not_found() {
        set_env(CORPUS_PATH_VAR, "/nonexistent/path/words.txt");
        let result = load_corpus();
        assert!(matches!(result, Err(CorpusError::FileNotFound(_))));
        remove_env(CORPUS_PATH_VAR);
    }

    #[test]
    #[serial]
    fn test_load_corpus_from_env() {
        let temp_file = corpus_file(&["Hunter2", "qwerty"]);
        set_env(CORPUS_PATH_VAR, temp_file.path().to_str().unwrap());

        let words = load_corpus().expect("corpus should load");
        assert_eq!(words.len(), 2);
        assert!(words.contains("hunter2"));

        remove_env(CORPUS_PATH_VAR);
    }

    #[test]
    fn test_load_corpus_empty_file() {
        let temp_file = corpus_file(&["", "   "]);
        let result = load_corpus_from_path(temp_file.path());
        assert!(matches!(result, Err(CorpusError::EmptyFile)));
    }

    #[test]
    fn test_load_corpus_trims_and_dedups() {
        let temp_file = corpus_file(&["  Secret1 ", "SECRET1", "", "dragon"]);
        let words = load_corpus_from_path(temp_file.path()).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.contains("secret1"));
        assert!(words.contains("dragon"));
    }

    #[test]
    fn test_loaded_corpus_feeds_policy() {
        let temp_file = corpus_file(&["Dragon"]);
        let words = load_corpus_from_path(temp_file.path()).unwrap();
        let config = PolicyConfig::default().with_extra_prohibited(&words);

        assert!(!not_common("DRAGON", &config));
        assert!(!not_common("password", &config));
    }
}
