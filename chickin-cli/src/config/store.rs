//! Persistent key-value store for broker state
//!
//! One JSON file per fixed key under the per-user data directory. Every save
//! rewrites the file wholesale; there is exactly one writer, so last-writer-
//! wins is sufficient. Files are rehydrated verbatim at startup with no
//! schema versioning.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

use crate::services::matching::models::{ChatMessage, Lender, default_lenders, default_rules};

pub const LENDERS_KEY: &str = "lenders";
pub const CHAT_KEY: &str = "chat";
pub const RULES_KEY: &str = "rules";

/// Handle to the on-disk application state
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open the store at the default per-user location
    pub fn open_default() -> Result<Self> {
        let root = dirs::data_dir()
            .context("Could not determine the user data directory")?
            .join("chickin");
        Ok(Self::open(root))
    }

    pub fn open(root: impl Into<PathBuf>) -> Self {
        Store { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read a keyed collection; `None` when the key has never been saved
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(value))
    }

    /// Replace a keyed collection wholesale
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create {}", self.root.display()))?;
        let path = self.key_path(key);
        let text = serde_json::to_string_pretty(value).context("Failed to serialize state")?;
        fs::write(&path, text).with_context(|| format!("Failed to write {}", path.display()))?;
        log::debug!("Saved {}", path.display());
        Ok(())
    }

    pub fn load_lenders(&self) -> Result<Vec<Lender>> {
        Ok(self.load(LENDERS_KEY)?.unwrap_or_else(default_lenders))
    }

    pub fn save_lenders(&self, lenders: &[Lender]) -> Result<()> {
        self.save(LENDERS_KEY, &lenders)
    }

    pub fn load_chat(&self) -> Result<Vec<ChatMessage>> {
        Ok(self.load(CHAT_KEY)?.unwrap_or_default())
    }

    pub fn save_chat(&self, chat: &[ChatMessage]) -> Result<()> {
        self.save(CHAT_KEY, &chat)
    }

    pub fn load_rules(&self) -> Result<Vec<String>> {
        Ok(self.load(RULES_KEY)?.unwrap_or_else(default_rules))
    }

    pub fn save_rules(&self, rules: &[String]) -> Result<()> {
        self.save(RULES_KEY, &rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("state"));
        assert_eq!(store.load_lenders().unwrap(), default_lenders());
        assert_eq!(store.load_rules().unwrap(), default_rules());
        assert!(store.load_chat().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("state"));

        let mut lenders = default_lenders();
        lenders.truncate(2);
        store.save_lenders(&lenders).unwrap();
        assert_eq!(store.load_lenders().unwrap(), lenders);

        let rules = vec!["Don't send Alpha Funding deals over $40K".to_string()];
        store.save_rules(&rules).unwrap();
        assert_eq!(store.load_rules().unwrap(), rules);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("state"));
        store.save_rules(&["first".to_string(), "second".to_string()]).unwrap();
        store.save_rules(&["only".to_string()]).unwrap();
        assert_eq!(store.load_rules().unwrap(), vec!["only".to_string()]);
    }
}
