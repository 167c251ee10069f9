use std::{fs, path::Path};

use anyhow::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every account starts with a small welcome balance.
pub const STARTING_POINTS: u64 = 1250;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub points: u64,
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub points: u32,
    pub recorded_at: DateTime<Utc>,
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            points: STARTING_POINTS,
            history: Vec::new(),
        }
    }
}

impl Wallet {
    /// A missing or unreadable wallet file falls back to a fresh wallet.
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<(), Error> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;

        Ok(())
    }

    /// Folds a confirmed identification into the balance.
    pub fn claim(&mut self, title: &str, points: u32) {
        self.points += u64::from(points);
        self.history.push(HistoryEntry {
            title: title.to_owned(),
            points,
            recorded_at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{STARTING_POINTS, Wallet};

    #[test]
    fn test_claim_adds_points_and_history() {
        let mut wallet = Wallet::default();

        wallet.claim("PET", 87);
        wallet.claim("Kardus", 30);

        assert_eq!(wallet.points, STARTING_POINTS + 87 + 30);
        assert_eq!(wallet.history.len(), 2);
        assert_eq!(wallet.history[0].title, "PET");
        assert_eq!(wallet.history[1].points, 30);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let wallet = Wallet::load(&dir.path().join("wallet.json"));

        assert_eq!(wallet.points, STARTING_POINTS);
        assert!(wallet.history.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");
        std::fs::write(&path, "not json {").unwrap();

        assert_eq!(Wallet::load(&path), Wallet::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");

        let mut wallet = Wallet::default();
        wallet.claim("PET", 87);
        wallet.save(&path).unwrap();

        assert_eq!(Wallet::load(&path), wallet);
    }
}
