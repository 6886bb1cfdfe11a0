//! Generation run configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::category::Category;

const DEFAULT_TYPO_PROBABILITY: f64 = 0.02;

fn default_templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("templates")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Configuration values controlling corpus generation.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MAIL_CORPUS")]
pub struct CorpusSettings {
    /// Number of spam messages to generate.
    #[ortho_config(default = 100)]
    pub spam_count: usize,
    /// Number of ham messages to generate.
    #[ortho_config(default = 100)]
    pub ham_count: usize,
    /// Per-character typo probability applied to ham messages.
    pub typo_probability: Option<f64>,
    /// RNG seed; a random seed is drawn and logged when absent.
    pub seed: Option<u64>,
    /// Optional override for the template directory.
    pub templates_dir: Option<PathBuf>,
    /// Optional override for the output directory.
    pub output_dir: Option<PathBuf>,
}

impl CorpusSettings {
    /// Returns the message count configured for the category.
    #[must_use]
    pub const fn message_count(&self, category: Category) -> usize {
        match category {
            Category::Ham => self.ham_count,
            Category::Spam => self.spam_count,
        }
    }

    /// Returns the configured typo probability, falling back to the default.
    #[must_use]
    pub fn typo_probability(&self) -> f64 {
        self.typo_probability.unwrap_or(DEFAULT_TYPO_PROBABILITY)
    }

    /// Returns the configured template directory, falling back to the
    /// bundled fixtures.
    #[must_use]
    pub fn templates_dir(&self) -> PathBuf {
        self.templates_dir.clone().unwrap_or_else(default_templates_dir)
    }

    /// Returns the configured output directory, falling back to `data`.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    /// Validates value ranges that the configuration layer cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidTypoProbability`] when the typo
    /// probability lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let probability = self.typo_probability();
        if (0.0..=1.0).contains(&probability) {
            Ok(())
        } else {
            Err(SettingsError::InvalidTypoProbability { value: probability })
        }
    }
}

/// Errors raised while validating settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// The typo probability is outside the unit interval.
    #[error("typo probability must be within [0, 1], got {value}")]
    InvalidTypoProbability {
        /// The rejected probability value.
        value: f64,
    },
}
