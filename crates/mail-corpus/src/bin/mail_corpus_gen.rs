//! Batch generator producing labeled ham/spam corpus files.
//!
//! This binary delegates to the `mail-corpus` library for loading,
//! generation, and output, keeping the run behaviour testable without
//! spawning a subprocess.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use cap_std::{ambient_authority, fs::Dir};
use chrono::Utc;
use mail_corpus::{
    Category, CorpusSettings, GenerationError, SettingsError, TemplateSet, WriteError,
    generate_messages, write_category,
};
use ortho_config::OrthoConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Errors that abort a generation run.
#[derive(Debug, Error)]
enum RunError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] Arc<ortho_config::OrthoError>),
    /// Configuration values failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The output root could not be prepared.
    #[error("failed to prepare output directory '{path}': {message}")]
    OutputDir {
        /// Path of the output root.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// Message synthesis failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Corpus files could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

fn main() -> ExitCode {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "corpus generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), RunError> {
    let settings = CorpusSettings::load()?;
    settings.validate()?;

    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "seeding corpus generator");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let now = Utc::now();

    let output_dir = settings.output_dir();
    let root = open_output_root(&output_dir)?;

    for category in [Category::Spam, Category::Ham] {
        let path = settings.templates_dir().join(category.template_file_name());
        let templates = TemplateSet::load_or_empty(&path);
        if templates.is_empty() {
            warn!(
                category = category.as_str(),
                path = %path.display(),
                "no usable templates, skipping category"
            );
            continue;
        }

        let messages = generate_messages(
            &templates,
            settings.message_count(category),
            category,
            settings.typo_probability(),
            now,
            &mut rng,
        )?;
        let written = write_category(&root, category, &messages)?;
        info!(
            category = category.as_str(),
            written,
            output = %output_dir.display(),
            "wrote corpus files"
        );
    }

    Ok(())
}

fn open_output_root(output_dir: &Path) -> Result<Dir, RunError> {
    std::fs::create_dir_all(output_dir).map_err(|err| RunError::OutputDir {
        path: output_dir.to_path_buf(),
        message: err.to_string(),
    })?;
    Dir::open_ambient_dir(output_dir, ambient_authority()).map_err(|err| RunError::OutputDir {
        path: output_dir.to_path_buf(),
        message: err.to_string(),
    })
}
