//! Labeled ham/spam email corpus generation.
//!
//! This crate synthesizes example email text files by filling JSON-supplied
//! templates with randomized fake personal and commercial data, then writing
//! each message to its own file under a category directory. The output
//! bootstraps a small labeled dataset for downstream tasks such as training
//! a spam classifier.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading per-category template sets from JSON files, with a lenient
//!   path that recovers load failures into an empty set
//! - Deterministic message synthesis from a seeded RNG and an injected
//!   reference time
//! - A character-level typo pass applied to the ham category
//! - Sequentially numbered, atomically written corpus files
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use mail_corpus::{Category, Template, TemplateSet, generate_messages};
//!
//! let templates = TemplateSet::new(vec![Template::new(
//!     "Hi {name}".to_owned(),
//!     vec!["Code: {code}".to_owned()],
//! )]);
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let messages = generate_messages(&templates, 1, Category::Spam, 0.02, Utc::now(), &mut rng)
//!     .expect("generation succeeds");
//!
//! assert_eq!(messages.len(), 1);
//! assert!(messages.first().is_some_and(|m| m.starts_with("From: ")));
//! ```

mod category;
mod config;
mod error;
mod fields;
mod generator;
mod template;
mod typo;
mod writer;

pub use category::Category;
pub use config::{CorpusSettings, SettingsError};
pub use error::{GenerationError, TemplateError, WriteError};
pub use fields::CODE_LENGTH;
pub use generator::generate_messages;
pub use template::{Template, TemplateSet};
pub use typo::inject_typos;
pub use writer::write_category;
