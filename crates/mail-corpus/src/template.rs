//! Template records and JSON loading.
//!
//! A template file is a JSON array of objects with a `subject` string and a
//! `body` array of strings. Patterns contain named placeholders in `{name}`
//! syntax. Placeholder names are not checked at load time; an unsupported
//! name surfaces later as a rendering failure.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::TemplateError;

/// A subject/body pattern pair with named placeholders.
///
/// # Example
///
/// ```
/// use mail_corpus::Template;
///
/// let template = Template::new(
///     "Hi {name}".to_owned(),
///     vec!["Code: {code}".to_owned()],
/// );
///
/// assert_eq!(template.subject(), "Hi {name}");
/// assert_eq!(template.body().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    subject: String,
    body: Vec<String>,
}

impl Template {
    /// Creates a template from a subject pattern and ordered body patterns.
    #[must_use]
    pub const fn new(subject: String, body: Vec<String>) -> Self {
        Self { subject, body }
    }

    /// Returns the subject pattern.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the ordered body line patterns.
    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.body
    }
}

/// An immutable set of templates for one category.
///
/// Loaded once at startup; an empty set means "no usable templates" and
/// callers must skip generation for the category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// Creates a set from already-constructed templates.
    #[must_use]
    pub const fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// Parses a template set from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] if the JSON is malformed or an
    /// entry is missing its `subject` or `body` field.
    ///
    /// # Example
    ///
    /// ```
    /// use mail_corpus::TemplateSet;
    ///
    /// let json = r#"[
    ///     {"subject": "Hi {name}", "body": ["Code: {code}"]}
    /// ]"#;
    ///
    /// let templates = TemplateSet::from_json(json).expect("valid templates");
    /// assert_eq!(templates.len(), 1);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let raw: Vec<RawTemplate> =
            serde_json::from_str(json).map_err(|e| TemplateError::Parse {
                message: e.to_string(),
            })?;

        let templates = raw
            .into_iter()
            .map(|t| Template {
                subject: t.subject,
                body: t.body,
            })
            .collect();

        Ok(Self { templates })
    }

    /// Loads a template set from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let contents = fs::read_to_string(path).map_err(|e| TemplateError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Loads a template set, recovering load failures into an empty set.
    ///
    /// A missing or malformed file is logged as a warning rather than
    /// raised; the caller must treat the empty result as "no usable
    /// templates" and skip generation for the category.
    #[must_use]
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(templates) => templates,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load templates");
                Self::default()
            }
        }
    }

    /// Returns `true` when the set contains no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns the number of templates in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns all templates in the set.
    #[must_use]
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawTemplate {
    subject: String,
    body: Vec<String>,
}
