//! Message category labels.
//!
//! Generated messages are labeled implicitly by the directory they are
//! written to and the prefix of their file name. The category also decides
//! whether the typo pass applies: ham models informal human mail, spam
//! models clean templated campaigns.

/// Labeled category for generated messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Legitimate (non-spam) messages, the negative-class label.
    Ham,
    /// Unsolicited/fraudulent messages, the positive-class label.
    Spam,
}

impl Category {
    /// Returns the lowercase label used for directories and file prefixes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ham => "ham",
            Self::Spam => "spam",
        }
    }

    /// Returns the file name of the category's template resource.
    #[must_use]
    pub const fn template_file_name(self) -> &'static str {
        match self {
            Self::Ham => "ham_templates.json",
            Self::Spam => "spam_templates.json",
        }
    }

    /// Returns `true` when the typo pass applies to this category.
    #[must_use]
    pub const fn applies_typos(self) -> bool {
        matches!(self, Self::Ham)
    }
}
