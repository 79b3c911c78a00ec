/*!
 * Message model: a single translatable unit of a catalog.
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Translated and confirmed
    Finished,
    /// Needs (re)translation or confirmation
    #[default]
    Unfinished,
    /// Was unfinished and no longer appears in the sources
    Obsolete,
    /// Was finished and no longer appears in the sources
    Vanished,
}

impl MessageType {
    /// True for the two states describing entries that left the sources.
    pub fn is_obsolete(self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

/// A source location a message was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub file_name: String,
    pub line_number: u32,
}

impl Reference {
    pub fn new(file_name: &str, line_number: u32) -> Self {
        Self {
            file_name: file_name.to_string(),
            line_number,
        }
    }
}

/// Identity of a message without a stable id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKey {
    pub context: String,
    pub source_text: String,
    pub comment: String,
}

/// One translatable unit.
///
/// Messages are plain owned values: cloning one yields a fully independent
/// copy, which is what the merge relies on to never alias its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub context: String,

    #[serde(default)]
    pub source_text: String,

    /// Previous source text, set when the source was just superseded
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub old_source_text: String,

    /// Disambiguation comment, part of the identity
    #[serde(default)]
    pub comment: String,

    /// Comment for translators, refreshed from every extraction
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_comment: String,

    /// Stable id; when non-empty it takes precedence over context and text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// One string per plural form, a single one otherwise
    #[serde(default)]
    pub translations: Vec<String>,

    #[serde(default)]
    pub plural: bool,

    #[serde(default, rename = "type")]
    pub message_type: MessageType,

    #[serde(default)]
    pub references: Vec<Reference>,

    /// Free-form metadata carried across merges
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, String>,
}

impl Message {
    /// Create an unfinished, untranslated message.
    pub fn new(context: &str, source_text: &str) -> Self {
        Self {
            context: context.to_string(),
            source_text: source_text.to_string(),
            ..Self::default()
        }
    }

    /// Create the pseudo-message carrying the comment of a whole context.
    pub fn context_comment(context: &str, comment: &str) -> Self {
        Self {
            context: context.to_string(),
            comment: comment.to_string(),
            ..Self::default()
        }
    }

    pub fn with_comment(mut self, comment: &str) -> Self {
        self.comment = comment.to_string();
        self
    }

    pub fn with_extra_comment(mut self, extra_comment: &str) -> Self {
        self.extra_comment = extra_comment.to_string();
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Set a single translation.
    pub fn with_translation(mut self, translation: &str) -> Self {
        self.translations = vec![translation.to_string()];
        self
    }

    /// Set all plural forms and mark the message plural.
    pub fn with_plural_translations(mut self, translations: &[&str]) -> Self {
        self.translations = translations.iter().map(|t| t.to_string()).collect();
        self.plural = true;
        self
    }

    pub fn with_plural(mut self, plural: bool) -> Self {
        self.plural = plural;
        self
    }

    pub fn with_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn with_reference(mut self, file_name: &str, line_number: u32) -> Self {
        self.references.push(Reference::new(file_name, line_number));
        self
    }

    pub fn with_extra(mut self, key: &str, value: &str) -> Self {
        self.extras.insert(key.to_string(), value.to_string());
        self
    }

    /// True if at least one translation string is non-empty.
    pub fn is_translated(&self) -> bool {
        self.translations.iter().any(|t| !t.is_empty())
    }

    /// True for the pseudo-message of a context (no source text, no id).
    pub fn is_context_comment(&self) -> bool {
        self.source_text.is_empty() && self.id.is_empty()
    }

    pub fn key(&self) -> MessageKey {
        MessageKey {
            context: self.context.clone(),
            source_text: self.source_text.clone(),
            comment: self.comment.clone(),
        }
    }

    /// First translation, or the empty string.
    pub fn translation(&self) -> &str {
        self.translations.first().map(String::as_str).unwrap_or("")
    }

    /// File of the primary (first) reference.
    pub fn file_name(&self) -> Option<&str> {
        self.references.first().map(|r| r.file_name.as_str())
    }

    /// Line of the primary (first) reference.
    pub fn line_number(&self) -> Option<u32> {
        self.references.first().map(|r| r.line_number)
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}
