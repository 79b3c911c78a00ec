/*!
 * Catalog storage: an ordered list of messages with identity lookups.
 */

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::message::{Message, MessageKey, Reference};

/// How source locations are recorded by the catalog's file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationsType {
    #[default]
    Default,
    None,
    Relative,
    Absolute,
}

/// Point-lookup tables over a message list. Later entries shadow earlier ones.
#[derive(Debug, Clone, Default)]
struct CatalogIndex {
    by_key: HashMap<MessageKey, usize>,
    by_id: HashMap<String, usize>,
    by_context: HashMap<String, usize>,
}

impl CatalogIndex {
    fn build(messages: &[Message]) -> Self {
        let mut index = Self::default();
        for (i, msg) in messages.iter().enumerate() {
            index.add(i, msg);
        }
        index
    }

    fn add(&mut self, i: usize, msg: &Message) {
        if msg.is_context_comment() {
            self.by_context.insert(msg.context.clone(), i);
        } else {
            self.by_key.insert(msg.key(), i);
            if !msg.id.is_empty() {
                self.by_id.insert(msg.id.clone(), i);
            }
        }
    }
}

/// An ordered collection of messages for one target language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Target language, e.g. "de" or "pt_BR"
    #[serde(default)]
    pub language_code: String,

    #[serde(default)]
    pub source_language_code: String,

    #[serde(default)]
    pub locations_type: LocationsType,

    #[serde(default)]
    messages: Vec<Message>,

    #[serde(skip)]
    index: OnceCell<CatalogIndex>,
}

impl Catalog {
    /// Create an empty catalog for a target language.
    pub fn new(language_code: &str) -> Self {
        Self {
            language_code: language_code.to_string(),
            ..Self::default()
        }
    }

    /// Create a catalog from an existing message list.
    pub fn from_messages(language_code: &str, messages: Vec<Message>) -> Self {
        Self {
            language_code: language_code.to_string(),
            messages,
            ..Self::default()
        }
    }

    pub fn with_source_language(mut self, source_language_code: &str) -> Self {
        self.source_language_code = source_language_code.to_string();
        self
    }

    pub fn with_locations_type(mut self, locations_type: LocationsType) -> Self {
        self.locations_type = locations_type;
        self
    }

    /// A new empty catalog carrying this catalog's language settings.
    pub fn empty_like(&self) -> Self {
        Self {
            language_code: self.language_code.clone(),
            source_language_code: self.source_language_code.clone(),
            locations_type: self.locations_type,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, i: usize) -> Option<&Message> {
        self.messages.get(i)
    }

    /// Mutable access to one message. Invalidates the lookup index.
    pub fn message_mut(&mut self, i: usize) -> Option<&mut Message> {
        self.index.take();
        self.messages.get_mut(i)
    }

    /// Replace the translations of message `i`. Identity is untouched, so
    /// the lookup index stays valid. Returns false if `i` is out of range.
    pub fn set_translations(&mut self, i: usize, translations: Vec<String>) -> bool {
        match self.messages.get_mut(i) {
            Some(msg) => {
                msg.translations = translations;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Append at the end, keeping an already built index current.
    pub fn append(&mut self, msg: Message) {
        let i = self.messages.len();
        if let Some(index) = self.index.get_mut() {
            index.add(i, &msg);
        }
        self.messages.push(msg);
    }

    /// Insert at a position. Invalidates the lookup index.
    pub fn insert(&mut self, i: usize, msg: Message) {
        self.index.take();
        self.messages.insert(i.min(self.messages.len()), msg);
    }

    /// Insert next to the messages extracted from the same file and context.
    ///
    /// Runs of consecutive messages sharing file and context with
    /// non-decreasing line numbers are candidate slots. A slot strictly inside
    /// a run scores 2, one at the head or tail of a run scores 1; the best
    /// score wins, then the longest run. Messages without a line number, or
    /// with no matching run, are appended.
    pub fn append_sorted(&mut self, msg: Message) {
        let Some(msg_line) = msg.line_number() else {
            self.append(msg);
            return;
        };

        let (mut best_idx, mut best_score, mut best_size) = (0usize, 0u8, 0usize);
        let (mut this_idx, mut this_score, mut this_size) = (0usize, 0u8, 0usize);
        let mut prev_line = 0u32;

        for (cur_idx, existing) in self.messages.iter().enumerate() {
            let same_file =
                existing.file_name() == msg.file_name() && existing.context == msg.context;
            let run_line = if same_file {
                existing.line_number().filter(|&line| line >= prev_line)
            } else {
                None
            };

            if let Some(cur_line) = run_line {
                if msg_line >= prev_line && msg_line < cur_line {
                    this_idx = cur_idx;
                    this_score = if this_size > 0 { 2 } else { 1 };
                }
                this_size += 1;
                prev_line = cur_line;
            } else if this_size > 0 {
                if this_score == 0 {
                    this_idx = cur_idx;
                    this_score = 1;
                }
                if this_score > best_score || (this_score == best_score && this_size > best_size) {
                    best_idx = this_idx;
                    best_score = this_score;
                    best_size = this_size;
                }
                this_score = 0;
                this_size = usize::from(same_file);
                prev_line = 0;
            }
        }

        if this_size > 0 && this_score == 0 {
            this_idx = self.messages.len();
            this_score = 1;
        }

        if this_score > best_score || (this_score == best_score && this_size > best_size) {
            self.insert(this_idx, msg);
        } else if best_score > 0 {
            self.insert(best_idx, msg);
        } else {
            self.append(msg);
        }
    }

    fn index(&self) -> &CatalogIndex {
        self.index.get_or_init(|| CatalogIndex::build(&self.messages))
    }

    /// Find the message with the same identity as `msg`: its id when it has
    /// one, otherwise its context, source text and comment.
    pub fn find(&self, msg: &Message) -> Option<usize> {
        let index = self.index();
        if msg.id.is_empty() {
            index.by_key.get(&msg.key()).copied()
        } else {
            index.by_id.get(&msg.id).copied()
        }
    }

    /// Find the first message with the given context and comment that shares
    /// at least one reference with `references`.
    pub fn find_by_references(
        &self,
        context: &str,
        comment: &str,
        references: &[Reference],
    ) -> Option<usize> {
        if references.is_empty() {
            return None;
        }
        self.messages.iter().position(|msg| {
            msg.context == context
                && msg.comment == comment
                && msg.references.iter().any(|r| references.contains(r))
        })
    }

    /// Find the pseudo-message holding the comment of a context.
    pub fn find_context_comment(&self, context: &str) -> Option<usize> {
        self.index().by_context.get(context).copied()
    }

    /// Drop every obsolete or vanished message. Returns how many were removed.
    pub fn strip_obsolete_messages(&mut self) -> usize {
        let before = self.messages.len();
        self.index.take();
        self.messages.retain(|m| !m.message_type.is_obsolete());
        before - self.messages.len()
    }
}
