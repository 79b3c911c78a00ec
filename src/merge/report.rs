/*!
 * Merge counters and their human-readable summary.
 */

use serde::Serialize;

/// Change applied to the merge counters by one classified message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterDelta {
    pub known: i64,
    pub new: i64,
    pub obsoleted: i64,
    pub similar_text: usize,
}

impl CounterDelta {
    pub const NONE: Self = Self {
        known: 0,
        new: 0,
        obsoleted: 0,
        similar_text: 0,
    };
    pub const KNOWN: Self = Self { known: 1, ..Self::NONE };
    pub const NEW: Self = Self { new: 1, ..Self::NONE };
    pub const OBSOLETED: Self = Self { obsoleted: 1, ..Self::NONE };
    pub const SIMILAR_TEXT: Self = Self {
        new: 1,
        similar_text: 1,
        ..Self::NONE
    };
}

/// Counters collected over one merge.
///
/// `known`, `new` and `obsoleted` are signed: a translation donated by an
/// alien catalog moves an entry from `new` to `known`, which can drive `new`
/// below zero when the receiving entry was already counted as known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub known: i64,
    pub new: i64,
    pub obsoleted: i64,
    pub same_text: usize,
    pub number: usize,
    pub similar_text: usize,
}

impl MergeStats {
    /// Source texts found in total, new and already existing.
    pub fn found(&self) -> i64 {
        self.new + self.known
    }

    pub fn apply(&mut self, delta: CounterDelta) {
        self.known += delta.known;
        self.new += delta.new;
        self.obsoleted += delta.obsoleted;
        self.similar_text += delta.similar_text;
    }

    /// Summary lines; `stripped` tells whether obsolete entries were dropped.
    pub fn report_lines(&self, stripped: bool) -> Vec<String> {
        let mut lines = vec![format!(
            "    Found {} source text(s) ({} new and {} already existing)",
            self.found(),
            self.new,
            self.known
        )];

        if self.obsoleted != 0 {
            let verb = if stripped { "Removed" } else { "Kept" };
            lines.push(format!("    {} {} obsolete entries", verb, self.obsoleted));
        }
        if self.number != 0 {
            lines.push(format!(
                "    Number heuristic provided {} translation(s)",
                self.number
            ));
        }
        if self.same_text != 0 {
            lines.push(format!(
                "    Same-text heuristic provided {} translation(s)",
                self.same_text
            ));
        }
        if self.similar_text != 0 {
            lines.push(format!(
                "    Similar-text heuristic provided {} translation(s)",
                self.similar_text
            ));
        }
        lines
    }

    /// The summary as one newline-terminated block of text.
    pub fn report(&self, stripped: bool) -> String {
        self.report_lines(stripped)
            .into_iter()
            .map(|line| line + "\n")
            .collect()
    }
}
