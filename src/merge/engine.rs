/*!
 * Three-way catalog merge.
 *
 * The vernacular catalog (previous translations) is reconciled against the
 * virgin catalog (freshly extracted sources), new sources are added, alien
 * catalogs donate what they can, and the recovery heuristics run over the
 * assembled result.
 */

use log::{debug, info, trace};

use super::heuristics::{number_pass, same_text_pass};
use super::options::MergeOptions;
use super::report::{CounterDelta, MergeStats};
use super::similarity::{LevenshteinScorer, SimilarityScorer};
use crate::catalog::{Catalog, Message, MessageType};

/// Extras key under which PO catalogs keep the plural source text.
pub const PO_MSGID_PLURAL: &str = "po-msgid_plural";

/// Extras key receiving the previous plural source text when it is outdated.
pub const PO_OLD_MSGID_PLURAL: &str = "po-old_msgid_plural";

/// How a vernacular message was found in the virgin catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Same identity and same context, source text and comment
    Exact,
    /// Same id, but context, source text or comment moved
    IdOnly,
    /// Not found by identity, but a slightly edited text sits at the same place
    SimilarText,
    /// Gone from the sources
    Unmatched,
}

/// Outcome of classifying one vernacular message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub message_type: MessageType,
    pub delta: CounterDelta,
}

/// Decide the new state of a vernacular message and its effect on the
/// counters. `plural_matches` only matters for exact matches of finished
/// messages.
pub fn classify(old_type: MessageType, kind: MatchKind, plural_matches: bool) -> Classification {
    use MessageType::{Finished, Obsolete, Unfinished, Vanished};

    let (message_type, delta) = match (kind, old_type) {
        (MatchKind::Exact, Finished) if plural_matches => (Finished, CounterDelta::KNOWN),
        (MatchKind::Exact, Finished) => (Unfinished, CounterDelta::KNOWN),
        (MatchKind::Exact, Unfinished) => (Unfinished, CounterDelta::KNOWN),
        (MatchKind::Exact, Vanished) => (Finished, CounterDelta::NEW),
        (MatchKind::Exact, Obsolete) => (Unfinished, CounterDelta::NEW),
        (MatchKind::IdOnly, _) => (Unfinished, CounterDelta::KNOWN),
        (MatchKind::SimilarText, _) => (Unfinished, CounterDelta::SIMILAR_TEXT),
        (MatchKind::Unmatched, Finished) => (Vanished, CounterDelta::OBSOLETED),
        (MatchKind::Unmatched, Unfinished) => (Obsolete, CounterDelta::OBSOLETED),
        (MatchKind::Unmatched, other) => (other, CounterDelta::NONE),
    };

    Classification {
        message_type,
        delta,
    }
}

/// Result of a merge: the new catalog and what happened on the way.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub catalog: Catalog,
    pub stats: MergeStats,
    /// Human-readable summary, present when verbose reporting was requested
    pub report: Option<String>,
}

/// Merges catalogs according to a set of options and a similarity scorer.
#[derive(Debug, Clone)]
pub struct CatalogMerger<S = LevenshteinScorer> {
    options: MergeOptions,
    scorer: S,
}

impl CatalogMerger<LevenshteinScorer> {
    pub fn new(options: MergeOptions) -> Self {
        Self {
            options,
            scorer: LevenshteinScorer,
        }
    }
}

impl Default for CatalogMerger<LevenshteinScorer> {
    fn default() -> Self {
        Self::new(MergeOptions::default())
    }
}

impl<S: SimilarityScorer> CatalogMerger<S> {
    pub fn with_scorer(options: MergeOptions, scorer: S) -> Self {
        Self { options, scorer }
    }

    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Merge the `vernacular` catalog with the `virgin` one, then let each
    /// `alien` catalog donate translations in turn.
    ///
    /// The inputs are left untouched; every message of the result is an
    /// independent copy.
    pub fn merge(&self, vernacular: &Catalog, virgin: &Catalog, aliens: &[Catalog]) -> MergeResult {
        debug!(
            "Merging {} existing message(s) with {} extracted message(s) and {} alien catalog(s)",
            vernacular.len(),
            virgin.len(),
            aliens.len()
        );

        let mut stats = MergeStats::default();
        let mut out = vernacular.empty_like();

        for msg in vernacular.messages() {
            out.append(self.reconcile(msg, virgin, &mut stats));
        }
        self.add_virgin_only(vernacular, virgin, &mut out, &mut stats);
        for alien in aliens {
            self.merge_alien(alien, &mut out, &mut stats);
        }

        if self.options.same_text_heuristic {
            stats.same_text = same_text_pass(&mut out);
        }
        if self.options.number_heuristic {
            stats.number = number_pass(&mut out);
        }

        if self.options.no_obsolete {
            let removed = out.strip_obsolete_messages();
            debug!("Removed {} obsolete message(s)", removed);
        }

        let report = self.options.verbose.then(|| {
            for line in stats.report_lines(self.options.no_obsolete) {
                info!("{}", line.trim_start());
            }
            stats.report(self.options.no_obsolete)
        });

        MergeResult {
            catalog: out,
            stats,
            report,
        }
    }

    /// Update one vernacular message according to the virgin catalog.
    fn reconcile(&self, old: &Message, virgin: &Catalog, stats: &mut MergeStats) -> Message {
        let mut msg = old.clone();

        if msg.is_context_comment() {
            if let Some(fresh) = virgin
                .find_context_comment(&msg.context)
                .and_then(|i| virgin.message(i))
            {
                msg.comment = fresh.comment.clone();
            }
            return msg;
        }

        let (kind, fresh) = match virgin.find(&msg).and_then(|i| virgin.message(i)) {
            Some(fresh)
                if !fresh.id.is_empty()
                    && (fresh.context != msg.context
                        || fresh.source_text != msg.source_text
                        || fresh.comment != msg.comment) =>
            {
                (MatchKind::IdOnly, Some(fresh))
            }
            Some(fresh) => (MatchKind::Exact, Some(fresh)),
            None => match self.find_similar(&msg, virgin) {
                Some(fresh) => (MatchKind::SimilarText, Some(fresh)),
                None => (MatchKind::Unmatched, None),
            },
        };

        let plural_matches = fresh.is_none_or(|fresh| fresh.plural == msg.plural);
        let classification = classify(msg.message_type, kind, plural_matches);
        stats.apply(classification.delta);
        trace!(
            "'{}' in '{}': {:?} match, {:?} -> {:?}",
            msg.source_text, msg.context, kind, msg.message_type, classification.message_type
        );

        match fresh {
            Some(fresh) => {
                let mut extras = fresh.extras.clone();
                if kind == MatchKind::IdOnly {
                    msg.context = fresh.context.clone();
                    msg.comment = fresh.comment.clone();
                }
                let outdated = match kind {
                    MatchKind::SimilarText => true,
                    MatchKind::IdOnly => fresh.source_text != msg.source_text,
                    _ => false,
                };
                if outdated {
                    if let Some(old_plural) = msg.extra(PO_MSGID_PLURAL).filter(|s| !s.is_empty()) {
                        extras.insert(PO_OLD_MSGID_PLURAL.to_string(), old_plural.to_string());
                    }
                    msg.old_source_text =
                        std::mem::replace(&mut msg.source_text, fresh.source_text.clone());
                }

                // Locations and metadata always follow the latest extraction.
                msg.references = fresh.references.clone();
                msg.plural = fresh.plural;
                msg.extras = extras;
                msg.extra_comment = fresh.extra_comment.clone();
                msg.id = fresh.id.clone();
            }
            None => msg.references.clear(),
        }

        msg.message_type = classification.message_type;
        msg
    }

    /// Virgin message at the same place as `msg` whose text is close enough
    /// to be an edit of it.
    fn find_similar<'v>(&self, msg: &Message, virgin: &'v Catalog) -> Option<&'v Message> {
        if !self.options.similar_text_heuristic {
            return None;
        }
        let fresh = virgin
            .find_by_references(&msg.context, &msg.comment, &msg.references)
            .and_then(|i| virgin.message(i))?;
        self.scorer
            .is_similar(&msg.source_text, &fresh.source_text)
            .then_some(fresh)
    }

    /// Add the messages that only exist in the virgin catalog.
    fn add_virgin_only(
        &self,
        vernacular: &Catalog,
        virgin: &Catalog,
        out: &mut Catalog,
        stats: &mut MergeStats,
    ) {
        for fresh in virgin.messages() {
            if fresh.is_context_comment() {
                if vernacular.find_context_comment(&fresh.context).is_some() {
                    continue;
                }
            } else if vernacular.find(fresh).is_some()
                || self.taken_by_similar_text(fresh, vernacular, virgin)
            {
                continue;
            }

            self.insert(out, fresh.clone());
            if !fresh.is_context_comment() {
                stats.new += 1;
            }
        }
    }

    /// True if `fresh` already replaced an edited vernacular message during
    /// reconciliation.
    fn taken_by_similar_text(&self, fresh: &Message, vernacular: &Catalog, virgin: &Catalog) -> bool {
        if !self.options.similar_text_heuristic {
            return false;
        }
        let Some(old) = vernacular
            .find_by_references(&fresh.context, &fresh.comment, &fresh.references)
            .and_then(|i| vernacular.message(i))
        else {
            return false;
        };
        virgin.find(old).is_none() && self.scorer.is_similar(&old.source_text, &fresh.source_text)
    }

    /// Let an alien catalog fill untranslated entries. Its other translated
    /// messages are kept as obsolete candidates for the translator.
    fn merge_alien(&self, alien: &Catalog, out: &mut Catalog, stats: &mut MergeStats) {
        let mut donated = 0usize;
        for donor in alien.messages() {
            if donor.source_text.is_empty() || !donor.is_translated() {
                continue;
            }

            match out.find(donor) {
                Some(i) => {
                    let receives = out.message(i).is_some_and(|target| {
                        target.message_type != MessageType::Finished && !target.is_translated()
                    });
                    if receives && out.set_translations(i, donor.translations.clone()) {
                        stats.new -= 1;
                        stats.known += 1;
                        donated += 1;
                    }
                }
                None => {
                    let mut candidate = donor.clone();
                    candidate.references.clear();
                    candidate.message_type = if donor.message_type == MessageType::Finished {
                        MessageType::Vanished
                    } else {
                        MessageType::Obsolete
                    };
                    self.insert(out, candidate);
                    stats.known += 1;
                    stats.obsoleted += 1;
                }
            }
        }
        debug!(
            "Alien catalog '{}' donated {} translation(s)",
            alien.language_code, donated
        );
    }

    fn insert(&self, out: &mut Catalog, msg: Message) {
        if self.options.no_locations {
            out.append(msg);
        } else {
            out.append_sorted(msg);
        }
    }
}

/// Merge with the default similarity scorer.
pub fn merge(
    vernacular: &Catalog,
    virgin: &Catalog,
    aliens: &[Catalog],
    options: &MergeOptions,
) -> MergeResult {
    CatalogMerger::new(*options).merge(vernacular, virgin, aliens)
}
