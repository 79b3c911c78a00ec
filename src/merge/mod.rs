/*!
 * Catalog merging.
 *
 * This module contains the merge engine and its building blocks:
 *
 * - `engine`: three-way merge and message state classification
 * - `heuristics`: same-text and number recovery passes
 * - `numbers`: number spans, shape keys and number realignment
 * - `similarity`: pluggable text similarity scoring
 * - `options`: merge toggles
 * - `report`: counters and the human-readable summary
 */

pub use self::engine::{
    CatalogMerger, Classification, MatchKind, MergeResult, PO_MSGID_PLURAL, PO_OLD_MSGID_PLURAL,
    classify, merge,
};
pub use self::heuristics::{number_pass, same_text_pass};
pub use self::numbers::{number_span_length, realign, zeroed_shape};
pub use self::options::{MergeOption, MergeOptions};
pub use self::report::{CounterDelta, MergeStats};
pub use self::similarity::{LevenshteinScorer, SimilarityScorer, TEXT_SIMILARITY_THRESHOLD};

pub mod engine;
pub mod heuristics;
pub mod numbers;
pub mod options;
pub mod report;
pub mod similarity;
