/*!
 * # catmerge - localization catalog merge engine
 *
 * Updates a catalog of translated strings after the source strings of a
 * program were re-extracted.
 *
 * ## Features
 *
 * - Three-way merge of the previous catalog, the freshly extracted one and
 *   any number of auxiliary ("alien") catalogs
 * - Lifecycle classification of every message (finished, unfinished,
 *   obsolete, vanished)
 * - Translation recovery heuristics:
 *   - same text translated elsewhere in the catalog
 *   - same text up to its numbers, with the numbers relocated
 *   - slightly edited text at the same source location
 * - Merge counters and an optional human-readable summary
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `catalog`: message and catalog model with identity lookups
 * - `merge`: the merge engine:
 *   - `merge::engine`: three-way merge and state classification
 *   - `merge::heuristics`: same-text and number passes
 *   - `merge::numbers`: number spans, shape keys, number realignment
 *   - `merge::similarity`: pluggable similarity scoring
 * - `app_config`: configuration management
 * - `language_utils`: catalog language code utilities
 * - `errors`: custom error types for the library
 *
 * Reading and writing catalog files is left to the caller; all model types
 * are serde-serializable.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::needless_range_loop)]

// Public modules
pub mod app_config;
pub mod catalog;
pub mod errors;
pub mod language_utils;
pub mod merge;

// Re-export main types for easier usage
pub use app_config::Config;
pub use catalog::{Catalog, Message, MessageType, Reference};
pub use errors::{AppError, ConfigError};
pub use merge::{CatalogMerger, MergeOptions, MergeResult, MergeStats, merge};
