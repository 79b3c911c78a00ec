/*!
 * Merge option toggles.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A single merge toggle, addressable by name from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOption {
    /// Reuse translations of identical source texts
    SameText,
    /// Reuse translations of source texts differing only in numbers
    Number,
    /// Follow slightly edited source texts at the same location
    SimilarText,
    /// Drop obsolete and vanished entries from the result
    NoObsolete,
    /// Append new entries instead of placing them by location
    NoLocations,
    /// Produce a human-readable summary
    Verbose,
}

impl MergeOption {
    pub const ALL: [MergeOption; 6] = [
        Self::SameText,
        Self::Number,
        Self::SimilarText,
        Self::NoObsolete,
        Self::NoLocations,
        Self::Verbose,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::SameText => "same-text",
            Self::Number => "number",
            Self::SimilarText => "similar-text",
            Self::NoObsolete => "no-obsolete",
            Self::NoLocations => "no-locations",
            Self::Verbose => "verbose",
        }
    }
}

impl std::fmt::Display for MergeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for MergeOption {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|option| option.name() == wanted)
            .ok_or_else(|| ConfigError::InvalidOption(s.to_string()))
    }
}

/// Independent boolean toggles steering a merge.
///
/// The default enables the three recovery heuristics, keeps obsolete
/// entries, tracks locations and stays quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    pub same_text_heuristic: bool,
    pub number_heuristic: bool,
    pub similar_text_heuristic: bool,
    pub no_obsolete: bool,
    pub no_locations: bool,
    pub verbose: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            same_text_heuristic: true,
            number_heuristic: true,
            similar_text_heuristic: true,
            no_obsolete: false,
            no_locations: false,
            verbose: false,
        }
    }
}

impl MergeOptions {
    /// Every toggle off: a plain three-way merge.
    pub fn none() -> Self {
        Self {
            same_text_heuristic: false,
            number_heuristic: false,
            similar_text_heuristic: false,
            no_obsolete: false,
            no_locations: false,
            verbose: false,
        }
    }

    /// Build options from toggle names, starting with everything off.
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::none(), |options, name| {
            Ok(options.with(name.as_ref().parse()?))
        })
    }

    pub fn with(mut self, option: MergeOption) -> Self {
        *self.flag_mut(option) = true;
        self
    }

    pub fn without(mut self, option: MergeOption) -> Self {
        *self.flag_mut(option) = false;
        self
    }

    pub fn is_enabled(&self, option: MergeOption) -> bool {
        match option {
            MergeOption::SameText => self.same_text_heuristic,
            MergeOption::Number => self.number_heuristic,
            MergeOption::SimilarText => self.similar_text_heuristic,
            MergeOption::NoObsolete => self.no_obsolete,
            MergeOption::NoLocations => self.no_locations,
            MergeOption::Verbose => self.verbose,
        }
    }

    /// Names of the enabled toggles, in declaration order.
    pub fn enabled(&self) -> Vec<MergeOption> {
        MergeOption::ALL
            .into_iter()
            .filter(|option| self.is_enabled(*option))
            .collect()
    }

    fn flag_mut(&mut self, option: MergeOption) -> &mut bool {
        match option {
            MergeOption::SameText => &mut self.same_text_heuristic,
            MergeOption::Number => &mut self.number_heuristic,
            MergeOption::SimilarText => &mut self.similar_text_heuristic,
            MergeOption::NoObsolete => &mut self.no_obsolete,
            MergeOption::NoLocations => &mut self.no_locations,
            MergeOption::Verbose => &mut self.verbose,
        }
    }
}
