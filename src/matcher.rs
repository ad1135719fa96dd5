//! Configurable composition of the class predicates.
//!
//! A [`StatusMatcher`] answers "is this one of the codes I care about" for a
//! chosen set of classes, either strictly (registered codes only) or loosely
//! (whole decades).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::config::{MatcherConfig, config};
use crate::status::StatusClass;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Registered codes only.
    #[default]
    Strict,
    /// Any integer in the class decade.
    Loose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMatcher {
    strictness: Strictness,
    classes: Vec<StatusClass>,
}

impl StatusMatcher {
    /// Duplicate classes are collapsed. No classes means nothing matches.
    pub fn new(strictness: Strictness, classes: impl IntoIterator<Item = StatusClass>) -> Self {
        let mut classes: Vec<StatusClass> = classes.into_iter().collect();
        classes.sort_unstable();
        classes.dedup();
        debug!("status matcher: {strictness:?} over {classes:?}");
        Self {
            strictness,
            classes,
        }
    }

    /// Every class.
    pub fn any(strictness: Strictness) -> Self {
        Self::new(strictness, StatusClass::ALL)
    }

    pub fn from_config(cfg: &MatcherConfig) -> Self {
        Self::new(cfg.strictness, cfg.classes.iter().copied())
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn classes(&self) -> &[StatusClass] {
        &self.classes
    }

    pub fn matches<C: Candidate + ?Sized>(&self, value: &C) -> bool {
        self.matching_class(value).is_some()
    }

    /// The first configured class that accepts `value`.
    pub fn matching_class<C: Candidate + ?Sized>(&self, value: &C) -> Option<StatusClass> {
        self.classes.iter().copied().find(|class| match self.strictness {
            Strictness::Strict => class.is_strict(value),
            Strictness::Loose => class.is_loose(value),
        })
    }
}

/// Built from the process-wide [`config()`].
impl Default for StatusMatcher {
    fn default() -> Self {
        Self::from_config(config())
    }
}
