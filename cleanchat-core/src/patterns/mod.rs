//! The compiled-in rule table.
//!
//! Rules are data only: a bucket is an ordered list of [`Rule`] templates and
//! nothing here executes a regex. The compiler in `sanitizers::compiler`
//! turns a [`PatternLibrary`] into matchers.
//!
//! License: MIT OR APACHE 2.0

pub mod alphabet;
pub mod template;

mod primary;
mod regional;
mod specific;
mod unbounded;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

pub use alphabet::{Alphabet, Variant, NEVER_MATCH, WORD_BOUNDARY};

use crate::errors::FilterError;

/// A named group of rules sharing one boundary strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// Latin-script words, wrapped in ASCII word boundaries. Case-insensitive.
    Primary,
    /// Cyrillic and other regional words, wrapped in script-aware boundaries.
    Regional,
    /// Self-anchored forms, no added boundary. Case-insensitive.
    Unbounded,
    /// Case-sensitive forms, no added boundary.
    Specific,
}

impl Bucket {
    /// Every bucket, in evaluation order.
    pub const ALL: [Bucket; 4] = [Bucket::Primary, Bucket::Regional, Bucket::Unbounded, Bucket::Specific];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Primary => "primary",
            Bucket::Regional => "regional",
            Bucket::Unbounded => "unbounded",
            Bucket::Specific => "specific",
        }
    }

    /// Only the specific bucket matches without case folding.
    pub fn case_insensitive(&self) -> bool {
        !matches!(self, Bucket::Specific)
    }

    fn slot(self) -> usize {
        match self {
            Bucket::Primary => 0,
            Bucket::Regional => 1,
            Bucket::Unbounded => 2,
            Bucket::Specific => 3,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Bucket {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FilterError::Config(format!("unknown bucket '{s}'")))
    }
}

/// A single rule descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Available in both alphabets.
    Template(&'static str),
    /// Only meaningful with the rich alphabet (the text itself is non-ASCII).
    /// The reduced matchers skip it, and it expands to a never-match pattern
    /// there, so rule indices stay the same in both alphabets.
    RichOnly(&'static str),
}

impl Rule {
    pub fn template(&self) -> &'static str {
        match self {
            Rule::Template(t) | Rule::RichOnly(t) => t,
        }
    }

    /// Whether the rule takes part in matching with the given alphabet.
    pub fn available_in(&self, variant: Variant) -> bool {
        !matches!((self, variant), (Rule::RichOnly(_), Variant::Reduced))
    }

    /// Renders this rule against an alphabet.
    pub fn expand(&self, alphabet: &Alphabet) -> Result<String, FilterError> {
        match (self, alphabet.variant()) {
            (Rule::RichOnly(_), Variant::Reduced) => Ok(NEVER_MATCH.to_string()),
            _ => template::expand(self.template(), alphabet),
        }
    }
}

/// The full rule table: four buckets plus the core profanity range inside
/// the primary bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternLibrary {
    buckets: [Vec<Rule>; 4],
    core: Range<usize>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::stock()
    }
}

impl PatternLibrary {
    /// The built-in rule table.
    pub fn stock() -> Self {
        let primary: Vec<Rule> = primary::PRIMARY_HEAD
            .iter()
            .chain(primary::CORE_PROFANITY)
            .chain(primary::PRIMARY_TAIL)
            .copied()
            .collect();
        let core_start = primary::PRIMARY_HEAD.len();
        let core = core_start..core_start + primary::CORE_PROFANITY.len();

        PatternLibrary {
            buckets: [
                primary,
                regional::REGIONAL.to_vec(),
                unbounded::UNBOUNDED.to_vec(),
                specific::SPECIFIC.to_vec(),
            ],
            core,
        }
    }

    /// An isolated library built from caller-supplied buckets. The core
    /// profanity range starts empty; see [`PatternLibrary::with_core_range`].
    pub fn from_rules(primary: &[Rule], regional: &[Rule], unbounded: &[Rule], specific: &[Rule]) -> Self {
        PatternLibrary {
            buckets: [primary.to_vec(), regional.to_vec(), unbounded.to_vec(), specific.to_vec()],
            core: 0..0,
        }
    }

    /// Replaces one bucket. Replacing the primary bucket clears the core range
    /// if it no longer fits.
    pub fn with_bucket(mut self, bucket: Bucket, rules: Vec<Rule>) -> Self {
        self.buckets[bucket.slot()] = rules;
        if bucket == Bucket::Primary && self.core.end > self.buckets[0].len() {
            log::debug!("Primary bucket replaced; clearing core profanity range {:?}.", self.core);
            self.core = 0..0;
        }
        self
    }

    /// Appends a rule to the end of a bucket.
    pub fn push(&mut self, bucket: Bucket, rule: Rule) {
        self.buckets[bucket.slot()].push(rule);
    }

    /// Marks a range of the primary bucket as the core profanity family.
    pub fn with_core_range(mut self, core: Range<usize>) -> Result<Self, FilterError> {
        if core.start > core.end || core.end > self.buckets[0].len() {
            return Err(FilterError::Config(format!(
                "core range {:?} is outside the primary bucket ({} rules)",
                core,
                self.buckets[0].len()
            )));
        }
        self.core = core;
        Ok(self)
    }

    pub fn rules(&self, bucket: Bucket) -> &[Rule] {
        &self.buckets[bucket.slot()]
    }

    pub fn core_range(&self) -> Range<usize> {
        self.core.clone()
    }

    pub fn core_rules(&self) -> &[Rule] {
        &self.buckets[0][self.core.clone()]
    }

    /// Total number of rules across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stable SHA-256 over every bucket's templates, in order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for bucket in Bucket::ALL {
            hasher.update(bucket.as_str().as_bytes());
            for rule in self.rules(bucket) {
                hasher.update([u8::from(matches!(rule, Rule::RichOnly(_)))]);
                hasher.update(rule.template().as_bytes());
                hasher.update(b"\n");
            }
        }
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_library_shape() {
        let lib = PatternLibrary::stock();
        assert_eq!(lib.rules(Bucket::Primary).len(), 876);
        assert_eq!(lib.rules(Bucket::Regional).len(), 237);
        assert_eq!(lib.rules(Bucket::Unbounded).len(), 159);
        assert_eq!(lib.rules(Bucket::Specific).len(), 1);
        assert_eq!(lib.core_rules().len(), 142);
        assert_eq!(lib.core_range(), 193..335);
    }

    #[test]
    fn stock_library_expands_in_both_alphabets() {
        let lib = PatternLibrary::stock();
        for variant in [Variant::Rich, Variant::Reduced] {
            let alphabet = Alphabet::for_variant(variant);
            for bucket in Bucket::ALL {
                for (index, rule) in lib.rules(bucket).iter().enumerate() {
                    let expanded = rule.expand(alphabet);
                    assert!(expanded.is_ok(), "{bucket}[{index}] {variant}: {expanded:?}");
                }
            }
        }
    }

    #[test]
    fn rich_only_rules_never_match_in_reduced() {
        let rule = Rule::RichOnly("сука");
        assert_eq!(rule.expand(Alphabet::reduced()).ok().as_deref(), Some(NEVER_MATCH));
        assert_eq!(rule.expand(Alphabet::rich()).ok().as_deref(), Some("сука"));
    }

    #[test]
    fn core_range_is_validated() {
        let lib = PatternLibrary::from_rules(&[Rule::Template("a"), Rule::Template("b")], &[], &[], &[]);
        assert!(lib.clone().with_core_range(0..2).is_ok());
        assert!(lib.with_core_range(1..3).is_err());
    }

    #[test]
    fn replacing_primary_clears_stale_core_range() {
        let lib = PatternLibrary::stock().with_bucket(Bucket::Primary, vec![Rule::Template("x")]);
        assert_eq!(lib.core_range(), 0..0);
        assert_eq!(lib.len(), 1 + 237 + 159 + 1);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = PatternLibrary::stock();
        let mut b = PatternLibrary::stock();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.push(Bucket::Specific, Rule::Template("x"));
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn bucket_names_round_trip() {
        for bucket in Bucket::ALL {
            assert_eq!(bucket.as_str().parse::<Bucket>().ok(), Some(bucket));
        }
        assert!("nope".parse::<Bucket>().is_err());
    }
}
