// src/matcher.rs
//! Tiered category normalization against the closed vocabulary.
//!
//! `resolve` reconciles an arbitrary candidate string with the taxonomy in
//! four passes, ordered from most to least confident: whole-string exact,
//! single-token exact, substring per token, then an approximate pass using
//! `strsim::normalized_levenshtein`. The first tier that produces a result
//! wins; an empty string is the ordinary no-match outcome, never an error.

use crate::taxonomy::Taxonomy;
use strsim::normalized_levenshtein;

/// Minimum similarity for an approximate candidate to be considered at all.
pub const FUZZY_SELECT_CUTOFF: f64 = 0.75;
/// Stricter ratio the selected candidate must exceed to be accepted.
pub const FUZZY_ACCEPT_RATIO: f64 = 0.8;

/// Pure matcher over a fixed vocabulary. Lowercased labels are precomputed
/// once at construction; `resolve` does no I/O and holds no locks, so a
/// shared matcher is safe to call from any number of tasks.
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    labels: Vec<String>,
    lowered: Vec<String>,
}

impl CategoryMatcher {
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let labels: Vec<String> = taxonomy.labels().to_vec();
        let lowered = labels.iter().map(|l| l.to_lowercase()).collect();
        Self { labels, lowered }
    }

    /// Matcher over the embedded default vocabulary.
    pub fn builtin() -> Self {
        Self::new(Taxonomy::builtin())
    }

    /// Normalize `candidate` to a taxonomy label, or `""` when nothing in the
    /// vocabulary denotes it. Total and deterministic; ties within a tier go
    /// to the earliest label in taxonomy order.
    pub fn resolve(&self, candidate: &str) -> String {
        if candidate.trim().is_empty() {
            return String::new();
        }
        let needle = candidate.to_lowercase();

        // Whole-string exact match, case-insensitive.
        if let Some(i) = self.lowered.iter().position(|l| *l == needle) {
            return self.labels[i].clone();
        }

        let tokens: Vec<&str> = needle.split_whitespace().collect();

        // Single-token exact match, evaluated against the token rather than
        // the raw string. Redundant with the pass above for already-trimmed
        // single words; kept to mirror the reference tier order.
        if let [only] = tokens.as_slice() {
            if let Some(i) = self.lowered.iter().position(|l| l.as_str() == *only) {
                return self.labels[i].clone();
            }
        }

        // Substring per token: compound candidates like "beef tacos" often
        // carry exactly one word the vocabulary knows. The first token that
        // hits anything decides; later tokens are not consulted.
        for token in &tokens {
            if let Some(i) = self.lowered.iter().position(|l| l.contains(token)) {
                return self.labels[i].clone();
            }
        }

        // Approximate pass: pick the single closest label above the selection
        // cutoff, then accept it only when the ratio is comfortably high.
        let mut best: Option<(usize, f64)> = None;
        for (i, lowered) in self.lowered.iter().enumerate() {
            let sim = normalized_levenshtein(&needle, lowered);
            if sim >= FUZZY_SELECT_CUTOFF && best.map_or(true, |(_, b)| sim > b) {
                best = Some((i, sim));
            }
        }
        match best {
            Some((i, sim)) if sim > FUZZY_ACCEPT_RATIO => self.labels[i].clone(),
            _ => String::new(),
        }
    }
}
