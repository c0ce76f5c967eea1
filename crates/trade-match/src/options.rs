//! Tuning values for fuzzy search and code resolution.

use trade_model::ItemKind;

/// Score reported for a query that appears verbatim inside a name.
pub const DEFAULT_PARTIAL_MATCH_SCORE: f64 = 0.9;

/// Maximum number of candidates returned by a search.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Minimum similarity per lookup context.
///
/// Product names are longer and more varied than country names, so their
/// bar is lower. Browsing searches use the loosest bar of all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    /// Threshold for resolving a country query (default: 0.6).
    pub country: f64,
    /// Threshold for resolving a product query (default: 0.5).
    pub product: f64,
    /// Threshold for exploratory browsing of any kind (default: 0.3).
    pub browse: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            country: 0.6,
            product: 0.5,
            browse: 0.3,
        }
    }
}

impl MatchThresholds {
    /// Resolution threshold for an item kind.
    #[must_use]
    pub fn for_kind(&self, kind: ItemKind) -> f64 {
        match kind {
            ItemKind::Country => self.country,
            ItemKind::Product => self.product,
        }
    }
}

/// Parameters of a single fuzzy search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub threshold: f64,
    pub partial_match_score: f64,
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: MatchThresholds::default().country,
            partial_match_score: DEFAULT_PARTIAL_MATCH_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchOptions {
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_partial_match_score(mut self, score: f64) -> Self {
        self.partial_match_score = score;
        self
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}
