//! Resolution of free-text queries to reference codes.

use tracing::debug;
use trade_model::{Code, CodeMapping, ItemKind, MatchCandidate};

use crate::options::{
    DEFAULT_MAX_RESULTS, DEFAULT_PARTIAL_MATCH_SCORE, MatchThresholds, SearchOptions,
};
use crate::search::search;

/// Outcome of resolving a query against a mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The query was a numeric literal, taken as the code without lookup.
    ///
    /// The code is not checked against the mapping.
    Numeric(Code),
    /// A mapping name equals the query, ignoring case.
    Exact { code: Code, name: String },
    /// No exact match; the best fuzzy candidate was selected.
    ///
    /// `candidates` holds the full ranked list, selected entry first.
    Fuzzy {
        code: Code,
        name: String,
        candidates: Vec<MatchCandidate>,
    },
    /// Nothing matched.
    NotFound,
}

impl Resolution {
    /// The resolved code, if any.
    pub fn code(&self) -> Option<Code> {
        match self {
            Self::Numeric(code) | Self::Exact { code, .. } | Self::Fuzzy { code, .. } => {
                Some(*code)
            }
            Self::NotFound => None,
        }
    }

    /// The resolved name. Numeric resolutions carry no name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Exact { name, .. } | Self::Fuzzy { name, .. } => Some(name),
            Self::Numeric(_) | Self::NotFound => None,
        }
    }

    /// Ranked fuzzy candidates; empty unless the query was resolved fuzzily.
    pub fn candidates(&self) -> &[MatchCandidate] {
        match self {
            Self::Fuzzy { candidates, .. } => candidates,
            _ => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Resolves queries using configurable per-kind thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeResolver {
    thresholds: MatchThresholds,
    partial_match_score: f64,
    max_results: usize,
}

impl Default for CodeResolver {
    fn default() -> Self {
        Self::new(MatchThresholds::default())
    }
}

impl CodeResolver {
    pub fn new(thresholds: MatchThresholds) -> Self {
        Self {
            thresholds,
            partial_match_score: DEFAULT_PARTIAL_MATCH_SCORE,
            max_results: DEFAULT_MAX_RESULTS,
        }
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

    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    /// Search options used for the fuzzy fallback of `kind`.
    pub fn search_options(&self, kind: ItemKind) -> SearchOptions {
        SearchOptions {
            threshold: self.thresholds.for_kind(kind),
            partial_match_score: self.partial_match_score,
            max_results: self.max_results,
        }
    }

    /// Search options for exploratory browsing, independent of kind.
    pub fn browse_options(&self) -> SearchOptions {
        SearchOptions {
            threshold: self.thresholds.browse,
            partial_match_score: self.partial_match_score,
            max_results: self.max_results,
        }
    }

    /// Resolves `query` to a code of the given kind.
    ///
    /// Checks, in order: a numeric literal, an exact case-insensitive name
    /// match, then a fuzzy search whose top candidate is selected.
    pub fn resolve(&self, query: &str, mapping: &CodeMapping, kind: ItemKind) -> Resolution {
        if let Some(code) = Code::from_digits(query) {
            debug!(%kind, %code, "query is a numeric code");
            return Resolution::Numeric(code);
        }

        let query_lower = query.to_lowercase();
        if let Some((code, name)) = mapping
            .iter()
            .find(|(_, name)| name.to_lowercase() == query_lower)
        {
            debug!(%kind, %code, name, "exact name match");
            return Resolution::Exact {
                code,
                name: name.to_string(),
            };
        }

        let candidates = search(&query_lower, mapping, &self.search_options(kind));
        let Some(best) = candidates.first() else {
            debug!(%kind, query, "no match");
            return Resolution::NotFound;
        };
        debug!(
            %kind,
            code = %best.code,
            name = %best.name,
            similarity = best.similarity,
            candidates = candidates.len(),
            "selected best fuzzy match"
        );
        Resolution::Fuzzy {
            code: best.code,
            name: best.name.clone(),
            candidates,
        }
    }
}

/// Resolves `query` with the default thresholds.
pub fn resolve(query: &str, mapping: &CodeMapping, kind: ItemKind) -> Resolution {
    CodeResolver::default().resolve(query, mapping, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(entries: &[(u32, &str)]) -> CodeMapping {
        CodeMapping::from_entries(entries.iter().map(|(c, n)| (Code::new(*c), *n))).unwrap()
    }

    #[test]
    fn numeric_query_bypasses_lookup() {
        let mapping = mapping(&[(36, "Australia")]);
        let resolution = resolve("792", &mapping, ItemKind::Country);
        assert_eq!(resolution, Resolution::Numeric(Code::new(792)));
        assert_eq!(resolution.name(), None);
        assert!(resolution.candidates().is_empty());
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let mapping = mapping(&[(10, "Turkey"), (11, "Turkmenistan")]);
        let resolution = resolve("TURKEY", &mapping, ItemKind::Country);
        assert_eq!(
            resolution,
            Resolution::Exact {
                code: Code::new(10),
                name: "Turkey".to_string()
            }
        );
    }

    #[test]
    fn exact_match_takes_first_entry_in_order() {
        let mapping = mapping(&[(2, "Georgia"), (1, "GEORGIA")]);
        let resolution = resolve("georgia", &mapping, ItemKind::Country);
        assert_eq!(resolution.code(), Some(Code::new(2)));
    }

    #[test]
    fn kind_selects_threshold() {
        // "milk" vs "mint" shares "mi": 2 * 2 / 8 = 0.5
        let mapping = mapping(&[(1, "Mint")]);
        assert_eq!(
            resolve("milk", &mapping, ItemKind::Country),
            Resolution::NotFound
        );
        let product = resolve("milk", &mapping, ItemKind::Product);
        assert_eq!(product.code(), Some(Code::new(1)));
        assert_eq!(product.candidates().len(), 1);
    }

    #[test]
    fn custom_thresholds_are_used() {
        let mapping = mapping(&[(1, "Austria")]);
        let strict = CodeResolver::new(MatchThresholds {
            country: 0.99,
            product: 0.99,
            browse: 0.99,
        });
        assert_eq!(
            strict.resolve("austra", &mapping, ItemKind::Country),
            Resolution::NotFound
        );
        assert!(resolve("austra", &mapping, ItemKind::Country).is_found());
    }
}
