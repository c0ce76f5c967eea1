//! Fuzzy search over a code mapping.

use tracing::trace;
use trade_model::{CodeMapping, MatchCandidate};

use crate::options::SearchOptions;
use crate::similarity::score;

/// Scores every mapping entry against `query` and returns the best matches.
///
/// An entry is kept when its similarity reaches `options.threshold`. An
/// entry below the threshold whose lower-cased name contains the query is
/// still kept, but reported with the fixed `options.partial_match_score`
/// instead of its computed similarity.
///
/// Results are sorted by similarity, highest first. Equal scores keep the
/// mapping's insertion order. At most `options.max_results` are returned.
pub fn search(query: &str, mapping: &CodeMapping, options: &SearchOptions) -> Vec<MatchCandidate> {
    let query = query.to_lowercase();
    let partial_score = options.partial_match_score.clamp(0.0, 1.0);

    let mut matches: Vec<MatchCandidate> = mapping
        .iter()
        .filter_map(|(code, name)| {
            let name_lower = name.to_lowercase();
            let similarity = score(&query, &name_lower);
            if similarity >= options.threshold {
                Some(MatchCandidate::new(code, name, similarity))
            } else if name_lower.contains(&query) {
                Some(MatchCandidate::new(code, name, partial_score))
            } else {
                None
            }
        })
        .collect();

    // Stable: equal scores stay in mapping order.
    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    matches.truncate(options.max_results);

    trace!(
        query = %query,
        threshold = options.threshold,
        matches = matches.len(),
        "fuzzy search"
    );
    matches
}

#[cfg(test)]
mod tests {
    use trade_model::Code;

    use super::*;

    fn mapping(entries: &[(u32, &str)]) -> CodeMapping {
        CodeMapping::from_entries(entries.iter().map(|(c, n)| (Code::new(*c), *n))).unwrap()
    }

    #[test]
    fn substring_below_threshold_reports_fixed_score() {
        let mapping = mapping(&[(1, "animals live fish")]);
        // computed ratio is 24 / 29, below 0.9
        let options = SearchOptions::default().with_threshold(0.9);
        let results = search("animals live", &mapping, &options);
        assert_eq!(results, vec![MatchCandidate::new(Code::new(1), "animals live fish", 0.9)]);
    }

    #[test]
    fn substring_override_can_lower_the_reported_score() {
        let mapping = mapping(&[(7, "fish")]);
        // "is" has a ratio of 2 * 2 / 6 = 0.67, below 0.7
        let options = SearchOptions::default()
            .with_threshold(0.7)
            .with_partial_match_score(0.1);
        let results = search("is", &mapping, &options);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].similarity, 0.1);
    }

    #[test]
    fn similarity_above_threshold_wins_over_substring() {
        let mapping = mapping(&[(1, "animals live fish")]);
        let options = SearchOptions::default().with_threshold(0.5);
        let results = search("animals live", &mapping, &options);
        assert_eq!(results.len(), 1);
        assert!((results[0].similarity - 24.0 / 29.0).abs() < 1e-9);
    }

    #[test]
    fn query_is_lowercased() {
        let mapping = mapping(&[(792, "Turkey")]);
        let results = search("TURKEY", &mapping, &SearchOptions::default());
        assert_eq!(results[0].similarity, 1.0);
        assert_eq!(results[0].name, "Turkey");
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mapping = mapping(&[(3, "live goats"), (1, "live sheep"), (2, "live cattle")]);
        let options = SearchOptions::default().with_threshold(1.0);
        let results = search("live", &mapping, &options);
        let codes: Vec<u32> = results.iter().map(|c| c.code.get()).collect();
        assert_eq!(codes, vec![3, 1, 2]);
    }

    #[test]
    fn drops_entries_matching_neither_rule() {
        let mapping = mapping(&[(1, "Turkey")]);
        assert!(search("xyzxyz", &mapping, &SearchOptions::default()).is_empty());
    }

    #[test]
    fn empty_mapping_yields_nothing() {
        assert!(search("turkey", &CodeMapping::new(), &SearchOptions::default()).is_empty());
    }
}
