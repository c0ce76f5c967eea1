//! Behavioral tests for scoring, searching and resolving codes.

use proptest::prelude::*;
use trade_match::{
    CodeResolver, MatchThresholds, Resolution, SearchOptions, resolve, score, search,
};
use trade_model::{Code, CodeMapping, ItemKind, MatchCandidate};

fn mapping(entries: &[(u32, &str)]) -> CodeMapping {
    CodeMapping::from_entries(entries.iter().map(|(code, name)| (Code::new(*code), *name)))
        .expect("valid mapping")
}

#[test]
fn exact_name_resolves_without_candidates() {
    let countries = mapping(&[(10, "Turkey"), (11, "Turkmenistan")]);

    let resolution = resolve("turkey", &countries, ItemKind::Country);

    assert_eq!(
        resolution,
        Resolution::Exact {
            code: Code::new(10),
            name: "Turkey".to_string(),
        }
    );
    assert!(resolution.candidates().is_empty());
}

#[test]
fn numeric_literal_is_returned_unvalidated() {
    let countries = mapping(&[(36, "Australia")]);

    let resolution = resolve("792", &countries, ItemKind::Country);

    assert_eq!(resolution.code(), Some(Code::new(792)));
    assert_eq!(resolution.name(), None);
    assert!(resolution.candidates().is_empty());
}

#[test]
fn unknown_query_is_not_found() {
    let countries = mapping(&[(1, "Turkey")]);

    assert_eq!(
        resolve("xyzxyz", &countries, ItemKind::Country),
        Resolution::NotFound
    );
}

#[test]
fn best_fuzzy_candidate_is_selected() {
    let countries = mapping(&[(36, "Australia"), (40, "Austria")]);

    let resolution = resolve("austra", &countries, ItemKind::Country);

    let Resolution::Fuzzy {
        code,
        name,
        candidates,
    } = resolution.clone()
    else {
        panic!("expected a fuzzy resolution, got {resolution:?}");
    };
    assert_eq!(code, Code::new(40));
    assert_eq!(name, "Austria");
    let codes: Vec<u32> = candidates.iter().map(|c| c.code.get()).collect();
    assert_eq!(codes, vec![40, 36]);
    assert!(candidates[0].similarity > candidates[1].similarity);
}

#[test]
fn product_query_uses_substring_override() {
    let products = mapping(&[
        (1, "Animals; live, including bovine, ovine and caprine"),
        (101, "Horses, asses, mules and hinnies; live"),
        (3, "Fish and crustaceans, molluscs and other aquatic invertebrates"),
    ]);

    let resolution = resolve("animals", &products, ItemKind::Product);

    assert_eq!(resolution.code(), Some(Code::new(1)));
    assert_eq!(
        resolution.candidates(),
        &[MatchCandidate::new(
            Code::new(1),
            "Animals; live, including bovine, ovine and caprine",
            0.9
        )]
    );
}

#[test]
fn substring_override_replaces_computed_score() {
    let products = mapping(&[(1, "animals live fish")]);
    let options = SearchOptions::default()
        .with_threshold(0.85)
        .with_partial_match_score(0.9);

    let results = search("animals live", &products, &options);

    assert_eq!(
        results,
        vec![MatchCandidate::new(Code::new(1), "animals live fish", 0.9)]
    );
}

#[test]
fn search_keeps_only_the_best_results() {
    let query = "abcdefghij";
    let names: Vec<String> = (1..=20).map(|k| format!("{query}{}", "x".repeat(k))).collect();
    // Insert worst first so that ranking, not insertion order, decides.
    let entries: Vec<(Code, String)> = names
        .iter()
        .enumerate()
        .rev()
        .map(|(idx, name)| (Code::new(idx as u32 + 1), name.clone()))
        .collect();
    let products = CodeMapping::from_entries(entries).expect("valid mapping");
    let options = SearchOptions::default()
        .with_threshold(0.3)
        .with_max_results(5);

    let results = search(query, &products, &options);

    let codes: Vec<u32> = results.iter().map(|c| c.code.get()).collect();
    assert_eq!(codes, vec![1, 2, 3, 4, 5]);
}

#[test]
fn browse_options_are_looser_than_resolution() {
    let resolver = CodeResolver::default();
    let countries = mapping(&[(36, "Australia")]);

    // "oztraly" vs "australia": 2 * 4 / 16 = 0.5
    assert!(
        search("oztraly", &countries, &resolver.search_options(ItemKind::Country)).is_empty()
    );
    assert_eq!(
        search("oztraly", &countries, &resolver.browse_options()).len(),
        1
    );
}

#[test]
fn overflowing_digits_fall_through_to_name_lookup() {
    let countries = mapping(&[(36, "Australia"), (7, "99999999999")]);

    let resolution = resolve("99999999999", &countries, ItemKind::Country);

    assert!(!matches!(resolution, Resolution::Numeric(_)));
    assert_eq!(
        resolution,
        Resolution::Exact {
            code: Code::new(7),
            name: "99999999999".to_string(),
        }
    );
    assert_eq!(
        resolve("99999999999", &mapping(&[(36, "Australia")]), ItemKind::Country),
        Resolution::NotFound
    );
}

#[test]
fn resolver_reports_its_partial_match_score() {
    let products = mapping(&[(1, "Animals; live, including bovine, ovine and caprine")]);
    let resolver = CodeResolver::default().with_partial_match_score(0.4);

    let resolution = resolver.resolve("animals", &products, ItemKind::Product);

    assert_eq!(resolution.code(), Some(Code::new(1)));
    assert_eq!(resolution.candidates().len(), 1);
    assert_eq!(resolution.candidates()[0].similarity, 0.4);
}

#[test]
fn resolver_limits_candidates() {
    let countries = mapping(&[(36, "Australia"), (40, "Austria")]);
    let resolver = CodeResolver::default().with_max_results(1);

    let resolution = resolver.resolve("austra", &countries, ItemKind::Country);

    assert_eq!(resolution.code(), Some(Code::new(40)));
    assert_eq!(resolution.candidates().len(), 1);
}

#[test]
fn resolver_exposes_its_thresholds() {
    let thresholds = MatchThresholds {
        country: 0.7,
        product: 0.4,
        browse: 0.2,
    };
    let resolver = CodeResolver::new(thresholds);

    assert_eq!(resolver.thresholds(), &thresholds);
    assert_eq!(resolver.search_options(ItemKind::Product).threshold, 0.4);
    assert_eq!(resolver.browse_options().threshold, 0.2);
    assert_eq!(CodeResolver::default().thresholds(), &MatchThresholds::default());
}

proptest! {
    #[test]
    fn identical_strings_score_one(s in "\\PC{1,40}") {
        prop_assert_eq!(score(&s, &s), 1.0);
    }

    #[test]
    fn score_stays_in_unit_interval(a in "\\PC{0,30}", b in "\\PC{0,30}") {
        let value = score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn search_results_are_bounded_and_sorted(
        query in "[a-z ]{0,12}",
        names in proptest::collection::vec("[A-Za-z ]{1,24}", 1..40),
        threshold in 0.0f64..=1.0,
        partial in 0.0f64..=1.0,
        max_results in 0usize..10,
    ) {
        let entries: Vec<(Code, String)> = names
            .into_iter()
            .enumerate()
            .filter(|(_, name)| !name.trim().is_empty())
            .map(|(idx, name)| (Code::new(idx as u32 + 1), name))
            .collect();
        let mapping = CodeMapping::from_entries(entries).expect("non-blank names");
        let options = SearchOptions::default()
            .with_threshold(threshold)
            .with_partial_match_score(partial)
            .with_max_results(max_results);

        let results = search(&query, &mapping, &options);

        prop_assert!(results.len() <= max_results);
        for candidate in &results {
            prop_assert!((0.0..=1.0).contains(&candidate.similarity));
            prop_assert!(mapping.contains(candidate.code));
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn resolved_codes_come_from_the_mapping(query in "[a-z]{1,10}") {
        let countries = mapping(&[
            (36, "Australia"),
            (40, "Austria"),
            (643, "Russian Federation"),
            (792, "Turkey"),
        ]);
        let resolution = resolve(&query, &countries, ItemKind::Country);
        if let Some(code) = resolution.code() {
            prop_assert!(countries.contains(code));
        }
    }
}
