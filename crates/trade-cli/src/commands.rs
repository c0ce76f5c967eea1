use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use trade_cli::extract::{ExtractRequest, build_filter};
use trade_ingest::ReferenceData;
use trade_match::{CodeResolver, search};
use trade_model::ItemKind;
use trade_output::{default_output_path, write_extract};
use trade_store::{TradeStore, enrich};

use crate::cli::{ExtractArgs, PathArgs};
use crate::summary::{print_candidates, print_extract, print_mapping, print_resolution};

pub fn run_list(paths: &PathArgs, kind: ItemKind) -> Result<()> {
    let reference = ReferenceData::load(&paths.data_dir);
    print_mapping(kind, reference.mapping(kind));
    Ok(())
}

pub fn run_search(paths: &PathArgs, kind: ItemKind, term: &str) -> Result<()> {
    let reference = ReferenceData::load(&paths.data_dir);
    let resolver = CodeResolver::default();
    let candidates = search(
        &term.to_lowercase(),
        reference.mapping(kind),
        &resolver.browse_options(),
    );
    info!(%kind, term, matches = candidates.len(), "search complete");
    print_candidates(kind, term, &candidates);
    Ok(())
}

pub fn run_extract(paths: &PathArgs, args: &ExtractArgs) -> Result<()> {
    let span = info_span!("extract", database = %paths.database.display());
    let _guard = span.enter();
    let start = Instant::now();

    let store = TradeStore::open(&paths.database).context("open trade database")?;
    let reference = ReferenceData::load(&paths.data_dir);
    let resolver = CodeResolver::default();

    println!("Extracting data from: {}", store.path().display());
    let request = ExtractRequest {
        date: args.date,
        country: args.country.clone(),
        product: args.product.clone(),
    };
    let resolved = build_filter(&request, &reference, &resolver)?;
    if let Some(date) = &resolved.filter.date {
        println!("Date filter: {date}");
    }
    for query in &resolved.resolutions {
        print_resolution(query);
    }
    println!();

    let records = store.fetch(&resolved.filter).context("query trade records")?;
    let rows = enrich(&records, &reference.countries, &reference.products);
    print_extract(&rows, args.limit);

    if args.csv && !rows.is_empty() {
        let now = Local::now().naive_local();
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&paths.output_dir, now));
        let outcome = write_extract(&rows, &path, now)
            .with_context(|| format!("save extract to {}", path.display()))?;
        println!("\nData saved to: {}", outcome.csv_path.display());
        println!("Column descriptions: {}", outcome.columns_path.display());
        println!("Records count: {}", outcome.records);
    }

    info!(
        records = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "extract complete"
    );
    Ok(())
}

