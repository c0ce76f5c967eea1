use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use trade_cli::extract::{ExtractSummary, ResolvedQuery, format_amount};
use trade_match::Resolution;
use trade_model::{
    CodeMapping, DISPLAY_COLUMNS, ExtractedRow, ItemKind, MatchCandidate, NO_DESCRIPTION,
    column_description,
};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(150);
}

/// Prints how each filter query was resolved.
///
/// Fuzzy resolutions list the ranked candidates before the selected one.
pub fn print_resolution(resolved: &ResolvedQuery) {
    match &resolved.resolution {
        Resolution::Fuzzy {
            code,
            name,
            candidates,
        } => {
            println!(
                "{} '{}' not found exactly. Did you mean:",
                resolved.kind.title(),
                resolved.query
            );
            for (idx, candidate) in candidates.iter().enumerate() {
                println!(
                    "  {}. {}: {} (similarity: {:.2})",
                    idx + 1,
                    candidate.code,
                    candidate.name,
                    candidate.similarity
                );
            }
            println!("\nUsing: {name} (code: {code})");
        }
        Resolution::Exact { code, name } => {
            println!("{} filter: {name} (code: {code})", resolved.kind.title());
        }
        Resolution::Numeric(code) => {
            println!("{} filter: code {code}", resolved.kind.title());
        }
        Resolution::NotFound => {}
    }
}

pub fn print_mapping(kind: ItemKind, mapping: &CodeMapping) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Name")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (code, name) in mapping.sorted_by_code() {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }
    println!("AVAILABLE {}", kind.plural().to_uppercase());
    println!("{table}");
    println!("\nTotal: {} {}", mapping.len(), kind.plural());
}

pub fn print_candidates(kind: ItemKind, term: &str, candidates: &[MatchCandidate]) {
    println!("Searching for {} similar to: '{term}'", kind.plural());
    if candidates.is_empty() {
        println!("No similar {} found", kind.plural());
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Code"),
        header_cell("Name"),
        header_cell("Similarity"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (idx, candidate) in candidates.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(candidate.code),
            Cell::new(&candidate.name),
            Cell::new(format!("{:.2}", candidate.similarity)),
        ]);
    }
    println!("\nTop matches:");
    println!("{table}");
}

/// Prints column descriptions, the first `limit` rows and the summary.
pub fn print_extract(rows: &[ExtractedRow], limit: usize) {
    if rows.is_empty() {
        println!("No data to display");
        return;
    }
    println!("TRADE DATA EXTRACTION RESULTS");

    println!("\nColumn descriptions:");
    for column in DISPLAY_COLUMNS {
        println!(
            "  {column}: {}",
            column_description(column).unwrap_or(NO_DESCRIPTION)
        );
    }

    let mut table = Table::new();
    table.set_header(DISPLAY_COLUMNS.into_iter().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for row in rows.iter().take(limit) {
        table.add_row(vec![
            Cell::new(&row.date),
            Cell::new(&row.flow_type),
            Cell::new(&row.reporter_name),
            Cell::new(&row.partner_name),
            Cell::new(&row.cmd_code),
            Cell::new(&row.product_description),
            optional_cell(row.qty),
            optional_cell(row.primary_value),
        ]);
    }
    println!("\n{table}");
    if rows.len() > limit {
        println!("... {} more rows not shown", rows.len() - limit);
    }
    println!("\nTotal records: {}", rows.len());

    print_summary(&ExtractSummary::from_rows(rows));
}

fn print_summary(summary: &ExtractSummary) {
    println!("\nSUMMARY:");
    for (flow, count) in &summary.flow_counts {
        println!("{flow}: {count} records");
    }
    println!("Unique reporter countries: {}", summary.unique_reporters);
    println!("Unique partner countries: {}", summary.unique_partners);
    if let Some(value) = summary.total_value {
        println!("Total trade value: ${}", format_amount(value));
    }
    if let Some(quantity) = summary.total_quantity {
        println!("Total quantity: {}", format_amount(quantity));
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_amount(value)),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
