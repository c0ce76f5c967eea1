//! Export column names and their human-readable descriptions.

/// Columns of an exported extract, in file order.
pub const EXPORT_COLUMNS: [&str; 10] = [
    "date",
    "flowtype",
    "ReporterCode",
    "PartnerName",
    "cmdCode",
    "qty",
    "primaryvalue",
    "reporter_name",
    "product_description",
    "partner_name",
];

/// Columns shown when previewing an extract in the terminal.
pub const DISPLAY_COLUMNS: [&str; 8] = [
    "date",
    "flowtype",
    "reporter_name",
    "partner_name",
    "cmdCode",
    "product_description",
    "qty",
    "primaryvalue",
];

/// Placeholder for columns without a known description.
pub const NO_DESCRIPTION: &str = "[No description available]";

/// Returns the description of a known column.
pub fn column_description(column: &str) -> Option<&'static str> {
    let description = match column {
        "date" => "Transaction Date",
        "flowtype" => "Trade Flow Type (Import/Export)",
        "ReporterCode" => "Reporter Country Code",
        "reporter_name" => "Reporter Country Name",
        "PartnerName" => "Partner Country Code",
        "partner_name" => "Partner Country Name",
        "cmdCode" => "HS Product Code",
        "product_description" => "HS Product Description",
        "qty" => "Quantity",
        "primaryvalue" => "Trade Value (USD)",
        _ => return None,
    };
    Some(description)
}
