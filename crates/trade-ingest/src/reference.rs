//! Reference mappings for countries and products.

use std::path::Path;

use tracing::warn;
use trade_model::{Code, CodeMapping, ItemKind};

use crate::countries::load_country_codes;
use crate::error::Result;
use crate::products::load_hs_codes;

/// File name of the country code table inside the data directory.
pub const COUNTRY_CODES_FILE: &str = "countries_codes.csv";
/// File name of the HS classification inside the data directory.
pub const HS_CODES_FILE: &str = "H5.json";

/// Country and product mappings used to resolve and label codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub countries: CodeMapping,
    pub products: CodeMapping,
}

impl ReferenceData {
    /// Loads both mappings from `data_dir`.
    ///
    /// A file that cannot be loaded, or that yields no entries, is replaced
    /// by the built-in defaults with a warning.
    pub fn load(data_dir: &Path) -> Self {
        let countries = load_or_default(
            load_country_codes(&data_dir.join(COUNTRY_CODES_FILE)),
            ItemKind::Country,
        );
        let products = load_or_default(
            load_hs_codes(&data_dir.join(HS_CODES_FILE)),
            ItemKind::Product,
        );
        Self {
            countries,
            products,
        }
    }

    pub fn mapping(&self, kind: ItemKind) -> &CodeMapping {
        match kind {
            ItemKind::Country => &self.countries,
            ItemKind::Product => &self.products,
        }
    }
}

fn load_or_default(loaded: Result<CodeMapping>, kind: ItemKind) -> CodeMapping {
    match loaded {
        Ok(mapping) if !mapping.is_empty() => mapping,
        Ok(_) => {
            warn!(%kind, "no {} codes loaded, using defaults", kind.as_str());
            default_mapping(kind)
        }
        Err(error) => {
            warn!(%kind, %error, "could not load {} codes, using defaults", kind.as_str());
            default_mapping(kind)
        }
    }
}

/// Built-in fallback mapping for a kind.
pub fn default_mapping(kind: ItemKind) -> CodeMapping {
    let entries: &[(u32, &str)] = match kind {
        ItemKind::Country => &[(792, "Turkey"), (643, "Russian Federation")],
        ItemKind::Product => &[(8401, "Nuclear reactors")],
    };
    CodeMapping::from_entries(entries.iter().map(|(code, name)| (Code::new(*code), *name)))
        .unwrap_or_default()
}
