#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Numeric identifier of a country (UN M49) or a product category (HS).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Code(u32);

impl Code {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Parses a string made only of ASCII digits.
    ///
    /// Signs, whitespace and separators are rejected, as is a value that
    /// overflows the code range.
    pub fn from_digits(value: &str) -> Option<Self> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value.parse().ok().map(Self)
    }
}

impl From<u32> for Code {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for Code {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s.trim()).ok_or_else(|| ModelError::InvalidCode(s.to_string()))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The reference domain a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Country,
    Product,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Product => "product",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Self::Country => "countries",
            Self::Product => "products",
        }
    }

    /// Capitalized singular label used at the start of user-facing messages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Product => "Product",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
