//! Domain Value Objects
//!
//! Validated search parameters. Query strings arrive as text; these types
//! are the only way into a search.

use crate::error::{CatalogError, CatalogResult};

/// 1-based result page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    /// Parse a `page` query value; absent means the first page
    ///
    /// Digits only. Zero is rejected since pages are 1-based.
    pub fn parse(raw: Option<&str>) -> CatalogResult<Self> {
        let Some(raw) = raw else {
            return Ok(Self::FIRST);
        };

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CatalogError::InvalidPage);
        }

        match raw.parse::<u64>() {
            Ok(0) | Err(_) => Err(CatalogError::InvalidPage),
            Ok(page) => Ok(Self(page)),
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Four-digit release year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseYear(i64);

impl ReleaseYear {
    pub fn parse(raw: &str) -> CatalogResult<Self> {
        if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CatalogError::InvalidYear);
        }
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| CatalogError::InvalidYear)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

/// Movie search criteria; empty criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieFilter {
    /// Substring of the primary or original title
    pub title: Option<String>,
    pub year: Option<ReleaseYear>,
}

impl MovieFilter {
    /// Build from raw query values; empty strings are ignored
    pub fn parse(title: Option<String>, year: Option<&str>) -> CatalogResult<Self> {
        let title = title.filter(|t| !t.is_empty());
        let year = match year.filter(|y| !y.is_empty()) {
            Some(raw) => Some(ReleaseYear::parse(raw)?),
            None => None,
        };
        Ok(Self { title, year })
    }
}
