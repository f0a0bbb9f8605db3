//! Pagination and sort types for list operations.

use crate::{FleetError, FleetResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction in which a page is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Oldest first.
    #[default]
    Asc,
    /// Newest first.
    Desc,
}

impl SortDirection {
    /// Interprets the `sort` query parameter.
    ///
    /// Only the literal `"desc"` selects descending order; anything else,
    /// including absence, is ascending.
    #[must_use]
    pub fn from_query(sort: Option<&str>) -> Self {
        match sort {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Returns true if this is descending order.
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self, Self::Desc)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

/// A request for a page of results, always ordered by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: u32,
    /// The number of items per page.
    pub size: u32,
    /// The ordering applied to the sort field.
    pub direction: SortDirection,
}

impl PageRequest {
    /// The field every page is sorted by.
    pub const SORT_FIELD: &'static str = "created_at";

    /// Creates a new page request.
    ///
    /// Fails if `size` is zero.
    pub fn new(page: u32, size: u32, direction: SortDirection) -> FleetResult<Self> {
        if size < 1 {
            return Err(FleetError::invalid_argument(
                "Page size must not be less than one",
            ));
        }

        Ok(Self {
            page,
            size,
            direction,
        })
    }

    /// Builds a page request from raw query parameters.
    pub fn from_query(page: u32, size: u32, sort: Option<&str>) -> FleetResult<Self> {
        Self::new(page, size, SortDirection::from_query(sort))
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size as u64
    }
}
