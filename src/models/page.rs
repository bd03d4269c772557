//! Pagination request and result types

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE: i64 = 20;
pub const MAX_PAGE_SIZE: i64 = 2000;

/// Pagination query parameters (`?page=0&size=20&sort=room_number,desc`)
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    /// Zero-based page index (default: 0)
    pub page: Option<i64>,
    /// Page size (default: 20, max: 2000)
    pub size: Option<i64>,
    /// Sort as `property[,asc|desc]` (default: `id,asc`)
    pub sort: Option<String>,
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
            sort: None,
        }
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    pub fn size(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.page().saturating_mul(self.size())
    }

    pub fn sort(&self) -> AppResult<Sort> {
        match self.sort.as_deref() {
            None | Some("") => Ok(Sort::default()),
            Some(raw) => raw.parse(),
        }
    }
}

/// Sortable room properties
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortProperty {
    #[default]
    Id,
    RoomNumber,
    RoomType,
    Floor,
}

impl SortProperty {
    pub fn column(self) -> &'static str {
        match self {
            SortProperty::Id => "id",
            SortProperty::RoomNumber => "room_number",
            SortProperty::RoomType => "room_type",
            SortProperty::Floor => "floor",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub property: SortProperty,
    pub direction: Direction,
}

impl std::str::FromStr for Sort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(2, ',').map(str::trim);

        let property = match parts.next().unwrap_or_default() {
            "id" => SortProperty::Id,
            "room_number" => SortProperty::RoomNumber,
            "room_type" => SortProperty::RoomType,
            "floor" => SortProperty::Floor,
            other => {
                return Err(AppError::Validation(format!("Unknown sort property: {}", other)));
            }
        };

        let direction = match parts.next().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") | Some("asc") => Direction::Asc,
            Some("desc") => Direction::Desc,
            Some(other) => {
                return Err(AppError::Validation(format!("Unknown sort direction: {}", other)));
            }
        };

        Ok(Sort { property, direction })
    }
}

/// One page of results plus the total element count
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index
    pub number: i64,
    pub size: i64,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            number: request.page(),
            size: request.size(),
            total_elements,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 {
            return 0;
        }
        (self.total_elements + self.size - 1) / self.size
    }
}
