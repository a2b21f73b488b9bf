use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Pagination {
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> AppResult<Self> {
        let page = page.unwrap_or(1);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page < 1 {
            return Err(AppError::invalid_input("page must be at least 1"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::invalid_input(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        // SQL OFFSET is a signed 64-bit value.
        let fits = (page - 1)
            .checked_mul(page_size)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !fits {
            return Err(AppError::invalid_input("page is out of range"));
        }
        Ok(Self { page, page_size })
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Paged<T> {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub items: Vec<T>,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total: u64, pagination: Pagination) -> Self {
        Self {
            total,
            page: pagination.page,
            page_size: pagination.page_size,
            items,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<SortOrder> for sea_orm::Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let p = Pagination::new(None, None).unwrap();
        assert_eq!((p.page, p.page_size, p.offset()), (1, 10, 0));
    }

    #[test]
    fn offset_skips_previous_pages() {
        let p = Pagination::new(Some(3), Some(20)).unwrap();
        assert_eq!(p.offset(), 40);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Pagination::new(Some(0), None).is_err());
        assert!(Pagination::new(None, Some(0)).is_err());
        assert!(Pagination::new(None, Some(101)).is_err());
        assert!(Pagination::new(None, Some(100)).is_ok());
    }

    #[test]
    fn huge_page_is_invalid_input_not_overflow() {
        let err = Pagination::new(Some(u64::MAX), None).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!(Pagination::new(Some(u64::MAX / 2), Some(100)).is_err());

        let last = i64::MAX as u64 / 10 + 1;
        assert!(Pagination::new(Some(last), Some(10)).is_ok());
    }
}
