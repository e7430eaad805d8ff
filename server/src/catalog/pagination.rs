use crate::error::ApiError;

/// Page size for the paginated search endpoints.
pub const PAGE_SIZE: i64 = 10;

/// A validated, 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageRequest {
    pub fn new(page: i64) -> Result<Self, ApiError> {
        if page < 1 {
            return Err(ApiError::validation("page must be a positive integer"));
        }
        Ok(Self { page })
    }

    /// Parses the raw `page` query parameter. Absent or blank means page 1.
    pub fn parse(raw: Option<&str>) -> Result<Self, ApiError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(value) => {
                let page = value
                    .parse::<i64>()
                    .map_err(|_| ApiError::validation("page must be a positive integer"))?;
                Self::new(page)
            }
        }
    }

    pub fn number(&self) -> i64 {
        self.page
    }

    /// Row offset of the first item, or `None` when it does not fit in an `i64`.
    fn checked_offset(&self) -> Option<i64> {
        (self.page - 1).checked_mul(PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.checked_offset().unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        PAGE_SIZE
    }

    /// Rejects pages past the end of a result set of `count` rows.
    /// Page 1 is always valid, even when there are no rows.
    pub fn check_in_range(&self, count: i64) -> Result<(), ApiError> {
        if self.page == 1 {
            return Ok(());
        }
        match self.checked_offset() {
            Some(offset) if offset < count => Ok(()),
            _ => Err(ApiError::NotFound("Invalid page".to_string())),
        }
    }
}

/// One page of a larger result set.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: i64,
    pub page: i64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            page: 1,
        }
    }

    pub fn next(&self) -> Option<i64> {
        self.page
            .checked_mul(PAGE_SIZE)
            .is_some_and(|end| end < self.count)
            .then(|| self.page + 1)
    }

    pub fn previous(&self) -> Option<i64> {
        (self.page > 1).then_some(self.page - 1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
            page: self.page,
        }
    }
}
