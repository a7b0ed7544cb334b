use thiserror::Error;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Largest page size the default configuration serves.
pub const MAX_PAGE_LIMIT: usize = 1000;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    #[error("skip must be non-negative, got {0}")]
    NegativeSkip(i64),

    #[error("limit must be non-negative, got {0}")]
    NegativeLimit(i64),
}

/// A `skip`/`limit` window over an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    skip: usize,
    limit: usize,
}

impl Page {
    /// Validates raw transport values.
    pub fn new(skip: i64, limit: i64) -> Result<Self, PageError> {
        let skip = usize::try_from(skip).map_err(|_| PageError::NegativeSkip(skip))?;
        let limit = usize::try_from(limit).map_err(|_| PageError::NegativeLimit(limit))?;
        Ok(Self { skip, limit })
    }

    pub const fn first(limit: usize) -> Self {
        Self { skip: 0, limit }
    }

    pub const fn skip(&self) -> usize {
        self.skip
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Caps `limit` at `max`.
    pub(crate) fn bounded(self, max: usize) -> Self {
        Self {
            skip: self.skip,
            limit: self.limit.min(max),
        }
    }

    pub(crate) fn apply<I: Iterator>(self, iter: I) -> impl Iterator<Item = I::Item> {
        iter.skip(self.skip).take(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_LIMIT)
    }
}
