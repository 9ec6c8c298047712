//! Page arithmetic for the post listing.

use serde::{Deserialize, Serialize};

use crate::Post;

/// Posts per page. Fixed; clients cannot change it.
pub const PAGE_SIZE: u32 = 8;

/// A 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    /// Returns `None` for page 0.
    pub fn new(page: u32) -> Option<Self> {
        (page >= 1).then_some(Self(page))
    }

    /// Parse the raw `page` query value. A missing value means page 1.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            None | Some("") => Some(Self(1)),
            Some(s) => s.parse::<u32>().ok().and_then(Self::new),
        }
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Rows to skip: `(page - 1) * PAGE_SIZE`.
    pub fn offset(&self) -> u64 {
        u64::from(self.0 - 1) * u64::from(PAGE_SIZE)
    }

    pub fn limit(&self) -> u64 {
        u64::from(PAGE_SIZE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// `ceil(total / PAGE_SIZE)`. Zero posts means zero pages.
pub fn number_of_pages(total: u64) -> u64 {
    total.div_ceil(u64::from(PAGE_SIZE))
}

/// Response body of the paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostsPage {
    pub data: Vec<Post>,
    pub current_page: u32,
    pub number_of_pages: u64,
}

impl PostsPage {
    pub fn new(data: Vec<Post>, page: Page, total: u64) -> Self {
        Self {
            data,
            current_page: page.number(),
            number_of_pages: number_of_pages(total),
        }
    }
}
