use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::pagination::PageRequest;

const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 100;

/// `?page=&per_page=` query parameters, 1-based.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
pub struct PageParams {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl PageParams {
    pub fn page(&self) -> u64 {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(MAX_PER_PAGE)
    }

    pub fn to_request(&self) -> PageRequest {
        PageRequest {
            page: self.page(),
            per_page: self.per_page(),
        }
    }
}
