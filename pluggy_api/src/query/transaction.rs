use chrono::NaiveDate;
use url::Url;

use super::common::Query;

/// Filters for the `/transactions` endpoint: a date window and pagination.
#[derive(Default, Clone, Copy)]
pub struct TransactionFilters {
    /// Only transactions on or after this date.
    pub from: Option<NaiveDate>,
    /// Only transactions on or before this date.
    pub to: Option<NaiveDate>,
    /// Page of transactions to retrieve (1-indexed).
    pub page: Option<i64>,
    /// Amount of transactions per page.
    pub page_size: Option<i64>,
}

impl Query for TransactionFilters {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(from) = self.from {
            url.query_pairs_mut()
                .append_pair("from", &from.format("%Y-%m-%d").to_string());
        }
        if let Some(to) = self.to {
            url.query_pairs_mut()
                .append_pair("to", &to.format("%Y-%m-%d").to_string());
        }
        if let Some(page) = self.page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        if let Some(page_size) = self.page_size {
            url.query_pairs_mut()
                .append_pair("pageSize", &page_size.to_string());
        }
        url
    }
}

impl TransactionFilters {
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }
    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }
    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.page_size = Some(page_size);
        self
    }
}
