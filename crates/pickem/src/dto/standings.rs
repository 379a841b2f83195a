use serde::Deserialize;
use utoipa::IntoParams;

use super::common::{DEFAULT_PAGE_SIZE, Pagination};

#[derive(Debug, Deserialize, IntoParams)]
pub struct StandingsFilter {
    /// Last week included; defaults to the current week.
    pub through_week: Option<u32>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl StandingsFilter {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()?;

        if let Some(week) = self.through_week
            && week < 1
        {
            return Err("through_week must be >= 1".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ScoreQuery {
    /// Restrict to one week; all weeks when omitted.
    pub week: Option<u32>,
}
