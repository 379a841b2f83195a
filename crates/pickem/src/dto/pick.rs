use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::TotalPick;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPickRequest {
    #[validate(length(min = 1, max = 64))]
    pub game_id: String,

    #[validate(length(min = 1, max = 64))]
    pub chosen_team_id: String,

    #[validate(range(min = 1, message = "confidence must be a positive integer"))]
    pub confidence: Option<u32>,

    pub total_pick: Option<TotalPick>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePickRequest {
    #[validate(length(min = 1, max = 64))]
    pub chosen_team_id: String,

    #[validate(range(min = 1, message = "confidence must be a positive integer"))]
    pub confidence: Option<u32>,

    pub total_pick: Option<TotalPick>,

    /// Version the client last read; a mismatch rejects the write.
    pub expected_version: Option<u32>,
}

impl From<&SubmitPickRequest> for UpdatePickRequest {
    fn from(req: &SubmitPickRequest) -> Self {
        Self {
            chosen_team_id: req.chosen_team_id.clone(),
            confidence: req.confidence,
            total_pick: req.total_pick,
            expected_version: None,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct WeekQuery {
    pub week: u32,
}
