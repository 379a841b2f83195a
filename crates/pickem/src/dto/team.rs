use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Team record pushed by the schedule/ranking feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertTeamRequest {
    #[validate(length(min = 1, max = 64, message = "team_id must be between 1 and 64 characters"))]
    pub team_id: String,

    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(range(min = 1, max = 25, message = "rank must be between 1 and 25"))]
    pub rank: Option<u8>,
}
