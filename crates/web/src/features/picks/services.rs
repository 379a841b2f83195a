use chrono::Utc;
use pickem::{
    Database,
    dto::pick::{SubmitPickRequest, UpdatePickRequest},
    error::Result,
    models::Pick,
    repository::pick::PickRepository,
};
use uuid::Uuid;

/// Submit (or resubmit) a pick for the requesting user
pub async fn submit_pick(db: &Database, user_id: &str, request: &SubmitPickRequest) -> Result<Pick> {
    let repo = PickRepository::new(db);
    repo.submit(user_id, request, Utc::now()).await
}

pub async fn update_pick(
    db: &Database,
    pick_id: Uuid,
    user_id: &str,
    request: &UpdatePickRequest,
) -> Result<Pick> {
    let repo = PickRepository::new(db);
    repo.update(pick_id, user_id, request, Utc::now()).await
}

pub async fn get_pick(db: &Database, pick_id: Uuid) -> Result<Pick> {
    let repo = PickRepository::new(db);
    repo.find_by_id(pick_id).await
}

pub async fn list_picks_for_user(db: &Database, user_id: &str, week: u32) -> Result<Vec<Pick>> {
    let repo = PickRepository::new(db);
    repo.list_for_user(user_id, week).await
}

pub async fn list_picks_for_game(db: &Database, game_id: &str) -> Result<Vec<Pick>> {
    let repo = PickRepository::new(db);
    repo.list_for_game(game_id).await
}
