use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::Activity;
use crate::store::ActivityStore;
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn list_activities_handler(
    State(store): State<Arc<ActivityStore>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(store.list().await)
}

pub async fn signup_handler(
    State(store): State<Arc<ActivityStore>>,
    Path(activity_name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    match store.signup(&activity_name, &query.email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %query.email, "participant signed up");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            Err(e.into())
        }
    }
}

pub async fn remove_participant_handler(
    State(store): State<Arc<ActivityStore>>,
    Path((activity_name, email)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    match store.remove_participant(&activity_name, &email).await {
        Ok(message) => {
            info!(activity = %activity_name, email = %email, "participant removed");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "removal rejected: {}", e);
            Err(e.into())
        }
    }
}
