use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::services::roster_service;
use crate::web::error::error_response;

#[derive(Debug, Deserialize, Default)]
pub struct StudentQuery {
    pub email: Option<String>,
}

impl StudentQuery {
    // Blank input is refused; anything else reaches the roster exactly as sent.
    fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub async fn list_activities_handler(State(pool): State<SqlitePool>) -> Response {
    match roster_service::list_activities(&pool).await {
        Ok(catalog) => Json(catalog).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(pool): State<SqlitePool>,
    query: Result<Query<StudentQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    let Some(email) = query.email() else {
        return missing_email();
    };

    match roster_service::enroll(&pool, &activity_name, email).await {
        Ok(()) => Json(MessageBody {
            message: format!("Signed up {} for {}", email, activity_name),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(pool): State<SqlitePool>,
    query: Result<Query<StudentQuery>, QueryRejection>,
) -> Response {
    let query = match query {
        Ok(Query(q)) => q,
        Err(rejection) => return error_response(rejection.status(), rejection.body_text()),
    };
    let Some(email) = query.email() else {
        return missing_email();
    };

    match roster_service::withdraw(&pool, &activity_name, email).await {
        Ok(()) => Json(MessageBody {
            message: format!("Unregistered {} from {}", email, activity_name),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}

fn missing_email() -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Query parameter 'email' is required",
    )
}
