//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::extractors::{UserIdPath, ValidatedQuery};
use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Full name carried in the query string of create and update requests
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TitleParams {
    /// User full name
    #[validate(length(min = 1, max = 255, message = "title must be 1 to 255 characters long"))]
    #[param(example = "Mikhail Vasilevich Lomonosov")]
    pub title: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user", get(list_users)).route(
        "/user/:id",
        get(get_user)
            .post(create_user)
            .patch(update_user)
            .delete(delete_user),
    )
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> AppResult<Json<User>> {
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = "Users",
    responses(
        (status = 200, description = "All stored users, possibly none", body = Vec<User>),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// Create a user with a client-chosen ID
#[utoipa::path(
    post,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID"),
        TitleParams
    ),
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing or invalid title"),
        (status = 409, description = "User already exists"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    ValidatedQuery(params): ValidatedQuery<TitleParams>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users.create(id, params.title).await?;
    tracing::info!(id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's full name
#[utoipa::path(
    patch,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID"),
        TitleParams
    ),
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Missing or invalid title"),
        (status = 404, description = "User not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    ValidatedQuery(params): ValidatedQuery<TitleParams>,
) -> AppResult<Json<User>> {
    let user = state.users.update(id, params.title).await?;
    tracing::info!(id, "User updated");
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Malformed user ID"),
        (status = 404, description = "User not found"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> AppResult<Json<MessageResponse>> {
    state.users.delete(id).await?;
    tracing::info!(id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted")))
}
