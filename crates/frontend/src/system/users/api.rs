use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use crate::shared::http::{self, ApiError};

const USERS_PATH: &str = "/api/usuarios";

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    http::get_json(USERS_PATH).await
}

/// Create new user
pub async fn create_user(dto: &CreateUserDto) -> Result<(), ApiError> {
    http::post(&format!("{}/register", USERS_PATH), dto).await
}

/// Update user
pub async fn update_user(id: i64, dto: &UpdateUserDto) -> Result<(), ApiError> {
    http::put(&format!("{}/{}", USERS_PATH, id), dto).await
}

/// Delete user
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", USERS_PATH, id)).await
}

/// Change the signed-in user's password
pub async fn change_password(dto: &ChangePasswordDto) -> Result<(), ApiError> {
    http::put(&format!("{}/change-password", USERS_PATH), dto).await
}
