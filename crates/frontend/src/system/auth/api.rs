use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::http::{post_json_public, ApiError};

/// Login with username and password
pub async fn login(usuario: String, contrasena: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        usuario,
        contrasena,
    };
    post_json_public("/api/usuarios/login", &request).await
}
