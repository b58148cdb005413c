//! Thin gloo-net wrappers shared by every API module.
//!
//! Authenticated calls read the bearer token from the session store; a
//! missing token short-circuits with `ApiError::NotAuthenticated` before any
//! request is sent.

use contracts::system::auth::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::api_utils::api_url;
use crate::system::session::{BrowserSession, SessionStore};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("no session token")]
    NotAuthenticated,
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the user: the server's `{error}` message when it sent one,
    /// otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::NotAuthenticated => "Usuario no autenticado.".to_string(),
            ApiError::Status { body, .. } => server_message(body).unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Serializes `query` with serde_qs and appends it to `path`
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

pub fn session_token() -> Result<String, ApiError> {
    BrowserSession.token().ok_or(ApiError::NotAuthenticated)
}

fn builder(method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
    let url = api_url(path);
    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    };
    match token {
        Some(t) => builder.header("Authorization", &format!("Bearer {}", t)),
        None => builder,
    }
}

async fn dispatch<B: Serialize>(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let request = builder(method, path, token);
    let response = match body {
        Some(b) => request
            .json(b)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await,
        None => request.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Authenticated GET with an explicit token
pub async fn get_json_with_token<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, ApiError> {
    let response = dispatch::<()>(Method::Get, path, Some(token), None).await?;
    decode(response).await
}

/// Authenticated GET using the stored session token
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let token = session_token()?;
    get_json_with_token(path, &token).await
}

/// Unauthenticated POST returning a JSON body (login)
pub async fn post_json_public<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = dispatch(Method::Post, path, None, Some(body)).await?;
    decode(response).await
}

/// Authenticated POST; the response body is not interpreted
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let token = session_token()?;
    dispatch(Method::Post, path, Some(&token), Some(body)).await?;
    Ok(())
}

/// Authenticated PUT; the response body is not interpreted
pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let token = session_token()?;
    dispatch(Method::Put, path, Some(&token), Some(body)).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let token = session_token()?;
    dispatch::<()>(Method::Delete, path, Some(&token), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::charts::ChartFilter;

    #[test]
    fn test_with_query_skips_empty_fields() {
        let filter = ChartFilter::period("12", 2024, 1, 6);
        let url = with_query("/api/graficos/nomina", &filter).unwrap();
        assert_eq!(url, "/api/graficos/nomina?centroId=12&ano=2024&mesInicio=1&mesFin=6");

        let empty = with_query("/api/centros", &ChartFilter::default()).unwrap();
        assert_eq!(empty, "/api/centros");
    }

    #[test]
    fn test_user_message_prefers_server_error() {
        let err = ApiError::Status {
            status: 401,
            body: r#"{"error":"Credenciales inválidas"}"#.to_string(),
        };
        assert_eq!(err.user_message("Error al iniciar sesión."), "Credenciales inválidas");

        let opaque = ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(opaque.user_message("Error al iniciar sesión."), "Error al iniciar sesión.");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Error."),
            "Error."
        );
        assert_eq!(
            ApiError::NotAuthenticated.user_message("Error."),
            "Usuario no autenticado."
        );
    }
}
