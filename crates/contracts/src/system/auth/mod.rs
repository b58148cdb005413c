use serde::{Deserialize, Serialize};

use crate::catalog::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: UserProfile,
}

/// Profile returned at login and kept in the browser session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub usuario: String,
    #[serde(default)]
    pub id_rol: Option<i32>,
    /// Role name as text; older API versions send only this
    #[serde(default)]
    pub rol: Option<String>,
    #[serde(default)]
    pub id_subregion: Option<i32>,
}

impl UserProfile {
    pub fn role(&self) -> Option<Role> {
        if let Some(role) = self.id_rol.and_then(Role::from_id) {
            return Some(role);
        }
        let name = self.rol.as_deref()?.trim().to_lowercase();
        match name.as_str() {
            "admin" | "administracion" | "administración" | "administrador" => {
                Some(Role::Administracion)
            }
            "coordinacion" | "coordinación" => Some(Role::Coordinacion),
            "lideracion" | "lideración" => Some(Role::Lideracion),
            "desarrollo" => Some(Role::Desarrollo),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Administracion)
    }

    pub fn display_name(&self) -> &str {
        if self.nombre.is_empty() {
            &self.usuario
        } else {
            &self.nombre
        }
    }
}

/// Error payload the API sends with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_names() {
        let req = LoginRequest {
            usuario: "ana".into(),
            contrasena: "secreto".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"usuario": "ana", "contraseña": "secreto"}));
    }

    #[test]
    fn test_role_from_id_wins_over_text() {
        let profile = UserProfile {
            id_rol: Some(3),
            rol: Some("admin".into()),
            ..UserProfile::default()
        };
        assert_eq!(profile.role(), Some(Role::Lideracion));
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_role_from_text() {
        for text in ["admin", " Administracion ", "Administración"] {
            let profile = UserProfile {
                rol: Some(text.into()),
                ..UserProfile::default()
            };
            assert!(profile.is_admin(), "{text}");
        }
        assert_eq!(UserProfile::default().role(), None);
    }
}
