use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub usuario: String,
    pub id_rol: i32,
    #[serde(default)]
    pub id_subregion: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub nombre: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
    pub id_rol: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub nombre: String,
    pub id_rol: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordDto {
    #[serde(rename = "contraseñaActual")]
    pub contrasena_actual: String,
    #[serde(rename = "nuevaContraseña")]
    pub nueva_contrasena: String,
}
