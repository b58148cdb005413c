pub mod change_password;
pub mod landing;
pub mod login;
pub mod settings;
