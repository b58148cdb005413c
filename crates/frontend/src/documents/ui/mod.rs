pub mod details;
pub mod links;
pub mod list;
