//! Wire contracts shared between the dashboard frontend and the reporting API.

pub mod catalog;
pub mod charts;
pub mod documents;
pub mod system;
