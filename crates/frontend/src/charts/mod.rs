pub mod api;
pub mod definition;
pub mod hook;
pub mod kinds;
pub mod pipeline;
pub mod presentation;
pub mod view;

pub use kinds::ChartKind;
pub use view::ChartPanel;
