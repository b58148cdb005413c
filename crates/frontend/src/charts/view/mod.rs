pub mod axes;
pub mod bar;
pub mod frame;
pub mod legend;
pub mod line;
pub mod panel;
pub mod pie;

pub use panel::{ChartPanel, ChartView};
