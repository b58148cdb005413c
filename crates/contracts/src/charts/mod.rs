pub mod filter;
pub mod rows;
pub mod series;

pub use filter::{month_name, ChartFilter, FilterField, CENTER_YEAR, MONTH_NAMES, PERIOD_RANGE};
pub use rows::{
    BillingRow, ExpenseRow, HeadcountRow, NoveltyRow, NoveltyTotals, PayrollRow,
    ProfitMarginResponse, SalaryTransportRow, ServedDataset, Value,
};
pub use series::{ChartData, ChartSeries, SeriesStyle};
