// CFO Dashboard - Core Library
// Sample ledger → summaries → chart specs → page, plus the optional HTTP host

pub mod aggregation;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod page;
pub mod render;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use aggregation::{
    ap_ar_summary, expense_summary, sales_summary, summary_total, GroupKey, SummaryRow,
};
pub use charts::{ap_ar_chart, expense_chart, sales_chart, ChartKind, ChartSpec, Series};
pub use config::{DashboardConfig, DEFAULT_LOG_FILTER, DEFAULT_PORT};
pub use dataset::{
    AgingBucket, Dataset, EntryType, ExpenseCategory, Record, Region, ROW_COUNT,
};
pub use error::{DashboardError, Result};
pub use page::{compose_dashboard, Page, Section, SectionWidth};
pub use render::{ChartJsRenderer, ChartRenderer};

#[cfg(feature = "server")]
pub use server::{router, DashboardServer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate, aggregate, chart and render in one go (what the server does at startup)
pub fn render_dashboard(dataset: &Dataset) -> String {
    compose_dashboard(dataset).render(&ChartJsRenderer)
}
