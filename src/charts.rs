// 📈 Chart Builder - Declarative chart descriptions
//
// A ChartSpec says WHAT to draw (kind, labels, series, styling). Turning it
// into pixels is the renderer's job (see render.rs).

use serde::Serialize;

use crate::aggregation::SummaryRow;
use crate::dataset::{AgingBucket, EntryType, ExpenseCategory, Region};

/// Qualitative palette, assigned in order of first appearance
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Inner-hole fraction of the sales donut
pub const DONUT_HOLE: f64 = 0.4;

pub const AMOUNT_AXIS_TITLE: &str = "Amount ($)";

// ============================================================================
// CHART SPEC
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    /// Vertical bars, one series
    Bar,
    /// Vertical bars, one series per group, side by side
    GroupedBar,
    /// Ring chart; `hole` is the inner radius as a fraction of the outer
    Donut { hole: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// One value per category; `None` leaves a gap
    pub values: Vec<Option<u64>>,
    /// Either one colour for the whole series or one per category
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// DOM id of the chart region
    pub id: String,
    pub kind: ChartKind,
    pub title: String,
    /// X-axis categories (bars) or slice labels (donut)
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    /// Print the numeric value on each bar
    pub show_values: bool,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn palette_color(index: usize) -> String {
    PALETTE[index % PALETTE.len()].to_string()
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Bar per expense category, each in its own colour
pub fn expense_chart(rows: &[SummaryRow<ExpenseCategory>]) -> ChartSpec {
    ChartSpec {
        id: "expense-chart".to_string(),
        kind: ChartKind::Bar,
        title: "Total Expenses by Category".to_string(),
        categories: rows.iter().map(|r| r.key.as_str().to_string()).collect(),
        series: vec![Series {
            name: "Amount".to_string(),
            values: rows.iter().map(|r| Some(r.total)).collect(),
            colors: (0..rows.len()).map(palette_color).collect(),
        }],
        x_axis_title: Some("Category".to_string()),
        y_axis_title: Some(AMOUNT_AXIS_TITLE.to_string()),
        show_values: true,
    }
}

/// Donut of sales share per region
pub fn sales_chart(rows: &[SummaryRow<Region>]) -> ChartSpec {
    ChartSpec {
        id: "sales-chart".to_string(),
        kind: ChartKind::Donut { hole: DONUT_HOLE },
        title: "Sales by Region".to_string(),
        categories: rows.iter().map(|r| r.key.as_str().to_string()).collect(),
        series: vec![Series {
            name: "Sales".to_string(),
            values: rows.iter().map(|r| Some(r.total)).collect(),
            colors: (0..rows.len()).map(palette_color).collect(),
        }],
        x_axis_title: None,
        y_axis_title: None,
        show_values: false,
    }
}

/// Aging buckets on the x axis, one coloured series per AP/AR type
pub fn ap_ar_chart(rows: &[SummaryRow<(EntryType, AgingBucket)>]) -> ChartSpec {
    let buckets: Vec<AgingBucket> = AgingBucket::ALL
        .into_iter()
        .filter(|bucket| rows.iter().any(|r| r.key.1 == *bucket))
        .collect();

    let series = EntryType::ALL
        .into_iter()
        .filter(|entry_type| rows.iter().any(|r| r.key.0 == *entry_type))
        .enumerate()
        .map(|(i, entry_type)| Series {
            name: entry_type.as_str().to_string(),
            values: buckets
                .iter()
                .map(|bucket| {
                    rows.iter()
                        .find(|r| r.key == (entry_type, *bucket))
                        .map(|r| r.total)
                })
                .collect(),
            colors: vec![palette_color(i)],
        })
        .collect();

    ChartSpec {
        id: "ap-ar-chart".to_string(),
        kind: ChartKind::GroupedBar,
        title: "AP and AR Aging Overview".to_string(),
        categories: buckets.iter().map(|b| b.as_str().to_string()).collect(),
        series,
        x_axis_title: Some("Aging Bucket".to_string()),
        y_axis_title: Some(AMOUNT_AXIS_TITLE.to_string()),
        show_values: true,
    }
}
