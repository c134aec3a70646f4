// 🖌️ Chart Rendering - How a ChartSpec is drawn in the browser
//
// The page only knows about ChartSpec and this trait. ChartJsRenderer turns
// specs into Chart.js configurations; hover tooltips, legends and resizing
// are handled client-side by the library.

use serde_json::{json, Value};

use crate::charts::{ChartKind, ChartSpec, Series};

const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const DATALABELS_CDN: &str =
    "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels@2.2.0/dist/chartjs-plugin-datalabels.min.js";

pub trait ChartRenderer {
    /// Tags placed in <head> (library scripts, styles)
    fn head_tags(&self) -> String;

    /// One-off script run before any chart is drawn
    fn setup_script(&self) -> String {
        String::new()
    }

    /// Script that draws `chart` into the canvas whose id is `chart.id`
    fn chart_script(&self, chart: &ChartSpec) -> String;
}

// ============================================================================
// CHART.JS
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct ChartJsRenderer;

impl ChartJsRenderer {
    /// Full Chart.js configuration object for a spec
    pub fn config(&self, chart: &ChartSpec) -> Value {
        let chart_type = match chart.kind {
            ChartKind::Bar | ChartKind::GroupedBar => "bar",
            ChartKind::Donut { .. } => "doughnut",
        };

        let datasets: Vec<Value> = chart.series.iter().map(dataset).collect();
        // A single-series bar chart is already labelled by its x axis
        let show_legend = chart.kind != ChartKind::Bar;

        let mut options = json!({
            "responsive": true,
            "plugins": {
                "title": { "display": true, "text": chart.title },
                "legend": { "display": show_legend },
                "datalabels": {
                    "display": chart.show_values,
                    "anchor": "end",
                    "align": "top"
                }
            }
        });

        match chart.kind {
            ChartKind::Donut { hole } => {
                options["cutout"] = json!(format!("{}%", (hole * 100.0).round()));
            }
            ChartKind::Bar | ChartKind::GroupedBar => {
                options["scales"] = json!({
                    "x": axis(chart.x_axis_title.as_deref()),
                    "y": {
                        "beginAtZero": true,
                        "title": axis_title(chart.y_axis_title.as_deref())
                    }
                });
            }
        }

        json!({
            "type": chart_type,
            "data": {
                "labels": chart.categories,
                "datasets": datasets
            },
            "options": options
        })
    }
}

impl ChartRenderer for ChartJsRenderer {
    fn head_tags(&self) -> String {
        format!(
            "<script src=\"{}\"></script>\n<script src=\"{}\"></script>",
            CHART_JS_CDN, DATALABELS_CDN
        )
    }

    fn setup_script(&self) -> String {
        "Chart.register(ChartDataLabels);".to_string()
    }

    fn chart_script(&self, chart: &ChartSpec) -> String {
        format!(
            "new Chart(document.getElementById({}), {});",
            script_json(&json!(chart.id)),
            script_json(&self.config(chart))
        )
    }
}

fn dataset(series: &Series) -> Value {
    // One colour paints the whole series; several colour individual bars/slices
    let background = match series.colors.as_slice() {
        [single] => json!(single),
        many => json!(many),
    };

    json!({
        "label": series.name,
        "data": series.values,
        "backgroundColor": background
    })
}

fn axis(title: Option<&str>) -> Value {
    json!({ "title": axis_title(title) })
}

fn axis_title(title: Option<&str>) -> Value {
    match title {
        Some(text) => json!({ "display": true, "text": text }),
        None => json!({ "display": false }),
    }
}

/// JSON that can sit inside an inline <script> element
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}
