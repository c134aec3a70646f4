// 🗂️ Page Composer - Static dashboard layout
//
// Heading, then two half-width chart sections side by side, then one
// full-width section. Built once per process; never changes afterwards.

use crate::aggregation::{ap_ar_summary, expense_summary, sales_summary};
use crate::charts::{ap_ar_chart, expense_chart, sales_chart, ChartSpec};
use crate::dataset::Dataset;
use crate::render::ChartRenderer;

pub const PAGE_TITLE: &str = "CFO Dashboard";
const HEADING_COLOR: &str = "#2c3e50";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionWidth {
    /// Roughly half the page, laid out inline next to its neighbour
    Half,
    /// Its own row across the page
    Full,
}

impl SectionWidth {
    fn style(&self) -> &'static str {
        match self {
            SectionWidth::Half => "width: 48%; display: inline-block; padding: 10px;",
            SectionWidth::Full => "width: 98%; padding: 10px; margin-top: 20px;",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub width: SectionWidth,
    pub chart: ChartSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub title: String,
    pub sections: Vec<Section>,
}

/// Aggregate the ledger and lay out the three dashboard charts
pub fn compose_dashboard(dataset: &Dataset) -> Page {
    let records = dataset.records();

    let sections = vec![
        Section {
            heading: "Expense Summary".to_string(),
            width: SectionWidth::Half,
            chart: expense_chart(&expense_summary(records)),
        },
        Section {
            heading: "Sales Summary".to_string(),
            width: SectionWidth::Half,
            chart: sales_chart(&sales_summary(records)),
        },
        Section {
            heading: "AP and AR Aging Summary".to_string(),
            width: SectionWidth::Full,
            chart: ap_ar_chart(&ap_ar_summary(records)),
        },
    ];

    tracing::debug!(sections = sections.len(), "dashboard page composed");

    Page {
        title: PAGE_TITLE.to_string(),
        sections,
    }
}

impl Page {
    /// Full HTML document with one chart region per section
    pub fn render(&self, renderer: &dyn ChartRenderer) -> String {
        let title = escape_html(&self.title);

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str(&renderer.head_tags());
        html.push_str("\n</head>\n<body style=\"font-family: sans-serif;\">\n");
        html.push_str(&format!(
            "<h1 style=\"text-align: center; color: {};\">{}</h1>\n",
            HEADING_COLOR, title
        ));

        for section in &self.sections {
            html.push_str(&format!(
                "<div class=\"dashboard-section\" style=\"{}\">\n  <h3>{}</h3>\n  <div class=\"chart-region\" data-chart=\"{}\"><canvas id=\"{}\"></canvas></div>\n</div>\n",
                section.width.style(),
                escape_html(&section.heading),
                escape_html(&section.chart.id),
                escape_html(&section.chart.id),
            ));
        }

        html.push_str("<script>\n");
        let setup = renderer.setup_script();
        if !setup.is_empty() {
            html.push_str(&setup);
            html.push('\n');
        }
        for section in &self.sections {
            html.push_str(&renderer.chart_script(&section.chart));
            html.push('\n');
        }
        html.push_str("</script>\n</body>\n</html>\n");

        html
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ChartJsRenderer;

    #[test]
    fn test_layout_is_two_halves_then_full_width() {
        let page = compose_dashboard(&Dataset::generate_random());

        let layout: Vec<(&str, SectionWidth)> = page
            .sections
            .iter()
            .map(|s| (s.heading.as_str(), s.width))
            .collect();

        assert_eq!(
            layout,
            vec![
                ("Expense Summary", SectionWidth::Half),
                ("Sales Summary", SectionWidth::Half),
                ("AP and AR Aging Summary", SectionWidth::Full),
            ]
        );
        assert_eq!(page.sections[0].chart.id, "expense-chart");
        assert_eq!(page.sections[1].chart.id, "sales-chart");
        assert_eq!(page.sections[2].chart.id, "ap-ar-chart");
    }

    #[test]
    fn test_rendered_page_has_three_chart_regions() {
        for _ in 0..5 {
            let html = compose_dashboard(&Dataset::generate_random()).render(&ChartJsRenderer);

            assert_eq!(html.matches("class=\"chart-region\"").count(), 3);
            assert_eq!(html.matches("new Chart(").count(), 3);
            assert!(html.contains("<h1 style=\"text-align: center; color: #2c3e50;\">CFO Dashboard</h1>"));
            assert!(html.contains("<h3>Expense Summary</h3>"));
            assert!(html.contains("<h3>Sales Summary</h3>"));
            assert!(html.contains("<h3>AP and AR Aging Summary</h3>"));
        }

        println!("✅ Page rendering test PASSED");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("AP & AR <\"x\">"), "AP &amp; AR &lt;&quot;x&quot;&gt;");
        assert_eq!(escape_html("Amount ($)"), "Amount ($)");
    }
}
