//! Self-contained treemap page.
//!
//! The page loads plotly.js from its CDN and draws one treemap trace from
//! [`ChartData`]. Everything else about display (zoom, hover, export) is left
//! to the browser.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::Result;

use super::flatten::ChartData;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Figure layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Levels rendered at once; deeper levels appear on click.
    pub max_depth: u32,
    pub root_color: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: "DOM Visualization".to_string(),
            width: 1600,
            height: 800,
            max_depth: 15,
            root_color: "lightgrey".to_string(),
        }
    }
}

/// Build the plotly figure (data + layout) as JSON.
pub fn figure_json(data: &ChartData, layout: &Layout) -> serde_json::Value {
    json!({
        "data": [{
            "type": "treemap",
            "ids": data.ids,
            "labels": data.labels,
            "parents": data.parents,
            "hovertext": data.hover_text,
            "hoverinfo": "text",
            "branchvalues": "total",
            "maxdepth": layout.max_depth,
            "root": { "color": layout.root_color },
        }],
        "layout": {
            "title": { "text": layout.title },
            "width": layout.width,
            "height": layout.height,
        },
    })
}

/// Render a complete HTML page showing the treemap.
pub fn render_page(data: &ChartData, layout: &Layout) -> Result<String> {
    let figure = serde_json::to_string(&figure_json(data, layout))?;
    // Hover text carries markup; keep it from closing the script element
    let figure = figure.replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{cdn}" charset="utf-8"></script>
</head>
<body>
    <div id="treemap"></div>
    <script>
        const figure = {figure};
        Plotly.newPlot("treemap", figure.data, figure.layout);
    </script>
</body>
</html>
"#,
        title = escape_text(&layout.title),
        cdn = PLOTLY_CDN,
        figure = figure,
    ))
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
