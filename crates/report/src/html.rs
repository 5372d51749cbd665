//! HTML rendering: one index page per report plus one page per table.

use chrono::Utc;

use aggregator::Table;
use core_types::Provenance;

use crate::format::format_cell;

const STYLE: &str = r#"
  body{font:14px/1.5 system-ui, sans-serif; color:#1f2937; margin:24px; max-width:1100px; background:#f9fafb}
  h1,h2{margin:16px 0 12px; color:#111827}
  h1{font-size:26px; font-weight:700}
  h2{font-size:19px; font-weight:600; margin-top:28px}
  .muted{color:#6b7280}
  table{border-collapse:collapse; margin-top:12px; background:white}
  th,td{padding:8px 12px; border-bottom:1px solid #f3f4f6; text-align:right}
  th:first-child, td:first-child{text-align:left}
  th{font-weight:600; background:#f9fafb; color:#374151}
  td.missing{color:#d97706}
  ul{columns:2; list-style:none; padding:0}
  li{margin:4px 0}
  a{color:#2563eb; text-decoration:none}
  a:hover{text-decoration:underline}
"#;

/// One run line on the index page.
#[derive(Debug, Clone)]
pub struct RunSummaryRow {
    pub id: String,
    pub colliding_bunches: f64,
    pub comment: String,
}

/// A heading plus the table pages linked under it.
#[derive(Debug, Clone)]
pub struct IndexSection {
    pub heading: String,
    pub links: Vec<(String, String)>,
}

fn page(title: &str, body: &str) -> String {
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
{body}
<p class="muted">Generated {generated}</p>
</body>
</html>
"#
    )
}

/// Renders the table grid itself. Cells whose source histogram was missing
/// get the `missing` class.
fn table_body(table: &Table, precision: usize) -> String {
    let mut out = String::from("<table>\n<tr><th></th>");
    for column in &table.column_labels {
        out.push_str(&format!("<th>{column}</th>"));
    }
    out.push_str("</tr>\n");

    for (label, row) in table.row_labels.iter().zip(&table.cells) {
        out.push_str(&format!("<tr><td>{label}</td>"));
        for cell in row {
            let class = match cell.provenance {
                Provenance::Measured => "",
                Provenance::DefaultedMissing => r#" class="missing""#,
            };
            out.push_str(&format!(
                "<td{class}>{}</td>",
                format_cell(cell, precision, "n/a")
            ));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out
}

/// A standalone page holding one table.
pub fn render_table_page(title: &str, table: &Table, precision: usize) -> String {
    let body = format!(
        "<h1>{title}</h1>\n<p><a href=\"index.html\">back to index</a></p>\n{}",
        table_body(table, precision)
    );
    page(title, &body)
}

/// The report entry page: title, description, the processed runs, and the
/// linked table pages grouped by detector view.
pub fn render_index(
    title: &str,
    description: &str,
    runs: &[RunSummaryRow],
    sections: &[IndexSection],
    config_file: Option<&str>,
) -> String {
    let mut body = format!("<h1>{title}</h1>\n");
    if !description.is_empty() {
        body.push_str(&format!("<p class=\"muted\">{description}</p>\n"));
    }

    body.push_str("<h2>Runs</h2>\n<table>\n<tr><th>Run</th><th>Colliding bunches</th><th>Comment</th></tr>\n");
    for run in runs {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            run.id, run.colliding_bunches, run.comment
        ));
    }
    body.push_str("</table>\n");

    for section in sections {
        body.push_str(&format!("<h2>{}</h2>\n<ul>\n", section.heading));
        for (label, href) in &section.links {
            body.push_str(&format!("<li><a href=\"{href}\">{label}</a></li>\n"));
        }
        body.push_str("</ul>\n");
    }

    if let Some(config_file) = config_file {
        body.push_str(&format!(
            "<p class=\"muted\">Run list: <a href=\"{config_file}\">{config_file}</a></p>\n"
        ));
    }

    page(title, &body)
}
