//! Minimal HTML table rendering

use std::fmt::Write;

use super::{Column, Page};

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a page as a standalone HTML document.
pub fn render(page: &Page) -> String {
    let columns = page.kind.columns();
    let mut html = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{} - {}</title>", escape(&page.championship), escape(page.title()));
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&page.championship));
    let _ = writeln!(html, "<h2>{}</h2>", escape(page.title()));
    let _ = writeln!(html, "<table class=\"{}\">", page.kind.slug());

    html.push_str("<thead><tr>");
    for column in columns {
        let _ = write!(html, "<th>{}</th>", column.header());
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in &page.rows {
        html.push_str("<tr>");
        for column in columns {
            let _ = write!(html, "<td>{}</td>", escape(&Column::cell(*column, row)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}
