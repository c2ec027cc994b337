//! HTML rendering of the roadmap tables.

use std::fmt::Write as _;

use roadmap_engine::{Cell, ProgressBar, ProjectTable, Roadmap};

/// Render `roadmap` as one standalone HTML5 document.
pub fn render(roadmap: &Roadmap, stylesheets: &[String]) -> Result<String, std::fmt::Error> {
    let mut html = String::with_capacity(4096);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>Roadmap</title>")?;
    for href in stylesheets {
        writeln!(
            html,
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"{}\">",
            escape(href)
        )?;
    }
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(
        html,
        "<!-- generated {} -->",
        roadmap.generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;

    for table in &roadmap.projects {
        write_table(&mut html, table)?;
    }

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn write_table(html: &mut String, table: &ProjectTable) -> std::fmt::Result {
    writeln!(html, "<div style=\"overflow: scroll;\">")?;
    writeln!(html, "<table class=\"table table-bordered roadmap\">")?;
    writeln!(html, "<caption>{}</caption>", escape(&table.caption))?;

    write!(html, "<thead><tr><th class=\"project-name\">Feature</th>")?;
    for column in &table.columns {
        write!(html, "<th>{}</th>", escape(&column.label))?;
    }
    writeln!(html, "</tr></thead>")?;

    writeln!(html, "<tbody>")?;
    for row in &table.rows {
        write!(html, "<tr><td>{}</td>", escape(&row.name))?;
        for cell in &row.cells {
            match cell {
                Cell::Empty => html.push_str("<td></td>"),
                Cell::Bar(bar) => write_bar(html, bar)?,
            }
        }
        writeln!(html, "</tr>")?;
    }
    writeln!(html, "</tbody>")?;

    writeln!(html, "</table>")?;
    writeln!(html, "</div>")
}

fn write_bar(html: &mut String, bar: &ProgressBar) -> std::fmt::Result {
    write!(
        html,
        "<td colspan=\"{}\"><div class=\"timeline\">&nbsp;",
        bar.colspan
    )?;
    for (state, percent) in bar.metrics.segments() {
        write!(
            html,
            "<div class=\"timeline-{state}\" style=\"width:{}%\">&nbsp;</div>",
            percent.trunc()
        )?;
    }
    html.push_str("</div></td>");
    Ok(())
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
