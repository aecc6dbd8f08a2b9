//! HTML fragment and plain-text renderings used for clipboard export

use super::view::{Cell, DocumentView, SectionBody, Signatory, MEETING_HEADERS};
use std::fmt::Write;

const TABLE_STYLE: &str =
    "width:100%;border-collapse:collapse;margin-bottom:24px;border:2px solid #1e293b;";
const HEADER_STYLE: &str = "background:#1e293b;color:#ffffff;text-align:center;font-weight:800;text-transform:uppercase;padding:12px;";
const LABEL_STYLE: &str =
    "width:35%;background:#f8fafc;border:1px solid #1e293b;padding:10px;vertical-align:top;text-align:left;";
const CELL_STYLE: &str = "border:1px solid #1e293b;padding:10px;vertical-align:top;";
const SUBHEAD_STYLE: &str =
    "background:#f1f5f9;border:1px solid #1e293b;padding:10px;text-align:center;font-weight:700;";

/// Escape text for use inside HTML element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn multiline(text: &str) -> String {
    escape(text).replace('\n', "<br/>")
}

fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => multiline(text),
        Cell::List(items) if items.is_empty() => String::new(),
        Cell::List(items) => {
            let items: String = items
                .iter()
                .map(|i| format!("<li>{}</li>", multiline(i)))
                .collect();
            format!("<ul>{items}</ul>")
        }
    }
}

fn signatory_html(out: &mut String, heading: &str, signatory: &Signatory) {
    let _ = write!(
        out,
        "<td style=\"width:50%;vertical-align:top;padding:10px;\"><p>{}</p><br/><br/><br/>\
         <p><b><u>{}</u></b></p><p>NIP. {}</p></td>",
        multiline(heading),
        escape(&signatory.name.to_uppercase()),
        escape(&signatory.nip),
    );
}

/// Self-contained HTML fragment with inline styles, suitable for pasting into
/// a word processor
pub fn to_html(view: &DocumentView) -> String {
    let mut out = String::from("<div>");

    for section in &view.sections {
        let _ = write!(out, "<table style=\"{TABLE_STYLE}\">");
        match &section.body {
            SectionBody::Rows(rows) => {
                let _ = write!(
                    out,
                    "<thead><tr><th colspan=\"2\" style=\"{HEADER_STYLE}\">{}</th></tr></thead><tbody>",
                    escape(section.title)
                );
                for row in rows {
                    let _ = write!(
                        out,
                        "<tr><th style=\"{LABEL_STYLE}\">{}</th><td style=\"{CELL_STYLE}\">{}</td></tr>",
                        escape(row.label),
                        cell_html(&row.value)
                    );
                }
            }
            SectionBody::Meetings(meetings) => {
                let _ = write!(
                    out,
                    "<thead><tr><th colspan=\"4\" style=\"{HEADER_STYLE}\">{}</th></tr><tr>",
                    escape(section.title)
                );
                for header in MEETING_HEADERS {
                    let _ = write!(out, "<th style=\"{SUBHEAD_STYLE}\">{}</th>", escape(header));
                }
                out.push_str("</tr></thead><tbody>");
                for m in meetings {
                    let _ = write!(
                        out,
                        "<tr><td style=\"{CELL_STYLE}text-align:center;font-weight:700;\">{}</td>\
                         <td style=\"{CELL_STYLE}\">{}</td><td style=\"{CELL_STYLE}\">{}</td>\
                         <td style=\"{CELL_STYLE}\">{}</td></tr>",
                        m.meeting,
                        multiline(&m.understand),
                        multiline(&m.apply),
                        multiline(&m.reflect)
                    );
                }
            }
        }
        out.push_str("</tbody></table>");
    }

    let sig = &view.signatures;
    out.push_str("<table style=\"width:100%;margin-top:40px;\"><tr>");
    signatory_html(&mut out, sig.principal.role, &sig.principal);
    let teacher_heading = format!("{}\n{}", sig.place_date, sig.teacher.role);
    signatory_html(&mut out, &teacher_heading, &sig.teacher);
    out.push_str("</tr></table></div>");
    out
}

/// Plain-text fallback for clipboard targets without HTML support
pub fn to_plain_text(view: &DocumentView) -> String {
    let mut out = String::new();
    for section in &view.sections {
        let _ = writeln!(out, "{}", section.title.to_uppercase());
        match &section.body {
            SectionBody::Rows(rows) => {
                for row in rows {
                    match &row.value {
                        Cell::Text(text) => {
                            let _ = writeln!(out, "{}: {}", row.label, text);
                        }
                        Cell::List(items) => {
                            let _ = writeln!(out, "{}:", row.label);
                            for item in items {
                                let _ = writeln!(out, "  - {item}");
                            }
                        }
                    }
                }
            }
            SectionBody::Meetings(meetings) => {
                for m in meetings {
                    let _ = writeln!(out, "Pertemuan {}", m.meeting);
                    let _ = writeln!(out, "  {}: {}", MEETING_HEADERS[1], m.understand);
                    let _ = writeln!(out, "  {}: {}", MEETING_HEADERS[2], m.apply);
                    let _ = writeln!(out, "  {}: {}", MEETING_HEADERS[3], m.reflect);
                }
            }
        }
        out.push('\n');
    }

    let sig = &view.signatures;
    let _ = writeln!(out, "{}", sig.principal.role);
    let _ = writeln!(out, "{}", sig.principal.name.to_uppercase());
    let _ = writeln!(out, "NIP. {}\n", sig.principal.nip);
    let _ = writeln!(out, "{}", sig.place_date);
    let _ = writeln!(out, "{}", sig.teacher.role);
    let _ = writeln!(out, "{}", sig.teacher.name.to_uppercase());
    let _ = write!(out, "NIP. {}", sig.teacher.nip);
    out
}
