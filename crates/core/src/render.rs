//! Rendering a finished [`ReportDocument`] to text.
//!
//! Markdown output is for reading and review; JSON output carries the full segment structure,
//! with ordinal suffixes already split into superscript runs, for an external document writer.

use crate::document::{Alignment, ReportDocument, Segment, SegmentKind};
use crate::ordinal::{ordinal_runs, TextRun};
use crate::{ReportError, ReportResult};
use serde::Serialize;

/// Turns a document into the contents of one file.
pub trait ReportRenderer {
    /// File extension, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, document: &ReportDocument) -> ReportResult<String>;
}

/// Escapes markdown syntax that would change the structure of a line.
///
/// - `#` at line start -> `\#` (prevents headers)
/// - Triple backticks -> `\`\`\`` (prevents code blocks)
/// - Standalone `---`, `***`, `___` -> escaped (prevents horizontal rules)
fn escape_line(line: &str) -> String {
    let trimmed = line.trim();
    if line.trim_start().starts_with('#') {
        line.replacen('#', r"\#", 1)
    } else if trimmed == "---" || trimmed == "***" || trimmed == "___" {
        format!(r"\{}", trimmed)
    } else {
        line.replace("```", r"\`\`\`")
    }
}

/// Wraps ordinal suffixes in `<sup>` tags.
fn superscript_ordinals(text: &str) -> String {
    ordinal_runs(text)
        .into_iter()
        .map(|run| match run {
            TextRun::Plain(t) => t.to_string(),
            TextRun::Ordinal { number, suffix } => format!("{number}<sup>{suffix}</sup>"),
        })
        .collect()
}

/// Markdown rendering.
///
/// Headings are bold (italic headings bold-italic), centred blocks use an HTML paragraph,
/// and blank spacing paragraphs are dropped since Markdown collapses them anyway.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_segment(&self, segment: &Segment) -> String {
        let lines: Vec<String> = segment
            .lines()
            .map(|line| superscript_ordinals(&escape_line(line)))
            .collect();

        let body = match segment.kind {
            SegmentKind::Heading => {
                let lines: Vec<String> = lines
                    .iter()
                    .filter(|l| !l.trim().is_empty())
                    .map(|l| {
                        if segment.style.italic {
                            format!("_**{l}**_")
                        } else {
                            format!("**{l}**")
                        }
                    })
                    .collect();
                lines.join("  \n")
            }
            SegmentKind::Paragraph | SegmentKind::LineBreakRun => lines.join("  \n"),
        };

        if segment.style.alignment == Alignment::Center {
            format!("<p align=\"center\">{}</p>", body.replace("  \n", "<br>\n"))
        } else {
            body
        }
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, document: &ReportDocument) -> ReportResult<String> {
        let blocks: Vec<String> = document
            .segments()
            .iter()
            .filter(|s| !s.is_blank())
            .map(|s| self.render_segment(s))
            .collect();

        if blocks.is_empty() {
            return Err(ReportError::InvalidInput(
                "cannot render an empty report".into(),
            ));
        }
        Ok(format!("{}\n", blocks.join("\n\n")))
    }
}

#[derive(Debug, Serialize)]
struct JsonRun<'a> {
    text: &'a str,
    superscript: bool,
}

#[derive(Debug, Serialize)]
struct JsonSegment<'a> {
    #[serde(flatten)]
    segment: &'a Segment,
    runs: Vec<JsonRun<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    segments: Vec<JsonSegment<'a>>,
}

fn json_runs(text: &str) -> Vec<JsonRun<'_>> {
    ordinal_runs(text)
        .into_iter()
        .flat_map(|run| match run {
            TextRun::Plain(t) => vec![JsonRun {
                text: t,
                superscript: false,
            }],
            TextRun::Ordinal { number, suffix } => vec![
                JsonRun {
                    text: number,
                    superscript: false,
                },
                JsonRun {
                    text: suffix,
                    superscript: true,
                },
            ],
        })
        .collect()
}

/// JSON rendering of the segment list.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportRenderer for JsonRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &ReportDocument) -> ReportResult<String> {
        let view = JsonDocument {
            segments: document
                .segments()
                .iter()
                .map(|segment| JsonSegment {
                    segment,
                    runs: json_runs(&segment.text),
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&view)
        } else {
            serde_json::to_string(&view)
        };
        json.map_err(ReportError::Serialization)
    }
}
