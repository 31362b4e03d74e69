//! The assembled report as an ordered list of styled segments.
//!
//! A [`ReportDocument`] is built append-only through [`DocumentBuilder`] and cannot be changed
//! once [`DocumentBuilder::finish`] hands it over. Renderers only read it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Heading,
    Paragraph,
    /// Several lines kept in one block, separated by hard line breaks.
    LineBreakRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SegmentStyle {
    pub italic: bool,
    pub alignment: Alignment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    pub style: SegmentStyle,
}

impl Segment {
    /// No visible text. Blank paragraphs are vertical spacing; an empty heading or run
    /// has nothing to show either.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The segment's lines; only line-break runs and multi-line headings have more than one.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// A finished report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    segments: Vec<Segment>,
}

impl ReportDocument {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Non-blank segment texts in order; handy for searching a document.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|s| !s.is_blank())
            .map(|s| s.text.as_str())
    }
}

/// Append-only builder for a [`ReportDocument`].
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    segments: Vec<Segment>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: SegmentKind, text: impl Into<String>, style: SegmentStyle) -> &mut Self {
        self.segments.push(Segment {
            kind,
            text: text.into(),
            style,
        });
        self
    }

    pub fn heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(SegmentKind::Heading, text, SegmentStyle::default())
    }

    pub fn italic_heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(
            SegmentKind::Heading,
            text,
            SegmentStyle {
                italic: true,
                alignment: Alignment::Left,
            },
        )
    }

    pub fn centered_heading(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(
            SegmentKind::Heading,
            text,
            SegmentStyle {
                italic: false,
                alignment: Alignment::Center,
            },
        )
    }

    /// Body paragraph, justified.
    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(
            SegmentKind::Paragraph,
            text,
            SegmentStyle {
                italic: false,
                alignment: Alignment::Justify,
            },
        )
    }

    pub fn centered_line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(
            SegmentKind::Paragraph,
            text,
            SegmentStyle {
                italic: false,
                alignment: Alignment::Center,
            },
        )
    }

    pub fn blank(&mut self) -> &mut Self {
        self.paragraph(String::new())
    }

    pub fn blanks(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.blank();
        }
        self
    }

    pub fn line_break_run<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = lines
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.push(SegmentKind::LineBreakRun, text, SegmentStyle::default())
    }

    pub fn finish(self) -> ReportDocument {
        ReportDocument {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_in_order() {
        let mut builder = DocumentBuilder::new();
        builder
            .centered_heading("TITLE")
            .blank()
            .italic_heading("Section:")
            .paragraph("Body.")
            .line_break_run(["one", "two"]);
        let doc = builder.finish();

        assert_eq!(doc.len(), 5);
        let kinds: Vec<SegmentKind> = doc.segments().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Heading,
                SegmentKind::Paragraph,
                SegmentKind::Heading,
                SegmentKind::Paragraph,
                SegmentKind::LineBreakRun,
            ]
        );
        assert_eq!(doc.segments()[0].style.alignment, Alignment::Center);
        assert!(doc.segments()[1].is_blank());
        assert!(doc.segments()[2].style.italic);
        assert_eq!(doc.segments()[3].style.alignment, Alignment::Justify);
        assert_eq!(doc.segments()[4].lines().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn texts_skip_blanks() {
        let mut builder = DocumentBuilder::new();
        builder.paragraph("a").blanks(3).paragraph("b");
        let doc = builder.finish();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.texts().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn serialises_with_snake_case_tags() {
        let mut builder = DocumentBuilder::new();
        builder.line_break_run(["x"]);
        let json = serde_json::to_value(builder.finish()).unwrap();
        assert_eq!(json["segments"][0]["kind"], "line_break_run");
        assert_eq!(json["segments"][0]["style"]["alignment"], "left");
    }
}
