//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use thriftc_core::Line;

use super::Diagnostics;

/// Builder for rendering diagnostics with various options.
///
/// Without a source text every diagnostic is one `error: line N: ...` line.
/// With one, the offending line is quoted and underlined.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }

            let message = diag.message();
            // Positions the source does not have fall back to plain text.
            let Some(range) = line_range(source, diag.line()) else {
                write!(w, "error: {diag}")?;
                continue;
            };

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range).label(&message));
            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let report = [Level::ERROR.primary_title(&message).element(snippet)];
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            match self.path {
                Some(p) => write!(w, "{p}:{}: error: {}", diag.line(), diag.cause)?,
                None => write!(w, "error: {diag}")?,
            }
        }
        Ok(())
    }
}

/// Byte range of the text on a 1-based line, without its indentation.
fn line_range(source: &str, line: Line) -> Option<std::ops::Range<usize>> {
    let index = (line as usize).checked_sub(1)?;
    let mut start = 0;
    for (i, text) in source.split('\n').enumerate() {
        if i == index {
            let text = text.strip_suffix('\r').unwrap_or(text);
            let trimmed = text.trim_start();
            let offset = start + (text.len() - trimmed.len());
            let end = offset + trimmed.trim_end().len();
            if offset == end {
                return Some(offset..(offset + 1).min(source.len()));
            }
            return Some(offset..end);
        }
        start += text.len() + 1;
    }
    None
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
