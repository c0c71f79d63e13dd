//! Line classifier for the markdown subset emitted by the completion provider.

mod lexer;

use crate::ast::LineClass;
use lexer::{bold_line, line_marker, Marker};

/// Classify a single line.
///
/// The line is stripped first; classification is total and the first
/// matching rule wins.
pub fn classify_line(line: &str) -> LineClass {
    let line = line.trim();

    if line.is_empty() {
        return LineClass::BlankLine;
    }

    if let Ok((rest, marker)) = line_marker(line) {
        let text = rest.trim().to_string();
        return match marker {
            Marker::Heading3 => LineClass::Heading3(text),
            Marker::Heading2 => LineClass::Heading2(text),
            Marker::Heading1 => LineClass::Heading1(text),
            Marker::Bullet => LineClass::BulletItem(text),
        };
    }

    if let Ok((_, inner)) = bold_line(line) {
        return LineClass::BoldLine(inner.to_string());
    }

    LineClass::PlainText(line.to_string())
}

/// Classify every line of `text`, in order.
///
/// Lines are split on `\n`; a trailing `\r` is removed by stripping.
pub fn classify_text(text: &str) -> Vec<LineClass> {
    text.split('\n').map(classify_line).collect()
}
