//! Marker recognition for the line-oriented markdown subset.

use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::value,
    error::{Error, ErrorKind},
    IResult,
};

/// A line-leading block marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Heading3,
    Heading2,
    Heading1,
    Bullet,
}

/// Parse a leading block marker.
///
/// Alternatives are tried longest first, so `### ` never matches as `# `.
pub fn line_marker(input: &str) -> IResult<&str, Marker> {
    alt((
        value(Marker::Heading3, tag("### ")),
        value(Marker::Heading2, tag("## ")),
        value(Marker::Heading1, tag("# ")),
        value(Marker::Bullet, tag("- ")),
    ))(input)
}

/// Parse a line wrapped in `**` on both ends, returning the inner text.
///
/// The opening and closing pairs may not overlap, so `***` is rejected
/// while `****` yields empty inner text.
pub fn bold_line(input: &str) -> IResult<&str, &str> {
    let (inner, _) = tag("**")(input)?;
    match inner.strip_suffix("**") {
        Some(text) => Ok(("", text)),
        None => Err(nom::Err::Error(Error::new(input, ErrorKind::Tag))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_marker() {
        assert_eq!(line_marker("### Fase 1"), Ok(("Fase 1", Marker::Heading3)));
        assert_eq!(line_marker("## Contenidos"), Ok(("Contenidos", Marker::Heading2)));
        assert_eq!(line_marker("# Título"), Ok(("Título", Marker::Heading1)));
        assert_eq!(line_marker("- item"), Ok(("item", Marker::Bullet)));
        assert!(line_marker("#sin espacio").is_err());
        assert!(line_marker("-sin espacio").is_err());
    }

    #[test]
    fn test_bold_line() {
        assert_eq!(bold_line("**Importante**"), Ok(("", "Importante")));
        assert_eq!(bold_line("****"), Ok(("", "")));
        assert!(bold_line("***").is_err());
        assert!(bold_line("**abierto").is_err());
        assert!(bold_line("texto**").is_err());
    }
}
