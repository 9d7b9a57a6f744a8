use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};
use cdjson_core::{Error, Span};

use crate::config::ColorChoice;

pub type DiagnosticReport<'a> = Report<'a, (&'a String, Range<usize>)>;

/// ariadne counts characters, our spans count bytes.
fn char_range(src: &str, span: Span) -> Range<usize> {
    let lo = src.get(..span.lo).map_or(0, |s| s.chars().count());
    let len = src.get(span.lo..span.hi).map_or(0, |s| s.chars().count());
    lo..lo + len
}

pub fn parse_error_report<'a>(
    path: &'a String,
    src: &str,
    err: &Error,
    color: ColorChoice,
) -> DiagnosticReport<'a> {
    let range = char_range(src, err.span().unwrap_or(Span::point(src.len())));

    Report::build(ReportKind::Error, path, range.start)
        .with_config(color.ariadne_config())
        .with_message(err.kind().to_string())
        .with_label(
            Label::new((path, range))
                .with_message(err.label())
                .with_color(Color::Red),
        )
        .finish()
}

pub fn report_parse_error(
    path: &String,
    src: &str,
    err: &Error,
    color: ColorChoice,
) -> anyhow::Result<()> {
    parse_error_report(path, src, err, color).eprint((path, Source::from(src)))?;
    Ok(())
}
