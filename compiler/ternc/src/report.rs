//! Diagnostic rendering with source snippets.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use tern_eval::{EvalError, EvalErrorKind};
use tern_ir::Span;
use tern_parse::ParseError;

/// Every parse error, in source order.
pub fn render_parse_errors(path: &str, source: &str, errors: &[ParseError], color: bool) -> String {
    errors
        .iter()
        .map(|error| {
            render(
                path,
                source,
                &error.message,
                Some((error.span, "here")),
                error.help,
                color,
            )
        })
        .collect()
}

pub fn render_eval_error(path: &str, source: &str, error: &EvalError, color: bool) -> String {
    let label = if error.is_uncaught_exception() {
        "thrown here"
    } else {
        "raised here"
    };
    let help = match error.kind {
        EvalErrorKind::RecursionLimit { .. } => Some("raise the limit with --max-depth=<n>"),
        EvalErrorKind::ModuleLoad { .. } => Some("paths are resolved against the script's directory"),
        _ => None,
    };
    render(
        path,
        source,
        &error.message,
        error.span.map(|span| (span, label)),
        help,
        color,
    )
}

fn render(
    path: &str,
    source: &str,
    message: &str,
    label: Option<(Span, &str)>,
    help: Option<&str>,
    color: bool,
) -> String {
    let offset = label.map_or(0, |(span, _)| clamp(span, source.len()).start);
    let config = Config::default()
        .with_color(color)
        .with_index_type(IndexType::Byte);
    let mut builder = Report::build(ReportKind::Error, path, offset)
        .with_config(config)
        .with_message(message);
    if let Some((span, text)) = label {
        builder = builder.with_label(
            Label::new((path, clamp(span, source.len())))
                .with_message(text)
                .with_color(Color::Red),
        );
    }
    if let Some(help) = help {
        builder = builder.with_help(help);
    }

    let mut out = Vec::new();
    if builder
        .finish()
        .write((path, Source::from(source)), &mut out)
        .is_err()
    {
        return format!("error: {message}\n");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Spans from another file (a loaded module) can run past this source.
fn clamp(span: Span, len: usize) -> Range<usize> {
    let range = span.to_range();
    let end = range.end.min(len);
    range.start.min(end)..end
}

#[cfg(test)]
mod tests;
