//! Plain-text rendering of a [`View`].

use std::io::{self, Write};

use super::View;

/// How [`write_view`] prints an explanation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputFormat {
    /// `{"explanation", "bullets"}` instead of text.
    pub json: bool,
    /// Multi-line JSON.
    pub pretty: bool,
}

/// Writes `view` to `out`: the explanation paragraph, then one `• ` line per bullet in order.
/// Messages (validation, failure) are written as a single line. [`View::Ignored`] writes nothing.
pub fn render<W: Write>(view: &View, out: &mut W) -> io::Result<()> {
    match view {
        View::Invalid(msg) | View::Failed(msg) => writeln!(out, "{}", msg),
        View::Ignored => Ok(()),
        View::Explained(parsed) => {
            writeln!(out, "{}", parsed.explanation)?;
            if !parsed.bullets.is_empty() {
                writeln!(out)?;
                for bullet in &parsed.bullets {
                    writeln!(out, "• {}", bullet)?;
                }
            }
            Ok(())
        }
    }
}

/// Routes a view: explanations to `out` (text or JSON), validation and failure messages to
/// `err`. Returns false for those messages.
pub fn write_view<O: Write, E: Write>(
    view: &View,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> io::Result<bool> {
    match view {
        View::Explained(parsed) if format.json => {
            let s = if format.pretty {
                serde_json::to_string_pretty(parsed)
            } else {
                serde_json::to_string(parsed)
            }
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(out, "{}", s)?;
            Ok(true)
        }
        View::Explained(_) | View::Ignored => render(view, out).map(|_| true),
        View::Invalid(_) | View::Failed(_) => render(view, err).map(|_| false),
    }
}
