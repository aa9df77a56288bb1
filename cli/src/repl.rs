//! Interactive loop: read a paragraph, submit it, print, repeat until EOF or quit.
//!
//! Lines are collected until a blank line, so multi-line pasted text is sent as one request.
//! A blank line with nothing collected submits empty input and shows the validation message.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use cli::{submit, write_view, Indicator, OutputFormat, SubmitControl, Transport};

fn is_quit_command(line: &str) -> bool {
    matches!(line.trim(), "quit" | "exit" | "/quit")
}

/// Runs the loop over `input`, writing the prompt and explanations to `out` and failure
/// messages to `err`. Request failures are printed and the loop continues.
pub(crate) async fn run_repl_loop<R, O, E, T, I>(
    input: R,
    out: &mut O,
    err: &mut E,
    transport: &T,
    control: &mut SubmitControl<I>,
    format: OutputFormat,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    O: Write,
    E: Write,
    T: Transport + ?Sized,
    I: Indicator,
{
    let mut lines = input.lines();
    let mut paragraph: Vec<String> = Vec::new();

    loop {
        if paragraph.is_empty() {
            write!(out, "> ")?;
            out.flush()?;
        }

        let line = match lines.next_line().await? {
            None => break,
            Some(s) if paragraph.is_empty() && is_quit_command(&s) => break,
            Some(s) => s,
        };

        if !line.trim().is_empty() {
            paragraph.push(line);
            continue;
        }

        let text = paragraph.join("\n");
        paragraph.clear();
        let view = submit(&text, transport, control).await;
        write_view(&view, format, out, err)?;
    }

    if !paragraph.is_empty() {
        let view = submit(&paragraph.join("\n"), transport, control).await;
        write_view(&view, format, out, err)?;
    }
    Ok(())
}
