use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::parser::{ConsoleInput, parse_line};
use crate::error::{AppError, SubmitError};
use crate::form::FormSession;
use crate::validation::ValidationOutcome;

pub const MAX_LINE_LENGTH: usize = 4096;

/// Runs a console session until the reader is exhausted or `:quit` is read.
///
/// - Each credentials line updates the session and echoes `ok` or `invalid`.
/// - `:submit` echoes `submitted` or `rejected`.
/// - `:edit-username` clears the password fields.
pub async fn run<R, W>(
    mut reader: R,
    writer: &mut W,
    session: &mut FormSession,
) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Input closed");
            break;
        }

        // The limit applies to the content, not the line terminator.
        let content_len = buf
            .strip_suffix(b"\n")
            .map(|rest| rest.strip_suffix(b"\r").unwrap_or(rest))
            .unwrap_or(&buf[..])
            .len();
        if content_len > MAX_LINE_LENGTH {
            warn!("Discarding {} byte input line", content_len);
            writer.write_all(b"error: line too long\n").await?;
            continue;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                warn!("Discarding input line that is not UTF-8: {}", e);
                writer.write_all(b"error: invalid UTF-8\n").await?;
                continue;
            }
        };

        let response = match parse_line(line) {
            ConsoleInput::Blank => continue,
            ConsoleInput::Quit => break,
            ConsoleInput::Update(credentials) => describe(session.update(credentials)),
            ConsoleInput::EditUsername => describe(session.begin_editing_username()),
            ConsoleInput::Submit => match session.submit() {
                Ok(()) => "submitted".to_string(),
                Err(SubmitError::NotValid(failure)) if failure.is_quiet() => {
                    "rejected".to_string()
                }
                Err(SubmitError::NotValid(failure)) => format!("rejected: {failure}"),
            },
        };

        writer.write_all(response.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(())
}

fn describe(outcome: &ValidationOutcome) -> String {
    match outcome.failure() {
        None => "ok".to_string(),
        Some(failure) if failure.is_quiet() => "invalid".to_string(),
        Some(failure) => format!("invalid: {failure}"),
    }
}
