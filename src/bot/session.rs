//! Interactive read-dispatch-print loop.

use super::router::{Outcome, Router};
use crate::clock::Clock;
use std::borrow::Cow;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "\nEnter a command: ";
pub const FAREWELL: &str = "Goodbye!";

/// Run the conversation until `exit`/`close` or end of input.
///
/// Every reply is written on its own line prefixed with `"- "`. Lines that
/// are not valid UTF-8 are decoded lossily and dispatched like any other
/// input, so undecodable bytes get a reply instead of ending the session.
pub async fn run<C, R, W>(
    router: &mut Router<C>,
    mut input: R,
    mut output: W,
) -> std::io::Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(format!("{}\n", WELCOME).as_bytes()).await?;
    let mut buf = Vec::new();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            info!("end of input");
            output
                .write_all(format!("\n- {}\n", FAREWELL).as_bytes())
                .await?;
            break;
        }

        let line = decode_line(&buf);
        match router.dispatch(&line) {
            Outcome::Reply(text) => {
                output.write_all(format!("- {}\n", text).as_bytes()).await?;
            }
            Outcome::Exit(text) => {
                info!("exit requested");
                output.write_all(format!("- {}\n", text).as_bytes()).await?;
                break;
            }
        }
    }

    output.flush().await
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        debug!("input line was not valid UTF-8");
    }
    line.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn router() -> Router<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2026, 6, 10).unwrap();
        Router::with_clock(FixedClock(today), 7)
    }

    #[tokio::test]
    async fn test_session_transcript() {
        let mut router = router();
        let mut output = Vec::new();
        run(&mut router, &b"hello\nexit\nhello\n"[..], &mut output)
            .await
            .unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(
            transcript,
            "Welcome to the assistant bot!\n\
             \nEnter a command: - How can I help you?\n\
             \nEnter a command: - Goodbye!\n"
        );
    }

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"hello\n"), "hello");
        assert_eq!(decode_line(b"hello\r\n"), "hello");
        assert_eq!(decode_line(b"hello"), "hello");
        assert_eq!(decode_line(b"\xff\xfe bad\n"), "\u{FFFD}\u{FFFD} bad");
    }

    #[tokio::test]
    async fn test_session_continues_after_invalid_utf8() {
        let mut router = router();
        let mut output = Vec::new();
        run(
            &mut router,
            &b"hello\n\xff\xfe bad\nadd Bob 0501234567\nexit\n"[..],
            &mut output,
        )
        .await
        .unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("- Invalid command.\n"));
        assert!(transcript.contains("- Contact added.\n"));
        assert!(transcript.ends_with("- Goodbye!\n"));
        assert!(router.directory().contains("Bob"));
    }

    #[tokio::test]
    async fn test_session_end_of_input() {
        let mut router = router();
        let mut output = Vec::new();
        run(&mut router, &b"add Alice 0501234567"[..], &mut output)
            .await
            .unwrap();

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("- Contact added.\n"));
        assert!(transcript.ends_with("\nEnter a command: \n- Goodbye!\n"));
        assert!(router.directory().contains("Alice"));
    }
}
