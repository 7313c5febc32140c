use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::database::Database;
use crate::error::{AppError, InvalidSelection};
use crate::reports::{self, Report};

pub const MENU: &str = "Please select the following:
  1) Find the top 3 articles of all time
  2) Find the top authors of all time
  3) Find the days where more than 1 percent of the requests led to errors
  0) Exit program
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Run(Report),
    Exit,
}

impl FromStr for Selection {
    type Err = InvalidSelection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.parse::<u8>() {
            Ok(0) => Ok(Selection::Exit),
            Ok(n) => Report::from_number(n)
                .map(Selection::Run)
                .ok_or_else(|| InvalidSelection(input.to_string())),
            Err(_) => Err(InvalidSelection(input.to_string())),
        }
    }
}

enum State {
    AwaitingInput,
    Dispatching(Report),
    Terminated,
}

/// Shows the menu until the user picks 0 or `input` runs dry.
///
/// Returns early only on fatal errors; failed queries are reported and the
/// menu comes back.
pub async fn run<R, W>(db: &Database, input: &mut R, out: &mut W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut state = State::AwaitingInput;
    let mut line = String::new();

    loop {
        state = match state {
            State::AwaitingInput => {
                out.write_all(MENU.as_bytes()).await?;
                out.flush().await?;

                line.clear();
                if input.read_line(&mut line).await? == 0 {
                    debug!("input closed");
                    State::Terminated
                } else {
                    match line.parse::<Selection>() {
                        Ok(Selection::Run(report)) => State::Dispatching(report),
                        Ok(Selection::Exit) => State::Terminated,
                        Err(e) => {
                            debug!("{e}");
                            out.write_all(b"Invalid input!\n\n").await?;
                            State::AwaitingInput
                        }
                    }
                }
            }
            State::Dispatching(report) => {
                match reports::run_report(db, report, out).await {
                    Err(e) if e.is_fatal() => return Err(e),
                    _ => State::AwaitingInput,
                }
            }
            State::Terminated => {
                out.write_all(b"Exiting program\n").await?;
                out.flush().await?;
                return Ok(());
            }
        };
    }
}
