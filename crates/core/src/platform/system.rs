use std::io::{BufRead, Write};
use std::process::Command;

use chrono::{NaiveDate, Utc};
use url::Url;

use crate::errors::CoreError;

use super::traits::{Clock, ConfirmationPrompt, MapNavigator};

/// System wall clock (UTC, daily granularity).
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Terminal confirmation prompt: prints `message [y/N]` and reads one
/// line from stdin. Anything other than an explicit yes declines, and a
/// read failure declines as well.
pub struct StdinPrompt;

impl ConfirmationPrompt for StdinPrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut stdout = std::io::stdout();
        if write!(stdout, "{message} [y/N] ").and_then(|()| stdout.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }

        let answer = answer.trim();
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }
}

/// Opens URLs with the platform's default opener.
pub struct SystemNavigator;

#[cfg(target_os = "macos")]
fn opener(url: &Url) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(url.as_str());
    cmd
}

#[cfg(target_os = "windows")]
fn opener(url: &Url) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", "", url.as_str()]);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener(url: &Url) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url.as_str());
    cmd
}

impl MapNavigator for SystemNavigator {
    fn open(&self, url: &Url) -> Result<(), CoreError> {
        opener(url).spawn()?;
        Ok(())
    }
}
