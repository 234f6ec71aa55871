use super::parse::parse_access_event;
use crate::access_log::render_line;
use anyhow::Result;
use serde_json::Value;
use std::io::{self, BufRead, Write};

pub fn run_logs(raw: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    if raw {
        run_raw(stdin.lock(), stdout.lock())
    } else {
        run_pretty(stdin.lock(), stdout.lock())
    }
}

pub fn run_raw(input: impl BufRead, mut out: impl Write) -> Result<()> {
    for line in input.lines() {
        writeln!(out, "{}", line?)?;
    }
    Ok(())
}

pub fn run_pretty(input: impl BufRead, mut out: impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;

        let Ok(json) = serde_json::from_str::<Value>(&line) else {
            // Preserve non-JSON lines as-is for troubleshooting.
            writeln!(out, "{line}")?;
            continue;
        };

        match parse_access_event(&json) {
            Some(event) => writeln!(out, "{}", render_line(&event))?,
            None => writeln!(out, "{line}")?,
        }
    }
    Ok(())
}
