use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn init(json: bool) {
    JSON_MODE.store(json, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

/// Print a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a section heading in bold.
pub fn heading(text: &str) -> anyhow::Result<()> {
    let mut out = StandardStream::stdout(ColorChoice::Auto);
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{text}")?;
    out.reset()?;
    Ok(())
}

/// Print a warning line in yellow to stderr.
pub fn warn(text: &str) -> anyhow::Result<()> {
    let mut err = StandardStream::stderr(ColorChoice::Auto);
    err.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(err, "warning: {text}")?;
    err.reset()?;
    Ok(())
}

/// Format a whole-dollar amount as `$1,234`.
pub fn usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(usd(0), "$0");
        assert_eq!(usd(499), "$499");
        assert_eq!(usd(1500), "$1,500");
        assert_eq!(usd(1234567), "$1,234,567");
    }
}
