//! Human-readable reports for the `stats` and `complete` commands

use crate::dictionary::Dictionary;
use crate::trie::Record;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print load statistics and trie size
pub fn print_stats(dictionary: &Dictionary, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_stats(&mut stdout, dictionary)
}

/// Print `keyword position length` rows
pub fn print_entries(entries: &[(String, Record)], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_entries(&mut stdout, entries)
}

pub fn write_stats<W: WriteColor>(out: &mut W, dictionary: &Dictionary) -> io::Result<()> {
    let stats = dictionary.stats();
    let trie = dictionary.trie();

    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Dictionary Statistics")?;
    writeln!(out, "=====================")?;
    out.reset()?;
    writeln!(out)?;

    if let Some(path) = dictionary.path() {
        write_row(out, "Source:", &path.display().to_string(), None)?;
    }
    write_row(out, "Size:", &format_size(stats.bytes), None)?;
    write_row(out, "Entries:", &stats.entries.to_string(), None)?;
    write_row(out, "Keywords:", &trie.len().to_string(), Some(Color::Green))?;
    write_row(out, "Redefined:", &stats.duplicates.to_string(), None)?;
    write_row(out, "Rejected:", &stats.rejected.to_string(), warn_if_nonzero(stats.rejected))?;
    write_row(
        out,
        "Unterminated:",
        &stats.unterminated.to_string(),
        warn_if_nonzero(stats.unterminated),
    )?;
    write_row(out, "Trie nodes:", &trie.node_count().to_string(), None)?;

    Ok(())
}

pub fn write_entries<W: WriteColor>(out: &mut W, entries: &[(String, Record)]) -> io::Result<()> {
    for (keyword, record) in entries {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", keyword)?;
        out.reset()?;
        write!(out, " ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", record.position)?;
        out.reset()?;
        writeln!(out, " {}", record.length)?;
    }
    Ok(())
}

fn write_row<W: WriteColor>(
    out: &mut W,
    label: &str,
    value: &str,
    color: Option<Color>,
) -> io::Result<()> {
    write!(out, "{:<16}", label)?;
    if color.is_some() {
        out.set_color(ColorSpec::new().set_fg(color))?;
    }
    write!(out, "{}", value)?;
    out.reset()?;
    writeln!(out)
}

fn warn_if_nonzero(count: u64) -> Option<Color> {
    (count > 0).then_some(Color::Yellow)
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
