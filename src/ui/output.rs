//! Output formatting for probe results

use serde::Serialize;
use std::io::Write;

use crate::core::constants::output_formats;
use crate::core::error::Result;

/// JSON document written by `--format json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub live: &'a [String],
    pub hosts_checked: usize,
}

/// Write the live URLs in the requested format.
pub fn write_results<W: Write>(
    writer: &mut W,
    live_urls: &[String],
    hosts_checked: usize,
    format: &str,
) -> Result<()> {
    match format {
        output_formats::JSON => write_json(writer, live_urls, hosts_checked),
        _ => write_text(writer, live_urls),
    }
}

/// One URL per line, in the order given.
pub fn write_text<W: Write>(writer: &mut W, live_urls: &[String]) -> Result<()> {
    for url in live_urls {
        writeln!(writer, "{url}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(writer: &mut W, live_urls: &[String], hosts_checked: usize) -> Result<()> {
    let report = JsonReport {
        live: live_urls,
        hosts_checked,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
