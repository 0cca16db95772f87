//! Frequency report rendering

use crate::tally::Frequencies;
use std::io::{self, Write};

/// Write the frequency report: one `(answer, count)` line per distinct
/// answer, ascending by count, followed by the summary line.
pub fn write_report<W: Write>(out: &mut W, frequencies: &Frequencies) -> io::Result<()> {
    for (answer, count) in frequencies.sorted_ascending() {
        writeln!(out, "({answer}, {count})")?;
    }
    writeln!(
        out,
        "Extracted {} different answer lines from {} questions.",
        frequencies.distinct(),
        frequencies.total()
    )
}
