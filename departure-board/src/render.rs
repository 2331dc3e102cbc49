//! Plain-text rendering of the board.
//!
//! Everything here writes to the primary output stream. Diagnostics are
//! the session's business.

use std::io::{self, Write};

use crate::domain::Departure;

const INDEX_WIDTH: usize = 4;
const DESTINATION_WIDTH: usize = 28;
const NUMBER_WIDTH: usize = 14;
const TIME_WIDTH: usize = 19;

/// Printed by `select` when nothing leaves after the requested time.
pub const NO_LATER_DEPARTURES: &str = "No departures later than this time.";

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:

add - add a departure;
list - list all departures;
select <HH:MM> - show trains departing after this time;
save <file name.json> - save departures to a file;
load <file name.json> - load departures from a file;
help - show this help;
exit - quit the program.
";

fn border() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(DESTINATION_WIDTH),
        "-".repeat(NUMBER_WIDTH),
        "-".repeat(TIME_WIDTH),
    )
}

/// Write all departures as a fixed-width table with 1-based row numbers.
///
/// ```
/// use departure_board::domain::{Departure, DepartureTime};
/// use departure_board::render::write_table;
///
/// let deps = vec![Departure::new("Moscow", 1, DepartureTime::parse_hhmm("08:30").unwrap())];
/// let mut out = Vec::new();
/// write_table(&mut out, &deps).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("|    1 | Moscow "));
/// ```
pub fn write_table<W: Write>(out: &mut W, departures: &[Departure]) -> io::Result<()> {
    let line = border();

    writeln!(out, "{line}")?;
    writeln!(
        out,
        "| {:^iw$} | {:^dw$} | {:^nw$} | {:^tw$} |",
        "No",
        "Destination",
        "Train number",
        "Departure time",
        iw = INDEX_WIDTH,
        dw = DESTINATION_WIDTH,
        nw = NUMBER_WIDTH,
        tw = TIME_WIDTH,
    )?;
    writeln!(out, "{line}")?;

    for (idx, departure) in departures.iter().enumerate() {
        writeln!(
            out,
            "| {:>iw$} | {:<dw$} | {:<nw$} | {:>tw$} |",
            idx + 1,
            departure.destination,
            departure.number,
            // DepartureTime's Display ignores width flags.
            departure.time.to_string(),
            iw = INDEX_WIDTH,
            dw = DESTINATION_WIDTH,
            nw = NUMBER_WIDTH,
            tw = TIME_WIDTH,
        )?;
    }

    writeln!(out, "{line}")
}

/// Write the departures matched by `select`, numbered from 1.
///
/// Returns how many were written. When there are none, writes
/// [`NO_LATER_DEPARTURES`] instead.
pub fn write_later_departures<'a, W, I>(out: &mut W, departures: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Departure>,
{
    let mut count = 0;
    for departure in departures {
        count += 1;
        writeln!(
            out,
            "{:>4}: {} {}",
            count, departure.destination, departure.number
        )?;
    }

    if count == 0 {
        writeln!(out, "{NO_LATER_DEPARTURES}")?;
    }

    Ok(count)
}

/// Write the command summary.
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(HELP.as_bytes())
}
