use std::io::{self, Write};

use minehunt_core::Snapshot;

/// Draws the grid with row and column indices, followed by the flag counter.
pub(crate) fn write_board(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    write!(out, "    ")?;
    for col in 0..snapshot.width {
        write!(out, "{}", col % 10)?;
    }
    writeln!(out)?;

    for (row, values) in snapshot.cells.rows().into_iter().enumerate() {
        write!(out, "{row:>3} ")?;
        for value in values {
            write!(out, "{}", value.symbol())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Remaining flags: {}", snapshot.remaining_flags)
}

pub(crate) fn write_snapshot(
    out: &mut impl Write,
    snapshot: &Snapshot,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, snapshot)?;
        writeln!(out)?;
    } else {
        write_board(out, snapshot)?;
    }
    Ok(())
}

pub(crate) fn write_result(out: &mut impl Write, snapshot: &Snapshot) -> io::Result<()> {
    if snapshot.won {
        writeln!(out, "You won")
    } else if snapshot.lost {
        writeln!(out, "You lost")
    } else {
        Ok(())
    }
}
