use std::io::{self, Write};

use crate::point::Coord;

/// Writes one `LABEL (x, y)` line per point and returns how many were written.
pub fn write_points<W, I>(out: &mut W, label: &str, points: I) -> io::Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Coord>,
{
    let mut written = 0;
    for point in points {
        writeln!(out, "{} {}", label, point)?;
        written += 1;
    }
    Ok(written)
}
