//! Raw row echo for quick inspection of a results file.

use std::io::{Read, Write};

use crate::table::TableError;

/// Writes every record of `reader` to `out`, fields joined by `", "`.
///
/// Fields are split on single spaces with `|` as the quote character and no
/// header handling, so a plain comma-separated file echoes one field per
/// line. Blank lines echo as empty lines and count as rows. Returns the
/// number of rows written.
pub fn echo_rows<R: Read, W: Write>(mut reader: R, mut out: W) -> Result<usize, TableError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;

    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .quote(b'|')
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_slice());

    let mut record = csv::StringRecord::new();
    let mut rows = 0;
    loop {
        let start = rdr.position().byte() as usize;
        let more = rdr.read_record(&mut record)?;
        let end = rdr.position().byte() as usize;

        // The reader skips blank lines silently; recover them from the bytes
        // consumed ahead of this record.
        for _ in 0..skipped_blank_lines(&input, start, end) {
            writeln!(out)?;
            rows += 1;
        }
        if !more {
            break;
        }

        writeln!(out, "{}", record.iter().collect::<Vec<_>>().join(", "))?;
        rows += 1;
    }
    out.flush()?;

    Ok(rows)
}

/// Counts the empty lines at the front of `input[start..end]`.
fn skipped_blank_lines(input: &[u8], start: usize, end: usize) -> usize {
    let gap = input.get(start..end).unwrap_or_default();
    let newlines = gap
        .iter()
        .take_while(|b| matches!(b, b'\r' | b'\n'))
        .filter(|&&b| b == b'\n')
        .count();

    // A leading '\n' may just finish the previous record's "\r\n".
    let ends_crlf = start > 0 && input[start - 1] == b'\r' && gap.first() == Some(&b'\n');
    newlines - usize::from(ends_crlf)
}
