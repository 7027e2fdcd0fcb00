//! # Vector Table IO

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use flate2::read::GzDecoder;

use crate::{errors::WLResult, vectors::VectorTable};

/// Load a [`VectorTable`] from a line-oriented vector file.
///
/// Lines are:
/// ```terminaloutput
/// {WORD} {C1} {C2} ... {Cdim}
/// ```
///
/// Sources with a `.gz` extension are decompressed while streaming.
///
/// ## Arguments
/// * `path` - the path to the vector file.
/// * `dim` - the expected vector dimension.
pub fn load_vector_table_path<P: AsRef<Path>>(
    path: P,
    dim: usize,
) -> WLResult<VectorTable> {
    let path = path.as_ref();
    let file = File::open(path)?;

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        read_vector_table(BufReader::new(GzDecoder::new(file)), dim)
    } else {
        read_vector_table(BufReader::new(file), dim)
    }
}

/// Read a [`VectorTable`] from a vector line reader.
///
/// Lines whose component count differs from `dim`, or whose components
/// fail to parse, are excluded; the table only ever holds exact-`dim`
/// rows. Read failures propagate.
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `dim` - the expected vector dimension.
pub fn read_vector_table<R: BufRead>(
    reader: R,
    dim: usize,
) -> WLResult<VectorTable> {
    let mut table = VectorTable::new(dim);
    let mut dropped: usize = 0;

    for line in reader.lines() {
        let line = line?;

        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };

        let retained = parse_components(fields, dim)
            .map(|vector| table.insert(word.to_owned(), vector))
            .unwrap_or(false);
        if !retained {
            dropped += 1;
        }
    }

    if dropped > 0 {
        log::debug!("excluded {dropped} vector rows with dimension != {dim}");
    }
    log::info!("loaded {} word vectors (dim={dim})", table.len());

    Ok(table)
}

/// Parse whitespace-separated float components, bounded by `dim`.
///
/// Returns `None` on a parse failure or on more than `dim` components;
/// under-length vectors are caught by the table's insert check.
fn parse_components<'a, I>(
    fields: I,
    dim: usize,
) -> Option<Vec<f32>>
where
    I: Iterator<Item = &'a str>,
{
    let mut vector = Vec::with_capacity(dim);
    for field in fields {
        if vector.len() == dim {
            return None;
        }
        vector.push(field.parse::<f32>().ok()?);
    }
    Some(vector)
}
