//! The full directory run: load, replicate, sort, snapshot, answer queries.
//!
//! Stages run strictly in order and the first failure aborts the run with
//! the offending file's path in the error. A failed save leaves whatever
//! was written so far; nothing retries.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::DirectoryError;
use crate::format::{load_directory, load_queries, save_directory, write_query_result};
use crate::search::prefix_search;

/// The five files a run touches.
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Input directory file.
    pub directory: PathBuf,
    /// Unsorted replica written before sorting.
    pub replica: PathBuf,
    /// Sorted snapshot written after sorting.
    pub sorted: PathBuf,
    /// Query key file.
    pub queries: PathBuf,
    /// Query result file.
    pub results: PathBuf,
}

/// Execute one run end to end.
///
/// Reads the directory, writes the unsorted replica, sorts the view in
/// place, writes the sorted snapshot, then answers every query in file
/// order, appending each result block to the result file. The result file
/// is opened once for the whole query pass and flushed before close.
pub fn run(paths: &RunPaths) -> Result<(), DirectoryError> {
    let mut directory = load_directory(&paths.directory)?;

    save_directory(&directory, &paths.replica)?;
    directory.sort();
    save_directory(&directory, &paths.sorted)?;

    let keys = load_queries(&paths.queries)?;

    let file =
        fs::File::create(&paths.results).map_err(|e| DirectoryError::io(&paths.results, e))?;
    let mut out = BufWriter::new(file);
    for key in &keys {
        let window = prefix_search(&directory, key);
        write_query_result(&directory, window, &mut out)
            .map_err(|e| DirectoryError::io(&paths.results, e))?;
    }
    out.flush().map_err(|e| DirectoryError::io(&paths.results, e))
}
