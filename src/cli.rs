//! CLI definitions for the ypages binary.
//!
//! One command: run the whole pipeline (load, replicate, sort, snapshot,
//! answer queries). The five file paths default to the classic fixed names
//! so a bare `ypages` works in a directory holding `data.dat` and
//! `query.dat`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ypages",
    about = "Sorted phone directory with prefix search",
    version
)]
pub struct Cli {
    /// Input directory file
    #[arg(long, default_value = "data.dat")]
    pub directory: PathBuf,

    /// Unsorted replica written before sorting
    #[arg(long, default_value = "data.replica")]
    pub replica: PathBuf,

    /// Sorted snapshot written after sorting
    #[arg(long, default_value = "data.sorted")]
    pub sorted: PathBuf,

    /// Query key file
    #[arg(long, default_value = "query.dat")]
    pub queries: PathBuf,

    /// Query result file
    #[arg(long, default_value = "query.ans")]
    pub results: PathBuf,
}
