//! Sorted phone directory with longest-common-prefix search.
//!
//! The directory is a fixed array of contacts accessed through a separable
//! index layer; sorting and searching never move the contacts themselves.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│   sort.rs   │────▶│  search.rs  │
//! │ (Contact,   │     │ (heap sort  │     │ (anchor +   │
//! │  Directory) │     │  over view) │     │  expansion) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              format.rs / pipeline.rs                │
//! │   (flat text codec, query results, the full run)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use ypages::{load_directory, prefix_search};
//!
//! # fn main() -> Result<(), ypages::DirectoryError> {
//! let mut directory = load_directory("data.dat")?;
//! directory.sort();
//!
//! if let Some(window) = prefix_search(&directory, "Ad") {
//!     for pos in window.first..=window.last {
//!         println!("{}", directory.at(pos).name.family);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod format;
mod pipeline;
mod search;
mod sort;
mod types;

pub use error::DirectoryError;
pub use format::{
    load_directory, load_queries, save_directory, write_contact, write_directory,
    write_query_result,
};
pub use pipeline::{run, RunPaths};
pub use search::{prefix_search, MatchWindow};
pub use sort::sort_view;
pub use types::{contact_order, shares_prefix, Contact, Directory, Name, PhoneNumber,
    MAX_NAME_BYTES};
