//! Sort the lines of a file by one of several interpretations
//!
//! Lines can be ordered as locale-aware text, as text with a leading number,
//! as text with a leading date or datetime, as filesystem paths, as IP
//! addresses or as CIDR networks. Each interpretation is an
//! [`Approach`](approach::Approach) in the [`APPROACHES`] registry.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod config;
pub mod error;

// Comparison
pub mod address;
pub mod approach;
pub mod comparer;
pub mod locale;
pub mod path_semantics;

// Sorting and file handling
pub mod core_sort;
pub mod input;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use approach::{Approach, Sortable, APPROACHES};
pub use config::{LocaleTag, OutputMode, PathFlavor, SortConfig, SortParams};
pub use core_sort::{check_sorted, sort_fail_fast, sort_latched};
pub use error::{SortError, SortResult};

/// Success
pub const EXIT_SUCCESS: i32 = 0;
/// The file was checked and is not sorted (or not unique)
pub const EXIT_FAILURE: i32 = 1;
/// Any other error
pub const SORT_FAILURE: i32 = 2;

/// Sort (or check) the file named by `config`
pub fn sort(config: &SortConfig) -> SortResult<i32> {
    config.validate()?;
    core_sort::CoreSort::new(config.clone()).run()?;
    Ok(EXIT_SUCCESS)
}
