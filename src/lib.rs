//! Notebook Discovery
//!
//! Finds Jupyter notebooks under a workshop tree and assigns each one an
//! execution timeout based on the lab category it lives in.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod output;
pub mod timeouts;

pub use discovery::{discover_from_config, discover_notebooks, discover_with_table, NotebookCase};
pub use timeouts::{resolve_timeout, CategoryTimeout, TimeoutTable};
