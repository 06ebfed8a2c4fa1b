//! Infrastructure layer: platform concerns behind the domain and UI.
//!
//! Currently only sandbox path handling; see [`paths`].

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
