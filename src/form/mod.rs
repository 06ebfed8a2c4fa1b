//! Add-item form: transient composition state and field validation.

pub mod session;

pub use session::{Field, FormSession};
