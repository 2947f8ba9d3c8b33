//! Pure content transforms. Nothing in here touches storage.

pub mod ops;
pub mod search;

pub use ops::{apply, apply_named, TextOperation};
pub use search::search;
