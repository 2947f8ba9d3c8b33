use crate::error::{Result, TextkeepError};
use crate::paths::Area;
use crate::store::DocumentStore;
use chrono::Local;

pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Document names are single path components. The name is returned as given.
pub fn validate_name(name: &str) -> Result<&str> {
    if name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(TextkeepError::Invalid(format!("filename: {:?}", name)));
    }
    Ok(name)
}

pub fn stamp() -> String {
    Local::now().format(STAMP_FORMAT).to_string()
}

/// Builds an artifact name from the current timestamp. If that name is
/// taken in `area` (two artifacts in the same second), `_1`, `_2`, ... is
/// appended to the stamp until it is free.
pub fn stamped_name<S, F>(store: &S, area: Area, name_for: F) -> String
where
    S: DocumentStore,
    F: Fn(&str) -> String,
{
    let ts = stamp();
    let first = name_for(&ts);
    if !store.exists(area, &first) {
        return first;
    }

    let mut n = 1u32;
    loop {
        let candidate = name_for(&format!("{}_{}", ts, n));
        if !store.exists(area, &candidate) {
            return candidate;
        }
        n += 1;
    }
}
