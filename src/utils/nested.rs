use crate::utils::error::{OrgError, Result};
use serde_json::Value;

/// Walks `path` through nested JSON objects and returns the value at the end.
///
/// Fails with [`OrgError::MissingKey`] naming the first key that cannot be
/// resolved, either because it is absent or because the value reached so far
/// is not an object. An empty path returns `map` itself.
pub fn access_nested_map<'a>(map: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = map;
    for key in path {
        current = current
            .as_object()
            .and_then(|obj| obj.get(*key))
            .ok_or_else(|| OrgError::missing_key(*key))?;
    }
    Ok(current)
}
