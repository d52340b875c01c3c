//! Column naming rules.
//!
//! Entity `Name` stores its state in columns `Name`, `Name.1`, `Name.2`, ...
//! where the first three components are the x/y/z position.

use std::collections::HashMap;

/// Substring that marks a column as belonging to an entity.
pub const DEFAULT_ENTITY_PATTERN: &str = "Entity";

/// Name of the simulation time column.
pub const DEFAULT_TIME_COLUMN: &str = "Time";

/// Number of leading state components that hold the position.
pub const POSITION_COMPONENTS: usize = 3;

/// Renames repeated header names so every column is addressable.
///
/// The first occurrence of a name is kept; the k-th repeat becomes
/// `name.k`. When `name.k` is itself already in use the suffix is applied
/// again, so the result never contains duplicates.
///
/// ```
/// use traj_data::mangle_headers;
///
/// let headers = mangle_headers(&["Time", "Entity0", "Entity0", "Entity0"]);
/// assert_eq!(headers, ["Time", "Entity0", "Entity0.1", "Entity0.2"]);
/// ```
pub fn mangle_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut mangled = Vec::with_capacity(raw.len());

    for name in raw {
        let mut column = name.as_ref().to_string();
        let mut seen = counts.get(&column).copied().unwrap_or(0);

        while seen > 0 {
            counts.insert(column.clone(), seen + 1);
            column = format!("{}.{}", column, seen);
            seen = counts.get(&column).copied().unwrap_or(0);
        }

        counts.insert(column.clone(), seen + 1);
        mangled.push(column);
    }

    mangled
}

/// Returns true if `name` is the first (x) column of an entity.
pub fn is_entity_base(name: &str, pattern: &str) -> bool {
    name.contains(pattern) && !name.contains('.')
}

/// Column holding state component `index` of entity `base`.
pub fn component_column(base: &str, index: usize) -> String {
    if index == 0 {
        base.to_string()
    } else {
        format!("{}.{}", base, index)
    }
}
