use std::collections::HashSet;

/// Case-insensitive, order-preserving uniqueness filter.
///
/// The first occurrence wins, keeping its original casing and position.
pub fn dedupe<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for item in items {
        let item = item.into();
        if seen.insert(item.to_lowercase()) {
            unique.push(item);
        }
    }

    unique
}
