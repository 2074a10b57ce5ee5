//! Single-root-folder unwrapping.

use crate::types::RawEntry;

/// Returns the root folder shared by every path, if there is one.
///
/// A root exists only when every path has at least two `/`-separated
/// segments and all of them share the same first segment. A single path at
/// the archive root disables unwrapping for the whole batch.
///
/// # Examples
///
/// ```
/// use unbundle_core::normalize::common_root;
///
/// assert_eq!(common_root(["repo/a.txt", "repo/sub/b.txt"]), Some("repo"));
/// assert_eq!(common_root(["a.txt", "repo/b.txt"]), None);
/// assert_eq!(common_root(["x/a.txt", "y/b.txt"]), None);
/// ```
#[must_use]
pub fn common_root<'a, I>(paths: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut root: Option<&str> = None;

    for path in paths {
        let (first, _) = path.split_once('/')?;
        match root {
            None => root = Some(first),
            Some(existing) if existing == first => {}
            Some(_) => return None,
        }
    }

    root
}

/// Strips the shared root folder from every entry, all or nothing.
///
/// Returns the removed folder name when unwrapping applied.
pub fn unwrap_top_level(entries: &mut [RawEntry]) -> Option<String> {
    let root = common_root(entries.iter().map(|e| e.path.as_str()))?.to_string();
    let prefix_len = root.len() + 1;

    for entry in entries.iter_mut() {
        entry.path.replace_range(..prefix_len, "");
    }

    Some(root)
}
