//! Cross-namespace relative path resolution.

use std::path::{Path, PathBuf};

use skema_cache::CacheStore;

/// Extension appended to the target path before computing the relative path
/// and stripped from the result. Forcing the target to look like a file
/// keeps references to a namespace whose path is a directory prefix of
/// others pointing at the directory by name instead of `..`.
const EXT_MARKER: &str = ".js";

/// Compute the import specifier from `cache_dir` to the artifact of the
/// namespace `target_name`.
///
/// Pure given `(cache_dir, store, target_name)`: the only store call is the
/// synchronous path mapping, and no existence check is performed. The result
/// always uses forward slashes and always starts with `.` or `/`.
pub(crate) fn path_to(cache_dir: &Path, store: &dyn CacheStore, target_name: &str) -> String {
    let mut marked = store.cache_path_sync(target_name).into_os_string();
    marked.push(EXT_MARKER);
    let marked = PathBuf::from(marked);

    let mut rel = relative(cache_dir, &marked);
    if rel.ends_with(EXT_MARKER) {
        rel.truncate(rel.len() - EXT_MARKER.len());
    }
    if !rel.starts_with('.') && !rel.starts_with('/') {
        rel.insert_str(0, "./");
    }
    rel
}

/// Shortest `..`/descend sequence connecting two absolute paths, joined with
/// forward slashes regardless of host platform.
fn relative(from: &Path, to: &Path) -> String {
    let from: Vec<_> = from.components().collect();
    let to: Vec<_> = to.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from.len() {
        parts.push("..".to_string());
    }
    for component in &to[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }
    parts.join("/")
}
