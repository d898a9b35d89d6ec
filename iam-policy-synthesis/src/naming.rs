//! Pure string utilities shared by the path-based builders.

/// Derive a policy name from a label prefix and a storage path.
///
/// IAM policy names must not contain `/`, so every separator in the path is
/// replaced with `+`. For paths containing no `+` of their own the mapping is
/// injective: distinct paths yield distinct names.
pub fn policy_name_for_path(prefix: &str, path: &str) -> String {
    format!("{}{}", prefix, path.replace('/', "+"))
}

/// Extract the bucket from a storage path.
///
/// The first path segment (up to the first `/`) is the bucket; everything
/// after it is an object-key prefix. A path without `/` is itself the bucket.
pub fn bucket_name(path: &str) -> &str {
    match path.find('/') {
        Some(index) => &path[..index],
        None => path,
    }
}
