//! Lexical path cleaning
//!
//! Purely string-based normalization of request paths into rooted, canonical
//! form. No filesystem access and no OS-specific path semantics; symlinks are
//! the backend's problem.

/// Clean a slash-separated path into its shortest rooted equivalent.
///
/// Rules:
/// - the result always starts with `/`
/// - repeated slashes are collapsed
/// - `.` segments are removed
/// - `..` segments are resolved and can never climb above the root
/// - the trailing slash is dropped unless the result is `/` itself
///
/// # Examples
/// ```
/// use spa_server::vfs::path::clean;
/// assert_eq!(clean("/a/b/../c"), "/a/c");
/// assert_eq!(clean("/../../etc/passwd"), "/etc/passwd");
/// assert_eq!(clean("//a//b/"), "/a/b");
/// ```
pub fn clean(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut cleaned = String::with_capacity(path.len().max(1));
    cleaned.push('/');
    cleaned.push_str(&segments.join("/"));
    cleaned
}
