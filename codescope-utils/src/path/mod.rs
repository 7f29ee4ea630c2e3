//! Helpers for slash-delimited repository paths.
//!
//! These operate on listing paths such as `src/lib/a.ts`, never on OS paths,
//! so the separator is always `/` regardless of platform.

/// Number of `/`-delimited segments in `path`.
pub fn path_depth(path: &str) -> usize {
    path.split('/').count()
}

/// Everything before the final segment, or `None` for a single-segment path.
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind('/').map(|idx| &path[..idx])
}

/// Final path segment.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lowercased extension of the final segment.
///
/// Names without a dot, ending in a dot, or consisting only of a leading-dot
/// name (`.gitignore`) have no extension.
pub fn file_extension(path: &str) -> Option<String> {
    let name = file_name(path);
    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(name[idx + 1..].to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_depth() {
        assert_eq!(path_depth("src"), 1);
        assert_eq!(path_depth("src/a.ts"), 2);
        assert_eq!(path_depth("src/b/c.ts"), 3);
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("src"), None);
        assert_eq!(parent_path("src/a.ts"), Some("src"));
        assert_eq!(parent_path("src/b/c.ts"), Some("src/b"));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("README.md"), "README.md");
        assert_eq!(file_name("src/b/c.ts"), "c.ts");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("src/App.TSX"), Some("tsx".to_string()));
        assert_eq!(file_extension("lib.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("Makefile"), None);
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension("weird."), None);
        assert_eq!(file_extension("dir.d/Makefile"), None);
    }

    proptest! {
        #[test]
        fn parent_has_one_less_segment(segments in prop::collection::vec("[a-z]{1,6}", 2..6)) {
            let path = segments.join("/");
            let parent = parent_path(&path).unwrap();
            prop_assert_eq!(path_depth(parent) + 1, path_depth(&path));
            prop_assert_eq!(format!("{}/{}", parent, file_name(&path)), path);
        }
    }
}
