/// Normalize a path string lexically: both separators become `/`, repeated
/// separators collapse, `.` segments drop and `..` pops the previous segment.
///
/// A leading separator is kept. Leading `..` segments of a relative path are kept.
///
/// # Examples
///
/// - `"src//lib/./a.js"` becomes `"src/lib/a.js"`
/// - `"src\\vendor\\..\\a.js"` becomes `"src/a.js"`
#[must_use]
pub fn normalize(path: &str) -> String {
    let absolute = path.starts_with(['/', '\\']);
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Join `base` and `path` and normalize the result. An empty base leaves `path` as is
/// (normalized). A leading separator on `path` does not re-root it.
#[must_use]
pub fn join(base: &str, path: &str) -> String {
    if base.is_empty() {
        return normalize(path);
    }
    normalize(&format!("{base}/{path}"))
}

/// Make `path` absolute against `cwd`. Absolute paths are only normalized; an empty
/// `path` resolves to `cwd` itself.
#[must_use]
pub fn resolve(cwd: &str, path: &str) -> String {
    if path.starts_with(['/', '\\']) {
        normalize(path)
    } else {
        join(cwd, path)
    }
}

/// Express `path` relative to `base`, lexically.
///
/// Returns the normalized `path` unchanged when `base` is empty or when only one of the
/// two is absolute, since no common root can be assumed then.
///
/// # Examples
///
/// - base `"/project"`, path `"/project/src/a.js"` gives `"src/a.js"`
/// - base `"/project/src"`, path `"/project/test/a.js"` gives `"../test/a.js"`
#[must_use]
pub fn relative_to(base: &str, path: &str) -> String {
    let path = normalize(path);
    if base.is_empty() {
        return path;
    }
    let base = normalize(base);
    if base.starts_with('/') != path.starts_with('/') {
        return path;
    }

    let base_parts: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    let path_parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let common = base_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = std::iter::repeat_n("..", base_parts.len() - common).collect();
    parts.extend(&path_parts[common..]);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize("src//lib///a.js"), "src/lib/a.js");
        assert_eq!(normalize("/project//src/a.js"), "/project/src/a.js");
    }

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(normalize("src\\lib\\a.js"), "src/lib/a.js");
    }

    #[test]
    fn test_normalize_dot_segments() {
        assert_eq!(normalize("./src/./a.js"), "src/a.js");
        assert_eq!(normalize("src/vendor/../a.js"), "src/a.js");
        assert_eq!(normalize("../shared/a.js"), "../shared/a.js");
        assert_eq!(normalize("/../a.js"), "/a.js");
    }

    #[test]
    fn test_join_with_empty_base() {
        assert_eq!(join("", "**/vendor/**"), "**/vendor/**");
    }

    #[test]
    fn test_join_with_trailing_separator() {
        assert_eq!(join("/project/", "/**/*.spec.js"), "/project/**/*.spec.js");
        assert_eq!(join("/project/", "src/**"), "/project/src/**");
        assert_eq!(join("/project", "./test/*.js"), "/project/test/*.js");
    }

    #[test]
    fn test_relative_to_child() {
        assert_eq!(relative_to("/project", "/project/src/a.js"), "src/a.js");
        assert_eq!(relative_to("/project/", "/project/a.js"), "a.js");
    }

    #[test]
    fn test_relative_to_sibling() {
        assert_eq!(
            relative_to("/project/src", "/project/test/a.js"),
            "../test/a.js"
        );
    }

    #[test]
    fn test_relative_to_empty_base() {
        assert_eq!(relative_to("", "/project/src/a.js"), "/project/src/a.js");
        assert_eq!(relative_to("", "src\\a.js"), "src/a.js");
        assert_eq!(
            relative_to(&resolve("/project", ""), "/project/src/a.js"),
            "src/a.js"
        );
    }

    #[test]
    fn test_resolve_against_cwd() {
        assert_eq!(resolve("/repo", ""), "/repo");
        assert_eq!(resolve("/repo", "packages/web"), "/repo/packages/web");
        assert_eq!(resolve("/repo", "../other/a.js"), "/other/a.js");
        assert_eq!(resolve("/repo", "/abs/./a.js"), "/abs/a.js");
    }

    #[test]
    fn test_relative_to_mixed_roots() {
        assert_eq!(relative_to("/project", "src/a.js"), "src/a.js");
    }

    #[test]
    fn test_relative_to_relative_paths() {
        assert_eq!(relative_to("packages/core", "packages/core/lib/x.js"), "lib/x.js");
    }
}
