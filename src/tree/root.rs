//! Root detection for the "already inside the target folder" case.

use std::path::Path;

/// Whether the tree's root line names the base directory itself, in which case
/// only the root's children should be created.
///
/// Case-sensitive exact match; a synthetic root (empty name) never matches.
pub fn should_skip_root(root_name: &str, base_dir_name: &str) -> bool {
    !root_name.is_empty() && root_name == base_dir_name
}

/// Final component of `path`, resolving `.`/`..` against the filesystem when
/// the path does not spell out a name.
pub fn base_dir_name(path: &Path) -> Option<String> {
    let named = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    match named {
        Some(name) => Some(name),
        None => path
            .canonicalize()
            .ok()?
            .file_name()
            .map(|name| name.to_string_lossy().into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn matching_name_skips_root() {
        assert!(should_skip_root("project", "project"));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!should_skip_root("Project", "project"));
    }

    #[test]
    fn synthetic_root_never_skips() {
        assert!(!should_skip_root("", ""));
    }

    #[test]
    fn base_name_of_plain_path() {
        let path = PathBuf::from("/home/dev/work/project");
        assert_eq!(base_dir_name(&path).as_deref(), Some("project"));
    }

    #[test]
    fn dot_resolves_to_current_dir_name() {
        let cwd = std::env::current_dir().unwrap();
        let expected = cwd.file_name().map(|n| n.to_string_lossy().into_owned());
        assert_eq!(base_dir_name(Path::new(".")), expected);
    }
}
