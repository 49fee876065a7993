use std::path::{Component, PathBuf};

/// Whether a path component is exactly the named folder
pub(super) fn is_segment(component: &Component<'_>, name: &str) -> bool {
    matches!(component, Component::Normal(segment) if *segment == name)
}

/// Index of the first run of `markers` starting at or after `from`
pub(super) fn find_sequence(components: &[Component<'_>], from: usize, markers: &[&str]) -> Option<usize> {
    if markers.is_empty() || from >= components.len() {
        return None;
    }

    components[from..]
        .windows(markers.len())
        .position(|window| {
            window
                .iter()
                .zip(markers)
                .all(|(component, marker)| is_segment(component, marker))
        })
        .map(|offset| from + offset)
}

/// Rebuilds a path from a run of components
pub(super) fn join(components: &[Component<'_>]) -> PathBuf {
    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn components(path: &str) -> Vec<Component<'_>> {
        Path::new(path).components().collect()
    }

    #[test]
    fn test_is_segment() {
        let parts = components("/a/js/..");
        assert!(!is_segment(&parts[0], "/"), "root is never a named segment");
        assert!(is_segment(&parts[2], "js"));
        assert!(!is_segment(&parts[2], "j"));
        assert!(!is_segment(&parts[3], ".."));
    }

    #[test]
    fn test_find_sequence() {
        let parts = components("/srv/js/x/js/src/file.js");
        assert_eq!(find_sequence(&parts, 0, &["js", "src"]), Some(4));
        assert_eq!(find_sequence(&parts, 0, &["js"]), Some(2));
        assert_eq!(find_sequence(&parts, 3, &["js"]), Some(4));
        assert_eq!(find_sequence(&parts, 0, &["src", "js"]), None);
        assert_eq!(find_sequence(&parts, 10, &["js"]), None);
        assert_eq!(find_sequence(&parts, 0, &[]), None);
    }

    #[test]
    fn test_join() {
        let parts = components("/srv/app/js/src/file.js");
        assert_eq!(join(&parts[..4]), PathBuf::from("/srv/app/js"));
        assert_eq!(join(&parts[4..5]), PathBuf::from("src"));
        assert_eq!(join(&[]), PathBuf::new());
    }
}
