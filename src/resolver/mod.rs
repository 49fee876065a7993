//! Path resolution
//!
//! Maps a JavaScript source file to the folder its compiled output belongs
//! in. Two project layouts are recognised, see [`Layout`]. Matching works on
//! whole path segments, so a folder such as `js-src-backup` never counts as
//! `js/src`.

mod layout;
mod segments;

use std::path::{Component, Path, PathBuf};

use log::trace;

pub use layout::Layout;

/// Result of classifying a source path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Layout the path was recognised as
    pub layout: Layout,
    /// Folder the compiled file is written to
    pub output_dir: PathBuf,
    /// Sub-folders between the `src` marker and the file itself
    pub relative_dir: PathBuf,
}

/// Classifies `path` and computes its output folder
///
/// Layouts are tried in the order of [`Layout::ALL`] and the first one that
/// matches wins. `None` means the path belongs to neither layout, which is
/// not an error: callers are expected to skip the file.
///
/// # Examples
/// ```
/// use asset_compile::resolver::{resolve, Layout};
/// use std::path::Path;
///
/// let resolution = resolve("/var/www/Core/sites/admin-cabinet/assets/js/src/forms/Edit.js").unwrap();
/// assert_eq!(resolution.layout, Layout::CoreAdminCabinet);
/// assert_eq!(
///     resolution.output_dir,
///     Path::new("/var/www/Core/sites/admin-cabinet/assets/js/pbx/forms")
/// );
///
/// assert!(resolve("/tmp/foo.js").is_none());
/// ```
pub fn resolve<P: AsRef<Path>>(path: P) -> Option<Resolution> {
    let components: Vec<Component<'_>> = path.as_ref().components().collect();

    let resolution = Layout::ALL
        .iter()
        .find_map(|layout| layout.resolve(&components));

    match &resolution {
        Some(r) => trace!(
            "{} matched the {} layout, output folder {}",
            path.as_ref().display(),
            r.layout,
            r.output_dir.display()
        ),
        None => trace!("{} matched no layout", path.as_ref().display()),
    }

    resolution
}
