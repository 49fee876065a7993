use std::fmt;
use std::path::Component;

use crate::constants::{
    ADMIN_CABINET_MARKERS, CORE_MARKER, EXTENSION_SOURCE_MARKERS, EXTENSIONS_MARKER, JS_SEGMENT,
    PBX_SEGMENT, SRC_SEGMENT,
};

use super::Resolution;
use super::segments::{find_sequence, join};

/// Project layouts whose sources can be compiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `.../Core/.../admin-cabinet/assets/.../js/src/<rel>`, compiled into
    /// the sibling `js/pbx/<rel>` tree
    CoreAdminCabinet,
    /// `.../Extensions/.../public/assets/js/src/<rel>`, compiled into the
    /// folder that holds `src`
    ExtensionPublic,
}

impl Layout {
    /// Every layout, in the order they are tried
    pub const ALL: [Layout; 2] = [Layout::CoreAdminCabinet, Layout::ExtensionPublic];

    /// Short name used in log messages
    pub fn label(&self) -> &'static str {
        match self {
            Layout::CoreAdminCabinet => "Core",
            Layout::ExtensionPublic => "Extensions",
        }
    }

    pub(super) fn resolve(&self, components: &[Component<'_>]) -> Option<Resolution> {
        let src_index = match self {
            Layout::CoreAdminCabinet => core_src_index(components)?,
            Layout::ExtensionPublic => extension_src_index(components)?,
        };

        // The last component is the file, so it has to come after `src`
        let file_index = components.len().checked_sub(1)?;
        if file_index <= src_index {
            return None;
        }

        let relative = &components[src_index + 1..file_index];
        let output_dir = match self {
            Layout::CoreAdminCabinet => {
                let mut dir = join(&components[..src_index]);
                dir.push(PBX_SEGMENT);
                dir.extend(relative);
                dir
            }
            Layout::ExtensionPublic => join(&components[..src_index]),
        };

        Some(Resolution {
            layout: *self,
            output_dir,
            relative_dir: join(relative),
        })
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn core_src_index(components: &[Component<'_>]) -> Option<usize> {
    let core = find_sequence(components, 0, &[CORE_MARKER])?;
    let cabinet = find_sequence(components, core + 1, &ADMIN_CABINET_MARKERS)?;
    let js = find_sequence(
        components,
        cabinet + ADMIN_CABINET_MARKERS.len(),
        &[JS_SEGMENT, SRC_SEGMENT],
    )?;
    Some(js + 1)
}

fn extension_src_index(components: &[Component<'_>]) -> Option<usize> {
    let extensions = find_sequence(components, 0, &[EXTENSIONS_MARKER])?;
    let public = find_sequence(components, extensions + 1, &EXTENSION_SOURCE_MARKERS)?;
    Some(public + EXTENSION_SOURCE_MARKERS.len() - 1)
}
