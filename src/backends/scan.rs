//! File scanning backend
//!
//! Uses walkdir for the recursive part. Both collectors take the running
//! [`ExportSet`] and hand it back with their files appended.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::file_reader::read_included;
use crate::core::model::{ExportError, ExportSet};
use crate::core::paths::make_relative;
use crate::core::policy::InclusionPolicy;

/// Collect the allow-listed files sitting directly in the project root.
///
/// Names are visited in sorted order. Only regular files (or symlinks to
/// them) are taken.
pub fn collect_root_files(
    root: &Path,
    policy: &InclusionPolicy,
    mut set: ExportSet,
) -> Result<ExportSet, ExportError> {
    let list_err = |source| ExportError::ListRoot {
        path: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        names.push(entry.file_name());
    }
    names.sort();

    for name in names {
        let Some(name) = name.to_str() else {
            continue;
        };
        if !policy.is_root_file(name) {
            continue;
        }
        let path = root.join(name);
        if !path.is_file() {
            debug!(path = name, "skipping non-file root entry");
            continue;
        }
        set.push(read_included(&path, name.to_string()));
    }

    Ok(set)
}

/// Walk every allow-listed directory under the root, in policy order.
///
/// Missing directories are skipped. Entries that cannot be listed are
/// logged and skipped.
pub fn walk_dirs(root: &Path, policy: &InclusionPolicy, mut set: ExportSet) -> ExportSet {
    for dir in policy.dirs {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            debug!(dir = *dir, "directory not present, skipping");
            continue;
        }

        let walker = WalkDir::new(&dir_path)
            .min_depth(1)
            .sort_by(files_then_dirs);

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if is_directory(&entry) {
                continue;
            }

            if !policy.has_included_extension(entry.file_name()) {
                continue;
            }

            let relative = match make_relative(entry.path(), root) {
                Some(r) => r,
                None => continue,
            };
            set.push(read_included(entry.path(), relative));
        }
    }

    set
}

/// Directory listing order: a directory's files come before its
/// subdirectories, each group sorted by name.
fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_directory(a)
        .cmp(&is_directory(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Real directories and symlinks pointing at one (the latter are not followed)
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
