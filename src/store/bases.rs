//! Base runtime registration and lookup
//!
//! A base is registered from a source directory containing `base.yaml`
//! and a `rootfs/` tree. Registration copies the rootfs into the store,
//! hashes it and writes back a manifest completed with the reference
//! and the rootfs hash.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::copy_dir_recursive;
use crate::config::{BASE_MANIFEST_FILE, BaseManifest};
use crate::domain::BaseRef;
use crate::error::{Result, StrataError};
use crate::hash;
use crate::path_utils::make_path_safe;

use super::StagedDir;

/// Rootfs subdirectory within a base entry
pub const ROOTFS_DIR: &str = "rootfs";

/// Get the store directory for a base reference
pub fn base_dir(reference: &BaseRef) -> Result<PathBuf> {
    Ok(super::bases_dir()?
        .join(make_path_safe(&reference.name))
        .join(make_path_safe(&reference.tag)))
}

/// Get the rootfs directory for a registered base
pub fn rootfs_dir(reference: &BaseRef) -> Result<PathBuf> {
    Ok(base_dir(reference)?.join(ROOTFS_DIR))
}

/// Get the manifest path for a registered base
pub fn manifest_path(reference: &BaseRef) -> Result<PathBuf> {
    Ok(base_dir(reference)?.join(BASE_MANIFEST_FILE))
}

/// Check whether a base is registered
pub fn is_registered(reference: &BaseRef) -> Result<bool> {
    Ok(manifest_path(reference)?.is_file())
}

/// Register a base from a source directory
///
/// The source directory must contain `base.yaml` and `rootfs/`.
/// Returns the completed manifest as stored.
pub fn add(reference: &BaseRef, source_dir: &Path) -> Result<BaseManifest> {
    if is_registered(reference)? {
        return Err(StrataError::BaseExists {
            reference: reference.to_string(),
        });
    }

    let source_manifest = source_dir.join(BASE_MANIFEST_FILE);
    if !source_manifest.is_file() {
        return Err(StrataError::BaseManifestInvalid {
            reference: reference.to_string(),
            message: format!("{} not found in {}", BASE_MANIFEST_FILE, source_dir.display()),
        });
    }

    let source_rootfs = source_dir.join(ROOTFS_DIR);
    if !source_rootfs.is_dir() {
        return Err(StrataError::BaseManifestInvalid {
            reference: reference.to_string(),
            message: format!("{}/ not found in {}", ROOTFS_DIR, source_dir.display()),
        });
    }

    let mut manifest = BaseManifest::from_file(&source_manifest, &reference.to_string())?;
    manifest.validate(&reference.to_string())?;

    let staged = StagedDir::new(base_dir(reference)?)?;
    let staged_rootfs = staged.path().join(ROOTFS_DIR);

    copy_dir_recursive(&source_rootfs, &staged_rootfs).map_err(|e| {
        StrataError::StoreOperationFailed {
            message: format!("failed to copy rootfs for {reference}: {e}"),
        }
    })?;

    manifest.name = reference.name.clone();
    manifest.tag = reference.tag.clone();
    manifest.id = hash::hash_tree(&staged_rootfs)?;
    manifest.save(&staged.path().join(BASE_MANIFEST_FILE))?;

    staged.commit()?;
    Ok(manifest)
}

/// Load a registered base's manifest
pub fn load(reference: &BaseRef) -> Result<BaseManifest> {
    if !is_registered(reference)? {
        return Err(StrataError::BaseNotFound {
            reference: reference.to_string(),
        });
    }

    BaseManifest::from_file(&manifest_path(reference)?, &reference.to_string())
}

/// List all registered bases, sorted by name then tag
pub fn list() -> Result<Vec<BaseManifest>> {
    let path = super::bases_dir()?;

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut bases = Vec::new();

    for name_entry in fs::read_dir(&path).map_err(|e| StrataError::StoreOperationFailed {
        message: format!("failed to read bases directory: {e}"),
    })? {
        let name_entry = name_entry.map_err(|e| StrataError::StoreOperationFailed {
            message: format!("failed to read entry: {e}"),
        })?;

        if !name_entry.path().is_dir() {
            continue;
        }

        let tag_entries = match fs::read_dir(name_entry.path()) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for tag_entry in tag_entries.flatten() {
            let manifest_file = tag_entry.path().join(BASE_MANIFEST_FILE);
            if !manifest_file.is_file() {
                continue;
            }

            let name = name_entry.file_name().to_string_lossy().to_string();
            let tag = tag_entry.file_name().to_string_lossy().to_string();
            match BaseManifest::from_file(&manifest_file, &format!("{name}:{tag}")) {
                Ok(manifest) => bases.push(manifest),
                Err(_) => continue, // Skip damaged entries
            }
        }
    }

    bases.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.tag.cmp(&b.tag)));

    Ok(bases)
}

/// Remove a registered base
pub fn remove(reference: &BaseRef) -> Result<()> {
    if !is_registered(reference)? {
        return Err(StrataError::BaseNotFound {
            reference: reference.to_string(),
        });
    }

    let dir = base_dir(reference)?;
    fs::remove_dir_all(&dir).map_err(|e| StrataError::StoreOperationFailed {
        message: format!("failed to remove base {reference}: {e}"),
    })?;

    // Drop the name directory once its last tag is gone
    if let Some(name_dir) = dir.parent() {
        if fs::read_dir(name_dir)
            .map(|mut d| d.next().is_none())
            .unwrap_or(false)
        {
            let _ = fs::remove_dir(name_dir);
        }
    }

    Ok(())
}
