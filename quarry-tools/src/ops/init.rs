// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

//! Initialize a project manifest in an existing directory.

use std::path::Path;

use eyre::bail;

use crate::{core::manifest, utils::create_dir_if_dne};

pub fn init(path: impl AsRef<Path>, force: bool) -> eyre::Result<()> {
    let root = path.as_ref();
    create_dir_if_dne(root)?;

    let manifest_path = root.join(manifest::FILENAME);
    if force {
        copy_from_template!("templates/project" -> root, "Quarry.toml");
    } else {
        if manifest_path.exists() {
            bail!(
                "{} already exists (use --force to overwrite)",
                manifest_path.display(),
            );
        }
        copy_from_template_if_dne!("templates/project" -> root, "Quarry.toml");
    }

    greyln!("wrote {}", manifest_path.display());
    Ok(())
}
