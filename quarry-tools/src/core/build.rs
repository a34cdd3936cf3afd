// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/quarry/blob/main/licenses/COPYRIGHT.md

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use bytesize::ByteSize;

use crate::{core::manifest::project::BuildSource, utils::format_file_size};

/// Default directory for build sources, relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "app";
/// Default directory for assembled outputs, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "build";

#[derive(Clone, Debug)]
pub struct BuildConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_SOURCE_DIR.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
        }
    }
}

/// Errors which can occur while assembling build outputs.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing source: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("source {} is a directory (directory targets end with '/')", .0.display())]
    ExpectedFile(PathBuf),
    #[error("directory target {0:?} requires a directory source")]
    ExpectedDirectory(String),
    #[error("directory target {0:?} takes a single source directory")]
    DirectoryConcat(String),
}

/// Assembles the build outputs declared by the manifest.
///
/// Targets ending in `/` copy a source directory recursively; other targets copy a single
/// source file or concatenate a sequence of them, in listed order. Returns the paths written.
pub fn build_targets(
    root: impl AsRef<Path>,
    targets: &BTreeMap<String, BuildSource>,
    config: &BuildConfig,
) -> Result<Vec<PathBuf>, BuildError> {
    let source_root = root.as_ref().join(&config.source_dir);
    let output_root = root.as_ref().join(&config.output_dir);
    fs::create_dir_all(&output_root)?;

    let mut written = Vec::new();
    // targets iterate in sorted order, keeping repeated runs identical
    for (target, source) in targets {
        let output = output_root.join(target.trim_end_matches('/'));
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }

        if target.ends_with('/') {
            let BuildSource::Single(dir) = source else {
                return Err(BuildError::DirectoryConcat(target.clone()));
            };
            let source_dir = source_root.join(dir.trim_end_matches('/'));
            if !source_dir.is_dir() {
                return Err(BuildError::ExpectedDirectory(target.clone()));
            }
            let count = copy_dir(&source_dir, &output)?;
            info!(@grey, "copied {target} ({count} files)");
        } else {
            let len = match source {
                BuildSource::Single(file) => copy_file(&source_root.join(file), &output)?,
                BuildSource::Concat(files) => {
                    let sources: Vec<_> = files.iter().map(|f| source_root.join(f)).collect();
                    concat_files(&sources, &output)?
                }
            };
            let len = format_file_size(ByteSize::b(len), ByteSize::kb(512), ByteSize::mb(4));
            info!(@grey, "built {target}: {len}");
        }
        written.push(output);
    }
    Ok(written)
}

fn copy_file(source: &Path, output: &Path) -> Result<u64, BuildError> {
    if !source.exists() {
        return Err(BuildError::MissingSource(source.to_path_buf()));
    }
    if source.is_dir() {
        return Err(BuildError::ExpectedFile(source.to_path_buf()));
    }
    Ok(fs::copy(source, output)?)
}

/// Concatenates `sources` into `output`, joined with a newline.
fn concat_files(sources: &[PathBuf], output: &Path) -> Result<u64, BuildError> {
    let mut contents = Vec::new();
    for source in sources {
        if !source.exists() {
            return Err(BuildError::MissingSource(source.clone()));
        }
        if source.is_dir() {
            return Err(BuildError::ExpectedFile(source.clone()));
        }
        if !contents.is_empty() {
            contents.push(b'\n');
        }
        contents.extend(fs::read(source)?);
    }
    fs::write(output, &contents)?;
    Ok(contents.len() as u64)
}

fn copy_dir(source: &Path, output: &Path) -> Result<usize, BuildError> {
    fs::create_dir_all(output)?;
    let mut count = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let dest = output.join(entry.file_name());
        if path.is_dir() {
            count += copy_dir(&path, &dest)?;
        } else {
            fs::copy(&path, &dest)?;
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_map(entries: &[(&str, BuildSource)]) -> BTreeMap<String, BuildSource> {
        entries
            .iter()
            .map(|(target, source)| (target.to_string(), source.clone()))
            .collect()
    }

    fn write_source(root: &Path, rel: &str, contents: &str) {
        let path = root.join(DEFAULT_SOURCE_DIR).join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn copies_and_concatenates() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_source(root, "index.html", "<html></html>");
        write_source(root, "javascripts/app.js", "let app;");
        write_source(root, "javascripts/extra.js", "let extra;");

        let targets = target_map(&[
            ("index.html", BuildSource::Single("index.html".to_string())),
            (
                "app.js",
                BuildSource::Concat(vec![
                    "javascripts/app.js".to_string(),
                    "javascripts/extra.js".to_string(),
                ]),
            ),
        ]);
        let written = build_targets(root, &targets, &BuildConfig::default()).unwrap();
        assert_eq!(written.len(), 2);

        let output = root.join(DEFAULT_OUTPUT_DIR);
        let index = fs::read_to_string(output.join("index.html")).unwrap();
        assert_eq!(index, "<html></html>");
        let app = fs::read_to_string(output.join("app.js")).unwrap();
        assert_eq!(app, "let app;\nlet extra;");
    }

    #[test]
    fn copies_directories_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_source(root, "images/logo.svg", "<svg/>");
        write_source(root, "images/icons/ok.svg", "<svg/>");

        let targets = target_map(&[("images/", BuildSource::Single("images/".to_string()))]);
        build_targets(root, &targets, &BuildConfig::default()).unwrap();

        let output = root.join(DEFAULT_OUTPUT_DIR);
        assert!(output.join("images/logo.svg").is_file());
        assert!(output.join("images/icons/ok.svg").is_file());
    }

    #[test]
    fn nested_targets_create_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_source(root, "app.css", "body {}");

        let targets = target_map(&[(
            "stylesheets/app.css",
            BuildSource::Single("app.css".to_string()),
        )]);
        build_targets(root, &targets, &BuildConfig::default()).unwrap();
        assert!(root
            .join(DEFAULT_OUTPUT_DIR)
            .join("stylesheets/app.css")
            .is_file());
    }

    #[test]
    fn build_errors() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_source(root, "present.js", "ok");

        let missing = target_map(&[("out.js", BuildSource::Single("absent.js".to_string()))]);
        assert!(matches!(
            build_targets(root, &missing, &BuildConfig::default()),
            Err(BuildError::MissingSource(_)),
        ));

        let dir_concat = target_map(&[(
            "images/",
            BuildSource::Concat(vec!["present.js".to_string()]),
        )]);
        assert!(matches!(
            build_targets(root, &dir_concat, &BuildConfig::default()),
            Err(BuildError::DirectoryConcat(_)),
        ));

        let not_a_dir = target_map(&[("images/", BuildSource::Single("present.js".to_string()))]);
        assert!(matches!(
            build_targets(root, &not_a_dir, &BuildConfig::default()),
            Err(BuildError::ExpectedDirectory(_)),
        ));
    }

    #[test]
    fn custom_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("web")).unwrap();
        fs::write(root.join("web/index.html"), "<html></html>").unwrap();

        let config = BuildConfig {
            source_dir: "web".into(),
            output_dir: "dist".into(),
        };
        let targets = target_map(&[("index.html", BuildSource::Single("index.html".to_string()))]);
        build_targets(root, &targets, &config).unwrap();
        assert!(root.join("dist/index.html").is_file());
    }
}
