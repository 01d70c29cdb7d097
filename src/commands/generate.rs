use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbaImage;

use crate::encode;
use crate::manifest::{self, Artifact, ArtifactKind};
use crate::render::render;

/// A file written by [`write_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub hash: String,
}

pub fn run(out_dir: &Path, quiet: bool) -> Result<()> {
    let written = write_all_with(out_dir, |file| {
        if !quiet {
            println!(
                "{} Generated {} {}",
                "✓".green(),
                file.path.display(),
                short_hash(&file.hash).dimmed()
            );
        }
    })?;

    if !quiet {
        println!(
            "\n{} Icon set complete: {} files in {}",
            "✓".green(),
            written.len(),
            out_dir.display()
        );
    }
    Ok(())
}

/// Renders and writes every manifest artifact into `out_dir`, creating the
/// directory first. Existing files are overwritten.
pub fn write_all(out_dir: &Path) -> Result<Vec<Written>> {
    write_all_with(out_dir, |_| {})
}

fn write_all_with(out_dir: &Path, mut on_written: impl FnMut(&Written)) -> Result<Vec<Written>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();
    for artifact in manifest::artifacts() {
        let bytes = encode_artifact(&artifact)?;
        let path = out_dir.join(artifact.file_name);
        std::fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        let file = Written {
            path,
            hash: blake3::hash(&bytes).to_hex().to_string(),
        };
        on_written(&file);
        written.push(file);
    }

    Ok(written)
}

/// Renders every size of `artifact` from scratch and encodes the result.
pub fn encode_artifact(artifact: &Artifact) -> Result<Vec<u8>> {
    let bytes = match artifact.kind {
        ArtifactKind::Png(size) => encode::png(&render(size)?),
        ArtifactKind::Ico(sizes) => encode::ico(&render_all(sizes)?),
        ArtifactKind::Icns(sizes) => encode::icns(&render_all(sizes)?),
    };
    bytes.with_context(|| format!("Failed to build {}", artifact.file_name))
}

fn render_all(sizes: &[u32]) -> Result<Vec<RgbaImage>> {
    sizes.iter().map(|&size| render(size)).collect()
}

fn short_hash(hash: &str) -> &str {
    &hash[..hash.len().min(12)]
}
