use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::commands::generate::encode_artifact;
use crate::encode;
use crate::manifest::{self, Artifact, ArtifactKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Byte-identical to a fresh render.
    Current,
    /// Present and well-formed, but differs from a fresh render.
    Stale,
    Missing,
    /// Present but unreadable, or containing the wrong sizes.
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct Report {
    pub file_name: &'static str,
    pub status: Status,
}

pub fn run(out_dir: &Path) -> Result<()> {
    let reports = check_all(out_dir)?;

    let mut failures = 0;
    let mut stale = 0;
    for report in &reports {
        let path = out_dir.join(report.file_name);
        match &report.status {
            Status::Current => println!("{} {}", "✓".green(), path.display()),
            Status::Stale => {
                stale += 1;
                println!(
                    "{} {} differs from a fresh render",
                    "!".yellow(),
                    path.display()
                );
            }
            Status::Missing => {
                failures += 1;
                println!("{} {} is missing", "✗".red(), path.display());
            }
            Status::Invalid(reason) => {
                failures += 1;
                println!("{} {}: {}", "✗".red(), path.display(), reason);
            }
        }
    }

    if failures > 0 {
        bail!(
            "{} of {} icon files missing or invalid. Run `frame-icons generate`.",
            failures,
            reports.len()
        );
    }

    if stale == 0 {
        println!("{} Icon set is up to date.", "✓".green());
    } else {
        println!(
            "{} {} file(s) out of date. Run `frame-icons generate` to refresh.",
            "!".yellow(),
            stale
        );
    }

    Ok(())
}

/// Inspects every manifest artifact in `out_dir`, in write order.
pub fn check_all(out_dir: &Path) -> Result<Vec<Report>> {
    manifest::artifacts()
        .iter()
        .map(|artifact| {
            Ok(Report {
                file_name: artifact.file_name,
                status: check_artifact(out_dir, artifact)?,
            })
        })
        .collect()
}

fn check_artifact(out_dir: &Path, artifact: &Artifact) -> Result<Status> {
    let path = out_dir.join(artifact.file_name);
    if !path.exists() {
        return Ok(Status::Missing);
    }

    let bytes =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let found = match artifact.kind {
        ArtifactKind::Png(_) => image::load_from_memory(&bytes)
            .map(|img| vec![(img.width(), img.height())])
            .map_err(anyhow::Error::from),
        ArtifactKind::Ico(_) => encode::ico_dimensions(&bytes),
        ArtifactKind::Icns(_) => encode::icns_dimensions(&bytes),
    };
    let found = match found {
        Ok(sizes) => sizes,
        Err(e) => return Ok(Status::Invalid(format!("{e:#}"))),
    };

    let expected = artifact.dimensions();
    if found != expected {
        return Ok(Status::Invalid(format!(
            "expected dimensions {expected:?}, found {found:?}"
        )));
    }

    let fresh = blake3::hash(&encode_artifact(artifact)?);
    if fresh != blake3::hash(&bytes) {
        return Ok(Status::Stale);
    }

    Ok(Status::Current)
}
