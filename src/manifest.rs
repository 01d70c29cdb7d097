//! Fixed artifact tables. Every size, filename and color the generator uses
//! lives here.

use image::Rgba;

/// Directory (relative to the working directory) that receives all artifacts.
pub const OUTPUT_DIR: &str = "frame_icons";

/// Standalone PNGs, written in this order.
pub const PNG_TARGETS: &[(u32, &str)] = &[
    (32, "32x32.png"),
    (128, "128x128.png"),
    (256, "128x128@2x.png"),
];

pub const ICO_FILE: &str = "icon.ico";
pub const ICO_SIZES: &[u32] = &[16, 24, 32, 48, 64, 128, 256];

pub const ICNS_FILE: &str = "icon.icns";
pub const ICNS_SIZES: &[u32] = &[16, 32, 64, 128, 256, 512, 1024];

/// Film-strip body (`#4F46E5`).
pub const BODY_COLOR: Rgba<u8> = Rgba([0x4F, 0x46, 0xE5, 0xFF]);
pub const HOLE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0xFF]);
pub const FRAME_COLOR: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
pub const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 30]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Png(u32),
    Ico(&'static [u32]),
    Icns(&'static [u32]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub kind: ArtifactKind,
}

impl Artifact {
    /// Pixel sizes embedded in this artifact.
    pub fn sizes(&self) -> Vec<u32> {
        match self.kind {
            ArtifactKind::Png(size) => vec![size],
            ArtifactKind::Ico(sizes) | ArtifactKind::Icns(sizes) => sizes.to_vec(),
        }
    }

    /// Expected `(width, height)` of every embedded image; all square.
    pub fn dimensions(&self) -> Vec<(u32, u32)> {
        self.sizes().into_iter().map(|size| (size, size)).collect()
    }
}

/// All artifacts in write order: PNGs, then the ICO, then the ICNS.
pub fn artifacts() -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = PNG_TARGETS
        .iter()
        .map(|&(size, file_name)| Artifact {
            file_name,
            kind: ArtifactKind::Png(size),
        })
        .collect();

    artifacts.push(Artifact {
        file_name: ICO_FILE,
        kind: ArtifactKind::Ico(ICO_SIZES),
    });
    artifacts.push(Artifact {
        file_name: ICNS_FILE,
        kind: ArtifactKind::Icns(ICNS_SIZES),
    });

    artifacts
}
