use std::collections::BTreeSet;
use std::path::Path;

use frame_icons::commands::generate;
use frame_icons::encode;
use frame_icons::manifest::{ICNS_FILE, ICNS_SIZES, ICO_FILE, ICO_SIZES, OUTPUT_DIR, PNG_TARGETS};

fn file_names(dir: &Path) -> BTreeSet<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect()
}

#[test]
fn writes_exactly_five_files() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join(OUTPUT_DIR);

    let written = generate::write_all(&out_dir).unwrap();
    assert_eq!(written.len(), 5);

    let expected: BTreeSet<String> = [
        "32x32.png",
        "128x128.png",
        "128x128@2x.png",
        "icon.ico",
        "icon.icns",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(file_names(&out_dir), expected);
}

#[test]
fn writes_in_manifest_order() {
    let dir = tempfile::tempdir().unwrap();
    let written = generate::write_all(dir.path()).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        ["32x32.png", "128x128.png", "128x128@2x.png", "icon.ico", "icon.icns"]
    );
}

#[test]
fn pngs_have_manifest_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    generate::write_all(dir.path()).unwrap();

    for &(size, name) in PNG_TARGETS {
        let img = image::open(dir.path().join(name)).unwrap();
        assert_eq!((img.width(), img.height()), (size, size), "{name}");
        assert!(img.color().has_alpha(), "{name}");
    }
}

#[test]
fn containers_are_complete() {
    let dir = tempfile::tempdir().unwrap();
    generate::write_all(dir.path()).unwrap();

    let ico = std::fs::read(dir.path().join(ICO_FILE)).unwrap();
    assert_eq!(encode::ico_sizes(&ico).unwrap(), ICO_SIZES);

    let icns = std::fs::read(dir.path().join(ICNS_FILE)).unwrap();
    assert_eq!(encode::icns_sizes(&icns).unwrap(), ICNS_SIZES);
}

#[test]
fn rerun_overwrites_with_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join(OUTPUT_DIR);

    let first = generate::write_all(&out_dir).unwrap();
    std::fs::write(out_dir.join("32x32.png"), b"scribbled").unwrap();
    let second = generate::write_all(&out_dir).unwrap();

    assert_eq!(first, second);
    assert_eq!(file_names(&out_dir).len(), 5);

    let png = std::fs::read(out_dir.join("32x32.png")).unwrap();
    assert_eq!(blake3::hash(&png).to_hex().to_string(), second[0].hash);
}

#[test]
fn creates_nested_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("a").join("b").join(OUTPUT_DIR);

    generate::write_all(&out_dir).unwrap();
    assert!(out_dir.join(ICNS_FILE).exists());
}

#[test]
fn fails_when_output_dir_is_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join(OUTPUT_DIR);
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = generate::write_all(&blocker).unwrap_err();
    assert!(
        err.to_string().contains("Failed to create"),
        "unexpected error: {err:#}"
    );
}
