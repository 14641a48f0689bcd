//! End-to-end pipeline tests through the library API:
//! scan → write → re-read the manifest from disk.

use img_manifest::manifest::{MANIFEST_NAME, Manifest};
use img_manifest::scan;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn seed(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        fs::write(tmp.path().join(name), b"").unwrap();
    }
    tmp
}

fn build(dir: &Path) -> (Manifest, std::path::PathBuf) {
    let files = scan::scan(dir).unwrap();
    let manifest = Manifest::new(files);
    let path = manifest.write(dir).unwrap();
    (manifest, path)
}

#[test]
fn mixed_directory_produces_ordered_manifest() {
    let tmp = seed(&["img2.png", "img10.webp", "img1.jpg", "cover.png", "IMG3.GIF"]);
    let (manifest, path) = build(tmp.path());

    assert_eq!(path, tmp.path().join(MANIFEST_NAME));
    assert_eq!(manifest.len(), 4);

    let on_disk: Vec<String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, ["img1.jpg", "img2.png", "IMG3.GIF", "img10.webp"]);
}

#[test]
fn rerun_on_unchanged_directory_is_byte_identical() {
    let tmp = seed(&["img1.jpg", "img2.png", "imgcover.webp"]);

    let (_, path) = build(tmp.path());
    let first = fs::read(&path).unwrap();

    // Second run sees the manifest it wrote (.json is not an image
    // extension) and must produce the same bytes
    let (manifest, path) = build(tmp.path());
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    assert_eq!(manifest.len(), 3);
}

#[test]
fn non_matching_directory_produces_empty_array() {
    let tmp = seed(&["cover.png", "notes.txt"]);
    let (manifest, path) = build(tmp.path());

    assert!(manifest.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn missing_directory_fails_before_anything_is_written() {
    let tmp = seed(&[]);
    let gone = tmp.path().join("gone");

    let err = scan::scan(&gone).unwrap_err();
    assert!(err.to_string().contains("gone"));
    assert!(!gone.exists());
}
