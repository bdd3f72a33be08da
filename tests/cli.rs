use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
];

fn system_font() -> Option<PathBuf> {
    FONT_CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file())
}

const DATASET: &str = r#"{
  "labels": ["2024-03-01T00:00:00Z", "2024-03-02T00:00:00Z", "2024-03-03T00:00:00Z"],
  "series": [
    { "name": "Uploaded", "data": [1048576, 3145728, 2097152] },
    { "name": "Deleted", "data": [0, 524288, 1048576] }
  ],
  "y_axis_formatter": "filesize"
}"#;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("linechart"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn empty_series_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.json");
    fs::write(&input, r#"{"labels": ["2024-03-01T00:00:00Z"], "series": []}"#).unwrap();

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("render").arg("--input").arg(&input);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no series"));
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("render").arg("--input").arg(dir.path().join("nope.json"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading dataset"));
}

#[test]
fn bad_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    let config = dir.path().join("opts.json");
    fs::write(&input, DATASET).unwrap();
    fs::write(&config, r#"{"scale": 0}"#).unwrap();

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--config")
        .arg(&config);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("scale must be at least 1"));
}

#[test]
fn renders_png_file() {
    let Some(font) = system_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    let out = dir.path().join("chart.png");
    fs::write(&input, DATASET).unwrap();

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--font")
        .arg(&font)
        .args(["--width", "300", "--height", "200", "--scale", "1"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote 300x200 chart"));

    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (300, 200));
}

#[test]
fn prints_img_tag_without_out() {
    let Some(font) = system_font() else {
        eprintln!("skipping: no system font available");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, DATASET).unwrap();

    let mut cmd = Command::cargo_bin("linechart").unwrap();
    cmd.arg("render")
        .arg("--input")
        .arg(&input)
        .arg("--font")
        .arg(&font)
        .args(["--width", "300", "--height", "200"]);
    cmd.assert().success().stdout(predicate::str::starts_with(
        "<img width=\"300\" height=\"200\" src=\"data:image/png;base64,iVBORw0KGgo",
    ));
}
