use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

fn png_size(bytes: &[u8]) -> (u32, u32) {
    let decoder = png::Decoder::new(bytes);
    let reader = decoder.read_info().expect("png header");
    let info = reader.info();
    (info.width, info.height)
}

#[test]
fn cli_renders_chip_png_smoke() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("chip.png");

    let exe = assert_cmd::cargo_bin!("cryoviz-cli");
    Command::new(exe)
        .args([
            "chip",
            "--select",
            "qubitArray",
            "--format",
            "png",
            "--scale",
            "2",
            "--out",
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
    assert_eq!(png_size(&bytes), (1200, 1040));
}

#[test]
fn cli_renders_png_with_default_out_path() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let exe = assert_cmd::cargo_bin!("cryoviz-cli");
    Command::new(exe)
        .current_dir(tmp.path())
        .args(["chart", "pie", "--format", "png"])
        .assert()
        .success();

    let bytes = fs::read(tmp.path().join("chart-pie.png")).expect("read png");
    assert_eq!(png_size(&bytes), (300, 300));
}

#[test]
fn cli_renders_jpg_and_pdf() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let jpg = tmp.path().join("bars.jpg");
    let pdf = tmp.path().join("bars.pdf");

    let exe = assert_cmd::cargo_bin!("cryoviz-cli");
    Command::new(exe)
        .args([
            "chart",
            "category",
            "--format",
            "jpg",
            "--background",
            "#0f1115",
            "--out",
            jpg.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();
    assert!(fs::read(&jpg).expect("read jpg").starts_with(&[0xff, 0xd8]));

    let exe = assert_cmd::cargo_bin!("cryoviz-cli");
    Command::new(exe)
        .args([
            "chart",
            "--format",
            "pdf",
            "--out",
            pdf.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();
    assert!(fs::read(&pdf).expect("read pdf").starts_with(b"%PDF-"));
}
