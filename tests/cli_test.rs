use std::fs;
use std::process::{Command, Output};

fn urlqr(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_urlqr"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run urlqr")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn no_flags_prints_usage() {
    let out = urlqr(&[]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Examples:"));
}

#[test]
fn missing_url_is_usage_error() {
    let out = urlqr(&["-nodisplay"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("URL is required"));
}

#[test]
fn invalid_flags_exit_with_usage_code() {
    let cases: &[&[&str]] = &[
        &["-u", "https://example.com", "-s", "99"],
        &["-u", "https://example.com", "-s", "4097"],
        &["-u", "https://example.com", "-l", "X"],
        &["-u", "https://example.com", "-f", "gif"],
        &["-u", "https://example.com", "-s", "many"],
        &["-u", "https://example.com", "--bogus"],
    ];
    for args in cases {
        let out = urlqr(args);
        assert_eq!(out.status.code(), Some(2), "args: {:?}", args);
    }
}

#[test]
fn overlong_url_is_rejected() {
    let url = format!("https://example.com/{}", "a".repeat(2048));
    let out = urlqr(&["-u", &url]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn writes_svg_with_explicit_name() {
    let dir = tempfile::tempdir().unwrap();
    let out = urlqr(&[
        "-u",
        "https://www.example.com",
        "-f",
        "svg",
        "-l",
        "H",
        "-d",
        dir.path().to_str().unwrap(),
        "-o",
        "example",
        "-nodisplay",
    ]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));

    let path = dir.path().join("example.svg");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), format!("QR code saved as: {}", path.display()));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.matches("<rect").count() > 0);
}

#[test]
fn writes_png_at_requested_size() {
    let dir = tempfile::tempdir().unwrap();
    let out = urlqr(&[
        "-u",
        "https://www.example.com",
        "-s",
        "512",
        "-d",
        dir.path().to_str().unwrap(),
        "-nodisplay",
    ]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr(&out));

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().path()).collect();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("qrcode"));
    assert!(name.ends_with("https_www_example_com.png"));

    let img = image::open(&entries[0]).unwrap();
    assert_eq!((img.width(), img.height()), (512, 512));
}

#[test]
fn preview_is_printed_unless_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path().to_str().unwrap();

    let shown = urlqr(&["-u", "https://example.com", "-d", d, "-o", "a"]);
    assert_eq!(shown.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&shown.stdout);
    assert!(stdout.contains('█'));

    let hidden = urlqr(&["-u", "https://example.com", "-d", d, "-o", "b", "-nodisplay"]);
    assert_eq!(hidden.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&hidden.stdout);
    assert!(!stdout.contains('█'));
}

#[test]
fn data_too_long_for_level_is_general_failure() {
    let dir = tempfile::tempdir().unwrap();
    let url = "a".repeat(2048);
    let out = urlqr(&["-u", &url, "-l", "H", "-d", dir.path().to_str().unwrap(), "-nodisplay"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("Error:"));
}
