use assert_cmd::Command;
use image::{Rgba, RgbaImage};
use predicates::str::contains;
use std::path::Path;
use tempfile::TempDir;

fn cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stool").unwrap();
    cmd.env_remove("STOOL_BIO_TEMPLATE")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

fn write_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(path)
        .unwrap();
}

const RESUME: &str = r#"
skills = "Mathematics, Translation"

[personal]
full_name = "Ada Lovelace"
email = "ada@example.com"

[[experience]]
company = "Analytical Engines"
position = "Analyst"
"#;

#[test]
fn bio_renders_fields() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["bio", "--template", "minimal", "--name", "Ada", "--role", "Engineer"])
        .assert()
        .success()
        .stdout(contains("Ada • Engineer"))
        .stdout(contains("instagram"))
        .stdout(contains("tiktok"));
}

#[test]
fn bio_defaults_to_professional() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["bio", "--name", "Ada", "--role", "Engineer", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"template_id\": \"professional\""))
        .stdout(contains("Ada | Engineer 💼"));
}

#[test]
fn bio_template_from_environment() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .env("STOOL_BIO_TEMPLATE", "student")
        .args(["bio", "--name", "Ada"])
        .assert()
        .success()
        .stdout(contains("📚 Ada"));
}

#[test]
fn bio_unknown_template_lists_available() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["bio", "--template", "pirate", "--name", "Ada"])
        .assert()
        .failure()
        .stderr(contains("pirate"))
        .stderr(contains("Available templates"));
}

#[test]
fn templates_lists_builtins() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("templates")
        .assert()
        .success()
        .stdout(contains("professional"))
        .stdout(contains("creative"))
        .stdout(contains("student"))
        .stdout(contains("{{contact}}"))
        .stdout(contains("Contact/Links"));
}

#[test]
fn presets_lists_sizes() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("presets")
        .assert()
        .success()
        .stdout(contains("Instagram Post"))
        .stdout(contains("1584"));
}

#[test]
fn resize_keeps_aspect_ratio() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.png");
    write_png(&input, 200, 100, [10, 20, 30, 255]);

    cmd(&dir)
        .arg("resize")
        .arg(&input)
        .args(["--width", "50"])
        .assert()
        .success()
        .stdout(contains("50x25"));

    let written = image::open(dir.path().join("resized-photo.png")).unwrap();
    assert_eq!((written.width(), written.height()), (50, 25));
}

#[test]
fn resize_with_preset_to_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.png");
    let output = dir.path().join("banner.png");
    write_png(&input, 20, 10, [10, 20, 30, 255]);

    cmd(&dir)
        .arg("resize")
        .arg(&input)
        .args(["--preset", "Facebook Cover", "-o"])
        .arg(&output)
        .assert()
        .success();

    let written = image::open(&output).unwrap();
    assert_eq!((written.width(), written.height()), (851, 315));
}

#[test]
fn resize_ignores_non_image() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("notes.txt");
    std::fs::write(&input, "not an image").unwrap();

    cmd(&dir)
        .arg("resize")
        .arg(&input)
        .args(["--width", "10"])
        .assert()
        .success()
        .stdout(contains("Nothing written"));
    assert!(!dir.path().join("resized-notes.txt").exists());
}

#[test]
fn resize_unknown_preset_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.png");
    write_png(&input, 4, 4, [10, 20, 30, 255]);

    cmd(&dir)
        .arg("resize")
        .arg(&input)
        .args(["--preset", "Myspace Banner"])
        .assert()
        .failure()
        .stderr(contains("Unknown preset"));
}

#[test]
fn resize_rejects_oversized_target() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.png");
    write_png(&input, 20, 10, [10, 20, 30, 255]);

    cmd(&dir)
        .arg("resize")
        .arg(&input)
        .args(["--width", "200000"])
        .assert()
        .failure()
        .stderr(contains("too large"));
    assert!(!dir.path().join("resized-photo.png").exists());
}

#[test]
fn compare_writes_composite() {
    let dir = TempDir::new().unwrap();
    let before = dir.path().join("before.png");
    let after = dir.path().join("after.png");
    let output = dir.path().join("cmp.png");
    write_png(&before, 10, 10, [255, 0, 0, 255]);
    write_png(&after, 10, 10, [0, 0, 255, 255]);

    cmd(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&after)
        .args(["--position", "30", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("30%"));

    let written = image::open(&output).unwrap().to_rgba8();
    assert_eq!(*written.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
    assert_eq!(*written.get_pixel(9, 0), Rgba([0, 0, 255, 255]));
}

#[test]
fn compare_rejects_bad_orientation() {
    let dir = TempDir::new().unwrap();
    let before = dir.path().join("before.png");
    let after = dir.path().join("after.png");
    write_png(&before, 2, 2, [255, 0, 0, 255]);
    write_png(&after, 2, 2, [0, 0, 255, 255]);

    cmd(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&after)
        .args(["--orientation", "diagonal", "-o"])
        .arg(dir.path().join("cmp.png"))
        .assert()
        .failure()
        .stderr(contains("diagonal"));
}

#[test]
fn compare_rejects_oversized_frame() {
    let dir = TempDir::new().unwrap();
    let before = dir.path().join("before.png");
    let after = dir.path().join("after.png");
    write_png(&before, 2, 2, [255, 0, 0, 255]);
    write_png(&after, 2, 2, [0, 0, 255, 255]);

    cmd(&dir)
        .arg("compare")
        .arg(&before)
        .arg(&after)
        .args(["--width", "4294967295", "--height", "4294967295", "-o"])
        .arg(dir.path().join("cmp.png"))
        .assert()
        .failure()
        .stderr(contains("too large"));
}

#[test]
fn resume_init_prints_form() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["resume", "init"])
        .assert()
        .success()
        .stdout(contains("[[education]]"))
        .stdout(contains("[[experience]]"));
}

#[test]
fn resume_preview_renders_sections() {
    let dir = TempDir::new().unwrap();
    let form = dir.path().join("resume.toml");
    std::fs::write(&form, RESUME).unwrap();

    cmd(&dir)
        .args(["resume", "preview"])
        .arg(&form)
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("## Experience"))
        .stdout(contains("Mathematics · Translation"));

    cmd(&dir)
        .args(["resume", "preview", "--template", "classic"])
        .arg(&form)
        .assert()
        .success()
        .stdout(contains("SKILLS\n======"));
}

#[test]
fn resume_pdf_is_not_implemented() {
    let dir = TempDir::new().unwrap();
    let form = dir.path().join("resume.toml");
    std::fs::write(&form, RESUME).unwrap();

    cmd(&dir)
        .args(["resume", "pdf"])
        .arg(&form)
        .assert()
        .failure()
        .stderr(contains("not available yet"));
    assert!(!dir.path().join("resume.pdf").exists());
}

#[test]
fn config_set_and_show() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args([
            "config",
            "set",
            "--bio-template",
            "minimal",
            "--aspect-lock",
            "false",
        ])
        .assert()
        .success()
        .stdout(contains("Configuration saved successfully."));
    assert!(dir.path().join("config.toml").exists());

    cmd(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("Template: minimal"))
        .stdout(contains("Aspect lock: off"));

    cmd(&dir)
        .args(["bio", "--name", "Ada", "--role", "Engineer"])
        .assert()
        .success()
        .stdout(contains("Ada • Engineer"));
}

#[test]
fn config_set_without_values_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["config", "set"])
        .assert()
        .failure()
        .stderr(contains("No configuration values provided"));
}
