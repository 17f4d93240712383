use std::fs;

use postport_engine::{convert_blog, ConvertError, ConvertSettings, ScanError, ScanPolicy};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const WELCOME: &str = "---\ntitle: Welcome\ndate: 2022-06-28 09:16:48\ntags: AWS, S3\n---\nHello\n\n{% asset_img pic.jpg alt text %}\n";
const PLAIN: &str = "---\ntitle: Plain\ndate: 2021-05-01\ntags: notes\n---\nJust text.\n";

fn init_logging() {
    postport_logging::initialize_for_tests();
}

#[test]
fn welcome_post_converts_end_to_end() {
    init_logging();
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("welcome.md"), WELCOME).unwrap();
    fs::create_dir(src.path().join("welcome")).unwrap();
    fs::write(src.path().join("welcome").join("pic.jpg"), "jpeg bytes").unwrap();

    let report = convert_blog(src.path(), out.path(), "test", &ConvertSettings::default()).unwrap();

    let dir = out.path().join("2022-06-28-welcome");
    assert_eq!(
        fs::read_to_string(dir.join("index.md")).unwrap(),
        "---\nslug: welcome\ntitle: Welcome\nauthors: [test]\ntags: [AWS, S3]\n---\nHello\n\n![pic](./pic.jpg)\n"
    );
    assert_eq!(fs::read_to_string(dir.join("pic.jpg")).unwrap(), "jpeg bytes");
    assert_eq!(report.converted(), 1);
    assert_eq!(report.discovered_images, 1);
}

#[test]
fn folder_qualified_shortcode_copies_the_image() {
    init_logging();
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        src.path().join("welcome.md"),
        "---\ntitle: Welcome\ndate: 2022-06-28\ntags: a\n---\n{% asset_img welcome/pic.jpg cap %}\n",
    )
    .unwrap();
    fs::create_dir(src.path().join("welcome")).unwrap();
    fs::write(src.path().join("welcome").join("pic.jpg"), "jpeg bytes").unwrap();

    let report = convert_blog(src.path(), out.path(), "me", &ConvertSettings::default()).unwrap();

    let dir = out.path().join("2022-06-28-welcome");
    let content = fs::read_to_string(dir.join("index.md")).unwrap();
    assert!(content.ends_with("---\n![pic](./pic.jpg)\n"));
    assert_eq!(fs::read_to_string(dir.join("pic.jpg")).unwrap(), "jpeg bytes");
    let exported = &report.export.documents[0];
    assert_eq!(exported.images.len(), 1);
    assert_eq!(exported.images[0].destination, dir.join("pic.jpg"));
    assert!(exported.unmatched_images.is_empty());
    assert_eq!(report.export.copied_images(), 1);
}

#[test]
fn post_without_shortcodes_copies_nothing() {
    init_logging();
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("plain.md"), PLAIN).unwrap();
    fs::create_dir(src.path().join("plain")).unwrap();
    fs::write(src.path().join("plain").join("stray.png"), "png").unwrap();

    let report = convert_blog(src.path(), out.path(), "me", &ConvertSettings::default()).unwrap();

    let dir = out.path().join("2021-05-01-plain");
    assert!(dir.join("index.md").exists());
    assert!(!dir.join("stray.png").exists());
    assert!(report.export.documents[0].images.is_empty());
}

#[test]
fn malformed_post_aborts_the_run_without_output() {
    init_logging();
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("welcome.md"), WELCOME).unwrap();
    fs::write(
        src.path().join("broken.md"),
        "---\ntitle: Broken\nmissing second delimiter\n",
    )
    .unwrap();

    let err = convert_blog(src.path(), out.path(), "me", &ConvertSettings::default()).unwrap_err();

    assert!(matches!(err, ConvertError::Scan(ScanError::Malformed { .. })));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn skip_policy_converts_the_valid_posts() {
    init_logging();
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(src.path().join("plain.md"), PLAIN).unwrap();
    fs::write(src.path().join("broken.md"), "no front matter").unwrap();

    let settings = ConvertSettings {
        scan_policy: ScanPolicy::SkipMalformed,
        ..ConvertSettings::default()
    };
    let report = convert_blog(src.path(), out.path(), "me", &settings).unwrap();

    assert_eq!(report.converted(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].slug, "broken");
    assert!(out.path().join("2021-05-01-plain").join("index.md").exists());
}
