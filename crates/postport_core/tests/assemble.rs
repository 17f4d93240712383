use postport_core::{build_target_document, target_dir_name, SourceDocument};
use pretty_assertions::assert_eq;

fn init_logging() {
    postport_logging::initialize_for_tests();
}

#[test]
fn welcome_post_is_converted() {
    init_logging();
    let text = "---\ntitle: Welcome\ndate: 2022-06-28 09:16:48\ntags: AWS, S3\n---\nHello\n\n{% asset_img pic.jpg alt text %}\n";
    let source = SourceDocument::parse("welcome", text).unwrap();
    let target = build_target_document(&source, "test");

    assert_eq!(target.slug, "welcome");
    assert_eq!(target.date, "2022-06-28");
    assert_eq!(target.images, vec!["pic.jpg"]);
    assert_eq!(
        target.content,
        "---\nslug: welcome\ntitle: Welcome\nauthors: [test]\ntags: [AWS, S3]\n---\nHello\n\n![pic](./pic.jpg)\n"
    );
    assert_eq!(target_dir_name(&target.date, &target.slug), "2022-06-28-welcome");
}

#[test]
fn post_without_images_keeps_body_verbatim() {
    init_logging();
    let body = "\nNo pictures here.\n\n```text\n{% raw %}\n```\n";
    let text = format!("---\ntitle: Plain\ndate: 2021-01-02\n---\n{body}");
    let source = SourceDocument::parse("plain", &text).unwrap();
    let target = build_target_document(&source, "me");

    assert!(target.images.is_empty());
    assert_eq!(target.date, "2021-01-02");
    assert_eq!(
        target.content,
        format!("---\nslug: plain\ntitle: Plain\nauthors: [me]\ntags: []\n---\n{body}")
    );
}

#[test]
fn bare_reference_without_braces_is_listed_but_not_rewritten() {
    init_logging();
    let text = "---\ntitle: T\ndate: 2021-01-02\n---\nsee asset_img loose.png here\n";
    let source = SourceDocument::parse("t", text).unwrap();
    let target = build_target_document(&source, "me");

    assert_eq!(target.images, vec!["loose.png"]);
    assert!(target.content.ends_with("see asset_img loose.png here\n"));
}
