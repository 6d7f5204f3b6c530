use super::*;
use crate::kernel::services::ports::AppConfig;
use crate::models::BufferId;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn buffer(path: &Path) -> Buffer {
    Buffer::new(BufferId::from_raw(3), path)
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

#[test]
fn test_render_splices_text_and_id() {
    let template = "<body><textarea id=\"hmdtextarea\"></textarea><p>x</p></textarea></body>";
    let page = render(template, &buffer(Path::new("/n.md")), "# </textarea>").unwrap();
    assert_eq!(
        page,
        "<body><textarea id=\"hmdtextarea\"># &lt;/textarea&gt;</textarea>\
         <script>window.hmdBufferId=\"3\";</script><p>x</p></textarea></body>"
    );
}

#[test]
fn test_render_without_textarea() {
    assert_eq!(render("<body></body>", &buffer(Path::new("/n.md")), "x"), None);
}

#[test]
fn test_builtin_template_has_insertion_point() {
    assert!(BUILTIN_TEMPLATE.contains("id=\"hmdtextarea\""));
    assert!(BUILTIN_TEMPLATE.contains(INSERTION_POINT));
    assert!(BUILTIN_TEMPLATE.contains("window.hmd"));
}

#[test]
fn test_template_from_asset_root() {
    let dir = tempdir().unwrap();
    let ctx = AppContext::local(AppConfig::new(dir.path()));
    assert_eq!(load_template(&ctx), BUILTIN_TEMPLATE);

    fs::write(dir.path().join(TEMPLATE_FILE), "<textarea></textarea>").unwrap();
    assert_eq!(load_template(&ctx), "<textarea></textarea>");
}

#[test]
fn test_document_text_seeds_missing_file() {
    let dir = tempdir().unwrap();
    let ctx = AppContext::local(AppConfig::new(dir.path()));
    let path = dir.path().join("Groceries.md");

    assert_eq!(
        document_text(&ctx, &buffer(&path)).as_deref(),
        Some("# Groceries\n\n")
    );
    fs::write(&path, "milk").unwrap();
    assert_eq!(document_text(&ctx, &buffer(&path)).as_deref(), Some("milk"));
}
