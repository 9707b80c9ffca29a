//! End-to-end rendering tests
//!
//! Resolves assets from a real directory and renders both pages through the
//! public library API.

use base64::Engine;
use tempfile::TempDir;

use benchmark3x::assets::{AssetRef, ResolvedAssets, CATALOG, CHART};
use benchmark3x::server::{render_page, Page, RenderOptions};

/// Write every catalog image with distinct bytes.
fn populated_assets_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (i, entry) in CATALOG.iter().enumerate() {
        let bytes: Vec<u8> = (0..64u8).map(|b| b.wrapping_mul(i as u8 + 3)).collect();
        std::fs::write(dir.path().join(entry.file_name), bytes).unwrap();
    }
    dir
}

fn render(page: Page, dir: &TempDir) -> String {
    let assets = ResolvedAssets::resolve_all(dir.path(), None);
    render_page(page, &assets, &RenderOptions::default()).unwrap()
}

#[test]
fn empty_assets_dir_renders_only_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let html = render(Page::Landing, &dir);

    assert!(!html.contains("data:"), "no inline data expected");
    assert!(!html.contains("base64"));
    assert!(!html.contains("src=\"\""));
    assert!(!html.contains("url('')"));
    for entry in CATALOG {
        assert!(
            html.contains(entry.placeholder),
            "placeholder for {} missing",
            entry.name
        );
    }
}

#[test]
fn present_assets_are_inlined_from_file_bytes() {
    let dir = populated_assets_dir();
    let html = render(Page::Landing, &dir);

    for entry in CATALOG {
        let bytes = std::fs::read(dir.path().join(entry.file_name)).unwrap();
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        let mime = if entry.file_name.ends_with(".png") {
            "image/png"
        } else {
            "image/jpeg"
        };
        let expected = format!("data:{};base64,{}", mime, encoded);

        assert!(html.contains(&expected), "{} not inlined", entry.name);
        assert!(!html.contains(entry.placeholder));
    }
}

#[test]
fn missing_chart_only_affects_chart() {
    let dir = populated_assets_dir();
    std::fs::remove_file(dir.path().join(CHART.file_name)).unwrap();

    let assets = ResolvedAssets::resolve_all(dir.path(), None);
    assert_eq!(assets.chart, AssetRef::Placeholder(CHART.placeholder));
    assert!(assets.logo.is_inline());
    assert!(assets.computer.is_inline());
    assert!(assets.gears.is_inline());

    let html = render_page(Page::Landing, &assets, &RenderOptions::default()).unwrap();
    assert!(html.contains(CHART.placeholder));
}

#[test]
fn login_page_has_form_and_no_pricing() {
    let dir = populated_assets_dir();
    let html = render(Page::from_query(Some("login")), &dir);

    assert_eq!(html.matches("type=\"email\"").count(), 1);
    assert_eq!(html.matches("type=\"password\"").count(), 1);
    assert_eq!(html.matches("class=\"pricing-card").count(), 0);
    assert!(html.contains("data:image/jpeg;base64,"), "logo should be inlined");
}

#[test]
fn non_login_identifiers_render_landing() {
    let dir = tempfile::tempdir().unwrap();
    let landing = render(Page::Landing, &dir);

    for id in [None, Some(""), Some("home"), Some("Login"), Some("login/")] {
        assert_eq!(render(Page::from_query(id), &dir), landing, "{:?}", id);
    }
}

#[test]
fn rendering_is_idempotent() {
    let dir = populated_assets_dir();
    for page in [Page::Landing, Page::Login] {
        assert_eq!(render(page, &dir), render(page, &dir));
    }
}
