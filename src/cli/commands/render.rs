//! Static page rendering command.

use std::io::Write;
use std::path::Path;

use crate::assets::{chart, ResolvedAssets};
use crate::cli::icons::success;
use crate::config::Settings;
use crate::server::{render_page, Page, RenderOptions};

/// Render `page` as a self-contained HTML document.
///
/// Writes to `output` when given, otherwise to stdout.
pub fn cmd_render(settings: &Settings, page: Page, output: Option<&Path>) -> anyhow::Result<()> {
    chart::ensure_chart(&settings.assets_dir);

    let assets = ResolvedAssets::resolve_all(&settings.assets_dir, None);
    let options = RenderOptions {
        site_name: settings.site_name.clone(),
        sign_in_submitted: false,
    };
    let html = render_page(page, &assets, &options)?;

    match output {
        Some(path) => {
            std::fs::write(path, &html)?;
            eprintln!(
                "{} Rendered {} page to {} ({} bytes)",
                success(),
                page,
                path.display(),
                html.len()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_login_to_file() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            assets_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let out = dir.path().join("login.html");

        cmd_render(&settings, Page::Login, Some(&out)).unwrap();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains("type=\"password\""));
    }

    #[test]
    fn test_render_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            assets_dir: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let out = dir.path().join("no-such-dir").join("index.html");

        assert!(cmd_render(&settings, Page::Landing, Some(&out)).is_err());
    }
}
