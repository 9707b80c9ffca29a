//! Page selection and rendering.
//!
//! `render_page` is a pure function of its inputs: the same page, assets and
//! options always produce byte-identical HTML.

use std::fmt;

use askama::Template;
use thiserror::Error;

use super::content;
use super::template_structs::{LandingTemplate, LoginTemplate};
use crate::assets::ResolvedAssets;

/// Default site name shown in titles and the footer.
pub const DEFAULT_SITE_NAME: &str = "Benchmark3x";

/// The two page variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Page {
    #[default]
    Landing,
    Login,
}

impl Page {
    /// Select a page from the `page` query parameter.
    ///
    /// Only the exact value `login` selects the sign-in page; anything else,
    /// including no parameter at all, is the landing page.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("login") => Page::Login,
            _ => Page::Landing,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Login => "login",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to rendering besides the page and assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub site_name: String,
    /// Show the sign-in acknowledgment (login page only).
    pub sign_in_submitted: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            sign_in_submitted: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to render {page} page: {source}")]
    Template {
        page: Page,
        #[source]
        source: askama::Error,
    },
}

/// Render a complete HTML document for `page`.
pub fn render_page(
    page: Page,
    assets: &ResolvedAssets,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let result = match page {
        Page::Landing => LandingTemplate {
            site_name: &options.site_name,
            logo_src: assets.logo.to_string(),
            computer_src: assets.computer.to_string(),
            chart_src: assets.chart.to_string(),
            gears_src: assets.gears.to_string(),
            steps: content::MODEL_STEPS,
            headline: &content::HEADLINE_STAT,
            stats: content::SECONDARY_STATS,
            plans: content::PRICING_PLANS,
            faq: content::FAQ,
            footer_links: content::FOOTER_LINKS,
            disclaimer: content::DISCLAIMER_HTML,
        }
        .render(),
        Page::Login => LoginTemplate {
            site_name: &options.site_name,
            logo_src: assets.logo.to_string(),
            acknowledgment: options
                .sign_in_submitted
                .then_some(content::SIGN_IN_ACKNOWLEDGMENT),
            footer_links: content::FOOTER_LINKS,
            disclaimer: content::DISCLAIMER_HTML,
        }
        .render(),
    };

    result.map_err(|source| RenderError::Template { page, source })
}
