//! Askama template structs for the site.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.
//!
//! Image sources are rendered with `|safe`: they are either base64 `data:`
//! URIs or the fixed placeholder URLs from the asset catalog.

use askama::Template;

use super::content::{FaqItem, FooterLink, ModelStep, PricingPlan, Stat};

/// Marketing landing page.
#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate<'a> {
    pub site_name: &'a str,
    pub logo_src: String,
    pub computer_src: String,
    pub chart_src: String,
    pub gears_src: String,
    pub steps: &'static [ModelStep],
    pub headline: &'static Stat,
    pub stats: &'static [Stat],
    pub plans: &'static [PricingPlan],
    pub faq: &'static [FaqItem],
    pub footer_links: &'static [FooterLink],
    pub disclaimer: &'static [&'static str],
}

/// Sign-in form stub.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub site_name: &'a str,
    pub logo_src: String,
    /// Set after the form is posted.
    pub acknowledgment: Option<&'static str>,
    pub footer_links: &'static [FooterLink],
    pub disclaimer: &'static [&'static str],
}
