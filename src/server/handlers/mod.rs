//! HTTP request handlers for the web server.

mod pages;

// Re-export handlers for use by the router
pub use pages::{index, login_page, submit_login};
