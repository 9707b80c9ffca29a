//! Web server command.

use std::net::IpAddr;

use crate::cli::icons::{dim_arrow, info};
use crate::config::Settings;

/// Default port when the bind address only names a host.
const DEFAULT_PORT: u16 = 3030;

/// Start the web server.
pub async fn cmd_serve(settings: &Settings, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;

    println!(
        "{} Starting {} at http://{}:{}",
        info(),
        settings.site_name,
        host,
        port
    );
    println!(
        "  {} Assets: {}",
        dim_arrow(),
        settings.assets_dir.display()
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "3030" -> 127.0.0.1:3030
/// - Just a host: "0.0.0.0" -> 0.0.0.0:3030
/// - Host and port: "0.0.0.0:3030" -> 0.0.0.0:3030
/// - IPv6: "::1" -> ::1:3030, "[::1]:8080" -> ::1:8080
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("Bind address cannot be empty");
    }

    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Bare IP literal, including IPv6 with its colons
    if bind.parse::<IpAddr>().is_ok() {
        return Ok((bind.to_string(), DEFAULT_PORT));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            let host = host.trim_start_matches('[').trim_end_matches(']');
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), DEFAULT_PORT))
}
