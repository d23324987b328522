//! Status command - show configuration and status

use anyhow::Result;
use console::style;
use vouch_client_sdk::RegistryClient;

pub async fn show(url: &str) -> Result<()> {
    println!(
        "\n{}",
        style("╔════════════════════════════════════════╗").cyan()
    );
    println!(
        "{}",
        style("║   📇 Vouch Status                     ║").cyan()
    );
    println!(
        "{}",
        style("╚════════════════════════════════════════╝").cyan()
    );
    println!();

    // Version info
    println!("{}", style("Version").bold().underlined());
    println!("  vouch-cli:  {}", env!("CARGO_PKG_VERSION"));
    println!();

    // Environment
    println!("{}", style("Environment").bold().underlined());
    println!(
        "  VOUCH_URL:  {}",
        std::env::var("VOUCH_URL").unwrap_or_else(|_| "http://localhost:3000 (default)".to_string())
    );
    println!(
        "  VOUCH_BIND: {}",
        std::env::var("VOUCH_BIND").unwrap_or_else(|_| "0.0.0.0:3000 (default)".to_string())
    );
    println!();

    // Registry reachability
    println!("{}", style("Registry").bold().underlined());
    let client = RegistryClient::new(url);
    let reachable = client.health().await.unwrap_or(false);
    println!(
        "  {}: {}",
        url,
        if reachable {
            style("reachable").green()
        } else {
            style("unreachable").red()
        }
    );
    println!();

    // Quick help
    println!("{}", style("Quick Start").bold().underlined());
    println!("  Start server:      vouch server");
    println!("  Mint an identity:  vouch identity new");
    println!("  Register a type:   vouch type register --name \"NBA Player\" --creator 0x…");
    println!("  Assign:            vouch credential assign -r 0x… -t 0x… -m 0x… -i 0x…");
    println!("  List credentials:  vouch credential list 0x…");
    println!("  Show help:         vouch --help");

    Ok(())
}
