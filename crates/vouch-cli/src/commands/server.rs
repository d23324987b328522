//! Server command - run the registry over HTTP

use anyhow::Result;
use console::style;

pub async fn run(bind: String) -> Result<()> {
    println!(
        "\n{}",
        style("╔════════════════════════════════════════╗").cyan()
    );
    println!(
        "{}",
        style("║   📇 Vouch Credential Registry        ║").cyan()
    );
    println!(
        "{}",
        style("╚════════════════════════════════════════╝").cyan()
    );
    println!();
    println!("Binding to: {}", style(&bind).green());
    println!();
    println!("{}", style("Endpoints:").bold());
    println!("  Register type:     POST http://{}/types", bind);
    println!("  Show type:         GET  http://{}/types/:id", bind);
    println!("  Assign credential: POST http://{}/credentials", bind);
    println!(
        "  List credentials:  GET  http://{}/identities/:owner/credentials",
        bind
    );
    println!("  Health:            GET  http://{}/health", bind);
    println!();

    vouch_server::serve(&bind).await?;

    Ok(())
}
