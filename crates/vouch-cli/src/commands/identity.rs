//! Identity helpers

use console::style;
use rand::RngCore;
use vouch_core::Identity;

/// Mint a random identity for demos and testing
pub fn new() {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    let identity = Identity::from_bytes(bytes);

    println!("\n{}", style("New Identity").bold().green());
    println!();
    println!("  {}", style(identity).yellow());
    println!();
    println!(
        "{}",
        style("Use it as --creator, --issuer, or --recipient.").dim()
    );
}
