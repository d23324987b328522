//! Credential type commands

use anyhow::{Context, Result};
use console::style;
use vouch_client_sdk::RegistryClient;
use vouch_core::{Identity, TypeId};

/// Register a new credential type
pub async fn register(url: &str, name: &str, creator: &str) -> Result<()> {
    let creator: Identity = creator.parse().context("invalid creator identity")?;

    let client = RegistryClient::new(url);
    let type_id = client.register_type(name, creator).await?;

    println!("\n{}", style("Type Registered").bold().green());
    println!();
    println!("  Name:    {}", style(name).cyan());
    println!("  Creator: {}", style(creator).cyan());
    println!("  Type id: {}", style(type_id).yellow());
    println!();
    println!(
        "{}",
        style("Use this type id with `vouch credential assign`.").dim()
    );

    Ok(())
}

/// Show a registered credential type
pub async fn show(url: &str, type_id: &str) -> Result<()> {
    let type_id: TypeId = type_id.parse().context("invalid type id")?;

    let client = RegistryClient::new(url);
    let def = client.get_type(type_id).await?;

    println!("\n{}", style("Credential Type").bold().underlined());
    println!();
    println!("  Type id: {}", style(def.type_id).yellow());
    println!("  Name:    {}", style(&def.name).cyan());
    println!("  Creator: {}", style(def.creator).cyan());

    Ok(())
}
