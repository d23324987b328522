//! Credential commands

use anyhow::{Context, Result};
use console::style;
use vouch_client_sdk::RegistryClient;
use vouch_core::{Identity, MetadataHash, TypeId};

/// Assign a credential to a recipient
pub async fn assign(
    url: &str,
    recipient: &str,
    type_id: &str,
    metadata: &str,
    issuer: &str,
) -> Result<()> {
    let recipient: Identity = recipient.parse().context("invalid recipient identity")?;
    let type_id: TypeId = type_id.parse().context("invalid type id")?;
    let metadata: MetadataHash = metadata.parse().context("invalid metadata hash")?;
    let issuer: Identity = issuer.parse().context("invalid issuer identity")?;

    let client = RegistryClient::new(url);
    client
        .assign_credential(recipient, type_id, metadata, issuer)
        .await?;

    println!("\n{}", style("Credential Assigned").bold().green());
    println!();
    println!("  Recipient: {}", style(recipient).cyan());
    println!("  Type id:   {}", style(type_id).yellow());
    println!("  Metadata:  {}", style(metadata).dim());
    println!("  Issuer:    {}", style(issuer).cyan());

    Ok(())
}

/// List a recipient's credentials in issuance order
pub async fn list(url: &str, owner: &str) -> Result<()> {
    let owner: Identity = owner.parse().context("invalid owner identity")?;

    let client = RegistryClient::new(url);
    let records = client.credentials_for(owner).await?;

    println!("\n{}", style("Credentials").bold().underlined());
    println!();
    println!("  Owner: {}", style(owner).cyan());
    println!();

    if records.is_empty() {
        println!("  {}", style("No credentials assigned.").dim());
        return Ok(());
    }

    for (index, record) in records.iter().enumerate() {
        println!("  {} {}", style("●").green(), style(record.type_id).yellow());
        println!("    #{index} issued by {}", style(record.issuer).cyan());
        println!("    metadata {}", style(record.metadata).dim());
        println!();
    }

    Ok(())
}
