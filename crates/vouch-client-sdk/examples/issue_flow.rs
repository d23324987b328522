//! Register a credential type, assign it twice, and list the recipient's
//! history. Expects a registry at http://localhost:3000 — start one with
//! `vouch server` or `cargo run -p vouch-server`.

use rand::RngCore;
use vouch_client_sdk::RegistryClient;
use vouch_core::{Identity, MetadataHash};

fn random_identity() -> Identity {
    let mut bytes = [0u8; 20];
    rand::thread_rng().fill_bytes(&mut bytes);
    Identity::from_bytes(bytes)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = RegistryClient::new("http://localhost:3000");

    let issuer = random_identity();
    let fan = random_identity();

    let type_id = client.register_type("Backstage Pass", issuer).await?;
    println!("registered type {type_id} as {issuer}");

    client
        .assign_credential(fan, type_id, MetadataHash::from_bytes([0x42; 32]), issuer)
        .await?;
    client
        .assign_credential(fan, type_id, MetadataHash::from_bytes([0x43; 32]), issuer)
        .await?;

    let records = client.credentials_for(fan).await?;
    println!("{fan} holds {} credentials:", records.len());
    for record in records {
        println!("  {} from {} (metadata {})", record.type_id, record.issuer, record.metadata);
    }

    Ok(())
}
