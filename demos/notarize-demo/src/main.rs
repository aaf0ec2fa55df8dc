//! Notarize API walkthrough.
//!
//! Lists transactions and templates and inspects the webhook
//! registration for the credential in `NOTARIZE_API_KEY`.

// Demo-specific lint allowances
#![allow(missing_docs)]
#![allow(clippy::print_stdout)]

use notarize::prelude::*;

#[tokio::main]
async fn main() -> notarize::Result<()> {
    let api_key = std::env::var("NOTARIZE_API_KEY").unwrap_or_else(|_| "demo-key".to_owned());

    let client = Notarize::new(NotarizeConfig::new(api_key))?;
    println!("Notarize client created");
    println!("Base URL: {}", client.dispatcher().base_url());

    println!("\n=== Transactions ===");
    let listing = client.transactions().list(Some(5), None).await?;
    println!("success: {}", listing.success);
    if let Some(page) = listing.value {
        println!("total: {:?}", page.count);
        for transaction in page.data {
            println!(
                "  {} {:?} {:?}",
                transaction.id, transaction.transaction_name, transaction.status
            );
        }
    }

    println!("\n=== Templates ===");
    let templates = client.templates().list(None, None).await?;
    if let Some(page) = templates.value {
        println!("total: {:?}", page.total_count);
        for template in page.templates {
            println!("  {} {:?}", template.id, template.name);
        }
    }

    println!("\n=== Webhook ===");
    let webhook = client.webhooks().retrieve().await?;
    match webhook.value {
        Some(settings) => println!("registered: {:?}", settings.url),
        None => println!("no webhook registered"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn walkthrough_against_mock_server() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "count": 1,
                "data": [{"id": "t-1", "transaction_name": "Deed"}]
            })))
            .mount(&mock_server)
            .await;

        let client = Notarize::new(NotarizeConfig::new("demo-key").host(mock_server.uri()))
            .expect("client");

        let listing = client.transactions().list(Some(5), None).await.expect("list");
        assert!(listing.success);
        let page = listing.value.expect("page");
        assert_eq!(page.data.first().expect("transaction").id, "t-1");
    }
}
