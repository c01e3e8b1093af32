//! Watch in-progress orders and print their computed totals.
//!
//! Usage:
//!   cargo run --example order_watch -- <base_url> <username> <password>

use std::time::Duration;

use meridian_client::{ClientConfig, OrderPoller};
use meridian_core::session::Session;
use meridian_core::totals::{TaxConfig, compute_order_totals};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8000/api".to_string());
    let username = args.next().unwrap_or_else(|| "cashier".to_string());
    let password = args.next().unwrap_or_default();

    let config = ClientConfig::new(base_url).with_poll_interval(Duration::from_secs(5));
    let client = config.build_http_client();

    let login = client.login(&username, &password).await?;
    let client = client.with_token(login.token.clone());
    let session = Session::start(login);
    tracing::info!(user = %session.user().username, role = ?session.user().role, "logged in");

    let shutdown = CancellationToken::new();
    let poller = OrderPoller::new(client, config.poll_interval, shutdown.clone());
    let (mut orders, handle) = poller.spawn();

    let tax = TaxConfig::default();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = orders.changed() => {
                if changed.is_err() {
                    break;
                }
                for order in orders.borrow().iter() {
                    match compute_order_totals(order, &tax) {
                        Ok(breakdown) => println!(
                            "order #{} [{}] {}",
                            order.id,
                            order.status.as_str(),
                            breakdown.display_total(),
                        ),
                        Err(e) => println!("order #{}: unable to compute total: {}", order.id, e),
                    }
                }
            }
        }
    }

    shutdown.cancel();
    handle.await?;
    session.end();
    Ok(())
}
