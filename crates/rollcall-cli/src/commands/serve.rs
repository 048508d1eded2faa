//! Serve command - run the HTTP API.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use colored::Colorize;
use rollcall::Rollcall;

use crate::server::{app, state::AppState};

pub fn run(
    bind: IpAddr,
    port: u16,
    timeout_secs: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    if timeout_secs == 0 {
        return Err("--timeout-secs must be at least 1".into());
    }

    let state = AppState::new(Rollcall::new(), Duration::from_secs(timeout_secs));
    let addr = SocketAddr::new(bind, port);

    println!();
    println!(
        "{} http://{}/api/check",
        "Rollcall API".cyan().bold(),
        addr
    );
    println!("  Request timeout: {}s", timeout_secs);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, addr))
}
