use anyhow::Context;
use dotenv::dotenv;
use log::warn;
use tunematch::{Access, Navigator, Redirect, RefreshState, TuneMatch};

struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn redirect(&self, redirect: &Redirect) {
        println!("-> redirect to {} (return to {})", redirect.to, redirect.return_to);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    let client = TuneMatch::from_env().context("building client from TUNEMATCH_* settings")?;
    let location = std::env::args().nth(1).unwrap_or_else(|| "/matches".to_string());

    let guard = client.session_guard();
    println!("Session status: {:?}", guard.status());

    match guard.enter(&location, &PrintNavigator).await {
        Access::Granted { refresh: Some(task) } => {
            println!("Granted {}, refreshing in the background", location);
            match task.wait().await {
                RefreshState::Failed(reason) => warn!("Background refresh failed: {}", reason),
                state => println!("Refresh finished: {:?}", state),
            }
        }
        Access::Granted { refresh: None } => println!("Granted {}", location),
        Access::Denied(_) => println!("Denied {}", location),
    }

    Ok(())
}
