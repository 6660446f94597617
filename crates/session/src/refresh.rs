//! Token refresh, blocking or in the background

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use tokio::sync::watch;
use tunematch_gateway::Credentials;

use crate::SessionError;

/// A freshly issued token pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    /// Rotated refresh token, `None` when the backend keeps the old one
    pub refresh_token: Option<String>,
}

/// Exchanges a refresh token for a new token pair
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError>;
}

/// Refresh and store the new pair
pub async fn refresh_and_store(
    refresher: &dyn TokenRefresher,
    credentials: &Credentials,
    refresh_token: &str,
) -> Result<TokenPair, SessionError> {
    let pair = refresher.refresh(refresh_token).await?;
    credentials.set_tokens(&pair.access_token, pair.refresh_token.as_deref())?;
    Ok(pair)
}

/// Progress of a background refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshState {
    Pending,
    Succeeded,
    Failed(String),
}

/// Handle on a refresh running in the background.
///
/// Dropping the handle does not cancel the refresh. Callers that care
/// about the outcome can [`subscribe`](RefreshTask::subscribe) or
/// [`wait`](RefreshTask::wait).
#[derive(Debug)]
pub struct RefreshTask {
    state: watch::Receiver<RefreshState>,
}

impl RefreshTask {
    /// Spawn a refresh on the current tokio runtime
    pub fn spawn(
        refresher: Arc<dyn TokenRefresher>,
        credentials: Credentials,
        refresh_token: String,
    ) -> Self {
        let (tx, rx) = watch::channel(RefreshState::Pending);

        tokio::spawn(async move {
            let outcome =
                match refresh_and_store(refresher.as_ref(), &credentials, &refresh_token).await {
                    Ok(_) => {
                        info!("Background token refresh succeeded");
                        RefreshState::Succeeded
                    }
                    Err(err) => {
                        warn!("Background token refresh failed: {}", err);
                        RefreshState::Failed(err.to_string())
                    }
                };
            tx.send_replace(outcome);
        });

        Self { state: rx }
    }

    /// Receiver that observes the outcome
    pub fn subscribe(&self) -> watch::Receiver<RefreshState> {
        self.state.clone()
    }

    /// Current state without waiting
    pub fn state(&self) -> RefreshState {
        self.state.borrow().clone()
    }

    /// Wait for the refresh to finish
    pub async fn wait(self) -> RefreshState {
        let mut rx = self.state;
        loop {
            let current = rx.borrow_and_update().clone();
            if current != RefreshState::Pending {
                return current;
            }
            if rx.changed().await.is_err() {
                let last = rx.borrow().clone();
                return match last {
                    RefreshState::Pending => {
                        RefreshState::Failed("refresh task ended without an outcome".to_string())
                    }
                    done => done,
                };
            }
        }
    }
}
