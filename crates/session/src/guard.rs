//! Access decision for protected navigation

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;
use tunematch_gateway::Credentials;

use crate::refresh::{refresh_and_store, RefreshTask, TokenRefresher};
use crate::status::{check_session, SessionStatus};

/// Where unauthenticated users are sent
pub const DEFAULT_ENTRY_POINT: &str = "/";

/// A bounce to the public entry point that remembers where the user wanted to go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: String,
    pub return_to: String,
}

/// Outcome of guarding a navigation
#[derive(Debug)]
pub enum Access {
    /// Navigation may proceed; `refresh` is set when a background refresh was started
    Granted { refresh: Option<RefreshTask> },
    Denied(Redirect),
}

impl Access {
    fn granted() -> Self {
        Access::Granted { refresh: None }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted { .. })
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Access::Denied(redirect) => Some(redirect),
            Access::Granted { .. } => None,
        }
    }
}

/// Navigation primitive used to bounce denied users
pub trait Navigator: Send + Sync {
    fn redirect(&self, redirect: &Redirect);
}

/// Decides whether a protected area may be entered
pub struct SessionGuard {
    credentials: Credentials,
    refresher: Arc<dyn TokenRefresher>,
    bypass: bool,
    entry_point: String,
}

impl SessionGuard {
    pub fn new(credentials: Credentials, refresher: Arc<dyn TokenRefresher>) -> Self {
        Self {
            credentials,
            refresher,
            bypass: false,
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
        }
    }

    /// Grant every navigation without looking at credentials (mock backing)
    pub fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass = bypass;
        self
    }

    pub fn with_entry_point(mut self, entry_point: &str) -> Self {
        self.entry_point = entry_point.to_string();
        self
    }

    /// Current session status; clears an expired or unreadable token.
    ///
    /// A bypassed guard reports `Valid` and leaves the store untouched.
    pub fn status(&self) -> SessionStatus {
        if self.bypass {
            return SessionStatus::Valid;
        }
        check_session(&self.credentials, Utc::now())
    }

    /// Guard a navigation to `location` at the current time
    pub async fn authorize(&self, location: &str) -> Access {
        self.authorize_at(location, Utc::now()).await
    }

    /// Guard a navigation to `location` as of `now`
    pub async fn authorize_at(&self, location: &str, now: DateTime<Utc>) -> Access {
        if self.bypass {
            return Access::granted();
        }

        let status = check_session(&self.credentials, now);
        debug!("Session status for {}: {:?}", location, status);

        match status {
            SessionStatus::Valid => Access::granted(),
            SessionStatus::NearExpiry => {
                let refresh = self.credentials.refresh_token().map(|token| {
                    info!("Access token near expiry, refreshing in background");
                    RefreshTask::spawn(self.refresher.clone(), self.credentials.clone(), token)
                });
                Access::Granted { refresh }
            }
            SessionStatus::Expired | SessionStatus::Missing => {
                let Some(refresh_token) = self.credentials.refresh_token() else {
                    return self.deny(location);
                };

                match refresh_and_store(self.refresher.as_ref(), &self.credentials, &refresh_token)
                    .await
                {
                    Ok(_) => Access::granted(),
                    Err(err) => {
                        warn!("Token refresh failed, signing out: {}", err);
                        if let Err(err) = self.credentials.clear() {
                            warn!("Failed to clear credentials: {}", err);
                        }
                        self.deny(location)
                    }
                }
            }
        }
    }

    /// Guard a navigation and hand a denial to `navigator`
    pub async fn enter(&self, location: &str, navigator: &dyn Navigator) -> Access {
        let access = self.authorize(location).await;
        if let Access::Denied(redirect) = &access {
            navigator.redirect(redirect);
        }
        access
    }

    fn deny(&self, location: &str) -> Access {
        Access::Denied(Redirect {
            to: self.entry_point.clone(),
            return_to: location.to_string(),
        })
    }
}
