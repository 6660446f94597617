//! TuneMatch client library
//!
//! Data access for the TuneMatch music-fan community: one provider per
//! domain (users, events, store, blog, forum, chat, matching, auth, songs),
//! each answering either from a static dataset or from the live backend,
//! plus the session guard that keeps the access token usable.
//!
//! Every data-access call resolves to an [`ApiResponse`] envelope and never
//! returns an `Err`.

pub mod auth;
pub mod blog;
pub mod chat;
pub mod config;
pub mod error;
pub mod events;
pub mod forum;
pub mod matching;
pub mod songs;
pub mod store;
pub mod users;

mod backend;
mod fixtures;
mod wire;

use log::info;
use reqwest::Client;
use std::sync::Arc;

use crate::auth::AuthApi;
use crate::backend::Backend;
use crate::blog::BlogApi;
use crate::chat::ChatApi;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventsApi;
use crate::forum::ForumApi;
use crate::matching::MatchingApi;
use crate::songs::SongsApi;
use crate::store::StoreApi;
use crate::users::UsersApi;

pub use fixtures::CURRENT_USER_ID;
pub use tunematch_gateway::{
    codes, ApiError, ApiResponse, CredentialStore, Credentials, FileStore, Gateway, Localize,
    MemoryStore,
};
pub use tunematch_session::{
    Access, Navigator, Redirect, RefreshState, RefreshTask, SessionGuard, SessionStatus,
    TokenPair, TokenRefresher,
};

/// The main entry point for the TuneMatch client
#[derive(Debug, Clone)]
pub struct TuneMatch {
    config: Config,
    credentials: Credentials,
    auth: AuthApi,
    users: UsersApi,
    events: EventsApi,
    store: StoreApi,
    blog: BlogApi,
    forum: ForumApi,
    chat: ChatApi,
    matching: MatchingApi,
    songs: SongsApi,
}

impl TuneMatch {
    /// Create a client for `config`.
    ///
    /// Credentials live in the JSON file named by `config.storage_path`,
    /// or in memory when it is unset.
    ///
    /// # Example
    ///
    /// ```
    /// use tunematch::{config::Config, TuneMatch};
    ///
    /// let client = TuneMatch::new(Config::mock().unwrap()).unwrap();
    /// assert!(client.config().mode.is_mock());
    /// ```
    pub fn new(config: Config) -> Result<Self> {
        let store: Arc<dyn CredentialStore> = match &config.storage_path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Create a client reading and writing tokens through `store`
    pub fn with_store(config: Config, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let credentials = Credentials::new(store);
        let http_client = Client::builder().timeout(config.request_timeout).build()?;
        let gateway = Gateway::new(config.api_base_url.clone(), credentials.clone())
            .with_http_client(http_client)
            .with_timeout(config.request_timeout);
        let backend = Backend::new(config.mode, gateway);

        info!(
            "TuneMatch client ready in {} mode ({})",
            config.mode, config.api_base_url
        );

        Ok(Self {
            auth: AuthApi::new(backend.clone()),
            users: UsersApi::new(backend.clone()),
            events: EventsApi::new(backend.clone()),
            store: StoreApi::new(backend.clone()),
            blog: BlogApi::new(backend.clone()),
            forum: ForumApi::new(backend.clone()),
            chat: ChatApi::new(backend.clone()),
            matching: MatchingApi::new(backend.clone()),
            songs: SongsApi::new(backend),
            credentials,
            config,
        })
    }

    /// Create a client configured from the process environment
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The credential store shared by the gateway, auth and the session guard
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn auth(&self) -> &AuthApi {
        &self.auth
    }

    pub fn users(&self) -> &UsersApi {
        &self.users
    }

    pub fn events(&self) -> &EventsApi {
        &self.events
    }

    pub fn store(&self) -> &StoreApi {
        &self.store
    }

    pub fn blog(&self) -> &BlogApi {
        &self.blog
    }

    pub fn forum(&self) -> &ForumApi {
        &self.forum
    }

    pub fn chat(&self) -> &ChatApi {
        &self.chat
    }

    pub fn matching(&self) -> &MatchingApi {
        &self.matching
    }

    pub fn songs(&self) -> &SongsApi {
        &self.songs
    }

    /// Guard for protected screens, refreshing through [`AuthApi`].
    ///
    /// In mock mode the guard always grants access.
    pub fn session_guard(&self) -> SessionGuard {
        SessionGuard::new(self.credentials.clone(), Arc::new(self.auth.clone()))
            .with_bypass(self.config.mode.is_mock())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::{Config, DataMode};
    pub use crate::error::Error;
    pub use crate::TuneMatch;
    pub use tunematch_gateway::{ApiError, ApiResponse};
    pub use tunematch_session::{Access, SessionGuard, SessionStatus};
}
