//! Song catalogue used on profiles
//!
//! Fixture-backed in both modes until a catalogue backend exists.

use log::debug;
use serde::{Deserialize, Serialize};
use tunematch_gateway::ApiResponse;

use crate::backend::{find_by_id, Backend};
use crate::fixtures;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub cover_url: Option<String>,
    pub preview_url: Option<String>,
    pub duration_secs: u32,
}

#[derive(Debug, Clone)]
pub struct SongsApi {
    backend: Backend,
}

impl SongsApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    pub async fn get_songs(&self) -> ApiResponse<Vec<Song>> {
        if !self.backend.is_mock() {
            debug!("songs have no live backend, serving fixtures");
        }
        ApiResponse::ok(fixtures::songs())
    }

    pub async fn get_song_by_id(&self, id: &str) -> ApiResponse<Song> {
        ApiResponse::from_option(find_by_id(fixtures::songs(), id, |s| &s.id))
    }
}
