//! Likes and matches
//!
//! The backend refers to users by id only. The records here carry the
//! resolved profile of the other party.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::users::User;
use crate::wire;

/// A like between two users, with the profile of the other party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub user: User,
    pub is_super_like: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// A mutual like
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub user: User,
    pub matched_at: Option<DateTime<Utc>>,
    pub chat_id: Option<String>,
}

/// Outcome of sending a like
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResult {
    pub like_id: Option<String>,
    pub target_user_id: String,
    pub is_match: bool,
    pub match_id: Option<String>,
}

/// Which side of a like the signed-in user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeDirection {
    Sent,
    Received,
}

impl LikeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikeDirection::Sent => "sent",
            LikeDirection::Received => "received",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LikeDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::optional_id", alias = "fromUserId", alias = "liker_id")]
    pub from_user_id: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_id", alias = "toUserId", alias = "liked_id")]
    pub to_user_id: Option<String>,
    #[serde(default, alias = "isSuperLike", alias = "super_like")]
    pub is_super_like: Option<bool>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    /// The other party
    #[serde(
        default,
        deserialize_with = "wire::optional_id",
        alias = "userId",
        alias = "matched_user_id",
        alias = "matchedUserId"
    )]
    pub user_id: Option<String>,
    #[serde(default, alias = "matchedAt", alias = "created_at")]
    pub matched_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "wire::optional_id", alias = "chatId")]
    pub chat_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LikeResultDto {
    #[serde(default, deserialize_with = "wire::optional_id", alias = "likeId", alias = "id")]
    pub like_id: Option<String>,
    #[serde(default, alias = "isMatch", alias = "matched")]
    pub is_match: Option<bool>,
    #[serde(default, deserialize_with = "wire::optional_id", alias = "matchId")]
    pub match_id: Option<String>,
}

/// Profiles by id, joined against like and match records
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id.clone(), u)).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// The profile for `id`, or a stand-in keeping the id
    pub fn resolve(&self, id: &str) -> User {
        self.users
            .get(id)
            .cloned()
            .unwrap_or_else(|| User::unknown(id))
    }
}

pub fn enrich_like(dto: LikeDto, direction: LikeDirection, directory: &UserDirectory) -> Like {
    let from_user_id = dto.from_user_id.unwrap_or_default();
    let to_user_id = dto.to_user_id.unwrap_or_default();
    let other = match direction {
        LikeDirection::Sent => &to_user_id,
        LikeDirection::Received => &from_user_id,
    };
    let user = directory.resolve(other);

    Like {
        id: dto.id,
        user,
        from_user_id,
        to_user_id,
        is_super_like: dto.is_super_like.unwrap_or(false),
        created_at: dto.created_at,
    }
}

pub fn enrich_match(dto: MatchDto, directory: &UserDirectory) -> Match {
    let user = directory.resolve(dto.user_id.as_deref().unwrap_or_default());
    Match {
        id: dto.id,
        user,
        matched_at: dto.matched_at,
        chat_id: dto.chat_id,
    }
}

pub fn normalize_like_result(dto: LikeResultDto, target_user_id: &str) -> LikeResult {
    let is_match = dto.is_match.unwrap_or(dto.match_id.is_some());
    LikeResult {
        like_id: dto.like_id,
        target_user_id: target_user_id.to_string(),
        is_match,
        match_id: dto.match_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::{normalize_user, UserDto};
    use serde_json::json;

    fn directory() -> UserDirectory {
        UserDirectory::new(vec![normalize_user(UserDto {
            id: "2".to_string(),
            name: Some("Noor".to_string()),
            ..UserDto::default()
        })])
    }

    #[test]
    fn test_unresolved_match_gets_placeholder() {
        let dto: MatchDto =
            serde_json::from_value(json!({ "id": 1, "matched_user_id": "X" })).unwrap();
        let matched = enrich_match(dto, &directory());

        assert_eq!(matched.user.id, "X");
        assert!(matched.user.is_unknown());
    }

    #[test]
    fn test_like_direction_picks_other_party() {
        let dto: LikeDto =
            serde_json::from_value(json!({ "id": "l1", "from_user_id": 2, "to_user_id": 1 }))
                .unwrap();

        let received = enrich_like(dto.clone(), LikeDirection::Received, &directory());
        assert_eq!(received.user.name, "Noor");

        let sent = enrich_like(dto, LikeDirection::Sent, &directory());
        assert_eq!(sent.user.id, "1");
        assert!(sent.user.is_unknown());
    }

    #[test]
    fn test_like_result_infers_match_from_match_id() {
        let dto: LikeResultDto =
            serde_json::from_value(json!({ "id": 5, "matchId": 77 })).unwrap();
        let result = normalize_like_result(dto, "3");
        assert!(result.is_match);
        assert_eq!(result.match_id.as_deref(), Some("77"));
        assert_eq!(result.like_id.as_deref(), Some("5"));
    }
}
