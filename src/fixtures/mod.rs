//! Static dataset served in mock mode
//!
//! Fixture records go through the same normalizers as backend records, so
//! mock and live data share their defaults. Every call builds fresh values.

mod catalog;
mod community;

use chrono::{DateTime, TimeZone, Utc};

use crate::matching::{LikeDto, MatchDto};
use crate::users::{normalize_user, User, UserDto};

pub(crate) use catalog::{blog_posts, events, songs, store_items};
pub(crate) use community::{chat_messages, chats, forum_sections, forum_topics};

/// Id of the user the mock dataset is signed in as
pub const CURRENT_USER_ID: &str = "1";

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).single()
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Email and password accepted by mock sign-in
#[derive(Debug, Clone, Copy)]
pub(crate) struct MockAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub user_id: &'static str,
}

pub(crate) fn accounts() -> Vec<MockAccount> {
    vec![
        MockAccount {
            email: "alex@tunematch.dev",
            password: "password123",
            user_id: "1",
        },
        MockAccount {
            email: "maya@tunematch.dev",
            password: "password123",
            user_id: "2",
        },
        MockAccount {
            email: "jordan@tunematch.dev",
            password: "password123",
            user_id: "3",
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    age: u32,
    gender: &str,
    location: &str,
    bio: &str,
    genres: &[&str],
    artists: &[&str],
) -> UserDto {
    UserDto {
        id: id.to_string(),
        name: Some(name.to_string()),
        email: Some(format!("{}@tunematch.dev", name.to_lowercase())),
        age: Some(age),
        gender: Some(gender.to_string()),
        location: Some(location.to_string()),
        bio: Some(bio.to_string()),
        images: Some(vec![format!("https://images.tunematch.dev/users/{}.jpg", id)]),
        favorite_genres: Some(strings(genres)),
        favorite_artists: Some(strings(artists)),
        ..UserDto::default()
    }
}

pub(crate) fn users() -> Vec<User> {
    let records = vec![
        UserDto {
            is_verified: Some(true),
            last_active: at(2024, 6, 1, 9, 30),
            ..user(
                "1",
                "Alex",
                28,
                "male",
                "Berlin, Germany",
                "Synth nerd, crate digger, always at the front row.",
                &["Electronic", "Indie"],
                &["Bonobo", "Caribou"],
            )
        },
        UserDto {
            is_verified: Some(true),
            last_active: at(2024, 6, 1, 8, 15),
            ..user(
                "2",
                "Maya",
                26,
                "female",
                "Berlin, Germany",
                "Looking for someone to share festival sunsets with.",
                &["Indie", "Folk"],
                &["Phoebe Bridgers", "Bon Iver"],
            )
        },
        UserDto {
            show_me: Some("women".to_string()),
            ..user(
                "3",
                "Jordan",
                31,
                "non-binary",
                "Hamburg, Germany",
                "Jazz on Sundays, techno on Saturdays.",
                &["Jazz", "Techno"],
                &["Kamasi Washington", "Nina Kraviz"],
            )
        },
        user(
            "4",
            "Sofia",
            24,
            "female",
            "Munich, Germany",
            "Classically trained, secretly a metalhead.",
            &["Metal", "Classical"],
            &["Gojira", "Max Richter"],
        ),
        UserDto {
            visibility: Some("matches-only".to_string()),
            ..user(
                "5",
                "Liam",
                34,
                "male",
                "Cologne, Germany",
                "Vinyl collector with too many turntables.",
                &["Hip-Hop", "Soul"],
                &["Anderson .Paak", "D'Angelo"],
            )
        },
        UserDto {
            visibility: Some("private".to_string()),
            ..user(
                "6",
                "Noor",
                29,
                "female",
                "Berlin, Germany",
                "Taking a break from discovery.",
                &["Electronic"],
                &["Four Tet"],
            )
        },
    ];
    records.into_iter().map(normalize_user).collect()
}

/// Likes between fixture users; "9" has no profile and resolves to a placeholder
pub(crate) fn likes() -> Vec<LikeDto> {
    let like = |id: &str, from: &str, to: &str, created_at| LikeDto {
        id: id.to_string(),
        from_user_id: Some(from.to_string()),
        to_user_id: Some(to.to_string()),
        is_super_like: None,
        created_at,
    };
    vec![
        like("l1", "1", "2", at(2024, 5, 20, 18, 0)),
        like("l2", "2", "1", at(2024, 5, 21, 10, 12)),
        like("l3", "1", "4", at(2024, 5, 25, 21, 40)),
        like("l4", "3", "1", at(2024, 5, 27, 7, 5)),
        LikeDto {
            is_super_like: Some(true),
            ..like("l5", "9", "1", at(2024, 5, 30, 23, 59))
        },
    ]
}

pub(crate) fn matches() -> Vec<MatchDto> {
    vec![MatchDto {
        id: "m1".to_string(),
        user_id: Some("2".to_string()),
        matched_at: at(2024, 5, 21, 10, 12),
        chat_id: Some("c1".to_string()),
    }]
}
