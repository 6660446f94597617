//! User profile view-model and its backend wire shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

/// Gender as shown on a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Lenient parse; anything unrecognized is `PreferNotToSay`
    pub fn from_wire(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "male" | "man" | "m" => Gender::Male,
            "female" | "woman" | "f" => Gender::Female,
            "non-binary" | "nonbinary" => Gender::NonBinary,
            "other" => Gender::Other,
            _ => Gender::PreferNotToSay,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }
}

/// Who can see a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    MatchesOnly,
    Private,
}

impl Visibility {
    /// Lenient parse; anything unrecognized is `Public`
    pub fn from_wire(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "private" | "hidden" => Visibility::Private,
            "matches-only" | "matches" => Visibility::MatchesOnly,
            _ => Visibility::Public,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::MatchesOnly => "matches-only",
            Visibility::Private => "private",
        }
    }
}

/// Whose profiles a user wants to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShowMe {
    Everyone,
    Men,
    Women,
    NonBinary,
}

impl ShowMe {
    /// Lenient parse; anything unrecognized is `Everyone`
    pub fn from_wire(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "men" | "male" => ShowMe::Men,
            "women" | "female" => ShowMe::Women,
            "non-binary" | "nonbinary" => ShowMe::NonBinary,
            _ => ShowMe::Everyone,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShowMe::Everyone => "everyone",
            ShowMe::Men => "men",
            ShowMe::Women => "women",
            ShowMe::NonBinary => "non-binary",
        }
    }

    /// Whether a profile of `gender` falls under this preference
    pub fn admits(&self, gender: Gender) -> bool {
        match self {
            ShowMe::Everyone => true,
            ShowMe::Men => gender == Gender::Male,
            ShowMe::Women => gender == Gender::Female,
            ShowMe::NonBinary => gender == Gender::NonBinary,
        }
    }
}

fn normalize_token(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

/// A user profile, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub gender: Gender,
    pub location: String,
    pub bio: String,
    pub images: Vec<String>,
    pub favorite_genres: Vec<String>,
    pub favorite_artists: Vec<String>,
    pub visibility: Visibility,
    pub show_me: ShowMe,
    pub is_verified: bool,
    pub last_active: Option<DateTime<Utc>>,
}

impl User {
    /// Stand-in for a user id that could not be resolved
    pub fn unknown(id: &str) -> Self {
        normalize_user(UserDto {
            id: id.to_string(),
            ..UserDto::default()
        })
    }

    /// Whether this is an unresolved stand-in
    pub fn is_unknown(&self) -> bool {
        self.name.is_empty() && self.images.is_empty() && self.email.is_none()
    }

    /// Copy of the profile with `update` applied
    pub fn updated(&self, update: &UserUpdate) -> Self {
        let mut user = self.clone();
        if let Some(name) = &update.name {
            user.name = name.clone();
        }
        if let Some(age) = update.age {
            user.age = Some(age);
        }
        if let Some(gender) = update.gender {
            user.gender = gender;
        }
        if let Some(location) = &update.location {
            user.location = location.clone();
        }
        if let Some(bio) = &update.bio {
            user.bio = bio.clone();
        }
        if let Some(images) = &update.images {
            user.images = images.clone();
        }
        if let Some(genres) = &update.favorite_genres {
            user.favorite_genres = genres.clone();
        }
        if let Some(artists) = &update.favorite_artists {
            user.favorite_artists = artists.clone();
        }
        if let Some(visibility) = update.visibility {
            user.visibility = visibility;
        }
        if let Some(show_me) = update.show_me {
            user.show_me = show_me;
        }
        user
    }
}

/// User record as the backend sends it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default, alias = "display_name", alias = "displayName")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, alias = "photos")]
    pub images: Option<Vec<String>>,
    #[serde(default, alias = "favoriteGenres")]
    pub favorite_genres: Option<Vec<String>>,
    #[serde(default, alias = "favoriteArtists")]
    pub favorite_artists: Option<Vec<String>>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default, alias = "showMe")]
    pub show_me: Option<String>,
    #[serde(default, alias = "isVerified")]
    pub is_verified: Option<bool>,
    #[serde(default, alias = "lastActive")]
    pub last_active: Option<DateTime<Utc>>,
}

/// Map a backend user record onto the view-model
pub fn normalize_user(dto: UserDto) -> User {
    User {
        id: dto.id,
        name: dto.name.unwrap_or_default(),
        email: dto.email,
        age: dto.age,
        gender: dto
            .gender
            .as_deref()
            .map_or(Gender::PreferNotToSay, Gender::from_wire),
        location: dto.location.unwrap_or_default(),
        bio: dto.bio.unwrap_or_default(),
        images: dto.images.unwrap_or_default(),
        favorite_genres: dto.favorite_genres.unwrap_or_default(),
        favorite_artists: dto.favorite_artists.unwrap_or_default(),
        visibility: dto
            .visibility
            .as_deref()
            .map_or(Visibility::Public, Visibility::from_wire),
        show_me: dto
            .show_me
            .as_deref()
            .map_or(ShowMe::Everyone, ShowMe::from_wire),
        is_verified: dto.is_verified.unwrap_or(false),
        last_active: dto.last_active,
    }
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: Some(user.name.clone()),
            email: user.email.clone(),
            age: user.age,
            gender: Some(user.gender.as_str().to_string()),
            location: Some(user.location.clone()),
            bio: Some(user.bio.clone()),
            images: Some(user.images.clone()),
            favorite_genres: Some(user.favorite_genres.clone()),
            favorite_artists: Some(user.favorite_artists.clone()),
            visibility: Some(user.visibility.as_str().to_string()),
            show_me: Some(user.show_me.as_str().to_string()),
            is_verified: Some(user.is_verified),
            last_active: user.last_active,
        }
    }
}

/// Partial profile update; unset fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_artists: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_me: Option<ShowMe>,
}

/// Filters for profile discovery
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub gender: Option<Gender>,
    /// Matches a favorite genre, case-insensitively
    pub genre: Option<String>,
    /// Substring of the location, case-insensitively
    pub location: Option<String>,
    /// Profiles never returned (usually the searcher)
    pub exclude_ids: Vec<String>,
}

impl SearchFilters {
    pub fn matches(&self, user: &User) -> bool {
        if self.exclude_ids.iter().any(|id| *id == user.id) {
            return false;
        }
        if user.visibility == Visibility::Private {
            return false;
        }
        if self.min_age.is_some() || self.max_age.is_some() {
            let Some(age) = user.age else {
                return false;
            };
            if self.min_age.is_some_and(|min| age < min) || self.max_age.is_some_and(|max| age > max) {
                return false;
            }
        }
        if self.gender.is_some_and(|gender| gender != user.gender) {
            return false;
        }
        if let Some(genre) = &self.genre {
            let genre = genre.to_lowercase();
            if !user.favorite_genres.iter().any(|g| g.to_lowercase() == genre) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !user.location.to_lowercase().contains(&location.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_fills_defaults() {
        let dto: UserDto = serde_json::from_value(json!({ "id": 12, "name": "Mia" })).unwrap();
        let user = normalize_user(dto);

        assert_eq!(user.id, "12");
        assert_eq!(user.bio, "");
        assert!(user.images.is_empty());
        assert_eq!(user.gender, Gender::PreferNotToSay);
        assert_eq!(user.visibility, Visibility::Public);
        assert_eq!(user.show_me, ShowMe::Everyone);
        assert!(!user.is_verified);
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": "u1",
            "gender": "GENDERFLUID_XYZ",
            "visibility": "friends-of-friends",
            "showMe": "aliens",
        }))
        .unwrap();
        let user = normalize_user(dto);

        assert_eq!(user.gender, Gender::PreferNotToSay);
        assert_eq!(user.visibility, Visibility::Public);
        assert_eq!(user.show_me, ShowMe::Everyone);
    }

    #[test]
    fn test_gender_spellings() {
        assert_eq!(Gender::from_wire("Non_Binary"), Gender::NonBinary);
        assert_eq!(Gender::from_wire(" FEMALE "), Gender::Female);
        assert_eq!(Gender::from_wire("prefer-not-to-say"), Gender::PreferNotToSay);
    }

    #[test]
    fn test_normalize_is_idempotent_through_wire_shape() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": "u7",
            "display_name": "Jonas",
            "age": 29,
            "gender": "male",
            "location": "Berlin",
            "photos": ["a.jpg"],
            "favorite_genres": ["Techno"],
            "show_me": "women",
            "visibility": "matches_only",
            "is_verified": true
        }))
        .unwrap();
        let once = normalize_user(dto);
        let twice = normalize_user(UserDto::from(&once));
        assert_eq!(once, twice);

        let wire = serde_json::to_value(UserDto::from(&once)).unwrap();
        let reparsed = normalize_user(serde_json::from_value(wire).unwrap());
        assert_eq!(once, reparsed);
    }

    #[test]
    fn test_unknown_user_keeps_id() {
        let user = User::unknown("X");
        assert_eq!(user.id, "X");
        assert!(user.is_unknown());
    }

    #[test]
    fn test_search_filters() {
        let user = normalize_user(UserDto {
            id: "1".to_string(),
            name: Some("Ava".to_string()),
            age: Some(27),
            gender: Some("female".to_string()),
            location: Some("Amsterdam, NL".to_string()),
            favorite_genres: Some(vec!["Indie".to_string()]),
            ..UserDto::default()
        });

        let mut filters = SearchFilters {
            min_age: Some(25),
            max_age: Some(30),
            genre: Some("indie".to_string()),
            location: Some("amsterdam".to_string()),
            ..SearchFilters::default()
        };
        assert!(filters.matches(&user));

        filters.gender = Some(Gender::Male);
        assert!(!filters.matches(&user));

        filters.gender = None;
        filters.exclude_ids = vec!["1".to_string()];
        assert!(!filters.matches(&user));
    }
}
