//! Blog post view-model and its backend wire shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_at: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub read_time_minutes: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "summary")]
    pub excerpt: Option<String>,
    #[serde(default, alias = "body")]
    pub content: Option<String>,
    #[serde(default, alias = "author_name", alias = "authorName")]
    pub author: Option<String>,
    #[serde(default, alias = "publishedAt", alias = "created_at")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "image_url", alias = "cover")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, alias = "readTime", alias = "read_time")]
    pub read_time_minutes: Option<u32>,
}

/// Minutes to read `content`, never less than one
pub fn estimate_read_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    u32::try_from(words.div_ceil(WORDS_PER_MINUTE).max(1)).unwrap_or(u32::MAX)
}

/// First sentence-ish slice of `content` used when no excerpt is sent
fn derive_excerpt(content: &str) -> String {
    const MAX_CHARS: usize = 160;
    let trimmed = content.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_CHARS).collect();
    match cut.rfind(' ') {
        Some(space) => format!("{}…", &cut[..space]),
        None => format!("{}…", cut),
    }
}

pub fn normalize_blog_post(dto: BlogPostDto) -> BlogPost {
    let content = dto.content.unwrap_or_default();
    let excerpt = dto
        .excerpt
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| derive_excerpt(&content));
    let read_time_minutes = dto
        .read_time_minutes
        .unwrap_or_else(|| estimate_read_time(&content));

    BlogPost {
        id: dto.id,
        title: dto.title.unwrap_or_default(),
        excerpt,
        content,
        author: dto.author.unwrap_or_default(),
        published_at: dto.published_at,
        image: dto.image,
        tags: dto.tags.unwrap_or_default(),
        read_time_minutes,
    }
}

impl From<&BlogPost> for BlogPostDto {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            title: Some(post.title.clone()),
            excerpt: Some(post.excerpt.clone()),
            content: Some(post.content.clone()),
            author: Some(post.author.clone()),
            published_at: post.published_at,
            image: post.image.clone(),
            tags: Some(post.tags.clone()),
            read_time_minutes: Some(post.read_time_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_time_and_excerpt_are_derived() {
        let body = "word ".repeat(450);
        let post = normalize_blog_post(
            serde_json::from_value(json!({ "id": 1, "title": "Crate digging", "body": body }))
                .unwrap(),
        );
        assert_eq!(post.read_time_minutes, 3);
        assert!(post.excerpt.ends_with('…'));
        assert!(post.excerpt.chars().count() <= 161);
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_empty_post_reads_in_a_minute() {
        let post = normalize_blog_post(serde_json::from_value(json!({ "id": "b" })).unwrap());
        assert_eq!(post.read_time_minutes, 1);
        assert_eq!(post.excerpt, "");
    }

    #[test]
    fn test_normalize_is_idempotent_through_wire_shape() {
        let once = normalize_blog_post(
            serde_json::from_value(json!({
                "id": "b2",
                "title": "Festival survival guide",
                "content": "Bring earplugs. Hydrate.",
                "author_name": "Lena",
                "tags": ["festivals"]
            }))
            .unwrap(),
        );
        let twice = normalize_blog_post(BlogPostDto::from(&once));
        assert_eq!(once, twice);
    }
}
