//! Forum view-models and their backend wire shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wire;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub topic_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForumTopic {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub author_id: Option<String>,
    pub author_name: String,
    pub reply_count: u32,
    pub view_count: u32,
    pub pinned: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForumSectionDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, alias = "topicCount", alias = "topics_count")]
    pub topic_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForumTopicDto {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default, deserialize_with = "wire::optional_id", alias = "sectionId")]
    pub section_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_id", alias = "authorId")]
    pub author_id: Option<String>,
    #[serde(default, alias = "authorName", alias = "author")]
    pub author_name: Option<String>,
    #[serde(default, alias = "replyCount", alias = "replies")]
    pub reply_count: Option<u32>,
    #[serde(default, alias = "viewCount", alias = "views")]
    pub view_count: Option<u32>,
    #[serde(default, alias = "is_pinned", alias = "isPinned")]
    pub pinned: Option<bool>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "lastActivityAt", alias = "updated_at")]
    pub last_activity_at: Option<DateTime<Utc>>,
}

pub fn normalize_section(dto: ForumSectionDto) -> ForumSection {
    ForumSection {
        id: dto.id,
        title: dto.title.unwrap_or_default(),
        description: dto.description.unwrap_or_default(),
        icon: dto.icon,
        topic_count: dto.topic_count.unwrap_or(0),
    }
}

/// Without any activity timestamp the topic counts as last active when created
pub fn normalize_topic(dto: ForumTopicDto) -> ForumTopic {
    ForumTopic {
        id: dto.id,
        section_id: dto.section_id.unwrap_or_default(),
        title: dto.title.unwrap_or_default(),
        author_id: dto.author_id,
        author_name: dto.author_name.unwrap_or_default(),
        reply_count: dto.reply_count.unwrap_or(0),
        view_count: dto.view_count.unwrap_or(0),
        pinned: dto.pinned.unwrap_or(false),
        created_at: dto.created_at,
        last_activity_at: dto.last_activity_at.or(dto.created_at),
    }
}

/// Pinned topics first, then most recently active
pub fn sort_topics(topics: &mut [ForumTopic]) {
    topics.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.last_activity_at.cmp(&a.last_activity_at))
    });
}

impl From<&ForumSection> for ForumSectionDto {
    fn from(section: &ForumSection) -> Self {
        Self {
            id: section.id.clone(),
            title: Some(section.title.clone()),
            description: Some(section.description.clone()),
            icon: section.icon.clone(),
            topic_count: Some(section.topic_count),
        }
    }
}

impl From<&ForumTopic> for ForumTopicDto {
    fn from(topic: &ForumTopic) -> Self {
        Self {
            id: topic.id.clone(),
            section_id: Some(topic.section_id.clone()),
            title: Some(topic.title.clone()),
            author_id: topic.author_id.clone(),
            author_name: Some(topic.author_name.clone()),
            reply_count: Some(topic.reply_count),
            view_count: Some(topic.view_count),
            pinned: Some(topic.pinned),
            created_at: topic.created_at,
            last_activity_at: topic.last_activity_at,
        }
    }
}
