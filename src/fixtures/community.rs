//! Forum and chat

use chrono::{DateTime, Utc};

use super::at;
use crate::chat::{Chat, ChatMessage};
use crate::forum::{
    normalize_section, normalize_topic, ForumSection, ForumSectionDto, ForumTopic, ForumTopicDto,
};

pub(crate) fn forum_sections() -> Vec<ForumSection> {
    let section = |id: &str, title: &str, description: &str, icon: &str, topic_count| ForumSectionDto {
        id: id.to_string(),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        icon: Some(icon.to_string()),
        topic_count: Some(topic_count),
    };
    vec![
        section("1", "Announcements", "News from the TuneMatch team", "megaphone", 1),
        section("2", "Gig Buddies", "Find someone to go to a show with", "ticket", 2),
        section("3", "Recommendations", "Share what you have on repeat", "headphones", 1),
    ]
    .into_iter()
    .map(normalize_section)
    .collect()
}

pub(crate) fn forum_topics() -> Vec<ForumTopic> {
    let records = vec![
        ForumTopicDto {
            id: "1".to_string(),
            section_id: Some("1".to_string()),
            title: Some("Welcome to the forum".to_string()),
            author_name: Some("The TuneMatch Team".to_string()),
            reply_count: Some(12),
            view_count: Some(480),
            pinned: Some(true),
            created_at: at(2024, 4, 1, 9, 0),
            ..ForumTopicDto::default()
        },
        ForumTopicDto {
            id: "2".to_string(),
            section_id: Some("2".to_string()),
            title: Some("Anyone going to Berlin Indie Night?".to_string()),
            author_id: Some("2".to_string()),
            author_name: Some("Maya".to_string()),
            reply_count: Some(4),
            view_count: Some(61),
            created_at: at(2024, 5, 28, 17, 0),
            last_activity_at: at(2024, 5, 31, 20, 45),
            ..ForumTopicDto::default()
        },
        ForumTopicDto {
            id: "3".to_string(),
            section_id: Some("2".to_string()),
            title: Some("Gig buddy etiquette".to_string()),
            author_name: Some("The TuneMatch Team".to_string()),
            reply_count: Some(3),
            view_count: Some(210),
            pinned: Some(true),
            created_at: at(2024, 4, 3, 9, 0),
            ..ForumTopicDto::default()
        },
        ForumTopicDto {
            id: "4".to_string(),
            section_id: Some("3".to_string()),
            title: Some("Albums that got you through winter".to_string()),
            author_id: Some("3".to_string()),
            author_name: Some("Jordan".to_string()),
            reply_count: Some(27),
            view_count: Some(350),
            created_at: at(2024, 2, 10, 21, 0),
            last_activity_at: at(2024, 5, 30, 11, 20),
            ..ForumTopicDto::default()
        },
    ];
    records.into_iter().map(normalize_topic).collect()
}

pub(crate) fn chat_messages() -> Vec<ChatMessage> {
    let message = |id: &str, chat_id: &str, sender_id: &str, text: &str, sent_at: Option<DateTime<Utc>>, read: bool| {
        sent_at.map(|sent_at| ChatMessage {
            id: id.to_string(),
            chat_id: chat_id.to_string(),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            sent_at,
            read,
        })
    };
    vec![
        message("1", "c1", "2", "Hey! Saw you like Caribou too", at(2024, 5, 21, 10, 15), true),
        message("2", "c1", "1", "Guilty. Have you seen them live?", at(2024, 5, 21, 10, 20), true),
        message("3", "c1", "2", "Not yet, are you going to Indie Night?", at(2024, 5, 31, 19, 2), false),
        message("4", "c2", "1", "Your jazz picks are great", at(2024, 5, 28, 8, 0), true),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub(crate) fn chats() -> Vec<Chat> {
    let messages = chat_messages();
    let chat = |id: &str, participants: [&str; 2]| {
        let in_chat: Vec<&ChatMessage> = messages.iter().filter(|m| m.chat_id == id).collect();
        let last_message = in_chat.iter().max_by_key(|m| m.sent_at).map(|m| (*m).clone());
        let unread_count = in_chat
            .iter()
            .filter(|m| !m.read && m.sender_id != super::CURRENT_USER_ID)
            .count() as u32;
        Chat {
            id: id.to_string(),
            participant_ids: participants.iter().map(|p| p.to_string()).collect(),
            updated_at: last_message.as_ref().map(|m| m.sent_at),
            last_message,
            unread_count,
        }
    };
    vec![chat("c1", ["1", "2"]), chat("c2", ["1", "3"])]
}
