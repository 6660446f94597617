//! Events, store, blog and songs

use super::{at, strings};
use crate::blog::{normalize_blog_post, BlogPost, BlogPostDto};
use crate::events::{normalize_event, Event, EventDto};
use crate::songs::Song;
use crate::store::{normalize_store_item, StoreItem, StoreItemDto};

pub(crate) fn events() -> Vec<Event> {
    let records = vec![
        EventDto {
            id: "1".to_string(),
            title: Some("Berlin Indie Night".to_string()),
            description: Some(
                "An evening of local indie bands and a mixer for TuneMatch members.".to_string(),
            ),
            date: at(2024, 7, 12, 19, 30),
            venue: Some("Lido".to_string()),
            location: Some("Berlin, Germany".to_string()),
            category: Some("concert".to_string()),
            image: Some("https://images.tunematch.dev/events/1.jpg".to_string()),
            price: Some(18.0),
            attendees: strings(&["2", "4"]),
            max_attendees: Some(250),
            tags: Some(strings(&["indie", "live", "mixer"])),
        },
        EventDto {
            id: "2".to_string(),
            title: Some("Open Air Techno Weekender".to_string()),
            description: Some("Two days of techno by the lake.".to_string()),
            date: at(2024, 8, 3, 14, 0),
            venue: Some("Stadtpark".to_string()),
            location: Some("Hamburg, Germany".to_string()),
            category: Some("festival".to_string()),
            price: Some(79.0),
            attendees: strings(&["3"]),
            max_attendees: Some(5000),
            tags: Some(strings(&["techno", "outdoor"])),
            ..EventDto::default()
        },
        EventDto {
            id: "3".to_string(),
            title: Some("Vinyl Swap Meetup".to_string()),
            description: Some("Bring records, leave with better records.".to_string()),
            date: at(2024, 6, 22, 12, 0),
            venue: Some("Plattenladen am Ring".to_string()),
            location: Some("Cologne, Germany".to_string()),
            category: Some("meetup".to_string()),
            price: Some(0.0),
            attendees: strings(&["1", "5"]),
            max_attendees: Some(2),
            ..EventDto::default()
        },
        EventDto {
            id: "4".to_string(),
            title: Some("Beatmaking Workshop".to_string()),
            date: at(2024, 9, 14, 10, 0),
            location: Some("Munich, Germany".to_string()),
            category: Some("workshop".to_string()),
            price: Some(45.0),
            ..EventDto::default()
        },
    ];
    records.into_iter().map(normalize_event).collect()
}

pub(crate) fn store_items() -> Vec<StoreItem> {
    let records = vec![
        StoreItemDto {
            id: "1".to_string(),
            name: Some("TuneMatch Logo Tee".to_string()),
            description: Some("Organic cotton, printed in Berlin.".to_string()),
            price: Some(25.0),
            currency: Some("EUR".to_string()),
            image_url: Some("https://images.tunematch.dev/store/tee.jpg".to_string()),
            category: Some("apparel".to_string()),
            sizes: Some(strings(&["S", "M", "L", "XL"])),
            ..StoreItemDto::default()
        },
        StoreItemDto {
            id: "2".to_string(),
            name: Some("Members Compilation Vol. 1".to_string()),
            description: Some("Twelve tracks picked by the community, on 180g vinyl.".to_string()),
            price: Some(30.0),
            currency: Some("EUR".to_string()),
            category: Some("vinyl".to_string()),
            ..StoreItemDto::default()
        },
        StoreItemDto {
            id: "3".to_string(),
            name: Some("Festival Tote".to_string()),
            price: Some(12.5),
            category: Some("accessories".to_string()),
            in_stock: Some(false),
            ..StoreItemDto::default()
        },
    ];
    records.into_iter().map(normalize_store_item).collect()
}

pub(crate) fn blog_posts() -> Vec<BlogPost> {
    let records = vec![
        BlogPostDto {
            id: "1".to_string(),
            title: Some("Why Shared Playlists Beat Small Talk".to_string()),
            content: Some(
                "Music taste says more about a first date than any bio. We looked at how \
                 members who swap playlists before meeting end up talking for longer, and \
                 why a shared favorite album is the best icebreaker there is."
                    .to_string(),
            ),
            author: Some("The TuneMatch Team".to_string()),
            published_at: at(2024, 5, 2, 9, 0),
            tags: Some(strings(&["dating", "playlists"])),
            ..BlogPostDto::default()
        },
        BlogPostDto {
            id: "2".to_string(),
            title: Some("Festival Season Survival Guide".to_string()),
            excerpt: Some("Earplugs, meeting points and how to find your match in a crowd.".to_string()),
            content: Some(
                "Festival season is here. Pack earplugs, agree on a meeting point, and keep \
                 your phone charged so your matches can find you."
                    .to_string(),
            ),
            author: Some("Maya".to_string()),
            published_at: at(2024, 6, 10, 8, 0),
            image: Some("https://images.tunematch.dev/blog/festival.jpg".to_string()),
            tags: Some(strings(&["festivals", "tips"])),
            ..BlogPostDto::default()
        },
    ];
    records.into_iter().map(normalize_blog_post).collect()
}

pub(crate) fn songs() -> Vec<Song> {
    let song = |id: &str, title: &str, artist: &str, album: &str, genre: &str, duration_secs| Song {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        genre: genre.to_string(),
        cover_url: Some(format!("https://images.tunematch.dev/songs/{}.jpg", id)),
        preview_url: None,
        duration_secs,
    };
    vec![
        song("1", "Kerala", "Bonobo", "Migration", "Electronic", 244),
        song("2", "Motion Sickness", "Phoebe Bridgers", "Stranger in the Alps", "Indie", 229),
        song("3", "Holocene", "Bon Iver", "Bon Iver, Bon Iver", "Folk", 337),
        song("4", "Truth", "Kamasi Washington", "Harmony of Difference", "Jazz", 834),
        song("5", "Silvera", "Gojira", "Magma", "Metal", 212),
    ]
}
