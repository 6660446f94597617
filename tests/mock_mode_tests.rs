use tunematch::auth::{error_codes, RegisterRequest};
use tunematch::config::Config;
use tunematch::users::{Gender, SearchFilters, UserUpdate};
use tunematch::users::Visibility;
use tunematch::{Access, SessionStatus, TuneMatch, CURRENT_USER_ID};

fn mock_client() -> TuneMatch {
    TuneMatch::new(Config::mock().unwrap()).unwrap()
}

#[tokio::test]
async fn test_event_lookup_by_id() {
    let client = mock_client();

    let found = client.events().get_event_by_id("1").await;
    assert!(found.success);
    assert!(found.error.is_none());
    let event = found.data.unwrap();
    assert_eq!(event.id, "1");
    assert!(!event.title.is_empty());
    assert!(!event.attendees.is_empty());

    let missing = client.events().get_event_by_id("does-not-exist").await;
    assert!(missing.success);
    assert!(missing.data.is_none());
    assert!(missing.error.is_none());
}

#[tokio::test]
async fn test_every_domain_answers_successfully() {
    let client = mock_client();

    assert!(client.users().get_users().await.success);
    assert!(client.events().get_events().await.success);
    assert!(client.store().get_store_items().await.success);
    assert!(client.blog().get_blog_posts().await.success);
    assert!(client.forum().get_sections().await.success);
    assert!(client.forum().get_section_topics("2").await.success);
    assert!(client.chat().get_chats().await.success);
    assert!(client.chat().get_messages("c1").await.success);
    assert!(client.songs().get_songs().await.success);
    assert!(client.matching().get_matches().await.success);
    assert!(client.matching().get_sent_likes().await.success);
    assert!(client.matching().get_received_likes().await.success);

    let user = client.users().get_user_by_id("2").await;
    assert!(user.success);
    assert_eq!(user.data.unwrap().id, "2");
    let item = client.store().get_store_item_by_id("1").await;
    assert!(item.success);
    assert_eq!(item.data.unwrap().id, "1");
    let post = client.blog().get_blog_post_by_id("1").await;
    assert!(post.success);
    assert_eq!(post.data.unwrap().id, "1");
    let song = client.songs().get_song_by_id("1").await;
    assert!(song.success);
    assert_eq!(song.data.unwrap().id, "1");
    let chat = client.chat().get_chat_by_id("c1").await;
    assert!(chat.success);
    assert_eq!(chat.data.unwrap().id, "c1");

    assert!(client.users().get_user_by_id("nope").await.data.is_none());
    assert!(client.store().get_store_item_by_id("nope").await.data.is_none());
    assert!(client.blog().get_blog_post_by_id("nope").await.data.is_none());
    assert!(client.songs().get_song_by_id("nope").await.data.is_none());
    assert!(client.chat().get_chat_by_id("nope").await.data.is_none());
}

#[tokio::test]
async fn test_login_with_unknown_credentials() {
    let client = mock_client();

    let response = client.auth().login("nobody@example.com", "wrong").await;
    assert!(!response.success);
    assert!(response.data.is_none());
    assert_eq!(response.error_code(), Some(error_codes::INVALID_CREDENTIALS));
    assert!(client.credentials().access_token().is_none());
}

#[tokio::test]
async fn test_login_me_logout() {
    let client = mock_client();

    let unauthenticated = client.auth().me().await;
    assert_eq!(unauthenticated.error_code(), Some(error_codes::UNAUTHORIZED));

    let session = client
        .auth()
        .login("maya@tunematch.dev", "password123")
        .await
        .data
        .unwrap();
    assert_eq!(session.user.id, "2");
    assert_eq!(
        client.credentials().access_token().as_deref(),
        Some(session.access_token.as_str())
    );

    let me = client.auth().me().await;
    assert_eq!(me.data.unwrap().name, "Maya");

    assert!(client.auth().logout().await.success);
    assert!(client.credentials().access_token().is_none());
    assert!(client.credentials().refresh_token().is_none());
}

#[tokio::test]
async fn test_register_rejects_taken_email() {
    let client = mock_client();

    let taken = client
        .auth()
        .register(&RegisterRequest::new("Alex", "ALEX@tunematch.dev", "secret"))
        .await;
    assert_eq!(taken.error_code(), Some(error_codes::EMAIL_ALREADY_EXISTS));

    let fresh = client
        .auth()
        .register(&RegisterRequest::new("Rin", "rin@example.com", "secret").with_age(27))
        .await;
    let session = fresh.data.unwrap();
    assert_eq!(session.user.name, "Rin");
    assert_eq!(session.user.age, Some(27));
    assert!(!session.user.id.is_empty());
}

#[tokio::test]
async fn test_refresh_rotates_mock_tokens() {
    let client = mock_client();

    let pair = client.auth().refresh("mock-refresh-3").await.data.unwrap();
    assert_eq!(pair.access_token, "mock-access-3");
    assert_eq!(
        client.credentials().refresh_token().as_deref(),
        Some("mock-refresh-3")
    );

    let rejected = client.auth().refresh("stolen").await;
    assert_eq!(rejected.error_code(), Some(error_codes::UNAUTHORIZED));
}

#[tokio::test]
async fn test_search_excludes_private_profiles() {
    let client = mock_client();

    let everyone = client.users().get_users().await.data.unwrap();
    assert!(everyone
        .iter()
        .any(|u| u.id == "6" && u.visibility == Visibility::Private));

    let filters = SearchFilters {
        location: Some("berlin".to_string()),
        exclude_ids: vec![CURRENT_USER_ID.to_string()],
        ..SearchFilters::default()
    };
    let found = client.users().search_users(&filters).await.data.unwrap();
    let ids: Vec<&str> = found.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["2"]);

    let filters = SearchFilters {
        gender: Some(Gender::Female),
        min_age: Some(25),
        ..SearchFilters::default()
    };
    let found = client.users().search_users(&filters).await.data.unwrap();
    assert!(found.iter().all(|u| u.gender == Gender::Female && u.age >= Some(25)));
}

#[tokio::test]
async fn test_mock_writes_are_not_persisted() {
    let client = mock_client();

    let update = UserUpdate {
        bio: Some("New bio".to_string()),
        ..UserUpdate::default()
    };
    let updated = client.users().update_user("1", &update).await.data.unwrap();
    assert_eq!(updated.bio, "New bio");
    let reread = client.users().get_user_by_id("1").await.data.unwrap();
    assert_ne!(reread.bio, "New bio");

    let registered = client.events().register_for_event("1").await.data.unwrap();
    assert!(registered.is_attending(CURRENT_USER_ID));
    let reread = client.events().get_event_by_id("1").await.data.unwrap();
    assert!(!reread.is_attending(CURRENT_USER_ID));
}

#[tokio::test]
async fn test_matching_joins_fixture_profiles() {
    let client = mock_client();

    let matches = client.matching().get_matches().await.data.unwrap();
    assert_eq!(matches[0].user.name, "Maya");

    let received = client.matching().get_received_likes().await.data.unwrap();
    let unknown = received.iter().find(|l| l.from_user_id == "9").unwrap();
    assert!(unknown.user.is_unknown());
    assert_eq!(unknown.user.id, "9");

    let result = client.matching().send_like("3").await.data.unwrap();
    assert!(result.is_match);
    let result = client.matching().send_like("5").await.data.unwrap();
    assert!(!result.is_match);
}

#[tokio::test]
async fn test_send_message_to_unknown_chat() {
    let client = mock_client();

    let sent = client.chat().send_message("c1", "  see you there  ").await;
    let message = sent.data.unwrap();
    assert_eq!(message.text, "see you there");
    assert_eq!(message.sender_id, CURRENT_USER_ID);

    let unknown = client.chat().send_message("nope", "hello").await;
    assert!(unknown.success);
    assert!(unknown.data.is_none());
}

#[tokio::test]
async fn test_guard_is_bypassed_in_mock_mode() {
    let client = mock_client();

    let access = client.session_guard().authorize("/matches").await;
    assert!(matches!(access, Access::Granted { refresh: None }));
}

#[tokio::test]
async fn test_status_check_keeps_mock_session() {
    let client = mock_client();
    client
        .auth()
        .login("jordan@tunematch.dev", "password123")
        .await
        .data
        .unwrap();

    assert_eq!(client.session_guard().status(), SessionStatus::Valid);

    let me = client.auth().me().await;
    assert!(me.success);
    assert_eq!(me.data.unwrap().id, "3");
    assert!(client.credentials().access_token().is_some());
}
