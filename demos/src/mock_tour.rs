use anyhow::{bail, Context};
use dotenv::dotenv;
use log::info;
use tunematch::config::Config;
use tunematch::users::SearchFilters;
use tunematch::{TuneMatch, CURRENT_USER_ID};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    // TUNEMATCH_API_MODE defaults to mock, so this runs without a backend
    let config = Config::from_env().context("reading TUNEMATCH_* settings")?;
    let client = TuneMatch::new(config)?;
    info!("Running against {} data", client.config().mode);

    println!("== Sign in ==");
    let login = client.auth().login("alex@tunematch.dev", "password123").await;
    match (&login.data, &login.error) {
        (Some(session), _) => println!("Signed in as {} ({})", session.user.name, session.user.id),
        (None, Some(error)) => bail!("sign-in failed: {} {}", error.code, error.message),
        (None, None) => bail!("sign-in returned no session"),
    }

    println!("\n== Events ==");
    for event in client.events().get_events().await.data.unwrap_or_default() {
        println!(
            "{:>3}  {:<28} {:<10} {} going",
            event.id,
            event.title,
            event.category.as_str(),
            event.attendees.len()
        );
    }

    println!("\n== Discover ==");
    let filters = SearchFilters {
        location: Some("Berlin".to_string()),
        exclude_ids: vec![CURRENT_USER_ID.to_string()],
        ..SearchFilters::default()
    };
    for user in client.users().search_users(&filters).await.data.unwrap_or_default() {
        println!("{}  {}, {}", user.id, user.name, user.favorite_genres.join(" / "));
    }

    println!("\n== Matches ==");
    for matched in client.matching().get_matches().await.data.unwrap_or_default() {
        println!("{} matched with {}", matched.id, matched.user.name);
    }
    for like in client.matching().get_received_likes().await.data.unwrap_or_default() {
        let name = if like.user.is_unknown() {
            "someone new"
        } else {
            like.user.name.as_str()
        };
        println!("Liked by {}", name);
    }

    println!("\n== Forum ==");
    for section in client.forum().get_sections().await.data.unwrap_or_default() {
        println!("{} ({} topics)", section.title, section.topic_count);
        let topics = client.forum().get_section_topics(&section.id).await;
        for topic in topics.data.unwrap_or_default() {
            let marker = if topic.pinned { "*" } else { " " };
            println!("  {} {}", marker, topic.title);
        }
    }

    let logout = client.auth().logout().await;
    println!("\nSigned out: {}", logout.success);

    Ok(())
}
