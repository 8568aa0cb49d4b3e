use mockito::Server;
use spielplan::client::ScheduleClient;
use spielplan::feed::{ScheduleFeed, UiState};

const FEED_PATH: &str = "/datenraumkultur";

fn record(date: &str, title: &str) -> String {
    format!(
        r#"{{
            "date": "{date}",
            "theatre_name": "Staatstheater Augsburg",
            "title": "{title}",
            "subtitle1": null,
            "subtitle2": null,
            "location": "Großes Haus",
            "genre": "Oper",
            "descr_uri": "staatstheater-augsburg.de/{title}",
            "tickets_uri": "https://webshop.staatstheater-augsburg.de/{title}"
        }}"#
    )
}

async fn wait_terminal(rx: &mut tokio::sync::watch::Receiver<UiState>) -> UiState {
    rx.wait_for(|s| !matches!(s, UiState::Loading))
        .await
        .expect("feed dropped")
        .clone()
}

#[tokio::test]
async fn test_success_preserves_server_order() {
    // 1. Setup Mock Server: deliberately not sorted by date
    let mut server = Server::new_async().await;
    let body = format!(
        "[{},{},{}]",
        record("2025-05-12T20:00:00+02:00", "c"),
        record("2025-05-10T20:00:00+02:00", "a"),
        record("2025-05-11T20:00:00+02:00", "b"),
    );
    let mock = server
        .mock("GET", FEED_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    // 2. Run the feed to a terminal state
    let client = ScheduleClient::new(&server.url()).unwrap();
    let feed = ScheduleFeed::new(client);
    let mut rx = feed.subscribe();

    // Before the fetch task runs, the published slot is Loading.
    assert_eq!(*rx.borrow(), UiState::Loading);

    let state = wait_terminal(&mut rx).await;

    // 3. Assertions: exact sequence, same order
    mock.assert_async().await;
    match state {
        UiState::Success(performances) => {
            let titles: Vec<&str> = performances.iter().map(|p| p.title.as_str()).collect();
            assert_eq!(titles, vec!["c", "a", "b"]);
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_surfaces_as_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", FEED_PATH)
        .with_status(500)
        .create_async()
        .await;

    let client = ScheduleClient::new(&server.url()).unwrap();
    let feed = ScheduleFeed::new(client);
    let mut rx = feed.subscribe();

    match wait_terminal(&mut rx).await {
        UiState::Error(msg) => assert!(!msg.trim().is_empty(), "message must not be blank"),
        other => panic!("expected Error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_one_malformed_record_fails_the_whole_fetch() {
    let mut server = Server::new_async().await;
    // Second record is missing the required "title" field.
    let body = format!(
        r#"[{},{{"date": "2025-05-10T20:00:00+02:00", "location": "Foyer"}}]"#,
        record("2025-05-10T20:00:00+02:00", "a"),
    );
    let _mock = server
        .mock("GET", FEED_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = ScheduleClient::new(&server.url()).unwrap();
    let feed = ScheduleFeed::new(client);
    let mut rx = feed.subscribe();

    assert!(matches!(wait_terminal(&mut rx).await, UiState::Error(_)));
}

#[tokio::test]
async fn test_refresh_discards_previous_results() {
    let mut server = Server::new_async().await;
    let first = server
        .mock("GET", FEED_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", record("2025-05-10T20:00:00+02:00", "alt")))
        .create_async()
        .await;

    let client = ScheduleClient::new(&server.url()).unwrap();
    let feed = ScheduleFeed::new(client);
    let mut rx = feed.subscribe();

    match wait_terminal(&mut rx).await {
        UiState::Success(p) => assert_eq!(p[0].title, "alt"),
        other => panic!("expected Success, got {:?}", other),
    }
    first.assert_async().await;

    // Mocks registered later take precedence, so the refresh sees new data.
    let _second = server
        .mock("GET", FEED_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", record("2025-05-11T20:00:00+02:00", "neu")))
        .create_async()
        .await;

    feed.refresh().await.unwrap();

    match rx.borrow_and_update().clone() {
        UiState::Success(p) => {
            assert_eq!(p.len(), 1);
            assert_eq!(p[0].title, "neu");
        }
        other => panic!("expected Success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_refresh_moves_through_loading_to_one_terminal_state() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", FEED_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .expect_at_least(2)
        .create_async()
        .await;

    let client = ScheduleClient::new(&server.url()).unwrap();
    let feed = ScheduleFeed::new(client);
    let mut rx = feed.subscribe();
    wait_terminal(&mut rx).await;

    // Loading is published synchronously, before the fetch task runs.
    let handle = feed.refresh();
    assert_eq!(*rx.borrow_and_update(), UiState::Loading);

    handle.await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert!(
        matches!(state, UiState::Success(_) | UiState::Error(_)),
        "refresh must end in exactly one terminal variant"
    );
}
