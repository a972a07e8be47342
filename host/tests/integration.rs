//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives both entry points
//! over real HTTP through `UreqTransport`. Validates that request building,
//! transport, and response parsing line up with an actual server.

use std::net::SocketAddr;

use apod_core::{ApodFetcher, Transport, DEMO_KEY};
use nasa_apod::{mcp_nasa_today_apod, ApiError, ApodConfig, NasaMcpClient, UreqTransport};

/// Start the mock server on a background thread and return its address.
fn spawn_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn config_for(addr: SocketAddr) -> ApodConfig {
    ApodConfig {
        apod_endpoint: format!("http://{addr}/planetary/apod"),
        proxy_base_url: format!("http://{addr}"),
        ..ApodConfig::default()
    }
}

/// An address nothing is listening on.
fn dead_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

#[test]
fn today_tool_formats_live_response() {
    let addr = spawn_mock_server();
    let text = mcp_nasa_today_apod(&config_for(addr), "today's astronomy picture", None).unwrap();

    assert!(text.contains("Title: Moon"), "{text}");
    assert!(text.contains("Date: 2024-01-01"), "{text}");
    assert!(
        text.contains("Image: https://apod.nasa.gov/apod/image/2401/moon_hd.jpg"),
        "{text}"
    );
    assert!(text.contains("Description: A full moon rises over the horizon."), "{text}");
}

#[test]
fn rejected_key_becomes_error_record() {
    let addr = spawn_mock_server();
    let fetcher = ApodFetcher::new(&format!("http://{addr}/planetary/apod"));
    let data = fetcher.fetch(&UreqTransport::new(), "");

    assert_eq!(data.len(), 1);
    let msg = data["error"].as_str().unwrap();
    assert!(msg.starts_with("Error fetching NASA data"), "{msg}");
    assert!(msg.contains("403"), "{msg}");
}

#[test]
fn empty_configured_key_falls_back_to_demo_key() {
    let addr = spawn_mock_server();
    let config = ApodConfig {
        api_key: String::new(),
        ..config_for(addr)
    };
    let text = mcp_nasa_today_apod(&config, "", None).unwrap();
    assert!(text.contains("Title: Moon"), "{text}");
}

#[test]
fn today_tool_reports_unreachable_host_as_text() {
    let config = ApodConfig {
        apod_endpoint: format!("http://{}/planetary/apod", dead_addr()),
        ..ApodConfig::default()
    };
    let text = mcp_nasa_today_apod(&config, "", Some("explicit")).unwrap();
    assert!(text.starts_with("Error fetching NASA data: "), "{text}");
}

#[test]
fn api_key_is_sent_as_query_parameter() {
    let addr = spawn_mock_server();
    let transport = UreqTransport::new();
    let fetcher = ApodFetcher::new(&format!("http://{addr}/planetary/apod"));

    let request = fetcher.build_request(DEMO_KEY);
    let response = transport.execute(&request).unwrap();
    assert_eq!(response.status, 200);

    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["title"], "Moon");
}

#[test]
fn proxy_client_lifecycle() {
    let addr = spawn_mock_server();
    let client = NasaMcpClient::from_config(&config_for(addr));

    // Step 1: today's record.
    let today = client.get_apod(None).unwrap();
    assert_eq!(today.date, "2024-01-01");
    assert_eq!(today.image_url(), "https://apod.nasa.gov/apod/image/2401/moon_hd.jpg");
    assert_eq!(today.copyright.as_deref(), Some("Jane Doe"));

    // Step 2: a specific date without an HD link.
    let first = client.get_apod(Some("1995-06-16")).unwrap();
    assert_eq!(first.title, "Neutron Star Earth");
    assert!(first.hdurl.is_none());
    assert_eq!(first.image_url(), "https://apod.nasa.gov/apod/image/e_lens.gif");

    // Step 3: a date the proxy has nothing for.
    let err = client.get_apod(Some("1990-01-01")).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 4: malformed date is rejected locally.
    let err = client.get_apod(Some("2024-13-40")).unwrap_err();
    assert!(matches!(err, ApiError::InvalidDate(_)));
}

#[test]
fn proxy_client_surfaces_transport_failure() {
    let client = NasaMcpClient::new(&format!("http://{}", dead_addr()));
    let err = client.get_apod(None).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
