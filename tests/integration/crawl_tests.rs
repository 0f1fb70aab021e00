//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end over real HTTP.

use ripple_crawl::config::{Config, CrawlerConfig, HttpConfig, OutputConfig, TlsMode};
use ripple_crawl::crawler::{crawl, Coordinator, HttpFetcher};
use ripple_crawl::output::format_text_report;
use ripple_crawl::state::FailureKind;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given budget and concurrency
fn create_test_config(max_pages: usize, concurrency: usize) -> Config {
    Config {
        crawler: CrawlerConfig {
            max_pages,
            concurrency,
        },
        http: HttpConfig {
            user_agent: "TestBot/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
            max_redirects: 5,
            tls: TlsMode::Verify,
        },
        output: OutputConfig::default(),
    }
}

fn html_page(links: &[&str]) -> ResponseTemplate {
    let anchors: String = links
        .iter()
        .map(|l| format!(r#"<a href="{l}">{l}</a>"#))
        .collect();
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{anchors}</body></html>"))
        .insert_header("content-type", "text/html")
}

/// Mounts a page that must be fetched exactly `times` times
async fn mount_page(server: &MockServer, page: &str, links: &[&str], times: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html_page(links))
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_visits_each_page_once() {
    let server = MockServer::start().await;

    // A links to B and C, B links to C and back to A
    mount_page(&server, "/", &["/b", "/c"], 1).await;
    mount_page(&server, "/b", &["/c", "/"], 1).await;
    mount_page(&server, "/c", &[], 1).await;

    let report = crawl(&format!("{}/", server.uri()), &create_test_config(20, 1))
        .await
        .unwrap();

    assert_eq!(report.visited.len(), 3);
    assert_eq!(report.pages.len(), 3);
    assert_eq!(report.succeeded().count(), 3);
    assert_eq!(report.frontier_remaining, 0);
    // MockServer verifies the `expect(1)` counts on drop
}

#[tokio::test]
async fn test_budget_limits_fetches() {
    let server = MockServer::start().await;

    mount_page(&server, "/", &["/1", "/2", "/3", "/4", "/5"], 1).await;
    Mock::given(method("GET"))
        .respond_with(html_page(&["/"]))
        .mount(&server)
        .await;

    let report = crawl(&format!("{}/", server.uri()), &create_test_config(3, 1))
        .await
        .unwrap();

    assert_eq!(report.visited.len(), 3);
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
    assert!(report.frontier_remaining > 0);
}

#[tokio::test]
async fn test_failures_are_absorbed() {
    let server = MockServer::start().await;

    mount_page(&server, "/", &["/missing", "/error", "/binary", "/ok"], 1).await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/binary"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
        .expect(1)
        .mount(&server)
        .await;
    // /ok links back to the failed pages; they must not be retried
    mount_page(&server, "/ok", &["/missing", "/error", "/binary"], 1).await;

    let report = crawl(&format!("{}/", server.uri()), &create_test_config(20, 1))
        .await
        .unwrap();

    assert_eq!(report.visited.len(), 5);
    assert_eq!(report.succeeded().count(), 2);
    assert_eq!(report.failed().count(), 3);

    let stats = report.stats();
    assert_eq!(stats.failures_by_kind.get(&FailureKind::Protocol), Some(&2));
    assert_eq!(stats.failures_by_kind.get(&FailureKind::Decode), Some(&1));

    let text = format_text_report(&report);
    assert!(text.contains(&format!("{}/missing", server.uri())));
}

#[tokio::test]
async fn test_unreachable_start_url_terminates() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let report = crawl(
        &format!("http://127.0.0.1:{port}/"),
        &create_test_config(10, 1),
    )
    .await
    .unwrap();

    assert_eq!(report.visited.len(), 1);
    assert_eq!(
        report.pages[0].outcome.failure_kind(),
        Some(FailureKind::Network)
    );
    assert_eq!(report.frontier_remaining, 0);
}

#[tokio::test]
async fn test_off_site_and_non_http_links_handled() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<a href="mailto:x@y.com">m</a><a href="javascript:void(0)">j</a>
               <a href="ftp://files.example.com/">f</a><a href="/next">n</a>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/next", &[], 1).await;

    let report = crawl(&format!("{}/", server.uri()), &create_test_config(10, 1))
        .await
        .unwrap();

    assert_eq!(report.visited.len(), 2);
}

#[tokio::test]
async fn test_concurrent_crawl_matches_sequential() {
    let server = MockServer::start().await;

    let children: Vec<String> = (0..8).map(|i| format!("/p{i}")).collect();
    let child_refs: Vec<&str> = children.iter().map(String::as_str).collect();
    mount_page(&server, "/", &child_refs, 1).await;
    for child in &children {
        mount_page(&server, child, &["/", "/p0", "/p7"], 1).await;
    }

    let report = crawl(&format!("{}/", server.uri()), &create_test_config(50, 4))
        .await
        .unwrap();

    assert_eq!(report.visited.len(), 9);
    assert_eq!(report.succeeded().count(), 9);
}

#[tokio::test]
async fn test_invalid_start_url_is_an_error() {
    assert!(crawl("mailto:x@y.com", &create_test_config(10, 1))
        .await
        .is_err());
    assert!(crawl("not a url", &create_test_config(10, 1)).await.is_err());
}

#[tokio::test]
async fn test_coordinator_with_http_fetcher() {
    let server = MockServer::start().await;
    mount_page(&server, "/", &["/a"], 1).await;
    mount_page(&server, "/a", &[], 1).await;

    let config = create_test_config(10, 1);
    let fetcher = HttpFetcher::from_config(&config.http).unwrap();
    let start = url::Url::parse(&format!("{}/", server.uri())).unwrap();

    let report = Coordinator::new(start.clone(), 10, fetcher)
        .run()
        .await
        .unwrap();

    assert!(report.was_visited(&start));
    assert_eq!(report.pages[0].url, start);
    assert_eq!(report.pages[1].order, 1);
}
