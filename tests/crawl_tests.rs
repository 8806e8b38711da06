//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! full crawl cycle end-to-end: traversal order, cycle termination, scope
//! enforcement, failure isolation, and search over the resulting index.

use sitegrep::crawler::Crawler;
use sitegrep::index::search;
use sitegrep::url::ScopePolicy;
use sitegrep::FetchErrorKind;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a crawler around a plain client, suitable for mock servers
fn test_crawler(max_pages: usize) -> Crawler {
    let client = reqwest::Client::builder()
        .user_agent("sitegrep-tests/1.0")
        .build()
        .expect("Failed to build client");
    Crawler::with_client(client, ScopePolicy::SameOrigin, max_pages)
}

/// Mounts an HTML page at the given path
async fn mount_page(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn start_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.uri())).expect("Failed to parse server URI")
}

#[tokio::test]
async fn test_crawl_follows_links_and_indexes_text() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><h1>Welcome!</h1>
        <a href="/about">About Us</a>
        </body></html>"#
            .to_string(),
    )
    .await;
    mount_page(
        &server,
        "/about",
        "<html><body>We make keyboards</body></html>".to_string(),
    )
    .await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    let about = format!("{}about", start);
    assert!(outcome.visited.contains(about.as_str()));
    assert_eq!(outcome.index.get(&about), Some("We make keyboards"));
    assert!(outcome.failures.is_empty());
}

#[tokio::test]
async fn test_cycle_terminates_and_visits_each_url_once() {
    let server = MockServer::start().await;

    // A -> B -> A
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/b">B</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &server,
        "/b",
        r#"<html><body><a href="/">back</a></body></html>"#.to_string(),
    )
    .await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    assert_eq!(outcome.visited.len(), 2);
    assert!(outcome.visited.contains(start.as_str()));
    assert!(outcome.visited.contains(format!("{}b", start).as_str()));
    assert_eq!(outcome.index.len(), 2);
}

#[tokio::test]
async fn test_self_link_terminates() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/loop",
        r#"<html><body><a href="/loop">Loop</a></body></html>"#.to_string(),
    )
    .await;

    let start = Url::parse(&format!("{}/loop", server.uri())).unwrap();
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    assert_eq!(outcome.visited.len(), 1);
    assert!(outcome.index.contains(start.as_str()));
}

#[tokio::test]
async fn test_other_origin_links_are_never_fetched() {
    let in_scope_server = MockServer::start().await;
    let foreign_server = MockServer::start().await;

    mount_page(
        &in_scope_server,
        "/",
        format!(
            r#"<html><body>
            <a href="{}/lure">Foreign</a>
            <a href="/local">Local</a>
            </body></html>"#,
            foreign_server.uri()
        ),
    )
    .await;
    mount_page(
        &in_scope_server,
        "/local",
        "<html><body>local page</body></html>".to_string(),
    )
    .await;

    // The foreign origin must receive zero requests
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("should not be fetched"))
        .expect(0)
        .mount(&foreign_server)
        .await;

    let start = start_url(&in_scope_server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    let foreign = format!("{}/lure", foreign_server.uri());
    assert!(!outcome.visited.contains(&foreign));
    assert!(!outcome.index.contains(&foreign));
    assert!(outcome.index.contains(format!("{}local", start).as_str()));
}

#[tokio::test]
async fn test_prefix_lookalike_host_is_out_of_scope() {
    let server = MockServer::start().await;
    let host = Url::parse(&server.uri()).unwrap().host_str().unwrap().to_string();

    // Shares a textual prefix with the scope base but is a different host
    let lookalike = format!("https://{}.evil.com/", host);
    mount_page(
        &server,
        "/",
        format!(r#"<html><body><a href="{}">Trap</a></body></html>"#, lookalike),
    )
    .await;

    let outcome = test_crawler(100).crawl(start_url(&server), None).await;

    assert_eq!(outcome.visited.len(), 1);
    assert!(!outcome.visited.contains(&lookalike));
    assert!(!outcome.index.contains(&lookalike));
}

#[tokio::test]
async fn test_duplicate_links_collapse_to_one_visit() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>
        <a href="/about">About Us</a>
        <a href="/about">About Us Again</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/about"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body>about</body></html>")
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    assert_eq!(outcome.visited.len(), 2);
    assert!(outcome.index.contains(format!("{}about", start).as_str()));
}

#[tokio::test]
async fn test_failed_fetch_does_not_abort_siblings() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>root text
        <a href="/dead">Dead</a>
        <a href="/alive">Alive</a>
        </body></html>"#
            .to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/dead"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/alive",
        "<html><body>still here</body></html>".to_string(),
    )
    .await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    // Root's own text is indexed, the sibling was still attempted
    assert!(outcome.index.contains(start.as_str()));
    assert!(outcome.index.contains(format!("{}alive", start).as_str()));
    assert!(!outcome.index.contains(format!("{}dead", start).as_str()));

    assert_eq!(outcome.failures.len(), 1);
    let failure = &outcome.failures[0];
    assert_eq!(failure.url, format!("{}dead", start));
    assert_eq!(failure.kind, FetchErrorKind::Status);
    assert!(failure.message.contains("404"));
}

#[tokio::test]
async fn test_non_html_content_is_still_indexed() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/api">API</a></body></html>"#.to_string(),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"json": true}"#)
                .insert_header("content-type", "application/json"),
        )
        .mount(&server)
        .await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    let api = format!("{}api", start);
    assert!(outcome.index.contains(&api));
    assert_eq!(outcome.index.get(&api), Some(r#"{"json": true}"#));
}

#[tokio::test]
async fn test_traversal_follows_document_order_depth_first() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/a">A</a><a href="/b">B</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &server,
        "/a",
        r#"<html><body><a href="/c">C</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(&server, "/b", "<html><body>b</body></html>".to_string()).await;
    mount_page(&server, "/c", "<html><body>c</body></html>".to_string()).await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    // Depth-first in document order: /, /a, /c, then /b
    let order: Vec<String> = outcome.index.iter().map(|(url, _)| url.to_string()).collect();
    assert_eq!(
        order,
        vec![
            start.to_string(),
            format!("{}a", start),
            format!("{}c", start),
            format!("{}b", start),
        ]
    );
}

#[tokio::test]
async fn test_max_pages_halts_discovery() {
    let server = MockServer::start().await;

    // A chain longer than the ceiling
    mount_page(
        &server,
        "/",
        r#"<html><body><a href="/p1">next</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &server,
        "/p1",
        r#"<html><body><a href="/p2">next</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(
        &server,
        "/p2",
        r#"<html><body><a href="/p3">next</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(&server, "/p3", "<html><body>end</body></html>".to_string()).await;

    let outcome = test_crawler(2).crawl(start_url(&server), None).await;

    assert_eq!(outcome.index.len(), 2);
    assert_eq!(outcome.visited.len(), 2);
}

#[tokio::test]
async fn test_explicit_scope_base_anchors_resolution() {
    let server = MockServer::start().await;

    // Start deeper in the site; relative links resolve against the scope base
    mount_page(
        &server,
        "/docs/intro",
        r#"<html><body><a href="start">Start</a></body></html>"#.to_string(),
    )
    .await;
    mount_page(&server, "/start", "<html><body>top</body></html>".to_string()).await;

    let start = Url::parse(&format!("{}/docs/intro", server.uri())).unwrap();
    let scope = start_url(&server);
    let outcome = test_crawler(100).crawl(start, Some(scope.clone())).await;

    assert!(outcome.index.contains(format!("{}start", scope).as_str()));
}

#[tokio::test]
async fn test_search_over_crawled_index() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body>category theory
        <a href="/other">Other</a>
        </body></html>"#
            .to_string(),
    )
    .await;
    mount_page(
        &server,
        "/other",
        "<html><body>KEYword in caps</body></html>".to_string(),
    )
    .await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    // Whole-word: "cat" must not match "category"
    assert!(search(&outcome.index, "cat").unwrap().is_empty());
    assert_eq!(
        search(&outcome.index, "category").unwrap(),
        vec![start.to_string()]
    );
    // Case-insensitive
    assert_eq!(
        search(&outcome.index, "keyword").unwrap(),
        vec![format!("{}other", start)]
    );
}

#[tokio::test]
async fn test_malformed_hrefs_are_skipped() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r##"<html><body>
        <a href="javascript:void(0)">JS</a>
        <a href="mailto:test@example.com">Mail</a>
        <a href="#section">Anchor</a>
        <a href="/real">Real</a>
        </body></html>"##
            .to_string(),
    )
    .await;
    mount_page(&server, "/real", "<html><body>real</body></html>".to_string()).await;

    let start = start_url(&server);
    let outcome = test_crawler(100).crawl(start.clone(), None).await;

    assert_eq!(outcome.visited.len(), 2);
    assert!(outcome.index.contains(format!("{}real", start).as_str()));
    assert!(outcome.failures.is_empty());
}
