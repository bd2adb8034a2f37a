use filestore::{FileStoreClient, FileStoreError, ListFilters, TRACE_HEADER};
use planrun_core::TraceId;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_files_sends_filters_and_trace_header() {
    let server = MockServer::start().await;
    let trace = TraceId::new();

    Mock::given(method("GET"))
        .and(path("/list_files"))
        .and(query_param("extensions", ".txt,.md"))
        .and(query_param("max_items", "2"))
        .and(header(TRACE_HEADER, trace.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": ["a.txt", "notes/b.md"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = FileStoreClient::new(server.uri());
    let filters = ListFilters::default()
        .with_extensions(".txt,.md")
        .with_max_items(2);

    let listing = client.list_files(&filters, &trace).await.unwrap();
    assert_eq!(listing.files, vec!["a.txt", "notes/b.md"]);
}

#[tokio::test]
async fn list_files_omits_unset_filters() {
    let server = MockServer::start().await;
    let trace = TraceId::new();

    Mock::given(method("GET"))
        .and(path("/list_files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"files": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = FileStoreClient::new(server.uri());
    let listing = client
        .list_files(&ListFilters::default(), &trace)
        .await
        .unwrap();

    assert!(listing.files.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query().unwrap_or("").is_empty());
}

#[tokio::test]
async fn read_file_decodes_content() {
    let server = MockServer::start().await;
    let trace = TraceId::new();

    Mock::given(method("GET"))
        .and(path("/read_file"))
        .and(query_param("file_path", "a.txt"))
        .and(header(TRACE_HEADER, trace.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "hello"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = FileStoreClient::new(server.uri());
    let body = client.read_file("a.txt", &trace).await.unwrap();
    assert_eq!(body.content, "hello");
}

#[tokio::test]
async fn read_file_missing_maps_to_api_error() {
    let server = MockServer::start().await;
    let trace = TraceId::new();

    Mock::given(method("GET"))
        .and(path("/read_file"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "not_found",
            "message": "File not found"
        })))
        .mount(&server)
        .await;

    let client = FileStoreClient::new(server.uri());
    let err = client.read_file("ghost.txt", &trace).await.unwrap_err();

    match err {
        FileStoreError::Api { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("not_found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn write_file_sends_body_and_query() {
    let server = MockServer::start().await;
    let trace = TraceId::new();

    Mock::given(method("POST"))
        .and(path("/write_file"))
        .and(query_param("file_path", "a.txt"))
        .and(body_json(json!({"content": "hi"})))
        .and(header(TRACE_HEADER, trace.as_str()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = FileStoreClient::new(server.uri());
    client.write_file("a.txt", "hi", &trace).await.unwrap();
}

#[tokio::test]
async fn unreachable_service_maps_to_request_error() {
    // Bind and immediately drop a listener so the port refuses connections.
    // (A dropped `MockServer::start()` handle returns the server to wiremock's
    // pool with the listener still alive, so its port keeps answering 404.)
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = FileStoreClient::new(uri);
    let err = client
        .read_file("a.txt", &TraceId::new())
        .await
        .unwrap_err();

    assert!(matches!(err, FileStoreError::Request(_)));
    assert_eq!(err.status(), None);
}
