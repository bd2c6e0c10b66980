//! PistonClient against a one-shot HTTP server on localhost

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use workpad::execution::{ExecuteRequest, ExecutionConfig, ExecutionService, PistonClient};
use workpad::language::Language;
use workpad::ExecutionError;

/// Serve exactly one request with `status` and `body`; the join handle yields
/// the request body the client sent.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/api/v2/piston", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                if key.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        reader.get_mut().write_all(response.as_bytes()).unwrap();
        String::from_utf8(request_body).unwrap()
    });
    (endpoint, handle)
}

fn service_for(endpoint: String) -> ExecutionService {
    let config = ExecutionConfig {
        endpoint,
        timeout_secs: 5,
    };
    ExecutionService::new(Arc::new(PistonClient::new(&config).unwrap()))
}

#[test]
fn successful_run_is_decoded() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"language":"python","version":"3.10.0","run":{"stdout":"hi\n","stderr":"","output":"hi\n","code":0,"signal":null}}"#,
    );
    let request = ExecuteRequest::for_source(Language::Python, Some("main.py"), "print('hi')").unwrap();
    let output = service_for(endpoint).run_blocking(&request).unwrap();

    assert!(!output.is_error);
    assert_eq!(output.exit_code, Some(0));
    assert_eq!(output.lines.first().map(String::as_str), Some("hi"));

    let sent: serde_json::Value = serde_json::from_str(&server.join().unwrap()).unwrap();
    assert_eq!(sent["language"], "python");
    assert_eq!(sent["version"], "3.10.0");
    assert_eq!(sent["files"][0]["content"], "print('hi')");
}

#[test]
fn stderr_marks_output_as_error() {
    let (endpoint, server) = serve_once(
        "200 OK",
        r#"{"run":{"stdout":"","stderr":"boom\n","output":"boom\n","code":1,"signal":null}}"#,
    );
    let request = ExecuteRequest::for_source(Language::JavaScript, None, "throw 1").unwrap();
    let output = service_for(endpoint).run_blocking(&request).unwrap();
    server.join().unwrap();

    assert!(output.is_error);
    assert_eq!(output.exit_code, Some(1));
}

#[test]
fn non_success_status_is_reported() {
    let (endpoint, server) = serve_once("400 Bad Request", r#"{"message":"runtime is unknown"}"#);
    let request = ExecuteRequest::for_source(Language::Php, None, "<?php echo 1;").unwrap();
    let err = service_for(endpoint).run_blocking(&request).unwrap_err();
    server.join().unwrap();

    match err {
        ExecutionError::Status { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("runtime is unknown"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (endpoint, server) = serve_once("200 OK", "not json");
    let request = ExecuteRequest::for_source(Language::Java, None, "class A {}").unwrap();
    let err = service_for(endpoint).run_blocking(&request).unwrap_err();
    server.join().unwrap();
    assert!(matches!(err, ExecutionError::Decode(_)));
}

#[test]
fn unreachable_service_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let request = ExecuteRequest::for_source(Language::TypeScript, None, "1").unwrap();
    let err = service_for(format!("http://127.0.0.1:{}", port))
        .run_blocking(&request)
        .unwrap_err();
    assert!(matches!(err, ExecutionError::Transport(_)));
}
