#![allow(dead_code)]

use crossword_import_core::source::PuzzleResponse;
use serde_json::{json, Value};

/// A 2x2 puzzle: labelled start, block, plain cell, circled cell.
pub fn two_by_two_json() -> Value {
    json!({
        "body": [{
            "dimensions": {"width": 2, "height": 2},
            "cells": [
                {"answer": "A", "label": "1", "type": 1},
                {},
                {"answer": "B", "type": 1},
                {"answer": "C", "type": 2}
            ],
            "clues": [
                {"label": "1", "direction": "Across", "text": [{"plain": "Letter one"}]},
                {"label": "1", "direction": "Down", "text": [{"plain": "First two"}]}
            ]
        }],
        "copyright": "2024, The Publisher",
        "relatedContent": {"url": "https://example.com/wordplay"},
        "editor": "Ed Itor",
        "constructors": ["Ann", "Bob"],
        "publicationDate": "2024-01-31"
    })
}

pub fn response_from(value: Value) -> PuzzleResponse {
    serde_json::from_value(value).expect("fixture deserializes")
}

pub fn two_by_two() -> PuzzleResponse {
    response_from(two_by_two_json())
}

/// Serves exactly one HTTP exchange on a loopback port.
///
/// Returns the base URL and a handle resolving to the raw request text.
pub async fn serve_once(
    status_line: &'static str,
    body: String,
) -> (String, tokio::task::JoinHandle<String>) {
    use tokio::io::AsyncWriteExt;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;
        let reply = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(reply.as_bytes()).await.expect("write reply");
        let _ = stream.shutdown().await;
        request
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    use tokio::io::AsyncReadExt;

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if request_complete(&buf) {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&buf[..head_end]).to_ascii_lowercase();
    let body = &buf[head_end + 4..];

    if head.contains("transfer-encoding: chunked") {
        return body.ends_with(b"0\r\n\r\n");
    }
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= length
}

/// Value of a text part in a raw multipart request.
pub fn form_field<'a>(request: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("name=\"{name}\"");
    let after_name = &request[request.find(&marker)? + marker.len()..];
    let value_start = after_name.find("\r\n\r\n")? + 4;
    let value = &after_name[value_start..];
    Some(&value[..value.find("\r\n--")?])
}
