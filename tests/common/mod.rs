//! A one-shot HTTP server standing in for the Chronicler backend.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// A raw request captured by [`spawn_backend`].
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Serves exactly one request with the given status line and body.
///
/// Returns the base URL and a handle yielding the captured request.
pub fn spawn_backend(status: &str, body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });

    (base_url, handle)
}

fn read_request(stream: &mut impl Read) -> CapturedRequest {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).unwrap();
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buffer);
        if let Some(end) = text.find("\r\n\r\n") {
            let head = &text[..end];
            let length = content_length(head);
            if buffer.len() >= end + 4 + length {
                return CapturedRequest {
                    head: head.to_string(),
                    body: String::from_utf8_lossy(&buffer[end + 4..end + 4 + length])
                        .into_owned(),
                };
            }
        }
    }

    panic!("connection closed before a full request arrived");
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .map_or(0, |(_, value)| value.trim().parse().unwrap())
}
