#![allow(dead_code)]

use std::io::{BufRead as _, BufReader, Write as _};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const SINGLE_READING: &str =
    r#"[{"Id":"1","Temperature":21.5,"Humidity":40.2,"Timestamp":"2024-01-01T00:00:00"}]"#;

/// HTTP server on 127.0.0.1 answering one connection per canned response,
/// in order, and recording each request target.
pub struct CannedServer {
    pub base_url: String,
    handle: JoinHandle<Vec<String>>,
}

impl CannedServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let mut targets = Vec::new();
            for (status, body) in responses {
                let (stream, _) = listener.accept().expect("accept connection");
                targets.push(respond(stream, status, &body));
            }
            targets
        });

        Self { base_url, handle }
    }

    pub fn single(status: u16, body: &str) -> Self {
        Self::start(vec![(status, body.to_string())])
    }

    /// Request targets seen, e.g. `"/dht"`.
    pub fn finish(self) -> Vec<String> {
        self.handle.join().expect("server thread")
    }
}

/// Accepts one connection and never answers it.
pub fn start_silent_server(hold_for: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

    thread::spawn(move || {
        if let Ok((_stream, _)) = listener.accept() {
            thread::sleep(hold_for);
        }
    });

    base_url
}

/// Base URL of a port nothing listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

fn respond(stream: TcpStream, status: u16, body: &str) -> String {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("read request line");
    loop {
        let mut header = String::new();
        let n = reader.read_line(&mut header).expect("read header");
        if n == 0 || header == "\r\n" {
            break;
        }
    }

    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();

    let mut stream = stream;
    write!(
        stream,
        "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .expect("write response");
    stream.flush().expect("flush response");

    target
}
