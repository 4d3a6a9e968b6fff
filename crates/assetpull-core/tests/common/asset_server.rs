//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed map of path -> body with 200, everything else with 404, and
//! records every requested path so tests can assert what was (not) fetched.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub struct AssetServer {
    /// Base URL ending in `/`, e.g. "http://127.0.0.1:12345/imgs/".
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl AssetServer {
    /// Paths requested so far (without the `/imgs/` prefix), in arrival order.
    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server in a background thread serving `assets` under `/imgs/`.
/// The server runs until the process exits.
pub fn start(assets: Vec<(&str, Vec<u8>)>) -> AssetServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let assets: Arc<HashMap<String, Vec<u8>>> = Arc::new(
        assets
            .into_iter()
            .map(|(name, body)| (name.to_string(), body))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let assets = Arc::clone(&assets);
            let log = Arc::clone(&log);
            thread::spawn(move || handle(stream, &assets, &log));
        }
    });
    AssetServer {
        base_url: format!("http://127.0.0.1:{}/imgs/", port),
        requests,
    }
}

fn handle(mut stream: TcpStream, assets: &HashMap<String, Vec<u8>>, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream
            .write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let name = path.strip_prefix("/imgs/").unwrap_or(path).to_string();
    log.lock().unwrap().push(name.clone());

    let (status, body): (&str, &[u8]) = match assets.get(&name) {
        Some(body) => ("200 OK", body.as_slice()),
        None => ("404 Not Found", &b"not found"[..]),
    };
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
