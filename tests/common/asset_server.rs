//! Throwaway HTTP/1.1 server for integration tests.
//!
//! Each path maps to a [`Route`]. Unknown paths get 404. Every raw request head is
//! kept so tests can inspect the headers that were sent.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Route {
    Body(Vec<u8>),
    Status(u16),
    /// `302 Found` pointing at the given location.
    Redirect(String),
    /// Accepts the request and never answers.
    Hang,
    /// Announces `total` bytes, sends `prefix`, then stops.
    StallBody { total: usize, prefix: Vec<u8> },
}

pub struct AssetServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl AssetServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts the server in a background thread. It runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> AssetServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();

    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    let requests = Arc::new(Mutex::new(Vec::new()));

    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &routes, &seen));
        }
    });

    AssetServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

/// A url on a local port with nothing listening.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/logo.svg", port)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]).to_string();
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    seen.lock().unwrap().push(request);

    match routes.get(&path).cloned().unwrap_or(Route::Status(404)) {
        Route::Body(body) => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        }
        Route::Status(code) => {
            let head = format!(
                "HTTP/1.1 {} Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                code
            );
            let _ = stream.write_all(head.as_bytes());
        }
        Route::Redirect(location) => {
            let head = format!(
                "HTTP/1.1 302 Found\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                location
            );
            let _ = stream.write_all(head.as_bytes());
        }
        Route::Hang => thread::sleep(Duration::from_secs(10)),
        Route::StallBody { total, prefix } => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/svg+xml\r\nContent-Length: {}\r\n\r\n",
                total
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&prefix);
            let _ = stream.flush();
            thread::sleep(Duration::from_secs(10));
        }
    }
    let _ = stream.flush();
}
