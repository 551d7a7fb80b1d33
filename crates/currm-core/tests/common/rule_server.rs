//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves fixed responses per request path. Responds to HEAD with headers
//! only and to GET with headers and body. Counts requests by method so tests
//! can assert which probes were issued.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    pub last_modified: Option<String>,
    /// Pause before sending the response.
    pub delay: Option<Duration>,
}

impl Route {
    pub fn ok(body: &[u8]) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
            last_modified: None,
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            last_modified: None,
            delay: None,
        }
    }

    pub fn last_modified(mut self, value: &str) -> Self {
        self.last_modified = Some(value.to_string());
        self
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Default)]
pub struct Counters {
    pub gets: AtomicUsize,
    pub heads: AtomicUsize,
}

impl Counters {
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn heads(&self) -> usize {
        self.heads.load(Ordering::SeqCst)
    }
}

pub struct RuleServer {
    pub base_url: String,
    pub counters: Arc<Counters>,
}

impl RuleServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Starts a server in a background thread. Unknown paths return 404. The
/// server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> RuleServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (format!("/{}", p.trim_start_matches('/')), r))
            .collect(),
    );
    let counters = Arc::new(Counters::default());
    let server_counters = Arc::clone(&counters);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let counters = Arc::clone(&server_counters);
            thread::spawn(move || handle(stream, &routes, &counters));
        }
    });
    RuleServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        counters,
    }
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<String, Route>, counters: &Counters) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    let path = path.split('?').next().unwrap_or(path);

    let is_head = method.eq_ignore_ascii_case("HEAD");
    if is_head {
        counters.heads.fetch_add(1, Ordering::SeqCst);
    } else if method.eq_ignore_ascii_case("GET") {
        counters.gets.fetch_add(1, Ordering::SeqCst);
    } else {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let not_found = Route::status(404);
    let route = routes.get(path).unwrap_or(&not_found);
    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }
    let last_modified = route
        .last_modified
        .as_deref()
        .map(|v| format!("Last-Modified: {}\r\n", v))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\n{}Connection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.body.len(),
        last_modified
    );
    let _ = stream.write_all(response.as_bytes());
    if !is_head {
        let _ = stream.write_all(&route.body);
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A URL on a port nothing listens on.
pub fn closed_port_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/{}", port, path.trim_start_matches('/'))
}
