//! Local preview server.
//!
//! Serves one pre-rendered document from a background thread. Each connection
//! gets its own short-lived thread and a read deadline, so a client that
//! connects and never sends a request cannot hold up anyone else. The page
//! never changes after startup.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

/// How long a connection may take to send its request head.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// A bound listener plus the thread accepting on it.
pub struct PreviewServer {
    addr: SocketAddr,
    handle: thread::JoinHandle<()>,
}

impl PreviewServer {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Block until the accept loop ends (it only ends if the listener fails).
    pub fn wait(self) {
        if self.handle.join().is_err() {
            warn!("preview server thread panicked");
        }
    }
}

/// Bind `bind_addr` and start serving `html` on `/` and `/index.html`.
pub fn start_preview_server(bind_addr: &str, html: String) -> io::Result<PreviewServer> {
    let listener = TcpListener::bind(bind_addr)?;
    let addr = listener.local_addr()?;
    let page: Arc<str> = Arc::from(html);

    let handle = thread::spawn(move || {
        for stream in listener.incoming() {
            match stream {
                Ok(mut stream) => {
                    let page = Arc::clone(&page);
                    thread::spawn(move || {
                        if let Err(e) = handle_connection(&mut stream, &page) {
                            debug!("connection error: {}", e);
                        }
                    });
                }
                Err(e) => warn!("accept failed: {}", e),
            }
        }
    });

    Ok(PreviewServer { addr, handle })
}

fn handle_connection(stream: &mut TcpStream, page: &str) -> io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    let mut reader = BufReader::new(&*stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    // Drain headers so the client sees a clean close.
    let mut header = String::new();
    while reader.read_line(&mut header)? > 0 && header.trim() != "" {
        header.clear();
    }

    let response = route(request_line.trim(), page);
    debug!("{} -> {}", request_line.trim(), response.status);
    response.write_to(stream)
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Response<'a> {
    pub status: u16,
    pub content_type: &'static str,
    pub body: &'a str,
}

impl Response<'_> {
    fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            404 => "Not Found",
            405 => "Method Not Allowed",
            _ => "Bad Request",
        }
    }

    fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        write!(
            out,
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status,
            self.reason(),
            self.content_type,
            self.body.len()
        )?;
        out.write_all(self.body.as_bytes())?;
        out.flush()
    }
}

pub(crate) fn route<'a>(request_line: &str, page: &'a str) -> Response<'a> {
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(target)) = (parts.next(), parts.next()) else {
        return text(400, "bad request\n");
    };
    if method != "GET" {
        return text(405, "method not allowed\n");
    }

    let path = target.split(['?', '#']).next().unwrap_or(target);
    match path {
        "/" | "/index.html" => Response {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: page,
        },
        _ => text(404, "not found\n"),
    }
}

fn text(status: u16, body: &'static str) -> Response<'static> {
    Response {
        status,
        content_type: "text/plain; charset=utf-8",
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    const PAGE: &str = "<!DOCTYPE html>\n<html><body>hello</body></html>";

    #[test]
    fn routes_root_and_index() {
        for line in ["GET / HTTP/1.1", "GET /index.html HTTP/1.1", "GET /?ref=x HTTP/1.0"] {
            let response = route(line, PAGE);
            assert_eq!(response.status, 200, "{line}");
            assert_eq!(response.body, PAGE);
            assert!(response.content_type.starts_with("text/html"));
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(route("GET /projects HTTP/1.1", PAGE).status, 404);
        assert_eq!(route("GET /favicon.ico HTTP/1.1", PAGE).status, 404);
    }

    #[test]
    fn non_get_is_rejected() {
        assert_eq!(route("POST / HTTP/1.1", PAGE).status, 405);
        assert_eq!(route("DELETE /index.html HTTP/1.1", PAGE).status, 405);
    }

    #[test]
    fn malformed_request_line() {
        assert_eq!(route("", PAGE).status, 400);
        assert_eq!(route("GET", PAGE).status, 400);
    }

    #[test]
    fn response_has_exact_content_length() {
        let mut out = Vec::new();
        route("GET / HTTP/1.1", PAGE)
            .write_to(&mut out)
            .expect("write response");
        let raw = String::from_utf8(out).expect("utf8");
        assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(raw.contains(&format!("Content-Length: {}\r\n", PAGE.len())));
        assert!(raw.ends_with(PAGE));
    }

    #[test]
    fn serves_over_tcp() {
        let server = start_preview_server("127.0.0.1:0", PAGE.to_string()).expect("bind");
        assert!(server.url().starts_with("http://127.0.0.1:"));

        let mut stream = TcpStream::connect(server.addr()).expect("connect");
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .expect("send request");
        let mut raw = String::new();
        stream.read_to_string(&mut raw).expect("read response");

        assert!(raw.starts_with("HTTP/1.1 200 OK"));
        assert!(raw.contains("text/html"));
        assert!(raw.ends_with(PAGE));
    }

    #[test]
    fn idle_connection_does_not_block_other_clients() {
        let server = start_preview_server("127.0.0.1:0", PAGE.to_string()).expect("bind");

        // Connected but silent.
        let _idle = TcpStream::connect(server.addr()).expect("idle connect");

        let mut stream = TcpStream::connect(server.addr()).expect("connect");
        stream
            .set_read_timeout(Some(Duration::from_secs(3)))
            .expect("client timeout");
        stream
            .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .expect("send request");
        let mut raw = String::new();
        stream
            .read_to_string(&mut raw)
            .expect("response arrives while the idle client is still connected");

        assert!(raw.starts_with("HTTP/1.1 200 OK"));
        assert!(raw.ends_with(PAGE));
    }
}
