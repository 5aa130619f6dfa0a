//! Minimal HTTP/1.1 front end over a blocking TCP listener.
//!
//! Strictly sequential: one connection carries one request and is handled
//! to completion before the next accept, so the engines never run
//! concurrently and no locking is needed. Every response closes the
//! connection.
//!
//! Routes
//! - `GET /` or `/index.html`: the embedded browser page.
//! - `POST /calculate_survey`: `TraverseRequest` JSON in, `TraverseResponse` out.
//! - `POST /calculate_matrix`: `MatrixRequest` JSON in, `MatrixResponse` out
//!   (per-operation errors ride inside the 200 response).
//! - malformed body or rejected request: 400 with `{"error": ...}`;
//!   anything else: 404 with `{"error": "invalid endpoint"}`.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};

use anyhow::{Context, Result};
use serde_json::json;

use fieldbook::api::{run_matrix, run_traverse};

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Inputs are tens of floats; anything bigger than this is not ours.
const MAX_BODY_BYTES: usize = 1 << 20;

pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind to `host:port`, walking upward one port at a time while the
    /// requested one is busy.
    pub fn bind(host: &str, port: u16) -> Result<Self> {
        let mut candidate = port;
        loop {
            match TcpListener::bind((host, candidate)) {
                Ok(listener) => {
                    if candidate != port {
                        tracing::warn!(requested = port, bound = candidate, "port was busy");
                    }
                    tracing::info!(host, port = candidate, "listening");
                    return Ok(Self { listener });
                }
                Err(e) if e.kind() == std::io::ErrorKind::AddrInUse && candidate < u16::MAX => {
                    candidate += 1;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("binding {}:{}", host, candidate))
                }
            }
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().context("reading bound address")
    }

    /// Accept loop. A failure on one connection is logged and never tears
    /// down the listener.
    pub fn run(self) -> Result<()> {
        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = handle_connection(stream) {
                        tracing::warn!(error = %e, "connection failed");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "accept failed"),
            }
        }
        Ok(())
    }
}

struct Response {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl Response {
    fn html(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.to_string(),
        }
    }

    fn json(status: u16, body: String) -> Self {
        Self {
            status,
            content_type: "application/json",
            body,
        }
    }

    fn error(status: u16, message: &str) -> Self {
        Self::json(status, json!({ "error": message }).to_string())
    }
}

fn handle_connection(stream: TcpStream) -> Result<()> {
    let peer = stream.peer_addr().context("reading peer address")?;
    let mut reader = BufReader::new(stream.try_clone().context("cloning stream")?);

    let response = match read_request(&mut reader) {
        Ok((method, path, body)) => {
            let response = route(&method, &path, &body);
            tracing::info!(%peer, %method, %path, status = response.status, "request");
            response
        }
        Err(e) => {
            tracing::warn!(%peer, error = %e, "bad request");
            Response::error(400, &e.to_string())
        }
    };
    write_response(stream, &response)
}

/// Read one request: the request line, the headers, and a
/// `Content-Length`-delimited body.
fn read_request(reader: &mut BufReader<TcpStream>) -> Result<(String, String, Vec<u8>)> {
    let mut request_line = String::new();
    reader
        .read_line(&mut request_line)
        .context("reading request line")?;
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        anyhow::bail!("malformed request line");
    };
    let method = method.to_string();
    let path = path.to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).context("reading header")?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().context("bad Content-Length")?;
            }
        }
    }
    if content_length > MAX_BODY_BYTES {
        anyhow::bail!("request body too large");
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).context("reading body")?;
    Ok((method, path, body))
}

/// Dispatch one parsed request. Pure apart from the engines, so the route
/// table is testable without a socket.
fn route(method: &str, path: &str, body: &[u8]) -> Response {
    match (method, path) {
        ("GET", "/") | ("GET", "/index.html") => Response::html(INDEX_HTML),
        ("POST", "/calculate_survey") => match serde_json::from_slice(body) {
            Ok(req) => match run_traverse(&req) {
                Ok(resp) => match serde_json::to_string(&resp) {
                    Ok(json) => Response::json(200, json),
                    Err(e) => Response::error(500, &e.to_string()),
                },
                Err(e) => Response::error(400, &e.to_string()),
            },
            Err(e) => Response::error(400, &format!("invalid survey request: {}", e)),
        },
        ("POST", "/calculate_matrix") => match serde_json::from_slice(body) {
            Ok(req) => match run_matrix(&req) {
                Ok(resp) => match serde_json::to_string(&resp) {
                    Ok(json) => Response::json(200, json),
                    Err(e) => Response::error(500, &e.to_string()),
                },
                Err(e) => Response::error(400, &e.to_string()),
            },
            Err(e) => Response::error(400, &format!("invalid matrix request: {}", e)),
        },
        _ => Response::error(404, "invalid endpoint"),
    }
}

fn write_response(mut stream: TcpStream, response: &Response) -> Result<()> {
    let reason = match response.status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.content_type,
        response.body.len()
    )
    .context("writing response head")?;
    stream
        .write_all(response.body.as_bytes())
        .context("writing response body")?;
    stream.flush().context("flushing response")?;
    Ok(())
}
