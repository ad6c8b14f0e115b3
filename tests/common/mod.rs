//! Shared helpers for the CLI scenarios: a fake Solr speaking canned
//! HTTP/1.1 responses and a runner for the compiled probe binary.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::thread;

/// Canned reply for one of the fake server's two endpoints.
#[allow(dead_code)]
#[derive(Clone, Copy)]
pub enum Reply {
    /// 200 with a JSON body.
    Json(&'static str),
    /// A bare status line with an empty body.
    Status(u16),
    /// 301 with a `Location` header pointing at `target`.
    Redirect(&'static str),
    /// Close the connection without writing anything.
    Drop,
}

/// Discovery payload reporting a single core named `gettingstarted`.
#[allow(dead_code)]
pub const ONE_CORE: &str = concat!(
    r#"{"responseHeader":{"status":0,"QTime":2},"#,
    r#""status":{"gettingstarted":{"name":"gettingstarted","instanceDir":"/var/solr/data/gettingstarted"}}}"#
);

/// Discovery payload reporting no cores at all.
#[allow(dead_code)]
pub const NO_CORES: &str = r#"{"responseHeader":{"status":0,"QTime":2},"status":{}}"#;

/// Select payload for an empty index; the probe only needs well-formed json.
#[allow(dead_code)]
pub const EMPTY_SELECT: &str = concat!(
    r#"{"responseHeader":{"status":0,"QTime":1},"#,
    r#""response":{"numFound":0,"start":0,"docs":[]}}"#
);

/// Start a fake Solr answering `/admin/cores` requests with `cores` and
/// anything else with `select`. Serves until the test process exits.
#[allow(dead_code)]
pub fn fake_solr(cores: Reply, select: Reply) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake solr");
    let addr = listener.local_addr().expect("fake solr address");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            thread::spawn(move || serve(stream, cores, select));
        }
    });
    addr
}

/// A local port with nothing listening behind it.
#[allow(dead_code)]
pub fn refused_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind placeholder");
    listener.local_addr().expect("placeholder address")
}

fn serve(mut stream: TcpStream, cores: Reply, select: Reply) {
    let Some(request) = read_head(&mut stream) else {
        return;
    };
    let reply = if request.contains("/admin/cores") {
        cores
    } else {
        select
    };
    match reply {
        Reply::Json(body) => {
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Reply::Status(code) => {
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                code,
                reason(code)
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Reply::Redirect(target) => {
            let response = format!(
                "HTTP/1.1 301 Moved Permanently\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                target
            );
            let _ = stream.write_all(response.as_bytes());
        }
        Reply::Drop => {}
    }
}

fn reason(code: u16) -> &'static str {
    match code {
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Error",
    }
}

fn read_head(stream: &mut TcpStream) -> Option<String> {
    let mut buffer = [0u8; 2048];
    let mut seen = Vec::new();
    loop {
        match stream.read(&mut buffer) {
            Ok(0) => return None,
            Ok(read) => {
                seen.extend_from_slice(&buffer[..read]);
                if seen.windows(4).any(|window| window == b"\r\n\r\n") {
                    return Some(String::from_utf8_lossy(&seen).into_owned());
                }
            }
            Err(_) => return None,
        }
    }
}

/// Run the probe binary against `addr` with the given metric state and no
/// credentials.
#[allow(dead_code)]
pub fn run_probe_against(addr: SocketAddr, metric_state: &str) -> Output {
    run_probe(&[
        metric_state,
        &addr.ip().to_string(),
        &addr.port().to_string(),
        "solr",
        "",
        "",
    ])
}

/// Run the probe binary with an arbitrary argument vector.
pub fn run_probe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solrbox"))
        .args(args)
        .output()
        .expect("run solrbox")
}

/// Stdout decoded and split into lines.
pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
