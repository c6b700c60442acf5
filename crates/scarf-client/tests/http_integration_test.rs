//! End-to-end tests against a local HTTP server.

use std::io::Read;
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use scarf_client::{DispatchOutcome, EventDispatcher};
use scarf_core::json::encode_properties;
use scarf_core::traits::{Cancellable, CancellationToken};
use scarf_core::{Environment, Properties};
use tiny_http::{Header, Response, Server};

/// What the server saw for one request.
#[derive(Debug)]
struct Received {
    method: String,
    body: String,
    content_type: Option<String>,
    user_agent: Option<String>,
}

fn header(req: &tiny_http::Request, name: &'static str) -> Option<String> {
    req.headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

/// Serve `count` requests with `status`, reporting each one on the channel.
fn serve(status: u16, count: usize) -> (String, mpsc::Receiver<Received>, thread::JoinHandle<()>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        for _ in 0..count {
            let Ok(mut req) = server.recv() else {
                return;
            };
            let mut body = String::new();
            req.as_reader().read_to_string(&mut body).unwrap();
            let received = Received {
                method: req.method().to_string(),
                body,
                content_type: header(&req, "Content-Type"),
                user_agent: header(&req, "User-Agent"),
            };
            let text_plain = Header::from_bytes(&b"Content-Type"[..], &b"text/plain"[..]).unwrap();
            let _ = req.respond(
                Response::from_string("ok")
                    .with_status_code(status)
                    .with_header(text_plain),
            );
            let _ = tx.send(received);
        }
    });

    (format!("http://127.0.0.1:{port}/"), rx, handle)
}

fn event() -> Properties {
    Properties::new()
        .with("event", "package_download")
        .with("package", "scarf")
        .with("version", "1.0.0")
}

#[test]
fn sends_event_successfully() {
    let (url, rx, handle) = serve(200, 1);
    let dispatcher = EventDispatcher::builder(&url)
        .timeout_secs(2.0)
        .environment(Environment::empty())
        .build()
        .unwrap();

    let props = event();
    assert!(dispatcher.send(&props), "expected true for 2xx response");

    let received = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(received.method, "POST");
    assert_eq!(received.body, encode_properties(&props));
    assert_eq!(received.content_type.as_deref(), Some("application/json"));
    assert_eq!(received.user_agent.as_deref(), Some(dispatcher.user_agent()));
    handle.join().unwrap();
}

#[test]
fn server_error_returns_false() {
    let (url, rx, handle) = serve(503, 1);
    let dispatcher = EventDispatcher::builder(&url)
        .timeout_secs(2.0)
        .environment(Environment::empty())
        .build()
        .unwrap();

    assert_eq!(
        dispatcher.dispatch(Some(&event()), Duration::from_secs(2), &CancellationToken::new()),
        DispatchOutcome::Rejected { status: 503 }
    );
    assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok());
    handle.join().unwrap();
}

#[test]
fn refused_connection_returns_false() {
    // Bind then drop to get a port nobody is listening on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dispatcher = EventDispatcher::builder(format!("http://127.0.0.1:{port}/"))
        .timeout_secs(1.0)
        .environment(Environment::empty())
        .build()
        .unwrap();

    let outcome = dispatcher.dispatch(Some(&event()), Duration::from_secs(1), &CancellationToken::new());
    assert!(matches!(outcome, DispatchOutcome::TransportFailed { .. }), "{outcome:?}");
}

#[test]
fn unresponsive_server_times_out() {
    // Accepts the connection but never answers.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let hold = thread::spawn(move || {
        let conn = listener.accept();
        thread::sleep(Duration::from_secs(2));
        drop(conn);
    });

    let dispatcher = EventDispatcher::builder(format!("http://127.0.0.1:{port}/"))
        .environment(Environment::empty())
        .build()
        .unwrap();

    let started = std::time::Instant::now();
    assert!(!dispatcher.send_with_timeout(&event(), 0.2));
    assert!(started.elapsed() < Duration::from_secs(2));
    hold.join().unwrap();
}

#[test]
fn cancel_while_server_is_slow_returns_false() {
    let server = Server::http("127.0.0.1:0").unwrap();
    let port = server.server_addr().to_ip().unwrap().port();
    let slow = thread::spawn(move || {
        if let Ok(req) = server.recv() {
            thread::sleep(Duration::from_millis(600));
            let _ = req.respond(Response::from_string("ok").with_status_code(200));
        }
    });

    let dispatcher = EventDispatcher::builder(format!("http://127.0.0.1:{port}/"))
        .environment(Environment::empty())
        .build()
        .unwrap();

    let token = CancellationToken::new();
    let canceller = {
        let token = token.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(100));
            token.cancel();
        })
    };

    let started = std::time::Instant::now();
    assert!(!dispatcher.send_cancellable(&event(), 5.0, &token));
    assert!(started.elapsed() < Duration::from_millis(500));
    assert!(token.is_cancelled());
    canceller.join().unwrap();
    slow.join().unwrap();
}

#[test]
fn opted_out_dispatcher_never_connects() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let port = listener.local_addr().unwrap().port();

    let env: Environment = [("DO_NOT_TRACK", "1")].into_iter().collect();
    let dispatcher = EventDispatcher::builder(format!("http://127.0.0.1:{port}/"))
        .timeout_secs(0.1)
        .environment(env)
        .build()
        .unwrap();

    assert!(!dispatcher.send(&Properties::new()));
    assert!(listener.accept().is_err(), "no connection should have been attempted");
}
