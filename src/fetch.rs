//! Fetch cycle
//!
//! One GET against the configured endpoint per cycle, parsed as a JSON
//! array of users. No retry and no cancellation; in the TUI the cycle runs
//! on a spawned thread and reports back over the event channel, where the
//! reducer's sequence check decides whether the outcome still applies.

use crate::error::{Result, UserdexError};
use crate::logging;
use crate::model::User;
use crate::state::Event;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Instant;

/// Issues fetch cycles against a fixed endpoint.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl Fetcher {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        if reqwest::Url::parse(&endpoint).is_err() {
            return Err(UserdexError::InvalidUrl(endpoint));
        }

        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| UserdexError::Transport(endpoint.clone(), e))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Perform one blocking fetch cycle.
    pub fn fetch_users(&self) -> Result<Vec<User>> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .map_err(|e| UserdexError::Transport(self.endpoint.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserdexError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| UserdexError::Transport(self.endpoint.clone(), e))?;

        let users: Vec<User> = serde_json::from_str(&body)?;
        Ok(users)
    }

    /// Run one fetch cycle on a background thread, delivering the outcome
    /// as an [`Event`] tagged with `seq`.
    pub fn spawn_cycle(&self, seq: u64, tx: Sender<Event>) {
        let fetcher = self.clone();
        thread::spawn(move || {
            let start = Instant::now();
            logging::info(
                "FETCH",
                &format!("cycle {}: GET {}", seq, fetcher.endpoint),
            );

            let event = match fetcher.fetch_users() {
                Ok(users) => {
                    logging::info(
                        "FETCH",
                        &format!(
                            "cycle {}: {} users in {:.0?}",
                            seq,
                            users.len(),
                            start.elapsed()
                        ),
                    );
                    Event::FetchSucceeded { seq, users }
                }
                Err(e) => {
                    logging::warn("FETCH", &format!("cycle {}: {}", seq, e));
                    Event::FetchFailed {
                        seq,
                        message: e.display_message(),
                    }
                }
            };

            // Receiver gone means the UI is shutting down.
            let _ = tx.send(event);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port.
    fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();
        let body = body.to_string();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let mut read = 0;
            while read < buf.len() {
                let n = stream.read(&mut buf[read..]).unwrap();
                read += n;
                if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}", addr)
    }

    #[test]
    fn parses_a_user_array() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":1,"name":"Leanne Graham","email":"a@b.com","address":{"city":"Gwenborough"}}]"#,
        );
        let users = Fetcher::new(url).unwrap().fetch_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Leanne Graham");
        assert_eq!(users[0].city(), "Gwenborough");
    }

    #[test]
    fn empty_array_is_a_valid_response() {
        let url = serve_once("200 OK", "[]");
        let users = Fetcher::new(url).unwrap().fetch_users().unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn server_error_status_is_reported() {
        let url = serve_once("500 Internal Server Error", "oops");
        let err = Fetcher::new(url).unwrap().fetch_users().unwrap_err();
        match err {
            UserdexError::HttpStatus(code) => assert_eq!(code, 500),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[test]
    fn non_array_body_is_a_parse_error() {
        let url = serve_once("200 OK", r#"{"not":"an array"}"#);
        let err = Fetcher::new(url).unwrap().fetch_users().unwrap_err();
        assert!(matches!(err, UserdexError::MalformedBody(_)));
    }

    #[test]
    fn connection_refused_is_a_transport_error() {
        // Bind then drop so the port is very likely closed.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let err = Fetcher::new(format!("http://{}", addr))
            .unwrap()
            .fetch_users()
            .unwrap_err();
        assert!(matches!(err, UserdexError::Transport(_, _)));
    }

    #[test]
    fn rejects_invalid_endpoint_urls() {
        assert!(matches!(
            Fetcher::new("not a url"),
            Err(UserdexError::InvalidUrl(_))
        ));
    }

    #[test]
    fn spawn_cycle_delivers_a_tagged_event() {
        let url = serve_once(
            "200 OK",
            r#"[{"id":2,"name":"Ervin Howell","email":"e@h.com"}]"#,
        );
        let fetcher = Fetcher::new(url).unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        fetcher.spawn_cycle(42, tx);

        match rx.recv_timeout(std::time::Duration::from_secs(10)).unwrap() {
            Event::FetchSucceeded { seq, users } => {
                assert_eq!(seq, 42);
                assert_eq!(users[0].name, "Ervin Howell");
            }
            other => panic!("expected success event, got {:?}", other),
        }
    }
}
