//! HTTP Transport Layer
//!
//! One blocking request per command. The [`Transport`] trait is the seam
//! between protocol logic and the HTTP client.

use std::time::Duration;

use serde_json::Value;

use super::command::HttpMethod;
use crate::error::{Error, Result};

/// Performs a single HTTP exchange and returns the parsed JSON body
pub trait Transport: Send + Sync {
    /// Send `body` (when given) to `url` and parse the response as JSON.
    ///
    /// Non-2xx statuses, network failures and timeouts are transport errors.
    fn send(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Result<Value>;
}

/// [`Transport`] backed by a blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport; `None` disables the per-request timeout
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport_with("Failed to build HTTP client", e))?;
        Ok(Self { client })
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
        HttpMethod::Head => reqwest::Method::HEAD,
    }
}

impl Transport for HttpTransport {
    fn send(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Result<Value> {
        let mut request = self.client.request(to_reqwest(method), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().map_err(|e| {
            let context = if e.is_timeout() {
                "Request timed out"
            } else if e.is_connect() {
                "Connection failed"
            } else {
                "Request failed"
            };
            Error::transport_with(format!("{}: {} {}", context, method, url), e)
        })?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| Error::transport_with("Failed to read response body", e))?;

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
                body: text,
            });
        }

        tracing::trace!("Response from {} {}: {}", method, url, text);
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! In-memory transport that replays queued responses

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use serde_json::{json, Value};

    use super::Transport;
    use crate::error::{Error, Result};
    use crate::wire::command::HttpMethod;

    /// A request as the transport saw it
    #[derive(Debug, Clone, PartialEq)]
    pub struct Recorded {
        pub method: HttpMethod,
        pub url: String,
        pub body: Option<Value>,
    }

    enum Reply {
        Json(Value),
        Fail(String),
    }

    #[derive(Default)]
    struct State {
        replies: VecDeque<Reply>,
        requests: Vec<Recorded>,
    }

    /// Cloning shares the script, so a test can keep a handle after moving
    /// one into a driver.
    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        state: Arc<Mutex<State>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a raw response body
        pub fn reply(&self, body: Value) -> &Self {
            self.state.lock().unwrap().replies.push_back(Reply::Json(body));
            self
        }

        /// Queue a successful response carrying `value`
        pub fn ok(&self, value: Value) -> &Self {
            self.reply(json!({"sessionId": "s1", "status": 0, "value": value}))
        }

        /// Queue a protocol failure
        pub fn status(&self, status: i64, value: Value) -> &Self {
            self.reply(json!({"sessionId": "s1", "status": status, "value": value}))
        }

        /// Queue a transport failure
        pub fn fail(&self, context: &str) -> &Self {
            self.state
                .lock()
                .unwrap()
                .replies
                .push_back(Reply::Fail(context.to_string()));
            self
        }

        pub fn requests(&self) -> Vec<Recorded> {
            self.state.lock().unwrap().requests.clone()
        }

        pub fn last(&self) -> Recorded {
            self.requests().pop().expect("no request was sent")
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Result<Value> {
            let mut state = self.state.lock().unwrap();
            state.requests.push(Recorded {
                method,
                url: url.to_string(),
                body: body.cloned(),
            });
            match state.replies.pop_front() {
                Some(Reply::Json(v)) => Ok(v),
                Some(Reply::Fail(context)) => Err(Error::transport(context)),
                None => Ok(json!({"sessionId": "s1", "status": 0, "value": null})),
            }
        }
    }
}
