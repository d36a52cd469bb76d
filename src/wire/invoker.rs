//! Remote command execution
//!
//! Resolves an endpoint against command data and hands the request to the
//! transport.

use std::fmt;

use serde_json::{Map, Value};

use super::command::Command;
use super::format::format_map;
use super::transport::Transport;
use crate::error::Result;
use crate::RemoteAddress;

/// Sends commands to one remote end
pub struct RemoteInvoker {
    base_url: String,
    transport: Box<dyn Transport>,
}

impl RemoteInvoker {
    /// Resolve `address` and bind it to `transport`
    pub fn new(address: &RemoteAddress, transport: Box<dyn Transport>) -> Result<Self> {
        Ok(Self {
            base_url: address.resolve()?,
            transport,
        })
    }

    /// Base URL every endpoint path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Format the endpoint from `data` and perform the request.
    ///
    /// Fields the URI template does not consume become the JSON body for
    /// POST/PUT and are dropped for other methods.
    pub fn execute(&self, command: &Command, data: Map<String, Value>) -> Result<Value> {
        let formatted = format_map(command.uri, data)?;
        let url = format!("{}{}", self.base_url, formatted.path);
        let body = command
            .method
            .carries_body()
            .then(|| Value::Object(formatted.unused));

        let logged = body.as_ref().map(|b| b.to_string()).unwrap_or_default();
        tracing::debug!("Method: {}, Url: {}, Body: {}", command.method, url, logged);

        self.transport.send(command.method, &url, body.as_ref())
    }
}

impl fmt::Debug for RemoteInvoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteInvoker")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::wire::command::HttpMethod;
    use crate::wire::transport::mock::ScriptedTransport;
    use serde_json::json;

    fn invoker(transport: &ScriptedTransport) -> RemoteInvoker {
        RemoteInvoker::new(
            &RemoteAddress::from("http://127.0.0.1:3456/wd/hub"),
            Box::new(transport.clone()),
        )
        .unwrap()
    }

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_post_sends_leftover_fields() {
        let transport = ScriptedTransport::new();
        invoker(&transport)
            .execute(&Command::GET, map(json!({"session_id": "s1", "url": "https://example.com"})))
            .unwrap();

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://127.0.0.1:3456/wd/hub/session/s1/url");
        assert_eq!(req.body, Some(json!({"url": "https://example.com"})));
    }

    #[test]
    fn test_post_without_leftovers_sends_empty_object() {
        let transport = ScriptedTransport::new();
        invoker(&transport)
            .execute(&Command::REFRESH, map(json!({"session_id": "s1"})))
            .unwrap();
        assert_eq!(transport.last().body, Some(json!({})));
    }

    #[test]
    fn test_get_and_delete_drop_body() {
        let transport = ScriptedTransport::new();
        let invoker = invoker(&transport);
        invoker
            .execute(&Command::GET_TITLE, map(json!({"session_id": "s1", "extra": 1})))
            .unwrap();
        assert_eq!(transport.last().body, None);

        invoker
            .execute(&Command::QUIT, map(json!({"session_id": "s1"})))
            .unwrap();
        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://127.0.0.1:3456/wd/hub/session/s1");
        assert_eq!(req.body, None);
    }

    #[test]
    fn test_missing_key_sends_nothing() {
        let transport = ScriptedTransport::new();
        let err = invoker(&transport)
            .execute(&Command::GET_TITLE, Map::new())
            .unwrap_err();
        assert!(matches!(err, Error::MissingKey { ref key, .. } if key == "session_id"));
        assert!(transport.requests().is_empty());
    }
}
