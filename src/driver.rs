//! Session handle
//!
//! A [`WebDriver`] talks to one remote session. Every command goes through
//! the same pipeline: inject the session id, wrap element handles, format the
//! endpoint, send, decode the envelope, raise on non-zero status, unwrap
//! element references.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{self, data, Data, Value};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::keys::{value_to_key_strokes, IntoKeyStrokes};
use crate::locator::{Locator, SearchContext};
use crate::storage::{StorageKind, WebStorage};
use crate::wait::{self, WaitOptions};
use crate::wire::{
    Command, Cookie, HttpTransport, LogEntry, Point, RemoteInvoker, Size, Transport,
    WebDriverResult,
};
use crate::{DriverConfig, RemoteAddress};

/// Window handle understood as "the focused window"
const CURRENT_WINDOW: &str = "current";

/// Mouse button for the legacy mouse endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Wire value of the button
    pub fn code(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        }
    }
}

/// A sequence of touch actions sent as one perform-actions command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchActions {
    actions: Vec<Data>,
}

impl TouchActions {
    /// A single action of type `name`
    pub fn named(name: &str, args: Data) -> Self {
        Self::default().then(name, args)
    }

    /// Append an action of type `name`
    pub fn then(mut self, name: &str, mut args: Data) -> Self {
        args.insert("type".to_string(), Value::from(name));
        self.actions.push(args);
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Target every action at an element
    pub(crate) fn on_element(mut self, element_id: &str) -> Self {
        for action in &mut self.actions {
            action.insert("element".to_string(), Value::from(element_id));
        }
        self
    }

    fn into_value(self) -> Value {
        Value::Array(self.actions.into_iter().map(Value::Object).collect())
    }
}

impl From<Vec<Data>> for TouchActions {
    /// A pre-built sequence, sent as is
    fn from(actions: Vec<Data>) -> Self {
        Self { actions }
    }
}

impl From<(&str, Data)> for TouchActions {
    fn from((name, args): (&str, Data)) -> Self {
        Self::named(name, args)
    }
}

impl From<&str> for TouchActions {
    fn from(name: &str) -> Self {
        Self::named(name, Data::new())
    }
}

/// Handle to a remote automation session.
///
/// Cloning is cheap; clones share the connection and configuration and
/// carry the session id bound at the time of cloning.
#[derive(Clone)]
pub struct WebDriver {
    invoker: Arc<RemoteInvoker>,
    config: Arc<DriverConfig>,
    desired_capabilities: Arc<serde_json::Value>,
    capabilities: Option<Arc<serde_json::Value>>,
    session_id: Option<String>,
}

impl WebDriver {
    /// Create a driver for the server at `remote` with default settings.
    ///
    /// No request is sent until [`init`](Self::init) or another command.
    pub fn new(desired_capabilities: serde_json::Value, remote: impl Into<RemoteAddress>) -> Result<Self> {
        Self::with_config(desired_capabilities, DriverConfig::new(remote))
    }

    /// Create a driver from a full configuration
    pub fn with_config(desired_capabilities: serde_json::Value, config: DriverConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.request_timeout)?;
        Self::with_transport(desired_capabilities, config, transport)
    }

    /// Create a driver that sends requests through `transport`
    pub fn with_transport(
        desired_capabilities: serde_json::Value,
        config: DriverConfig,
        transport: impl Transport + 'static,
    ) -> Result<Self> {
        let invoker = RemoteInvoker::new(&config.remote, Box::new(transport))?;
        Ok(Self {
            invoker: Arc::new(invoker),
            config: Arc::new(config),
            desired_capabilities: Arc::new(desired_capabilities),
            capabilities: None,
            session_id: None,
        })
    }

    /// Bound session id, if any
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Capabilities returned by the server when the session was created
    pub fn capabilities(&self) -> Option<&serde_json::Value> {
        self.capabilities.as_deref()
    }

    pub fn desired_capabilities(&self) -> &serde_json::Value {
        &self.desired_capabilities
    }

    /// Resolved server URL every endpoint is appended to
    pub fn base_url(&self) -> &str {
        self.invoker.base_url()
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    // =========================================================================
    // Command Execution
    // =========================================================================

    /// Send a command and return the decoded envelope.
    ///
    /// The bound session id is added to `data` unless it already has a
    /// `session_id` field. Element handles anywhere in `data` are sent as wire
    /// references.
    pub fn execute_envelope(&self, command: &Command, data: Data) -> Result<WebDriverResult> {
        let envelope = self.round_trip(command, data)?;
        self.check_session(&envelope)?;
        Ok(envelope)
    }

    /// Send a command and return its value with element references turned
    /// into [`Element`] handles
    pub fn execute(&self, command: &Command, data: Data) -> Result<Value> {
        let envelope = self.execute_envelope(command, data)?;
        Ok(codec::unwrap(envelope.value, self))
    }

    /// Send a command and deserialize its value
    fn execute_as<T: DeserializeOwned>(&self, command: &Command, data: Data) -> Result<T> {
        self.execute(command, data)?.into_typed()
    }

    fn round_trip(&self, command: &Command, mut data: Data) -> Result<WebDriverResult> {
        if let Some(id) = &self.session_id {
            data.entry("session_id".to_string())
                .or_insert_with(|| Value::from(id.as_str()));
        }

        let body = self.invoker.execute(command, codec::wrap_data(&data))?;
        let envelope = WebDriverResult::from_object(body)?;
        envelope.raise_for_status()?;
        Ok(envelope)
    }

    fn check_session(&self, envelope: &WebDriverResult) -> Result<()> {
        let Some(expected) = self.session_id.as_deref() else {
            return Ok(());
        };
        if envelope.session_id.as_deref() == Some(expected) {
            return Ok(());
        }

        if self.config.strict_session_id {
            return Err(Error::SessionMismatch {
                expected: expected.to_string(),
                actual: envelope.session_id.clone(),
            });
        }
        tracing::warn!(
            "Response session id {:?} does not match bound session '{}'",
            envelope.session_id,
            expected
        );
        Ok(())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Server readiness and build information. Needs no session.
    pub fn status(&self) -> Result<Value> {
        self.execute(&Command::STATUS, Data::new())
    }

    /// Sessions currently open on the server
    pub fn sessions(&self) -> Result<Value> {
        self.execute(&Command::GET_ALL_SESSIONS, Data::new())
    }

    /// Create a remote session from the desired capabilities
    pub fn init(&mut self) -> Result<&mut Self> {
        let desired = Value::from((*self.desired_capabilities).clone());
        let envelope = self.round_trip(
            &Command::NEW_SESSION,
            data([("desiredCapabilities", desired)]),
        )?;

        let session_id = envelope
            .session_id
            .clone()
            .or_else(|| {
                envelope
                    .value
                    .get("sessionId")
                    .and_then(serde_json::Value::as_str)
                    .map(String::from)
            })
            .ok_or_else(|| Error::Decode("new session response has no session id".into()))?;

        tracing::debug!("Session created: {}", session_id);
        self.session_id = Some(session_id);
        self.capabilities = Some(Arc::new(envelope.value));
        Ok(self)
    }

    /// Bind to a session created elsewhere. Sends nothing.
    pub fn attach(&mut self, session_id: impl Into<String>) -> Result<&mut Self> {
        let session_id = session_id.into();
        tracing::debug!("Attached to session: {}", session_id);
        self.session_id = Some(session_id);
        Ok(self)
    }

    /// End the remote session. The handle keeps its session id but should
    /// not be used afterwards.
    pub fn quit(&self) -> Result<&Self> {
        self.execute(&Command::QUIT, Data::new())?;
        tracing::debug!("Session quit: {:?}", self.session_id);
        Ok(self)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Load a URL in the current window
    pub fn get(&self, url: &str) -> Result<&Self> {
        self.execute(&Command::GET, data([("url", url.into())]))?;
        Ok(self)
    }

    pub fn back(&self) -> Result<&Self> {
        self.execute(&Command::GO_BACK, Data::new())?;
        Ok(self)
    }

    pub fn forward(&self) -> Result<&Self> {
        self.execute(&Command::GO_FORWARD, Data::new())?;
        Ok(self)
    }

    pub fn refresh(&self) -> Result<&Self> {
        self.execute(&Command::REFRESH, Data::new())?;
        Ok(self)
    }

    pub fn current_url(&self) -> Result<String> {
        self.execute_as(&Command::GET_CURRENT_URL, Data::new())
    }

    pub fn title(&self) -> Result<String> {
        self.execute_as(&Command::GET_TITLE, Data::new())
    }

    /// Source of the current page
    pub fn source(&self) -> Result<String> {
        self.execute_as(&Command::GET_PAGE_SOURCE, Data::new())
    }

    // =========================================================================
    // Windows & Frames
    // =========================================================================

    pub fn current_window_handle(&self) -> Result<String> {
        self.execute_as(&Command::GET_CURRENT_WINDOW_HANDLE, Data::new())
    }

    pub fn window_handles(&self) -> Result<Vec<String>> {
        self.execute_as(&Command::GET_WINDOW_HANDLES, Data::new())
    }

    /// Focus the window with the given name or handle
    pub fn switch_to_window(&self, name: &str) -> Result<&Self> {
        self.execute(&Command::SWITCH_TO_WINDOW, data([("name", name.into())]))?;
        Ok(self)
    }

    /// Close the current window
    pub fn close(&self) -> Result<&Self> {
        self.execute(&Command::CLOSE, Data::new())?;
        Ok(self)
    }

    pub fn maximize_window(&self) -> Result<&Self> {
        self.execute(
            &Command::MAXIMIZE_WINDOW,
            data([("window_handle", CURRENT_WINDOW.into())]),
        )?;
        Ok(self)
    }

    /// Resize a window; `None` targets the current one
    pub fn set_window_size(&self, width: u32, height: u32, window: Option<&str>) -> Result<&Self> {
        self.execute(
            &Command::SET_WINDOW_SIZE,
            data([
                ("width", width.into()),
                ("height", height.into()),
                ("window_handle", window.unwrap_or(CURRENT_WINDOW).into()),
            ]),
        )?;
        Ok(self)
    }

    pub fn window_size(&self, window: Option<&str>) -> Result<Size> {
        self.execute_as(
            &Command::GET_WINDOW_SIZE,
            data([("window_handle", window.unwrap_or(CURRENT_WINDOW).into())]),
        )
    }

    /// Move a window; `None` targets the current one
    pub fn set_window_position(&self, x: i32, y: i32, window: Option<&str>) -> Result<&Self> {
        self.execute(
            &Command::SET_WINDOW_POSITION,
            data([
                ("x", x.into()),
                ("y", y.into()),
                ("window_handle", window.unwrap_or(CURRENT_WINDOW).into()),
            ]),
        )?;
        Ok(self)
    }

    pub fn window_position(&self, window: Option<&str>) -> Result<Point> {
        self.execute_as(
            &Command::GET_WINDOW_POSITION,
            data([("window_handle", window.unwrap_or(CURRENT_WINDOW).into())]),
        )
    }

    /// Switch focus to a frame.
    ///
    /// `Value::Null` selects the top-level document, an integer selects a
    /// frame by index and an [`Element`] selects that (i)frame. Anything else
    /// is rejected before a request is made.
    pub fn switch_to_frame(&self, frame: impl Into<Value>) -> Result<&Self> {
        let frame = frame.into();
        let valid = match &frame {
            Value::Null | Value::Element(_) => true,
            Value::Number(n) => n.is_i64() || n.is_u64(),
            _ => false,
        };
        if !valid {
            return Err(Error::invalid_argument(format!(
                "frame reference must be null, an integer or an element, got {:?}",
                frame
            )));
        }

        self.execute(&Command::SWITCH_TO_FRAME, data([("id", frame)]))?;
        Ok(self)
    }

    pub fn switch_to_parent_frame(&self) -> Result<&Self> {
        self.execute(&Command::SWITCH_TO_PARENT_FRAME, Data::new())?;
        Ok(self)
    }

    // =========================================================================
    // Contexts
    // =========================================================================

    /// Name of the current context (e.g. `NATIVE_APP` or a webview)
    pub fn context(&self) -> Result<String> {
        self.execute_as(&Command::CURRENT_CONTEXT_HANDLE, Data::new())
    }

    pub fn contexts(&self) -> Result<Vec<String>> {
        self.execute_as(&Command::CONTEXT_HANDLES, Data::new())
    }

    pub fn set_context(&self, name: &str) -> Result<&Self> {
        self.execute(&Command::SWITCH_TO_CONTEXT, data([("name", name.into())]))?;
        Ok(self)
    }

    // =========================================================================
    // Elements & Keys
    // =========================================================================

    /// The element that currently has focus
    pub fn active_element(&self) -> Result<Element> {
        self.execute(&Command::GET_ACTIVE_ELEMENT, Data::new())?
            .into_element()
    }

    /// Type into the active element
    pub fn keys(&self, value: impl IntoKeyStrokes) -> Result<&Self> {
        self.execute(
            &Command::SEND_KEYS_TO_ACTIVE_ELEMENT,
            data([("value", value_to_key_strokes(value).into())]),
        )?;
        Ok(self)
    }

    // =========================================================================
    // JavaScript Evaluation
    // =========================================================================

    /// Run a synchronous script. Arguments and the result may hold elements.
    pub fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.execute(
            &Command::EXECUTE_SCRIPT,
            data([("script", script.into()), ("args", Value::Array(args))]),
        )
    }

    /// Run a script that signals completion through its callback argument
    pub fn execute_async_script(&self, script: &str, args: Vec<Value>) -> Result<Value> {
        self.execute(
            &Command::EXECUTE_ASYNC_SCRIPT,
            data([("script", script.into()), ("args", Value::Array(args))]),
        )
    }

    // =========================================================================
    // Cookies
    // =========================================================================

    pub fn cookies(&self) -> Result<Vec<Cookie>> {
        self.execute_as(&Command::GET_ALL_COOKIES, Data::new())
    }

    /// Look up a cookie by name
    pub fn cookie(&self, name: &str) -> Result<Option<Cookie>> {
        Ok(self.cookies()?.into_iter().find(|c| c.name == name))
    }

    /// Set a cookie. Accepts a [`Cookie`] or any object with non-empty
    /// `name` and `value` fields.
    pub fn add_cookie<C: Serialize + ?Sized>(&self, cookie: &C) -> Result<&Self> {
        let cookie = serde_json::to_value(cookie)?;
        let Some(fields) = cookie.as_object() else {
            return Err(Error::invalid_argument("cookie must be a JSON object"));
        };
        let present = |key: &str| match fields.get(key) {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        };
        if !present("name") || !present("value") {
            return Err(Error::invalid_argument(
                "cookie requires non-empty 'name' and 'value'",
            ));
        }

        self.execute(&Command::ADD_COOKIE, data([("cookie", cookie.into())]))?;
        Ok(self)
    }

    pub fn delete_cookie(&self, name: &str) -> Result<&Self> {
        self.execute(&Command::DELETE_COOKIE, data([("name", name.into())]))?;
        Ok(self)
    }

    pub fn delete_all_cookies(&self) -> Result<&Self> {
        self.execute(&Command::DELETE_ALL_COOKIES, Data::new())?;
        Ok(self)
    }

    // =========================================================================
    // Timeouts
    // =========================================================================

    /// How long element lookups keep searching on the server side
    pub fn set_implicit_wait(&self, wait: Duration) -> Result<&Self> {
        self.execute(&Command::IMPLICIT_WAIT, data([("ms", millis(wait))]))?;
        Ok(self)
    }

    pub fn set_script_timeout(&self, timeout: Duration) -> Result<&Self> {
        self.execute(&Command::SET_SCRIPT_TIMEOUT, data([("ms", millis(timeout))]))?;
        Ok(self)
    }

    pub fn set_page_load_timeout(&self, timeout: Duration) -> Result<&Self> {
        self.execute(
            &Command::SET_TIMEOUTS,
            data([("ms", millis(timeout)), ("type", "page load".into())]),
        )?;
        Ok(self)
    }

    // =========================================================================
    // Alerts
    // =========================================================================

    pub fn accept_alert(&self) -> Result<&Self> {
        self.execute(&Command::ACCEPT_ALERT, Data::new())?;
        Ok(self)
    }

    pub fn dismiss_alert(&self) -> Result<&Self> {
        self.execute(&Command::DISMISS_ALERT, Data::new())?;
        Ok(self)
    }

    pub fn alert_text(&self) -> Result<String> {
        self.execute_as(&Command::GET_ALERT_TEXT, Data::new())
    }

    /// Type into a prompt dialog
    pub fn alert_keys(&self, text: &str) -> Result<&Self> {
        self.execute(&Command::SET_ALERT_VALUE, data([("text", text.into())]))?;
        Ok(self)
    }

    /// Answer an HTTP authentication dialog
    pub fn alert_credentials(&self, username: &str, password: &str) -> Result<&Self> {
        self.execute(
            &Command::SET_ALERT_CREDENTIALS,
            data([("username", username.into()), ("password", password.into())]),
        )?;
        Ok(self)
    }

    // =========================================================================
    // Mouse
    // =========================================================================

    /// Move the pointer to an offset from the element's top-left corner.
    /// Non-finite offsets fail with [`Error::InvalidArgument`].
    pub fn move_to(&self, element: &Element, x: f64, y: f64) -> Result<&Self> {
        self.execute(
            &Command::MOVE_TO,
            data([
                ("element", element.element_id().into()),
                ("x", finite("x", x)?),
                ("y", finite("y", y)?),
            ]),
        )?;
        Ok(self)
    }

    pub fn mouse_click(&self, button: MouseButton) -> Result<&Self> {
        self.execute(&Command::CLICK, data([("button", button.code().into())]))?;
        Ok(self)
    }

    pub fn mouse_double_click(&self) -> Result<&Self> {
        self.execute(&Command::DOUBLE_CLICK, Data::new())?;
        Ok(self)
    }

    pub fn mouse_down(&self, button: MouseButton) -> Result<&Self> {
        self.execute(&Command::MOUSE_DOWN, data([("button", button.code().into())]))?;
        Ok(self)
    }

    pub fn mouse_up(&self, button: MouseButton) -> Result<&Self> {
        self.execute(&Command::MOUSE_UP, data([("button", button.code().into())]))?;
        Ok(self)
    }

    // =========================================================================
    // Touch
    // =========================================================================

    pub fn tap(&self, element: &Element) -> Result<&Self> {
        self.execute(
            &Command::SINGLE_TAP,
            data([("element", element.element_id().into())]),
        )?;
        Ok(self)
    }

    pub fn double_tap(&self, element: &Element) -> Result<&Self> {
        self.execute(
            &Command::DOUBLE_TAP,
            data([("element", element.element_id().into())]),
        )?;
        Ok(self)
    }

    pub fn long_press(&self, element: &Element) -> Result<&Self> {
        self.execute(
            &Command::LONG_PRESS,
            data([("element", element.element_id().into())]),
        )?;
        Ok(self)
    }

    /// Flick starting at `element` by an offset, at `speed` pixels per second.
    /// Non-finite values fail with [`Error::InvalidArgument`].
    pub fn flick(&self, element: &Element, x: f64, y: f64, speed: f64) -> Result<&Self> {
        self.execute(
            &Command::FLICK,
            data([
                ("element", element.element_id().into()),
                ("x", finite("x", x)?),
                ("y", finite("y", y)?),
                ("speed", finite("speed", speed)?),
            ]),
        )?;
        Ok(self)
    }

    /// Perform touch actions.
    ///
    /// ```rust,no_run
    /// # use wdwire::{TouchActions, WebDriver, Value};
    /// # fn example(driver: &WebDriver) -> wdwire::Result<()> {
    /// let mut args = wdwire::Data::new();
    /// args.insert("x".into(), Value::from(100));
    /// args.insert("y".into(), Value::from(200));
    /// driver.touch(("tap", args))?;
    ///
    /// driver.touch(TouchActions::named("drag", wdwire::Data::new()).then("drop", wdwire::Data::new()))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn touch(&self, actions: impl Into<TouchActions>) -> Result<&Self> {
        self.execute(
            &Command::PERFORM_ACTIONS,
            data([("actions", actions.into().into_value())]),
        )?;
        Ok(self)
    }

    // =========================================================================
    // Device
    // =========================================================================

    /// `PORTRAIT` or `LANDSCAPE`
    pub fn orientation(&self) -> Result<String> {
        self.execute_as(&Command::GET_SCREEN_ORIENTATION, Data::new())
    }

    pub fn set_orientation(&self, orientation: &str) -> Result<&Self> {
        self.execute(
            &Command::SET_SCREEN_ORIENTATION,
            data([("orientation", orientation.into())]),
        )?;
        Ok(self)
    }

    pub fn geo_location(&self) -> Result<Value> {
        self.execute(&Command::GET_LOCATION, Data::new())
    }

    pub fn set_geo_location(&self, latitude: f64, longitude: f64, altitude: f64) -> Result<&Self> {
        let location = data([
            ("latitude", finite("latitude", latitude)?),
            ("longitude", finite("longitude", longitude)?),
            ("altitude", finite("altitude", altitude)?),
        ]);
        self.execute(&Command::SET_LOCATION, data([("location", location.into())]))?;
        Ok(self)
    }

    /// Network connection bitmask (airplane = 1, wifi = 2, data = 4)
    pub fn network_connection(&self) -> Result<i64> {
        self.execute_as(&Command::GET_NETWORK_CONNECTION, Data::new())
    }

    pub fn set_network_connection(&self, mode: i64) -> Result<&Self> {
        let parameters = data([("type", mode.into())]);
        self.execute(
            &Command::SET_NETWORK_CONNECTION,
            data([("parameters", parameters.into())]),
        )?;
        Ok(self)
    }

    // =========================================================================
    // Storage & Logs
    // =========================================================================

    pub fn local_storage(&self) -> WebStorage<'_> {
        WebStorage::new(self, StorageKind::Local)
    }

    pub fn session_storage(&self) -> WebStorage<'_> {
        WebStorage::new(self, StorageKind::Session)
    }

    /// Fetch and clear the log of the given type (e.g. `browser`)
    pub fn log(&self, log_type: &str) -> Result<Vec<LogEntry>> {
        self.execute_as(&Command::GET_LOG, data([("type", log_type.into())]))
    }

    pub fn log_types(&self) -> Result<Vec<String>> {
        self.execute_as(&Command::GET_AVAILABLE_LOG_TYPES, Data::new())
    }

    // =========================================================================
    // Screenshots
    // =========================================================================

    /// Screenshot of the current window as base64 PNG
    pub fn take_screenshot(&self) -> Result<String> {
        self.execute_as(&Command::SCREENSHOT, Data::new())
    }

    /// Screenshot of the current window as PNG bytes
    pub fn screenshot(&self) -> Result<Vec<u8>> {
        decode_screenshot(&self.take_screenshot()?)
    }

    /// Write a screenshot to `path`. With `quietly`, file system errors are
    /// logged and ignored.
    pub fn save_screenshot(&self, path: impl AsRef<Path>, quietly: bool) -> Result<&Self> {
        write_screenshot(path.as_ref(), &self.take_screenshot()?, quietly)?;
        Ok(self)
    }

    // =========================================================================
    // Wait Helpers
    // =========================================================================

    /// Poll until `asserter` passes, using the configured wait options
    pub fn wait_for<F>(&self, asserter: F) -> Result<&Self>
    where
        F: Fn(&WebDriver) -> Result<()>,
    {
        self.wait_for_with(&self.config.wait, asserter)
    }

    pub fn wait_for_with<F>(&self, options: &WaitOptions, asserter: F) -> Result<&Self>
    where
        F: Fn(&WebDriver) -> Result<()>,
    {
        wait::poll(options, || asserter(self))?;
        Ok(self)
    }
}

impl SearchContext for WebDriver {
    fn element(&self, using: Locator, value: &str) -> Result<Element> {
        self.execute(&Command::FIND_ELEMENT, using.query(value))?
            .into_element()
    }

    fn elements(&self, using: Locator, value: &str) -> Result<Vec<Element>> {
        self.execute(&Command::FIND_ELEMENTS, using.query(value))?
            .into_elements()
    }

    fn wait_options(&self) -> WaitOptions {
        self.config.wait
    }
}

impl fmt::Debug for WebDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebDriver")
            .field("session_id", &self.session_id)
            .field("base_url", &self.invoker.base_url())
            .finish_non_exhaustive()
    }
}

/// Durations go on the wire as whole milliseconds
fn millis(duration: Duration) -> Value {
    Value::from(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
}

/// Coordinates and speeds must be finite to have a JSON form
fn finite(name: &str, n: f64) -> Result<Value> {
    if n.is_finite() {
        Ok(Value::from(n))
    } else {
        Err(Error::invalid_argument(format!(
            "{} must be a finite number, got {}",
            name, n
        )))
    }
}

/// Decode a base64 screenshot, tolerating line breaks in the payload
pub(crate) fn decode_screenshot(encoded: &str) -> Result<Vec<u8>> {
    use base64::Engine;

    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| Error::Decode(format!("Invalid screenshot data: {}", e)))
}

pub(crate) fn write_screenshot(path: &Path, encoded: &str, quietly: bool) -> Result<()> {
    let bytes = decode_screenshot(encoded)?;
    match std::fs::write(path, bytes) {
        Ok(()) => Ok(()),
        Err(e) if quietly => {
            tracing::debug!("Ignoring screenshot write failure {}: {}", path.display(), e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// A driver attached to session `s1` over a scripted transport
#[cfg(test)]
pub(crate) fn test_driver() -> (WebDriver, crate::wire::transport::mock::ScriptedTransport) {
    test_driver_with(DriverConfig::default())
}

#[cfg(test)]
pub(crate) fn test_driver_with(
    config: DriverConfig,
) -> (WebDriver, crate::wire::transport::mock::ScriptedTransport) {
    let transport = crate::wire::transport::mock::ScriptedTransport::new();
    let mut driver = WebDriver::with_transport(
        serde_json::json!({"browserName": "chrome"}),
        config,
        transport.clone(),
    )
    .unwrap();
    driver.attach("s1").unwrap();
    (driver, transport)
}
