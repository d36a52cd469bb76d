//! Endpoint table
//!
//! Every command of the wire protocol as a fixed (method, URI template) pair.
//! Templates use `{name}` placeholders that are filled from command data.

use std::fmt;

/// HTTP verbs used by the wire protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl HttpMethod {
    /// Whether requests with this method carry a JSON body
    pub fn carries_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A protocol endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    /// Short name used in logs
    pub name: &'static str,
    pub method: HttpMethod,
    /// URI template relative to the server base URL
    pub uri: &'static str,
}

impl Command {
    pub const fn new(name: &'static str, method: HttpMethod, uri: &'static str) -> Self {
        Self { name, method, uri }
    }
}

impl Command {
    pub const STATUS: Command = Command::new("status", HttpMethod::Get, "/status");
    pub const NEW_SESSION: Command = Command::new("new_session", HttpMethod::Post, "/session");
    pub const GET_ALL_SESSIONS: Command = Command::new(
        "get_all_sessions",
        HttpMethod::Get,
        "/sessions",
    );
    pub const QUIT: Command = Command::new("quit", HttpMethod::Delete, "/session/{session_id}");
    pub const GET_CURRENT_WINDOW_HANDLE: Command = Command::new(
        "get_current_window_handle",
        HttpMethod::Get,
        "/session/{session_id}/window_handle",
    );
    pub const GET_WINDOW_HANDLES: Command = Command::new(
        "get_window_handles",
        HttpMethod::Get,
        "/session/{session_id}/window_handles",
    );
    pub const GET: Command = Command::new("get", HttpMethod::Post, "/session/{session_id}/url");
    pub const GO_FORWARD: Command = Command::new(
        "go_forward",
        HttpMethod::Post,
        "/session/{session_id}/forward",
    );
    pub const GO_BACK: Command = Command::new(
        "go_back",
        HttpMethod::Post,
        "/session/{session_id}/back",
    );
    pub const REFRESH: Command = Command::new(
        "refresh",
        HttpMethod::Post,
        "/session/{session_id}/refresh",
    );
    pub const EXECUTE_SCRIPT: Command = Command::new(
        "execute_script",
        HttpMethod::Post,
        "/session/{session_id}/execute",
    );
    pub const GET_CURRENT_URL: Command = Command::new(
        "get_current_url",
        HttpMethod::Get,
        "/session/{session_id}/url",
    );
    pub const GET_TITLE: Command = Command::new(
        "get_title",
        HttpMethod::Get,
        "/session/{session_id}/title",
    );
    pub const GET_PAGE_SOURCE: Command = Command::new(
        "get_page_source",
        HttpMethod::Get,
        "/session/{session_id}/source",
    );
    pub const SCREENSHOT: Command = Command::new(
        "screenshot",
        HttpMethod::Get,
        "/session/{session_id}/screenshot",
    );
    pub const ELEMENT_SCREENSHOT: Command = Command::new(
        "element_screenshot",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/screenshot",
    );
    pub const FIND_ELEMENT: Command = Command::new(
        "find_element",
        HttpMethod::Post,
        "/session/{session_id}/element",
    );
    pub const FIND_ELEMENTS: Command = Command::new(
        "find_elements",
        HttpMethod::Post,
        "/session/{session_id}/elements",
    );
    pub const GET_ACTIVE_ELEMENT: Command = Command::new(
        "get_active_element",
        HttpMethod::Post,
        "/session/{session_id}/element/active",
    );
    pub const FIND_CHILD_ELEMENT: Command = Command::new(
        "find_child_element",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/element",
    );
    pub const FIND_CHILD_ELEMENTS: Command = Command::new(
        "find_child_elements",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/elements",
    );
    pub const CLICK_ELEMENT: Command = Command::new(
        "click_element",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/click",
    );
    pub const CLEAR_ELEMENT: Command = Command::new(
        "clear_element",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/clear",
    );
    pub const SWIPE_ELEMENT: Command = Command::new(
        "swipe_element",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/swipe",
    );
    pub const SUBMIT_ELEMENT: Command = Command::new(
        "submit_element",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/submit",
    );
    pub const GET_ELEMENT_TEXT: Command = Command::new(
        "get_element_text",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/text",
    );
    pub const SEND_KEYS_TO_ELEMENT: Command = Command::new(
        "send_keys_to_element",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/value",
    );
    pub const SEND_KEYS_TO_ACTIVE_ELEMENT: Command = Command::new(
        "send_keys_to_active_element",
        HttpMethod::Post,
        "/session/{session_id}/keys",
    );
    pub const UPLOAD_FILE: Command = Command::new(
        "upload_file",
        HttpMethod::Post,
        "/session/{session_id}/file",
    );
    pub const GET_ELEMENT_VALUE: Command = Command::new(
        "get_element_value",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/value",
    );
    pub const GET_ELEMENT_TAG_NAME: Command = Command::new(
        "get_element_tag_name",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/name",
    );
    pub const IS_ELEMENT_SELECTED: Command = Command::new(
        "is_element_selected",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/selected",
    );
    pub const SET_ELEMENT_SELECTED: Command = Command::new(
        "set_element_selected",
        HttpMethod::Post,
        "/session/{session_id}/element/{element_id}/selected",
    );
    pub const IS_ELEMENT_ENABLED: Command = Command::new(
        "is_element_enabled",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/enabled",
    );
    pub const IS_ELEMENT_DISPLAYED: Command = Command::new(
        "is_element_displayed",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/displayed",
    );
    pub const GET_ELEMENT_LOCATION: Command = Command::new(
        "get_element_location",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/location",
    );
    pub const GET_ELEMENT_LOCATION_ONCE_SCROLLED_INTO_VIEW: Command = Command::new(
        "get_element_location_once_scrolled_into_view",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/location_in_view",
    );
    pub const GET_ELEMENT_SIZE: Command = Command::new(
        "get_element_size",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/size",
    );
    pub const GET_ELEMENT_RECT: Command = Command::new(
        "get_element_rect",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/rect",
    );
    pub const GET_ELEMENT_PROPERTY: Command = Command::new(
        "get_element_property",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/property/{name}",
    );
    pub const GET_ELEMENT_ATTRIBUTE: Command = Command::new(
        "get_element_attribute",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/attribute/{name}",
    );
    pub const ELEMENT_EQUALS: Command = Command::new(
        "element_equals",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/equals/{other}",
    );
    pub const GET_ALL_COOKIES: Command = Command::new(
        "get_all_cookies",
        HttpMethod::Get,
        "/session/{session_id}/cookie",
    );
    pub const ADD_COOKIE: Command = Command::new(
        "add_cookie",
        HttpMethod::Post,
        "/session/{session_id}/cookie",
    );
    pub const DELETE_ALL_COOKIES: Command = Command::new(
        "delete_all_cookies",
        HttpMethod::Delete,
        "/session/{session_id}/cookie",
    );
    pub const DELETE_COOKIE: Command = Command::new(
        "delete_cookie",
        HttpMethod::Delete,
        "/session/{session_id}/cookie/{name}",
    );
    pub const SWITCH_TO_FRAME: Command = Command::new(
        "switch_to_frame",
        HttpMethod::Post,
        "/session/{session_id}/frame",
    );
    pub const SWITCH_TO_PARENT_FRAME: Command = Command::new(
        "switch_to_parent_frame",
        HttpMethod::Post,
        "/session/{session_id}/frame/parent",
    );
    pub const SWITCH_TO_WINDOW: Command = Command::new(
        "switch_to_window",
        HttpMethod::Post,
        "/session/{session_id}/window",
    );
    pub const CLOSE: Command = Command::new(
        "close",
        HttpMethod::Delete,
        "/session/{session_id}/window",
    );
    pub const GET_ELEMENT_VALUE_OF_CSS_PROPERTY: Command = Command::new(
        "get_element_value_of_css_property",
        HttpMethod::Get,
        "/session/{session_id}/element/{element_id}/css/{property_name}",
    );
    pub const IMPLICIT_WAIT: Command = Command::new(
        "implicit_wait",
        HttpMethod::Post,
        "/session/{session_id}/timeouts/implicit_wait",
    );
    pub const EXECUTE_ASYNC_SCRIPT: Command = Command::new(
        "execute_async_script",
        HttpMethod::Post,
        "/session/{session_id}/execute_async",
    );
    pub const SET_SCRIPT_TIMEOUT: Command = Command::new(
        "set_script_timeout",
        HttpMethod::Post,
        "/session/{session_id}/timeouts/async_script",
    );
    pub const SET_TIMEOUTS: Command = Command::new(
        "set_timeouts",
        HttpMethod::Post,
        "/session/{session_id}/timeouts",
    );
    pub const DISMISS_ALERT: Command = Command::new(
        "dismiss_alert",
        HttpMethod::Post,
        "/session/{session_id}/dismiss_alert",
    );
    pub const ACCEPT_ALERT: Command = Command::new(
        "accept_alert",
        HttpMethod::Post,
        "/session/{session_id}/accept_alert",
    );
    pub const SET_ALERT_VALUE: Command = Command::new(
        "set_alert_value",
        HttpMethod::Post,
        "/session/{session_id}/alert_text",
    );
    pub const GET_ALERT_TEXT: Command = Command::new(
        "get_alert_text",
        HttpMethod::Get,
        "/session/{session_id}/alert_text",
    );
    pub const SET_ALERT_CREDENTIALS: Command = Command::new(
        "set_alert_credentials",
        HttpMethod::Post,
        "/session/{session_id}/alert/credentials",
    );
    pub const CLICK: Command = Command::new(
        "click",
        HttpMethod::Post,
        "/session/{session_id}/click",
    );
    pub const DOUBLE_CLICK: Command = Command::new(
        "double_click",
        HttpMethod::Post,
        "/session/{session_id}/doubleclick",
    );
    pub const MOUSE_DOWN: Command = Command::new(
        "mouse_down",
        HttpMethod::Post,
        "/session/{session_id}/buttondown",
    );
    pub const MOUSE_UP: Command = Command::new(
        "mouse_up",
        HttpMethod::Post,
        "/session/{session_id}/buttonup",
    );
    pub const MOVE_TO: Command = Command::new(
        "move_to",
        HttpMethod::Post,
        "/session/{session_id}/moveto",
    );
    pub const GET_WINDOW_SIZE: Command = Command::new(
        "get_window_size",
        HttpMethod::Get,
        "/session/{session_id}/window/{window_handle}/size",
    );
    pub const W3C_GET_WINDOW_SIZE: Command = Command::new(
        "w3c_get_window_size",
        HttpMethod::Get,
        "/session/{session_id}/window/size",
    );
    pub const SET_WINDOW_SIZE: Command = Command::new(
        "set_window_size",
        HttpMethod::Post,
        "/session/{session_id}/window/{window_handle}/size",
    );
    pub const W3C_SET_WINDOW_SIZE: Command = Command::new(
        "w3c_set_window_size",
        HttpMethod::Post,
        "/session/{session_id}/window/size",
    );
    pub const GET_WINDOW_POSITION: Command = Command::new(
        "get_window_position",
        HttpMethod::Get,
        "/session/{session_id}/window/{window_handle}/position",
    );
    pub const SET_WINDOW_POSITION: Command = Command::new(
        "set_window_position",
        HttpMethod::Post,
        "/session/{session_id}/window/{window_handle}/position",
    );
    pub const MAXIMIZE_WINDOW: Command = Command::new(
        "maximize_window",
        HttpMethod::Post,
        "/session/{session_id}/window/{window_handle}/maximize",
    );
    pub const W3C_MAXIMIZE_WINDOW: Command = Command::new(
        "w3c_maximize_window",
        HttpMethod::Post,
        "/session/{session_id}/window/maximize",
    );
    pub const SET_SCREEN_ORIENTATION: Command = Command::new(
        "set_screen_orientation",
        HttpMethod::Post,
        "/session/{session_id}/orientation",
    );
    pub const GET_SCREEN_ORIENTATION: Command = Command::new(
        "get_screen_orientation",
        HttpMethod::Get,
        "/session/{session_id}/orientation",
    );
    pub const SINGLE_TAP: Command = Command::new(
        "single_tap",
        HttpMethod::Post,
        "/session/{session_id}/touch/click",
    );
    pub const TOUCH_DOWN: Command = Command::new(
        "touch_down",
        HttpMethod::Post,
        "/session/{session_id}/touch/down",
    );
    pub const TOUCH_UP: Command = Command::new(
        "touch_up",
        HttpMethod::Post,
        "/session/{session_id}/touch/up",
    );
    pub const TOUCH_MOVE: Command = Command::new(
        "touch_move",
        HttpMethod::Post,
        "/session/{session_id}/touch/move",
    );
    pub const TOUCH_SCROLL: Command = Command::new(
        "touch_scroll",
        HttpMethod::Post,
        "/session/{session_id}/touch/scroll",
    );
    pub const DOUBLE_TAP: Command = Command::new(
        "double_tap",
        HttpMethod::Post,
        "/session/{session_id}/touch/doubleclick",
    );
    pub const LONG_PRESS: Command = Command::new(
        "long_press",
        HttpMethod::Post,
        "/session/{session_id}/touch/longclick",
    );
    pub const FLICK: Command = Command::new(
        "flick",
        HttpMethod::Post,
        "/session/{session_id}/touch/flick",
    );
    pub const PERFORM_ACTIONS: Command = Command::new(
        "perform_actions",
        HttpMethod::Post,
        "/session/{session_id}/actions",
    );
    pub const EXECUTE_SQL: Command = Command::new(
        "execute_sql",
        HttpMethod::Post,
        "/session/{session_id}/execute_sql",
    );
    pub const GET_LOCATION: Command = Command::new(
        "get_location",
        HttpMethod::Get,
        "/session/{session_id}/location",
    );
    pub const SET_LOCATION: Command = Command::new(
        "set_location",
        HttpMethod::Post,
        "/session/{session_id}/location",
    );
    pub const GET_APP_CACHE: Command = Command::new(
        "get_app_cache",
        HttpMethod::Get,
        "/session/{session_id}/application_cache",
    );
    pub const GET_APP_CACHE_STATUS: Command = Command::new(
        "get_app_cache_status",
        HttpMethod::Get,
        "/session/{session_id}/application_cache/status",
    );
    pub const CLEAR_APP_CACHE: Command = Command::new(
        "clear_app_cache",
        HttpMethod::Delete,
        "/session/{session_id}/application_cache/clear",
    );
    pub const GET_NETWORK_CONNECTION: Command = Command::new(
        "get_network_connection",
        HttpMethod::Get,
        "/session/{session_id}/network_connection",
    );
    pub const SET_NETWORK_CONNECTION: Command = Command::new(
        "set_network_connection",
        HttpMethod::Post,
        "/session/{session_id}/network_connection",
    );
    pub const GET_LOCAL_STORAGE_ITEM: Command = Command::new(
        "get_local_storage_item",
        HttpMethod::Get,
        "/session/{session_id}/local_storage/key/{key}",
    );
    pub const REMOVE_LOCAL_STORAGE_ITEM: Command = Command::new(
        "remove_local_storage_item",
        HttpMethod::Delete,
        "/session/{session_id}/local_storage/key/{key}",
    );
    pub const GET_LOCAL_STORAGE_KEYS: Command = Command::new(
        "get_local_storage_keys",
        HttpMethod::Get,
        "/session/{session_id}/local_storage",
    );
    pub const SET_LOCAL_STORAGE_ITEM: Command = Command::new(
        "set_local_storage_item",
        HttpMethod::Post,
        "/session/{session_id}/local_storage",
    );
    pub const CLEAR_LOCAL_STORAGE: Command = Command::new(
        "clear_local_storage",
        HttpMethod::Delete,
        "/session/{session_id}/local_storage",
    );
    pub const GET_LOCAL_STORAGE_SIZE: Command = Command::new(
        "get_local_storage_size",
        HttpMethod::Get,
        "/session/{session_id}/local_storage/size",
    );
    pub const GET_SESSION_STORAGE_ITEM: Command = Command::new(
        "get_session_storage_item",
        HttpMethod::Get,
        "/session/{session_id}/session_storage/key/{key}",
    );
    pub const REMOVE_SESSION_STORAGE_ITEM: Command = Command::new(
        "remove_session_storage_item",
        HttpMethod::Delete,
        "/session/{session_id}/session_storage/key/{key}",
    );
    pub const GET_SESSION_STORAGE_KEYS: Command = Command::new(
        "get_session_storage_keys",
        HttpMethod::Get,
        "/session/{session_id}/session_storage",
    );
    pub const SET_SESSION_STORAGE_ITEM: Command = Command::new(
        "set_session_storage_item",
        HttpMethod::Post,
        "/session/{session_id}/session_storage",
    );
    pub const CLEAR_SESSION_STORAGE: Command = Command::new(
        "clear_session_storage",
        HttpMethod::Delete,
        "/session/{session_id}/session_storage",
    );
    pub const GET_SESSION_STORAGE_SIZE: Command = Command::new(
        "get_session_storage_size",
        HttpMethod::Get,
        "/session/{session_id}/session_storage/size",
    );
    pub const GET_LOG: Command = Command::new(
        "get_log",
        HttpMethod::Post,
        "/session/{session_id}/log",
    );
    pub const GET_AVAILABLE_LOG_TYPES: Command = Command::new(
        "get_available_log_types",
        HttpMethod::Get,
        "/session/{session_id}/log/types",
    );
    pub const CURRENT_CONTEXT_HANDLE: Command = Command::new(
        "current_context_handle",
        HttpMethod::Get,
        "/session/{session_id}/context",
    );
    pub const CONTEXT_HANDLES: Command = Command::new(
        "context_handles",
        HttpMethod::Get,
        "/session/{session_id}/contexts",
    );
    pub const SWITCH_TO_CONTEXT: Command = Command::new(
        "switch_to_context",
        HttpMethod::Post,
        "/session/{session_id}/context",
    );
}
