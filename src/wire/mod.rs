//! Wire protocol plumbing: endpoint table, URI formatting, transport and
//! response decoding.

pub mod command;
pub mod format;
pub mod invoker;
pub mod result;
pub mod transport;
pub mod types;

pub use command::{Command, HttpMethod};
pub use format::{format_map, FormattedUri};
pub use invoker::RemoteInvoker;
pub use result::WebDriverResult;
pub use transport::{HttpTransport, Transport};
pub use types::{Cookie, LogEntry, Point, Rect, Size};
