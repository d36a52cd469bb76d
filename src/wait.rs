//! Polling for conditions on the remote end
//!
//! [`poll`] drives every `wait_for*` method: it repeats an attempt until it
//! succeeds, fails with a non-recoverable error, or the time budget runs out.
//! Only protocol errors ([`Error::is_recoverable`]) trigger another attempt.

use std::time::{Duration, Instant};

use crate::element::Element;
use crate::error::{Error, ErrorCode, Result, WebDriverError};

/// Timing for a poll loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOptions {
    /// Total time budget
    pub timeout: Duration,
    /// Pause between attempts
    pub interval: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            interval: Duration::from_secs(1),
        }
    }
}

impl WaitOptions {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Timeout and interval in milliseconds
    pub fn from_millis(timeout_ms: u64, interval_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(timeout_ms),
            Duration::from_millis(interval_ms),
        )
    }
}

/// Run `attempt` until it succeeds or the budget is spent.
///
/// After a recoverable failure the loop stops if sleeping for another
/// interval would overshoot the timeout, and returns that failure. Any other
/// error is returned immediately. A zero timeout means a single attempt.
pub fn poll<T, F>(options: &WaitOptions, mut attempt: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        match attempt() {
            Ok(value) => return Ok(value),
            Err(e) if e.is_recoverable() => {
                let elapsed = start.elapsed();
                let next = elapsed.saturating_add(options.interval);
                if options.timeout.is_zero() || next > options.timeout {
                    tracing::debug!(
                        "Giving up after {} attempts ({:?}): {}",
                        attempts,
                        elapsed,
                        e
                    );
                    return Err(e);
                }
                tracing::trace!("Attempt {} failed, retrying: {}", attempts, e);
                std::thread::sleep(options.interval);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Passes when the element is displayed
pub fn is_displayed(element: &Element) -> Result<()> {
    if element.is_displayed()? {
        Ok(())
    } else {
        Err(WebDriverError::new(ErrorCode::ElementNotVisible, "element not visible").into())
    }
}

/// Passes when the element is not displayed
pub fn is_not_displayed(element: &Element) -> Result<()> {
    if element.is_displayed()? {
        Err(WebDriverError::assertion("element is visible").into())
    } else {
        Ok(())
    }
}

/// The recoverable error raised when a lookup comes back empty
pub(crate) fn no_such_element() -> Error {
    WebDriverError::new(ErrorCode::NoSuchElement, "no such element").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::test_driver;
    use serde_json::json;

    fn fast() -> WaitOptions {
        WaitOptions::from_millis(500, 1)
    }

    #[test]
    fn test_default_options() {
        let options = WaitOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(10));
        assert_eq!(options.interval, Duration::from_secs(1));
    }

    #[test]
    fn test_poll_succeeds_after_recoverable_failures() {
        let mut calls = 0;
        let value = poll(&fast(), || {
            calls += 1;
            if calls < 3 {
                Err(no_such_element())
            } else {
                Ok(calls)
            }
        })
        .unwrap();
        assert_eq!(value, 3);
    }

    #[test]
    fn test_poll_aborts_on_non_recoverable_error() {
        let mut calls = 0;
        let start = Instant::now();
        let err = poll(&WaitOptions::from_millis(5_000, 100), || -> Result<()> {
            calls += 1;
            Err(Error::invalid_argument("bad frame"))
        })
        .unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(calls, 1);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_poll_returns_last_recoverable_error_on_timeout() {
        let mut calls = 0;
        let err = poll(&WaitOptions::from_millis(30, 5), || -> Result<()> {
            calls += 1;
            Err(WebDriverError::assertion(format!("attempt {}", calls)).into())
        })
        .unwrap_err();

        let last = format!("attempt {}", calls);
        assert!(calls > 1);
        assert_eq!(
            err.as_webdriver().and_then(|e| e.message.as_deref()),
            Some(last.as_str())
        );
    }

    #[test]
    fn test_zero_timeout_makes_one_attempt() {
        let mut calls = 0;
        let result = poll(&WaitOptions::from_millis(0, 0), || -> Result<()> {
            calls += 1;
            Err(no_such_element())
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_interval_longer_than_timeout_makes_one_attempt() {
        let mut calls = 0;
        let start = Instant::now();
        let result = poll(&WaitOptions::from_millis(50, 1_000), || -> Result<()> {
            calls += 1;
            Err(no_such_element())
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_huge_interval_gives_up_instead_of_overflowing() {
        let mut calls = 0;
        let err = poll(
            &WaitOptions::new(Duration::from_secs(10), Duration::MAX),
            || -> Result<()> {
                calls += 1;
                Err(no_such_element())
            },
        )
        .unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_transport_errors_are_not_retried() {
        let mut calls = 0;
        let err = poll(&fast(), || -> Result<()> {
            calls += 1;
            Err(Error::transport("Connection failed"))
        })
        .unwrap_err();
        assert!(err.is_transport());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_displayed_asserters() {
        let (driver, transport) = test_driver();
        let el = Element::new("1", driver);

        transport.ok(json!(true));
        assert!(is_displayed(&el).is_ok());

        transport.ok(json!(false));
        let err = is_displayed(&el).unwrap_err();
        assert!(err
            .as_webdriver()
            .is_some_and(|e| e.is(ErrorCode::ElementNotVisible)));

        transport.ok(json!(false));
        assert!(is_not_displayed(&el).is_ok());

        transport.ok(json!(true));
        let err = is_not_displayed(&el).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(
            err.as_webdriver().and_then(|e| e.message.as_deref()),
            Some("element is visible")
        );
    }
}
