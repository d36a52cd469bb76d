//! Element handle
//!
//! An [`Element`] is a remote element id plus the [`WebDriver`] it was found
//! through. Validity lives on the server: a handle can go stale at any time
//! and the remote end reports that as an error.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::codec::{data, Data, Value};
use crate::driver::{decode_screenshot, write_screenshot, TouchActions, WebDriver};
use crate::error::Result;
use crate::keys::{value_to_key_strokes, IntoKeyStrokes};
use crate::locator::{Locator, SearchContext};
use crate::wait::{self, WaitOptions};
use crate::wire::{Command, Point, Rect, Size};

/// Handle to an element on the remote end
#[derive(Clone)]
pub struct Element {
    element_id: String,
    driver: WebDriver,
}

impl Element {
    /// Wrap a known element id
    pub fn new(element_id: impl Into<String>, driver: WebDriver) -> Self {
        Self {
            element_id: element_id.into(),
            driver,
        }
    }

    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// The session this element belongs to
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Run a command scoped to this element through the owning session
    pub fn execute(&self, command: &Command, mut data: Data) -> Result<Value> {
        data.entry("element_id".to_string())
            .or_insert_with(|| Value::from(self.element_id.as_str()));
        self.driver.execute(command, data)
    }

    fn execute_as<T: DeserializeOwned>(&self, command: &Command, data: Data) -> Result<T> {
        self.execute(command, data)?.into_typed()
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn is_displayed(&self) -> Result<bool> {
        self.execute_as(&Command::IS_ELEMENT_DISPLAYED, Data::new())
    }

    pub fn is_selected(&self) -> Result<bool> {
        self.execute_as(&Command::IS_ELEMENT_SELECTED, Data::new())
    }

    pub fn is_enabled(&self) -> Result<bool> {
        self.execute_as(&Command::IS_ELEMENT_ENABLED, Data::new())
    }

    /// Rendered text
    pub fn text(&self) -> Result<String> {
        self.execute_as(&Command::GET_ELEMENT_TEXT, Data::new())
    }

    pub fn tag_name(&self) -> Result<String> {
        self.execute_as(&Command::GET_ELEMENT_TAG_NAME, Data::new())
    }

    /// HTML attribute value; `None` when the attribute is absent
    pub fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.execute_as(&Command::GET_ELEMENT_ATTRIBUTE, data([("name", name.into())]))
    }

    /// DOM property value. May hold elements (e.g. `parentNode`).
    pub fn property(&self, name: &str) -> Result<Value> {
        self.execute(&Command::GET_ELEMENT_PROPERTY, data([("name", name.into())]))
    }

    /// Computed value of a CSS property
    pub fn css(&self, property_name: &str) -> Result<String> {
        self.execute_as(
            &Command::GET_ELEMENT_VALUE_OF_CSS_PROPERTY,
            data([("property_name", property_name.into())]),
        )
    }

    /// Top-left corner on the page
    pub fn location(&self) -> Result<Point> {
        self.execute_as(&Command::GET_ELEMENT_LOCATION, Data::new())
    }

    /// Top-left corner after scrolling the element into view
    pub fn location_in_view(&self) -> Result<Point> {
        self.execute_as(
            &Command::GET_ELEMENT_LOCATION_ONCE_SCROLLED_INTO_VIEW,
            Data::new(),
        )
    }

    pub fn size(&self) -> Result<Size> {
        self.execute_as(&Command::GET_ELEMENT_SIZE, Data::new())
    }

    pub fn rect(&self) -> Result<Rect> {
        self.execute_as(&Command::GET_ELEMENT_RECT, Data::new())
    }

    /// Ask the server whether both handles point at the same element
    pub fn equals(&self, other: &Element) -> Result<bool> {
        self.execute_as(
            &Command::ELEMENT_EQUALS,
            data([("other", other.element_id().into())]),
        )
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    pub fn click(&self) -> Result<&Self> {
        self.execute(&Command::CLICK_ELEMENT, Data::new())?;
        Ok(self)
    }

    /// Clear an input or editable element
    pub fn clear(&self) -> Result<&Self> {
        self.execute(&Command::CLEAR_ELEMENT, Data::new())?;
        Ok(self)
    }

    /// Submit the form this element belongs to
    pub fn submit(&self) -> Result<&Self> {
        self.execute(&Command::SUBMIT_ELEMENT, Data::new())?;
        Ok(self)
    }

    /// Type into the element
    pub fn send_keys(&self, value: impl IntoKeyStrokes) -> Result<&Self> {
        self.execute(
            &Command::SEND_KEYS_TO_ELEMENT,
            data([("value", value_to_key_strokes(value).into())]),
        )?;
        Ok(self)
    }

    /// Move the pointer to an offset from the top-left corner
    pub fn move_to(&self, x: f64, y: f64) -> Result<&Self> {
        self.driver.move_to(self, x, y)?;
        Ok(self)
    }

    pub fn tap(&self) -> Result<&Self> {
        self.driver.tap(self)?;
        Ok(self)
    }

    pub fn double_tap(&self) -> Result<&Self> {
        self.driver.double_tap(self)?;
        Ok(self)
    }

    pub fn long_press(&self) -> Result<&Self> {
        self.driver.long_press(self)?;
        Ok(self)
    }

    pub fn flick(&self, x: f64, y: f64, speed: f64) -> Result<&Self> {
        self.driver.flick(self, x, y, speed)?;
        Ok(self)
    }

    /// Perform touch actions, each targeted at this element
    pub fn touch(&self, actions: impl Into<TouchActions>) -> Result<&Self> {
        self.driver
            .touch(actions.into().on_element(&self.element_id))?;
        Ok(self)
    }

    // =========================================================================
    // Screenshots
    // =========================================================================

    /// Screenshot of the element as base64 PNG
    pub fn take_screenshot(&self) -> Result<String> {
        self.execute_as(&Command::ELEMENT_SCREENSHOT, Data::new())
    }

    pub fn screenshot(&self) -> Result<Vec<u8>> {
        decode_screenshot(&self.take_screenshot()?)
    }

    pub fn save_screenshot(&self, path: impl AsRef<Path>, quietly: bool) -> Result<&Self> {
        write_screenshot(path.as_ref(), &self.take_screenshot()?, quietly)?;
        Ok(self)
    }

    // =========================================================================
    // Wait Helpers
    // =========================================================================

    /// Poll until `asserter` passes for this element
    pub fn wait_for<F>(&self, asserter: F) -> Result<&Self>
    where
        F: Fn(&Element) -> Result<()>,
    {
        self.wait_for_with(&self.wait_options(), asserter)
    }

    pub fn wait_for_with<F>(&self, options: &WaitOptions, asserter: F) -> Result<&Self>
    where
        F: Fn(&Element) -> Result<()>,
    {
        wait::poll(options, || asserter(self))?;
        Ok(self)
    }
}

impl SearchContext for Element {
    fn element(&self, using: Locator, value: &str) -> Result<Element> {
        self.execute(&Command::FIND_CHILD_ELEMENT, using.query(value))?
            .into_element()
    }

    fn elements(&self, using: Locator, value: &str) -> Result<Vec<Element>> {
        self.execute(&Command::FIND_CHILD_ELEMENTS, using.query(value))?
            .into_elements()
    }

    fn wait_options(&self) -> WaitOptions {
        self.driver.config().wait
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.element_id.hash(state);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("session_id", &self.driver.session_id())
            .field("element_id", &self.element_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::test_driver;
    use crate::wire::HttpMethod;
    use serde_json::json;
    use std::collections::HashSet;

    const BASE: &str = "http://127.0.0.1:3456/wd/hub/session/s1/element/5";

    #[test]
    fn test_equality_ignores_session() {
        let (first, _) = test_driver();
        let (mut second, _) = test_driver();
        second.attach("s2").unwrap();

        let a = Element::new("1", first.clone());
        let b = Element::new("1", second);
        let c = Element::new("2", first);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Element> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_commands_carry_element_id() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);

        el.click().unwrap().clear().unwrap();
        let reqs = transport.requests();
        assert_eq!(reqs[0].method, HttpMethod::Post);
        assert_eq!(reqs[0].url, format!("{}/click", BASE));
        assert_eq!(reqs[0].body, Some(json!({})));
        assert_eq!(reqs[1].url, format!("{}/clear", BASE));
    }

    #[test]
    fn test_send_keys() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);
        el.send_keys("hello").unwrap();
        assert_eq!(transport.last().url, format!("{}/value", BASE));
        assert_eq!(transport.last().body, Some(json!({"value": ["hello"]})));
    }

    #[test]
    fn test_attribute_and_css() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);

        transport.ok(json!("/home"));
        assert_eq!(el.attribute("href").unwrap().as_deref(), Some("/home"));
        assert_eq!(transport.last().url, format!("{}/attribute/href", BASE));
        assert_eq!(transport.last().body, None);

        transport.ok(json!(null));
        assert_eq!(el.attribute("missing").unwrap(), None);

        transport.ok(json!("rgba(0, 0, 0, 1)"));
        assert_eq!(el.css("color").unwrap(), "rgba(0, 0, 0, 1)");
        assert_eq!(transport.last().url, format!("{}/css/color", BASE));
    }

    #[test]
    fn test_geometry() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);
        transport.ok(json!({"x": 10, "y": 20, "width": 100, "height": 40}));

        let rect = el.rect().unwrap();
        assert_eq!(rect.center(), Point { x: 60.0, y: 40.0 });
        assert_eq!(transport.last().url, format!("{}/rect", BASE));
    }

    #[test]
    fn test_child_lookup() {
        let (driver, transport) = test_driver();
        let parent = Element::new("5", driver);

        transport.ok(json!({"ELEMENT": "6"}));
        let child = parent.element_by_css_selector("li.active").unwrap();
        assert_eq!(child.element_id(), "6");
        assert_eq!(child.driver().session_id(), Some("s1"));
        let req = transport.last();
        assert_eq!(req.url, format!("{}/element", BASE));
        assert_eq!(
            req.body,
            Some(json!({"using": "css selector", "value": "li.active"}))
        );

        transport.ok(json!([]));
        assert!(parent.elements_by_tag_name("li").unwrap().is_empty());
        assert_eq!(transport.last().url, format!("{}/elements", BASE));

        transport.status(7, json!("no such element"));
        assert!(parent.element_by_id_or_none("gone").unwrap().is_none());
    }

    #[test]
    fn test_server_side_equality() {
        let (driver, transport) = test_driver();
        let a = Element::new("5", driver.clone());
        let b = Element::new("6", driver);
        transport.ok(json!(true));
        assert!(a.equals(&b).unwrap());
        assert_eq!(transport.last().url, format!("{}/equals/6", BASE));
    }

    #[test]
    fn test_touch_targets_element() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);

        el.touch("tap").unwrap();
        assert_eq!(
            transport.last().body,
            Some(json!({"actions": [{"type": "tap", "element": "5"}]}))
        );

        el.double_tap().unwrap();
        assert_eq!(
            transport.last().url,
            "http://127.0.0.1:3456/wd/hub/session/s1/touch/doubleclick"
        );
        assert_eq!(transport.last().body, Some(json!({"element": "5"})));
    }

    #[test]
    fn test_property_may_hold_elements() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);
        transport.ok(json!({"ELEMENT": "4"}));
        let parent = el.property("parentNode").unwrap().into_element().unwrap();
        assert_eq!(parent.element_id(), "4");
    }

    #[test]
    fn test_element_wait_for() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);
        transport.ok(json!(false)).ok(json!(true));

        el.wait_for_with(&WaitOptions::from_millis(1_000, 1), |el| {
            if el.is_enabled()? {
                Ok(())
            } else {
                Err(crate::WebDriverError::assertion("disabled").into())
            }
        })
        .unwrap();
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_element_screenshot() {
        let (driver, transport) = test_driver();
        let el = Element::new("5", driver);
        transport.ok(json!("iVBORw0KGgo="));
        assert_eq!(el.screenshot().unwrap().len(), 8);
        assert_eq!(transport.last().url, format!("{}/screenshot", BASE));
    }
}
