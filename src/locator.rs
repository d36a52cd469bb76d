//! Element location strategies and the lookup surface shared by
//! [`WebDriver`](crate::WebDriver) and [`Element`].

use std::fmt;

use crate::codec::{data, Data};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::wait::{self, WaitOptions};

/// How to interpret a lookup value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locator {
    Id,
    XPath,
    LinkText,
    PartialLinkText,
    Name,
    TagName,
    ClassName,
    CssSelector,
}

impl Locator {
    pub const ALL: [Locator; 8] = [
        Locator::Id,
        Locator::XPath,
        Locator::LinkText,
        Locator::PartialLinkText,
        Locator::Name,
        Locator::TagName,
        Locator::ClassName,
        Locator::CssSelector,
    ];

    /// The `using` value sent to the remote end
    pub fn as_str(self) -> &'static str {
        match self {
            Locator::Id => "id",
            Locator::XPath => "xpath",
            Locator::LinkText => "link text",
            Locator::PartialLinkText => "partial link text",
            Locator::Name => "name",
            Locator::TagName => "tag name",
            Locator::ClassName => "class name",
            Locator::CssSelector => "css selector",
        }
    }

    /// Command data for a find request
    pub(crate) fn query(self, value: &str) -> Data {
        data([("using", self.as_str().into()), ("value", value.into())])
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an existence check onto a plain answer. Only protocol errors mean
/// "not found"; everything else still propagates.
fn found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::WebDriver(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

macro_rules! locator_methods {
    ($(
        $locator:ident => $one:ident, $if_exists:ident, $or_none:ident,
            $many:ident, $wait_one:ident, $wait_many:ident;
    )*) => {
        $(
            #[doc = concat!("[`element`](Self::element) using `Locator::", stringify!($locator), "`")]
            fn $one(&self, value: &str) -> Result<Element> {
                self.element(Locator::$locator, value)
            }

            #[doc = concat!("[`element_if_exists`](Self::element_if_exists) using `Locator::", stringify!($locator), "`")]
            fn $if_exists(&self, value: &str) -> Result<bool> {
                self.element_if_exists(Locator::$locator, value)
            }

            #[doc = concat!("[`element_or_none`](Self::element_or_none) using `Locator::", stringify!($locator), "`")]
            fn $or_none(&self, value: &str) -> Result<Option<Element>> {
                self.element_or_none(Locator::$locator, value)
            }

            #[doc = concat!("[`elements`](Self::elements) using `Locator::", stringify!($locator), "`")]
            fn $many(&self, value: &str) -> Result<Vec<Element>> {
                self.elements(Locator::$locator, value)
            }

            #[doc = concat!("[`wait_for_element`](Self::wait_for_element) using `Locator::", stringify!($locator), "`")]
            fn $wait_one(&self, value: &str) -> Result<Element> {
                self.wait_for_element(Locator::$locator, value)
            }

            #[doc = concat!("[`wait_for_elements`](Self::wait_for_elements) using `Locator::", stringify!($locator), "`")]
            fn $wait_many(&self, value: &str) -> Result<Vec<Element>> {
                self.wait_for_elements(Locator::$locator, value)
            }
        )*
    };
}

/// Something elements can be looked up from: the whole page or a parent
/// element.
pub trait SearchContext {
    /// Find the first matching element
    fn element(&self, using: Locator, value: &str) -> Result<Element>;

    /// Find all matching elements; no match is an empty list
    fn elements(&self, using: Locator, value: &str) -> Result<Vec<Element>>;

    /// Timing used by `wait_for_element` and `wait_for_elements`
    fn wait_options(&self) -> WaitOptions;

    /// Whether a matching element exists
    fn element_if_exists(&self, using: Locator, value: &str) -> Result<bool> {
        found(self.element(using, value)).map(|el| el.is_some())
    }

    /// The matching element, or `None` if the lookup failed remotely
    fn element_or_none(&self, using: Locator, value: &str) -> Result<Option<Element>> {
        found(self.element(using, value))
    }

    /// Poll until a matching element is displayed
    fn wait_for_element(&self, using: Locator, value: &str) -> Result<Element> {
        self.wait_for_element_with(using, value, &self.wait_options(), wait::is_displayed)
    }

    /// Poll until a matching element passes `asserter`
    fn wait_for_element_with<F>(
        &self,
        using: Locator,
        value: &str,
        options: &WaitOptions,
        asserter: F,
    ) -> Result<Element>
    where
        F: Fn(&Element) -> Result<()>,
    {
        wait::poll(options, || {
            let el = self.element(using, value)?;
            asserter(&el)?;
            Ok(el)
        })
    }

    /// Poll until the lookup is non-empty and its first element is displayed
    fn wait_for_elements(&self, using: Locator, value: &str) -> Result<Vec<Element>> {
        self.wait_for_elements_with(using, value, &self.wait_options(), wait::is_displayed)
    }

    /// Poll until the lookup is non-empty and its first element passes
    /// `asserter`. The whole list is returned.
    fn wait_for_elements_with<F>(
        &self,
        using: Locator,
        value: &str,
        options: &WaitOptions,
        asserter: F,
    ) -> Result<Vec<Element>>
    where
        F: Fn(&Element) -> Result<()>,
    {
        wait::poll(options, || {
            let els = self.elements(using, value)?;
            let first = els.first().ok_or_else(wait::no_such_element)?;
            asserter(first)?;
            Ok(els)
        })
    }

    locator_methods! {
        Id => element_by_id, element_by_id_if_exists, element_by_id_or_none,
            elements_by_id, wait_for_element_by_id, wait_for_elements_by_id;
        XPath => element_by_xpath, element_by_xpath_if_exists, element_by_xpath_or_none,
            elements_by_xpath, wait_for_element_by_xpath, wait_for_elements_by_xpath;
        LinkText => element_by_link_text, element_by_link_text_if_exists,
            element_by_link_text_or_none, elements_by_link_text,
            wait_for_element_by_link_text, wait_for_elements_by_link_text;
        PartialLinkText => element_by_partial_link_text,
            element_by_partial_link_text_if_exists, element_by_partial_link_text_or_none,
            elements_by_partial_link_text, wait_for_element_by_partial_link_text,
            wait_for_elements_by_partial_link_text;
        Name => element_by_name, element_by_name_if_exists, element_by_name_or_none,
            elements_by_name, wait_for_element_by_name, wait_for_elements_by_name;
        TagName => element_by_tag_name, element_by_tag_name_if_exists,
            element_by_tag_name_or_none, elements_by_tag_name,
            wait_for_element_by_tag_name, wait_for_elements_by_tag_name;
        ClassName => element_by_class_name, element_by_class_name_if_exists,
            element_by_class_name_or_none, elements_by_class_name,
            wait_for_element_by_class_name, wait_for_elements_by_class_name;
        CssSelector => element_by_css_selector, element_by_css_selector_if_exists,
            element_by_css_selector_or_none, elements_by_css_selector,
            wait_for_element_by_css_selector, wait_for_elements_by_css_selector;
    }
}
