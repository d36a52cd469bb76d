//! Element Reference Codec
//!
//! Callers work with [`Value`], a JSON-like tree that can hold live
//! [`Element`] handles. On the wire an element is `{"ELEMENT": id}`.
//! [`wrap`] and [`unwrap`] convert between the two; nothing else in the crate
//! produces or inspects wire element references.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Number};

use crate::driver::WebDriver;
use crate::element::Element;
use crate::error::{Error, Result};

/// Key of the wire element reference
pub const ELEMENT_KEY: &str = "ELEMENT";

/// Command data: field name to value
pub type Data = BTreeMap<String, Value>;

/// A JSON value that may contain element handles
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    Element(Element),
}

/// Local value to wire JSON. Element handles become `{"ELEMENT": id}`.
pub fn wrap(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => serde_json::Value::Number(n.clone()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(wrap).collect()),
        Value::Object(map) => serde_json::Value::Object(
            map.iter().map(|(k, v)| (k.clone(), wrap(v))).collect(),
        ),
        Value::Element(el) => {
            let mut reference = Map::new();
            reference.insert(
                ELEMENT_KEY.to_string(),
                serde_json::Value::String(el.element_id().to_string()),
            );
            serde_json::Value::Object(reference)
        }
    }
}

/// Wrap a whole data map into a JSON object
pub fn wrap_data(data: &Data) -> Map<String, serde_json::Value> {
    data.iter().map(|(k, v)| (k.clone(), wrap(v))).collect()
}

/// Command data from literal fields
pub(crate) fn data<const N: usize>(fields: [(&str, Value); N]) -> Data {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Wire JSON to local value. Any object holding an `ELEMENT` key is replaced
/// by an [`Element`] bound to `driver`.
pub fn unwrap(value: serde_json::Value, driver: &WebDriver) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Array(items.into_iter().map(|v| unwrap(v, driver)).collect())
        }
        serde_json::Value::Object(mut map) => match map.remove(ELEMENT_KEY) {
            Some(id) => Value::Element(Element::new(element_id(id), driver.clone())),
            None => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, unwrap(v, driver)))
                    .collect(),
            ),
        },
    }
}

/// Ids may arrive as strings or numbers; locally they are always strings
fn element_id(id: serde_json::Value) -> String {
    match id {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Value::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Look up a field of an object value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Whether an element handle appears anywhere in the tree
    pub fn contains_element(&self) -> bool {
        match self {
            Value::Element(_) => true,
            Value::Array(items) => items.iter().any(Value::contains_element),
            Value::Object(map) => map.values().any(Value::contains_element),
            _ => false,
        }
    }

    /// Wire form of this value
    pub fn to_wire(&self) -> serde_json::Value {
        wrap(self)
    }

    pub fn into_element(self) -> Result<Element> {
        match self {
            Value::Element(el) => Ok(el),
            other => Err(Error::Decode(format!("expected an element, got {:?}", other))),
        }
    }

    pub fn into_elements(self) -> Result<Vec<Element>> {
        match self {
            Value::Array(items) => items.into_iter().map(Value::into_element).collect(),
            Value::Null => Ok(Vec::new()),
            other => Err(Error::Decode(format!(
                "expected a list of elements, got {:?}",
                other
            ))),
        }
    }

    /// Deserialize an element-free value into a typed shape
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T> {
        if self.contains_element() {
            return Err(Error::Decode(
                "value holds element handles and cannot be deserialized".into(),
            ));
        }
        Ok(serde_json::from_value(wrap(&self))?)
    }
}

impl From<serde_json::Value> for Value {
    /// Structural conversion of caller-supplied JSON. Objects are kept as
    /// objects even when they have an `ELEMENT` key.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    /// Non-finite floats have no JSON form and become null
    fn from(f: f64) -> Self {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::from(f as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<Element> for Value {
    fn from(el: Element) -> Self {
        Value::Element(el)
    }
}

impl From<&Element> for Value {
    fn from(el: &Element) -> Self {
        Value::Element(el.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}
