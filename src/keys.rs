//! Key-stroke input
//!
//! Special keys are private-use code points understood by the remote end.
//! Everything typed is flattened into one string before it goes on the wire.

use std::fmt;

macro_rules! special_keys {
    ($($name:ident => $code:literal,)*) => {
        /// Non-printable keys
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Keys {
            $($name,)*
        }

        impl Keys {
            /// Every special key, in code point order
            pub const ALL: &'static [Keys] = &[$(Keys::$name,)*];

            /// Code point sent for this key
            pub fn as_char(self) -> char {
                match self {
                    $(Keys::$name => $code,)*
                }
            }
        }
    };
}

special_keys! {
    Null => '\u{E000}',
    Cancel => '\u{E001}',
    Help => '\u{E002}',
    Backspace => '\u{E003}',
    Tab => '\u{E004}',
    Clear => '\u{E005}',
    Return => '\u{E006}',
    Enter => '\u{E007}',
    Shift => '\u{E008}',
    Control => '\u{E009}',
    Alt => '\u{E00A}',
    Pause => '\u{E00B}',
    Escape => '\u{E00C}',
    Space => '\u{E00D}',
    PageUp => '\u{E00E}',
    PageDown => '\u{E00F}',
    End => '\u{E010}',
    Home => '\u{E011}',
    Left => '\u{E012}',
    Up => '\u{E013}',
    Right => '\u{E014}',
    Down => '\u{E015}',
    Insert => '\u{E016}',
    Delete => '\u{E017}',
    Semicolon => '\u{E018}',
    Equals => '\u{E019}',
    Numpad0 => '\u{E01A}',
    Numpad1 => '\u{E01B}',
    Numpad2 => '\u{E01C}',
    Numpad3 => '\u{E01D}',
    Numpad4 => '\u{E01E}',
    Numpad5 => '\u{E01F}',
    Numpad6 => '\u{E020}',
    Numpad7 => '\u{E021}',
    Numpad8 => '\u{E022}',
    Numpad9 => '\u{E023}',
    Multiply => '\u{E024}',
    Add => '\u{E025}',
    Separator => '\u{E026}',
    Subtract => '\u{E027}',
    Decimal => '\u{E028}',
    Divide => '\u{E029}',
    F1 => '\u{E031}',
    F2 => '\u{E032}',
    F3 => '\u{E033}',
    F4 => '\u{E034}',
    F5 => '\u{E035}',
    F6 => '\u{E036}',
    F7 => '\u{E037}',
    F8 => '\u{E038}',
    F9 => '\u{E039}',
    F10 => '\u{E03A}',
    F11 => '\u{E03B}',
    F12 => '\u{E03C}',
    Meta => '\u{E03D}',
}

impl fmt::Display for Keys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One unit of typed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stroke {
    Text(String),
    Key(Keys),
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stroke::Text(text) => f.write_str(text),
            Stroke::Key(key) => write!(f, "{}", key),
        }
    }
}

impl From<&str> for Stroke {
    fn from(text: &str) -> Self {
        Stroke::Text(text.to_string())
    }
}

impl From<String> for Stroke {
    fn from(text: String) -> Self {
        Stroke::Text(text)
    }
}

impl From<char> for Stroke {
    fn from(c: char) -> Self {
        Stroke::Text(c.to_string())
    }
}

impl From<Keys> for Stroke {
    fn from(key: Keys) -> Self {
        Stroke::Key(key)
    }
}

/// Anything that can be typed into an element
pub trait IntoKeyStrokes {
    fn into_strokes(self) -> Vec<Stroke>;
}

impl IntoKeyStrokes for &str {
    fn into_strokes(self) -> Vec<Stroke> {
        vec![Stroke::from(self)]
    }
}

impl IntoKeyStrokes for String {
    fn into_strokes(self) -> Vec<Stroke> {
        vec![Stroke::Text(self)]
    }
}

impl IntoKeyStrokes for &String {
    fn into_strokes(self) -> Vec<Stroke> {
        vec![Stroke::Text(self.clone())]
    }
}

impl IntoKeyStrokes for char {
    fn into_strokes(self) -> Vec<Stroke> {
        vec![Stroke::from(self)]
    }
}

impl IntoKeyStrokes for Keys {
    fn into_strokes(self) -> Vec<Stroke> {
        vec![Stroke::Key(self)]
    }
}

impl IntoKeyStrokes for Stroke {
    fn into_strokes(self) -> Vec<Stroke> {
        vec![self]
    }
}

macro_rules! integer_strokes {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Stroke {
                fn from(n: $t) -> Self {
                    Stroke::Text(n.to_string())
                }
            }

            impl IntoKeyStrokes for $t {
                fn into_strokes(self) -> Vec<Stroke> {
                    vec![Stroke::from(self)]
                }
            }
        )*
    };
}

integer_strokes!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl<T: Into<Stroke>> IntoKeyStrokes for Vec<T> {
    fn into_strokes(self) -> Vec<Stroke> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Stroke>, const N: usize> IntoKeyStrokes for [T; N] {
    fn into_strokes(self) -> Vec<Stroke> {
        self.into_iter().map(Into::into).collect()
    }
}

/// Flatten typed input into the `value` field of a send-keys command.
///
/// All strokes are concatenated into a single entry, so `123`, `"123"`,
/// `vec![1, 2, 3]` and `vec!["1", "2", "3"]` all become `["123"]`.
pub fn value_to_key_strokes(value: impl IntoKeyStrokes) -> Vec<String> {
    let joined: String = value
        .into_strokes()
        .iter()
        .map(Stroke::to_string)
        .collect();
    vec![joined]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equivalent_inputs_produce_one_stroke() {
        let expected = vec!["123".to_string()];
        assert_eq!(value_to_key_strokes(123), expected);
        assert_eq!(value_to_key_strokes("123"), expected);
        assert_eq!(value_to_key_strokes(vec![1, 2, 3]), expected);
        assert_eq!(value_to_key_strokes(vec!["1", "2", "3"]), expected);
    }

    #[test]
    fn test_special_keys_mix_with_text() {
        let strokes = value_to_key_strokes(vec![
            Stroke::from("user"),
            Stroke::from(Keys::Tab),
            Stroke::from("secret"),
            Stroke::from(Keys::Enter),
        ]);
        assert_eq!(strokes, vec!["user\u{E004}secret\u{E007}".to_string()]);
    }

    #[test]
    fn test_single_key_and_array() {
        assert_eq!(value_to_key_strokes(Keys::Escape), vec!["\u{E00C}".to_string()]);
        assert_eq!(value_to_key_strokes(['a', 'b']), vec!["ab".to_string()]);
    }

    #[test]
    fn test_key_catalog() {
        assert_eq!(Keys::ALL.len(), 55);
        assert_eq!(Keys::Null.as_char(), '\u{E000}');
        assert_eq!(Keys::Meta.as_char(), '\u{E03D}');
        assert_eq!(Keys::F1.as_char(), '\u{E031}');
        assert_eq!(Keys::Tab.to_string(), "\u{E004}");
    }
}
