use std::fmt;

/// A key addressing one element of an ordered collection.
///
/// Arrays are addressed by sequential integer index, objects by name. The
/// two forms compare distinct: `Key::Index(2)` and `Key::Name("2")` are not
/// equal, though operations that walk record batches match an index against
/// a field key by its decimal text (see [`Key::matches`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A sequential integer key into an array.
    Index(usize),
    /// An explicit label key into an object.
    Name(String),
}

impl Key {
    /// Whether this key's textual form equals `field_key`.
    ///
    /// Index keys match by their decimal rendering, so field key `"2"`
    /// matches both the object key `"2"` and array index 2.
    pub fn matches(&self, field_key: &str) -> bool {
        match self {
            Key::Index(i) => itoa_eq(*i, field_key),
            Key::Name(name) => name == field_key,
        }
    }
}

// Compares an index against its decimal text without allocating.
fn itoa_eq(mut index: usize, text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    let mut pos = bytes.len();
    loop {
        if pos == 0 {
            return false;
        }
        pos -= 1;
        if bytes[pos] != b'0' + (index % 10) as u8 {
            return false;
        }
        index /= 10;
        if index == 0 {
            break;
        }
    }
    pos == 0
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}
