use std::borrow::{Borrow, Cow};
use std::collections::HashMap;
use std::sync::Arc;
use std::{fmt, hash};

/// The key half of a log field.
///
/// Keys constructed from `&'static str` are free of allocation; owned and
/// reference-counted strings are supported for keys built at runtime.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(SeamString);

impl Key {
    /// Create a new `Key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logseam::Key;
    ///
    /// let key1 = Key::new("my_static_str");
    /// let key2 = Key::new(String::from("my_owned_string"));
    /// ```
    pub fn new(value: impl Into<Key>) -> Self {
        value.into()
    }

    /// Create a new const `Key`.
    pub const fn from_static_str(value: &'static str) -> Self {
        Key(SeamString::Static(value))
    }

    /// Returns a reference to the underlying key name.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&'static str> for Key {
    fn from(key_str: &'static str) -> Self {
        Key(SeamString::Static(key_str))
    }
}

impl From<String> for Key {
    fn from(string: String) -> Self {
        Key(SeamString::Owned(string.into_boxed_str()))
    }
}

impl From<Arc<str>> for Key {
    fn from(string: Arc<str>) -> Self {
        Key(SeamString::RefCounted(string))
    }
}

impl From<Cow<'static, str>> for Key {
    fn from(string: Cow<'static, str>) -> Self {
        match string {
            Cow::Borrowed(s) => Key(SeamString::Static(s)),
            Cow::Owned(s) => Key(SeamString::Owned(s.into_boxed_str())),
        }
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.0.as_str().to_owned()
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Clone, Debug, Eq)]
enum SeamString {
    Owned(Box<str>),
    Static(&'static str),
    RefCounted(Arc<str>),
}

impl SeamString {
    fn as_str(&self) -> &str {
        match self {
            SeamString::Owned(s) => s.as_ref(),
            SeamString::Static(s) => s,
            SeamString::RefCounted(s) => s.as_ref(),
        }
    }
}

impl PartialOrd for SeamString {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeamString {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialEq for SeamString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq(other.as_str())
    }
}

impl hash::Hash for SeamString {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

/// Wrapper for string-like field values, sharing [`Key`]'s storage
/// strategy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StringValue(SeamString);

impl StringValue {
    /// Returns a string slice to this value.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for StringValue {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<StringValue> for String {
    fn from(s: StringValue) -> Self {
        s.0.as_str().to_owned()
    }
}

impl From<&'static str> for StringValue {
    fn from(s: &'static str) -> Self {
        StringValue(SeamString::Static(s))
    }
}

impl From<String> for StringValue {
    fn from(s: String) -> Self {
        StringValue(SeamString::Owned(s.into_boxed_str()))
    }
}

impl From<Arc<str>> for StringValue {
    fn from(s: Arc<str>) -> Self {
        StringValue(SeamString::RefCounted(s))
    }
}

impl From<Cow<'static, str>> for StringValue {
    fn from(s: Cow<'static, str>) -> Self {
        match s {
            Cow::Borrowed(s) => StringValue(SeamString::Static(s)),
            Cow::Owned(s) => StringValue(SeamString::Owned(s.into_boxed_str())),
        }
    }
}

/// A single field value.
///
/// Backend bridges are responsible for any type-specific formatting; the
/// facade itself never inspects values.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    I64(i64),
    /// A floating point value.
    F64(f64),
    /// A string value.
    String(StringValue),
    /// A byte array.
    Bytes(Vec<u8>),
    /// A list of values.
    List(Vec<FieldValue>),
    /// A map of string keys to values, arbitrarily nested.
    Map(HashMap<Key, FieldValue>),
}

macro_rules! impl_field_value_from {
    ($t:ty, $variant:path) => {
        impl From<$t> for FieldValue {
            fn from(val: $t) -> FieldValue {
                $variant(val.into())
            }
        }
    };
}

impl_field_value_from!(i8, FieldValue::I64);
impl_field_value_from!(i16, FieldValue::I64);
impl_field_value_from!(i32, FieldValue::I64);
impl_field_value_from!(i64, FieldValue::I64);

impl_field_value_from!(u8, FieldValue::I64);
impl_field_value_from!(u16, FieldValue::I64);
impl_field_value_from!(u32, FieldValue::I64);

impl_field_value_from!(f32, FieldValue::F64);
impl_field_value_from!(f64, FieldValue::F64);

impl_field_value_from!(String, FieldValue::String);
impl_field_value_from!(Cow<'static, str>, FieldValue::String);
impl_field_value_from!(&'static str, FieldValue::String);
impl_field_value_from!(StringValue, FieldValue::String);

impl_field_value_from!(bool, FieldValue::Bool);

impl From<Vec<u8>> for FieldValue {
    fn from(val: Vec<u8>) -> FieldValue {
        FieldValue::Bytes(val)
    }
}

impl<T: Into<FieldValue>> FromIterator<T> for FieldValue {
    /// Creates a [`FieldValue::List`] from a sequence of values.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FieldValue::List(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<Key>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldValue {
    /// Creates a [`FieldValue::Map`] from a sequence of key-value pairs.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldValue::Map(HashMap::from_iter(
            iter.into_iter().map(|(k, v)| (k.into(), v.into())),
        ))
    }
}

/// The set of fields attached to one log record.
///
/// Keys are unique; inserting an existing key replaces the previous value.
/// Iteration order is unspecified and consumers must not depend on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSet(HashMap<Key, FieldValue>);

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        FieldSet(HashMap::new())
    }

    /// Create an empty field set with space for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        FieldSet(HashMap::with_capacity(capacity))
    }

    /// Insert a field, returning the value previously stored under the
    /// same key.
    pub fn insert(
        &mut self,
        key: impl Into<Key>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Number of fields in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the fields in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &FieldValue)> {
        self.0.iter()
    }
}

impl<K: Into<Key>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FieldSet(HashMap::from_iter(
            iter.into_iter().map(|(k, v)| (k.into(), v.into())),
        ))
    }
}

impl<K: Into<Key>, V: Into<FieldValue>> Extend<(K, V)> for FieldSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())))
    }
}

impl IntoIterator for FieldSet {
    type Item = (Key, FieldValue);
    type IntoIter = std::collections::hash_map::IntoIter<Key, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = (&'a Key, &'a FieldValue);
    type IntoIter = std::collections::hash_map::Iter<'a, Key, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
