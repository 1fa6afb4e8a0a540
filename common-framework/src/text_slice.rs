use std::ops::Deref;
use std::sync::Arc;

/// Immutable view over a shared text buffer.
///
/// The slice keeps an `Arc<str>` alive so that it can be freely cloned and
/// moved around without worrying about lifetimes. It implements `Deref<Target =
/// str>` which allows it to be used transparently as `&str` in most places.
///
/// Parsers only ever narrow a slice from the front (see [`TextSlice::skip`]),
/// so every remaining view handed back is a suffix of the view it came from.
#[derive(Clone)]
pub struct TextSlice {
    buffer: Arc<str>,
    start: usize,
    end: usize,
}

impl TextSlice {
    /// Creates a slice that covers the entire buffer.
    pub fn from_arc(buffer: Arc<str>) -> Self {
        let end = buffer.len();
        Self {
            buffer,
            start: 0,
            end,
        }
    }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the slice is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the suffix that begins `bytes` after the start of this slice.
    ///
    /// The offset is clamped to the end of the slice and must fall on a char
    /// boundary.
    pub fn skip(&self, bytes: usize) -> Self {
        let start = self.start + bytes.min(self.len());
        debug_assert!(self.buffer.is_char_boundary(start));
        Self {
            buffer: Arc::clone(&self.buffer),
            start,
            end: self.end,
        }
    }

    /// Returns `true` if this slice is a suffix of `other`: same buffer, same
    /// end, and a start no earlier than `other`'s.
    pub fn is_suffix_of(&self, other: &TextSlice) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
            && self.end == other.end
            && self.start >= other.start
    }
}

impl std::fmt::Display for TextSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.deref())
    }
}

impl std::fmt::Debug for TextSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TextSlice").field(&self.deref()).finish()
    }
}

impl Deref for TextSlice {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.buffer[self.start..self.end]
    }
}

impl AsRef<str> for TextSlice {
    fn as_ref(&self) -> &str {
        self
    }
}

impl From<&str> for TextSlice {
    fn from(text: &str) -> Self {
        Self::from_arc(Arc::from(text))
    }
}

impl From<String> for TextSlice {
    fn from(text: String) -> Self {
        Self::from_arc(Arc::from(text))
    }
}

impl From<Arc<str>> for TextSlice {
    fn from(buffer: Arc<str>) -> Self {
        Self::from_arc(buffer)
    }
}

impl PartialEq<&str> for TextSlice {
    fn eq(&self, other: &&str) -> bool {
        self.deref() == *other
    }
}

impl PartialEq<TextSlice> for &str {
    fn eq(&self, other: &TextSlice) -> bool {
        *self == other.deref()
    }
}

// Views compare by content, so outcomes built from separate buffers can be
// checked against each other.
impl PartialEq for TextSlice {
    fn eq(&self, other: &Self) -> bool {
        self.deref() == other.deref()
    }
}

impl Eq for TextSlice {}
