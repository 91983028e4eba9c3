//! Injected UI root and its class set.
//!
//! The handler never reaches into ambient global state; the surrounding
//! application passes a [`DocumentRoot`] handle in explicitly, which keeps
//! the message path testable without a live DOM. [`ClassList`] mirrors the
//! browser's `DOMTokenList` semantics: ordered, duplicate-free, idempotent
//! add and remove.

/// Ordered, duplicate-free set of CSS class names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    names: Vec<String>,
}

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` to the list. No-op if already present.
    ///
    /// Empty names and names containing whitespace are not valid class
    /// tokens; they are logged and ignored.
    pub fn add(&mut self, name: &str) {
        if !is_valid_token(name) {
            tracing::warn!(name, "ignoring invalid class token");
            return;
        }
        if !self.contains(name) {
            self.names.push(name.to_owned());
        }
    }

    /// Remove `name` from the list. No-op if absent.
    pub fn remove(&mut self, name: &str) {
        self.names.retain(|n| n != name);
    }

    /// Add or remove `name` according to `on`.
    pub fn set(&mut self, name: &str, on: bool) {
        if on {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of classes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render the list as a `class` attribute value, in insertion order.
    #[must_use]
    pub fn to_attr(&self) -> String {
        self.names.join(" ")
    }
}

fn is_valid_token(name: &str) -> bool {
    !name.is_empty() && !name.contains(char::is_whitespace)
}

/// Handle to the page's root body element.
///
/// Externally owned state: the library only ever mutates class membership
/// on it, never structure or content.
#[derive(Clone, Debug, Default)]
pub struct DocumentRoot {
    classes: ClassList,
}

impl DocumentRoot {
    /// Create a root with an empty class set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The root's class set.
    #[must_use]
    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    /// Mutable access to the root's class set.
    pub fn class_list_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }
}

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;
