use crate::errors::{ClassListError, Result};
use crate::names::{split_class, ClassNames};
use crate::source::{AttributeSource, DummyElement, CLASS_ATTRIBUTE};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Where a list's tokens came from and where `apply()` writes them back to.
enum Backing<'a> {
    /// Borrowed external element; mutated only on `apply()`.
    Live(&'a mut dyn AttributeSource),
    /// Ephemeral element owned by the list, built from a bare string.
    Detached(DummyElement),
}

impl Backing<'_> {
    fn read_class(&self) -> String {
        let source: &dyn AttributeSource = match self {
            Backing::Live(source) => &**source,
            Backing::Detached(element) => element,
        };
        source.attribute(CLASS_ATTRIBUTE).unwrap_or_default()
    }

    fn write_class(&mut self, value: &str) {
        match self {
            Backing::Live(source) => source.set_attribute(CLASS_ATTRIBUTE, value),
            Backing::Detached(element) => element.set_attribute(CLASS_ATTRIBUTE, value),
        }
    }
}

/// Chainable handle over an ordered sequence of class-name tokens.
///
/// All mutation is in-memory; the backing source only changes on
/// [`apply`](ClassList::apply). Mutators return `&mut Self` so calls chain:
///
/// ```
/// use class_manipulator::list;
///
/// assert_eq!(list("foo bar").add("baz").remove("foo").to_string(), "bar baz");
/// ```
///
/// Tokens keep insertion order. `add` is set-like (no duplicates), but a
/// source string that already contains duplicates is parsed as-is; callers
/// that seed lists with repeated names keep them until removed.
pub struct ClassList<'a> {
    backing: Backing<'a>,
    tokens: Vec<String>,
}

impl ClassList<'static> {
    /// Build a detached list from a bare class string.
    ///
    /// The string is wrapped in a [`DummyElement`] so detached and live lists
    /// behave identically; `apply()` on a detached list has no external effect.
    pub fn from_class(class: &str) -> Self {
        let backing = Backing::Detached(DummyElement::with_class(class));
        let tokens = split_class(&backing.read_class()).collect();
        Self { backing, tokens }
    }

    /// Build a list from a dynamically-typed JSON value.
    ///
    /// Only a JSON string is acceptable; `null`, booleans, numbers, arrays,
    /// and objects fail with [`ClassListError::InvalidArgument`].
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(class) => Ok(Self::from_class(class)),
            Value::Null => Err(ClassListError::invalid_argument("null")),
            Value::Bool(_) => Err(ClassListError::invalid_argument("a boolean")),
            Value::Number(_) => Err(ClassListError::invalid_argument("a number")),
            Value::Array(_) => Err(ClassListError::invalid_argument("an array")),
            Value::Object(_) => Err(ClassListError::invalid_argument("an object")),
        }
    }
}

impl<'a> ClassList<'a> {
    /// Build a live list over an external attribute source.
    ///
    /// The source's current "class" value is parsed once, here. Whitespace
    /// runs separate tokens, empty segments are dropped, and pre-existing
    /// duplicates are kept.
    pub fn from_source(source: &'a mut dyn AttributeSource) -> Self {
        let backing = Backing::Live(source);
        let tokens = split_class(&backing.read_class()).collect();
        Self { backing, tokens }
    }

    /// Add a class name, keeping the list duplicate-free.
    ///
    /// A name containing whitespace is split and each token added in order.
    /// Adding a present name or an empty string is a no-op.
    pub fn add(&mut self, name: &str) -> &mut Self {
        if name.contains(char::is_whitespace) {
            for token in split_class(name) {
                self.add(&token);
            }
            return self;
        }

        if !name.is_empty() && !self.has(name) {
            self.tokens.push(name.to_string());
        }
        self
    }

    /// Add many class names at once, in sequence order.
    ///
    /// Accepts a sequence of names or a single space-delimited class string.
    pub fn add_many(&mut self, names: impl ClassNames) -> &mut Self {
        for name in collect_names(names) {
            self.add(&name);
        }
        self
    }

    /// Whether a class name is in the list.
    ///
    /// A name containing whitespace is treated as a composite: the result is
    /// true only when every sub-token is present (same as [`has_all`]).
    ///
    /// [`has_all`]: ClassList::has_all
    pub fn has(&self, name: &str) -> bool {
        if name.contains(char::is_whitespace) {
            return self.has_all(name);
        }
        !name.is_empty() && self.tokens.iter().any(|token| token == name)
    }

    /// Whether at least one of the given names is present.
    pub fn has_some(&self, names: impl ClassNames) -> bool {
        collect_names(names).iter().any(|name| self.has(name))
    }

    /// Whether every one of the given names is present.
    pub fn has_all(&self, names: impl ClassNames) -> bool {
        collect_names(names).iter().all(|name| self.has(name))
    }

    /// Remove a class name; no-op when absent.
    ///
    /// A name containing whitespace is split and each token removed. Only the
    /// first occurrence goes away, which matters for lists parsed from a
    /// source string that already carried duplicates.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if name.contains(char::is_whitespace) {
            for token in split_class(name) {
                self.remove(&token);
            }
            return self;
        }

        if let Some(position) = self.tokens.iter().position(|token| token == name) {
            self.tokens.remove(position);
        }
        self
    }

    /// Remove many class names at once, in sequence order.
    pub fn remove_many(&mut self, names: impl ClassNames) -> &mut Self {
        for name in collect_names(names) {
            self.remove(&name);
        }
        self
    }

    /// Remove a name when present, add it when absent.
    ///
    /// A name containing whitespace is split and each token toggled in order.
    pub fn toggle(&mut self, name: &str) -> &mut Self {
        if name.contains(char::is_whitespace) {
            for token in split_class(name) {
                self.toggle(&token);
            }
            return self;
        }

        if self.has(name) {
            self.remove(name)
        } else {
            self.add(name)
        }
    }

    /// Toggle many class names at once, in sequence order.
    pub fn toggle_many(&mut self, names: impl ClassNames) -> &mut Self {
        for name in collect_names(names) {
            self.toggle(&name);
        }
        self
    }

    /// Remove all class names from the list.
    pub fn clear(&mut self) -> &mut Self {
        self.tokens.clear();
        self
    }

    /// Drop every token the predicate rejects.
    ///
    /// The predicate receives each token, its index, and the full token
    /// sequence, all taken from a snapshot made before any removal. Removing
    /// a token mid-iteration therefore never skips or re-visits the others.
    pub fn filter(&mut self, mut predicate: impl FnMut(&str, usize, &[String]) -> bool) -> &mut Self {
        let snapshot = self.tokens.clone();
        for (index, token) in snapshot.iter().enumerate() {
            if !predicate(token, index, &snapshot) {
                self.remove(token);
            }
        }
        self
    }

    /// Sort the tokens lexicographically (stable).
    pub fn sort(&mut self) -> &mut Self {
        self.tokens.sort();
        self
    }

    /// Sort the tokens with a custom comparator (stable).
    pub fn sort_by(&mut self, mut compare: impl FnMut(&str, &str) -> Ordering) -> &mut Self {
        self.tokens.sort_by(|a, b| compare(a, b));
        self
    }

    /// Number of class names in the list.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the list holds no class names.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Copy of the current tokens; mutating it leaves the list untouched.
    pub fn to_vec(&self) -> Vec<String> {
        self.tokens.clone()
    }

    /// Build a new list over another source holding this list's tokens.
    ///
    /// The other source's own classes are discarded. Returns the new handle,
    /// not this one, so the copy can be `apply()`d immediately. Nothing is
    /// written to `other` until then.
    pub fn copy_to<'b>(&self, other: &'b mut dyn AttributeSource) -> ClassList<'b> {
        let mut copy = ClassList::from_source(other);
        copy.clear().add_many(self.tokens.as_slice());
        copy
    }

    /// Write the joined token string to the backing source's class attribute.
    ///
    /// The single point where mutations become visible outside the handle.
    pub fn apply(&mut self) -> &mut Self {
        let class = self.to_string();
        self.backing.write_class(&class);
        self
    }
}

fn collect_names(names: impl ClassNames) -> Vec<String> {
    let mut collected = Vec::new();
    names.append_to(&mut collected);
    collected
}

impl fmt::Display for ClassList<'_> {
    /// Tokens joined by single spaces, with no surrounding whitespace.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl fmt::Debug for ClassList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassList")
            .field("tokens", &self.tokens)
            .field(
                "backing",
                match &self.backing {
                    Backing::Live(_) => &"live",
                    Backing::Detached(_) => &"detached",
                },
            )
            .finish()
    }
}

impl Serialize for ClassList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClassList<'static> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let class = String::deserialize(deserializer)?;
        Ok(Self::from_class(&class))
    }
}
