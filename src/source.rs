use indexmap::IndexMap;

/// The only attribute name this crate ever reads or writes.
pub const CLASS_ATTRIBUTE: &str = "class";

/// Capability contract for anything that can back a class list.
///
/// Mirrors the DOM element surface the list cares about: reading and writing
/// named string attributes. A live list reads the "class" attribute once at
/// construction and writes it back only on [`ClassList::apply`].
///
/// [`ClassList::apply`]: crate::ClassList::apply
pub trait AttributeSource {
    /// Current value of the named attribute, or `None` when unset.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Replace the named attribute's value.
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Ephemeral in-memory element used when a list is built from a bare string.
///
/// Has no external effect; it exists so that detached and live lists share the
/// same code path. Also handy as a stand-in element in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DummyElement {
    attributes: IndexMap<String, String>,
}

impl DummyElement {
    /// Create a dummy element with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dummy element seeded with a class attribute.
    ///
    /// The initial value is normalized: whitespace runs collapse to single
    /// spaces and leading/trailing whitespace is dropped.
    pub fn with_class(class: &str) -> Self {
        let mut element = Self::default();
        let normalized = class.split_whitespace().collect::<Vec<_>>().join(" ");
        element.set_attribute(CLASS_ATTRIBUTE, &normalized);
        element
    }
}

impl AttributeSource for DummyElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}
