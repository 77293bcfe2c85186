//! Chainable manipulation of an element's class attribute string.
//!
//! A [`ClassList`] parses a space-delimited class string into an ordered token
//! sequence and exposes fluent mutation (`add`/`remove`/`toggle`/`filter`/
//! `sort`) and membership queries over it. Lists are built either from a bare
//! string or from anything implementing [`AttributeSource`]; the source is
//! never touched until [`ClassList::apply`] commits the tokens back to its
//! "class" attribute.
//!
//! ```
//! use class_manipulator::{list, DummyElement, ClassList};
//!
//! assert_eq!(list("foo bar").add("baz").toggle("foo").to_string(), "bar baz");
//!
//! let mut element = DummyElement::with_class("foo bar baz");
//! let mut classes = ClassList::from_source(&mut element);
//! classes.remove("bar").add("nub");
//! // Nothing written yet; the element still holds "foo bar baz".
//! classes.apply();
//! ```

pub mod class_list;
pub mod errors;
pub mod names;
pub mod source;

pub use class_list::ClassList;
pub use errors::{ClassListError, Result};
pub use names::ClassNames;
pub use source::{AttributeSource, DummyElement, CLASS_ATTRIBUTE};

/// Create a detached class list from a bare class string.
///
/// The shorthand entry point for string-only manipulation:
///
/// ```
/// use class_manipulator::list;
///
/// assert_eq!(list("foo bar baz").sort().to_string(), "bar baz foo");
/// ```
pub fn list(class: &str) -> ClassList<'static> {
    ClassList::from_class(class)
}

/// Create a live class list over an attribute source.
///
/// Parses the source's current "class" value immediately; later mutations stay
/// local to the handle until [`ClassList::apply`].
pub fn list_from(source: &mut dyn AttributeSource) -> ClassList<'_> {
    ClassList::from_source(source)
}

/// Add a class name to a source's class attribute and apply at once.
pub fn add<'a>(source: &'a mut dyn AttributeSource, name: &str) -> ClassList<'a> {
    let mut classes = ClassList::from_source(source);
    classes.add(name).apply();
    classes
}

/// Remove a class name from a source's class attribute and apply at once.
pub fn remove<'a>(source: &'a mut dyn AttributeSource, name: &str) -> ClassList<'a> {
    let mut classes = ClassList::from_source(source);
    classes.remove(name).apply();
    classes
}

/// Toggle a class name on a source's class attribute and apply at once.
pub fn toggle<'a>(source: &'a mut dyn AttributeSource, name: &str) -> ClassList<'a> {
    let mut classes = ClassList::from_source(source);
    classes.toggle(name).apply();
    classes
}

/// Whether a source's class attribute contains a class name.
///
/// Read-only: nothing is written back to the source.
pub fn has(source: &dyn AttributeSource, name: &str) -> bool {
    let class = source.attribute(CLASS_ATTRIBUTE).unwrap_or_default();
    list(&class).has(name)
}
