//! Input duality for the bulk operations.
//!
//! The `*_many`, `has_some`, and `has_all` operations accept either an ordered
//! sequence of names or a single space-delimited class string. A string input
//! is tokenized here; sequence elements are passed through untouched, because
//! the per-name operations already split composite names themselves.

/// Tokenize a class string: split on whitespace runs, drop empty segments.
///
/// Duplicates are kept; only [`ClassList::add`] enforces uniqueness.
///
/// [`ClassList::add`]: crate::ClassList::add
pub(crate) fn split_class(class: &str) -> impl Iterator<Item = String> + '_ {
    class.split_whitespace().map(str::to_string)
}

/// Anything usable as a batch of class names.
///
/// Implemented for strings (split into tokens) and for the common sequence
/// shapes (elements forwarded as-is, in order).
pub trait ClassNames {
    /// Append the names, in order, to `out`.
    fn append_to(self, out: &mut Vec<String>);
}

impl ClassNames for &str {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(split_class(self));
    }
}

impl ClassNames for String {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(split_class(&self));
    }
}

impl ClassNames for &String {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(split_class(self));
    }
}

impl ClassNames for &[&str] {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.iter().map(|name| name.to_string()));
    }
}

impl ClassNames for &[String] {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.iter().cloned());
    }
}

impl<const N: usize> ClassNames for [&str; N] {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.iter().map(|name| name.to_string()));
    }
}

impl<const N: usize> ClassNames for &[&str; N] {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.iter().map(|name| name.to_string()));
    }
}

impl ClassNames for Vec<&str> {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self.into_iter().map(str::to_string));
    }
}

impl ClassNames for Vec<String> {
    fn append_to(self, out: &mut Vec<String>) {
        out.extend(self);
    }
}
