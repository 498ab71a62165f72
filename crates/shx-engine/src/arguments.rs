//! Ordered invocation arguments.
//!
//! Arguments keep their order of appearance and duplicate keys are preserved.
//! The engine imposes no last-wins policy; handlers that want one use
//! [`Arguments::values`] and pick.

/// One argument from a start marker: `key="value"` or a bare `flag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Key as written in the marker.
    pub key: String,
    /// Quoted value, or `None` for a bare flag.
    pub value: Option<String>,
}

impl Argument {
    /// Create a `key="value"` argument.
    #[must_use]
    pub fn valued(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Create a bare flag argument.
    #[must_use]
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Ordered argument list of a single invocation.
///
/// # Example
///
/// ```
/// use shx_engine::{Argument, Arguments};
///
/// let args: Arguments = [
///     Argument::valued("lang", "en"),
///     Argument::flag("draft"),
///     Argument::valued("lang", "de"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(args.get("lang"), Some("en"));
/// assert_eq!(args.values("lang").collect::<Vec<_>>(), vec!["en", "de"]);
/// assert!(args.has("draft"));
/// assert_eq!(args.get("draft"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    entries: Vec<Argument>,
}

impl Arguments {
    /// Create an empty argument list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument, keeping order of appearance.
    pub fn push(&mut self, argument: Argument) {
        self.entries.push(argument);
    }

    /// First value bound to `key`, skipping bare flags.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.key == key && a.value.is_some())
            .and_then(|a| a.value.as_deref())
    }

    /// All values bound to `key`, in order of appearance.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |a| a.key == key)
            .filter_map(|a| a.value.as_deref())
    }

    /// Whether `key` appears at all, bare or valued.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.iter().any(|a| a.key == key)
    }

    /// Iterate over all arguments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.entries.iter()
    }

    /// Number of arguments, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the invocation carried no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Argument> for Arguments {
    fn from_iter<I: IntoIterator<Item = Argument>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
