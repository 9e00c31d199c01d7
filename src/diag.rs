use std::any::type_name;
use std::fmt;
use std::panic::Location;

use log::warn;

/// Record of a nested write that was dropped because the optional link in
/// the path was `None` at mutation time.
///
/// Transient: built, logged at `warn`, and discarded. Never an error; the
/// chain that produced it keeps going.
#[derive(Debug, Clone)]
pub struct SkippedWrite {
    location: &'static Location<'static>,
    root: String,
    slot: String,
    nested: String,
}

impl SkippedWrite {
    pub(crate) fn of<Root, Value, Sub>(location: &'static Location<'static>) -> Self {
        Self {
            location,
            root: short_type_name(type_name::<Root>()),
            slot: short_type_name(type_name::<Option<Value>>()),
            nested: short_type_name(type_name::<Sub>()),
        }
    }

    pub(crate) fn emit(&self) {
        warn!("{self}");
    }

    /// Where the chain that dropped the write began.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for SkippedWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[tidy: failed to update {}]\nlocation: {} at line {}.\n{}'s {} is None.",
            self.nested,
            self.location.file(),
            self.location.line(),
            self.root,
            strip_option(&self.slot),
        )
    }
}

/// Strip module paths from a `type_name` rendering while keeping generic
/// structure: `core::option::Option<demo::Badge>` becomes `Option<Badge>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    for segment in full.split_inclusive(|c: char| !c.is_alphanumeric() && c != '_' && c != ':') {
        match segment.char_indices().next_back() {
            Some((idx, last)) if !last.is_alphanumeric() && last != '_' && last != ':' => {
                out.push_str(segment[..idx].rsplit("::").next().unwrap_or(""));
                out.push(last);
            }
            _ => out.push_str(segment.rsplit("::").next().unwrap_or(segment)),
        }
    }
    out
}

/// Drop a leading `Option<` wrapper from an already-shortened type name.
pub(crate) fn strip_option(name: &str) -> &str {
    name.strip_prefix("Option<")
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(name)
}
