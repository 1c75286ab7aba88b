//! String interner for token text and node labels.
//!
//! Interned contents are leaked into `'static` storage, so resolved strings
//! stay valid without holding any lock. The interner lives for the duration
//! of the process alongside the trees that reference it.

use crate::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// The interner holds more distinct strings than `Name` can address.
    CapacityExhausted { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::CapacityExhausted { count } => write!(
                f,
                "interner capacity exhausted: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

struct InternerState {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Thread-safe string interner.
///
/// Reads (lookup of already-interned strings, resolution) take a shared
/// lock; only the first interning of a new string takes the exclusive one.
pub struct StringInterner {
    state: RwLock<InternerState>,
}

impl StringInterner {
    /// Create an interner with the empty string pre-interned as
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", 0);
        StringInterner {
            state: RwLock::new(InternerState {
                map,
                strings: vec![""],
            }),
        }
    }

    /// Intern a string, returning its handle.
    ///
    /// # Panics
    /// Panics if the interner holds more than `u32::MAX` distinct strings.
    /// Use [`try_intern`](Self::try_intern) to handle that case gracefully.
    #[inline]
    pub fn intern(&self, text: &str) -> Name {
        self.try_intern(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible version of [`intern`](Self::intern).
    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        if let Some(&raw) = self.state.read().map.get(text) {
            return Ok(Name::from_raw(raw));
        }

        let mut state = self.state.write();
        // another thread may have interned it between the two locks
        if let Some(&raw) = state.map.get(text) {
            return Ok(Name::from_raw(raw));
        }

        let raw = u32::try_from(state.strings.len()).map_err(|_| {
            InternError::CapacityExhausted {
                count: state.strings.len(),
            }
        })?;
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        state.map.insert(leaked, raw);
        state.strings.push(leaked);
        Ok(Name::from_raw(raw))
    }

    /// Look up a handle's string, if it came from this interner.
    pub fn resolve(&self, name: Name) -> Option<&'static str> {
        self.state.read().strings.get(name.raw() as usize).copied()
    }

    /// Number of distinct interned strings (including the empty string).
    pub fn len(&self) -> usize {
        self.state.read().strings.len()
    }

    /// Check if only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        StringInterner::new()
    }
}
