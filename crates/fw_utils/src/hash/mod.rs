//! `hashbrown` containers with a deterministic `foldhash` state.
//!
//! Wire-name and type-path tables are built from `'static` strings, so a
//! fixed seed is enough and keeps lookups identical across runs.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

const SEED: u64 = 0x3C6E_F372_FE94_F82B;

/// Deterministic hash state used by the wire-name and type-path tables.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use fw_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("Name"), FixedHashState.hash_one("Name"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        const STATE: FixedState = FixedState::with_seed(SEED);
        STATE.build_hasher()
    }
}

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// # Examples
///
/// ```
/// use fw_utils::hash::HashMap;
///
/// let mut wire_indices: HashMap<&str, usize> = HashMap::default();
/// wire_indices.insert("CustomFieldName", 0);
/// assert_eq!(wire_indices.get("CustomFieldName"), Some(&0));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

pub use hashbrown;

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use super::{FixedHashState, HashMap, HashSet};

    #[test]
    fn fixed_state_is_stable() {
        let a = FixedHashState.hash_one("CustomFieldName");
        assert_eq!(a, FixedHashState.hash_one("CustomFieldName"));
        assert_ne!(a, FixedHashState.hash_one("Name"));
    }

    #[test]
    fn wire_name_table() {
        let mut indices: HashMap<&'static str, usize> = HashMap::with_hasher(FixedHashState);
        assert!(indices.insert("Name", 1).is_none());
        assert_eq!(indices.insert("Name", 2), Some(1));
        assert_eq!(indices["Name"], 2);

        let mut ambiguous: HashSet<&'static str> = HashSet::with_hasher(FixedHashState);
        assert!(ambiguous.insert("Account"));
        assert!(!ambiguous.insert("Account"));
    }
}
