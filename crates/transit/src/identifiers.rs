//! Catalog keys.
//!
//! Both keys are shared `Arc<str>`s and borrow as `str`, so the registry can
//! be queried with plain string slices coming from JSON or the FFI.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

macro_rules! catalog_key {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(key: impl AsRef<str>) -> Self {
                Self(Arc::from(key.as_ref()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        // Hash and Eq are derived from the inner `str`, which keeps `Borrow`
        // lookups consistent.
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

catalog_key!(
    /// A maxi stop, keyed by its display name (unique in the stop catalog).
    StopIdentifier
);
catalog_key!(
    /// A band id (`green`, `tobago-blue`) or `bus-<number>`.
    RouteIdentifier
);

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};

    use super::*;

    #[test]
    fn test_lookup_by_str() {
        let mut stops = HashMap::new();
        stops.insert(StopIdentifier::new("Curepe"), 10.64);

        assert_eq!(stops.get("Curepe"), Some(&10.64));
        assert_eq!(stops.get("curepe"), None);
    }

    #[test]
    fn test_keys_sort_by_text() {
        let routes: BTreeSet<_> = ["red", "bus-12", "green"]
            .into_iter()
            .map(RouteIdentifier::new)
            .collect();
        let ordered: Vec<String> = routes.iter().map(|r| r.to_string()).collect();

        assert_eq!(ordered, vec!["bus-12", "green", "red"]);
    }
}
