use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// declares a string-backed identifier newtype so that ids of different
/// entity types cannot be mixed up.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Default, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Deserialize, Serialize,
        )]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// this id moved into a feed namespace: `{prefix}_{id}`
            pub fn with_prefix(&self, prefix: &str) -> $name {
                $name(format!("{prefix}_{}", self.0))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                $name(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name(value)
            }
        }
    };
}

string_id!(
    /// id of a transit stop facility
    StopId
);
string_id!(
    /// id of a network link. links belong to the shared network and are
    /// never namespaced during a merge.
    LinkId
);
string_id!(StopAreaId);
string_id!(LineId);
string_id!(RouteId);
string_id!(DepartureId);
string_id!(VehicleId);
string_id!(VehicleTypeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_prefix() {
        let stop = StopId::from("BL12");
        assert_eq!(stop.with_prefix("taipei_metro").as_str(), "taipei_metro_BL12");
        // the source id is not modified
        assert_eq!(stop.as_str(), "BL12");
    }
}
