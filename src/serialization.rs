//! Serde support. An `Optional` crosses the wire exactly like the native
//! `Option` would: present values are written as-is and absence is `null`.
//! A field that is missing entirely also reads back as absent when the field
//! is marked `#[serde(default)]`.

use crate::Optional;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_ref().to_nullable().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from_nullable)
    }
}
