//! Ordered key-value payload mirroring the platform's inter-process extras bundle.

// std
use std::collections::btree_map;
// self
use crate::_prelude::*;

/// A single primitive value carried in an [`Extras`] payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
	/// UTF-8 string value.
	Str(String),
	/// 32-bit integer value.
	Int(i32),
}
impl ExtraValue {
	/// Returns the string payload, if this value is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(value) => Some(value),
			Self::Int(_) => None,
		}
	}

	/// Returns the integer payload, if this value is an integer.
	pub fn as_int(&self) -> Option<i32> {
		match self {
			Self::Str(_) => None,
			Self::Int(value) => Some(*value),
		}
	}
}
impl From<&str> for ExtraValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}
impl From<String> for ExtraValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}
impl From<i32> for ExtraValue {
	fn from(value: i32) -> Self {
		Self::Int(value)
	}
}

/// Ordered mapping of string keys to primitive values exchanged across the process boundary.
///
/// Stand-in for the host platform's generic inter-process payload. Iteration follows
/// lexicographic key order, so encodings are stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extras(BTreeMap<String, ExtraValue>);
impl Extras {
	/// Creates an empty payload.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a value under the key, replacing any previous value.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ExtraValue>) {
		self.0.insert(key.into(), value.into());
	}

	/// Builder-style [`insert`](Self::insert) used when assembling payloads.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
		self.insert(key, value);

		self
	}

	/// Value stored under the key, if any.
	pub fn get(&self, key: &str) -> Option<&ExtraValue> {
		self.0.get(key)
	}

	/// String stored under the key, if present and string-typed.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(ExtraValue::as_str)
	}

	/// Integer stored under the key, if present and integer-typed.
	pub fn get_int(&self, key: &str) -> Option<i32> {
		self.get(key).and_then(ExtraValue::as_int)
	}

	/// Returns true if the key is present, regardless of value type.
	pub fn contains(&self, key: &str) -> bool {
		self.0.contains_key(key)
	}

	/// Number of entries in the payload.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true if the payload carries no entries.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over entries in lexicographic key order.
	pub fn iter(&self) -> ExtrasIter<'_> {
		ExtrasIter { inner: self.0.iter() }
	}
}
impl<'a> IntoIterator for &'a Extras {
	type IntoIter = ExtrasIter<'a>;
	type Item = (&'a str, &'a ExtraValue);

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over payload entries.
pub struct ExtrasIter<'a> {
	inner: btree_map::Iter<'a, String, ExtraValue>,
}
impl<'a> Iterator for ExtrasIter<'a> {
	type Item = (&'a str, &'a ExtraValue);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(|(key, value)| (key.as_str(), value))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn typed_accessors_distinguish_value_kinds() {
		let extras = Extras::new().with("NAME", "value").with("COUNT", 7);

		assert_eq!(extras.get_str("NAME"), Some("value"));
		assert_eq!(extras.get_int("COUNT"), Some(7));
		assert_eq!(extras.get_str("COUNT"), None);
		assert_eq!(extras.get_int("NAME"), None);
		assert_eq!(extras.get("MISSING"), None);
		assert!(extras.contains("NAME"));
		assert_eq!(extras.len(), 2);
	}

	#[test]
	fn iteration_follows_key_order() {
		let extras = Extras::new().with("B", 2).with("A", 1).with("C", 3);
		let keys = extras.iter().map(|(key, _)| key).collect::<Vec<_>>();

		assert_eq!(keys, vec!["A", "B", "C"]);
	}

	#[test]
	fn serde_round_trips_mixed_values() {
		let extras = Extras::new().with("CLIENT_ID", "abc").with("ERROR_CODE", 42);
		let payload =
			serde_json::to_string(&extras).expect("Extras should serialize to JSON.");
		let round_trip: Extras =
			serde_json::from_str(&payload).expect("Serialized extras should deserialize.");

		assert_eq!(round_trip, extras);
	}
}
