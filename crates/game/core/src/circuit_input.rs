//! Circuit-input projection handed to the external prover.
//!
//! A [`CircuitInput`] mirrors the circuit's declared input schema: records keep
//! their declared field order, arrays keep their length, and every leaf is a
//! canonical hex scalar from [`crate::field::to_hex`].
//!
//! ```text
//! player.froglins[0].habitats[0].coords[1][0]  ->  "0x…0064"
//! ```

use crate::field::{self, EncodingError, Field};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CircuitInput {
    Scalar(String),
    List(Vec<CircuitInput>),
    Record(Vec<(String, CircuitInput)>),
}

impl CircuitInput {
    pub fn scalar(value: &Field) -> Self {
        Self::Scalar(field::to_hex(value))
    }

    pub fn scalars<'a>(values: impl IntoIterator<Item = &'a Field>) -> Self {
        Self::List(values.into_iter().map(Self::scalar).collect())
    }

    pub fn list(items: impl IntoIterator<Item = CircuitInput>) -> Self {
        Self::List(items.into_iter().collect())
    }

    pub fn record() -> Self {
        Self::Record(Vec::new())
    }

    /// Appends a named field (builder pattern). No-op on non-records.
    #[must_use]
    pub fn with(mut self, name: &str, value: CircuitInput) -> Self {
        if let Self::Record(fields) = &mut self {
            fields.push((name.to_owned(), value));
        }
        self
    }

    /// Appends a named scalar field (builder pattern).
    #[must_use]
    pub fn with_scalar(self, name: &str, value: &Field) -> Self {
        self.with(name, Self::scalar(value))
    }

    pub fn get(&self, name: &str) -> Option<&CircuitInput> {
        match self {
            Self::Record(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn at(&self, index: usize) -> Option<&CircuitInput> {
        match self {
            Self::List(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(hex) => Some(hex),
            _ => None,
        }
    }

    /// Field names in declared order (empty for non-records).
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Record(fields) => fields.iter().map(|(name, _)| name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    /// Resolves a schema path such as `froglins[0].habitats[0].coords[1][0]`.
    pub fn lookup(&self, path: &str) -> Option<&CircuitInput> {
        path.split('.').try_fold(self, |node, segment| {
            let (name, mut rest) = match segment.find('[') {
                Some(open) => segment.split_at(open),
                None => (segment, ""),
            };
            let mut node = if name.is_empty() { node } else { node.get(name)? };
            while let Some(stripped) = rest.strip_prefix('[') {
                let close = stripped.find(']')?;
                let index = stripped[..close].parse().ok()?;
                node = node.at(index)?;
                rest = &stripped[close + 1..];
            }
            rest.is_empty().then_some(node)
        })
    }

    /// Decodes a scalar leaf back into a field element.
    pub fn decode(&self) -> Result<Field, EncodingError> {
        self.as_scalar()
            .ok_or(EncodingError::Empty)
            .and_then(field::from_hex)
    }

    /// Number of scalar leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::List(items) => items.iter().map(Self::leaf_count).sum(),
            Self::Record(fields) => fields.iter().map(|(_, v)| v.leaf_count()).sum(),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CircuitInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Self::Scalar(hex) => serializer.serialize_str(hex),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Record(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CircuitInput {
        CircuitInput::record()
            .with_scalar("id", &Field::from(1u64))
            .with(
                "coords",
                CircuitInput::list([
                    CircuitInput::scalars(&[Field::from(0u64), Field::from(100u64)]),
                    CircuitInput::scalars(&[Field::from(100u64), Field::from(0u64)]),
                ]),
            )
    }

    #[test]
    fn keeps_declared_order() {
        assert_eq!(sample().keys(), vec!["id", "coords"]);
    }

    #[test]
    fn resolves_nested_paths() {
        let input = sample();
        let leaf = input.lookup("coords[0][1]").expect("path exists");
        assert_eq!(leaf.decode(), Ok(Field::from(100u64)));
        assert_eq!(input.lookup("id").and_then(CircuitInput::as_scalar).map(str::len), Some(66));
    }

    #[test]
    fn missing_paths_resolve_to_none() {
        let input = sample();
        assert!(input.lookup("coords[2][0]").is_none());
        assert!(input.lookup("name").is_none());
        assert!(input.lookup("coords[0").is_none());
        assert!(input.lookup("id[0]").is_none());
    }

    #[test]
    fn counts_leaves() {
        assert_eq!(sample().leaf_count(), 5);
    }
}
