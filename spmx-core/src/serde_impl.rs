//! Serde support, enabled with the `serde` feature
//!
//! A matrix is represented as `{ "rows", "cols", "entries" }` with entries
//! sorted by coordinate. Deserialization goes through the element setter, so
//! zero values are dropped, and entries outside the shape are rejected.

use alloc::vec::Vec;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Entry, SparseMatrix};

#[derive(Serialize, Deserialize)]
struct MatrixRepr {
    rows: usize,
    cols: usize,
    entries: Vec<Entry>,
}

impl Serialize for SparseMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatrixRepr {
            rows: self.rows(),
            cols: self.cols(),
            entries: self.sorted_entries(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SparseMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MatrixRepr::deserialize(deserializer)?;
        let mut matrix = SparseMatrix::new(repr.rows, repr.cols);
        for Entry { row, col, value } in repr.entries {
            if !matrix.contains(row, col) {
                return Err(de::Error::custom(format_args!(
                    "entry ({row}, {col}) lies outside the {}x{} matrix",
                    repr.rows, repr.cols
                )));
            }
            matrix.set_element(row, col, value);
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_json_shape() {
        let m = SparseMatrix::from_entries(2, 3, [(1, 2, -5), (0, 1, 4)]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"rows":2,"cols":3,"entries":[{"row":0,"col":1,"value":4},{"row":1,"col":2,"value":-5}]}"#
        );

        let back: SparseMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_deserialize_drops_zeros() {
        let json = r#"{"rows":1,"cols":1,"entries":[{"row":0,"col":0,"value":0}]}"#;
        let m: SparseMatrix = serde_json::from_str(json).unwrap();
        assert!(m.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        let json = r#"{"rows":1,"cols":1,"entries":[{"row":1,"col":0,"value":3}]}"#;
        let err = serde_json::from_str::<SparseMatrix>(json).unwrap_err();
        assert!(err.to_string().contains("outside the 1x1 matrix"));
    }
}
