// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use base::Value;
use frame::{Frame, FrameColumn};
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::view::Cursor;

/// Column name lookup: first declaration wins, plus declaration order.
#[derive(Debug)]
pub(crate) struct NameIndex {
    positions: HashMap<String, usize>,
    names: Vec<String>,
}

impl NameIndex {
    pub(crate) fn from_columns(columns: &[FrameColumn]) -> Self {
        let mut positions = HashMap::with_capacity(columns.len());
        let mut names = Vec::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            // duplicates keep the first position and stay reachable positionally
            positions.entry(column.name.clone()).or_insert(position);
            names.push(column.name.clone());
        }
        Self { positions, names }
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }
}

/// The one synthetic row a view shares across every `get` call.
///
/// Nothing is cached: each read resolves the column value at the cursor's
/// position at call time, so the same object reflects different data after
/// the cursor moves.
pub struct RowView {
    frame: Arc<Frame>,
    cursor: Rc<Cursor>,
    names: Arc<NameIndex>,
}

impl RowView {
    pub(crate) fn new(frame: Arc<Frame>, cursor: Rc<Cursor>, names: Arc<NameIndex>) -> Self {
        Self { frame, cursor, names }
    }

    /// Row position this object currently reflects.
    pub fn index(&self) -> usize {
        self.cursor.get()
    }

    /// Value of the named column, or `None` when no column carries `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.names.position(name).map(|position| self.read(position))
    }

    /// Like [`RowView::get`], degrading unknown names to `Value::Undefined`.
    pub fn value(&self, name: &str) -> Value {
        self.get(name).unwrap_or(Value::Undefined)
    }

    /// Positional access; reaches columns shadowed by a duplicate name.
    pub fn get_at(&self, position: usize) -> Option<Value> {
        if position < self.frame.columns.len() { Some(self.read(position)) } else { None }
    }

    pub fn names(&self) -> &[String] {
        self.names.names()
    }

    fn read(&self, position: usize) -> Value {
        self.frame.columns[position].data.get_value(self.cursor.get())
    }

    /// Field-by-field copy of the current row into an independent [`Row`].
    pub(crate) fn snapshot(&self) -> Row {
        let index = self.cursor.get();
        let values =
            self.frame.columns.iter().map(|column| column.data.get_value(index)).collect();
        Row { values, names: Arc::clone(&self.names) }
    }
}

/// An owned row, independent of any view cursor.
#[derive(Clone, Debug)]
pub struct Row {
    pub values: Vec<Value>,
    names: Arc<NameIndex>,
}

impl Row {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.names.position(name).and_then(|position| self.values.get(position))
    }

    pub fn get_at(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    pub fn names(&self) -> &[String] {
        self.names.names()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    mod name_index {
        use crate::row::NameIndex;
        use frame::FrameColumn;

        #[test]
        fn test_first_wins() {
            let columns = vec![
                FrameColumn::int2("value", [1]),
                FrameColumn::int2("value", [2]),
                FrameColumn::text("name", ["a"]),
            ];
            let index = NameIndex::from_columns(&columns);

            assert_eq!(index.position("value"), Some(0));
            assert_eq!(index.position("name"), Some(2));
            assert_eq!(index.position("missing"), None);
            assert_eq!(index.names(), ["value", "value", "name"]);
        }
    }

    mod row {
        use crate::FrameView;
        use base::Value;
        use frame::{Frame, FrameColumn};
        use std::sync::Arc;

        fn snapshot_rows() -> Vec<crate::Row> {
            let frame = Arc::new(Frame::new(vec![
                FrameColumn::text("name", ["a", "b"]),
                FrameColumn::int2("score", [10, 20]),
            ]));
            FrameView::new(frame).to_rows()
        }

        #[test]
        fn test_get() {
            let rows = snapshot_rows();

            assert_eq!(rows[0].get("name"), Some(&Value::Text("a".to_string())));
            assert_eq!(rows[1].get("score"), Some(&Value::Int2(20)));
            assert_eq!(rows[0].get("missing"), None);
        }

        #[test]
        fn test_get_at() {
            let rows = snapshot_rows();

            assert_eq!(rows[1].get_at(0), Some(&Value::Text("b".to_string())));
            assert_eq!(rows[1].get_at(9), None);
        }

        #[test]
        fn test_names_and_len() {
            let rows = snapshot_rows();

            assert_eq!(rows[0].names(), ["name", "score"]);
            assert_eq!(rows[0].len(), 2);
            assert!(!rows[0].is_empty());
        }
    }
}
