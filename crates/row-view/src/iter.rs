// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use base::Value;
use frame::{Frame, FrameColumn};
use std::rc::Rc;
use std::sync::Arc;

use crate::view::{Cursor, FrameView};

/// Ordered field descriptors of the row at the shared cursor.
///
/// One instance exists per view. Every iteration step yields this same
/// object; its values re-resolve as the cursor advances, so consumers that
/// need per-row independence must copy before stepping on.
pub struct RowFields {
    frame: Arc<Frame>,
    cursor: Rc<Cursor>,
}

impl RowFields {
    pub(crate) fn new(frame: Arc<Frame>, cursor: Rc<Cursor>) -> Self {
        Self { frame, cursor }
    }

    /// Number of fields, not rows.
    pub fn len(&self) -> usize {
        self.frame.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.columns.is_empty()
    }

    /// Row position the descriptors currently resolve against.
    pub fn row_index(&self) -> usize {
        self.cursor.get()
    }

    /// Column metadata at `position`.
    pub fn field(&self, position: usize) -> Option<&FrameColumn> {
        self.frame.columns.get(position)
    }

    /// Value of the field at `position`, read at the current cursor.
    pub fn value(&self, position: usize) -> Value {
        match self.frame.columns.get(position) {
            Some(column) => column.data.get_value(self.cursor.get()),
            None => Value::Undefined,
        }
    }

    /// Descriptor pairs `(field, value)` in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&FrameColumn, Value)> + '_ {
        let index = self.cursor.get();
        self.frame.columns.iter().map(move |column| (column, column.data.get_value(index)))
    }
}

/// One traversal protocol over all rows of a view.
///
/// [`Rows::iter`] starts a fresh lazy pass from row 0; [`Rows::map`] runs an
/// eager pass. Both drive the view's shared cursor, so interleaving two
/// passes over the same view corrupts the apparent row contents.
pub struct Rows<'v> {
    view: &'v FrameView,
}

impl<'v> Rows<'v> {
    pub(crate) fn new(view: &'v FrameView) -> Self {
        Self { view }
    }

    pub fn iter(&self) -> RowsIter<'v> {
        RowsIter { view: self.view, row_index: 0, row_total: self.view.len() }
    }

    /// Calls `transform` exactly once per row, strictly in ascending index
    /// order, and collects the results.
    pub fn map<T>(&self, mut transform: impl FnMut(&RowFields, usize) -> T) -> Vec<T> {
        let row_total = self.view.len();
        let mut out = Vec::with_capacity(row_total);
        for index in 0..row_total {
            self.view.cursor.set(index);
            out.push(transform(&self.view.fields, index));
        }
        out
    }
}

impl<'v> IntoIterator for Rows<'v> {
    type Item = &'v RowFields;
    type IntoIter = RowsIter<'v>;

    fn into_iter(self) -> RowsIter<'v> {
        self.iter()
    }
}

/// Lazy single-pass over the rows; yields the shared field descriptors
/// after advancing the cursor.
pub struct RowsIter<'v> {
    view: &'v FrameView,
    row_index: usize,
    row_total: usize,
}

impl<'v> Iterator for RowsIter<'v> {
    type Item = &'v RowFields;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row_index >= self.row_total {
            return None;
        }

        self.view.cursor.set(self.row_index);
        self.row_index += 1;

        Some(&self.view.fields)
    }
}

#[cfg(test)]
mod tests {
    use crate::FrameView;
    use frame::{Frame, FrameColumn};
    use std::sync::Arc;

    fn test_view() -> FrameView {
        FrameView::new(Arc::new(Frame::new(vec![
            FrameColumn::text("name", ["a", "b", "c"]),
            FrameColumn::int2("score", [10, 20, 30]),
        ])))
    }

    mod iter {
        use super::test_view;
        use crate::{FrameView, RowFields};
        use base::Value;
        use frame::{Frame, FrameColumn};
        use std::sync::Arc;

        #[test]
        fn test_ascending_order() {
            let view = test_view();

            let mut seen = Vec::new();
            for fields in view.rows() {
                seen.push((fields.row_index(), fields.value(1)));
            }

            assert_eq!(
                seen,
                vec![
                    (0, Value::Int2(10)),
                    (1, Value::Int2(20)),
                    (2, Value::Int2(30)),
                ]
            );
        }

        #[test]
        fn test_restartable() {
            let view = test_view();

            let first: Vec<usize> = view.rows().map(|_, index| index);
            let second: Vec<usize> = view.rows().iter().map(|fields| fields.row_index()).collect();

            assert_eq!(first, vec![0, 1, 2]);
            assert_eq!(second, vec![0, 1, 2]);
        }

        #[test]
        fn test_yields_shared_object() {
            let view = test_view();
            let rows = view.rows();
            let mut iter = rows.iter();

            let first = iter.next().unwrap() as *const RowFields;
            let second = iter.next().unwrap() as *const RowFields;

            assert_eq!(first, second);
        }

        #[test]
        fn test_retained_fields_follow_cursor() {
            let view = test_view();
            let rows = view.rows();
            let mut iter = rows.iter();

            let fields = iter.next().unwrap();
            assert_eq!(fields.value(1), Value::Int2(10));

            iter.next();

            // same object, cursor moved on
            assert_eq!(fields.value(1), Value::Int2(20));
        }

        #[test]
        fn test_empty_never_yields() {
            let view = FrameView::new(Arc::new(Frame::new(vec![])));

            assert!(view.rows().iter().next().is_none());
        }

        #[test]
        fn test_field_metadata() {
            let view = test_view();
            let rows = view.rows();
            let fields = rows.iter().next().unwrap();

            assert_eq!(fields.len(), 2);
            assert_eq!(fields.field(0).map(|c| c.name.as_str()), Some("name"));
            assert_eq!(fields.field(9), None);
            assert_eq!(fields.value(9), Value::Undefined);

            let pairs: Vec<(String, Value)> =
                fields.iter().map(|(field, value)| (field.name.clone(), value)).collect();
            assert_eq!(
                pairs,
                vec![
                    ("name".to_string(), Value::Text("a".to_string())),
                    ("score".to_string(), Value::Int2(10)),
                ]
            );
        }
    }

    mod map {
        use super::test_view;
        use crate::FrameView;
        use base::Value;
        use frame::{Frame, FrameColumn};
        use std::sync::Arc;

        #[test]
        fn test_index_order() {
            let view = test_view();

            assert_eq!(view.rows().map(|_, index| index), vec![0, 1, 2]);
        }

        #[test]
        fn test_values() {
            let view = test_view();

            let names = view.rows().map(|fields, _| fields.value(0));
            assert_eq!(
                names,
                vec![
                    Value::Text("a".to_string()),
                    Value::Text("b".to_string()),
                    Value::Text("c".to_string()),
                ]
            );
        }

        #[test]
        fn test_empty_never_invokes() {
            let view = FrameView::new(Arc::new(Frame::new(vec![])));

            let mut calls = 0;
            let out: Vec<usize> = view.rows().map(|_, index| {
                calls += 1;
                index
            });

            assert!(out.is_empty());
            assert_eq!(calls, 0);
        }
    }
}
