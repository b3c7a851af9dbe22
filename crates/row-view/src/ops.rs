// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::row::{Row, RowView};

/// Index-driven sequence operations over the rows of a view.
///
/// Everything provided here is defined purely in terms of `len`, `row` and
/// `snapshot`; implementors only supply those three.
pub trait RowOps {
    /// Number of rows.
    fn len(&self) -> usize;

    /// Shared row moved to `index`; the implementor's aliasing rules apply.
    fn row(&self, index: usize) -> &RowView;

    /// Independent copy of the row at `index`.
    fn snapshot(&self, index: usize) -> Row;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn for_each(&self, mut apply: impl FnMut(&RowView)) {
        for index in 0..self.len() {
            apply(self.row(index));
        }
    }

    fn map_each<T>(&self, mut transform: impl FnMut(&RowView) -> T) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        for index in 0..self.len() {
            out.push(transform(self.row(index)));
        }
        out
    }

    /// Rows matching `keep`, copied out as snapshots; the shared row cannot
    /// be retained across steps.
    fn filter(&self, mut keep: impl FnMut(&RowView) -> bool) -> Vec<Row> {
        let mut rows = Vec::new();
        for index in 0..self.len() {
            if keep(self.row(index)) {
                rows.push(self.snapshot(index));
            }
        }
        rows
    }

    fn first(&self) -> Option<&RowView> {
        if self.is_empty() { None } else { Some(self.row(0)) }
    }

    fn last(&self) -> Option<&RowView> {
        match self.len() {
            0 => None,
            n => Some(self.row(n - 1)),
        }
    }
}
