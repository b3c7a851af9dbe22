// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use frame::{DisplayProcessor, Frame};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use tracing::trace;

use crate::iter::{RowFields, Rows};
use crate::ops::RowOps;
use crate::row::{NameIndex, Row, RowView};
use crate::Error;

/// The row position every shared accessor resolves against.
#[derive(Debug, Default)]
pub(crate) struct Cursor {
    index: Cell<usize>,
}

impl Cursor {
    pub(crate) fn set(&self, index: usize) {
        self.index.set(index);
    }

    pub(crate) fn get(&self) -> usize {
        self.index.get()
    }
}

/// Row-oriented view over a columnar [`Frame`].
///
/// The view owns exactly one synthetic row for its whole lifetime.
/// [`FrameView::get`] moves the cursor and hands out a reference to that
/// same row; property reads resolve against the cursor at read time. This
/// avoids a per-row allocation on the common single-pass loop, so callers
/// that retain more than one row at once must copy through
/// [`FrameView::to_rows`]. Interleaving two traversals of one view corrupts
/// the apparent row contents, since every consumer observes the same
/// cursor; that constraint is part of the contract, not a defect.
pub struct FrameView {
    pub(crate) frame: Arc<Frame>,
    pub(crate) cursor: Rc<Cursor>,
    pub(crate) row: RowView,
    pub(crate) fields: RowFields,
}

impl FrameView {
    pub fn new(frame: Arc<Frame>) -> Self {
        let cursor = Rc::new(Cursor::default());
        let names = Arc::new(NameIndex::from_columns(&frame.columns));
        trace!(columns = frame.columns.len(), rows = frame.row_count, "building row view");

        let row = RowView::new(Arc::clone(&frame), Rc::clone(&cursor), names);
        let fields = RowFields::new(Arc::clone(&frame), Rc::clone(&cursor));
        Self { frame, cursor, row, fields }
    }

    /// Moves the cursor to `index` and returns the shared row.
    ///
    /// Always the same reference; only its contents change. Out-of-range
    /// indexes are accepted and read as `Undefined`.
    pub fn get(&self, index: usize) -> &RowView {
        self.cursor.set(index);
        &self.row
    }

    /// Number of rows the view exposes.
    pub fn len(&self) -> usize {
        self.frame.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The underlying frame, by reference; the view never copies it.
    pub fn frame(&self) -> &Arc<Frame> {
        &self.frame
    }

    /// Starts a traversal protocol over all rows (lazy `iter` or eager `map`).
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self)
    }

    /// Display processor of the column at `position`, if any.
    pub fn field_display_processor(&self, position: usize) -> Option<DisplayProcessor> {
        self.frame.columns.get(position).and_then(|column| column.display.clone())
    }

    /// Copies every row into an independent [`Row`], in row order.
    ///
    /// The only operation here that allocates per row; it is the sanctioned
    /// opt-out from the shared-row aliasing of [`FrameView::get`].
    pub fn to_rows(&self) -> Vec<Row> {
        let row_total = self.len();
        trace!(rows = row_total, "snapshotting row view");

        let mut rows = Vec::with_capacity(row_total);
        for index in 0..row_total {
            self.cursor.set(index);
            rows.push(self.row.snapshot());
        }
        rows
    }
}

impl TryFrom<Option<Arc<Frame>>> for FrameView {
    type Error = Error;

    fn try_from(frame: Option<Arc<Frame>>) -> crate::Result<Self> {
        match frame {
            Some(frame) => Ok(Self::new(frame)),
            None => Err(Error::FrameMissing),
        }
    }
}

impl RowOps for FrameView {
    fn len(&self) -> usize {
        FrameView::len(self)
    }

    fn row(&self, index: usize) -> &RowView {
        self.get(index)
    }

    fn snapshot(&self, index: usize) -> Row {
        self.cursor.set(index);
        self.row.snapshot()
    }
}
