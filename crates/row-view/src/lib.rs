// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

pub use error::Error;
pub use iter::{RowFields, Rows, RowsIter};
pub use ops::RowOps;
pub use row::{Row, RowView};
pub use view::FrameView;

mod error;
mod iter;
mod ops;
mod row;
mod view;

pub type Result<T> = std::result::Result<T, Error>;
