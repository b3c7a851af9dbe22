// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Building a view from an absent frame masks a caller bug; fail fast
    /// instead of producing a view that silently behaves as empty.
    #[error("row view requires a frame, but none was supplied")]
    FrameMissing,
}
