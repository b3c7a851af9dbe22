// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use base::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A value rendered for presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayValue {
    pub text: String,
    pub numeric: Option<f64>,
}

/// Shared formatting function attached to a column.
///
/// Equality is pointer identity: a lookup hands back the processor
/// unchanged, never a copy of its behavior.
#[derive(Clone)]
pub struct DisplayProcessor(Arc<dyn Fn(&Value) -> DisplayValue + Send + Sync>);

impl DisplayProcessor {
    pub fn new(process: impl Fn(&Value) -> DisplayValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(process))
    }

    pub fn process(&self, value: &Value) -> DisplayValue {
        (self.0)(value)
    }
}

impl PartialEq for DisplayProcessor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for DisplayProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DisplayProcessor")
    }
}
