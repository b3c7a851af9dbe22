// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use base::{Value, ValueKind};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnValues {
    // value, is_valid
    Bool(Vec<bool>, Vec<bool>),
    Float8(Vec<f64>, Vec<bool>),
    Int2(Vec<i16>, Vec<bool>),
    Text(Vec<String>, Vec<bool>),

    // special case: all undefined
    Undefined(usize),
}

impl ColumnValues {
    pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
        let values: Vec<bool> = values.into_iter().collect();
        let len = values.len();
        ColumnValues::Bool(values, vec![true; len])
    }

    pub fn bool_with_validity(
        values: impl IntoIterator<Item = bool>,
        validity: impl IntoIterator<Item = bool>,
    ) -> Self {
        let values: Vec<bool> = values.into_iter().collect();
        let validity: Vec<bool> = validity.into_iter().collect();
        debug_assert_eq!(values.len(), validity.len());
        ColumnValues::Bool(values, validity)
    }

    pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        let len = values.len();
        ColumnValues::Float8(values, vec![true; len])
    }

    pub fn float8_with_validity(
        values: impl IntoIterator<Item = f64>,
        validity: impl IntoIterator<Item = bool>,
    ) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        let validity: Vec<bool> = validity.into_iter().collect();
        debug_assert_eq!(values.len(), validity.len());
        ColumnValues::Float8(values, validity)
    }

    pub fn int2(values: impl IntoIterator<Item = i16>) -> Self {
        let values: Vec<i16> = values.into_iter().collect();
        let len = values.len();
        ColumnValues::Int2(values, vec![true; len])
    }

    pub fn int2_with_validity(
        values: impl IntoIterator<Item = i16>,
        validity: impl IntoIterator<Item = bool>,
    ) -> Self {
        let values: Vec<i16> = values.into_iter().collect();
        let validity: Vec<bool> = validity.into_iter().collect();
        debug_assert_eq!(values.len(), validity.len());
        ColumnValues::Int2(values, validity)
    }

    pub fn text(values: impl IntoIterator<Item = String>) -> Self {
        let values: Vec<String> = values.into_iter().collect();
        let len = values.len();
        ColumnValues::Text(values, vec![true; len])
    }

    pub fn text_with_validity(
        values: impl IntoIterator<Item = String>,
        validity: impl IntoIterator<Item = bool>,
    ) -> Self {
        let values: Vec<String> = values.into_iter().collect();
        let validity: Vec<bool> = validity.into_iter().collect();
        debug_assert_eq!(values.len(), validity.len());
        ColumnValues::Text(values, validity)
    }

    pub fn undefined(len: usize) -> Self {
        ColumnValues::Undefined(len)
    }
}

impl ColumnValues {
    /// Value at `index`; out-of-range or invalid positions read as
    /// `Value::Undefined`.
    pub fn get_value(&self, index: usize) -> Value {
        match self {
            ColumnValues::Bool(v, b) => {
                if index < v.len() && b[index] {
                    Value::Bool(v[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnValues::Float8(v, b) => {
                if index < v.len() && b[index] {
                    Value::float8(v[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnValues::Int2(v, b) => {
                if index < v.len() && b[index] {
                    Value::Int2(v[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnValues::Text(v, b) => {
                if index < v.len() && b[index] {
                    Value::Text(v[index].clone())
                } else {
                    Value::Undefined
                }
            }
            ColumnValues::Undefined(_) => Value::Undefined,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Bool(_, b) => b.len(),
            ColumnValues::Float8(_, b) => b.len(),
            ColumnValues::Int2(_, b) => b.len(),
            ColumnValues::Text(_, b) => b.len(),
            ColumnValues::Undefined(n) => *n,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            ColumnValues::Bool(_, _) => ValueKind::Bool,
            ColumnValues::Float8(_, _) => ValueKind::Float8,
            ColumnValues::Int2(_, _) => ValueKind::Int2,
            ColumnValues::Text(_, _) => ValueKind::Text,
            ColumnValues::Undefined(_) => ValueKind::Undefined,
        }
    }

    pub fn is_undefined(&self, index: usize) -> bool {
        self.get_value(index).is_undefined()
    }

    pub fn as_string(&self, index: usize) -> String {
        self.get_value(index).to_string()
    }
}
