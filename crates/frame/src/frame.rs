// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::FrameColumn;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Deref, Index};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub columns: Vec<FrameColumn>,
    pub row_count: usize,
}

impl Frame {
    pub fn new(columns: Vec<FrameColumn>) -> Self {
        let row_count = columns.first().map_or(0, |c| c.data.len());
        Self { columns, row_count }
    }

    pub fn with_row_count(columns: Vec<FrameColumn>, row_count: usize) -> Self {
        Self { columns, row_count }
    }
}

impl Deref for Frame {
    type Target = [FrameColumn];

    fn deref(&self) -> &Self::Target {
        &self.columns
    }
}

impl Index<usize> for Frame {
    type Output = FrameColumn;

    fn index(&self, index: usize) -> &Self::Output {
        self.columns.index(index)
    }
}

fn escape_control_chars(s: &str) -> String {
    s.replace('\n', "\\n").replace('\t', "\\t")
}

fn center(value: &str, width: usize) -> String {
    let pad = width.saturating_sub(value.chars().count());
    let l = pad / 2;
    let r = pad - l;
    format!(" {:l$}{}{:r$} ", "", value, "")
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Calculate column widths
        let mut col_widths: Vec<usize> = Vec::with_capacity(self.columns.len());
        for col in &self.columns {
            let header_width = escape_control_chars(&col.name).chars().count();
            let mut max_val_width = 0;
            for i in 0..self.row_count {
                max_val_width =
                    max_val_width.max(escape_control_chars(&col.data.as_string(i)).chars().count());
            }
            col_widths.push(header_width.max(max_val_width) + 2);
        }

        let sep: String = if col_widths.is_empty() {
            "++".to_string()
        } else {
            col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
        };

        writeln!(f, "{}", sep)?;

        let header_parts: Vec<String> = self
            .columns
            .iter()
            .zip(&col_widths)
            .map(|(col, w)| center(&escape_control_chars(&col.name), *w))
            .collect();
        writeln!(f, "|{}|", header_parts.join("|"))?;
        writeln!(f, "{}", sep)?;

        for row_idx in 0..self.row_count {
            let row_parts: Vec<String> = self
                .columns
                .iter()
                .zip(&col_widths)
                .map(|(col, w)| center(&escape_control_chars(&col.data.as_string(row_idx)), *w))
                .collect();
            writeln!(f, "|{}|", row_parts.join("|"))?;
        }

        writeln!(f, "{}", sep)
    }
}
