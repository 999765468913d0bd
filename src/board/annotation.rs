//! Tile annotations: module-owned side-channel data.
//!
//! Modules attach auxiliary data to tiles (mine counts, spawn markers, fog
//! reasons) without widening the tile schema. Keys are plain strings; modules
//! should prefix them with their own id to stay out of each other's way.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Value stored in a tile annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    /// Integer value (mine count, hit points).
    Int(i64),
    /// Boolean flag (flagged, trapped).
    Bool(bool),
    /// Text value (owning module, label).
    Text(String),
    /// List of integers.
    IntList(Vec<i64>),
}

impl AnnotationValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnnotationValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnnotationValue::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            AnnotationValue::IntList(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for AnnotationValue {
    fn from(v: i64) -> Self {
        AnnotationValue::Int(v)
    }
}

impl From<i32> for AnnotationValue {
    fn from(v: i32) -> Self {
        AnnotationValue::Int(v as i64)
    }
}

impl From<bool> for AnnotationValue {
    fn from(v: bool) -> Self {
        AnnotationValue::Bool(v)
    }
}

impl From<String> for AnnotationValue {
    fn from(v: String) -> Self {
        AnnotationValue::Text(v)
    }
}

impl From<&str> for AnnotationValue {
    fn from(v: &str) -> Self {
        AnnotationValue::Text(v.to_string())
    }
}

impl From<Vec<i64>> for AnnotationValue {
    fn from(v: Vec<i64>) -> Self {
        AnnotationValue::IntList(v)
    }
}

/// Annotation map carried by every tile.
pub type Annotations = FxHashMap<String, AnnotationValue>;
