//! Column type model
//!
//! `FieldDescriptor` is what a Parquet file declares for a column, reduced to
//! the physical types the catalog knows about. `TargetType` is what the
//! catalog records for it.

use arrow::datatypes::{DataType, Field, TimeUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical column type as read from the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhysicalType {
    UInt32,
    UInt64,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    Date32,
    Date64,
    TimestampMillis,
    TimestampMicros,
    TimestampNanos,
    Utf8,
    /// Any other Arrow type; carries its display name for diagnostics
    Unsupported(String),
}

impl PhysicalType {
    /// Classify an Arrow data type.
    ///
    /// Timestamps only match without a timezone; zoned timestamps and
    /// second precision fall through to `Unsupported`.
    pub fn from_arrow(data_type: &DataType) -> Self {
        match data_type {
            DataType::UInt32 => Self::UInt32,
            DataType::UInt64 => Self::UInt64,
            DataType::Int32 => Self::Int32,
            DataType::Int64 => Self::Int64,
            DataType::Float32 => Self::Float32,
            DataType::Float64 => Self::Float64,
            DataType::Boolean => Self::Boolean,
            DataType::Date32 => Self::Date32,
            DataType::Date64 => Self::Date64,
            DataType::Timestamp(TimeUnit::Millisecond, None) => Self::TimestampMillis,
            DataType::Timestamp(TimeUnit::Microsecond, None) => Self::TimestampMicros,
            DataType::Timestamp(TimeUnit::Nanosecond, None) => Self::TimestampNanos,
            DataType::Utf8 => Self::Utf8,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Bit width for integer types
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            Self::UInt32 | Self::Int32 => Some(32),
            Self::UInt64 | Self::Int64 => Some(64),
            _ => None,
        }
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt32 => write!(f, "uint32"),
            Self::UInt64 => write!(f, "uint64"),
            Self::Int32 => write!(f, "int32"),
            Self::Int64 => write!(f, "int64"),
            Self::Float32 => write!(f, "float"),
            Self::Float64 => write!(f, "double"),
            Self::Boolean => write!(f, "bool"),
            Self::Date32 => write!(f, "date32"),
            Self::Date64 => write!(f, "date64"),
            Self::TimestampMillis => write!(f, "timestamp[ms]"),
            Self::TimestampMicros => write!(f, "timestamp[us]"),
            Self::TimestampNanos => write!(f, "timestamp[ns]"),
            Self::Utf8 => write!(f, "string"),
            Self::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

/// A column as declared in a source file's schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub nullable: bool,
    pub physical_type: PhysicalType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, physical_type: PhysicalType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            nullable,
            physical_type,
        }
    }

    /// Build a descriptor from an Arrow field
    pub fn from_arrow(field: &Field) -> Self {
        Self {
            name: field.name().clone(),
            nullable: field.is_nullable(),
            physical_type: PhysicalType::from_arrow(field.data_type()),
        }
    }
}

/// Base type in the catalog vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseType {
    #[serde(rename = "int")]
    Int,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "bool")]
    Bool,
    Date,
    Timestamp,
    String,
}

/// Catalog type record for one column.
///
/// `base` is `None` (JSON `null`) for unsupported physical types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetType {
    pub base: Option<BaseType>,
    pub props: Vec<String>,
    pub nullable: bool,
}

impl TargetType {
    /// Whether the source type had a counterpart in the catalog vocabulary
    pub fn is_mapped(&self) -> bool {
        self.base.is_some()
    }
}
