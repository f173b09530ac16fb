//! Physical type to catalog type mapping
//!
//! | Physical type              | base      | props       |
//! |----------------------------|-----------|-------------|
//! | uint32 / uint64            | int       | bit width   |
//! | int32 / int64              | int       | bit width   |
//! | float / double             | float     |             |
//! | bool                       | bool      | `i1`        |
//! | date32 / date64            | Date      |             |
//! | timestamp (ms / us / ns)   | Timestamp |             |
//! | string                     | String    |             |
//! | anything else              | null      |             |

use crate::types::{BaseType, FieldDescriptor, PhysicalType, TargetType};
use tracing::warn;

/// Storage-size marker recorded for booleans
pub const BOOL_PROP: &str = "i1";

/// Map a field to its catalog type. Nullability is copied unchanged.
pub fn map_field(field: &FieldDescriptor) -> TargetType {
    let (base, props) = match &field.physical_type {
        PhysicalType::UInt32 | PhysicalType::UInt64 | PhysicalType::Int32 | PhysicalType::Int64 => {
            let width = field
                .physical_type
                .bit_width()
                .map(|w| vec![w.to_string()])
                .unwrap_or_default();
            (Some(BaseType::Int), width)
        }
        PhysicalType::Float32 | PhysicalType::Float64 => (Some(BaseType::Float), vec![]),
        PhysicalType::Boolean => (Some(BaseType::Bool), vec![BOOL_PROP.to_string()]),
        PhysicalType::Date32 | PhysicalType::Date64 => (Some(BaseType::Date), vec![]),
        PhysicalType::TimestampMillis
        | PhysicalType::TimestampMicros
        | PhysicalType::TimestampNanos => (Some(BaseType::Timestamp), vec![]),
        PhysicalType::Utf8 => (Some(BaseType::String), vec![]),
        PhysicalType::Unsupported(name) => {
            warn!(
                column = %field.name,
                physical_type = %name,
                "No catalog type for column, recording base=null"
            );
            (None, vec![])
        }
    };

    TargetType {
        base,
        props,
        nullable: field.nullable,
    }
}
