//! Shallow schema validation for candidate scenes
//!
//! The external generator is contracted to return a complete replacement
//! scene as JSON. That response is untrusted input: before a candidate may
//! replace the live scene it must pass this check. The check is
//! intentionally shallow — a guard against a malformed response, not a
//! geometry checker. Required top-level entities must be present with their
//! required sub-fields, and enumerated fields must carry a listed spelling.

use crate::model::Scene;
use schemars::schema::RootSchema;
use serde_json::Value;

/// Accepted spellings for enumerated scene fields
const UNITS: &[&str] = &["m"];
const PLOT_SHAPES: &[&str] = &["L", "Rect"];
const OFFICE_MATERIALS: &[&str] = &["concrete", "steel", "container"];
const WAREHOUSE_MATERIALS: &[&str] = &["steel", "concrete"];
const ROOF_TYPES: &[&str] = &["pitched", "flat"];
const PERIMETER_SIDES: &[&str] = &["N", "W", "S", "E"];

/// Why a candidate scene was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    /// A required entity or sub-field is absent
    #[error("missing required field: {field}")]
    MissingRequiredField {
        /// Dotted path of the absent field
        field: &'static str,
    },

    /// An enumerated field carries an unrecognized spelling
    #[error("invalid value for {field}: {value}")]
    InvalidEnumValue {
        /// Dotted path of the offending field
        field: &'static str,
        /// The spelling that was rejected
        value: String,
    },

    /// The candidate does not deserialize into the typed model
    #[error("malformed scene: {0}")]
    Malformed(String),
}

fn require<'a>(
    parent: &'a Value,
    key: &str,
    field: &'static str,
) -> Result<&'a Value, SchemaViolation> {
    parent
        .get(key)
        .filter(|v| !v.is_null())
        .ok_or(SchemaViolation::MissingRequiredField { field })
}

fn check_enum(
    value: &Value,
    field: &'static str,
    allowed: &[&str],
) -> Result<(), SchemaViolation> {
    match value.as_str() {
        Some(s) if allowed.contains(&s) => Ok(()),
        Some(s) => Err(SchemaViolation::InvalidEnumValue {
            field,
            value: s.to_string(),
        }),
        None => Err(SchemaViolation::InvalidEnumValue {
            field,
            value: value.to_string(),
        }),
    }
}

/// Validate a candidate scene value.
///
/// Acceptance bar: a plot object (shape + bounds), a non-empty offices
/// list (each office with id, position, size, material, color), and a
/// warehouse object (id, position, size, material, colors, roof). Optional
/// sections are only enum-checked when present.
///
/// # Errors
/// [`SchemaViolation::MissingRequiredField`] or
/// [`SchemaViolation::InvalidEnumValue`] describing the first problem found.
pub fn validate(candidate: &Value) -> Result<(), SchemaViolation> {
    if !candidate.is_object() {
        return Err(SchemaViolation::Malformed(
            "top-level value is not an object".to_string(),
        ));
    }

    if let Some(units) = candidate.get("units") {
        check_enum(units, "units", UNITS)?;
    }

    let plot = require(candidate, "plot", "plot")?;
    check_enum(require(plot, "shape", "plot.shape")?, "plot.shape", PLOT_SHAPES)?;
    let bounds = require(plot, "bounds", "plot.bounds")?;
    require(bounds, "w", "plot.bounds.w")?;
    require(bounds, "h", "plot.bounds.h")?;

    let offices = require(candidate, "offices", "offices")?
        .as_array()
        .filter(|list| !list.is_empty())
        .ok_or(SchemaViolation::MissingRequiredField { field: "offices" })?;
    for office in offices {
        require(office, "id", "offices[].id")?;
        require(office, "x", "offices[].x")?;
        require(office, "y", "offices[].y")?;
        require(office, "w", "offices[].w")?;
        require(office, "h", "offices[].h")?;
        check_enum(
            require(office, "material", "offices[].material")?,
            "offices[].material",
            OFFICE_MATERIALS,
        )?;
        require(office, "color", "offices[].color")?;
    }

    let warehouse = require(candidate, "warehouse", "warehouse")?;
    require(warehouse, "id", "warehouse.id")?;
    require(warehouse, "x", "warehouse.x")?;
    require(warehouse, "y", "warehouse.y")?;
    require(warehouse, "w", "warehouse.w")?;
    require(warehouse, "h", "warehouse.h")?;
    check_enum(
        require(warehouse, "material", "warehouse.material")?,
        "warehouse.material",
        WAREHOUSE_MATERIALS,
    )?;
    require(warehouse, "wallColor", "warehouse.wallColor")?;
    require(warehouse, "roofColor", "warehouse.roofColor")?;
    let roof = require(warehouse, "roof", "warehouse.roof")?;
    check_enum(
        require(roof, "type", "warehouse.roof.type")?,
        "warehouse.roof.type",
        ROOF_TYPES,
    )?;
    require(roof, "skylights", "warehouse.roof.skylights")?;

    if let Some(sides) = candidate
        .get("landscape")
        .and_then(|l| l.get("perimeter"))
        .and_then(Value::as_array)
    {
        for side in sides {
            check_enum(side, "landscape.perimeter[]", PERIMETER_SIDES)?;
        }
    }

    Ok(())
}

/// Validate, then deserialize a candidate into the typed model.
///
/// # Errors
/// Any [`SchemaViolation`]; a candidate that passes the shallow check but
/// still fails typed deserialization is reported as
/// [`SchemaViolation::Malformed`].
pub fn parse_scene(candidate: Value) -> Result<Scene, SchemaViolation> {
    validate(&candidate)?;
    serde_json::from_value(candidate).map_err(|e| SchemaViolation::Malformed(e.to_string()))
}

/// JSON Schema for [`Scene`], shipped to the generator with every edit
/// request so the response is schema-constrained at the source.
#[must_use]
pub fn scene_json_schema() -> RootSchema {
    schemars::schema_for!(Scene)
}
