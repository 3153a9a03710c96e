//! Validation outcomes.
//!
//! Every failure is a returned value of [`ValidationError`] — nothing in the
//! engine panics or throws. Each error carries the [`Path`] from the schema
//! root to the offending position so callers can report "wrong type at /2/id"
//! without re-traversing the value.

use serde::Serialize;
use thiserror::Error;

use crate::value::Kind;

/// Result of a validation pass. `Ok(())` is the dedicated success value.
pub type Validation = Result<(), ValidationError>;

/// One step from a container down into a child value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Segment {
    /// Array element position.
    Index(usize),
    /// Object member name.
    Field(String),
}

/// Location of a failure, relative to the schema root the caller invoked.
///
/// Renders JSON-Pointer style: `/` for the root value itself, `/2/id` for
/// field `id` of element 2.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The root value itself.
    pub fn root() -> Self {
        Path(Vec::new())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    fn prepend(&mut self, seg: Segment) {
        self.0.insert(0, seg);
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for seg in &self.0 {
            match seg {
                Segment::Index(i) => write!(f, "/{i}")?,
                Segment::Field(name) => write!(f, "/{name}")?,
            }
        }
        Ok(())
    }
}

/// The closed set of validation failures.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidationError {
    #[error("wrong type at {path}: expected {expected}, found {found}")]
    WrongType {
        path: Path,
        expected: Kind,
        found: Kind,
    },

    #[error("array size {size} at {path} outside {}", bounds(.min, .max))]
    SizeOutOfRange {
        path: Path,
        size: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    #[error("value {value} at {path} outside {}", bounds(.min, .max))]
    ValueOutOfRange {
        path: Path,
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },

    #[error("string length {length} at {path} outside {}", bounds(.min, .max))]
    LengthOutOfRange {
        path: Path,
        length: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    #[error("missing mandatory field `{field}` at {path}")]
    MissingMandatoryField { path: Path, field: String },

    #[error("unexpected field `{field}` at {path}")]
    UnexpectedField { path: Path, field: String },

    #[error("`{symbol}` at {path} is not an allowed enumeration symbol")]
    InvalidEnumSymbol { path: Path, symbol: String },

    #[error("string at {path} does not match pattern `{pattern}`")]
    PatternMismatch { path: Path, pattern: String },
}

impl ValidationError {
    /// Where the failure occurred.
    pub fn path(&self) -> &Path {
        match self {
            ValidationError::WrongType { path, .. }
            | ValidationError::SizeOutOfRange { path, .. }
            | ValidationError::ValueOutOfRange { path, .. }
            | ValidationError::LengthOutOfRange { path, .. }
            | ValidationError::MissingMandatoryField { path, .. }
            | ValidationError::UnexpectedField { path, .. }
            | ValidationError::InvalidEnumSymbol { path, .. }
            | ValidationError::PatternMismatch { path, .. } => path,
        }
    }

    /// Re-root a child error under a container segment, on the way out of a
    /// recursive call. First failure wins; containers only ever call this once.
    pub(crate) fn nested(mut self, seg: Segment) -> Self {
        match &mut self {
            ValidationError::WrongType { path, .. }
            | ValidationError::SizeOutOfRange { path, .. }
            | ValidationError::ValueOutOfRange { path, .. }
            | ValidationError::LengthOutOfRange { path, .. }
            | ValidationError::MissingMandatoryField { path, .. }
            | ValidationError::UnexpectedField { path, .. }
            | ValidationError::InvalidEnumSymbol { path, .. }
            | ValidationError::PatternMismatch { path, .. } => path.prepend(seg),
        }
        self
    }
}

fn bounds<T: std::fmt::Display>(min: &Option<T>, max: &Option<T>) -> String {
    let lo = min.as_ref().map_or("unbounded".to_string(), T::to_string);
    let hi = max.as_ref().map_or("unbounded".to_string(), T::to_string);
    format!("[{lo}, {hi}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_render_json_pointer_style() {
        let err = ValidationError::WrongType {
            path: Path::root(),
            expected: Kind::Number,
            found: Kind::String,
        };
        assert_eq!(err.path().to_string(), "/");

        let err = err
            .nested(Segment::Field("id".into()))
            .nested(Segment::Index(2));
        assert_eq!(err.path().to_string(), "/2/id");
    }

    #[test]
    fn messages_spell_out_unbounded_sides() {
        let err = ValidationError::SizeOutOfRange {
            path: Path::root(),
            size: 4,
            min: Some(1),
            max: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("[1, unbounded]"), "{msg}");
    }
}
