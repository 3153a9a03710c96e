//! Optional schema parameter: a constraint or default that is explicitly
//! present or absent, never a sentinel value of the underlying type.

/// A schema parameter that is either unset (no constraint) or set to a value.
///
/// Wrapping `Option<T>` keeps "absent" and "zero" distinct: an unset minimum
/// size means *unbounded*, not `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Param<T>(Option<T>);

impl<T> Param<T> {
    /// No constraint.
    pub fn unset() -> Self {
        Param(None)
    }

    /// A concrete constraint value.
    pub fn set(value: T) -> Self {
        Param(Some(value))
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T: Copy> Param<T> {
    pub fn value(&self) -> Option<T> {
        self.0
    }
}

impl<T> From<Option<T>> for Param<T> {
    fn from(opt: Option<T>) -> Self {
        Param(opt)
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Param(Some(value))
    }
}
