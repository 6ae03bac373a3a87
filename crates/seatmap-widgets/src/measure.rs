#![forbid(unsafe_code)]

//! The host measurement contract.
//!
//! Hosts offer the widget space one axis at a time: an exact size, an
//! upper bound, or no constraint. The contract is a closed enum, so an
//! unsupported mode is unrepresentable rather than a runtime fault.

/// How the host constrains one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The widget must be exactly this size.
    Exact,
    /// The widget may pick its own size up to this bound.
    AtMost,
    /// The host imposes nothing; the offered size is advisory.
    Unspecified,
}

/// One axis of a measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    /// The constraint mode.
    pub mode: MeasureMode,
    /// The offered size in pixels.
    pub size: i32,
}

impl MeasureSpec {
    /// An exact constraint.
    #[must_use]
    pub const fn exact(size: i32) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    /// An upper-bound constraint.
    #[must_use]
    pub const fn at_most(size: i32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint.
    #[must_use]
    pub const fn unspecified(size: i32) -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size,
        }
    }

    /// Resolve this axis against the widget's computed requirement.
    ///
    /// `Exact` and `Unspecified` pass the host size through; `AtMost`
    /// substitutes the requirement, which the host then caps on its side.
    #[must_use]
    pub const fn resolve(self, required: i32) -> i32 {
        match self.mode {
            MeasureMode::Exact | MeasureMode::Unspecified => self.size,
            MeasureMode::AtMost => required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MeasureSpec;

    #[test]
    fn exact_and_unspecified_pass_through() {
        assert_eq!(MeasureSpec::exact(640).resolve(410), 640);
        assert_eq!(MeasureSpec::unspecified(640).resolve(410), 640);
    }

    #[test]
    fn at_most_substitutes_the_requirement() {
        assert_eq!(MeasureSpec::at_most(640).resolve(410), 410);
    }
}
