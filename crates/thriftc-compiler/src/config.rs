//! Compiler configuration.

/// How fields without an explicit id are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImplicitIds {
    /// Assign -1, -2, ... in declaration order, per field group.
    #[default]
    Negative,
    /// Reject fields without an id.
    Deny,
}

/// Configuration for a compilation session.
#[derive(Clone, Debug)]
pub struct Config {
    /// Policy for fields that omit their id
    pub(crate) implicit_ids: ImplicitIds,
    /// Reject `required` fields in unions
    pub(crate) strict_unions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            implicit_ids: ImplicitIds::default(),
            strict_unions: true,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for fields without an explicit id.
    pub fn implicit_ids(mut self, value: ImplicitIds) -> Self {
        self.implicit_ids = value;
        self
    }

    /// Set whether union fields may not be `required`.
    pub fn strict_unions(mut self, value: bool) -> Self {
        self.strict_unions = value;
        self
    }
}
