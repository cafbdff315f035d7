//! Labels and the factories that produce them.
//!
//! A [`LabelFactory`] turns a label name into the full [`LabelAttributes`]
//! record that is created on the target tracker. Factories must be pure and
//! deterministic: the same name always yields the same record.

mod attributes;
mod style;

pub use attributes::{LabelAttributes, COLOR_KEY, DESCRIPTION_KEY, NAME_KEY};
pub use style::LabelStyle;

/// Produces label attributes from a label name.
///
/// Implemented by [`LabelStyle`] and by any `Fn(&str) -> LabelAttributes`.
pub trait LabelFactory {
    /// Creates the label record for `name`.
    fn create(&self, name: &str) -> LabelAttributes;
}

impl<F> LabelFactory for F
where
    F: Fn(&str) -> LabelAttributes,
{
    fn create(&self, name: &str) -> LabelAttributes {
        self(name)
    }
}
