//! Fluent, chainable configuration of mutable values over composable
//! keypaths.
//!
//! A chain starts from any `&mut` value via [`Tidyable::tidy`], threads
//! "set property to value" steps through typed keypaths, and optionally
//! terminates with [`Tidy::configure`] to get the configured value back.
//! Nested properties are reached with [`Tidy::at`]; optional properties
//! with [`Tidy::at_some`], where a write through an absent `Option` is
//! dropped and reported through the `log` facade instead of failing the
//! chain.
//!
//! Keypaths are plain getter closures wrapped in [`KeyPath`] /
//! [`WritableKeyPath`]; derive them per field with `#[derive(Paths)]` from
//! tidy-derive, or spell them out with the [`path!`] macro.
//!
//! # Examples
//!
//! ```
//! use tidy::{Tidyable, WritableKeyPath, FieldPathMut};
//!
//! #[derive(Default)]
//! struct Label {
//!     text: String,
//!     size: u32,
//! }
//!
//! impl Label {
//!     fn text() -> FieldPathMut<Label, String> {
//!         WritableKeyPath::new(|l: &mut Label| &mut l.text)
//!     }
//!
//!     fn size() -> FieldPathMut<Label, u32> {
//!         WritableKeyPath::new(|l: &mut Label| &mut l.size)
//!     }
//! }
//!
//! let mut label = Label::default();
//! label
//!     .tidy()
//!     .set(Label::text(), "Save".to_string())
//!     .set(Label::size(), 14);
//!
//! assert_eq!(label.text, "Save");
//! assert_eq!(label.size, 14);
//! ```

mod chain;
mod diag;
mod macros;
mod paths;

pub use chain::{OptProp, Prop, Tidy};
pub use diag::SkippedWrite;
pub use paths::{FieldPath, FieldPathMut, KeyPath, WritableKeyPath};

/// Entry point: anything mutable can open a configuration chain.
pub trait Tidyable: Sized {
    /// Begin a chain over `self`. The call site becomes the chain's
    /// attribution point for skipped optional writes.
    #[track_caller]
    fn tidy(&mut self) -> Tidy<'_, Self> {
        Tidy::new(self)
    }
}

impl<T> Tidyable for T {}
