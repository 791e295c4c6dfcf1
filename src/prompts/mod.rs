//! Prompt construction for plan generation
//!
//! Prompt wording is configuration data, not logic: templates are Handlebars
//! documents compiled into the binary with an optional user override on disk.
//! The builder renders a [`crate::plan::StudyRequest`] (plus optional
//! feedback) into the natural-language prompt sent to the provider.

mod builder;
pub mod embedded;

pub use builder::{PromptBuilder, PromptContext};
