/* src/index/mod.rs */

//!
//! Per-resource-type formatter resolution.
//!
//! - [`FormatterIndexBuilder`] - filters a config snapshot down to one
//!   resource type and fans the result out by container type.
//! - [`ResourceTypeFormatterView`] - the immutable result.
//! - [`FormatterInfo`] - presentation wrapper around a matched descriptor.

mod builder;
mod info;
mod resource;
mod view;

pub use builder::FormatterIndexBuilder;
pub use info::FormatterInfo;
pub use resource::ResourceType;
pub use view::ResourceTypeFormatterView;
