//! Scene descriptors and the build routine that turns them into instances.
//!
//! A scene is authored as plain data: a tree of [`spec::NodeSpec`] values plus
//! lights, fog, and sky parameters. [`build::build_scene`] flattens the tree
//! into a [`build::BuiltScene`] whose instances reference shared geometry and
//! material tables, expanding scatter nodes through their sampling strategy.
pub mod build;
pub mod color;
pub mod spec;

pub use build::{build_scene, BuiltScene, Instance, WorldTransform};
pub use color::Color;
