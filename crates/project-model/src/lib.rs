//! Unibuild Project Model
//!
//! Represents the Unity project a build run operates on: the resolved
//! project directory, the project name derived from it, and the editor
//! version recorded in the project's settings metadata.

pub mod project;
pub mod version;

pub use project::*;
