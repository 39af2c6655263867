//! Unibuild Build Engine
//!
//! Orchestrates standalone player builds of a Unity project into archived
//! releases. The engine invokes the external editor in batch mode once per
//! target, marks the produced player executable where required, and hands
//! the output directory to the external archiver.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                BuildPipeline                  │
//! │  ┌──────────┐  ┌──────────┐  ┌────────────┐  │
//! │  │ Build    │→ │ Fixer    │→ │ Archiver   │  │
//! │  │ Driver   │  │ (chmod)  │  │ (7z)       │  │
//! │  └─────┬────┘  └─────┬────┘  └──────┬─────┘  │
//! │        ▼             ▼              ▼         │
//! │  ┌─────────────────────────────────────────┐  │
//! │  │        Destination Root (Disk)          │  │
//! │  │  Windows/  OSX/  Linux/  Name_OSX.zip   │  │
//! │  └─────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Targets are processed strictly in sequence; every external process
//! blocks the run until it exits, and the first failure halts the run.

pub mod archive;
pub mod capability;
pub mod driver;
pub mod editor;
pub mod fixer;
pub mod pipeline;
pub mod report;

pub use pipeline::*;
