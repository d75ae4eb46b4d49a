//! mock-generator — C++ mock classes generated from ctags output.
//!
//! The pipeline has three stages:
//!
//! 1. [`ctags`] runs Universal Ctags and captures the tag listing
//! 2. [`tags`] parses the listing into a [`model::TagModel`]
//! 3. [`render`] writes a mock source or header for every parsed file

pub mod ctags;
pub mod model;
pub mod render;
pub mod tags;
