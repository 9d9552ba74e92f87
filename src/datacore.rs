//! `driftengine::datacore` module is a core that implements work with data formats
//! that are external to the engine - serialized configs, images and truetype fonts.
//!
//! # Model
//! Serializable engine data (e.g. widget themes) goes through the [`assets::FromFile`] and
//! [`assets::ToFile`] traits which use Concise Binary Object Representation format.
//! Binary formats that the engine cannot produce itself (images, fonts) get manual
//! loading implementations on top of the underlying multimedia library.
//!

pub mod assets;
pub mod fonts;
pub mod images;
