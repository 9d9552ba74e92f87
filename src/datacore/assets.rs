//! `datacore::assets` submodule provides traits that encapsulate work with assets.
//!
//! It defines traits like [`FromFile`] and [`ToFile`] that are implemented on structs which are
//! either serializable or deserializable.
//!
//! `driftengine` serializes `Rust`-side data by using Concise Binary Object Representation format.
//! Data formats that are not expressible through `serde` (images, fonts) provide their own
//! loading entry points in their submodules.
//!

use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{Error, ErrorKind},
    path::Path,
};

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
/// There is an auto implementation on all types that implement `serde::Deserialize` and there is also
/// manual implementation on [`Image`](crate::datacore::images::Image) which is loaded through
/// the underlying multimedia library.
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(&filename)?;
        debug!("loading asset from {:?}", filename.as_ref());
        serde_cbor::from_reader(file)
            .map_err(|_| Error::new(ErrorKind::InvalidData, "Wrong data format"))
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
/// There is an auto implementation on all types that implement `serde::Serialize`.
///
/// Data that is fully external to `driftengine` (fonts, images) is not saveable -
/// it can only be retrieved externally, so serializing it back is pointless.
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    /// All manual implementations should follow this principle for uniformity.
    ///
    /// This function fails if file creation or truncation fails or if data is not
    /// serializable by CBOR.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error> {
        let file = File::create(filename)?;
        serde_cbor::to_writer(file, self)
            .map_err(|_| Error::new(ErrorKind::InvalidInput, "Wrong data format"))
    }
}

#[cfg(test)]
mod tests {
    use super::{FromFile, ToFile};
    use std::env::temp_dir;
    use std::path::PathBuf;

    #[test]
    fn roundtrip_through_file() {
        let path: PathBuf = temp_dir().join("driftengine_assets_test.cbor");

        let data: Vec<String> = vec![String::from("drift"), String::from("engine")];
        data.to_file(path.as_path()).expect("Temp dir should be writable");

        let restored: Vec<String> =
            Vec::from_file(path.as_path()).expect("Just written file should be readable");
        assert_eq!(restored, data);
    }

    #[test]
    fn missing_file_errors() {
        assert!(String::from_file("definitely/not/a/file.cbor").is_err());
    }
}
