//! Deferred decoding of stored geometries.

use std::sync::OnceLock;

use log::trace;

use crate::error::{GeoError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::{read_wkb, ReaderOptions};

/// WKB bytes that are decoded into a [`Geometry`] on first access only.
///
/// The bytes are kept unchanged, so a proxy that is never inspected can be written back
/// without paying for a decode and re-encode.
///
/// ```
/// use sfgeo::io::wkb::ReaderOptions;
/// use sfgeo::GeometryProxy;
///
/// let bytes = vec![
///     0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F, 0x00,
///     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
/// ];
/// let proxy = GeometryProxy::new(bytes, ReaderOptions::default());
/// assert!(!proxy.is_loaded());
/// assert_eq!(proxy.geometry().unwrap().geometry_type(), "Point");
/// assert!(proxy.is_loaded());
/// ```
#[derive(Debug)]
pub struct GeometryProxy {
    bytes: Vec<u8>,
    options: ReaderOptions,
    geometry: OnceLock<Geometry>,
}

impl GeometryProxy {
    pub fn new(bytes: Vec<u8>, options: ReaderOptions) -> Self {
        Self {
            bytes,
            options,
            geometry: OnceLock::new(),
        }
    }

    /// The decoded geometry.
    ///
    /// Decoding happens on the first successful call. A failed decode is not cached, and is
    /// attempted again by the next call.
    pub fn geometry(&self) -> Result<&Geometry> {
        if let Some(geom) = self.geometry.get() {
            return Ok(geom);
        }
        trace!("Loading proxied geometry of {} bytes", self.bytes.len());
        let geom = read_wkb(&self.bytes, &self.options)?;
        Ok(self.geometry.get_or_init(|| geom))
    }

    /// Whether the geometry has been decoded already.
    pub fn is_loaded(&self) -> bool {
        self.geometry.get().is_some()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Decode the geometry, if it has not been already, and take ownership of it.
    pub fn into_geometry(self) -> Result<Geometry> {
        match self.geometry.into_inner() {
            Some(geom) => Ok(geom),
            None => read_wkb(&self.bytes, &self.options),
        }
    }
}

impl TryFrom<Geometry> for GeometryProxy {
    type Error = GeoError;

    /// Wrap an already decoded geometry, along with its EWKB encoding.
    fn try_from(geom: Geometry) -> Result<Self> {
        let bytes = geom.as_ewkb()?;
        Ok(Self {
            bytes,
            options: ReaderOptions::default(),
            geometry: OnceLock::from(geom),
        })
    }
}
