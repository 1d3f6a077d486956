//! # lucent-codec
//!
//! Binary persistence for Lucent triangle meshes.
//!
//! ## Key Types
//!
//! - [`BinaryStream`] — byte-order-aware typed stream over any
//!   `Read`/`Write`/`Seek` source, with zlib continuation views.
//! - [`MeshInfo`] — serializable mesh summary for tools.
//!
//! ## Operations
//!
//! - [`save_compressed`] / [`load_compressed`] — the standalone
//!   compressed format (versions 3 and 4, multi-segment archives).
//! - [`save_embedded`] / [`load_embedded`] — the uncompressed embedded
//!   form used inside larger object streams.
//! - [`save_archive`] — multi-mesh archives with a random-access
//!   offset trailer.

pub mod format;
pub mod stream;

pub use format::{
    load_compressed, load_embedded, load_mesh_file, save_archive, save_compressed, save_embedded,
    save_mesh_file, MeshInfo,
};
pub use stream::{BinaryStream, ByteOrder};
