//! Messages from the background image loader threads.
//!
//! Image files are read off the main thread, one thread per manifest entry,
//! and their raw bytes are handed back over a channel. Decoding and the GPU
//! upload happen on the main thread, which owns the GL context; see
//! [`crate::systems::assets::upload_loaded_images`].

/// Result of reading one image file.
#[derive(Debug)]
pub enum LoaderMsg {
    /// The file was read; bytes still need decoding and uploading.
    ImageBytes { id: &'static str, bytes: Vec<u8> },
    /// The file could not be read.
    ImageFailed { id: &'static str, error: String },
}
