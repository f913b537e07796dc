//! Multipart extraction and public URL construction for uploads.

mod multipart;
mod url;

pub use multipart::extract_file;
pub use url::public_url;
