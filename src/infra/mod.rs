//! External collaborators: the inventory API and the image bucket.

pub mod images;
pub mod skip_api;
