mod academy;
mod media;
mod response;

pub use academy::{AcademyRecord, PlaylistConfig};
pub use media::{MediaItem, MediaType, StoredObject};
pub use response::{MediaListResponse, PlaylistResponse};
