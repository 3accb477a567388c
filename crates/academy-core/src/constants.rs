//! Shared constants for media listing and playlist defaults.

/// Root prefix under which every academy's media lives.
pub const ACADEMIES_PREFIX: &str = "academies";

/// Extensions treated as displayable images (lowercase, with leading dot).
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// Extensions treated as videos (lowercase, with leading dot).
pub const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".webm", ".avi"];

pub const DEFAULT_INTERVAL_SECONDS: i64 = 10;
pub const DEFAULT_SHUFFLE: bool = true;
pub const DEFAULT_LOOP: bool = true;
pub const DEFAULT_FADE_TRANSITION: bool = true;
pub const DEFAULT_ACADEMY_NAME: &str = "Academia";
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// User-facing message returned when the request carries no academy id.
pub const MISSING_ACADEMY_ID_MESSAGE: &str = "academy_id é obrigatório";
