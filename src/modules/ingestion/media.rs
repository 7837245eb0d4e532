use std::fmt;

const VIDEO_PREFIX: &str = "video/";

/// Result of classifying an object's media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaClass {
    Video(String),
    Other(String),
    /// No type could be inferred from the path.
    Unknown,
}

impl MediaClass {
    pub fn is_video(&self) -> bool {
        matches!(self, MediaClass::Video(_))
    }
}

impl fmt::Display for MediaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaClass::Video(t) | MediaClass::Other(t) => f.write_str(t),
            MediaClass::Unknown => f.write_str("unknown"),
        }
    }
}

/// Infers a media type from the extension of `path`.
pub fn guess_from_path(path: &str) -> MediaClass {
    // Folder placeholders have no extension even if the last segment looks like one.
    if path.ends_with('/') {
        return MediaClass::Unknown;
    }
    match mime_guess::from_path(path).first() {
        Some(guessed) if guessed.type_() == mime::VIDEO => {
            MediaClass::Video(guessed.essence_str().to_string())
        }
        Some(guessed) => MediaClass::Other(guessed.essence_str().to_string()),
        None => MediaClass::Unknown,
    }
}

/// A declared `video/*` type is trusted as-is; anything else falls back to
/// the extension.
pub fn classify(declared: &str, path: &str) -> MediaClass {
    if declared.starts_with(VIDEO_PREFIX) {
        return MediaClass::Video(declared.to_string());
    }
    guess_from_path(path)
}

/// Extensions registered for `media_type`, dot-prefixed, in registry order.
pub fn candidate_suffixes(media_type: &str) -> Vec<String> {
    mime_guess::get_mime_extensions_str(media_type)
        .map(|exts| exts.iter().map(|ext| format!(".{}", ext)).collect())
        .unwrap_or_default()
}

/// Strips the first candidate suffix `path` ends with. Case-sensitive; at most
/// one suffix is removed.
pub fn strip_media_suffix<'a>(path: &'a str, media_type: &str) -> &'a str {
    candidate_suffixes(media_type)
        .iter()
        .find_map(|suffix| path.strip_suffix(suffix.as_str()))
        .unwrap_or(path)
}
