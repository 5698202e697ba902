/// Upper bound on a single uploaded file, in bytes (100 MiB).
pub const MAX_FILE_BYTES: u64 = 104_857_600;

/// File extensions the analysis backend accepts.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["wav", "mp3", "flac", "m4a", "ogg"];

/// Cap on files per batch when the host page does not supply one.
pub const DEFAULT_MAX_FILES: usize = 100;

/// Name and size of a candidate file, as reported by the file picker or drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A candidate file together with its validation verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub meta: FileMeta,
    pub valid: bool,
}

impl FileEntry {
    pub fn classify(meta: FileMeta) -> Self {
        let valid = validate_audio_file(&meta);
        Self { meta, valid }
    }
}

/// Lowercased text after the last `.`, or `None` when there is no dot.
pub fn file_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// A file is accepted iff it fits the size cap and carries a known
/// audio extension. Rejection is silent; the entry is just marked invalid.
pub fn validate_audio_file(meta: &FileMeta) -> bool {
    if meta.size > MAX_FILE_BYTES {
        return false;
    }
    match file_extension(&meta.name) {
        Some(ext) => ALLOWED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Human-readable size: largest unit in {Bytes, KB, MB, GB}, at most two
/// decimal places, trailing zeros stripped. Zero renders as "0 Bytes".
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{text} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::file_extension;

    #[test]
    fn extension_is_text_after_last_dot() {
        assert_eq!(file_extension("motor.test.WAV"), Some("wav".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
    }

    #[test]
    fn no_dot_means_no_extension() {
        assert_eq!(file_extension("README"), None);
    }
}
