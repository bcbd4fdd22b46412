use std::fmt;

/// Bucket-relative path of an object in blob storage,
/// e.g. `project_id/1700000000-converted/take_01.wav`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path segment, or the whole path when it has no directory.
    pub fn filename(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }

    /// Path of the denoised counterpart: same directory, `_cleaned`
    /// inserted before the final extension of the filename.
    /// `a/b/name.wav` becomes `a/b/name_cleaned.wav`; a filename with
    /// no extension gets the suffix appended.
    pub fn cleaned(&self) -> StoragePath {
        let (dir, filename) = match self.0.rsplit_once('/') {
            Some((dir, name)) => (Some(dir), name),
            None => (None, self.0.as_str()),
        };

        let cleaned_name = match filename.rsplit_once('.') {
            Some((stem, ext)) => format!("{}_cleaned.{}", stem, ext),
            None => format!("{}_cleaned", filename),
        };

        match dir {
            Some(dir) => Self(format!("{}/{}", dir, cleaned_name)),
            None => Self(cleaned_name),
        }
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
