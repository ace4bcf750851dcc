use std::path::{Path, PathBuf};

use crate::{
    error::{AnalysisError, Result},
    request::VideoSource,
};

/// Upper bound for direct uploads.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

const VIDEO_TYPE_PREFIX: &str = "video/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceMode {
    #[default]
    Upload,
    Youtube,
}

impl SourceMode {
    pub fn label(&self) -> &'static str {
        match self {
            SourceMode::Upload => "File Upload",
            SourceMode::Youtube => "YouTube URL",
        }
    }
}

/// A local file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    /// Media type the file declares, guessed from its extension.
    pub content_type: Option<String>,
}

impl VideoFile {
    pub fn new(
        path: impl Into<PathBuf>,
        size_bytes: u64,
        content_type: Option<String>,
    ) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            path,
            name,
            size_bytes,
            content_type,
        }
    }

    /// Stat a file on disk and guess its declared type.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(AnalysisError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} is not a file", path.display()),
            )));
        }
        let content_type = mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string());
        Ok(Self::new(path, metadata.len(), content_type))
    }

    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }

    /// "clip.mp4 (3.25 MB)"
    pub fn label(&self) -> String {
        format!("{} ({:.2} MB)", self.name, self.size_mib())
    }
}

/// Check a picked file against the upload rules. Size is checked before type.
pub fn validate_file(file: &VideoFile) -> Result<()> {
    if file.size_bytes > MAX_UPLOAD_BYTES {
        return Err(AnalysisError::FileTooLarge {
            size_bytes: file.size_bytes,
        });
    }

    let is_video = file
        .content_type
        .as_deref()
        .is_some_and(|t| t.starts_with(VIDEO_TYPE_PREFIX));
    if !is_video {
        return Err(AnalysisError::NotAVideo {
            content_type: file.content_type.clone(),
        });
    }

    Ok(())
}

/// Local form state of the input panel.
#[derive(Debug, Clone, Default)]
pub struct InputPanel {
    pub mode: SourceMode,
    file: Option<VideoFile>,
    pub youtube_url: String,
    pub prompt: String,
    /// Raw text of the file picker field
    pub picker: String,
}

impl InputPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: SourceMode) {
        self.mode = mode;
    }

    pub fn file(&self) -> Option<&VideoFile> {
        self.file.as_ref()
    }

    /// Store a file if it passes validation. A rejected file leaves the panel untouched.
    pub fn select_file(&mut self, file: VideoFile) -> Result<()> {
        validate_file(&file)?;
        self.picker = file.path.to_string_lossy().into_owned();
        self.file = Some(file);
        Ok(())
    }

    pub fn has_source(&self) -> bool {
        self.file.is_some() || !self.youtube_url.is_empty()
    }

    /// The video source to submit. A selected file wins over a URL.
    pub fn source(&self) -> Option<VideoSource> {
        if let Some(file) = &self.file {
            return Some(VideoSource::File(file.clone()));
        }
        if !self.youtube_url.is_empty() {
            return Some(VideoSource::Youtube(self.youtube_url.clone()));
        }
        None
    }

    pub fn prompt(&self) -> Option<&str> {
        (!self.prompt.is_empty()).then_some(self.prompt.as_str())
    }

    pub fn clear(&mut self) {
        self.file = None;
        self.youtube_url.clear();
        self.prompt.clear();
        self.picker.clear();
    }
}
