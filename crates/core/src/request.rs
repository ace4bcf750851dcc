use reqwest::multipart::{Form, Part};
use tokio::fs;

use crate::{
    error::{AnalysisError, Result},
    input::{MAX_UPLOAD_BYTES, VideoFile, validate_file},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    File(VideoFile),
    Youtube(String),
}

impl VideoSource {
    /// Value of the `type` form field.
    pub fn kind(&self) -> &'static str {
        match self {
            VideoSource::File(_) => "file",
            VideoSource::Youtube(_) => "youtube",
        }
    }
}

/// Everything packaged from the page for one analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub source: VideoSource,
    pub prompt: Option<String>,
}

/// One multipart field, described without its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: VideoFile },
}

impl Submission {
    pub fn new(source: VideoSource, prompt: Option<String>) -> Self {
        let prompt = prompt.filter(|p| !p.is_empty());
        Self { source, prompt }
    }

    /// Fields in the order they go on the wire.
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = Vec::with_capacity(3);
        match &self.source {
            VideoSource::File(file) => fields.push(FormField::File {
                name: "video",
                file: file.clone(),
            }),
            VideoSource::Youtube(url) => fields.push(FormField::Text {
                name: "youtubeUrl",
                value: url.clone(),
            }),
        }
        fields.push(FormField::Text {
            name: "type",
            value: self.source.kind().to_string(),
        });
        if let Some(prompt) = &self.prompt {
            fields.push(FormField::Text {
                name: "prompt",
                value: prompt.clone(),
            });
        }
        fields
    }

    /// Build the multipart body, reading the video from disk when uploading a file.
    pub async fn to_form(&self) -> Result<Form> {
        let mut form = Form::new();
        for field in self.fields() {
            form = match field {
                FormField::Text { name, value } => form.text(name, value),
                FormField::File { name, file } => {
                    // The file may have changed on disk since it was picked.
                    let metadata = fs::metadata(&file.path).await?;
                    validate_file(&VideoFile {
                        size_bytes: metadata.len(),
                        ..file.clone()
                    })?;
                    let bytes = fs::read(&file.path).await?;
                    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
                        return Err(AnalysisError::FileTooLarge {
                            size_bytes: bytes.len() as u64,
                        });
                    }
                    let mut part = Part::bytes(bytes).file_name(file.name.clone());
                    if let Some(content_type) = &file.content_type {
                        part = part.mime_str(content_type)?;
                    }
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
