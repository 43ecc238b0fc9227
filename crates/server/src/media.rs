//! Multipart product form ingestion.
//!
//! The admin dashboard submits product create/update as `multipart/form-data`
//! with text fields plus up to three file fields: `images` (main gallery),
//! `attachments` (secondary gallery), and `video`. Files are held in memory
//! and stored inline as base64 data URLs; nothing is written to disk.

use axum::extract::Multipart;
use axum::extract::multipart::{Field, MultipartError};
use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::models::{ProductDraft, ProductUpdate};

/// Per-file size ceiling.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Whole-body ceiling for a full product form: 16 files at the per-file
/// limit plus text-field headroom.
pub const MAX_UPLOAD_BODY: usize = 17 * MAX_FILE_SIZE;

pub const MAX_IMAGE_COUNT: usize = 10;
pub const MAX_VIDEO_COUNT: usize = 1;
pub const MAX_ATTACHMENT_COUNT: usize = 5;

/// Stand-in URL stored when the uploaded video is not an image. Actual
/// video payloads are too large to inline, so the catalog references a
/// static placeholder clip instead.
pub const VIDEO_PLACEHOLDER: &str = "/assets/products/placeholder-video.mp4";

const ALLOWED_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "video/mp4",
    "video/avi",
    "application/pdf",
];

#[derive(Debug, Error)]
pub enum MediaError {
    /// Content type outside the allowlist. Carries the offending type for
    /// the server log; the response body stays generic.
    #[error("Invalid file type")]
    UnsupportedType(String),
    #[error("File too large")]
    FileTooLarge,
    #[error("Too many files for field {0}")]
    TooManyFiles(&'static str),
    #[error("Unexpected field {0}")]
    UnexpectedField(String),
    #[error(transparent)]
    Read(#[from] MultipartError),
}

/// A parsed product form.
///
/// Text fields are optional at this layer; create and update decide what is
/// required. File fields arrive already converted to their stored forms.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub category: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    /// Present only when the form sent a `featured` field; the checkbox
    /// serializes as the literal string `"true"`.
    pub featured: Option<bool>,
    pub images: Vec<String>,
    pub additional_images: Vec<String>,
    pub video: Option<String>,
}

impl ProductForm {
    /// Turn the form into a create draft.
    ///
    /// Returns `None` when any required field is missing or blank; the
    /// caller maps that to the missing-fields response.
    #[must_use]
    pub fn into_draft(self) -> Option<ProductDraft> {
        let name = self.name.filter(|s| !s.is_empty())?;
        let category = self.category.filter(|s| !s.is_empty())?;
        let short_description = self.short_description.filter(|s| !s.is_empty())?;
        Some(ProductDraft {
            name,
            category,
            short_description,
            long_description: self.long_description,
            featured: self.featured.unwrap_or(false),
            images: self.images,
            additional_images: self.additional_images,
            video: self.video.into_iter().collect(),
        })
    }
}

impl From<ProductForm> for ProductUpdate {
    /// Turn the form into a partial update.
    ///
    /// Blank text fields and empty file lists read as "leave unchanged",
    /// matching a dashboard that only submits what the admin touched.
    fn from(form: ProductForm) -> Self {
        Self {
            name: form.name.filter(|s| !s.is_empty()),
            category: form.category.filter(|s| !s.is_empty()),
            short_description: form.short_description.filter(|s| !s.is_empty()),
            long_description: form.long_description,
            featured: form.featured,
            images: (!form.images.is_empty()).then_some(form.images),
            additional_images: (!form.additional_images.is_empty())
                .then_some(form.additional_images),
            video: form.video.map(|v| vec![v]),
        }
    }
}

/// Drain a multipart stream into a [`ProductForm`], enforcing the type,
/// size, and count limits as fields arrive.
pub async fn parse_product_form(mut multipart: Multipart) -> Result<ProductForm, MediaError> {
    let mut form = ProductForm::default();
    let mut video_count = 0usize;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        match name.as_str() {
            "name" => form.name = Some(field.text().await?),
            "category" => form.category = Some(field.text().await?),
            "shortDescription" => form.short_description = Some(field.text().await?),
            "longDescription" => form.long_description = Some(field.text().await?),
            "featured" => form.featured = Some(field.text().await? == "true"),
            "images" => {
                if form.images.len() >= MAX_IMAGE_COUNT {
                    return Err(MediaError::TooManyFiles("images"));
                }
                form.images.push(read_upload(field).await?);
            }
            "attachments" => {
                if form.additional_images.len() >= MAX_ATTACHMENT_COUNT {
                    return Err(MediaError::TooManyFiles("attachments"));
                }
                form.additional_images.push(read_upload(field).await?);
            }
            "video" => {
                if video_count >= MAX_VIDEO_COUNT {
                    return Err(MediaError::TooManyFiles("video"));
                }
                video_count += 1;
                form.video = Some(read_video(field).await?);
            }
            _ => {
                // Unknown text fields are tolerated; unknown file fields
                // are not.
                if field.file_name().is_some() || field.content_type().is_some() {
                    return Err(MediaError::UnexpectedField(name));
                }
            }
        }
    }

    Ok(form)
}

/// Base64 data URL for an uploaded file, `data:<mime>;base64,<payload>`.
#[must_use]
pub fn data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(data))
}

async fn checked_upload(field: Field<'_>) -> Result<(String, axum::body::Bytes), MediaError> {
    let mime = field
        .content_type()
        .map(ToOwned::to_owned)
        .unwrap_or_default();
    if !ALLOWED_TYPES.contains(&mime.as_str()) {
        tracing::warn!("Rejected upload with content type {mime}");
        return Err(MediaError::UnsupportedType(mime));
    }
    let data = field.bytes().await?;
    if data.len() > MAX_FILE_SIZE {
        return Err(MediaError::FileTooLarge);
    }
    Ok((mime, data))
}

async fn read_upload(field: Field<'_>) -> Result<String, MediaError> {
    let (mime, data) = checked_upload(field).await?;
    Ok(data_url(&mime, &data))
}

/// Videos go through the same allowlist, but only image payloads (poster
/// frames) are inlined; real video files resolve to [`VIDEO_PLACEHOLDER`].
async fn read_video(field: Field<'_>) -> Result<String, MediaError> {
    let (mime, data) = checked_upload(field).await?;
    if mime.starts_with("image/") {
        Ok(data_url(&mime, &data))
    } else {
        Ok(VIDEO_PLACEHOLDER.to_owned())
    }
}
