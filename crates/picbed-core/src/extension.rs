//! Image extension handling and the upload request built from a selection.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File extensions accepted by the upload pipeline.
///
/// `jpg` and `jpeg` are kept distinct because the remote key preserves the
/// suffix the user's file actually carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageExtension {
    Png,
    Jpg,
    Jpeg,
    Gif,
    Webp,
}

impl ImageExtension {
    /// Derive the extension from a path suffix, case-insensitively.
    /// Returns `None` when the suffix is not in the accepted set.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }

    /// Whether this format goes through the remote compression step.
    /// gif and webp always pass through uncompressed.
    pub fn is_compressible(&self) -> bool {
        matches!(
            self,
            ImageExtension::Png | ImageExtension::Jpg | ImageExtension::Jpeg
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageExtension::Png => "png",
            ImageExtension::Jpg => "jpg",
            ImageExtension::Jpeg => "jpeg",
            ImageExtension::Gif => "gif",
            ImageExtension::Webp => "webp",
        }
    }
}

impl FromStr for ImageExtension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(ImageExtension::Png),
            "jpg" => Ok(ImageExtension::Jpg),
            "jpeg" => Ok(ImageExtension::Jpeg),
            "gif" => Ok(ImageExtension::Gif),
            "webp" => Ok(ImageExtension::Webp),
            other => Err(format!("Unsupported image extension: {}", other)),
        }
    }
}

impl Display for ImageExtension {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// One file selected for upload. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub local_path: PathBuf,
    pub extension: ImageExtension,
}

impl UploadRequest {
    /// Build a request from a selected path. A path whose suffix is not in
    /// the accepted set yields `None` and the pipeline aborts silently.
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let extension = ImageExtension::from_path(&path)?;
        Some(UploadRequest {
            local_path: path,
            extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_from_path_case_insensitive() {
        assert_eq!(
            ImageExtension::from_path(Path::new("/tmp/a.PNG")),
            Some(ImageExtension::Png)
        );
        assert_eq!(
            ImageExtension::from_path(Path::new("photo.JpEg")),
            Some(ImageExtension::Jpeg)
        );
        assert_eq!(ImageExtension::from_path(Path::new("notes.txt")), None);
        assert_eq!(ImageExtension::from_path(Path::new("no_suffix")), None);
    }

    #[test]
    fn compressible_set() {
        assert!(ImageExtension::Png.is_compressible());
        assert!(ImageExtension::Jpg.is_compressible());
        assert!(ImageExtension::Jpeg.is_compressible());
        assert!(!ImageExtension::Gif.is_compressible());
        assert!(!ImageExtension::Webp.is_compressible());
    }

    #[test]
    fn request_from_path() {
        let req = UploadRequest::from_path(PathBuf::from("/home/u/anim.gif")).unwrap();
        assert_eq!(req.extension, ImageExtension::Gif);
        assert_eq!(req.local_path, PathBuf::from("/home/u/anim.gif"));

        assert!(UploadRequest::from_path(PathBuf::from("/home/u/a.bmp")).is_none());
    }
}
