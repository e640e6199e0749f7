use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio::fs;
use tracing::{error, warn};
use uuid::Uuid;

#[cfg(feature = "ocr")]
use image::imageops::FilterType;

#[derive(Clone)]
pub struct FileService {
    upload_path: String,
}

impl FileService {
    pub fn new(upload_path: String) -> Self {
        Self { upload_path }
    }

    /// Initialize the upload directory structure
    pub async fn initialize_directory_structure(&self) -> Result<()> {
        let base_path = Path::new(&self.upload_path);

        let directories = [
            "temp",       // Staged uploads awaiting OCR
            "thumbnails", // Preview images kept for review
        ];

        for dir in directories.iter() {
            let dir_path = base_path.join(dir);
            if let Err(e) = fs::create_dir_all(&dir_path).await {
                error!("Failed to create directory {:?}: {}", dir_path, e);
                return Err(anyhow::anyhow!("Failed to create directory structure: {}", e));
            }
        }

        Ok(())
    }

    pub fn get_temp_path(&self) -> PathBuf {
        Path::new(&self.upload_path).join("temp")
    }

    pub fn get_thumbnails_path(&self) -> PathBuf {
        Path::new(&self.upload_path).join("thumbnails")
    }

    /// Stage an uploaded file under a unique name. The caller removes it with
    /// [`cleanup_temp_file`](Self::cleanup_temp_file) once OCR has run.
    pub async fn save_temp_file(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("bin");
        let staged_path = self
            .get_temp_path()
            .join(format!("{}.{}", Uuid::new_v4(), extension));

        fs::write(&staged_path, data).await?;
        Ok(staged_path)
    }

    pub async fn cleanup_temp_file(&self, path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            warn!("Failed to remove staged file {:?}: {}", path, e);
        }
    }

    /// Write a 200px JPEG preview next to the staged uploads. Failures are
    /// the caller's to log; a missing thumbnail never fails a request.
    #[cfg(feature = "ocr")]
    pub async fn create_thumbnail(&self, source: &Path, filename: &str) -> Result<PathBuf> {
        let file_data = fs::read(source).await?;
        let img = image::load_from_memory(&file_data)?;
        let thumbnail = img.resize(200, 200, FilterType::Lanczos3);

        let stem = Path::new(filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("upload");
        let thumb_path = self
            .get_thumbnails_path()
            .join(format!("{}_{}_thumb.jpg", stem, Uuid::new_v4()));

        // JPEG has no alpha channel
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        image::DynamicImage::ImageRgb8(thumbnail.to_rgb8())
            .write_to(&mut cursor, image::ImageFormat::Jpeg)?;
        fs::write(&thumb_path, buffer).await?;

        Ok(thumb_path)
    }

    #[cfg(not(feature = "ocr"))]
    pub async fn create_thumbnail(&self, _source: &Path, _filename: &str) -> Result<PathBuf> {
        anyhow::bail!("Thumbnail generation requires the ocr feature")
    }
}
