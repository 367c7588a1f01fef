use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use crate::config::OcrConfig;
use crate::error::ProcessError;

/// Turns pages of a PDF into text by looking at them rather than reading
/// their text layer. Used for scanned pages.
pub trait PageRecognizer: Send + Sync {
    /// Recognizes `page_numbers` (1-based, as in lopdf's page map) of one
    /// document. Returns one result per requested page, in the same order.
    fn recognize_pages(
        &self,
        pdf_bytes: &[u8],
        page_numbers: &[u32],
    ) -> Vec<Result<String, ProcessError>>;
}

/// Renders pages with poppler's `pdftoppm`, converts them to grayscale and
/// runs Tesseract on them. Executable paths come from [`OcrConfig`].
#[derive(Clone)]
pub struct OcrProcessor {
    inner: Arc<OcrProcessorInner>,
}

struct OcrProcessorInner {
    languages: String,
    dpi: u32,
    #[cfg_attr(feature = "leptess", allow(dead_code))]
    tesseract_path: PathBuf,
    pdftoppm_path: PathBuf,
}

impl OcrProcessor {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            inner: Arc::new(OcrProcessorInner {
                languages: config.language_arg(),
                dpi: config.dpi,
                tesseract_path: PathBuf::from(&config.tesseract_path),
                pdftoppm_path: PathBuf::from(&config.pdftoppm_path),
            }),
        }
    }

    pub fn dpi(&self) -> u32 {
        self.inner.dpi
    }

    pub fn languages(&self) -> &str {
        &self.inner.languages
    }

    /// Rasterizes one page of an already written PDF to PNG bytes at the
    /// configured resolution.
    fn render_page(&self, pdf_path: &Path, page_number: u32) -> Result<Vec<u8>, ProcessError> {
        let output_prefix =
            std::env::temp_dir().join(format!("rollfinder_page_{}", uuid::Uuid::new_v4()));

        let page = page_number.to_string();
        let output = Command::new(&self.inner.pdftoppm_path)
            .arg("-png")
            .args(["-r", &self.inner.dpi.to_string()])
            .args(["-f", &page, "-l", &page])
            .arg(pdf_path)
            .arg(&output_prefix)
            .output()
            .map_err(|e| {
                ProcessError::Render(format!(
                    "Failed to run {}: {}. Make sure poppler-utils is installed.",
                    self.inner.pdftoppm_path.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            return Err(ProcessError::Render(format!(
                "pdftoppm failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        // pdftoppm zero-pads the page suffix to the width of the page count
        let candidates = [
            format!("{}-{}.png", output_prefix.display(), page_number),
            format!("{}-{:02}.png", output_prefix.display(), page_number),
            format!("{}-{:03}.png", output_prefix.display(), page_number),
            format!("{}-{:04}.png", output_prefix.display(), page_number),
        ];
        let image_path = candidates
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .ok_or_else(|| ProcessError::Render("Failed to find rendered page image".to_string()))?;

        let image_data = std::fs::read(image_path)
            .map_err(|e| ProcessError::Render(format!("Failed to read rendered image: {}", e)));

        let _ = std::fs::remove_file(image_path);

        image_data
    }

    /// Recognizes text in an encoded image (any format the `image` crate
    /// reads). The image is converted to grayscale first.
    pub fn process_image_bytes(&self, image_data: &[u8]) -> Result<String, ProcessError> {
        let _span = tracing::info_span!("processor.ocr").entered();

        let png_data = to_grayscale_png(image_data)?;
        self.run_tesseract(&png_data)
    }

    #[cfg(not(feature = "leptess"))]
    fn run_tesseract(&self, png_data: &[u8]) -> Result<String, ProcessError> {
        let image_path =
            std::env::temp_dir().join(format!("rollfinder_ocr_{}.png", uuid::Uuid::new_v4()));

        std::fs::write(&image_path, png_data)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to write temp image: {}", e)))?;

        let output = Command::new(&self.inner.tesseract_path)
            .arg(&image_path)
            .arg("stdout")
            .args(["-l", &self.inner.languages])
            .args(["--dpi", &self.inner.dpi.to_string()])
            .output();

        let _ = std::fs::remove_file(&image_path);

        let output = output.map_err(|e| {
            ProcessError::OcrFailed(format!(
                "Failed to run {}: {}. Make sure tesseract is installed.",
                self.inner.tesseract_path.display(),
                e
            ))
        })?;

        if !output.status.success() {
            return Err(ProcessError::OcrFailed(format!(
                "tesseract failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    #[cfg(feature = "leptess")]
    fn run_tesseract(&self, png_data: &[u8]) -> Result<String, ProcessError> {
        let mut lt = leptess::LepTess::new(None, &self.inner.languages).map_err(|e| {
            ProcessError::OcrFailed(format!("Failed to initialize Tesseract: {}", e))
        })?;

        lt.set_image_from_mem(png_data)
            .map_err(|e| ProcessError::OcrFailed(format!("Failed to set image for OCR: {}", e)))?;

        lt.get_utf8_text()
            .map_err(|e| ProcessError::OcrFailed(format!("OCR failed: {}", e)))
    }
}

impl PageRecognizer for OcrProcessor {
    fn recognize_pages(
        &self,
        pdf_bytes: &[u8],
        page_numbers: &[u32],
    ) -> Vec<Result<String, ProcessError>> {
        let source = match SourcePdf::write(pdf_bytes) {
            Ok(source) => source,
            Err(message) => {
                return page_numbers
                    .iter()
                    .map(|_| Err(ProcessError::Render(message.clone())))
                    .collect()
            }
        };

        page_numbers
            .iter()
            .map(|&page_number| {
                let image_data = self.render_page(source.path(), page_number)?;
                self.process_image_bytes(&image_data)
            })
            .collect()
    }
}

/// The document handed to `pdftoppm`, written once per document and removed
/// on drop.
struct SourcePdf {
    path: PathBuf,
}

impl SourcePdf {
    fn write(pdf_bytes: &[u8]) -> Result<Self, String> {
        let path =
            std::env::temp_dir().join(format!("rollfinder_src_{}.pdf", uuid::Uuid::new_v4()));
        std::fs::write(&path, pdf_bytes).map_err(|e| format!("Failed to write temp PDF: {}", e))?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SourcePdf {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Decodes an image and re-encodes it as 8-bit grayscale PNG.
pub fn to_grayscale_png(image_data: &[u8]) -> Result<Vec<u8>, ProcessError> {
    let img = image::load_from_memory(image_data)
        .map_err(|e| ProcessError::OcrFailed(format!("Failed to load image: {}", e)))?;

    let mut png_data = Vec::new();
    img.grayscale()
        .write_to(&mut Cursor::new(&mut png_data), image::ImageFormat::Png)
        .map_err(|e| ProcessError::OcrFailed(format!("Failed to convert image: {}", e)))?;

    Ok(png_data)
}
