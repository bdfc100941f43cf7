use crate::visual::Surface;
use base64::Engine as _;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug)]
pub enum ExportError {
    Encode(png::EncodingError),
    Io { path: PathBuf, source: std::io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(e) => write!(f, "png encode failed: {e}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<png::EncodingError> for ExportError {
    fn from(e: png::EncodingError) -> Self {
        Self::Encode(e)
    }
}

/// RGBA8 PNG of the whole surface, straight alpha.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, surface.width() as u32, surface.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(surface.pixels())?;
        writer.finish()?;
    }
    Ok(buf)
}

pub fn to_data_url(surface: &Surface) -> Result<String, ExportError> {
    let png = encode_png(surface)?;
    let mut url = String::with_capacity(DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
    url.push_str(DATA_URL_PREFIX);
    base64::engine::general_purpose::STANDARD.encode_string(&png, &mut url);
    Ok(url)
}

pub fn snapshot_file_name(unix_millis: u128) -> String {
    format!("generative-art-{unix_millis}.png")
}

/// Writes `surface` into `dir` (created if missing) under a timestamped name.
pub fn save_png(surface: &Surface, dir: &Path) -> Result<PathBuf, ExportError> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    write_png(surface, &dir.join(snapshot_file_name(millis)))
}

pub fn write_png(surface: &Surface, path: &Path) -> Result<PathBuf, ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let bytes = encode_png(surface)?;
    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(&bytes).map_err(io_err)?;
    Ok(path.to_path_buf())
}
