//! Avatar image metadata
//!
//! A terminal cannot show the picture itself, so the avatar probe only keeps
//! what can be printed: format, size, and pixel dimensions when the header
//! is cheap to read.

/// Image container format, sniffed from magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Unknown,
}

impl ImageFormat {
    /// Detect the format from the leading bytes, falling back to the
    /// response content type.
    pub fn sniff(bytes: &[u8], content_type: Option<&str>) -> Self {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            return ImageFormat::Png;
        }
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return ImageFormat::Jpeg;
        }
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return ImageFormat::Gif;
        }
        if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            return ImageFormat::Webp;
        }

        match content_type.map(|ct| ct.split(';').next().unwrap_or("").trim()) {
            Some("image/png") => ImageFormat::Png,
            Some("image/jpeg") | Some("image/jpg") => ImageFormat::Jpeg,
            Some("image/gif") => ImageFormat::Gif,
            Some("image/webp") => ImageFormat::Webp,
            _ => ImageFormat::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
            ImageFormat::Unknown => "image",
        }
    }
}

/// Metadata of a successfully fetched avatar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    pub format: ImageFormat,
    pub byte_len: usize,
    /// Width and height in pixels, when the header could be read
    pub dimensions: Option<(u32, u32)>,
}

impl AvatarImage {
    /// Build metadata from a response body.
    ///
    /// Returns `None` when the body is empty or clearly not an image.
    pub fn from_bytes(bytes: &[u8], content_type: Option<&str>) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let format = ImageFormat::sniff(bytes, content_type);
        if format == ImageFormat::Unknown
            && !content_type.is_some_and(|ct| ct.starts_with("image/"))
        {
            return None;
        }
        Some(Self {
            format,
            byte_len: bytes.len(),
            dimensions: read_dimensions(format, bytes),
        })
    }

    /// One-line description, e.g. `"png 460×460, 12.4 KiB"`
    pub fn summary(&self) -> String {
        let size = format_size(self.byte_len);
        match self.dimensions {
            Some((w, h)) => format!("{} {}×{}, {}", self.format.label(), w, h, size),
            None => format!("{}, {}", self.format.label(), size),
        }
    }
}

fn read_dimensions(format: ImageFormat, bytes: &[u8]) -> Option<(u32, u32)> {
    match format {
        // IHDR is always the first chunk: width/height are big-endian at 16..24
        ImageFormat::Png if bytes.len() >= 24 && &bytes[12..16] == b"IHDR" => {
            let w = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
            let h = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
            Some((w, h))
        }
        // Logical screen descriptor: little-endian u16 at 6..10
        ImageFormat::Gif if bytes.len() >= 10 => {
            let w = u16::from_le_bytes([bytes[6], bytes[7]]) as u32;
            let h = u16::from_le_bytes([bytes[8], bytes[9]]) as u32;
            Some((w, h))
        }
        _ => None,
    }
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}
