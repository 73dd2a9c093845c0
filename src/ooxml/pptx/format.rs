//! Picture formats and text run formatting.

use crate::ooxml::opc::constants::content_type as ct;

/// Encodings a picture part can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

/// Leading bytes of each format, checked in order.
const SIGNATURES: [(&[u8], ImageFormat); 3] = [
    (&[0x89, b'P', b'N', b'G'], ImageFormat::Png),
    (&[0xFF, 0xD8, 0xFF], ImageFormat::Jpeg),
    (b"GIF8", ImageFormat::Gif),
];

impl ImageFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => ct::PNG,
            Self::Jpeg => ct::JPEG,
            Self::Gif => ct::GIF,
        }
    }

    /// Extension of `/ppt/media/imageN.<ext>`.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// Sniff the format from the first bytes of an encoded image.
    pub fn detect_from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < 4 {
            return None;
        }
        SIGNATURES
            .iter()
            .find(|(magic, _)| bytes.starts_with(magic))
            .map(|&(_, format)| format)
    }
}

/// Run and paragraph formatting. Unset fields inherit from the master.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Points
    pub size: Option<f64>,
    /// Center the paragraph instead of inheriting the alignment
    pub centered: bool,
}
