//! Cover texture loading
//!
//! Fire-and-poll: the cover is read and decoded off the frame loop (a
//! background thread natively, a coroutine on WASM) and the result is
//! polled once per frame. GPU upload happens later on the main thread.

use std::sync::mpsc::{channel, Receiver, TryRecvError};

/// Error type for cover loading
#[derive(Debug, Clone, PartialEq)]
pub enum AssetError {
    /// The file could not be read
    Read { path: String, message: String },
    /// The bytes are not a supported image
    Decode(String),
    /// Image dimensions exceed what a texture can hold
    TooLarge { width: u32, height: u32 },
    /// The loader went away without reporting
    Disconnected,
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Read { path, message } => write!(f, "failed to read {}: {}", path, message),
            AssetError::Decode(msg) => write!(f, "decode error: {}", msg),
            AssetError::TooLarge { width, height } => {
                write!(f, "image too large: {}x{} (max {})", width, height, u16::MAX)
            }
            AssetError::Disconnected => write!(f, "cover loader stopped unexpectedly"),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e.to_string())
    }
}

/// Decoded RGBA8 image, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct CoverImage {
    pub width: u16,
    pub height: u16,
    pub rgba: Vec<u8>,
}

impl CoverImage {
    /// Decode PNG/JPEG/BMP bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = img.dimensions();
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(AssetError::TooLarge { width, height });
        }
        Ok(Self {
            width: width as u16,
            height: height as u16,
            rgba: img.into_raw(),
        })
    }
}

/// Result type for the cover load
pub type CoverResult = Result<CoverImage, AssetError>;

/// A handle to a pending cover load that can be polled
pub struct PendingCover {
    receiver: Receiver<CoverResult>,
    result: Option<CoverResult>,
    taken: bool,
}

impl PendingCover {
    /// Create from a receiver
    pub fn from_receiver(receiver: Receiver<CoverResult>) -> Self {
        Self { receiver, result: None, taken: false }
    }

    /// Handle that is already complete
    #[cfg(test)]
    pub fn ready(result: CoverResult) -> Self {
        let (sender, receiver) = channel();
        let _ = sender.send(result);
        Self::from_receiver(receiver)
    }

    /// Check if the load has completed (polls the channel)
    pub fn is_complete(&mut self) -> bool {
        if self.taken || self.result.is_some() {
            return true;
        }

        match self.receiver.try_recv() {
            Ok(result) => {
                self.result = Some(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Loader panicked or dropped sender
                self.result = Some(Err(AssetError::Disconnected));
                true
            }
        }
    }

    /// Take the result if complete. Yields it only once.
    pub fn take(&mut self) -> Option<CoverResult> {
        if self.taken || !self.is_complete() {
            return None;
        }
        self.taken = true;
        self.result.take()
    }
}

/// Start loading the cover image at `path`. Returns at once; poll the handle.
pub fn spawn_cover_load(path: String) -> PendingCover {
    let (sender, receiver) = channel();

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::thread::spawn(move || {
            let result = std::fs::read(&path)
                .map_err(|e| AssetError::Read { path: path.clone(), message: e.to_string() })
                .and_then(|bytes| CoverImage::decode(&bytes));
            let _ = sender.send(result);
        });
    }

    // No threads on WASM: a coroutine drives the fetch between frames
    #[cfg(target_arch = "wasm32")]
    {
        let _ = macroquad::experimental::coroutines::start_coroutine(async move {
            let result = match macroquad::file::load_file(&path).await {
                Ok(bytes) => CoverImage::decode(&bytes),
                Err(e) => Err(AssetError::Read { path: path.clone(), message: e.to_string() }),
            };
            let _ = sender.send(result);
        });
    }

    PendingCover::from_receiver(receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba([200, 40, 20, 255]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let cover = CoverImage::decode(&png_bytes(3, 4)).unwrap();
        assert_eq!((cover.width, cover.height), (3, 4));
        assert_eq!(cover.rgba.len(), 3 * 4 * 4);
        assert_eq!(&cover.rgba[..4], &[200, 40, 20, 255]);
    }

    #[test]
    fn test_decode_garbage() {
        let err = CoverImage::decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }

    #[test]
    fn test_ready_handle() {
        let mut pending = PendingCover::ready(Err(AssetError::Disconnected));
        assert!(pending.is_complete());
        assert_eq!(pending.take(), Some(Err(AssetError::Disconnected)));
        // Taken once
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_pending_until_result_arrives() {
        let (sender, receiver) = channel();
        let mut pending = PendingCover::from_receiver(receiver);
        assert!(!pending.is_complete());
        assert_eq!(pending.take(), None);

        sender.send(Err(AssetError::Decode("truncated".into()))).unwrap();
        assert_eq!(pending.take(), Some(Err(AssetError::Decode("truncated".into()))));
    }

    #[test]
    fn test_dropped_loader_reports_disconnect() {
        let (sender, receiver) = channel::<CoverResult>();
        let mut pending = PendingCover::from_receiver(receiver);
        drop(sender);
        assert_eq!(pending.take(), Some(Err(AssetError::Disconnected)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.png").to_string_lossy().to_string();
        let mut pending = spawn_cover_load(path);
        let result = loop {
            if let Some(result) = pending.take() {
                break result;
            }
            std::thread::yield_now();
        };
        assert!(matches!(result, Err(AssetError::Read { .. })));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cover.png");
        std::fs::write(&path, png_bytes(8, 8)).unwrap();
        let mut pending = spawn_cover_load(path.to_string_lossy().to_string());
        let result = loop {
            if let Some(result) = pending.take() {
                break result;
            }
            std::thread::yield_now();
        };
        assert_eq!(result.unwrap().width, 8);
    }
}
