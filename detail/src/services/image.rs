//! Image fetching and decoding for the avatar and the contribution chart.
//!
//! Raster formats go through the `image` crate; SVG (the chart service serves
//! SVG) is rasterised with `resvg`.

use crate::core::config::DetailConfig;
use crate::core::service::ImageLoader;
use image::{imageops, RgbaImage};
use resvg::usvg;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Pixel transform applied after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Center square crop, transparent outside the inscribed circle
    CircleCrop,
}

/// Per-request options for an image load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    pub transform: Option<Transform>,
    /// Fade the image in when shown
    pub animate: bool,
    /// Crossfade from the placeholder
    pub crossfade: bool,
}

impl RequestOptions {
    /// Avatar: circular, shown without animation.
    pub fn avatar() -> Self {
        Self {
            transform: Some(Transform::CircleCrop),
            animate: false,
            crossfade: false,
        }
    }

    /// Contribution chart: untouched, crossfaded in.
    pub fn chart() -> Self {
        Self {
            transform: None,
            animate: true,
            crossfade: true,
        }
    }
}

/// Decoded RGBA8 image.
#[derive(Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// Stored in Arc to avoid expensive cloning.
    rgba: Arc<Vec<u8>>,
}

impl fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

impl LoadedImage {
    pub fn from_rgba_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            rgba: Arc::new(image.into_raw()),
        }
    }

    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba
    }
}

/// Fetches images over HTTP and decodes them off the async workers.
pub struct HttpImageLoader {
    client: Client,
}

impl HttpImageLoader {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    pub fn from_config(config: &DetailConfig) -> Self {
        Self::new(config.http_timeout, &config.user_agent)
    }
}

#[async_trait::async_trait]
impl ImageLoader for HttpImageLoader {
    #[tracing::instrument(skip(self, options), fields(source = %source))]
    async fn load(&self, source: &str, options: &RequestOptions) -> Result<LoadedImage, String> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(source)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Failed to fetch image: {}", status));
        }

        let svg_hint = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("svg"))
            || source.ends_with(".svg");

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Failed to read image body: {}", e))?;

        let transform = options.transform;
        let decoded = tokio::task::spawn_blocking(move || {
            let image = decode(&bytes, svg_hint)?;
            Ok::<_, String>(match transform {
                Some(Transform::CircleCrop) => circle_crop(&image),
                None => image,
            })
        })
        .await
        .map_err(|e| format!("Decode task failed: {}", e))??;

        tracing::debug!(
            width = decoded.width(),
            height = decoded.height(),
            duration_ms = start.elapsed().as_millis(),
            "Image decoded"
        );

        Ok(LoadedImage::from_rgba_image(decoded))
    }
}

/// Decode raster or SVG bytes into RGBA8.
pub fn decode(bytes: &[u8], svg_hint: bool) -> Result<RgbaImage, String> {
    if svg_hint || looks_like_svg(bytes) {
        decode_svg(bytes)
    } else {
        image::load_from_memory(bytes)
            .map(|img| img.to_rgba8())
            .map_err(|e| format!("Failed to decode image: {}", e))
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(256)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

fn decode_svg(bytes: &[u8]) -> Result<RgbaImage, String> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| format!("Failed to parse SVG: {}", e))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err("SVG has empty dimensions".to_string());
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| "Failed to allocate SVG pixmap".to_string())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // Pixmap pixels are premultiplied; RgbaImage expects straight alpha
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    RgbaImage::from_raw(width, height, rgba).ok_or_else(|| "SVG pixmap size mismatch".to_string())
}

/// Crop to the centered square and clear every pixel outside the inscribed circle.
pub fn circle_crop(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    let side = width.min(height);
    let mut square = imageops::crop_imm(image, (width - side) / 2, (height - side) / 2, side, side).to_image();

    let radius = side as f32 / 2.0;
    for (x, y, pixel) in square.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        if dx * dx + dy * dy > radius * radius {
            pixel.0 = [0, 0, 0, 0];
        }
    }

    square
}
