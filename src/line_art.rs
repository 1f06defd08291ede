use egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::error::LineArtError;

/// Printed outline of a coloring page, drawn above the user's strokes
pub struct LineArt {
    name: String,
    image: ColorImage,
    texture: Option<TextureHandle>,
}

impl std::fmt::Debug for LineArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineArt")
            .field("name", &self.name)
            .field("size", &self.image.size)
            .field("uploaded", &self.texture.is_some())
            .finish()
    }
}

impl LineArt {
    /// Decode an encoded image (PNG, JPEG, ...) into RGBA pixels
    pub fn decode(name: impl Into<String>, bytes: &[u8]) -> Result<Self, LineArtError> {
        let name = name.into();
        let img = image::load_from_memory(bytes)?;
        log::debug!("Decoded line art {}: {}x{}", name, img.width(), img.height());

        if img.width() == 0 || img.height() == 0 {
            return Err(LineArtError::InvalidDimensions {
                width: img.width(),
                height: img.height(),
            });
        }

        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let pixels = rgba.into_raw();
        let image = ColorImage::from_rgba_unmultiplied(size, &pixels);

        Ok(Self {
            name,
            image,
            texture: None,
        })
    }

    /// Load line art from a file dropped onto the window
    pub fn from_dropped_file(file: &egui::DroppedFile) -> Result<Self, LineArtError> {
        let name = match &file.path {
            Some(path) => path.display().to_string(),
            None if !file.name.is_empty() => file.name.clone(),
            None => "unknown".to_owned(),
        };

        if !is_image_file(file) {
            return Err(LineArtError::Unsupported(name));
        }

        if let Some(bytes) = &file.bytes {
            log::info!("Loading line art from memory: {} ({} bytes)", name, bytes.len());
            return Self::decode(name, bytes);
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &file.path {
            log::info!("Loading line art from {}", path.display());
            let bytes = std::fs::read(path)?;
            return Self::decode(name, &bytes);
        }

        Err(LineArtError::Unsupported(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel size as `[width, height]`
    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    /// The uploaded texture, created on first use
    pub fn texture(&mut self, ctx: &Context) -> &TextureHandle {
        let (name, image) = (&self.name, &self.image);
        self.texture.get_or_insert_with(|| {
            ctx.load_texture(name.as_str(), image.clone(), TextureOptions::LINEAR)
        })
    }
}

fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        return file.mime.starts_with("image/");
    }
    file.path
        .as_ref()
        .and_then(|path| path.extension())
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"))
}
