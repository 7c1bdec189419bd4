//! Palette image export and import.
//!
//! Feature-gated behind `image` (default on). The grid layout itself lives
//! in [`crate::pixel`] and is always available.

use crate::gather::{gather, Region};
use crate::pixel::palette_to_grid;
use crate::source::PixelGrid;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use swatch_core::{CancelToken, Outcome, Palette, SwatchError};
use tracing::info;

/// Image encodings selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Bmp,
    Gif,
    Jpeg,
    Png,
    Tiff,
}

impl ImageFormat {
    /// Matches the extension case-insensitively. `None` when unrecognised.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bmp" => Some(ImageFormat::Bmp),
            "gif" => Some(ImageFormat::Gif),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "tif" | "tiff" => Some(ImageFormat::Tiff),
            _ => None,
        }
    }

    /// Export falls back to BMP for unrecognised extensions.
    pub fn for_export(path: &Path) -> Self {
        Self::from_path(path).unwrap_or(ImageFormat::Bmp)
    }

    /// Import refuses unrecognised extensions.
    pub fn for_import(path: &Path) -> Result<Self, SwatchError> {
        Self::from_path(path).ok_or_else(|| SwatchError::UnsupportedFormat(path.display().to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Bmp => "bmp",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Tiff => "tiff",
        }
    }

    fn codec(self) -> image::ImageFormat {
        match self {
            ImageFormat::Bmp => image::ImageFormat::Bmp,
            ImageFormat::Gif => image::ImageFormat::Gif,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Tiff => image::ImageFormat::Tiff,
        }
    }
}

/// Writes the palette as a square grid image, one pixel per swatch.
///
/// Returns the encoding used. JPEG output drops alpha, so transparent
/// trailing cells come out black there. The palette is never modified.
pub fn export(palette: &Palette, path: &Path) -> Result<ImageFormat, SwatchError> {
    let grid = palette_to_grid(palette)?;
    let format = ImageFormat::for_export(path);
    let img = image::RgbaImage::from_raw(grid.width(), grid.height(), grid.to_rgba())
        .ok_or_else(|| SwatchError::Io("RGBA buffer size mismatch".into()))?;
    let saved = match format {
        ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .save_with_format(path, format.codec()),
        _ => img.save_with_format(path, format.codec()),
    };
    saved.map_err(|e| SwatchError::Io(e.to_string()))?;
    info!(
        path = %path.display(),
        format = format.name(),
        swatches = palette.len(),
        side = grid.width(),
        "palette exported"
    );
    Ok(format)
}

/// Decodes an image into an in-memory pixel grid.
pub fn load_grid(path: &Path) -> Result<PixelGrid, SwatchError> {
    let format = ImageFormat::for_import(path)?;
    let reader = BufReader::new(File::open(path)?);
    let img = image::load(reader, format.codec())
        .map_err(|e| SwatchError::Io(format!("{}: {e}", path.display())))?
        .to_rgba8();
    PixelGrid::from_rgba(img.width(), img.height(), img.as_raw())
}

/// Gathers every distinct colour of an image into the palette.
pub fn import(path: &Path, palette: &mut Palette, token: &CancelToken) -> Result<Outcome, SwatchError> {
    let grid = load_grid(path)?;
    let outcome = gather(&grid, Region::full(grid.width(), grid.height()), palette, token)?;
    info!(path = %path.display(), found = outcome.added, "image imported");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_core::Argb;

    fn five() -> Palette {
        Palette::from_colors(vec![
            Argb::rgb(255, 0, 0),
            Argb::rgb(0, 255, 0),
            Argb::rgb(0, 0, 255),
            Argb::new(128, 10, 20, 30),
            Argb::rgb(250, 250, 250),
        ])
    }

    #[test]
    fn format_from_extension_ignores_case() {
        assert_eq!(ImageFormat::from_path(Path::new("a.PNG")), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_path(Path::new("a.jpeg")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("a.Jpg")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("a.tif")), Some(ImageFormat::Tiff));
        assert_eq!(ImageFormat::from_path(Path::new("a.webp")), None);
        assert_eq!(ImageFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn unknown_extension_exports_bmp_but_cannot_import() {
        assert_eq!(ImageFormat::for_export(Path::new("p.pal")), ImageFormat::Bmp);
        assert!(matches!(
            ImageFormat::for_import(Path::new("p.pal")),
            Err(SwatchError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn export_png_lays_out_square_grid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.png");

        assert_eq!(export(&five(), &path).unwrap(), ImageFormat::Png);

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (3, 3));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [10, 20, 30, 128]);
        assert_eq!(img.get_pixel(2, 1).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0, 0]);
    }

    #[test]
    fn png_round_trip_recovers_colours_and_padding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.png");
        export(&five(), &path).unwrap();

        let mut imported = Palette::new();
        let outcome = import(&path, &mut imported, &CancelToken::new()).unwrap();
        assert_eq!(outcome.added, 6);
        let mut expected = five().colors().to_vec();
        expected.push(Argb::TRANSPARENT);
        assert_eq!(imported.colors(), expected.as_slice());
    }

    #[test]
    fn every_format_writes_a_readable_file() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["p.bmp", "p.gif", "p.jpg", "p.tiff", "p.unknown"] {
            let path = dir.path().join(name);
            let format = export(&five(), &path).unwrap();
            let reader = BufReader::new(File::open(&path).unwrap());
            let img = image::load(reader, format.codec()).unwrap();
            assert_eq!((img.width(), img.height()), (3, 3), "{name}");
        }
    }

    #[test]
    fn empty_palette_exports_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        assert!(matches!(export(&Palette::new(), &path), Err(SwatchError::EmptyPalette)));
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut palette = Palette::new();
        let err = import(&dir.path().join("gone.png"), &mut palette, &CancelToken::new()).unwrap_err();
        assert!(matches!(err, SwatchError::Io(_)));
        assert!(palette.is_empty());
    }
}
