use kurbo::{Affine, Rect};

use crate::{
    chain::snapshot::{ChainSnapshot, TrackSnapshot},
    foundation::{
        color::Rgb8,
        error::{CascadeError, CascadeResult},
    },
};

/// Layout and colors used by [`render_snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    /// Width of every track strip, in pixels.
    pub width: u32,
    /// Height of every track strip, in pixels.
    pub track_height: u32,
    /// Vertical space between strips, in pixels.
    pub gap: u32,
    /// Color behind and between strips.
    pub background: Rgb8,
    /// Cell outline color, or `None` for no outlines.
    pub outline: Option<Rgb8>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            track_height: 50,
            gap: 10,
            background: Rgb8::new(0x2c, 0x28, 0x25),
            outline: Some(Rgb8::BLACK),
        }
    }
}

/// Straight (non-premultiplied) RGBA8 image of a chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainRaster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major pixels, 4 bytes each.
    pub data: Vec<u8>,
}

impl ChainRaster {
    fn filled(width: u32, height: u32, color: Rgb8) -> Self {
        let px = color.to_rgba8();
        let data = px.repeat(width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    /// Pixel at `(x, y)`; `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.data[i..i + 4]);
        Some(px)
    }

    fn fill(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb8) {
        let px = color.to_rgba8();
        let (x1, y1) = (x1.min(self.width), y1.min(self.height));
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                let i = (row + x as usize) * 4;
                self.data[i..i + 4].copy_from_slice(&px);
            }
        }
    }

    fn outline(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb8) {
        self.fill(x0, y0, x1, y0 + 1, color);
        self.fill(x0, y1 - 1, x1, y1, color);
        self.fill(x0, y0, x0 + 1, y1, color);
        self.fill(x1 - 1, y0, x1, y1, color);
    }
}

/// Draw every track as a strip of equal-width cells, base track on top.
///
/// Blank cells are drawn white. Cells narrower than a pixel may vanish.
#[tracing::instrument(skip_all, fields(tracks = snapshot.tracks.len()))]
pub fn render_snapshot(
    snapshot: &ChainSnapshot,
    settings: &RenderSettings,
) -> CascadeResult<ChainRaster> {
    if settings.width == 0 || settings.track_height == 0 {
        return Err(CascadeError::validation(
            "render width/track_height must be > 0",
        ));
    }
    let n = u32::try_from(snapshot.tracks.len())
        .map_err(|_| CascadeError::validation("too many tracks to render"))?;
    if n == 0 {
        return Err(CascadeError::validation("snapshot has no tracks"));
    }

    let too_tall = || CascadeError::validation("rendered image is too tall");
    let pitch = settings
        .track_height
        .checked_add(settings.gap)
        .ok_or_else(too_tall)?;
    let height = n
        .checked_mul(pitch)
        .map(|h| h - settings.gap)
        .ok_or_else(too_tall)?;

    let mut raster = ChainRaster::filled(settings.width, height, settings.background);
    for (i, track) in snapshot.tracks.iter().enumerate() {
        let to_pixels = Affine::translate((0.0, f64::from(i as u32 * pitch)))
            * Affine::scale_non_uniform(
                f64::from(settings.width),
                f64::from(settings.track_height),
            );
        draw_track(&mut raster, track, to_pixels, settings.outline);
    }

    tracing::debug!(width = raster.width, height = raster.height, "rendered chain");
    Ok(raster)
}

fn draw_track(
    raster: &mut ChainRaster,
    track: &TrackSnapshot,
    to_pixels: Affine,
    outline: Option<Rgb8>,
) {
    let res = track.values.len() as f64;
    for (k, cell) in track.values.iter().enumerate() {
        // Unit space: x across the strip, y down the strip.
        let unit = Rect::new(k as f64 / res, 0.0, (k + 1) as f64 / res, 1.0);
        let px = to_pixels.transform_rect_bbox(unit);
        let (x0, y0) = (px.x0.round() as u32, px.y0.round() as u32);
        let (x1, y1) = (px.x1.round() as u32, px.y1.round() as u32);
        if x1 <= x0 || y1 <= y0 {
            continue;
        }

        raster.fill(x0, y0, x1, y1, cell.display_color());
        if let Some(c) = outline {
            raster.outline(x0, y0, x1, y1, c);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
