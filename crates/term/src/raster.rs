//! Square RGB pixel surface the scene is drawn onto.
//!
//! Coordinates are pixels from the top-left corner. All drawing clips to the
//! surface, so callers may pass shapes that hang off an edge.

use crate::fb::Rgb;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Raster {
    size: u16,
    pixels: Vec<Rgb>,
}

impl Raster {
    pub fn new(size: u16) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            pixels: vec![Rgb::default(); len],
        }
    }

    pub fn size(&self) -> u16 {
        self.size
    }

    pub fn width(&self) -> u16 {
        self.size
    }

    pub fn height(&self) -> u16 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Resize, keeping the allocation when possible. Contents are undefined
    /// until the next `clear`.
    pub fn resize(&mut self, size: u16) {
        if self.size == size {
            return;
        }
        self.size = size;
        let len = (size as usize) * (size as usize);
        self.pixels.resize(len, Rgb::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some((y as usize) * (self.size as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u16, y: u16, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let size = i32::from(self.size);
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(size);
        let y1 = y.saturating_add(h).min(size);
        for py in y0..y1 {
            for px in x0..x1 {
                self.set(px as u16, py as u16, color);
            }
        }
    }

    /// Filled disc; a pixel is inside when its centre is within `r`.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb) {
        if r <= 0.0 {
            return;
        }
        let r2 = r * r;
        let x0 = (cx - r).floor() as i32;
        let x1 = (cx + r).ceil() as i32;
        let y0 = (cy - r).floor() as i32;
        let y1 = (cy + r).ceil() as i32;
        for py in y0.max(0)..y1.min(i32::from(self.size)) {
            for px in x0.max(0)..x1.min(i32::from(self.size)) {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.set(px as u16, py as u16, color);
                }
            }
        }
    }

    /// Full-width one pixel line at row `y`.
    pub fn hline(&mut self, y: u16, color: Rgb) {
        if y >= self.size {
            return;
        }
        let start = (y as usize) * (self.size as usize);
        self.pixels[start..start + self.size as usize].fill(color);
    }

    /// Full-height one pixel line at column `x`.
    pub fn vline(&mut self, x: u16, color: Rgb) {
        for y in 0..self.size {
            self.set(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn count(r: &Raster, color: Rgb) -> usize {
        r.pixels().iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut r = Raster::new(4);
        r.fill_rect(-2, 2, 10, 10, WHITE);
        assert_eq!(count(&r, WHITE), 8);
        assert_eq!(r.get(0, 1), Some(Rgb::default()));
        assert_eq!(r.get(3, 3), Some(WHITE));
    }

    #[test]
    fn test_fill_rect_negative_size_is_noop() {
        let mut r = Raster::new(4);
        r.fill_rect(1, 1, -1, 2, WHITE);
        assert_eq!(count(&r, WHITE), 0);
    }

    #[test]
    fn test_fill_circle_is_symmetric() {
        let mut r = Raster::new(10);
        r.fill_circle(5.0, 5.0, 3.0, WHITE);
        assert_eq!(r.get(5, 5), Some(WHITE));
        assert_eq!(r.get(4, 4), Some(WHITE));
        assert_eq!(r.get(0, 0), Some(Rgb::default()));
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(r.get(x, y), r.get(9 - x, y));
                assert_eq!(r.get(x, y), r.get(x, 9 - y));
            }
        }
    }

    #[test]
    fn test_lines() {
        let mut r = Raster::new(3);
        r.hline(1, WHITE);
        r.vline(2, WHITE);
        r.hline(9, WHITE);
        assert_eq!(count(&r, WHITE), 5);
    }

    #[test]
    fn test_resize() {
        let mut r = Raster::new(3);
        r.resize(0);
        assert!(r.is_empty());
        assert!(r.pixels().is_empty());
        r.resize(5);
        assert_eq!(r.pixels().len(), 25);
    }
}
