use super::{blend::Mixer, Argb, Pixel, PixelBuffer, P2};

impl PixelBuffer {
    pub fn set_pixel_xy(&mut self, p: P2, c: Argb) {
        self.set_pixel_xy_by(p, c, Argb::mix);
    }

    pub fn set_pixel_xy_by(&mut self, p: P2, c: Argb, b: Mixer) {
        if p.x < 0 || p.y < 0 || p.x >= self.width as i32 || p.y >= self.height as i32 {
            return;
        }

        let i = p.y as usize * self.width + p.x as usize;
        if let Some(px) = self.buffer.get_mut(i) {
            *px = b(*px, c);
        }
    }

    /// Horizontal span with both ends clipped to the buffer.
    fn hspan(&mut self, y: i32, xs: i32, xe: i32, c: Argb, b: Mixer) {
        if y < 0 || y >= self.height as i32 {
            return;
        }

        let xs = xs.max(0);
        let xe = xe.min(self.width as i32 - 1);
        if xs > xe {
            return;
        }

        let (xs, xe) = (xs as usize, xe as usize);
        let row = y as usize * self.width;

        if let Some(chunk) = self.buffer.get_mut(row + xs..=row + xe) {
            for px in chunk {
                *px = b(*px, c);
            }
        }
    }

    pub fn draw_circle_filled(&mut self, center: P2, radius: i32, c: Argb) {
        self.draw_circle_filled_by(center, radius, c, Argb::mix);
    }

    /// Midpoint circle, filled with horizontal spans. Spans near the
    /// diagonals overlap; that only matters for translucent mixers.
    pub fn draw_circle_filled_by(&mut self, center: P2, radius: i32, c: Argb, b: Mixer) {
        if radius <= 0 {
            self.set_pixel_xy_by(center, c, b);
            return;
        }

        let mut t1 = radius / 16;
        let mut x = radius;
        let mut y = 0;

        while x >= y {
            self.hspan(center.y + y, center.x - x, center.x + x, c, b);
            if y != 0 {
                self.hspan(center.y - y, center.x - x, center.x + x, c, b);
            }
            if x != y {
                self.hspan(center.y + x, center.x - y, center.x + y, c, b);
                if x != 0 {
                    self.hspan(center.y - x, center.x - y, center.x + y, c, b);
                }
            }

            y += 1;
            t1 += y;
            let t2 = t1 - x;

            if t2 >= 0 {
                t1 = t2;
                x -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(pix: &PixelBuffer) -> usize {
        let (w, h) = pix.sizeu();
        (0..w * h).filter(|&i| pix.pixel(i) != 0).count()
    }

    #[test]
    fn plot_outside_is_noop() {
        let mut pix = PixelBuffer::new(8, 8);

        pix.set_pixel_xy(P2::new(-1, 3), 0xFF_FF_FF_FF);
        pix.set_pixel_xy(P2::new(3, -1), 0xFF_FF_FF_FF);
        pix.set_pixel_xy(P2::new(8, 3), 0xFF_FF_FF_FF);
        pix.set_pixel_xy(P2::new(3, 8), 0xFF_FF_FF_FF);

        assert_eq!(lit_pixels(&pix), 0);
    }

    #[test]
    fn circle_clips_at_every_edge() {
        for center in [
            P2::new(0, 0),
            P2::new(7, 7),
            P2::new(-20, 4),
            P2::new(4, 30),
        ] {
            let mut pix = PixelBuffer::new(8, 8);
            pix.draw_circle_filled(center, 5, 0xFF_FF_FF_FF);
        }
    }

    #[test]
    fn filled_circle_covers_center_and_cardinals() {
        let mut pix = PixelBuffer::new(32, 32);
        let c = P2::new(16, 16);
        pix.draw_circle_filled(c, 6, 0xFF_FF_FF_FF);

        for p in [
            c,
            P2::new(16 + 6, 16),
            P2::new(16 - 6, 16),
            P2::new(16, 16 + 6),
            P2::new(16, 16 - 6),
        ] {
            let i = p.y as usize * 32 + p.x as usize;
            assert_eq!(pix.pixel(i), 0xFF_FF_FF_FF, "miss at {p:?}");
        }

        // nothing outside the bounding box
        let i = 16usize * 32 + (16 + 7);
        assert_eq!(pix.pixel(i), 0);
    }

    #[test]
    fn zero_radius_plots_one_pixel() {
        let mut pix = PixelBuffer::new(8, 8);
        pix.draw_circle_filled(P2::new(4, 4), 0, 0xFF_FF_FF_FF);
        assert_eq!(lit_pixels(&pix), 1);
    }
}
