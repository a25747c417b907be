pub mod blend;
pub mod draw;

use crate::math::Vec2;

pub type Argb = u32;
pub type P2 = Vec2<i32>;

/// Channel math over a packed pixel. Implemented for [`Argb`] in
/// [`blend`]; the buffer and the draw primitives only go through this.
pub(crate) trait Pixel: Copy + Clone + Sized + std::fmt::Debug {
    fn black() -> Self;
    fn white() -> Self;
    fn trans() -> Self;

    /// Plain replacement.
    fn over(self, other: Self) -> Self;
    /// Alpha compositing.
    fn mix(self, other: Self) -> Self;

    fn decompose(self) -> [u8; 4];
    fn compose(array: [u8; 4]) -> Self;
}

pub struct PixelBuffer {
    buffer: Vec<Argb>,
    width: usize,
    height: usize,

    background: Argb,
}

impl PixelBuffer {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            buffer: vec![Argb::trans(); w * h],
            width: w,
            height: h,

            background: Argb::black(),
        }
    }

    pub fn set_background(&mut self, bg: Argb) {
        self.background = bg;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn sizeu(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn clear(&mut self) {
        let bg = self.background;
        self.buffer.fill(bg);
    }

    pub fn resize(&mut self, w: usize, h: usize) {
        let len = w * h;
        if len > self.buffer.len() {
            self.buffer.resize(len, self.background);
        }
        self.width = w;
        self.height = h;
    }

    pub fn pixel(&self, i: usize) -> Argb {
        self.buffer.get(i).copied().unwrap_or(Argb::trans())
    }

    /// Nearest-neighbour blit into a window surface at an integer scale.
    /// `width` overrides the destination stride where the surface is wider
    /// than `self.width * scale` (Wayland resize increments).
    pub fn scale_to(&self, scale: usize, dest: &mut [Argb], width: Option<usize>) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let dst_width = width.unwrap_or(self.width * scale);

        self.buffer
            .chunks_exact(self.width) // source lines
            .zip(dest.chunks_exact_mut(dst_width * scale)) // with destination lines
            .flat_map(|(src_row, dst_row)| {
                src_row.iter().cycle().zip(dst_row.chunks_exact_mut(scale))
            })
            .for_each(|(src_pixel, dst_chunk)| dst_chunk.fill(*src_pixel));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_fills_background() {
        let mut pix = PixelBuffer::new(4, 4);
        pix.set_background(0xFF_10_20_30);
        pix.clear();

        for i in 0..16 {
            assert_eq!(pix.pixel(i), 0xFF_10_20_30);
        }
    }

    #[test]
    fn resize_keeps_reads_in_bounds() {
        let mut pix = PixelBuffer::new(2, 2);
        pix.resize(8, 8);
        assert_eq!(pix.sizeu(), (8, 8));

        // out-of-range reads degrade to transparent instead of panicking
        assert_eq!(pix.pixel(1_000_000), Argb::trans());
    }

    #[test]
    fn scale_to_doubles_pixels() {
        let mut pix = PixelBuffer::new(2, 1);
        pix.set_background(0xFF_00_00_00);
        pix.clear();
        pix.set_pixel_xy(P2::new(0, 0), 0xFF_AA_BB_CC);

        let mut dest = vec![0u32; 2 * 2 * 2];
        pix.scale_to(2, &mut dest, None);

        assert_eq!(&dest[..4], &[0xFF_AA_BB_CC, 0xFF_AA_BB_CC, 0xFF_00_00_00, 0xFF_00_00_00]);
        assert_eq!(&dest[..2], &dest[4..6]);
    }

    #[test]
    fn scale_to_empty_buffer_is_noop() {
        let pix = PixelBuffer::new(0, 0);
        let mut dest = vec![0u32; 16];
        pix.scale_to(2, &mut dest, None);
        assert!(dest.iter().all(|&p| p == 0));
    }
}
