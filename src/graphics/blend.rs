use super::{Argb, Pixel};

pub type Mixer = fn(Argb, Argb) -> Argb;

pub fn composite_u32(c1: Argb, c2: Argb) -> Argb {
    let [a1, r1, g1, b1] = c1.decompose();
    let [a2, r2, g2, b2] = c2.decompose();

    let (a, a3) = {
        let a1 = a1 as u16;
        let a2 = a2 as u16;

        let a3 = (a1 * (255 - a2)) / 256;

        (a2 + a3, a3)
    };

    if a == 0 {
        return Argb::compose([0, 0, 0, 0]);
    }

    let composite_channel = |c1: u8, c2: u8| -> u8 {
        let c1 = c1 as u16;
        let c2 = c2 as u16;
        let a2 = a2 as u16;
        let a = a as u16;

        ((c2 * a2 + c1 * a3) / a) as u8
    };

    Argb::compose([
        a as u8,
        composite_channel(r1, r2),
        composite_channel(g1, g2),
        composite_channel(b1, b2),
    ])
}

/// HSL to packed opaque ARGB. Hue in degrees, saturation and lightness
/// in percent.
pub fn hsl_to_argb(h: f32, s: f32, l: f32) -> Argb {
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    let to8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    Argb::compose([0xFF, to8(r), to8(g), to8(b)])
}

impl Pixel for Argb {
    fn black() -> Argb {
        0xFF_00_00_00
    }

    fn white() -> Argb {
        0xFF_FF_FF_FF
    }

    fn trans() -> Argb {
        0x0
    }

    fn over(self, other: Argb) -> Argb {
        other
    }

    fn mix(self, other: Argb) -> Argb {
        composite_u32(self, other)
    }

    fn decompose(self) -> [u8; 4] {
        self.to_be_bytes()
    }

    fn compose(array: [u8; 4]) -> Argb {
        Argb::from_be_bytes(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_extremes() {
        assert_eq!(hsl_to_argb(208.0, 62.0, 0.0), Argb::black());
        assert_eq!(hsl_to_argb(208.0, 62.0, 100.0), Argb::white());
        assert_eq!(hsl_to_argb(0.0, 0.0, 50.0), 0xFF_80_80_80);
    }

    #[test]
    fn brand_hue_is_blue_heavy() {
        for l in [20, 35, 50, 65, 80] {
            let [a, r, _, b] = hsl_to_argb(208.0, 62.0, l as f32).decompose();
            assert_eq!(a, 0xFF);
            assert!(b > r, "lightness {l}: blue {b} should dominate red {r}");
        }
    }

    #[test]
    fn mix_opaque_replaces() {
        let under = 0xFF_11_22_33;
        let over = 0xFF_AA_BB_CC;
        assert_eq!(under.mix(over), over);
    }

    #[test]
    fn mix_transparent_keeps_under() {
        let under = 0xFF_11_22_33;
        let [a, r, g, b] = under.mix(0x00_FF_FF_FF).decompose();
        assert!(a > 0xF0);
        assert_eq!([r, g, b], [0x11, 0x22, 0x33]);
    }
}
