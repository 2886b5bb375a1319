use std::fmt;

/// Straight (non-premultiplied) sRGB color, 8 bits per channel.
///
/// `Display` renders the `#rrggbb` form used in SVG attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(self) -> u8 {
        self.0[0]
    }

    pub fn g(self) -> u8 {
        self.0[1]
    }

    pub fn b(self) -> u8 {
        self.0[2]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// HSL (hue in degrees `[0, 360)`, saturation and lightness in percent) to 8-bit sRGB.
///
/// Hue outside `[0, 360)` is not validated: values `>= 300` land in the magenta sextant and
/// negative values in the red one.
pub fn hsl_to_rgb8(h: f64, s_pct: f64, l_pct: f64) -> HexColor {
    let s = s_pct / 100.0;
    let l = l_pct / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    fn to_u8(v: f64) -> u8 {
        // Ties round to even.
        (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
    }

    HexColor([to_u8(r + m), to_u8(g + m), to_u8(b + m)])
}

/// Same as [`hsl_to_rgb8`], rendered as `#rrggbb`.
pub fn hsl_to_hex(h: f64, s_pct: f64, l_pct: f64) -> String {
    hsl_to_rgb8(h, s_pct, l_pct).to_string()
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
