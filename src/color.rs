//! HSL color math for per-pixel sprite recoloring.
//!
//! Sprites are authored around a fixed reference palette (hue 120, sat 0.2,
//! light 0.5). A variant for a target color is produced by shifting every
//! in-band pixel by the hue delta and scaling its saturation/lightness by the
//! target-to-reference ratios.

/// Reference palette the grayscale-green sprites are authored in.
pub const REFERENCE_HSL: Hsl = Hsl { h: 120.0, s: 0.2, l: 0.5 };

// Hue band (inclusive) treated as "sprite body" and remapped.
const HUE_BAND_MIN: f64 = 110.0;
const HUE_BAND_MAX: f64 = 125.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Degrees in [0, 360).
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

pub fn hue_in_band(h: f64) -> bool {
    (HUE_BAND_MIN..=HUE_BAND_MAX).contains(&h)
}

/// Channels in [0, 1].
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsl { h: h.rem_euclid(360.0), s, l }
}

pub fn hsl_to_rgb(hsl: Hsl) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
    let x = c * (1.0 - ((hsl.h / 60.0) % 2.0 - 1.0).abs());
    let m = hsl.l - c / 2.0;

    let (r, g, b) = if hsl.h < 60.0 {
        (c, x, 0.0)
    } else if hsl.h < 120.0 {
        (x, c, 0.0)
    } else if hsl.h < 180.0 {
        (0.0, c, x)
    } else if hsl.h < 240.0 {
        (0.0, x, c)
    } else if hsl.h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (scale_channel(r, m), scale_channel(g, m), scale_channel(b, m))
}

fn scale_channel(v: f64, m: f64) -> u8 {
    let scaled = ((v + m) * 255.0).floor();
    if scaled < 0.0 {
        0
    } else {
        scaled as u8
    }
}

/// Parses `#rgb` or `#rrggbb` (leading `#` optional).
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim().trim_start_matches('#');
    let expanded: String;
    let hex = match hex.len() {
        3 => {
            expanded = hex.chars().flat_map(|c| [c, c]).collect();
            &expanded
        }
        6 => hex,
        _ => return None,
    };
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Precomputed transform from the reference palette toward a target color.
#[derive(Debug, Clone, Copy)]
pub struct ColorShift {
    pub hue_delta: f64,
    pub sat_ratio: f64,
    pub light_ratio: f64,
}

impl ColorShift {
    pub fn toward_hex(target: &str) -> Option<ColorShift> {
        let (r, g, b) = parse_hex(target)?;
        Some(Self::toward(rgb_to_hsl(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
        )))
    }

    pub fn toward(target: Hsl) -> ColorShift {
        ColorShift {
            hue_delta: target.h - REFERENCE_HSL.h,
            sat_ratio: target.s / REFERENCE_HSL.s,
            light_ratio: target.l / REFERENCE_HSL.l,
        }
    }

    pub fn apply(&self, hsl: Hsl) -> Hsl {
        Hsl {
            h: (hsl.h + self.hue_delta + 360.0) % 360.0,
            s: (hsl.s * self.sat_ratio).min(1.0),
            l: (hsl.l * self.light_ratio).min(1.0),
        }
    }
}

/// Remaps an RGBA byte buffer in place.
///
/// Fully transparent pixels are left untouched. Every other pixel is forced
/// opaque; only pixels whose hue falls in the reference band get recolored.
pub fn remap_pixels(data: &mut [u8], shift: &ColorShift) {
    for px in data.chunks_exact_mut(4) {
        if px[3] == 0 {
            continue;
        }
        px[3] = 255;

        let hsl = rgb_to_hsl(
            px[0] as f64 / 255.0,
            px[1] as f64 / 255.0,
            px[2] as f64 / 255.0,
        );
        if !hue_in_band(hsl.h) {
            continue;
        }

        let (r, g, b) = hsl_to_rgb(shift.apply(hsl));
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: u8, b: u8) -> bool {
        (a as i16 - b as i16).abs() <= 1
    }

    #[test]
    fn rgb_hsl_round_trip_within_one() {
        for r in (0..256).step_by(5) {
            for g in (0..256).step_by(5) {
                for b in (0..256).step_by(5) {
                    let hsl = rgb_to_hsl(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
                    assert!(hsl.h >= 0.0 && hsl.h < 360.0, "hue out of range: {}", hsl.h);
                    let (r2, g2, b2) = hsl_to_rgb(hsl);
                    assert!(
                        close(r as u8, r2) && close(g as u8, g2) && close(b as u8, b2),
                        "({},{},{}) -> ({},{},{})",
                        r, g, b, r2, g2, b2
                    );
                }
            }
        }
    }

    #[test]
    fn primary_colors_convert_exactly() {
        assert_eq!(rgb_to_hsl(1.0, 0.0, 0.0), Hsl { h: 0.0, s: 1.0, l: 0.5 });
        assert_eq!(rgb_to_hsl(0.0, 1.0, 0.0), Hsl { h: 120.0, s: 1.0, l: 0.5 });
        assert_eq!(rgb_to_hsl(0.0, 0.0, 1.0), Hsl { h: 240.0, s: 1.0, l: 0.5 });
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 1.0, l: 0.5 }), (255, 0, 0));
    }

    #[test]
    fn hue_band_boundaries_are_inclusive() {
        assert!(hue_in_band(110.0));
        assert!(hue_in_band(125.0));
        assert!(hue_in_band(120.0));
        assert!(!hue_in_band(109.9));
        assert!(!hue_in_band(125.1));
    }

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(parse_hex("#ff0000"), Some((255, 0, 0)));
        assert_eq!(parse_hex("fcba03"), Some((252, 186, 3)));
        assert_eq!(parse_hex("#E0F"), Some((0xee, 0x00, 0xff)));
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
        assert_eq!(rgb_to_hex(252, 186, 3), "#fcba03");
    }

    // Reference palette as an actual pixel: hsl(120, 0.2, 0.5) = (102, 153, 102).
    const REFERENCE_PIXEL: [u8; 4] = [102, 153, 102, 255];

    #[test]
    fn remap_to_reference_color_is_identity() {
        let shift = ColorShift::toward_hex("#669966").unwrap();
        let mut data = REFERENCE_PIXEL.to_vec();
        remap_pixels(&mut data, &shift);
        assert!(close(data[0], 102) && close(data[1], 153) && close(data[2], 102));
        assert_eq!(data[3], 255);
    }

    #[test]
    fn remap_reference_pixel_to_red_gives_pure_red() {
        // Target #FF0000: hue delta -120, sat ratio 5.0, light ratio 1.0.
        let shift = ColorShift::toward_hex("#FF0000").unwrap();
        assert_eq!(shift.hue_delta, -120.0);
        assert!((shift.sat_ratio - 5.0).abs() < 1e-9);
        assert!((shift.light_ratio - 1.0).abs() < 1e-9);

        // Exact reference HSL lands on pure red.
        let shifted = shift.apply(REFERENCE_HSL);
        assert_eq!(shifted.h, 0.0);
        assert_eq!(hsl_to_rgb(shifted), (255, 0, 0));

        // The 8-bit reference pixel carries quantization noise, so the
        // buffer path is held to the same +/-1 tolerance as a round trip.
        let mut data = REFERENCE_PIXEL.to_vec();
        remap_pixels(&mut data, &shift);
        assert!(close(data[0], 255) && close(data[1], 0) && close(data[2], 0));
        assert_eq!(data[3], 255);
    }

    #[test]
    fn out_of_band_pixel_passes_through_but_loses_translucency() {
        let shift = ColorShift::toward_hex("#FF0000").unwrap();
        // Pure blue, hue 240: far outside the band.
        let mut data = vec![0, 0, 255, 128];
        remap_pixels(&mut data, &shift);
        assert_eq!(&data[..], &[0, 0, 255, 255]);
    }

    #[test]
    fn transparent_pixel_is_never_touched() {
        let shift = ColorShift::toward_hex("#FF0000").unwrap();
        let mut data = vec![102, 153, 102, 0];
        remap_pixels(&mut data, &shift);
        assert_eq!(&data[..], &[102, 153, 102, 0]);
    }

    #[test]
    fn semi_opaque_in_band_pixel_is_remapped_and_forced_opaque() {
        let shift = ColorShift::toward_hex("#FF0000").unwrap();
        let mut data = vec![102, 153, 102, 128];
        remap_pixels(&mut data, &shift);
        assert!(close(data[0], 255) && close(data[1], 0) && close(data[2], 0));
        assert_eq!(data[3], 255);
    }
}
