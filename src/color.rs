use palette::{IntoColor, Lab, LinSrgb, Mix, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Viridis colour map
// ---------------------------------------------------------------------------

/// Evenly spaced control points of the viridis colour map.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 45, 123),
    (59, 82, 139),
    (44, 114, 142),
    (33, 145, 140),
    (40, 174, 128),
    (94, 201, 98),
    (173, 220, 48),
    (253, 231, 37),
];

fn stop(i: usize) -> LinSrgb {
    let (r, g, b) = VIRIDIS[i];
    Srgb::new(r, g, b).into_format::<f32>().into_linear()
}

fn to_rgb(color: Srgb) -> RGBColor {
    let c: Srgb<u8> = color.into_format();
    RGBColor(c.red, c.green, c.blue)
}

fn viridis_srgb(t: f64) -> Srgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) } as f32;
    let segments = (VIRIDIS.len() - 1) as f32;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let mixed = stop(i).mix(stop(i + 1), pos - i as f32);
    Srgb::from_linear(mixed)
}

/// Sample viridis at `t` in `[0, 1]`; out-of-range values are clamped and
/// NaN maps to the low end.
pub fn viridis(t: f64) -> RGBColor {
    to_rgb(viridis_srgb(t))
}

/// Map `value` from `[lo, hi]` onto viridis.
pub fn scaled(value: f64, lo: f64, hi: f64) -> RGBColor {
    if hi <= lo {
        return viridis(0.5);
    }
    viridis((value - lo) / (hi - lo))
}

/// `n` series colours spread over the dark-to-mid part of viridis, so the
/// yellow end never lands on a white background.
pub fn series_palette(n: usize) -> Vec<RGBColor> {
    match n {
        0 => Vec::new(),
        1 => vec![viridis(0.35)],
        _ => (0..n)
            .map(|i| viridis(0.15 + 0.6 * i as f64 / (n - 1) as f64))
            .collect(),
    }
}

/// Text colour readable on top of `background`.
pub fn annotation_color(background: &RGBColor) -> RGBColor {
    let bg: Srgb = Srgb::new(background.0, background.1, background.2).into_format();
    let lab: Lab = bg.into_color();
    if lab.l > 55.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_control_points() {
        let lo = viridis(0.0);
        let hi = viridis(1.0);
        assert_eq!((lo.0, lo.1, lo.2), VIRIDIS[0]);
        assert_eq!((hi.0, hi.1, hi.2), VIRIDIS[8]);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let a = viridis(-3.0);
        let b = viridis(0.0);
        assert_eq!((a.0, a.1, a.2), (b.0, b.1, b.2));
        let c = viridis(f64::NAN);
        assert_eq!((c.0, c.1, c.2), (b.0, b.1, b.2));
    }

    #[test]
    fn scaled_maps_correlation_range() {
        let top = scaled(1.0, -1.0, 1.0);
        assert_eq!((top.0, top.1, top.2), VIRIDIS[8]);
        let mid = scaled(0.0, -1.0, 1.0);
        assert_eq!((mid.0, mid.1, mid.2), VIRIDIS[4]);
    }

    #[test]
    fn palette_sizes() {
        assert!(series_palette(0).is_empty());
        assert_eq!(series_palette(1).len(), 1);
        assert_eq!(series_palette(2).len(), 2);
    }

    #[test]
    fn annotation_contrasts_with_background() {
        let dark = annotation_color(&viridis(0.0));
        let light = annotation_color(&viridis(1.0));
        assert_eq!((dark.0, dark.1, dark.2), (255, 255, 255));
        assert_eq!((light.0, light.1, light.2), (0, 0, 0));
    }
}
