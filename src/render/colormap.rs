// src/render/colormap.rs

/// RGB color with channel values in 0..=255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A color stop: position in [0, 1] mapped to an RGB color.
#[derive(Debug, Clone, Copy)]
pub struct ColorStop {
    pub t: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(t: f64, r: u8, g: u8, b: u8) -> Self {
        Self {
            t,
            color: Rgb::new(r, g, b),
        }
    }
}

/// Diverging red -> pale yellow -> green ramp for vegetation indices.
/// Low values read as bare soil, the midpoint is neutral, high values
/// read as dense vegetation.
const RDYLGN_STOPS: &[ColorStop] = &[
    ColorStop::new(0.00, 165, 0, 38),
    ColorStop::new(0.25, 244, 109, 67),
    ColorStop::new(0.50, 255, 255, 191),
    ColorStop::new(0.75, 102, 189, 99),
    ColorStop::new(1.00, 0, 104, 55),
];

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        lerp(c1.r as f64, c2.r as f64, t).round() as u8,
        lerp(c1.g as f64, c2.g as f64, t).round() as u8,
        lerp(c1.b as f64, c2.b as f64, t).round() as u8,
    )
}

/// Evaluate the diverging scheme at normalized position `t` ∈ [0, 1].
/// Values outside the range clamp to the end stops.
pub fn evaluate(t: f64) -> Rgb {
    let stops = RDYLGN_STOPS;
    if t <= 0.0 {
        return stops[0].color;
    }
    if t >= 1.0 {
        return stops[stops.len() - 1].color;
    }
    for i in 1..stops.len() {
        if t <= stops[i].t {
            let ratio = (t - stops[i - 1].t) / (stops[i].t - stops[i - 1].t);
            return lerp_color(stops[i - 1].color, stops[i].color, ratio);
        }
    }
    stops[stops.len() - 1].color
}

/// Map an NDVI value onto the fixed [-1, 1] display range.
pub fn ndvi_to_t(value: f32) -> f64 {
    (value as f64 + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(evaluate(0.0), Rgb::new(165, 0, 38));
        assert_eq!(evaluate(1.0), Rgb::new(0, 104, 55));
    }

    #[test]
    fn neutral_midpoint() {
        assert_eq!(evaluate(0.5), Rgb::new(255, 255, 191));
    }

    #[test]
    fn clamps_out_of_range() {
        assert_eq!(evaluate(-0.5), evaluate(0.0));
        assert_eq!(evaluate(1.5), evaluate(1.0));
    }

    #[test]
    fn ndvi_range_maps_to_unit_interval() {
        assert!((ndvi_to_t(-1.0) - 0.0).abs() < 1e-9);
        assert!((ndvi_to_t(0.0) - 0.5).abs() < 1e-9);
        assert!((ndvi_to_t(1.0) - 1.0).abs() < 1e-9);
    }
}
