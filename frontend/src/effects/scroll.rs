use crate::error::EffectError;

/// Vertical extent of an element, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// How far `element` has travelled through `container`: 0 when its top meets
/// the container's bottom edge, 1 when its bottom meets the container's top.
pub fn scroll_fraction(element: Span, container: Span) -> f64 {
    let travel = container.height + element.height;
    if travel <= 0.0 || !travel.is_finite() {
        return 0.0;
    }
    let top = element.top - container.top;
    ((container.height - top) / travel).clamp(0.0, 1.0)
}

/// Piecewise-linear mapping with clamped ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    stops: Vec<(f64, f64)>,
}

impl Curve {
    pub fn new(inputs: &[f64], outputs: &[f64]) -> Result<Self, EffectError> {
        if inputs.len() != outputs.len() {
            return Err(EffectError::CurveLengthMismatch {
                inputs: inputs.len(),
                outputs: outputs.len(),
            });
        }
        if inputs.len() < 2 {
            return Err(EffectError::TooFewKeyframes(inputs.len()));
        }
        if let Some(index) = inputs.windows(2).position(|pair| !(pair[0] < pair[1])) {
            return Err(EffectError::UnorderedKeyframes(index + 1));
        }

        Ok(Self {
            stops: inputs.iter().copied().zip(outputs.iter().copied()).collect(),
        })
    }

    pub fn constant(value: f64) -> Self {
        Self {
            stops: vec![(0.0, value), (1.0, value)],
        }
    }

    pub fn sample(&self, x: f64) -> f64 {
        let (first_x, first_y) = self.stops[0];
        let (last_x, last_y) = self.stops[self.stops.len() - 1];
        if x.is_nan() || x <= first_x {
            return first_y;
        }
        if x >= last_x {
            return last_y;
        }

        for pair in self.stops.windows(2) {
            let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
            if x <= x1 {
                return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
            }
        }
        last_y
    }
}

/// Fade/slide of one section as it transits the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionReveal {
    pub opacity: Curve,
    pub offset_px: Curve,
}

impl SectionReveal {
    pub fn new(opacity: Curve, offset_px: Curve) -> Self {
        Self { opacity, offset_px }
    }

    /// Fully visible and in place at every scroll position.
    pub fn pinned() -> Self {
        Self::new(Curve::constant(1.0), Curve::constant(0.0))
    }

    pub fn style_at(&self, fraction: f64) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.1}px);",
            self.opacity.sample(fraction).clamp(0.0, 1.0),
            self.offset_px.sample(fraction)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn fade() -> Curve {
        Curve::new(&[0.0, 0.4, 0.9, 1.0], &[0.0, 1.0, 1.0, 0.0]).unwrap()
    }

    #[test]
    fn fade_curve_rises_holds_and_falls() {
        let curve = fade();
        assert!(close(curve.sample(0.2), 0.5));
        assert!(close(curve.sample(0.4), 1.0));
        assert!(close(curve.sample(0.6), 1.0));
        assert!(close(curve.sample(0.95), 0.5));
        assert!(curve.sample(0.97) < curve.sample(0.93));
    }

    #[test]
    fn samples_outside_the_breakpoints_clamp() {
        let curve = fade();
        assert_eq!(curve.sample(-3.0), 0.0);
        assert_eq!(curve.sample(1.5), 0.0);

        let slide = Curve::new(&[0.2, 0.5], &[50.0, 0.0]).unwrap();
        assert_eq!(slide.sample(0.0), 50.0);
        assert_eq!(slide.sample(0.9), 0.0);
        assert!(close(slide.sample(0.35), 25.0));
        assert_eq!(slide.sample(f64::NAN), 50.0);
    }

    #[test]
    fn malformed_curves_are_rejected() {
        assert_eq!(
            Curve::new(&[0.0, 1.0], &[1.0]),
            Err(EffectError::CurveLengthMismatch { inputs: 2, outputs: 1 })
        );
        assert_eq!(Curve::new(&[0.5], &[1.0]), Err(EffectError::TooFewKeyframes(1)));
        assert_eq!(
            Curve::new(&[0.0, 0.6, 0.6], &[0.0, 1.0, 0.0]),
            Err(EffectError::UnorderedKeyframes(2))
        );
        assert!(Curve::new(&[0.0, f64::NAN], &[0.0, 1.0]).is_err());
    }

    #[test]
    fn fraction_runs_from_entry_to_exit() {
        let viewport = Span::new(0.0, 800.0);
        assert_eq!(scroll_fraction(Span::new(800.0, 400.0), viewport), 0.0);
        assert_eq!(scroll_fraction(Span::new(-400.0, 400.0), viewport), 1.0);
        assert!(close(scroll_fraction(Span::new(200.0, 400.0), viewport), 0.5));

        assert_eq!(scroll_fraction(Span::new(2_000.0, 400.0), viewport), 0.0);
        assert_eq!(scroll_fraction(Span::new(-2_000.0, 400.0), viewport), 1.0);
        assert_eq!(scroll_fraction(Span::new(0.0, 0.0), Span::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn fraction_is_relative_to_the_container() {
        let panel = Span::new(100.0, 600.0);
        assert_eq!(scroll_fraction(Span::new(700.0, 200.0), panel), 0.0);
        assert!(close(scroll_fraction(Span::new(300.0, 200.0), panel), 0.5));
    }

    #[test]
    fn style_reflects_both_curves() {
        let reveal = SectionReveal::new(
            fade(),
            Curve::new(&[0.0, 0.5, 1.0], &[50.0, 0.0, -50.0]).unwrap(),
        );
        assert_eq!(reveal.style_at(0.0), "opacity: 0.000; transform: translateY(50.0px);");
        assert_eq!(reveal.style_at(0.5), "opacity: 1.000; transform: translateY(0.0px);");
        assert_eq!(
            SectionReveal::pinned().style_at(0.8),
            "opacity: 1.000; transform: translateY(0.0px);"
        );
    }
}
