/// Smallest "nice" number (1, 2, 2.5, 5 x 10^k) that is >= `v`.
pub fn nice_ceiling(v: f64) -> f64 {
    if !v.is_finite() || v <= 0.0 {
        return 1.0;
    }
    let exp = v.log10().floor();
    let base = 10f64.powi(exp as i32);
    let frac = v / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// A linear value domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
}

impl Axis {
    /// Zero-based axis wide enough for every value.
    pub fn fit<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let max = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(0.0f64, f64::max);
        Self {
            min: 0.0,
            max: nice_ceiling(max),
        }
    }

    pub fn domain(min: f64, max: f64) -> Self {
        if max > min {
            Self { min, max }
        } else {
            Self { min, max: min + 1.0 }
        }
    }

    /// Position of `v` within the domain, clamped to [0, 1].
    pub fn ratio(&self, v: f64) -> f64 {
        if !v.is_finite() {
            return 0.0;
        }
        ((v - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// `count + 1` evenly spaced tick values from min to max.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        let step = (self.max - self.min) / count as f64;
        (0..=count).map(|i| self.min + step * i as f64).collect()
    }
}

/// Drawing area inside the chart's view box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Plot {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Share of a category band taken by its bar group.
pub const GROUP_FILL: f64 = 0.7;

/// Upright bars for one series, one per category, laid out in band order.
///
/// `slot` is the series' position among `slots` bar series sharing each band.
pub fn column_rects(
    plot: Plot,
    axis: Axis,
    values: &[f64],
    slot: usize,
    slots: usize,
) -> Vec<Rect> {
    let n = values.len().max(1) as f64;
    let band = plot.width / n;
    let group = band * GROUP_FILL;
    let bar_w = group / slots.max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = axis.ratio(*v) * plot.height;
            Rect {
                x: plot.left + i as f64 * band + (band - group) / 2.0 + slot as f64 * bar_w,
                y: plot.bottom() - h,
                w: bar_w,
                h,
            }
        })
        .collect()
}

/// Horizontal bars for one series, categories stacked top to bottom.
pub fn row_rects(plot: Plot, axis: Axis, values: &[f64], slot: usize, slots: usize) -> Vec<Rect> {
    let n = values.len().max(1) as f64;
    let band = plot.height / n;
    let group = band * GROUP_FILL;
    let bar_h = group / slots.max(1) as f64;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Rect {
            x: plot.left,
            y: plot.top + i as f64 * band + (band - group) / 2.0 + slot as f64 * bar_h,
            w: axis.ratio(*v) * plot.width,
            h: bar_h,
        })
        .collect()
}

/// Band-centred points for a line or area series.
pub fn line_points(plot: Plot, axis: Axis, values: &[f64]) -> Vec<(f64, f64)> {
    let n = values.len().max(1) as f64;
    let band = plot.width / n;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            (
                plot.left + (i as f64 + 0.5) * band,
                plot.bottom() - axis.ratio(*v) * plot.height,
            )
        })
        .collect()
}

pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LIFECYCLE_STAGES;

    const PLOT: Plot = Plot {
        left: 40.0,
        top: 10.0,
        width: 600.0,
        height: 200.0,
    };

    #[test]
    fn nice_ceilings() {
        assert_eq!(nice_ceiling(231.0), 250.0);
        assert_eq!(nice_ceiling(902.0), 1000.0);
        assert_eq!(nice_ceiling(31894.0), 50000.0);
        assert_eq!(nice_ceiling(1.0), 1.0);
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(f64::NAN), 1.0);
    }

    #[test]
    fn axis_ratio_clamps() {
        let axis = Axis::domain(4.0, 7.0);
        assert_eq!(axis.ratio(4.0), 0.0);
        assert_eq!(axis.ratio(5.5), 0.5);
        assert_eq!(axis.ratio(9.0), 1.0);
        assert_eq!(axis.ratio(1.0), 0.0);
        assert_eq!(Axis::domain(3.0, 3.0).max, 4.0);
    }

    #[test]
    fn ticks_span_domain() {
        let ticks = Axis::fit([231.0]).ticks(5);
        assert_eq!(ticks, vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0]);
    }

    #[test]
    fn lifecycle_bars_keep_order_and_proportion() {
        let values: Vec<f64> = LIFECYCLE_STAGES.iter().map(|r| r.value).collect();
        let axis = Axis::fit(values.iter().copied());
        let rects = column_rects(PLOT, axis, &values, 0, 1);
        assert_eq!(rects.len(), 6);
        for pair in rects.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        for (rect, v) in rects.iter().zip(&values) {
            assert!((rect.h / PLOT.height - v / axis.max).abs() < 1e-9);
            assert!((rect.y + rect.h - PLOT.bottom()).abs() < 1e-9);
        }
        // Dormant (231) is 231/9 times as tall as Loyal (9)
        assert!((rects[0].h / rects[5].h - 231.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn grouped_bars_share_a_band() {
        let axis = Axis::fit([10.0]);
        let a = column_rects(PLOT, axis, &[5.0, 10.0], 0, 2);
        let b = column_rects(PLOT, axis, &[5.0, 10.0], 1, 2);
        assert!((a[0].x + a[0].w - b[0].x).abs() < 1e-9);
        assert!(b[0].x + b[0].w < a[1].x);
    }

    #[test]
    fn row_bars_grow_rightward() {
        let axis = Axis::fit([100.0]);
        let rects = row_rects(PLOT, axis, &[100.0, 50.0], 0, 1);
        assert_eq!(rects[0].x, PLOT.left);
        assert!((rects[0].w - PLOT.width).abs() < 1e-9);
        assert!((rects[1].w - PLOT.width / 2.0).abs() < 1e-9);
        assert!(rects[0].y < rects[1].y);
    }

    #[test]
    fn line_points_sit_mid_band() {
        let axis = Axis::fit([10.0]);
        let pts = line_points(PLOT, axis, &[0.0, 10.0]);
        assert_eq!(pts[0], (PLOT.left + 150.0, PLOT.bottom()));
        assert_eq!(pts[1], (PLOT.left + 450.0, PLOT.top));
        assert_eq!(points_attr(&pts), "190.0,210.0 490.0,10.0");
    }
}
