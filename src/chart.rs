/// A labeled stress-strain curve as added to the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedCurve {
    pub label: String,
    pub strains: Vec<f64>,
    pub stresses: Vec<f64>,
}

impl PlottedCurve {
    pub fn new(label: impl Into<String>, strains: Vec<f64>, stresses: Vec<f64>) -> Self {
        debug_assert_eq!(strains.len(), stresses.len());
        Self {
            label: label.into(),
            strains,
            stresses,
        }
    }

    /// `[strain, stress]` pairs with non-finite stresses left out, so that a degenerate
    /// point does not break the plot bounds.
    pub fn finite_points(&self) -> Vec<[f64; 2]> {
        self.strains
            .iter()
            .zip(&self.stresses)
            .filter(|(_, stress)| stress.is_finite())
            .map(|(strain, stress)| [*strain, *stress])
            .collect()
    }

    pub fn is_finite(&self) -> bool {
        self.stresses.iter().all(|stress| stress.is_finite())
    }
}

/// All curves plotted since startup, in plotting order. Curves are only ever appended.
#[derive(Debug, Default, Clone)]
pub struct ChartState {
    curves: Vec<PlottedCurve>,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_curve(&mut self, curve: PlottedCurve) -> &PlottedCurve {
        self.curves.push(curve);
        &self.curves[self.curves.len() - 1]
    }

    pub fn curves(&self) -> &[PlottedCurve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{self, MaterialParameters};

    use super::*;

    #[test]
    fn points_pair_up_strain_and_stress() {
        let curve = PlottedCurve::new("test", vec![0.0, 0.5, 1.0], vec![10.0, 20.0, 30.0]);
        assert_eq!(
            curve.finite_points(),
            vec![[0.0, 10.0], [0.5, 20.0], [1.0, 30.0]]
        );
        assert!(curve.is_finite());
    }

    #[test]
    fn non_finite_stresses_are_left_out_of_points() {
        let curve = PlottedCurve::new(
            "bad",
            vec![0.0, 0.5, 1.0],
            vec![f64::INFINITY, 20.0, f64::NAN],
        );
        assert!(!curve.is_finite());
        assert_eq!(curve.finite_points(), vec![[0.5, 20.0]]);
        assert_eq!(curve.stresses.len(), 3);
    }

    #[test]
    fn negative_exponent_curve_drops_only_zero_strain() {
        let strains = model::strain_grid();
        let parameters = MaterialParameters {
            a: 792.0,
            b: 510.0,
            c: 0.014,
            n: -0.5,
            strain_rate: 1.0,
            reference_strain_rate: 1.0,
        };
        let stresses = model::stress_curve(&strains, &parameters);
        let curve = PlottedCurve::new("n < 0", strains, stresses);
        let points = curve.finite_points();
        assert_eq!(points.len(), 499);
        assert_ne!(points[0][0], 0.0);
    }

    #[test]
    fn infinite_curve_has_no_points() {
        let strains = model::strain_grid();
        let parameters = MaterialParameters {
            a: 792.0,
            b: 510.0,
            c: 0.014,
            n: 0.26,
            strain_rate: 2.0,
            reference_strain_rate: 0.0,
        };
        let stresses = model::stress_curve(&strains, &parameters);
        let curve = PlottedCurve::new("eps_dot_0 = 0", strains, stresses);
        assert!(curve.finite_points().is_empty());
        assert_eq!(curve.stresses.len(), 500);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn mismatched_lengths_panic() {
        PlottedCurve::new("bad", vec![0.0, 1.0], vec![1.0]);
    }

    #[test]
    fn chart_keeps_curves_in_order() {
        let mut chart = ChartState::new();
        assert!(chart.is_empty());
        chart.add_curve(PlottedCurve::new("first", vec![0.0], vec![1.0]));
        let added = chart.add_curve(PlottedCurve::new("first", vec![0.0], vec![2.0]));
        assert_eq!(added.stresses, vec![2.0]);
        assert_eq!(chart.len(), 2);
        // labels need not be unique
        assert_eq!(chart.curves()[0].label, chart.curves()[1].label);
        assert_eq!(chart.curves()[0].stresses, vec![1.0]);
    }
}
