use num_traits::Float;

/// `num` evenly spaced values over [start, stop], both ends included
pub fn linspace<F: Float>(start: F, stop: F, num: usize) -> Vec<F> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / F::from(num - 1).unwrap();
            let mut values = (0..num - 1)
                .map(|i| start + F::from(i).unwrap() * step)
                .collect::<Vec<_>>();
            // avoid accumulating rounding error on the last point
            values.push(stop);
            values
        }
    }
}

pub fn curve_color(index: usize) -> egui::Color32 {
    crate::constants::CURVE_COLORS[index % crate::constants::CURVE_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use more_asserts::assert_lt;

    use super::*;

    #[test]
    fn linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.5, 7.0, 1), vec![2.5]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn linspace_is_evenly_spaced() {
        let values = linspace(0.0_f64, 1.0, 500);
        assert_eq!(values.len(), 500);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[499], 1.0);
        let step = 1.0 / 499.0;
        for pair in values.windows(2) {
            assert_lt!(pair[0], pair[1]);
            assert_approx_eq!(pair[1] - pair[0], step, 1e-12);
        }
    }

    #[test]
    fn linspace_descending_f32() {
        let values = linspace(1.0_f32, -1.0, 5);
        assert_eq!(values.len(), 5);
        assert_approx_eq!(values[1], 0.5_f32);
        assert_approx_eq!(values[2], 0.0_f32);
        assert_eq!(values[4], -1.0);
    }

    #[test]
    fn curve_colors_cycle() {
        let num_colors = crate::constants::CURVE_COLORS.len();
        assert_eq!(curve_color(0), curve_color(num_colors));
        assert_ne!(curve_color(0), curve_color(1));
    }
}
