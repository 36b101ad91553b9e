use crate::chart::{ChartState, PlottedCurve};
use crate::error::ValidationError;
use crate::form::PlotForm;
use crate::model;

/// Runs one plot request: validates the form, evaluates the model over the strain
/// grid and labels the result. Nothing is plotted if any field is invalid.
pub fn request_plot(form: &PlotForm) -> Result<PlottedCurve, ValidationError> {
    let parameters = form.parameters().inspect_err(|error| {
        tracing::warn!(%error, text = form.text(error.field), "plot aborted");
    })?;
    let label = form.curve_label();

    let strains = model::strain_grid();
    let stresses = model::stress_curve(&strains, &parameters);
    let curve = PlottedCurve::new(label, strains, stresses);

    if !curve.is_finite() {
        tracing::warn!(
            label,
            ?parameters,
            rate_factor = parameters.strain_rate_factor(),
            "curve contains non-finite stress values"
        );
    }
    tracing::info!(label, points = curve.stresses.len(), "plotted curve");
    Ok(curve)
}

/// `request_plot` followed by appending the curve to `chart`.
pub fn plot_into<'a>(
    form: &PlotForm,
    chart: &'a mut ChartState,
) -> Result<&'a PlottedCurve, ValidationError> {
    let curve = request_plot(form)?;
    Ok(chart.add_curve(curve))
}
