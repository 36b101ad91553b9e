use crate::constants;
use crate::error::ValidationError;
use crate::model::MaterialParameters;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, variant_count::VariantCount)]
pub enum Field {
    A,
    B,
    C,
    N,
    StrainRate,
    ReferenceStrainRate,
}

impl Field {
    /// Name used in validation messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::A => "A",
            Field::B => "B",
            Field::C => "C",
            Field::N => "n",
            Field::StrainRate => "Strain rate",
            Field::ReferenceStrainRate => "Reference strain rate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::A => "A (MPa)",
            Field::B => "B (MPa)",
            Field::C => "C",
            Field::N => "n",
            Field::StrainRate => "Strain rate (eps_dot)",
            Field::ReferenceStrainRate => "Reference strain rate (eps_dot_0)",
        }
    }

    /// In validation order
    pub const ALL: [Self; Self::VARIANT_COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::N,
        Self::StrainRate,
        Self::ReferenceStrainRate,
    ];
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the raw text of a numeric field. Only syntax is checked, so values like
/// "0", "-1" or "inf" pass even where they make the model degenerate.
pub fn parse_field(text: &str, field: Field) -> Result<f64, ValidationError> {
    strip_digit_separators(text.trim())
        .and_then(|digits| digits.parse::<f64>().ok())
        .ok_or(ValidationError::new(field))
}

/// Removes `_` separators, which are only allowed singly and between two digits
/// ("1_000"). Returns `None` for a misplaced separator.
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return Some(text.to_owned());
    }
    let chars = text.chars().collect::<Vec<_>>();
    let mut digits = String::with_capacity(chars.len());
    for (index, c) in chars.iter().enumerate() {
        if *c != '_' {
            digits.push(*c);
            continue;
        }
        let previous = index.checked_sub(1).and_then(|i| chars.get(i));
        let next = chars.get(index + 1);
        match (previous, next) {
            (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(digits)
}

/// Raw contents of the input fields, read at plot time.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotForm {
    pub a: String,
    pub b: String,
    pub c: String,
    pub n: String,
    pub strain_rate: String,
    pub reference_strain_rate: String,
    pub curve_name: String,
}

impl Default for PlotForm {
    fn default() -> Self {
        Self {
            a: constants::DEFAULT_A.to_owned(),
            b: constants::DEFAULT_B.to_owned(),
            c: constants::DEFAULT_C.to_owned(),
            n: constants::DEFAULT_N.to_owned(),
            strain_rate: constants::DEFAULT_STRAIN_RATE.to_owned(),
            reference_strain_rate: constants::DEFAULT_REFERENCE_STRAIN_RATE.to_owned(),
            curve_name: constants::DEFAULT_CURVE_NAME.to_owned(),
        }
    }
}

impl PlotForm {
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::A => &self.a,
            Field::B => &self.b,
            Field::C => &self.c,
            Field::N => &self.n,
            Field::StrainRate => &self.strain_rate,
            Field::ReferenceStrainRate => &self.reference_strain_rate,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::A => &mut self.a,
            Field::B => &mut self.b,
            Field::C => &mut self.c,
            Field::N => &mut self.n,
            Field::StrainRate => &mut self.strain_rate,
            Field::ReferenceStrainRate => &mut self.reference_strain_rate,
        }
    }

    pub fn value(&self, field: Field) -> Result<f64, ValidationError> {
        parse_field(self.text(field), field)
    }

    /// Validates the fields in `Field::ALL` order and stops at the first invalid one.
    pub fn parameters(&self) -> Result<MaterialParameters<f64>, ValidationError> {
        let parameters = MaterialParameters {
            a: self.value(Field::A)?,
            b: self.value(Field::B)?,
            c: self.value(Field::C)?,
            n: self.value(Field::N)?,
            strain_rate: self.value(Field::StrainRate)?,
            reference_strain_rate: self.value(Field::ReferenceStrainRate)?,
        };
        tracing::debug!(?parameters, "form validated");
        Ok(parameters)
    }

    /// Every invalid field, each checked on its own, in `Field::ALL` order.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        Field::ALL
            .iter()
            .filter_map(|field| self.value(*field).err())
            .collect()
    }

    pub fn curve_label(&self) -> &str {
        if self.curve_name.is_empty() {
            constants::DEFAULT_CURVE_LABEL
        } else {
            &self.curve_name
        }
    }
}
