//! # Input reader
//!
//! The calculators read their parameters from named form fields (`n`, `p`,
//! `k`, `lambda`, `x`, `mu`, `sigma`, `N`, `K`, `upper` and `mode`). Here
//! the form is a [FormFields] map of raw strings, usually built from
//! `name=value` tokens. Names are case sensitive: `N` and `n` are different
//! fields.
//!
//! Reading only checks that a value is present and is a number. Range checks
//! are done later by each calculator.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::{calculator::QueryMode, errors::CalcError};

/// The raw values of a form, by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: BTreeMap<String, String>,
}

/// The value of the `mode` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelector {
    /// `P(X = k)`
    Exact,
    /// `P(X <= k)`
    AtMost,
    /// `P(X >= k)`
    AtLeast,
    /// `P(k <= X <= upper)`, needs the `upper` field.
    Between,
}

impl FormFields {
    #[must_use]
    pub fn new() -> FormFields {
        return FormFields::default();
    }

    /// Parses tokens of the form `name=value`.
    ///
    /// Later tokens overwrite earlier ones with the same name. A token without
    /// `=` or with an empty name is an error.
    pub fn parse_assignments<I, S>(tokens: I) -> Result<FormFields, CalcError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fields: FormFields = FormFields::new();
        for token in tokens {
            let token: &str = token.as_ref();
            match token.split_once('=') {
                Some((name, value)) if !name.trim().is_empty() => {
                    fields.insert(name.trim(), value.trim());
                }
                _ => {
                    return Err(CalcError::invalid(format!(
                        "Expected a field of the form `name=value`, got `{token}`"
                    )));
                }
            }
        }
        return Ok(fields);
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder style [FormFields::insert].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> FormFields {
        self.insert(name, value);
        return self;
    }

    /// The trimmed raw value of `name`. Blank values count as missing.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        return self
            .values
            .get(name)
            .map(|value: &String| value.trim())
            .filter(|value: &&str| !value.is_empty());
    }

    /// Reads an integer field.
    ///
    /// Fractional values such as `2.5` are rejected, not truncated.
    pub fn integer(&self, name: &str) -> Result<i64, CalcError> {
        let raw: &str = self.required(name)?;
        return raw.parse::<i64>().map_err(|_| {
            CalcError::invalid(format!("The field `{name}` must be an integer, got `{raw}`"))
        });
    }

    /// Reads a real field. Infinities and NaNs are rejected.
    pub fn real(&self, name: &str) -> Result<f64, CalcError> {
        let raw: &str = self.required(name)?;
        return match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(CalcError::invalid(format!(
                "The field `{name}` must be a real number, got `{raw}`"
            ))),
        };
    }

    /// Reads the `mode` field, or returns `default` if it is missing.
    pub fn mode(&self, default: ModeSelector) -> Result<ModeSelector, CalcError> {
        return match self.get("mode") {
            Some(raw) => raw.parse::<ModeSelector>(),
            None => Ok(default),
        };
    }

    fn required(&self, name: &str) -> Result<&str, CalcError> {
        return self
            .get(name)
            .ok_or_else(|| CalcError::invalid(format!("Please enter a value for `{name}`")));
    }
}

impl FromStr for ModeSelector {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(ModeSelector::Exact),
            "at-most" | "atmost" | "less" => Ok(ModeSelector::AtMost),
            "at-least" | "atleast" | "greater" => Ok(ModeSelector::AtLeast),
            "between" => Ok(ModeSelector::Between),
            other => Err(CalcError::invalid(format!(
                "Unknown mode `{other}`, expected exact, at-most, at-least or between"
            ))),
        }
    }
}

impl ModeSelector {
    /// Turns the selector into a [QueryMode], reading the upper bound with
    /// `upper` only for [ModeSelector::Between].
    pub fn into_query<T>(
        self,
        upper: impl FnOnce() -> Result<T, CalcError>,
    ) -> Result<QueryMode<T>, CalcError> {
        return Ok(match self {
            ModeSelector::Exact => QueryMode::Exact,
            ModeSelector::AtMost => QueryMode::AtMost,
            ModeSelector::AtLeast => QueryMode::AtLeast,
            ModeSelector::Between => QueryMode::Between(upper()?),
        });
    }
}
