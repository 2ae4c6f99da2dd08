//! Exact-match filtering for course list queries.
//!
//! Filters come in as query parameters and become an ordered list of named
//! predicates, all of which must hold (logical AND). Unknown parameters are
//! ignored; a filter value that cannot be parsed for its column is rejected.

use crate::error::AppError;
use std::collections::HashMap;

/// One narrowing condition on the course set.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    IdEq(i64),
    NameEq(String),
}

impl Predicate {
    /// Column the predicate compares against.
    pub fn column(&self) -> &'static str {
        match self {
            Predicate::IdEq(_) => "id",
            Predicate::NameEq(_) => "name",
        }
    }
}

/// Parsed list filters. At most one `id` and one `name` condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl CourseFilter {
    /// Build a filter from raw query parameters. `id` must be an integer;
    /// `name` is taken verbatim (exact, case-sensitive match).
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let mut filter = CourseFilter::default();
        for (k, v) in params {
            match k.as_str() {
                "id" => {
                    let id: i64 = v
                        .parse()
                        .map_err(|_| AppError::BadRequest(format!("invalid id filter: '{}'", v)))?;
                    filter.id = Some(id);
                }
                "name" => {
                    filter.name = Some(v.clone());
                }
                _ => {}
            }
        }
        Ok(filter)
    }

    /// Predicates in evaluation order, combined with AND by the store.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut preds = Vec::new();
        if let Some(id) = self.id {
            preds.push(Predicate::IdEq(id));
        }
        if let Some(name) = &self.name {
            preds.push(Predicate::NameEq(name.clone()));
        }
        preds
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_params_give_empty_filter() {
        let f = CourseFilter::from_params(&params(&[])).unwrap();
        assert!(f.is_empty());
        assert!(f.predicates().is_empty());
    }

    #[test]
    fn id_and_name_compose_in_order() {
        let f = CourseFilter::from_params(&params(&[("id", "7"), ("name", "Rust")])).unwrap();
        assert_eq!(
            f.predicates(),
            vec![Predicate::IdEq(7), Predicate::NameEq("Rust".into())]
        );
    }

    #[test]
    fn unknown_params_are_ignored() {
        let f = CourseFilter::from_params(&params(&[("page", "2"), ("name", "x")])).unwrap();
        assert_eq!(f.id, None);
        assert_eq!(f.name.as_deref(), Some("x"));
    }

    #[test]
    fn non_integer_id_is_rejected() {
        let err = CourseFilter::from_params(&params(&[("id", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
