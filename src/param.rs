use serde::Serialize;

use crate::feature::Feature;

/// Tagged default value carried by a parameter declaration.
///
/// Values keep the type they were declared with; there is no implicit
/// coercion between variants.
#[derive(Clone, Copy, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Double(f64),
    Bool(bool),
}

/// The types a feature parameter may be declared with.
pub trait ParamType: Copy {
    fn into_value(self) -> ParamValue;
    fn from_value(value: ParamValue) -> Option<Self>;
}

impl ParamType for i64 {
    fn into_value(self) -> ParamValue {
        ParamValue::Int(self)
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl ParamType for f64 {
    fn into_value(self) -> ParamValue {
        ParamValue::Double(self)
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl ParamType for bool {
    fn into_value(self) -> ParamValue {
        ParamValue::Bool(self)
    }

    fn from_value(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

/// A typed tunable scoped to a single owning flag.
///
/// The default is what callers get when no override is present. It is only
/// meaningful while the owning flag is enabled; checking the flag first is
/// the caller's contract, not enforced here.
pub struct FeatureParam<T: ParamType> {
    feature: &'static Feature,
    name: &'static str,
    default: T,
}

impl<T: ParamType> FeatureParam<T> {
    pub const fn new(feature: &'static Feature, name: &'static str, default: T) -> Self {
        Self {
            feature,
            name,
            default,
        }
    }

    pub fn feature(&self) -> &'static Feature {
        self.feature
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn default_value(&self) -> T {
        self.default
    }

    pub(crate) fn entry(&self) -> ParamEntry {
        ParamEntry {
            feature: self.feature,
            name: self.name,
            default: self.default.into_value(),
        }
    }
}

/// Type-erased view of a parameter declaration, used to index the table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParamEntry {
    pub(crate) feature: &'static Feature,
    pub(crate) name: &'static str,
    pub(crate) default: ParamValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    static OWNER: Feature = Feature::disabled("OwningFlag");
    static TIMEOUT: FeatureParam<i64> = FeatureParam::new(&OWNER, "TimeoutSeconds", 30);

    #[test]
    fn default_is_returned_even_when_owner_is_disabled() {
        assert!(!TIMEOUT.feature().default_state().is_enabled());
        assert_eq!(TIMEOUT.default_value(), 30);
    }

    #[test]
    fn entry_erases_to_the_declared_type() {
        let entry = TIMEOUT.entry();
        assert_eq!(entry.name, "TimeoutSeconds");
        assert_eq!(entry.default, ParamValue::Int(30));
    }

    #[test]
    fn from_value_does_not_coerce() {
        assert_eq!(i64::from_value(ParamValue::Int(7)), Some(7));
        assert_eq!(i64::from_value(ParamValue::Double(7.0)), None);
        assert_eq!(i64::from_value(ParamValue::Bool(true)), None);
        assert_eq!(f64::from_value(ParamValue::Int(7)), None);
        assert_eq!(bool::from_value(ParamValue::Bool(false)), Some(false));
    }

    #[test]
    fn values_serialize_untagged() {
        assert_eq!(
            serde_json::to_value(ParamValue::Double(0.5)).unwrap(),
            serde_json::json!(0.5)
        );
        assert_eq!(
            serde_json::to_value(ParamValue::Bool(true)).unwrap(),
            serde_json::json!(true)
        );
    }
}
