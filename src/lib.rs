pub mod declarations;
mod exposed;
mod feature;
mod param;
mod registry;

pub use exposed::{EXPOSED_FEATURES, exposed_feature};
pub use feature::{Feature, FeatureState};
pub use param::{FeatureParam, ParamType, ParamValue};
pub use registry::{FeatureMap, LookupError, feature_map};

#[cfg(test)]
mod test;
