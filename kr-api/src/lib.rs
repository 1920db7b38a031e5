#![cfg_attr(coverage, feature(coverage_attribute))]
pub mod v1beta1;
