mod instances;
mod operators;

pub use instances::*;
pub use operators::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// KUDO cross-references carry only a name; the referent always lives in the
// same namespace as the referencing object.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct ObjectRef {
    pub name: String,
}

impl ObjectRef {
    pub fn new(name: &str) -> ObjectRef {
        ObjectRef { name: name.into() }
    }
}
