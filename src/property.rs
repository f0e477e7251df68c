use serde::{Deserialize, Serialize};

/// Wire shape of one property: the CQL `tuple<text, text, text>` element
/// stored in the record's list column. Positions are fixed:
/// 0 = namespace, 1 = local name, 2 = value.
pub type PropertyTuple = (String, String, String);

/// An immutable namespaced key/value pair. All three fields are opaque
/// strings; no format is enforced, empty strings included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    namespace: String,
    local_name: String,
    value: String,
}

impl Property {
    pub fn new(
        namespace: impl Into<String>,
        local_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
            value: value.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<Property> for PropertyTuple {
    fn from(p: Property) -> Self {
        (p.namespace, p.local_name, p.value)
    }
}

impl From<PropertyTuple> for Property {
    fn from((namespace, local_name, value): PropertyTuple) -> Self {
        Self {
            namespace,
            local_name,
            value,
        }
    }
}
