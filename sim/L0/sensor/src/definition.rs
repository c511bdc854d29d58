//! Sensor definitions and descriptions.
//!
//! A [`SensorDefinition`] is the static catalog entry for a sensor type. A
//! [`SensorDescription`] is what the host hands a sensor at spawn time: the
//! definition id plus free-form attributes.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Prefix shared by every sensor definition id.
const ID_PREFIX: &str = "sensor";

/// Attribute naming the role of a spawned sensor.
pub const ROLE_NAME_ATTRIBUTE: &str = "role_name";

/// Static descriptor registered with the host sensor catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorDefinition {
    /// Sensor category, e.g. `"other"` or `"camera"`.
    pub category: String,
    /// Type tag within the category, e.g. `"imu"`.
    pub type_tag: String,
}

impl SensorDefinition {
    /// Create a definition for a generic sensor.
    #[must_use]
    pub fn generic(category: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Catalog id: `sensor.<category>.<type>`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{ID_PREFIX}.{}.{}", self.category, self.type_tag)
    }
}

impl std::fmt::Display for SensorDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

/// Opaque configuration handed to a sensor when it is spawned.
///
/// # Example
///
/// ```
/// use sim_sensor::SensorDescription;
///
/// let desc = SensorDescription::new("sensor.other.imu")
///     .with_attribute("role_name", "imu_front");
///
/// assert_eq!(desc.role_name(), Some("imu_front"));
/// assert_eq!(desc.attribute("sensor_tick"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorDescription {
    /// Definition id this description instantiates.
    pub id: String,
    /// Free-form attributes, keyed by name.
    pub attributes: BTreeMap<String, String>,
}

impl SensorDescription {
    /// Create a description with no attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add or replace an attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The `role_name` attribute, if set.
    #[must_use]
    pub fn role_name(&self) -> Option<&str> {
        self.attribute(ROLE_NAME_ATTRIBUTE)
    }

    /// Attribute names, in sorted order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }
}
