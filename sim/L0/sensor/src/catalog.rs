//! Sensor catalog: the host-facing registry of available sensor types.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    Imu, ImuConfig, SensorDefinition, SensorDescription, SensorError, SensorId, SensorType,
};

/// Registry of sensor definitions, keyed and listed by id.
///
/// # Example
///
/// ```
/// use sim_sensor::{SensorCatalog, SensorDescription, SensorId};
///
/// let catalog = SensorCatalog::with_builtin();
/// assert!(catalog.contains("sensor.other.imu"));
///
/// let desc = SensorDescription::new("sensor.other.imu").with_attribute("role_name", "imu");
/// let imu = catalog.spawn_imu(&desc, SensorId::new(3)).unwrap();
/// assert_eq!(imu.name(), Some("imu"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SensorCatalog {
    definitions: BTreeMap<String, SensorDefinition>,
}

impl SensorCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with every sensor this crate provides.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut definitions = BTreeMap::new();
        let imu = Imu::definition();
        definitions.insert(imu.id(), imu);
        Self { definitions }
    }

    /// Register a definition.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError::DuplicateDefinition`] if the id is taken.
    pub fn register(&mut self, definition: SensorDefinition) -> crate::Result<()> {
        let id = definition.id();
        if self.definitions.contains_key(&id) {
            return Err(SensorError::duplicate(id));
        }
        debug!("Registered sensor definition {}", id);
        self.definitions.insert(id, definition);
        Ok(())
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SensorDefinition> {
        self.definitions.get(id)
    }

    /// Whether a definition with this id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Iterate over definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &SensorDefinition> {
        self.definitions.values()
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Spawn an IMU with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`spawn_imu_with`](Self::spawn_imu_with).
    pub fn spawn_imu(&self, description: &SensorDescription, id: SensorId) -> crate::Result<Imu> {
        self.spawn_imu_with(description, id, ImuConfig::default())
    }

    /// Spawn an IMU from a description and an explicit configuration.
    ///
    /// The description's `role_name` becomes the sensor name, then the
    /// description is passed to [`Imu::configure`].
    ///
    /// # Errors
    ///
    /// - [`SensorError::UnknownSensor`] if the description id is not registered
    /// - [`SensorError::TypeMismatch`] if it names a non-IMU definition
    /// - [`SensorError::InvalidConfig`] if `config` fails validation
    pub fn spawn_imu_with(
        &self,
        description: &SensorDescription,
        id: SensorId,
        config: ImuConfig,
    ) -> crate::Result<Imu> {
        let definition = self
            .get(&description.id)
            .ok_or_else(|| SensorError::unknown(&description.id))?;

        if SensorType::from_tag(&definition.type_tag) != Some(SensorType::Imu) {
            return Err(SensorError::type_mismatch(
                SensorType::Imu.tag(),
                &definition.type_tag,
            ));
        }
        config.validate()?;

        let mut imu = Imu::new(config).with_id(id);
        if let Some(role) = description.role_name() {
            imu = imu.with_name(role);
        }
        imu.configure(description);

        debug!("Spawned {} as {}", description.id, id);
        Ok(imu)
    }
}
