//! Button ladder configuration types and builder

pub use crate::error::{ConfigError, MAX_LEVELS, RESERVED_PIN};

use arrayvec::ArrayVec;

/// Identifier of an analog input line
///
/// Valid identifiers are 0-254; [`RESERVED_PIN`] marks "no pin assigned" on
/// the wire and is rejected here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalogPin(u8);

impl AnalogPin {
    /// Create a pin identifier with validation
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReservedPin` for [`RESERVED_PIN`].
    pub fn new(pin: u8) -> Result<Self, ConfigError> {
        if pin == RESERVED_PIN {
            return Err(ConfigError::ReservedPin { pin });
        }
        Ok(AnalogPin(pin))
    }

    /// Raw pin number
    pub fn get(self) -> u8 {
        self.0
    }
}

impl core::fmt::Display for AnalogPin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Expected readings for the buttons wired to one analog pin
///
/// Several buttons share the pin through a resistor ladder; each pulls it to
/// a distinct level, so a raw converter reading identifies the pressed
/// button by comparison against this table. The table only holds the data.
/// Matching live readings against it, and debouncing them, belongs to the
/// firmware's input loop.
///
/// Values are immutable once constructed. The default instance is the
/// unconfigured placeholder: no pin, empty table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonSensorConfig {
    pin: Option<AnalogPin>,
    levels: ArrayVec<u16, MAX_LEVELS>,
}

impl ButtonSensorConfig {
    /// Create a configuration for `pin` from a table of expected readings
    ///
    /// The readings are copied in caller order. Order is significant to the
    /// consumer; it is not validated beyond a `warn` when the table is
    /// neither ascending nor descending.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CapacityExceeded` if `levels` holds more than
    /// [`MAX_LEVELS`] entries. Nothing is copied in that case.
    pub fn new(pin: AnalogPin, levels: &[u16]) -> Result<Self, ConfigError> {
        let mut table = ArrayVec::new();
        table
            .try_extend_from_slice(levels)
            .map_err(|_| ConfigError::CapacityExceeded {
                capacity: MAX_LEVELS,
                requested: levels.len(),
            })?;

        if !is_monotonic(levels) {
            log::warn!("level table for pin {pin} is not monotonic");
        }

        Ok(ButtonSensorConfig {
            pin: Some(pin),
            levels: table,
        })
    }

    /// The configured pin, `None` for an unconfigured instance
    pub fn pin(&self) -> Option<AnalogPin> {
        self.pin
    }

    /// Pin number as it appears on the wire, [`RESERVED_PIN`] when unconfigured
    pub fn raw_pin(&self) -> u8 {
        self.pin.map_or(RESERVED_PIN, AnalogPin::get)
    }

    /// Expected readings in the order they were supplied
    pub fn levels(&self) -> &[u16] {
        &self.levels
    }

    /// Number of valid entries in the table
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Whether a pin has been assigned
    pub fn is_configured(&self) -> bool {
        self.pin.is_some()
    }
}

/// Strictly ascending or strictly descending throughout
fn is_monotonic(levels: &[u16]) -> bool {
    levels.windows(2).all(|w| w[0] < w[1]) || levels.windows(2).all(|w| w[0] > w[1])
}

/// Builder for constructing a button sensor configuration
///
/// # Example
///
/// ```
/// use flydash_panel::Builder;
///
/// let config = Builder::new()
///     .pin(3)
///     .levels(&[100, 300, 600])
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.raw_pin(), 3);
/// assert_eq!(config.levels(), &[100, 300, 600]);
/// ```
#[derive(Default)]
pub struct Builder<'a> {
    pin: Option<u8>,
    levels: &'a [u16],
}

impl<'a> Builder<'a> {
    /// Create a new builder with no pin and an empty level table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the analog pin (required)
    pub fn pin(mut self, pin: u8) -> Self {
        self.pin = Some(pin);
        self
    }

    /// Set the expected reading table
    pub fn levels(mut self, levels: &'a [u16]) -> Self {
        self.levels = levels;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingPin` if no pin was set, and propagates
    /// validation from [`AnalogPin::new`] and [`ButtonSensorConfig::new`].
    pub fn build(self) -> Result<ButtonSensorConfig, ConfigError> {
        let pin = AnalogPin::new(self.pin.ok_or(ConfigError::MissingPin)?)?;
        ButtonSensorConfig::new(pin, self.levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_copies_levels_in_order() {
        let pin = AnalogPin::new(3).unwrap();
        let config = ButtonSensorConfig::new(pin, &[100, 300, 600]).unwrap();
        assert_eq!(config.raw_pin(), 3);
        assert_eq!(config.level_count(), 3);
        assert_eq!(config.levels(), &[100, 300, 600]);
    }

    #[test]
    fn default_is_unconfigured() {
        let config = ButtonSensorConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.pin(), None);
        assert_eq!(config.raw_pin(), RESERVED_PIN);
        assert_eq!(config.level_count(), 0);
        assert!(config.levels().is_empty());
    }

    #[test]
    fn empty_level_table_is_valid() {
        let config = Builder::new().pin(7).build().unwrap();
        assert!(config.is_configured());
        assert_eq!(config.raw_pin(), 7);
        assert_eq!(config.level_count(), 0);
    }

    #[test]
    fn full_capacity_table_fits() {
        let levels: [u16; MAX_LEVELS] = core::array::from_fn(|i| (i as u16 + 1) * 100);
        let config = Builder::new().pin(1).levels(&levels).build().unwrap();
        assert_eq!(config.level_count(), MAX_LEVELS);
        assert_eq!(config.levels(), &levels);
    }

    #[test]
    fn rejects_oversized_level_table() {
        let levels = [0u16; MAX_LEVELS + 1];
        let result = Builder::new().pin(0).levels(&levels).build();
        assert!(matches!(
            result,
            Err(ConfigError::CapacityExceeded {
                capacity: MAX_LEVELS,
                requested,
            }) if requested == MAX_LEVELS + 1
        ));
    }

    #[test]
    fn rejects_reserved_pin() {
        assert!(matches!(
            AnalogPin::new(RESERVED_PIN),
            Err(ConfigError::ReservedPin { pin: RESERVED_PIN })
        ));
        assert!(matches!(
            Builder::new().pin(RESERVED_PIN).build(),
            Err(ConfigError::ReservedPin { .. })
        ));
    }

    #[test]
    fn builder_requires_pin() {
        let result = Builder::new().levels(&[10, 20]).build();
        assert!(matches!(result, Err(ConfigError::MissingPin)));
    }

    #[test]
    fn monotonic_accepts_both_directions() {
        assert!(is_monotonic(&[100, 300, 600]));
        assert!(is_monotonic(&[3800, 3100, 2090, 750]));
        assert!(is_monotonic(&[]));
        assert!(is_monotonic(&[42]));
        assert!(!is_monotonic(&[100, 600, 300]));
        assert!(!is_monotonic(&[100, 100, 300]));
    }
}
