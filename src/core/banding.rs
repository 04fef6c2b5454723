use thiserror::Error;

/// Qualitative band a temperature falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Cold,
    Moderate,
    Hot,
}

impl TemperatureBand {
    pub fn word(self) -> &'static str {
        match self {
            TemperatureBand::Cold => "cold",
            TemperatureBand::Moderate => "moderate",
            TemperatureBand::Hot => "hot",
        }
    }

    /// Word used once an earlier period has already been described.
    pub fn comparative(self) -> &'static str {
        match self {
            TemperatureBand::Cold => "colder",
            TemperatureBand::Moderate => "moderate",
            TemperatureBand::Hot => "hotter",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("band thresholds out of order: moderate_from={moderate_from} must be below hot_from={hot_from}")]
pub struct ThresholdOrderError {
    pub moderate_from: i32,
    pub hot_from: i32,
}

/// Lower bounds (inclusive) of the moderate and hot bands. Anything below
/// `moderate_from` is cold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandThresholds {
    pub moderate_from: i32,
    pub hot_from: i32,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            moderate_from: 50,
            hot_from: 75,
        }
    }
}

impl BandThresholds {
    pub fn new(moderate_from: i32, hot_from: i32) -> Result<Self, ThresholdOrderError> {
        let thresholds = Self {
            moderate_from,
            hot_from,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), ThresholdOrderError> {
        if self.moderate_from >= self.hot_from {
            return Err(ThresholdOrderError {
                moderate_from: self.moderate_from,
                hot_from: self.hot_from,
            });
        }
        Ok(())
    }

    pub fn band(&self, temperature: i32) -> TemperatureBand {
        if temperature < self.moderate_from {
            TemperatureBand::Cold
        } else if temperature < self.hot_from {
            TemperatureBand::Moderate
        } else {
            TemperatureBand::Hot
        }
    }

    /// `"expecting cold temperature"` for the lead period,
    /// `"expecting colder temperatures"` for every later one.
    pub fn phrase(&self, temperature: i32, use_suffix: bool) -> String {
        let band = self.band(temperature);
        if use_suffix {
            format!("expecting {} temperatures", band.comparative())
        } else {
            format!("expecting {} temperature", band.word())
        }
    }
}
