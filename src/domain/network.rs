// User-adjustable network parameters
use serde::{Serialize, Serializer};
use thiserror::Error;

/// The two carriers the prediction model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Jio,
    Airtel,
}

impl Operator {
    pub fn id(self) -> u8 {
        match self {
            Operator::Jio => 1,
            Operator::Airtel => 2,
        }
    }

    /// Maps an arbitrary numeric id onto a valid operator.
    pub fn from_id(id: i64) -> Self {
        if id >= 2 {
            Operator::Airtel
        } else {
            Operator::Jio
        }
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("unknown parameter: {0}")]
    Unknown(String),
}

/// User-owned knobs feeding the prediction payload and metric derivation.
/// Values are clamped into their declared ranges on every change, so a
/// stored instance is always in range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParameters {
    pub bandwidth_mhz: i32,
    pub signal_strength_dbm: i32,
    pub user_count: i32,
    pub operator: Operator,
}

impl Default for NetworkParameters {
    fn default() -> Self {
        Self {
            bandwidth_mhz: 100,
            signal_strength_dbm: -70,
            user_count: 100,
            operator: Operator::Jio,
        }
    }
}

impl NetworkParameters {
    /// Applies a single named change, clamping the value into range.
    pub fn apply(&mut self, name: &str, value: f64) -> Result<(), ParameterError> {
        match name {
            "bandwidth" => self.bandwidth_mhz = (value.round() as i32).clamp(0, 1000),
            "signalStrength" => self.signal_strength_dbm = (value.round() as i32).clamp(-100, -30),
            "users" => self.user_count = (value.round() as i32).clamp(1, 1000),
            "operator" => self.operator = Operator::from_id(value.round() as i64),
            other => return Err(ParameterError::Unknown(other.to_string())),
        }
        Ok(())
    }
}
