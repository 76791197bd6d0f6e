use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for parameter values that would produce meaningless kinetics
pub enum ParameterError {
    /// Parameter is `NaN` or infinite
    NonFinite { channel: String, attribute: String },
    /// Time constant must be greater than 0 since its reciprocal is used as a rate
    NonPositiveTimeConstant { channel: String, attribute: String, value: f32 },
    /// Maximal conductance cannot be negative
    NegativeConductance { channel: String, attribute: String, value: f32 },
    /// Slope of a sigmoid cannot be 0
    ZeroSlope { channel: String, attribute: String },
    /// Rise and decay time constants of a bi-exponential cannot be equal
    DegenerateBiExponential { channel: String },
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ParameterError::NonFinite { channel, attribute } => {
                write!(f, "{}.{} must be finite", channel, attribute)
            },
            ParameterError::NonPositiveTimeConstant { channel, attribute, value } => {
                write!(f, "{}.{} must be greater than 0, got {}", channel, attribute, value)
            },
            ParameterError::NegativeConductance { channel, attribute, value } => {
                write!(f, "{}.{} cannot be negative, got {}", channel, attribute, value)
            },
            ParameterError::ZeroSlope { channel, attribute } => {
                write!(f, "{}.{} cannot be 0", channel, attribute)
            },
            ParameterError::DegenerateBiExponential { channel } => {
                write!(f, "{} rise and decay time constants must differ", channel)
            },
        }
    }
}

impl Debug for ParameterError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for reading and modifying channel configurations
pub enum ChannelConfigError {
    /// Channel family name is not recognized
    UnknownChannel(String),
    /// Channel has no attribute with the given name
    UnknownAttribute { channel: String, attribute: String },
    /// Configuration could not be parsed or written
    Parse(String),
    /// Configuration holds an invalid parameter
    InvalidParameter(ParameterError),
}

impl Display for ChannelConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ChannelConfigError::UnknownChannel(channel) => write!(f, "Unknown channel: {}", channel),
            ChannelConfigError::UnknownAttribute { channel, attribute } => {
                write!(f, "Unknown attribute for {}: {}", channel, attribute)
            },
            ChannelConfigError::Parse(msg) => write!(f, "Could not parse configuration: {}", msg),
            ChannelConfigError::InvalidParameter(err) => write!(f, "Invalid parameter: {}", err),
        }
    }
}

impl Debug for ChannelConfigError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<ParameterError> for ChannelConfigError {
    fn from(err: ParameterError) -> ChannelConfigError {
        ChannelConfigError::InvalidParameter(err)
    }
}

impl From<toml::de::Error> for ChannelConfigError {
    fn from(err: toml::de::Error) -> ChannelConfigError {
        ChannelConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ChannelConfigError {
    fn from(err: toml::ser::Error) -> ChannelConfigError {
        ChannelConfigError::Parse(err.to_string())
    }
}

/// Error set for stepping many neurons at once
pub enum PopulationError {
    /// Every neuron state needs exactly one input
    LengthMismatch { states: usize, inputs: usize },
}

impl Display for PopulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PopulationError::LengthMismatch { states, inputs } => {
                write!(f, "Number of states ({}) does not match number of inputs ({})", states, inputs)
            },
        }
    }
}

impl Debug for PopulationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum ChannelKineticsError {
    /// Errors related to parameter values
    ParameterRelatedError(ParameterError),
    /// Errors related to configuration
    ConfigRelatedError(ChannelConfigError),
    /// Errors related to population stepping
    PopulationRelatedError(PopulationError),
}

impl Display for ChannelKineticsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ChannelKineticsError::ParameterRelatedError(err) => write!(f, "{}", err),
            ChannelKineticsError::ConfigRelatedError(err) => write!(f, "{}", err),
            ChannelKineticsError::PopulationRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for ChannelKineticsError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<ParameterError> for ChannelKineticsError {
    fn from(err: ParameterError) -> ChannelKineticsError {
        ChannelKineticsError::ParameterRelatedError(err)
    }
}

impl From<ChannelConfigError> for ChannelKineticsError {
    fn from(err: ChannelConfigError) -> ChannelKineticsError {
        ChannelKineticsError::ConfigRelatedError(err)
    }
}

impl From<PopulationError> for ChannelKineticsError {
    fn from(err: PopulationError) -> ChannelKineticsError {
        ChannelKineticsError::PopulationRelatedError(err)
    }
}
