use core::fmt;

/// Reasons a flock refuses to be constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The flock must hold at least one starling.
    EmptyPopulation,
    /// A world extent is zero, negative or not finite.
    InvalidBound { axis: usize, value: f32 },
    /// The speed limit is zero, negative or not finite.
    InvalidSpeedLimit(f32),
    /// A parameter that must be a finite value is not.
    NonFinite(&'static str),
    /// A parameter that must not be negative is.
    Negative(&'static str, f32),
    /// A neighbour radius is zero or negative.
    NonPositiveRadius(&'static str, f32),
    /// The separation radius is larger than the visual field.
    SeparationExceedsVisualField { separation: f32, visual_field: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPopulation => write!(f, "population must be at least 1"),
            ConfigError::InvalidBound { axis, value } => {
                write!(f, "bound on axis {} must be finite and positive, got {}", axis, value)
            }
            ConfigError::InvalidSpeedLimit(value) => {
                write!(f, "speed limit must be finite and positive, got {}", value)
            }
            ConfigError::NonFinite(name) => write!(f, "{} must be finite", name),
            ConfigError::Negative(name, value) => {
                write!(f, "{} must not be negative, got {}", name, value)
            }
            ConfigError::NonPositiveRadius(name, value) => {
                write!(f, "{} must be positive, got {}", name, value)
            }
            ConfigError::SeparationExceedsVisualField {
                separation,
                visual_field,
            } => write!(
                f,
                "separation distance {} exceeds visual field {}",
                separation, visual_field
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
