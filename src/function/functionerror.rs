use thiserror::Error;

/// Every failure reported by functions, tabulated functions, factories and codecs.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("point index {index} out of range for {count} points")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("point order violated: {0}")]
    OrderViolation(String),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    #[error("range [{left}, {right}] exceeds function domain [{domain_left}, {domain_right}]")]
    DomainViolation {
        left: f64,
        right: f64,
        domain_left: f64,
        domain_right: f64,
    },

    #[error("invalid argument: {0}")]
    ArgumentError(String),

    #[error("cannot construct tabulated function of type '{function_type}'")]
    ConstructionError {
        function_type: String,
        #[source]
        source: Option<Box<FunctionError>>,
    },

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

impl FunctionError {
    pub fn argument(message: impl Into<String>) -> FunctionError {
        FunctionError::ArgumentError(message.into())
    }

    pub fn order(message: impl Into<String>) -> FunctionError {
        FunctionError::OrderViolation(message.into())
    }

    pub fn invalid_data(message: impl Into<String>) -> FunctionError {
        FunctionError::IOError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            message.into(),
        ))
    }

    pub fn check_index(index: usize, count: usize) -> Result<()> {
        if index < count {
            Ok(())
        } else {
            Err(FunctionError::IndexOutOfRange { index, count })
        }
    }
}

pub type Result<T> = std::result::Result<T, FunctionError>;
