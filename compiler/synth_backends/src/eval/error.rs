use thiserror::Error;

use super::Value;

/// Misuse of a derived method at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("`{method}` expects {expected} argument(s), got {found}")]
    WrongArity {
        method: String,
        expected: usize,
        found: usize,
    },

    #[error("no derived method `{method}` on {receiver}")]
    UnknownMethod { receiver: String, method: String },

    #[error("`copy` requires an argument for `{parameter}`")]
    MissingArgument { parameter: String },

    #[error("{receiver} has no field `{field}`")]
    MissingField { receiver: String, field: String },
}

pub type EvalResult = Result<Value, EvalError>;
