//! Evaluation errors.
//!
//! `EvalErrorKind` is the structured category; factory functions are the
//! public API and fill in both `kind` and `message`. None of these are
//! catchable by `try`/`catch` in Tern code: only a `throw` produces a
//! catchable signal, and one that escapes to the top level is reported as
//! [`EvalErrorKind::UncaughtException`].

use std::fmt;

use tern_ir::Span;

use crate::value::Value;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Lookup
    NameNotFound {
        name: String,
    },
    AttributeError {
        attr: String,
        type_name: String,
        reason: Option<&'static str>,
    },

    // Type
    TypeMismatch {
        expected: &'static str,
        got: String,
    },
    NotSupported {
        operation: &'static str,
        type_name: String,
    },
    IntegerOverflow {
        operation: &'static str,
    },
    DivisionByZero,
    IndexOutOfBounds {
        index: i64,
        len: usize,
    },
    KeyNotFound {
        key: String,
    },
    InvalidConversion {
        value: String,
        target: &'static str,
    },

    // Arity and binding
    MissingParameter {
        name: String,
        function: String,
    },
    TooManyArguments {
        function: String,
        expected: usize,
        got: usize,
    },
    UnknownNamedArgument {
        name: String,
        function: String,
    },
    DuplicateNamedArgument {
        name: String,
    },
    DuplicateParameter {
        name: String,
        function: String,
    },
    DuplicateBinding {
        name: String,
    },
    DuplicateClassAttribute {
        class: String,
        attr: String,
    },

    // Control flow
    ControlMisuse {
        keyword: &'static str,
    },
    UncaughtException {
        rendered: String,
    },
    /// A return/break/continue escaped its interception point.
    SignalLeak {
        signal: &'static str,
    },

    // Resources and environment
    RecursionLimit {
        limit: usize,
    },
    ModuleLoad {
        path: String,
        message: String,
    },
    NotImplemented {
        feature: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameNotFound { name } => write!(f, "name not found: {name}"),
            Self::AttributeError {
                attr,
                type_name,
                reason,
            } => match reason {
                Some(reason) => write!(f, "{type_name} attribute `{attr}` {reason}"),
                None => write!(f, "{type_name} has no attribute `{attr}`"),
            },

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NotSupported {
                operation,
                type_name,
            } => write!(f, "{type_name} does not support {operation}"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::KeyNotFound { key } => write!(f, "key not found: {key}"),
            Self::InvalidConversion { value, target } => {
                write!(f, "cannot convert {value} to {target}")
            }

            Self::MissingParameter { name, function } => {
                write!(f, "{function}: missing argument for parameter `{name}`")
            }
            Self::TooManyArguments {
                function,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{function} takes {expected} {arg_word}, got {got}")
            }
            Self::UnknownNamedArgument { name, function } => {
                write!(f, "{function} has no parameter named `{name}`")
            }
            Self::DuplicateNamedArgument { name } => {
                write!(f, "named argument `{name}` supplied more than once")
            }
            Self::DuplicateParameter { name, function } => {
                write!(f, "{function}: duplicate parameter `{name}`")
            }
            Self::DuplicateBinding { name } => {
                write!(f, "`{name}` is already declared in this scope")
            }
            Self::DuplicateClassAttribute { class, attr } => {
                write!(f, "class {class} declares `{attr}` more than once")
            }

            Self::ControlMisuse { keyword } => {
                let context = if *keyword == "return" {
                    "function"
                } else {
                    "loop"
                };
                write!(f, "`{keyword}` outside of a {context}")
            }
            Self::UncaughtException { rendered } => {
                write!(f, "uncaught exception: {rendered}")
            }
            Self::SignalLeak { signal } => {
                write!(f, "internal error: `{signal}` escaped its handler")
            }

            Self::RecursionLimit { limit } => {
                write!(f, "maximum call depth exceeded (limit: {limit})")
            }
            Self::ModuleLoad { path, message } => {
                write!(f, "cannot load module {path}: {message}")
            }
            Self::NotImplemented { feature } => write!(f, "not implemented: {feature}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Innermost source location, filled in as the error unwinds.
    pub span: Option<Span>,
    /// The thrown value, for [`EvalErrorKind::UncaughtException`].
    pub exception: Option<Value>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
            exception: None,
        }
    }

    /// Attach a span unless a more precise one is already recorded.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// True for a thrown value that nothing caught.
    pub fn is_uncaught_exception(&self) -> bool {
        matches!(self.kind, EvalErrorKind::UncaughtException { .. })
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn name_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NameNotFound {
        name: name.to_owned(),
    })
}

#[cold]
pub fn attribute_error(attr: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AttributeError {
        attr: attr.to_owned(),
        type_name: type_name.to_owned(),
        reason: None,
    })
}

/// The attribute exists but cannot be used this way.
#[cold]
pub fn attribute_misuse(attr: &str, type_name: &str, reason: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AttributeError {
        attr: attr.to_owned(),
        type_name: type_name.to_owned(),
        reason: Some(reason),
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected,
        got: got.to_owned(),
    })
}

#[cold]
pub fn not_supported(operation: &'static str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotSupported {
        operation,
        type_name: type_name.to_owned(),
    })
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { operation })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn key_not_found(key: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::KeyNotFound {
        key: key.to_owned(),
    })
}

#[cold]
pub fn invalid_conversion(value: &str, target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidConversion {
        value: value.to_owned(),
        target,
    })
}

#[cold]
pub fn missing_parameter(name: &str, function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingParameter {
        name: name.to_owned(),
        function: function.to_owned(),
    })
}

#[cold]
pub fn too_many_arguments(function: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TooManyArguments {
        function: function.to_owned(),
        expected,
        got,
    })
}

#[cold]
pub fn unknown_named_argument(name: &str, function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownNamedArgument {
        name: name.to_owned(),
        function: function.to_owned(),
    })
}

#[cold]
pub fn duplicate_named_argument(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateNamedArgument {
        name: name.to_owned(),
    })
}

#[cold]
pub fn duplicate_parameter(name: &str, function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateParameter {
        name: name.to_owned(),
        function: function.to_owned(),
    })
}

#[cold]
pub fn duplicate_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateBinding {
        name: name.to_owned(),
    })
}

#[cold]
pub fn duplicate_class_attribute(class: &str, attr: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateClassAttribute {
        class: class.to_owned(),
        attr: attr.to_owned(),
    })
}

#[cold]
pub fn control_misuse(keyword: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ControlMisuse { keyword })
}

/// A thrown value reached the top level.
#[cold]
pub fn uncaught_exception(value: Value, rendered: String) -> EvalError {
    let mut error = EvalError::from_kind(EvalErrorKind::UncaughtException { rendered });
    error.exception = Some(value);
    error
}

#[cold]
pub fn signal_leak(signal: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::SignalLeak { signal })
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

#[cold]
pub fn module_load(path: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuleLoad {
        path: path.to_owned(),
        message: message.into(),
    })
}

#[cold]
pub fn not_implemented(feature: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotImplemented {
        feature: feature.to_owned(),
    })
}

#[cfg(test)]
mod tests;
