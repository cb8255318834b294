use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// Failures of the integer tools.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("{operation}({a}, {b}) does not fit in a 64-bit signed integer")]
    Overflow {
        operation: &'static str,
        a: i64,
        b: i64,
    },
}

/// MCP error category used when converting a descriptor into `ErrorData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    ResourceNotFound,
}

/// Structured error metadata returned by MCP tools and resources.
#[derive(Debug, Clone)]
pub struct ToolErrorDescriptor {
    /// Error code.
    pub code: &'static str,
    /// User-facing message.
    pub message: &'static str,
    /// Recommended remediation.
    pub remediation: &'static str,
    pub kind: ErrorKind,
}

impl ToolErrorDescriptor {
    pub const fn new(
        code: &'static str,
        message: &'static str,
        remediation: &'static str,
        kind: ErrorKind,
    ) -> Self {
        Self {
            code,
            message,
            remediation,
            kind,
        }
    }

    /// Create a builder.
    pub fn builder(&self) -> ToolErrorDescriptorBuilder<'_> {
        ToolErrorDescriptorBuilder::new(self)
    }
}

/// Builder for error data that fails if required fields are missing.
pub struct ToolErrorDescriptorBuilder<'a> {
    descriptor: &'a ToolErrorDescriptor,
    retryable: Option<bool>,
    details: Option<Value>,
    extra_fields: Map<String, Value>,
}

impl<'a> ToolErrorDescriptorBuilder<'a> {
    pub fn new(descriptor: &'a ToolErrorDescriptor) -> Self {
        Self {
            descriptor,
            retryable: None,
            details: None,
            extra_fields: Map::new(),
        }
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    pub fn details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_context_field(mut self, key: &str, value: Value) -> Self {
        self.extra_fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Result<ErrorData, ToolErrorBuilderError> {
        if self.descriptor.remediation.trim().is_empty() {
            return Err(ToolErrorBuilderError::MissingRemediation {
                code: self.descriptor.code,
            });
        }
        let retryable = self
            .retryable
            .ok_or(ToolErrorBuilderError::MissingRetryable {
                code: self.descriptor.code,
            })?;

        let mut data = Map::new();
        data.insert("code".into(), Value::String(self.descriptor.code.into()));
        data.insert(
            "remediation".into(),
            Value::String(self.descriptor.remediation.into()),
        );
        data.insert("retryable".into(), Value::Bool(retryable));
        if let Some(details) = self.details {
            data.insert("details".into(), details);
        }
        for (key, value) in self.extra_fields {
            data.insert(key, value);
        }

        let data = Some(Value::Object(data));
        Ok(match self.descriptor.kind {
            ErrorKind::InvalidParams => ErrorData::invalid_params(self.descriptor.message, data),
            ErrorKind::ResourceNotFound => {
                ErrorData::resource_not_found(self.descriptor.message, data)
            }
        })
    }

    /// Build, falling back to a plain internal error if the descriptor is incomplete.
    pub fn build_or_internal(self) -> ErrorData {
        let code = self.descriptor.code;
        self.build().unwrap_or_else(|err| {
            tracing::error!(
                target: "hello_world_mcp::errors",
                code,
                error = %err,
                "Failed to build structured error data"
            );
            ErrorData::internal_error(err.to_string(), None)
        })
    }
}

/// Errors when required builder fields are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolErrorBuilderError {
    #[error("retryable is missing (code={code})")]
    MissingRetryable { code: &'static str },
    #[error("remediation is empty (code={code})")]
    MissingRemediation { code: &'static str },
}

/// Integer tool result does not fit in `i64`.
pub const ARITHMETIC_OVERFLOW_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "ARITHMETIC_OVERFLOW",
    "Result is outside the 64-bit signed integer range",
    "Pass smaller operands so the result stays within -9223372036854775808..=9223372036854775807.",
    ErrorKind::InvalidParams,
);

/// Requested URI matches neither the static resources nor a template.
pub const RESOURCE_NOT_FOUND_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "RESOURCE_NOT_FOUND",
    "No resource matches the requested URI",
    "Use `info://server` or `greeting://{name}` with a non-empty name.",
    ErrorKind::ResourceNotFound,
);
