use crate::error::relay::RelayError;

/// The kind of Discord id being validated, used to build the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Guild,
    Channel,
    Role,
}

impl IdKind {
    fn label(self) -> &'static str {
        match self {
            Self::Guild => "Guild",
            Self::Channel => "Channel",
            Self::Role => "Role",
        }
    }

    /// Mention prefix Discord wraps this kind of id in, if it has one.
    fn mention_prefix(self) -> Option<&'static str> {
        match self {
            Self::Guild => None,
            Self::Channel => Some("<#"),
            Self::Role => Some("<@&"),
        }
    }

    fn not_a_number(self) -> RelayError {
        RelayError::InvalidArgument(format!("{} ID must be a number.", self.label()))
    }

    fn zero(self) -> RelayError {
        RelayError::InvalidArgument(format!("{} ID must not be zero.", self.label()))
    }
}

/// Parses a Discord id from user input.
///
/// Accepts a bare snowflake or the Discord mention for the expected kind wrapping one:
/// `<#id>` for channels, `<@&id>` for roles. Guilds have no mention form. Only ASCII
/// digits are accepted, so signs and other mention kinds are rejected. Surrounding
/// whitespace is ignored.
///
/// # Arguments
/// - `value` - The raw argument text
/// - `kind` - Which id is expected, used for the error message
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero id
/// - `Err(RelayError::InvalidArgument)` - The value is not a number or is zero
pub fn parse_id(value: &str, kind: IdKind) -> Result<u64, RelayError> {
    let trimmed = value.trim();
    let digits = match kind.mention_prefix() {
        Some(prefix) => trimmed
            .strip_prefix(prefix)
            .and_then(|inner| inner.strip_suffix('>'))
            .unwrap_or(trimmed),
        None => trimmed,
    };

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(kind.not_a_number());
    }

    let id = digits.parse::<u64>().map_err(|_| kind.not_a_number())?;

    require_non_zero(id, kind)
}

fn require_non_zero(id: u64, kind: IdKind) -> Result<u64, RelayError> {
    if id == 0 {
        return Err(kind.zero());
    }

    Ok(id)
}

/// A value that can be validated into a Discord id.
///
/// Relay operations take their ids through this trait so that command arguments and
/// plain integers go through the same validation.
pub trait IdArgument {
    /// Validates the value as an id of the given kind.
    fn to_id(&self, kind: IdKind) -> Result<u64, RelayError>;
}

impl IdArgument for u64 {
    fn to_id(&self, kind: IdKind) -> Result<u64, RelayError> {
        require_non_zero(*self, kind)
    }
}

impl IdArgument for &str {
    fn to_id(&self, kind: IdKind) -> Result<u64, RelayError> {
        parse_id(self, kind)
    }
}
