//! Bridge configuration resolved from code or environment variables.

// =============================================================================
// Modes
// =============================================================================

/// How returned values are checked against the declared native contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionMode {
    /// Unbox to the declared native type; mismatches become
    /// INVALID_ARGUMENT.
    Strict,
    /// Pass returned values through unchecked, even when they do not
    /// match the declared contract.
    Dynamic,
}

/// Wording of the strict-mode cast failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastErrorStyle {
    /// Binder wording: names the source type and the native target type.
    Cast,
    /// Binding-level wording: `TypeError: expecting <type>`.
    TypeCheck,
}

// =============================================================================
// BridgeConfig
// =============================================================================

/// Complete bridge configuration, resolved once and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeConfig {
    pub mode: CoercionMode,
    pub cast_error_style: CastErrorStyle,
}

impl BridgeConfig {
    /// Strict unboxing with binder-style cast messages.
    pub fn strict() -> Self {
        Self {
            mode: CoercionMode::Strict,
            cast_error_style: CastErrorStyle::Cast,
        }
    }

    /// Dynamic pass-through.
    pub fn dynamic() -> Self {
        Self {
            mode: CoercionMode::Dynamic,
            cast_error_style: CastErrorStyle::Cast,
        }
    }

    /// Resolve configuration from `OPAL_BINDING_MODE` and
    /// `OPAL_CAST_ERROR_STYLE`; unset or unrecognized values keep the
    /// strict defaults.
    pub fn from_env() -> Self {
        let mode = std::env::var("OPAL_BINDING_MODE")
            .ok()
            .and_then(|v| Self::parse_mode(&v))
            .unwrap_or(CoercionMode::Strict);
        let cast_error_style = std::env::var("OPAL_CAST_ERROR_STYLE")
            .ok()
            .and_then(|v| Self::parse_cast_style(&v))
            .unwrap_or(CastErrorStyle::Cast);
        Self {
            mode,
            cast_error_style,
        }
    }

    fn parse_mode(raw: &str) -> Option<CoercionMode> {
        match raw {
            "strict" => Some(CoercionMode::Strict),
            "dynamic" | "permissive" => Some(CoercionMode::Dynamic),
            _ => None,
        }
    }

    fn parse_cast_style(raw: &str) -> Option<CastErrorStyle> {
        match raw {
            "cast" => Some(CastErrorStyle::Cast),
            "typecheck" | "type_check" => Some(CastErrorStyle::TypeCheck),
            _ => None,
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::strict()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = BridgeConfig::default();
        assert_eq!(config.mode, CoercionMode::Strict);
        assert_eq!(config.cast_error_style, CastErrorStyle::Cast);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(BridgeConfig::strict().mode, CoercionMode::Strict);
        assert_eq!(BridgeConfig::dynamic().mode, CoercionMode::Dynamic);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(BridgeConfig::parse_mode("strict"), Some(CoercionMode::Strict));
        assert_eq!(
            BridgeConfig::parse_mode("dynamic"),
            Some(CoercionMode::Dynamic)
        );
        assert_eq!(
            BridgeConfig::parse_mode("permissive"),
            Some(CoercionMode::Dynamic)
        );
        assert_eq!(BridgeConfig::parse_mode("fast"), None);
        assert_eq!(BridgeConfig::parse_mode(""), None);
    }

    #[test]
    fn test_parse_cast_style() {
        assert_eq!(
            BridgeConfig::parse_cast_style("cast"),
            Some(CastErrorStyle::Cast)
        );
        assert_eq!(
            BridgeConfig::parse_cast_style("typecheck"),
            Some(CastErrorStyle::TypeCheck)
        );
        assert_eq!(
            BridgeConfig::parse_cast_style("type_check"),
            Some(CastErrorStyle::TypeCheck)
        );
        assert_eq!(BridgeConfig::parse_cast_style("verbose"), None);
    }
}
