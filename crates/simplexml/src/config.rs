//! Decode options and the per-call decode context.

/// How map entry elements that do not pair up are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapPairing {
    /// An odd number of entry elements yields an empty map and a key/value
    /// pair in the wrong order is skipped.
    #[default]
    Lenient,
    /// Both situations fail the decode.
    Strict,
}

/// Options for decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeConfig {
    /// Treatment of unpaired map entries.
    pub map_pairing: MapPairing,
}

impl DecodeConfig {
    /// Set the map pairing policy.
    pub fn map_pairing(mut self, map_pairing: MapPairing) -> Self {
        self.map_pairing = map_pairing;
        self
    }

    /// Shorthand for strict map pairing.
    pub fn strict() -> Self {
        Self::default().map_pairing(MapPairing::Strict)
    }
}

/// State threaded through one decode pass.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    config: &'a DecodeConfig,
}

impl<'a> DecodeContext<'a> {
    /// Create a context for a decode pass.
    pub fn new(config: &'a DecodeConfig) -> Self {
        Self { config }
    }

    /// The options in effect.
    pub fn config(&self) -> &'a DecodeConfig {
        self.config
    }
}
