//! Dispatch modes for add nodes.
//!
//! `Adaptive` is the normal mode: a node commits to the first path it sees
//! and widens on demand. `Generic` builds nodes that start fully widened and
//! re-check every guard in priority order on each call. The integer
//! exclusion flag still applies in `Generic` mode: once a node overflows,
//! its small sums come back as `BigNumber`. The two modes must agree on
//! every result; `Generic` exists to check that and to rule out
//! specialization when chasing a bug.

use crate::add_node::SpecializationState;

/// How a node picks its dispatch path.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DispatchMode {
    /// Commit to observed operand types, widen on conflict.
    #[default]
    Adaptive,
    /// Re-check every guard on every call.
    Generic,
}

impl DispatchMode {
    /// Environment variable read by [`DispatchMode::from_env`].
    pub const ENV_VAR: &'static str = "EMBER_DISPATCH";

    /// State a freshly built node starts in.
    #[inline]
    pub fn initial_state(self) -> SpecializationState {
        match self {
            DispatchMode::Adaptive => SpecializationState::Uncommitted,
            DispatchMode::Generic => SpecializationState::Generic,
        }
    }

    /// Parse a mode name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("adaptive") {
            Some(DispatchMode::Adaptive)
        } else if name.eq_ignore_ascii_case("generic") {
            Some(DispatchMode::Generic)
        } else {
            None
        }
    }

    /// Mode selected by `EMBER_DISPATCH`, or `Adaptive` when unset.
    pub fn from_env() -> Self {
        Self::from_setting(std::env::var(Self::ENV_VAR).ok().as_deref())
    }

    pub(crate) fn from_setting(setting: Option<&str>) -> Self {
        let Some(raw) = setting else {
            return DispatchMode::default();
        };
        Self::parse(raw).unwrap_or_else(|| {
            tracing::warn!(
                value = raw,
                var = Self::ENV_VAR,
                "unrecognised dispatch mode, using adaptive"
            );
            DispatchMode::default()
        })
    }
}
