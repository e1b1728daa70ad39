//! Synthesis configuration.

use tracing::warn;

/// What to do with contract members of a type that has no structural
/// properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyPropertyPolicy {
    /// Never synthesize `to_string`/`hash_code`/`equals` for such types,
    /// even though they still receive component and copy members.
    #[default]
    Skip,
    /// Attempt the contract members like any other structural type.
    Synthesize,
}

impl EmptyPropertyPolicy {
    /// Parse the `SYNTH_EMPTY_PROPERTIES` spelling.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Some(EmptyPropertyPolicy::Skip),
            "synthesize" => Some(EmptyPropertyPolicy::Synthesize),
            _ => None,
        }
    }
}

/// Knobs for a synthesis run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SynthConfig {
    pub empty_properties: EmptyPropertyPolicy,
    /// Worker threads for [`synthesize_all`](crate::synthesize_all);
    /// `None` uses rayon's global pool.
    pub threads: Option<usize>,
}

impl SynthConfig {
    pub const EMPTY_PROPERTIES_VAR: &'static str = "SYNTH_EMPTY_PROPERTIES";
    pub const THREADS_VAR: &'static str = "SYNTH_THREADS";

    #[must_use]
    pub fn with_empty_properties(mut self, policy: EmptyPropertyPolicy) -> Self {
        self.empty_properties = policy;
        self
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = SynthConfig::default();

        if let Some(raw) = lookup(Self::EMPTY_PROPERTIES_VAR) {
            match EmptyPropertyPolicy::parse(&raw) {
                Some(policy) => config.empty_properties = policy,
                None => warn!(
                    var = Self::EMPTY_PROPERTIES_VAR,
                    value = %raw,
                    "expected `skip` or `synthesize`, using default"
                ),
            }
        }

        if let Some(raw) = lookup(Self::THREADS_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.threads = Some(n),
                _ => warn!(
                    var = Self::THREADS_VAR,
                    value = %raw,
                    "expected a positive thread count, using global pool"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests;
