//! Structural member synthesis.
//!
//! Runs once per declared type after semantic resolution and decides which
//! structural members to synthesize:
//!
//! 1. **Component accessors**: one per constructor parameter holding a slot
//! 2. **Copy**: mirrors the full primary constructor when the type holds a slot
//! 3. **Contract members** (`to_string`, `hash_code`, `equals`): only for
//!    types with at least one structural property, and only where the
//!    existing member is a trivial override of the universal root's default
//!
//! Emission is delegated to a [`SynthesisBackend`]; this crate owns the
//! decisions, never the emitted code.
//!
//! # Architecture
//!
//! ```text
//! BindingService + OverrideGraph   (read-only, from synth_sema)
//!        ↓
//!   ResolvedType::resolve          (eager, validated snapshot of one type)
//!        ↓
//!   Synthesizer                    (slot gating + TrivialOverrideDetector)
//!        ↓
//!   SynthesisBackend hooks         (per-target emission into a per-type unit)
//! ```
//!
//! Types are independent: [`synthesize_all`] fans them out over a rayon pool.

mod backend;
mod config;
mod contract;
mod detector;
mod driver;
mod error;
mod plan;
mod report;
mod resolve;
mod synthesizer;

pub use backend::{GenerationRequest, SynthesisBackend, SynthesizedMember};
pub use config::{EmptyPropertyPolicy, SynthConfig};
pub use contract::ContractMember;
pub use detector::{OverrideVerdict, TrivialOverrideDetector};
pub use driver::{synthesize_all, TypeOutput};
pub use error::{ContractViolation, SynthError};
pub use plan::PlanBackend;
pub use report::{ContractOutcome, SynthesisReport};
pub use resolve::{ComponentSlot, ResolvedType};
pub use synthesizer::Synthesizer;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=synth_core=debug` or `RUST_LOG=synth_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
