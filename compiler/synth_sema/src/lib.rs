//! Semantic collaborators of structural member synthesis.
//!
//! Synthesis never resolves anything itself. It reads two read-only
//! protocols that earlier compilation phases populate:
//!
//! - [`BindingService`]: primary constructors, structural properties,
//!   precomputed synthetic slots and raw-signature member lookup.
//! - [`OverrideGraph`]: which ancestor members a member overrides.
//!
//! [`SemanticModel`] implements both over plain tables and is assembled with
//! [`ModelBuilder`], which also performs the override resolution that
//! fabricates inherited members on subtypes.
//!
//! # Architecture
//!
//! ```text
//! ModelBuilder  (declare types, members, constructors, slots)
//!       ↓ finish()
//! SemanticModel (immutable; BindingService + OverrideGraph)
//!       ↓
//! synthesis orchestrator (read-only consumer)
//! ```

mod binding;
mod builder;
mod model;
mod overrides;

pub use binding::BindingService;
pub use builder::{ModelBuilder, ParamSpec};
pub use model::SemanticModel;
pub use overrides::OverrideGraph;
