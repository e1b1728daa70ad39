//! Target backends for structural member synthesis.
//!
//! Each backend implements [`synth_core::SynthesisBackend`] and is created
//! once per declared type:
//!
//! - [`CBackend`] emits the synthesized members as C functions over the
//!   type's struct layout, producing a [`CUnit`]
//! - [`EvalBackend`] records them as [`DerivedMethod`]s that an [`Evaluator`]
//!   runs over runtime [`Value`]s

pub mod c;
pub mod eval;

pub use c::{CBackend, CUnit};
pub use eval::{
    CopyParameter, DerivedMethod, DerivedMethodTable, EvalBackend, EvalError, EvalResult,
    Evaluator, StructValue, Value,
};
