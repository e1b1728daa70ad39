//! Evaluator backend.
//!
//! Instead of emitting code, each hook registers a [`DerivedMethod`] in the
//! type's [`DerivedMethodTable`]. Tables are handed to an [`Evaluator`],
//! which runs them over runtime [`Value`]s.

mod error;
mod evaluator;
mod table;
mod value;

pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use table::{CopyParameter, DerivedMethod, DerivedMethodTable};
pub use value::{StructValue, Value};

use synth_core::{ResolvedType, SynthesisBackend};
use synth_ir::{MemberSignature, Name, Parameter, StructuralProperty};
use tracing::trace;

/// Collects one type's derived methods.
#[derive(Debug, Default)]
pub struct EvalBackend {
    table: Option<DerivedMethodTable>,
}

impl EvalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected table; `None` if no hook ran.
    pub fn into_table(self) -> Option<DerivedMethodTable> {
        self.table
    }

    fn register(&mut self, owner: &ResolvedType, signature: &MemberSignature, method: DerivedMethod) {
        trace!(method = ?signature.name, "registering derived method");
        self.table
            .get_or_insert_with(|| DerivedMethodTable::new(owner.ty, owner.name))
            .insert(signature.name, method);
    }
}

fn field_names(properties: &[StructuralProperty]) -> Vec<Name> {
    properties.iter().map(|p| p.name).collect()
}

impl SynthesisBackend for EvalBackend {
    fn generate_component_accessor(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        parameter: &Parameter,
    ) {
        let method = DerivedMethod::Component {
            field: parameter.name,
        };
        self.register(owner, signature, method);
    }

    fn generate_copy(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        constructor_parameters: &[Parameter],
    ) {
        let parameters = constructor_parameters
            .iter()
            .map(|p| CopyParameter {
                name: p.name,
                property: owner.property_of(p.id).is_some(),
            })
            .collect();
        self.register(owner, signature, DerivedMethod::Copy { parameters });
    }

    fn generate_string_representation(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        let fields = field_names(properties);
        self.register(owner, signature, DerivedMethod::ToString { fields });
    }

    fn generate_hash(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        let fields = field_names(properties);
        self.register(owner, signature, DerivedMethod::Hash { fields });
    }

    fn generate_equality(
        &mut self,
        owner: &ResolvedType,
        signature: &MemberSignature,
        properties: &[StructuralProperty],
    ) {
        let fields = field_names(properties);
        self.register(owner, signature, DerivedMethod::Equals { fields });
    }
}
