//! Synthesis orchestrator.

use synth_ir::{MemberSignature, TypeId};
use synth_sema::{BindingService, OverrideGraph};
use tracing::{debug, trace};

use crate::{
    ContractMember, ContractOutcome, ContractViolation, EmptyPropertyPolicy, OverrideVerdict,
    ResolvedType, SynthConfig, SynthesisBackend, SynthesisReport, TrivialOverrideDetector,
};

/// Decides which structural members a type receives and dispatches them to
/// a backend.
///
/// Holds only shared references to immutable semantic data, so one
/// synthesizer can serve any number of workers.
pub struct Synthesizer<'a, S: ?Sized, G: ?Sized> {
    bindings: &'a S,
    overrides: &'a G,
    config: SynthConfig,
}

impl<'a, S, G> Synthesizer<'a, S, G>
where
    S: BindingService + ?Sized,
    G: OverrideGraph + ?Sized,
{
    pub fn new(bindings: &'a S, overrides: &'a G) -> Self {
        Self::with_config(bindings, overrides, SynthConfig::default())
    }

    pub fn with_config(bindings: &'a S, overrides: &'a G, config: SynthConfig) -> Self {
        Synthesizer {
            bindings,
            overrides,
            config,
        }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Synthesize the structural members of `ty` into `backend`.
    ///
    /// # Panics
    /// Panics if the binding service violates its contract; see
    /// [`try_synthesize`](Self::try_synthesize) for the fallible form.
    pub fn synthesize<B: SynthesisBackend + ?Sized>(
        &self,
        ty: TypeId,
        backend: &mut B,
    ) -> SynthesisReport {
        self.try_synthesize(ty, backend)
            .unwrap_or_else(|violation| panic!("{}", violation))
    }

    /// Synthesize the structural members of `ty` into `backend`.
    ///
    /// All inputs are resolved and validated before the first hook runs, so
    /// on `Err` the backend has received nothing.
    pub fn try_synthesize<B: SynthesisBackend + ?Sized>(
        &self,
        ty: TypeId,
        backend: &mut B,
    ) -> Result<SynthesisReport, ContractViolation> {
        let resolved = ResolvedType::resolve(self.bindings, ty)?;
        let type_name = self.bindings.interner().lookup(resolved.name);
        let mut report = SynthesisReport::new(ty);

        debug!(
            name = %type_name,
            constructor = resolved.constructor.is_some(),
            properties = resolved.properties.len(),
            components = resolved.components.len(),
            copy = resolved.copy.is_some(),
            "synthesizing structural members"
        );

        self.generate_components(&resolved, backend, &mut report);
        self.generate_copy(&resolved, backend, &mut report);
        self.generate_contract_members(&resolved, backend, &mut report);

        Ok(report)
    }

    fn generate_components<B: SynthesisBackend + ?Sized>(
        &self,
        resolved: &ResolvedType,
        backend: &mut B,
        report: &mut SynthesisReport,
    ) {
        if resolved.constructor.is_none() {
            trace!("no primary constructor, component and copy synthesis skipped");
            return;
        }

        for slot in &resolved.components {
            trace!(
                accessor = %self.bindings.interner().lookup(slot.signature.name),
                parameter = %self.bindings.interner().lookup(slot.parameter.name),
                "generating component accessor"
            );
            backend.generate_component_accessor(resolved, &slot.signature, &slot.parameter);
            report.components.push(slot.signature.name);
        }
    }

    fn generate_copy<B: SynthesisBackend + ?Sized>(
        &self,
        resolved: &ResolvedType,
        backend: &mut B,
        report: &mut SynthesisReport,
    ) {
        let (Some(signature), Some(params)) = (&resolved.copy, &resolved.constructor) else {
            return;
        };
        trace!(parameters = params.len(), "generating copy");
        backend.generate_copy(resolved, signature, params);
        report.copy = true;
    }

    fn generate_contract_members<B: SynthesisBackend + ?Sized>(
        &self,
        resolved: &ResolvedType,
        backend: &mut B,
        report: &mut SynthesisReport,
    ) {
        // Zero-property types get components and copy but no contract
        // members unless configured otherwise.
        if resolved.properties.is_empty() && self.config.empty_properties == EmptyPropertyPolicy::Skip
        {
            trace!("no structural properties, contract members skipped");
            return;
        }

        let detector = TrivialOverrideDetector::new(self.overrides, self.bindings.universal_root());

        for member in ContractMember::ALL {
            let outcome = match resolved.candidate(member) {
                None => ContractOutcome::NoCandidate,
                Some(candidate) => match detector.classify(candidate) {
                    OverrideVerdict::Trivial => {
                        dispatch(backend, member, resolved, &candidate.signature);
                        ContractOutcome::Generated
                    }
                    verdict => ContractOutcome::NonTrivial(verdict),
                },
            };
            trace!(member = member.method_name(), ?outcome, "contract member");
            report.set(member, outcome);
        }
    }
}

fn dispatch<B: SynthesisBackend + ?Sized>(
    backend: &mut B,
    member: ContractMember,
    resolved: &ResolvedType,
    signature: &MemberSignature,
) {
    let properties = resolved.properties.as_slice();
    match member {
        ContractMember::ToString => {
            backend.generate_string_representation(resolved, signature, properties);
        }
        ContractMember::HashCode => backend.generate_hash(resolved, signature, properties),
        ContractMember::Equals => backend.generate_equality(resolved, signature, properties),
    }
}
