//! Parallel synthesis over many declared types.

use std::time::Instant;

use rayon::prelude::*;
use synth_ir::TypeId;
use synth_sema::{BindingService, OverrideGraph};
use tracing::{debug, info};

use crate::{SynthError, SynthesisBackend, SynthesisReport, Synthesizer};

/// One type's backend unit and report.
#[derive(Debug)]
pub struct TypeOutput<B> {
    pub ty: TypeId,
    pub backend: B,
    pub report: SynthesisReport,
}

/// Synthesize every type in `types`, each into its own backend unit.
///
/// Types are independent, so they are processed in parallel: on rayon's
/// global pool, or on a dedicated pool when the synthesizer's config sets a
/// thread count. Outputs come back in input order. The first contract
/// violation aborts the run.
pub fn synthesize_all<S, G, B, F>(
    synth: &Synthesizer<'_, S, G>,
    types: &[TypeId],
    make_backend: F,
) -> Result<Vec<TypeOutput<B>>, SynthError>
where
    S: BindingService + Sync + ?Sized,
    G: OverrideGraph + Sync + ?Sized,
    B: SynthesisBackend + Send,
    F: Fn(TypeId) -> B + Sync,
{
    let start = Instant::now();

    let run = || -> Result<Vec<TypeOutput<B>>, SynthError> {
        types
            .par_iter()
            .map(|&ty| {
                let mut backend = make_backend(ty);
                let report = synth.try_synthesize(ty, &mut backend)?;
                Ok(TypeOutput {
                    ty,
                    backend,
                    report,
                })
            })
            .collect()
    };

    let outputs = match synth.config().threads {
        Some(threads) => {
            debug!(threads, "building dedicated synthesis pool");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("synth-{i}"))
                .build()?;
            pool.install(run)?
        }
        None => run()?,
    };

    info!(
        types = outputs.len(),
        generated = outputs.iter().map(|o| o.report.generated()).sum::<usize>(),
        elapsed_ms = start.elapsed().as_millis(),
        "structural synthesis complete"
    );
    Ok(outputs)
}
