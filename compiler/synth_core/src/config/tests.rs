use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: FxHashMap<String, String> = pairs
        .iter()
        .map(|&(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_keep_legacy_asymmetry() {
    let config = SynthConfig::default();
    assert_eq!(config.empty_properties, EmptyPropertyPolicy::Skip);
    assert_eq!(config.threads, None);
}

#[test]
fn empty_lookup_is_default() {
    assert_eq!(SynthConfig::from_lookup(lookup(&[])), SynthConfig::default());
}

#[test]
fn reads_both_variables() {
    let config = SynthConfig::from_lookup(lookup(&[
        ("SYNTH_EMPTY_PROPERTIES", " Synthesize "),
        ("SYNTH_THREADS", "4"),
    ]));
    assert_eq!(
        config,
        SynthConfig::default()
            .with_empty_properties(EmptyPropertyPolicy::Synthesize)
            .with_threads(4)
    );
}

#[test]
fn bad_values_fall_back() {
    let config = SynthConfig::from_lookup(lookup(&[
        ("SYNTH_EMPTY_PROPERTIES", "sometimes"),
        ("SYNTH_THREADS", "0"),
    ]));
    assert_eq!(config, SynthConfig::default());
}

#[test]
fn policy_parse() {
    assert_eq!(EmptyPropertyPolicy::parse("skip"), Some(EmptyPropertyPolicy::Skip));
    assert_eq!(
        EmptyPropertyPolicy::parse("SYNTHESIZE"),
        Some(EmptyPropertyPolicy::Synthesize)
    );
    assert_eq!(EmptyPropertyPolicy::parse(""), None);
}
