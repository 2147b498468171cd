//! Integration test: forced-selection classification scenarios.
//!
//! The sampler seam makes the roster deterministic, so whole-run
//! reports can be compared byte for byte against the stable line
//! formats. Every scenario goes through the public `run()` entry
//! point, the same path the demo binary takes.

use std::io::{self, Write};

use mallard_animals::standard_catalog;
use mallard_core::{Animal, Call, CallSet, Catalog, KindDef, Voice};
use mallard_engine::{run, Classification, RunConfig, RunError, UniformSampler};
use mallard_test_utils::ScriptedSampler;

// ── Helpers ──────────────────────────────────────────────────────────

/// Run the classifier over an exact sequence of kinds and return the
/// classifications plus the rendered report.
fn forced_run(catalog: &Catalog, names: &[&str]) -> (Vec<Classification>, String) {
    let config = RunConfig {
        count: names.len(),
        sampler: Box::new(ScriptedSampler::by_name(catalog, names)),
    };
    let mut out = Vec::new();
    let results = run(catalog, config, &mut out).expect("forced run should succeed");
    let report = String::from_utf8(out).expect("report is UTF-8");
    (results, report)
}

// ── Forced-selection scenarios ───────────────────────────────────────

#[test]
fn single_duck_emits_quack_then_verdict() {
    let catalog = standard_catalog();

    let (results, report) = forced_run(&catalog, &["Duck"]);

    assert_eq!(report, "Quack!\nA  Duck !\n");
    assert_eq!(results, vec![Classification::Duck { kind_name: "Duck" }]);
}

#[test]
fn single_cat_is_not_a_duck() {
    let catalog = standard_catalog();

    let (results, report) = forced_run(&catalog, &["Cat"]);

    assert_eq!(report, "Not a Duck... \ta Cat\n");
    assert_eq!(results, vec![Classification::NotADuck { kind_name: "Cat" }]);
}

#[test]
fn dog_duck_cow_sequence_reports_in_generation_order() {
    let catalog = standard_catalog();

    let (results, report) = forced_run(&catalog, &["Dog", "Duck", "Cow"]);

    assert_eq!(
        report,
        "Not a Duck... \ta Dog\nQuack!\nA  Duck !\nNot a Duck... \ta Cow\n"
    );
    assert_eq!(
        results,
        vec![
            Classification::NotADuck { kind_name: "Dog" },
            Classification::Duck { kind_name: "Duck" },
            Classification::NotADuck { kind_name: "Cow" },
        ]
    );
}

#[test]
fn every_standard_kind_classifies_by_declared_capability() {
    let catalog = standard_catalog();

    for def in catalog.kinds() {
        let name = def.name();
        let (results, report) = forced_run(&catalog, &[name]);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind_name(), name);
        assert_eq!(
            results[0].is_duck(),
            def.calls().contains(Call::Quack),
            "verdict for {name} does not follow its declared calls"
        );
        assert!(
            report.contains(name),
            "report for {name} never names the kind: {report:?}"
        );
    }
}

#[test]
fn zero_count_produces_no_output_and_no_error() {
    let catalog = standard_catalog();
    let config = RunConfig {
        count: 0,
        sampler: Box::new(ScriptedSampler::new(vec![0])),
    };

    let mut out = Vec::new();
    let results = run(&catalog, config, &mut out).unwrap();

    assert!(results.is_empty());
    assert!(out.is_empty(), "zero-count run wrote output: {out:?}");
}

#[test]
fn default_config_generates_ten() {
    // Entropy-seeded, so only the count and per-line shape are stable.
    let catalog = standard_catalog();

    let mut out = Vec::new();
    let results = run(&catalog, RunConfig::default(), &mut out).unwrap();

    assert_eq!(results.len(), 10);
}

// ── Error paths ──────────────────────────────────────────────────────

#[test]
fn empty_catalog_with_positive_count_fails() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    let config = RunConfig {
        count: 3,
        sampler: Box::new(ScriptedSampler::new(vec![0])),
    };

    let mut out = Vec::new();
    match run(&catalog, config, &mut out) {
        Err(RunError::EmptyCatalog { requested }) => assert_eq!(requested, 3),
        other => panic!("expected EmptyCatalog, got {other:?}"),
    }
    assert!(out.is_empty(), "failed run wrote output: {out:?}");
}

#[test]
fn out_of_range_pick_fails_before_any_output() {
    let catalog = standard_catalog();
    let config = RunConfig {
        count: 1,
        sampler: Box::new(ScriptedSampler::new(vec![42])),
    };

    let mut out = Vec::new();
    match run(&catalog, config, &mut out) {
        Err(RunError::PickOutOfRange { index, kind_count }) => {
            assert_eq!(index, 42);
            assert_eq!(kind_count, 5);
        }
        other => panic!("expected PickOutOfRange, got {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn sink_failure_surfaces_as_io_error() {
    /// A sink that refuses every write.
    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let catalog = standard_catalog();
    let config = RunConfig {
        count: 1,
        sampler: Box::new(ScriptedSampler::new(vec![0])),
    };

    match run(&catalog, config, &mut BrokenSink) {
        Err(RunError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected Io, got {other:?}"),
    }
}

// ── Determinism ──────────────────────────────────────────────────────

#[test]
fn seeded_runs_are_reproducible() {
    let catalog = standard_catalog();

    let mut first_out = Vec::new();
    let first = run(
        &catalog,
        RunConfig {
            count: 16,
            sampler: Box::new(UniformSampler::seeded(42)),
        },
        &mut first_out,
    )
    .unwrap();

    let mut second_out = Vec::new();
    let second = run(
        &catalog,
        RunConfig {
            count: 16,
            sampler: Box::new(UniformSampler::seeded(42)),
        },
        &mut second_out,
    )
    .unwrap();

    assert_eq!(first, second);
    assert_eq!(first_out, second_out);
}

// ── Generalization: new kinds, untouched classifier ──────────────────

/// A goose honks like a donkey and quacks like a duck. Two voices,
/// one per declared call.
#[derive(Default)]
struct Goose {
    honk: GooseHonk,
    quack: GooseQuack,
}

#[derive(Default)]
struct GooseHonk;

#[derive(Default)]
struct GooseQuack;

impl Voice for GooseHonk {
    fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Honk!")
    }
}

impl Voice for GooseQuack {
    fn utter(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Quack!")
    }
}

impl Animal for Goose {
    fn kind_name(&self) -> &'static str {
        "Goose"
    }

    fn voice(&self, call: Call) -> Option<&dyn Voice> {
        match call {
            Call::Quack => Some(&self.quack),
            Call::Honk => Some(&self.honk),
            _ => None,
        }
    }
}

/// A goldfish declares no calls at all.
#[derive(Default)]
struct Goldfish;

impl Animal for Goldfish {
    fn kind_name(&self) -> &'static str {
        "Goldfish"
    }

    fn voice(&self, _call: Call) -> Option<&dyn Voice> {
        None
    }
}

/// Standard catalog plus a quacking goose and a silent goldfish.
fn extended_catalog() -> Catalog {
    let catalog = standard_catalog();
    let mut defs: Vec<KindDef> = catalog.kinds().copied().collect();
    defs.push(KindDef::new(
        "Goose",
        CallSet::empty().with(Call::Quack).with(Call::Honk),
        || Box::new(Goose::default()),
    ));
    defs.push(KindDef::new("Goldfish", CallSet::empty(), || {
        Box::new(Goldfish)
    }));
    Catalog::new(defs).unwrap()
}

#[test]
fn a_second_quacker_classifies_as_duck() {
    let catalog = extended_catalog();

    let (results, report) = forced_run(&catalog, &["Goose"]);

    assert_eq!(report, "Quack!\nA  Goose !\n");
    assert_eq!(results, vec![Classification::Duck { kind_name: "Goose" }]);
}

#[test]
fn quackers_of_different_kinds_coexist() {
    let catalog = extended_catalog();

    let (results, _report) = forced_run(&catalog, &["Duck", "Goose"]);

    assert!(results.iter().all(Classification::is_duck));
    assert_eq!(results[0].kind_name(), "Duck");
    assert_eq!(results[1].kind_name(), "Goose");
}

#[test]
fn a_kind_with_no_calls_is_not_a_duck() {
    let catalog = extended_catalog();

    let (results, report) = forced_run(&catalog, &["Goldfish"]);

    assert_eq!(report, "Not a Duck... \ta Goldfish\n");
    assert_eq!(
        results,
        vec![Classification::NotADuck {
            kind_name: "Goldfish"
        }]
    );
}

#[test]
fn extending_the_catalog_leaves_standard_verdicts_unchanged() {
    let standard = standard_catalog();
    let extended = extended_catalog();

    let (_, standard_report) = forced_run(&standard, &["Dog", "Duck", "Cow"]);
    let (_, extended_report) = forced_run(&extended, &["Dog", "Duck", "Cow"]);

    assert_eq!(standard_report, extended_report);
}
