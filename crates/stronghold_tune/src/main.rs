// crates/stronghold_tune/src/main.rs
//
// Offline parameter-search utility.
// Repeatedly mutates one scalar of a `LayerSet`, re-scores a fixed corpus
// of real throw/goal logs, and keeps the mutation only if it lowers the
// average guess distance. Strictly offline and deterministic: the only
// randomness is the seeded mutation RNG.

mod args;

use std::process::ExitCode;

use args::{parse_and_validate, CliError};
use stronghold_core::{central, chunk_dist, Chunk, LayerSet, Session, StrongholdRng, Throw};
use stronghold_io::{load_tests_from_str, SAMPLE_1};

struct Case {
    throws: Vec<Throw>,
    goal: Chunk,
}

fn progression_cases() -> Vec<Case> {
    vec![
        Case {
            throws: vec![
                Throw::from_degrees(294.96, -486.85, -499.05, 0.0),
                Throw::from_degrees(362.90, -669.03, -493.95, 0.0),
                Throw::from_degrees(467.60, -843.82, -488.70, 0.0),
            ],
            goal: stronghold_core::chunk_from_world(936.0, -1224.0),
        },
        Case {
            throws: vec![
                Throw::from_degrees(-456.90, 120.37, -752.41, 0.0),
                Throw::from_degrees(-237.07, 508.18, -753.61, 0.0),
                Throw::from_degrees(-109.32, 640.59, -751.96, 0.0),
            ],
            goal: stronghold_core::chunk_from_world(536.0, 1672.0),
        },
        Case {
            throws: vec![
                Throw::from_degrees(-241.27, 283.87, -125.85, 0.0),
                Throw::from_degrees(-43.73, 252.43, -128.85, 0.0),
                Throw::from_degrees(63.99, 198.62, -129.60, 0.0),
            ],
            goal: stronghold_core::chunk_from_world(1352.0, -872.0),
        },
    ]
}

fn corpus() -> Vec<Case> {
    let mut cases = progression_cases();
    cases.extend(
        load_tests_from_str(SAMPLE_1)
            .into_iter()
            .map(|c| Case { throws: c.throws, goal: c.goal }),
    );
    cases
}

/// Average guess distance (world units) of `ls` over the first `throws`
/// throws of every corpus case long enough to supply that many.
fn average_accuracy(ls: LayerSet, throws: usize, corpus: &[Case]) -> f64 {
    let mut total = 0.0;
    let mut n = 0.0;
    for case in corpus {
        if case.throws.len() < throws {
            continue;
        }
        let mut sess = Session::with_params(ls);
        for t in &case.throws[..throws] {
            sess.new_throw(*t);
        }
        if let Some(best) = central(&sess.guess()) {
            total += chunk_dist(best.chunk, case.goal);
            n += 1.0;
        }
    }
    if n == 0.0 {
        f64::INFINITY
    } else {
        total / n
    }
}

fn main() -> ExitCode {
    let args = match parse_and_validate() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("stronghold-tune: error: {e}");
            return exit_code_for(&e);
        }
    };

    let corpus = corpus();
    let mut rng = StrongholdRng::from_seed(args.seed);
    let mut best = LayerSet::one_eye_set();
    let mut best_acc = average_accuracy(best, args.throws, &corpus);

    if !args.quiet {
        println!("stronghold-tune: baseline accuracy {best_acc:.1} blocks over {} cases", corpus.len());
    }

    for i in 0..args.iterations {
        let candidate = best.mutate(&mut rng);
        let acc = average_accuracy(candidate, args.throws, &corpus);
        if acc < best_acc {
            best = candidate;
            best_acc = acc;
            if !args.quiet {
                println!("stronghold-tune: round {i}: improved to {best_acc:.1} blocks ({best:?})");
            }
        }
    }

    println!("stronghold-tune: final accuracy {best_acc:.1} blocks");
    println!("stronghold-tune: final parameters {best:?}");
    ExitCode::SUCCESS
}

fn exit_code_for(_e: &CliError) -> ExitCode {
    ExitCode::from(2)
}
