//! Prints the splits of a ten-element toy data set under the common cross-validation schemes.

extern crate crossval;
#[macro_use]
extern crate log;
extern crate serde_json;
extern crate simple_logger;

use std::process;

use log::Level;

use crossval::display::PyList;
use crossval::{Result, SplitSize, SplitterConfig, TrainTestSplit};

const DEMO_PLAN: &str = r#"[
    {"type": "k_fold", "n_splits": 5},
    {"type": "k_fold", "n_splits": 5, "shuffle": true, "seed": 42},
    {"type": "leave_one_out"},
    {"type": "leave_p_out", "p": 2},
    {"type": "shuffle_split", "n_splits": 3, "test_size": 2, "seed": 0},
    {"type": "time_series_split", "n_splits": 5}
]"#;

fn run() -> Result<()> {
    let data: Vec<u32> = (1..11).collect();
    println!("{}", PyList(&data));

    let (train, test) = TrainTestSplit::new()
        .train_size(SplitSize::Relative(0.8))
        .split_slice(&data)?;
    println!("{}", PyList(&[PyList(&train), PyList(&test)]));

    let plan: Vec<SplitterConfig> = serde_json::from_str(DEMO_PLAN)?;

    for config in &plan {
        info!("{:?}", config);
        let splitter = config.build();
        for fold in splitter.split(data.len())? {
            println!("{}", fold);
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = simple_logger::init_with_level(Level::Warn) {
        eprintln!("logging unavailable: {}", e);
    }

    if let Err(e) = run() {
        error!("{}", e);
        process::exit(1);
    }
}
