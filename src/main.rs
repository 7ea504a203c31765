mod bench;
mod error;
mod parallel_primitives;
mod sum;
mod utils;

use crate::bench::{ARRAY_SIZE, MAX_THREADS};
use crate::utils::wall_clock_seed;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = bench::run(ARRAY_SIZE, wall_clock_seed(), MAX_THREADS, |line| {
        println!("{line}")
    }) {
        log::error!("benchmark aborted: {err:?}");
        println!("{err}");
        std::process::exit(-1);
    }
}
