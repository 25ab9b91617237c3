//! Times the set operators on range masks of growing size.
//!
//! Run with: `cargo run --release --example range_bench -- --max-power 16`

use std::time::Instant;

use clap::Parser;
use rangemask::{Interval, IntervalSet, RangeMask, Socket};
use tracing::info;

#[derive(Parser, Debug)]
#[clap(about = "Benchmark of interval set operations over IP:port masks")]
struct Opt {
    /// Largest exponent: address ranges grow as [0, 2^i] for i in 0..=max_power
    #[clap(short, long, default_value = "20")]
    max_power: u32,

    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[clap(short, long, default_value = "info")]
    log_level: tracing::Level,
}

fn measure<R>(f: impl FnOnce() -> R) -> f64 {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed().as_secs_f64();
    drop(result);
    elapsed
}

fn equal_tests() {
    let ports_1 = vec![Interval::new(0, 1000), Interval::new(1500, 2000)];
    let ports_2 = vec![Interval::new(0, 1000), Interval::new(1100, 2000)];
    let mask_1 = RangeMask::new(vec![Interval::new(0, 0)], ports_1);
    let mask_2 = RangeMask::new(vec![Interval::new(0, 0)], ports_2);
    let (a, b) = (mask_1.to_collapsed(), mask_2.to_collapsed());

    println!("collapsed mask 1\n{}", a);
    println!("collapsed mask 2\n{}", b);
    println!("invert mask 1\n{}", a.complement());
    println!("invert mask 2\n{}", b.complement());
    println!("or masks\n{}", a.union_with(&b));
    println!("and masks\n{}", a.intersect_with(&b));
    println!("sub 1\n{}", a.difference(&b));
    println!("sub 2\n{}", b.difference(&a));
    println!("xor masks\n{}\n", a.symmetric_difference(&b));
}

fn timed(
    op: impl Fn(&IntervalSet<Socket>, &IntervalSet<Socket>) -> IntervalSet<Socket>,
    lhs: &RangeMask,
    rhs: &RangeMask,
) -> f64 {
    measure(|| op(&lhs.to_collapsed(), &rhs.to_collapsed()))
}

fn perf_tests(power: u32) -> String {
    let count: u32 = 1 << power;
    let rules_1 = RangeMask::new(vec![Interval::new(0, count)], vec![Interval::new(0, 1500)]);
    let rules_2 = RangeMask::new(vec![Interval::new(0, count)], vec![Interval::new(0, 1000)]);

    info!(count, "performance tests started");

    let or = timed(IntervalSet::union_with, &rules_1, &rules_2);
    let and = timed(IntervalSet::intersect_with, &rules_1, &rules_2);
    let xor = timed(IntervalSet::symmetric_difference, &rules_1, &rules_2);
    let sub_1 = timed(IntervalSet::difference, &rules_1, &rules_2);
    let sub_2 = timed(IntervalSet::difference, &rules_2, &rules_1);

    info!(or, and, xor, sub_1, sub_2, "performance tests finished");

    format!("{count}\t{or:.5}\t{and:.5}\t{xor:.5}\t{sub_1:.5}\t{sub_2:.5}")
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(Instant::now()))
        .with_max_level(opt.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    anyhow::ensure!(opt.max_power < 32, "max power {} exceeds the address width", opt.max_power);

    equal_tests();

    let results: Vec<String> = (0..=opt.max_power).map(perf_tests).collect();

    println!("Benchmark complete");
    println!("count\tor\tand\txor\tsub 1\tsub 2");
    for line in results {
        println!("{}", line);
    }
    Ok(())
}
