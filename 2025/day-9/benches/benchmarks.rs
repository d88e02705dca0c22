use aoc2025_day_9::*;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(include_str!("../input1.txt"))).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(include_str!("../input2.txt"))).unwrap();
}

#[divan::bench]
fn build_floor(bencher: divan::Bencher) {
    let points = parser::parse_points(include_str!("../input2.txt")).unwrap();
    bencher
        .with_inputs(|| points.clone())
        .bench_values(|points| Floor::build(points).unwrap());
}

#[divan::bench]
fn scan_floor(bencher: divan::Bencher) {
    let points = parser::parse_points(include_str!("../input2.txt")).unwrap();
    let floor = Floor::build(points).unwrap();
    bencher.bench(|| divan::black_box(&floor).largest_area());
}
