use lights_out::{constant_mask::constant_mask, pascal::pascal_rhombus, system::AugmentedSystem};

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench(args = [16, 64, 256])]
fn solve_square(size: usize) {
    lights_out::solve(divan::black_box(size), divan::black_box(size)).unwrap();
}

#[divan::bench(args = [64, 256, 1024])]
fn reduce_square(bencher: divan::Bencher, size: usize) {
    let system = AugmentedSystem::assemble(
        &pascal_rhombus(size, size),
        &constant_mask(size, size),
        size,
    );
    bencher
        .with_inputs(|| system.clone())
        .bench_values(|system| system.reduce());
}

#[divan::bench(args = [64, 256, 1024])]
fn assemble_square(size: usize) -> AugmentedSystem {
    let pascal = pascal_rhombus(size, size);
    let mask = constant_mask(size, size);
    AugmentedSystem::assemble(divan::black_box(&pascal), divan::black_box(&mask), size)
}
