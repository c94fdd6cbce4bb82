use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use voxresize_resample::{parallel::ExecutionStrategy, resize};
use voxresize_volume::{Volume, VolumeSize};

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for side in [32usize, 64, 128].iter() {
        let src_size = VolumeSize::from([*side, *side, *side]);
        let dst_size = VolumeSize::from([side / 2, side / 2, side * 2]);
        group.throughput(criterion::Throughput::Elements(dst_size.num_voxels() as u64));

        let parameter_string = format!("{side}^3");

        let data = (0..src_size.num_voxels())
            .map(|i| (i % 251) as u8)
            .collect::<Vec<_>>();
        let src = Volume::new(src_size, data).unwrap();
        let dst = Volume::from_size_val(dst_size, 0).unwrap();

        for strategy in [
            ExecutionStrategy::Serial,
            ExecutionStrategy::ParallelSlices,
            ExecutionStrategy::ParallelRows,
        ] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), &parameter_string),
                &(&src, &dst),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| {
                        resize::resize_with(black_box(src), black_box(&mut dst), strategy)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
