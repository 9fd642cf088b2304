use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slice_spectrum::audio::{ChannelBuffers, TimeWindow};
use slice_spectrum::spectrum::analysis::{analyze_channels, AnalyzerConfig};

fn bench_stereo_slice(c: &mut Criterion) {
    let frames = 48000usize;
    let channels: Vec<Vec<f64>> = (0..2usize)
        .map(|ch| {
            (0..frames)
                .map(|n| ((n * (ch + 3)) as f64 * 0.01).sin())
                .collect::<Vec<f64>>()
        })
        .collect();
    let buffers = ChannelBuffers::from_channels(channels, 48000).unwrap();

    let mut group = c.benchmark_group("stereo_30ms_slice");
    for parallel in [false, true] {
        let config = AnalyzerConfig {
            window: TimeWindow { start_ms: 250, duration_ms: 30 },
            parallel,
            ..Default::default()
        };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| analyze_channels(black_box(&buffers), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stereo_slice);
criterion_main!(benches);
