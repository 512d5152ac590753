//! Decoder benchmarks

use ansi_decoder::parser::{Decoder, NullHandler};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn bench_decode(c: &mut Criterion, name: &str, input: &[u8]) {
    let mut group = c.benchmark_group("decoder");
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function(name, |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(NullHandler);
            black_box(decoder.feed(black_box(input)))
        })
    });

    group.finish();
}

fn bench_plain_text(c: &mut Criterion) {
    // Plain ASCII text
    let plain_text = "Hello, World! ".repeat(1000);
    bench_decode(c, "plain_text", plain_text.as_bytes());
}

fn bench_csi_sequences(c: &mut Criterion) {
    // CSI sequences (cursor movement, SGR)
    let csi_heavy = "\x1b[1;31mRed\x1b[0m \x1b[5;10H\x1b[2J".repeat(100);
    bench_decode(c, "csi_sequences", csi_heavy.as_bytes());
}

fn bench_mixed(c: &mut Criterion) {
    // Mixed content (typical terminal output)
    let mixed = "Line 1: \x1b[32mOK\x1b[0m\r\nLine 2: \x1b[31mERROR\x1b[0m\r\n".repeat(500);
    bench_decode(c, "mixed_content", mixed.as_bytes());
}

fn bench_osc(c: &mut Criterion) {
    let osc = "\x1b]2;window title\x1b\\\x1b]8;;https://example.com\x07link\x1b]8;;\x07".repeat(200);
    bench_decode(c, "osc_sequences", osc.as_bytes());
}

fn bench_utf8(c: &mut Criterion) {
    // UTF-8 content
    let utf8 = "Hello, 世界! 🎉 ".repeat(500);
    bench_decode(c, "utf8_content", utf8.as_bytes());
}

criterion_group!(
    benches,
    bench_plain_text,
    bench_csi_sequences,
    bench_mixed,
    bench_osc,
    bench_utf8
);

criterion_main!(benches);
