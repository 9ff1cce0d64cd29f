use archmage::SimdToken;
use criterion::{BenchmarkGroup, Criterion, Throughput, measurement::WallTime};

// === SIMD tier detection ===

fn probe<T: SimdToken>() -> &'static str {
    if T::summon().is_some() {
        "available"
    } else {
        "not available"
    }
}

fn print_simd_info() {
    eprintln!("=== SIMD Tier Detection ===");
    #[cfg(target_arch = "x86_64")]
    {
        eprintln!(
            "  AVX2+FMA (x86-64-v3):    {}",
            probe::<archmage::X64V3Token>()
        );
    }
    #[cfg(target_arch = "aarch64")]
    {
        eprintln!(
            "  NEON:                    {}",
            probe::<archmage::NeonToken>()
        );
    }
    #[cfg(target_arch = "wasm32")]
    {
        eprintln!(
            "  WASM SIMD128:            {}",
            probe::<archmage::Wasm128Token>()
        );
    }
    eprintln!("  Scalar:                  always available");
    eprintln!("===========================");
}

// === Scalar disable/enable via archmage ===

fn disable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(true);
}

fn enable_all_simd() {
    let _ = archmage::dangerously_disable_tokens_except_wasm(false);
}

// === Naive baselines ===

fn naive_argb_inplace(buf: &mut [u32]) {
    for px in buf {
        let (r, g, b) = ((*px >> 16) & 0xFF, (*px >> 8) & 0xFF, *px & 0xFF);
        let y = ((0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) + 0.5) as u32;
        *px = (*px & 0xFF00_0000) | y << 16 | y << 8 | y;
    }
}

fn naive_argb_copy(src: &[u32], dst: &mut [u32]) {
    dst.copy_from_slice(src);
    naive_argb_inplace(dst);
}

fn naive_rgba_inplace(buf: &mut [u8]) {
    for px in buf.chunks_exact_mut(4) {
        let y = (0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32 + 0.5) as u8;
        px[0] = y;
        px[1] = y;
        px[2] = y;
    }
}

// === Benchmark helpers ===

// The 1024×786 still image from the original viewer, and a 1080p frame.
const SIZES: &[(&str, usize, usize)] = &[("1024x786", 1024, 786), ("1920x1080", 1920, 1080)];

fn make_argb(n: usize) -> Vec<u32> {
    (0..n as u32).map(|i| i.wrapping_mul(2_654_435_761)).collect()
}

/// Benchmark an in-place operation with 3 variants: pallor (best SIMD), pallor_scalar, naive.
fn bench_inplace<T: Copy>(
    group: &mut BenchmarkGroup<WallTime>,
    pallor_fn: impl Fn(&mut [T]),
    naive_fn: fn(&mut [T]),
    buf: &[T],
) {
    group.bench_function("pallor", |b| {
        let mut v = buf.to_vec();
        b.iter(|| pallor_fn(&mut v));
    });

    disable_all_simd();
    group.bench_function("pallor_scalar", |b| {
        let mut v = buf.to_vec();
        b.iter(|| pallor_fn(&mut v));
    });
    enable_all_simd();

    group.bench_function("naive", |b| {
        let mut v = buf.to_vec();
        b.iter(|| naive_fn(&mut v));
    });
}

/// Benchmark a copy operation with 3 variants: pallor (best SIMD), pallor_scalar, naive.
fn bench_copy(
    group: &mut BenchmarkGroup<WallTime>,
    pallor_fn: fn(&[u32], &mut [u32]) -> Result<(), pallor::SizeError>,
    naive_fn: fn(&[u32], &mut [u32]),
    src: &[u32],
) {
    group.bench_function("pallor", |b| {
        let mut dst = vec![0u32; src.len()];
        b.iter(|| pallor_fn(src, &mut dst).unwrap());
    });

    disable_all_simd();
    group.bench_function("pallor_scalar", |b| {
        let mut dst = vec![0u32; src.len()];
        b.iter(|| pallor_fn(src, &mut dst).unwrap());
    });
    enable_all_simd();

    group.bench_function("naive", |b| {
        let mut dst = vec![0u32; src.len()];
        b.iter(|| naive_fn(src, &mut dst));
    });
}

// === Benchmark groups ===

fn bench_argb_inplace(c: &mut Criterion) {
    for &(name, w, h) in SIZES {
        let mut group = c.benchmark_group(format!("argb_inplace_{name}"));
        group.throughput(Throughput::Bytes((w * h * 4) as u64));
        let buf = make_argb(w * h);
        bench_inplace(
            &mut group,
            pallor::grayscale_argb_inplace,
            naive_argb_inplace,
            &buf,
        );
        group.finish();
    }
}

fn bench_argb_copy(c: &mut Criterion) {
    let (w, h) = (1920, 1080);
    let mut group = c.benchmark_group("argb_copy");
    group.throughput(Throughput::Bytes((w * h * 4) as u64));
    let src = make_argb(w * h);
    bench_copy(&mut group, pallor::grayscale_argb, naive_argb_copy, &src);
    group.finish();
}

fn bench_rgba_bytes(c: &mut Criterion) {
    let n = 1920 * 1080 * 4;
    let mut group = c.benchmark_group("rgba_bytes_inplace");
    group.throughput(Throughput::Bytes(n as u64));
    let buf: Vec<u8> = (0..n).map(|i| (i % 251) as u8).collect();
    bench_inplace(
        &mut group,
        |b: &mut [u8]| pallor::gray::grayscale_rgba_inplace(b).unwrap(),
        naive_rgba_inplace,
        &buf,
    );
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let original = pallor::PixelBuffer::new(1024, 786, make_argb(1024 * 786)).unwrap();
    let mut toggle = pallor::FilterToggle::new(original);
    c.bench_function("toggle_round_trip_1024x786", |b| {
        b.iter(|| {
            toggle.activate();
            toggle.activate();
        })
    });
}

// === Custom main for tier detection before criterion runs ===

fn main() {
    print_simd_info();

    let mut criterion = Criterion::default().configure_from_args();
    bench_argb_inplace(&mut criterion);
    bench_argb_copy(&mut criterion);
    bench_rgba_bytes(&mut criterion);
    bench_toggle(&mut criterion);
    criterion.final_summary();
}
