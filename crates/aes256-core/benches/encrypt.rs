use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes256_core::{encrypt_block, encrypt_in_place, expand_key, Aes256Key};

fn bench_encrypt(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut key_bytes = [0u8; 32];
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    rng.fill_bytes(&mut block);
    let key = Aes256Key::from(key_bytes);

    let mut group = c.benchmark_group("encrypt");
    group.bench_function("encrypt_in_place", |b| {
        b.iter(|| {
            let mut scratch = key_bytes;
            let mut state = block;
            encrypt_in_place(&mut scratch, &mut state);
            black_box(state)
        });
    });
    group.bench_function("encrypt_block", |b| {
        b.iter(|| black_box(encrypt_block(&key, black_box(&block))));
    });
    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let key = Aes256Key::from([0u8; 32]);
    c.bench_function("expand_key", |b| {
        b.iter(|| black_box(expand_key(black_box(&key))));
    });
}

criterion_group!(benches, bench_encrypt, bench_schedule);
criterion_main!(benches);
