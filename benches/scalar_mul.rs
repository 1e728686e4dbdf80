use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use gls127::{AffinePoint, Scalar};

fn rand_scalar(rng: &mut StdRng) -> Scalar {
    Scalar::from_limbs(rng.gen::<[u64; 4]>()).masked()
}

fn bench_mul_gen(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let k = rand_scalar(&mut rng);
    c.bench_function("mul_gen (constant time)", |b| {
        b.iter(|| AffinePoint::mul_gen(&k, true))
    });
    c.bench_function("mul_gen (variable time)", |b| {
        b.iter(|| AffinePoint::mul_gen(&k, false))
    });
}

fn bench_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let k = rand_scalar(&mut rng);
    let p = AffinePoint::mul_gen(&rand_scalar(&mut rng), true);
    c.bench_function("mul (variable base)", |b| b.iter(|| p.mul(&k)));
}

fn bench_simul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let k1 = rand_scalar(&mut rng);
    let k2 = rand_scalar(&mut rng);
    let p = AffinePoint::mul_gen(&rand_scalar(&mut rng), true);
    let q = AffinePoint::mul_gen(&rand_scalar(&mut rng), true);
    c.bench_function("simul (double base)", |b| {
        b.iter(|| AffinePoint::simul(&k1, &p, &k2, &q))
    });
}

fn bench_mul_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let x = rand_scalar(&mut rng);
    let y = rand_scalar(&mut rng);
    let z = rand_scalar(&mut rng);
    c.bench_function("scalar mul_add mod q", |b| {
        b.iter(|| Scalar::mul_add(&x, &y, &z))
    });
}

criterion_group!(benches, bench_mul_gen, bench_mul, bench_simul, bench_mul_add);
criterion_main!(benches);
