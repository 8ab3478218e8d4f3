//! Token throughput benchmark
//!
//! Measures issuance and introspection of a small subject payload, plus the
//! cost of rejecting tampered and structurally invalid input.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use edtoken::{KeyPair, Uuid};
use miniserde::{Deserialize, Serialize};

const NOW: i64 = 1_704_067_200;

#[derive(Serialize, Deserialize)]
struct Subject {
    subject: String,
}

fn subject() -> Subject {
    Subject {
        subject: "u1".to_string(),
    }
}

fn bench_generate(c: &mut Criterion) {
    let issuer = KeyPair::generate().expect("Failed to generate keys").issuer();
    let id = Uuid::new_v4();

    c.bench_function("generate", |b| {
        b.iter(|| issuer.generate(black_box(subject()), id, black_box(NOW)))
    });
}

fn bench_introspect(c: &mut Criterion) {
    let keys = KeyPair::generate().expect("Failed to generate keys");
    let verifier = keys.verifier();
    let token = keys
        .issuer()
        .issue(subject(), NOW)
        .expect("Failed to issue token")
        .into_string();

    // Corrupt the first signature character so decoding succeeds and verification fails
    let mut tampered = token.clone().into_bytes();
    let index = token.rfind('.').expect("three segments") + 1;
    tampered[index] = if tampered[index] == b'A' { b'B' } else { b'A' };
    let tampered = String::from_utf8(tampered).expect("ASCII token");

    let mut group = c.benchmark_group("introspect");
    group.bench_function("valid", |b| {
        b.iter(|| verifier.introspect::<Subject>(black_box(&token), black_box(NOW)))
    });
    group.bench_function("tampered", |b| {
        b.iter(|| verifier.introspect::<Subject>(black_box(&tampered), black_box(NOW)))
    });
    group.bench_function("malformed", |b| {
        b.iter(|| verifier.introspect::<Subject>(black_box("not-a-token"), black_box(NOW)))
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_introspect);
criterion_main!(benches);
