use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sms_triage::search::score;

fn bench_score(c: &mut Criterion) {
    let body = "Your OTP for logging in to NetBanking is 482910. Do not share it with anyone.";

    c.bench_function("score_exact_phrase", |b| {
        b.iter(|| score(black_box(body), black_box("netbanking")));
    });

    c.bench_function("score_multi_word", |b| {
        b.iter(|| score(black_box(body), black_box("share otp")));
    });

    c.bench_function("score_subsequence", |b| {
        b.iter(|| score(black_box(body), black_box("ntbnkng")));
    });
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
