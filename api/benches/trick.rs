use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ninth_planet_api::{legal_plays, Card, Cards, Seat, Trick};

fn trick(cards: &[&str]) -> Trick {
    let mut trick = Trick::new(Seat::new(1));
    for card in cards {
        trick.push(card.parse::<Card>().unwrap());
    }
    trick
}

pub fn suit(c: &mut Criterion) {
    c.bench_with_input(BenchmarkId::new("suit", ""), &trick(&["5P"]), |b, trick| {
        b.iter(|| trick.suit());
    });
}

pub fn winner(c: &mut Criterion) {
    let mut g = c.benchmark_group("winner");
    g.bench_with_input("no rockets", &trick(&["5P", "9P", "2B", "7P"]), |b, trick| {
        b.iter(|| trick.winner(4));
    });
    g.bench_with_input(
        "rockets",
        &trick(&["5P", "1R", "9P", "3R", "8P"]),
        |b, trick| {
            b.iter(|| trick.winner(5));
        },
    );
    g.finish();
}

pub fn legal(c: &mut Criterion) {
    let hand: Cards = "2R 147P 147B 147G 147Y".parse().unwrap();
    let mut g = c.benchmark_group("legal_plays");
    g.bench_with_input("lead", &trick(&[]), |b, trick| {
        b.iter(|| legal_plays(hand, trick));
    });
    g.bench_with_input("follow", &trick(&["5B"]), |b, trick| {
        b.iter(|| legal_plays(hand, trick));
    });
    g.bench_with_input("void", &trick(&["5B"]), |b, trick| {
        b.iter(|| legal_plays(hand - Cards::BLUE, trick));
    });
    g.finish();
}

criterion_group!(benches, suit, winner, legal);
criterion_main!(benches);
