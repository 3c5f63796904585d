use rand::SeedableRng;
use rand::rngs::SmallRng;
use roboequity::cards::*;
use roboequity::equity::*;
use roboequity::evaluation::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        classifying_five_cards,
        selecting_best_of_seven,
        evaluating_bitwise_strength,
        sampling_river_runout,
        simulating_flop_equity,
        simulating_preflop_equity_parallel,
}

fn classifying_five_cards(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let cards = Deck::new().sample(Hand::empty(), 5, rng).unwrap();
    let five: [Card; 5] = cards.try_into().unwrap();
    c.bench_function("classify a 5-card hand", |b| b.iter(|| classify(five)));
}

fn selecting_best_of_seven(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let cards = Deck::new().sample(Hand::empty(), 7, rng).unwrap();
    c.bench_function("select the best of 7 cards", |b| {
        b.iter(|| BestHand::try_from(cards.as_slice()))
    });
}

fn evaluating_bitwise_strength(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(2);
    let hand = Hand::from(Deck::new().sample(Hand::empty(), 7, rng).unwrap().as_slice());
    c.bench_function("evaluate a 7-card Hand bitwise", |b| {
        b.iter(|| Strength::from(hand))
    });
}

fn sampling_river_runout(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(3);
    let known = Hand::try_from("As Kd 7h 8h 9c").unwrap();
    c.bench_function("sample an opponent and a runout", |b| {
        b.iter(|| Deck::new().sample(known, 4, rng))
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(4);
    let hole = Hole::try_from("As Kd").unwrap();
    let board = Board::try_from("7h 8h 9c").unwrap();
    let simulator = Simulator::try_from((hole, board)).unwrap();
    c.bench_function("simulate 1000 Flop showdowns", |b| {
        b.iter(|| simulator.equity(1_000, rng))
    });
}

fn simulating_preflop_equity_parallel(c: &mut criterion::Criterion) {
    let hole = Hole::try_from("Qc Jc").unwrap();
    let simulator = Simulator::try_from((hole, Board::empty())).unwrap();
    c.bench_function("simulate 10000 Preflop showdowns in parallel", |b| {
        b.iter(|| simulator.parallel(10_000, 5))
    });
}
