use spot_it::core::{DeckConfig, LayoutMode, LayoutRng, SymbolId};
use spot_it::layout::{FreePacking, Overrides, Point};
use spot_it::session::DeckSession;
use spot_it::{generate, verify_deck};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        generating_prime_deck,
        generating_field_deck,
        verifying_deck,
        packing_one_card,
        laying_out_scatter_deck,
}

fn generating_prime_deck(c: &mut criterion::Criterion) {
    c.bench_function("generate an order-8 deck", |b| {
        b.iter(|| generate(criterion::black_box(8)))
    });
}

fn generating_field_deck(c: &mut criterion::Criterion) {
    c.bench_function("generate an order-9 deck over GF(8)", |b| {
        b.iter(|| generate(criterion::black_box(9)))
    });
}

fn verifying_deck(c: &mut criterion::Criterion) {
    let deck = generate(8).expect("order 8 is valid");
    c.bench_function("verify an order-8 deck", |b| b.iter(|| verify_deck(&deck)));
}

fn packing_one_card(c: &mut criterion::Criterion) {
    let packing = FreePacking::new(Point::new(250.0, 250.0), 230.0, 80.0);
    let symbols: Vec<SymbolId> = (0..8).map(SymbolId).collect();
    c.bench_function("free-pack 8 symbols", |b| {
        b.iter(|| packing.layout(&symbols, &mut LayoutRng::new(42)))
    });
}

fn laying_out_scatter_deck(c: &mut criterion::Criterion) {
    let config = DeckConfig::default().with_order(8).with_mode(LayoutMode::Scatter);
    let assets: Vec<String> = (0..57).map(|i| format!("{i}.png")).collect();
    let session = DeckSession::new(config, assets).expect("valid session");
    c.bench_function("scatter-layout an order-8 deck", |b| {
        b.iter(|| session.sheets(&Overrides::new()))
    });
}
