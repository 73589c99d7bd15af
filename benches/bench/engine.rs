// std imports
use std::hint::black_box;

// third-party imports
use criterion::{BatchSize, Criterion, Throughput, criterion_group};

// local imports
use lexstream::{Engine, Error, OrphanBehavior, Tokenize};

criterion_group!(benches, bench);

fn bench(c: &mut Criterion) {
    let mut group = super::configure(c, "engine");

    let words = "lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(256);
    group.throughput(Throughput::Elements(words.chars().count() as u64));

    group.bench_function("words", |b| {
        b.iter_batched(
            || Engine::new(words.chars()),
            |mut engine| {
                let count = engine.drive(&mut Words).map(|engine| engine.tokens().len());
                black_box(count)
            },
            BatchSize::SmallInput,
        );
    });

    for orphan in [OrphanBehavior::Consume, OrphanBehavior::Discard, OrphanBehavior::PutBack] {
        group.bench_function(format!("consume{}{:?}", super::ND, orphan).to_lowercase(), |b| {
            b.iter_batched(
                || Engine::<char>::new(words.chars()),
                |mut engine| {
                    while let Ok(consume) = engine.consume(orphan) {
                        black_box(consume.take_while(|c| !c.is_whitespace()));
                        if orphan == OrphanBehavior::PutBack {
                            engine.take_one().ok();
                        }
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("take-n", |b| {
        b.iter_batched(
            || Engine::<char>::new(words.chars()),
            |mut engine| while engine.take_n(black_box(8)).is_ok() {},
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

struct Words;

impl Tokenize<char, usize> for Words {
    type Error = Error;

    fn on_next_value(&mut self, value: char, engine: &mut Engine<char, usize>) -> Result<(), Error> {
        if !value.is_whitespace() {
            let word = engine
                .consume_seeded(value, OrphanBehavior::Discard)
                .take_until(|c| c.is_whitespace());
            engine.push_token(word.len());
        }
        Ok(())
    }
}
