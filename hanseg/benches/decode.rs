use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use hanseg::{Decoder, Lexicon};

const DICT: &str = "\
结婚 30 v
的 300 uj
和 200 c
和尚 20 nr
尚未 15 d
未 10
都 60 d
是 250 v
很 80 d
靠谱 8 a
人士 12 n
北京 10 ns
大学 10 n
北京大学 100 nt
大学生 6 n
学生 40 n
生活 30 vn
";

const TEXT: &str = "结婚的和尚未结婚的，都是很nice cool的“靠谱人士”。\
北京大学的大学生都是很靠谱的人士，他们的生活很nice。";

fn bench_decode(c: &mut Criterion) {
    let lexicon = Lexicon::from_reader(DICT.as_bytes()).unwrap();
    let decoder = Decoder::new(lexicon);
    let text = TEXT.repeat(100);

    let mut group = c.benchmark_group("Decode");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("decode", |b| {
        b.iter(|| std::hint::black_box(decoder.decode(&text).count()))
    });

    group.bench_function("worker", |b| {
        let mut worker = decoder.new_worker();
        worker.reset_sentence(&text);
        b.iter(|| {
            worker.tokenize();
            std::hint::black_box(worker.num_tokens())
        })
    });

    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let dict = DICT.repeat(1000);
    let mut group = c.benchmark_group("DictionaryLoad");
    group.throughput(Throughput::Bytes(dict.len() as u64));
    group.bench_function("from_reader", |b| {
        b.iter(|| std::hint::black_box(Lexicon::from_reader(dict.as_bytes()).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_load);
criterion_main!(benches);
