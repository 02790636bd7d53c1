use binops::{Endian, batch, load_words, needs_padding, rotate_left, swap_byte_order};
use divan::counter::BytesCount;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

static PLAIN_TEXT_16: &str = "abcdefghijklmnop";

const WORDS: [usize; 3] = [2usize.pow(10), 2usize.pow(16), 2usize.pow(20)];
const WORDS_PAR: [usize; 4] = [
    2usize.pow(10),
    2usize.pow(16),
    2usize.pow(20),
    2usize.pow(24),
];

fn main() {
    divan::main();
}

trait BenchWidth {
    type W: binops::Word + Send + Sync;
}

macro_rules! impl_bench_width {
    ($name:ident, $t:ty) => {
        struct $name;
        impl BenchWidth for $name {
            type W = $t;
        }
    };
}

impl_bench_width!(Word16, u16);
impl_bench_width!(Word32, u32);
impl_bench_width!(Word64, u64);

fn input<W: binops::Word>(len: usize) -> Vec<W> {
    let word_bytes = (binops::bits::<W>().unwrap() / 8) as usize;
    let text = PLAIN_TEXT_16.repeat((len * word_bytes).div_ceil(16));
    let mut words: Vec<W> = load_words(text.as_bytes(), Endian::Little).unwrap();
    words.truncate(len);
    words
}

#[divan::bench(types = [Word16, Word32, Word64])]
fn rotate_scalar<C: BenchWidth>(bencher: divan::Bencher) {
    let x = input::<C::W>(1)[0];
    bencher.bench_local(|| rotate_left(divan::black_box(x), divan::black_box(5)));
}

#[divan::bench(types = [Word16, Word32, Word64])]
fn swap_scalar<C: BenchWidth>(bencher: divan::Bencher) {
    let x = input::<C::W>(1)[0];
    bencher.bench_local(|| swap_byte_order(divan::black_box(x)));
}

#[divan::bench(types = [Word16, Word32, Word64], args = WORDS)]
fn rotate_slice<C: BenchWidth>(bencher: divan::Bencher, len: usize) {
    let words = input::<C::W>(len);

    bencher
        .counter(BytesCount::of_slice(&words))
        .with_inputs(|| words.clone())
        .bench_local_values(|mut buffer| {
            batch::rotate_left_slice(&mut buffer, 5).unwrap();
            divan::black_box(buffer);
        });
}

#[divan::bench(types = [Word16, Word32, Word64], args = WORDS_PAR)]
fn rotate_par<C: BenchWidth>(bencher: divan::Bencher, len: usize) {
    let words = input::<C::W>(len);

    bencher
        .counter(BytesCount::of_slice(&words))
        .with_inputs(|| words.clone())
        .bench_local_values(|mut buffer| {
            batch::rotate_left_par(&mut buffer, 5).unwrap();
            divan::black_box(buffer);
        });
}

#[divan::bench(types = [Word16, Word32, Word64], args = WORDS)]
fn swap_slice<C: BenchWidth>(bencher: divan::Bencher, len: usize) {
    let words = input::<C::W>(len);

    bencher
        .counter(BytesCount::of_slice(&words))
        .with_inputs(|| words.clone())
        .bench_local_values(|mut buffer| {
            batch::swap_byte_order_slice(&mut buffer).unwrap();
            divan::black_box(buffer);
        });
}

#[divan::bench(args = WORDS_PAR)]
fn swap_auto(bencher: divan::Bencher, len: usize) {
    let words = input::<u32>(len);

    bencher
        .counter(BytesCount::of_slice(&words))
        .with_inputs(|| words.clone())
        .bench_local_values(|mut buffer| {
            batch::swap_byte_order_auto(&mut buffer).unwrap();
            divan::black_box(buffer);
        });
}

#[divan::bench(args = WORDS)]
fn padding_scan(bencher: divan::Bencher, len: usize) {
    let bytes = PLAIN_TEXT_16.repeat(len.div_ceil(16)).into_bytes();

    bencher.counter(BytesCount::new(len)).bench_local(|| {
        (0..len)
            .filter(|&end| needs_padding(&bytes[..end], 16).unwrap_or(true))
            .count()
    });
}
