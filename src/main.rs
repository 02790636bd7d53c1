//! Profile the primitives over a generated buffer.
//! Usage: cargo run --release -- rotate 1000000
//! Usage: cargo run --release -- swap_par 1000000
use binops::{Endian, batch, load_words, needs_padding, store_words};
use mimalloc::MiMalloc;
use std::env;
use std::error::Error;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const BLOCK_SIZE: usize = 16;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let (test, text_len) = match &args[..] {
        [_, test, text_len, ..] => (test.as_str(), text_len.parse::<usize>()?),
        _ => return Err("usage: binops <rotate|rotate_par|swap|swap_par|padding> <count>".into()),
    };

    let base_text = "abcdefghijklmnop".to_string();
    let text = base_text.repeat(text_len);
    let words: Vec<u32> = load_words(text.as_bytes(), Endian::Little)?;

    match test {
        "rotate" => {
            let mut data = words.clone();
            batch::rotate_left_slice(&mut data, 7)?;
            batch::rotate_right_slice(&mut data, 7)?;
            assert_eq!(data, words);
        }
        "rotate_par" => {
            let mut data = words.clone();
            batch::rotate_left_par(&mut data, 7)?;
            batch::rotate_right_par(&mut data, 7)?;
            assert_eq!(data, words);
        }
        "swap" => {
            let mut data = words.clone();
            batch::swap_byte_order_slice(&mut data)?;
            assert_eq!(store_words(&data, Endian::Big)?, text.as_bytes());
        }
        "swap_par" => {
            let mut data = words.clone();
            batch::swap_byte_order_par(&mut data)?;
            assert_eq!(store_words(&data, Endian::Big)?, text.as_bytes());
        }
        "padding" => {
            let bytes = text.as_bytes();
            for end in 0..bytes.len().min(1 << 20) {
                let ragged = needs_padding(&bytes[..end], BLOCK_SIZE)?;
                assert_eq!(ragged, end == 0 || end % BLOCK_SIZE != 0);
            }
        }
        _ => {
            return Err(format!("Unknown test: {}", test).into());
        }
    }
    Ok(())
}
