//! Basic scalar and sequence loading.
//!
//! Run with: cargo run --example simple

use slashload::{load, IntDecoder, SeqDecoder, TextDecoder};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A lone token is a scalar
    let n = load("33", &IntDecoder)?;
    println!("{}", n);

    let s = load("abc", &TextDecoder)?;
    println!("{}", s);

    // A sequence is a count token followed by that many elements
    let fruit = load("3/apple/banana/cherry", &SeqDecoder::new(TextDecoder))?;
    println!("{:?}", fruit);

    // Nesting is just nesting of capability values
    let grid = load("2/3/1/2/3/2/4/5", &SeqDecoder::new(SeqDecoder::new(IntDecoder)))?;
    println!("{:?}", grid);

    Ok(())
}
