//! Loading the same data under different delimiters.
//!
//! Run with: cargo run --example custom_delimiter

use slashload::{
    load, load_with_options, Delimiter, IntDecoder, LoadOptions, SeqDecoder, TextDecoder,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Default format (slash delimiter)
    println!("Slash delimiter:");
    let fruit = load("3/apple/banana/cherry", &SeqDecoder::new(TextDecoder))?;
    println!("{:?}\n", fruit);

    // Comma delimiter (useful when token content contains slashes)
    println!("Comma delimiter:");
    let comma_options = LoadOptions::new().with_delimiter(Delimiter::Comma);
    let paths = load_with_options(
        "2,src/lib.rs,src/de.rs",
        &SeqDecoder::new(TextDecoder),
        &comma_options,
    )?;
    println!("{:?}\n", paths);

    // Pipe delimiter (useful for shell processing)
    println!("Pipe delimiter:");
    let pipe_options = LoadOptions::new().with_delimiter(Delimiter::Pipe);
    let numbers = load_with_options("4|2|4|8|16", &SeqDecoder::new(IntDecoder), &pipe_options)?;
    println!("{:?}", numbers);

    Ok(())
}
