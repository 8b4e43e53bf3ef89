use std::env::args;
use wordmask::FilterStr;

pub fn main() {
    let input = args().skip(1).collect::<Vec<_>>().join(" ");
    match input.as_str().masked() {
        Some(filtered) => println!("\"{}\" -> \"{}\"", input, filtered),
        None => println!("nothing to filter"),
    }
}
