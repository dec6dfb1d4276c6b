use clap::Parser;
use rhuffman::HuffmanCodec;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text to encode and decode back
    #[arg(short, long, default_value = "hello huffman")]
    text: String,
}

fn main() {
    let args = Args::parse();

    let codec = HuffmanCodec::new(&args.text);
    let encoded = codec.encode(&args.text).expect("Error during encoding");
    let decoded = codec.decode(&encoded).expect("Error during decoding");

    println!("Encoded: {}", encoded);
    println!("Decoded: {}", decoded);
}
