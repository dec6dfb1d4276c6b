pub mod codec;
pub mod heap;
mod tree;

pub use codec::{CodecError, HuffmanCodec};
pub use heap::{HeapError, MinHeap};
