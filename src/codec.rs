use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

use crate::heap::MinHeap;
use crate::tree::HuffNode;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("symbol {0:?} was not present when the codec was built")]
    UnknownSymbol(char),

    #[error("bit string does not end on a codeword boundary (left over: {0:?})")]
    MalformedInput(String),
}

/// Huffman codec over `char` symbols.
///
/// Built once from an input string: counts symbol frequencies, assembles the
/// coding tree by repeatedly merging the two least-frequent nodes out of a
/// [`MinHeap`], and derives the symbol/codeword tables from root-to-leaf
/// paths ('0' left, '1' right). The tables are immutable afterwards; `encode`
/// and `decode` only read them.
pub struct HuffmanCodec {
    encoder: HashMap<char, String>,
    decoder: HashMap<String, char>,
}

impl HuffmanCodec {
    pub fn new(input: &str) -> Self {
        let frequencies = count_frequencies(input);
        let tree = build_tree(&frequencies);

        let mut encoder = HashMap::new();
        let mut decoder = HashMap::new();
        if let Some(root) = &tree {
            build_tables(root, &mut encoder, &mut decoder);
        }

        HuffmanCodec { encoder, decoder }
    }

    /// Concatenates the codewords of every symbol in `input`.
    pub fn encode(&self, input: &str) -> Result<String, CodecError> {
        let mut bits = String::new();
        for symbol in input.chars() {
            let code = self
                .encoder
                .get(&symbol)
                .ok_or(CodecError::UnknownSymbol(symbol))?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Scans `bits` left to right, emitting a symbol each time the
    /// accumulated path matches a codeword. Codewords are prefix-free, so
    /// the first match is always the right one.
    pub fn decode(&self, bits: &str) -> Result<String, CodecError> {
        let mut output = String::new();
        let mut path = String::new();
        for bit in bits.chars() {
            path.push(bit);
            if let Some(symbol) = self.decoder.get(&path) {
                output.push(*symbol);
                path.clear();
            }
        }
        if !path.is_empty() {
            return Err(CodecError::MalformedInput(path));
        }
        Ok(output)
    }

    /// Read-only view of the symbol -> codeword table.
    pub fn encoding_table(&self) -> &HashMap<char, String> {
        &self.encoder
    }
}

pub(crate) fn count_frequencies(input: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in input.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Classic greedy construction: one leaf per distinct symbol goes into a
/// min-heap, then the two smallest nodes are merged until one remains.
/// Returns `None` for an empty alphabet; a single-symbol alphabet yields a
/// lone leaf as root.
///
/// Leaves are inserted in ascending symbol order and every node carries a
/// creation stamp, so equal-weight extractions resolve the same way on
/// every run.
fn build_tree(frequencies: &HashMap<char, usize>) -> Option<HuffNode> {
    let mut heap = MinHeap::new();
    let mut order = 0;
    for (&symbol, &weight) in frequencies.iter().sorted() {
        heap.insert(HuffNode::Leaf {
            weight,
            order,
            symbol,
        });
        order += 1;
    }

    while heap.size() > 1 {
        let left = heap.remove_min().ok()?;
        let right = heap.remove_min().ok()?;
        heap.insert(HuffNode::merge(order, left, right));
        order += 1;
    }
    heap.remove_min().ok()
}

/// Iterative depth-first walk accumulating the path to each leaf. A root
/// that is itself a leaf (single-symbol alphabet) would get the empty path,
/// which cannot frame a decode, so it is assigned the one-bit code "0".
fn build_tables(
    root: &HuffNode,
    encoder: &mut HashMap<char, String>,
    decoder: &mut HashMap<String, char>,
) {
    let mut stack = vec![(root, String::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                let code = if path.is_empty() {
                    "0".to_string()
                } else {
                    path
                };
                encoder.insert(*symbol, code.clone());
                decoder.insert(code, *symbol);
            }
            HuffNode::Internal { left, right, .. } => {
                stack.push((right, format!("{}1", path)));
                stack.push((left, format!("{}0", path)));
            }
        }
    }
}
