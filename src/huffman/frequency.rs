use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;
use std::sync::mpsc;

use threadpool::ThreadPool;

use super::{is_countable, Symbol, SymbolFrequency, SYMBOL_LIMIT};
use crate::{error::Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountingOptions {
    pub parallel: bool,
    pub number_of_threads: usize,
}

impl Default for CountingOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            number_of_threads: 1,
        }
    }
}

struct SymbolCounter {
    symbol_frequencies: [usize; SYMBOL_LIMIT],
}

impl SymbolCounter {
    fn new() -> Self {
        Self {
            symbol_frequencies: [usize::default(); SYMBOL_LIMIT],
        }
    }

    fn count(&mut self, text: &[u8]) {
        for &symbol in text.iter().filter(|&&symbol| is_countable(symbol)) {
            self.symbol_frequencies[symbol as usize] += 1;
        }
    }

    fn merge(&mut self, other: &SymbolCounter) {
        for (total, partial) in self
            .symbol_frequencies
            .iter_mut()
            .zip(other.symbol_frequencies.iter())
        {
            *total += partial;
        }
    }

    fn into_frequencies(self) -> BTreeMap<Symbol, usize> {
        (0..=Symbol::MAX)
            .zip(self.symbol_frequencies)
            .filter(|&(_, f)| f > 0)
            .collect()
    }
}

fn split_into_shards(length: usize, number_of_shards: usize) -> Vec<Range<usize>> {
    let shard_size = length.div_ceil(number_of_shards.max(1)).max(1);
    (0..length)
        .step_by(shard_size)
        .map(|start| start..usize::min(start + shard_size, length))
        .collect()
}

/// Every shard is copied to its worker and counted into a private counter
/// there, the partial counters are summed on the calling thread.
fn count_in_parallel(text: &[u8], number_of_threads: usize) -> Result<SymbolCounter> {
    let shards = split_into_shards(text.len(), number_of_threads);
    let expected = shards.len();
    let threadpool = ThreadPool::new(number_of_threads.clamp(1, expected.max(1)));
    let (sender, receiver) = mpsc::channel();

    for shard in shards {
        let shard = text[shard].to_vec();
        let sender = sender.clone();
        threadpool.execute(move || {
            let mut counter = SymbolCounter::new();
            counter.count(&shard);
            // the receiver outlives all workers
            let _ = sender.send(counter);
        });
    }
    drop(sender);

    let mut total = SymbolCounter::new();
    let mut received = 0;
    for partial in receiver.iter() {
        total.merge(&partial);
        received += 1;
    }
    if received != expected {
        return Err(Error::FrequencyCountingIncomplete { expected, received });
    }
    log::debug!("Merged {} partial counts", received);
    Ok(total)
}

#[derive(Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    frequencies: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn count(text: &[u8], options: &CountingOptions) -> Result<Self> {
        let counter = if options.parallel && options.number_of_threads > 1 {
            count_in_parallel(text, options.number_of_threads)?
        } else {
            let mut counter = SymbolCounter::new();
            counter.count(text);
            counter
        };
        let frequencies = counter.into_frequencies();
        log::info!(
            "Counted {} distinct symbols in {} bytes",
            frequencies.len(),
            text.len()
        );
        Ok(Self { frequencies })
    }

    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.frequencies.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolFrequency> + '_ {
        self.frequencies
            .iter()
            .map(|(&symbol, &frequency)| SymbolFrequency::new(symbol, frequency))
    }
}

impl FromIterator<SymbolFrequency> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = SymbolFrequency>>(symbol_frequencies: T) -> Self {
        let mut frequencies = BTreeMap::new();
        for sf in symbol_frequencies.into_iter().filter(|sf| sf.frequency > 0) {
            *frequencies.entry(sf.symbol).or_insert(0) += sf.frequency;
        }
        Self { frequencies }
    }
}

/// Symbols grouped by their frequency. Iteration is ascending by frequency
/// and ascending by symbol within one frequency.
#[derive(Debug, PartialEq, Eq)]
pub struct FrequencyBucket {
    buckets: BTreeMap<usize, BTreeSet<Symbol>>,
}

impl FrequencyBucket {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn symbols_with_frequency(&self, frequency: usize) -> Option<&BTreeSet<Symbol>> {
        self.buckets.get(&frequency)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (usize, &BTreeSet<Symbol>)> + '_ {
        self.buckets
            .iter()
            .map(|(&frequency, symbols)| (frequency, symbols))
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolFrequency> + '_ {
        self.buckets().flat_map(|(frequency, symbols)| {
            symbols
                .iter()
                .map(move |&symbol| SymbolFrequency::new(symbol, frequency))
        })
    }
}

impl From<&FrequencyTable> for FrequencyBucket {
    fn from(table: &FrequencyTable) -> Self {
        let mut buckets: BTreeMap<usize, BTreeSet<Symbol>> = BTreeMap::new();
        for sf in table.iter() {
            buckets.entry(sf.frequency).or_default().insert(sf.symbol);
        }
        Self { buckets }
    }
}
