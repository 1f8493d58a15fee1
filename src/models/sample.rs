// Interface counter samples and the capacity-bounded snapshot they live in

/// Most interfaces tracked in one snapshot. Entries past the cap are dropped.
pub const MAX_INTERFACES: usize = 32;

/// Longest stored interface name, in characters.
pub const MAX_NAME_LEN: usize = 15;

/// Cumulative counters of one interface at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceSample {
    pub name: String,
    pub rx_bytes: u64,
    pub tx_bytes: u64,
}

impl InterfaceSample {
    /// Builds a sample, truncating `name` to [`MAX_NAME_LEN`] characters.
    pub fn new(name: &str, rx_bytes: u64, tx_bytes: u64) -> Self {
        Self {
            name: name.chars().take(MAX_NAME_LEN).collect(),
            rx_bytes,
            tx_bytes,
        }
    }
}

/// Samples taken from a single read of the counter source, in source order.
/// Holds at most [`MAX_INTERFACES`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    samples: Vec<InterfaceSample>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(MAX_INTERFACES),
        }
    }

    /// Appends a sample. Returns false (and drops the sample) once the snapshot is full.
    pub fn push(&mut self, sample: InterfaceSample) -> bool {
        if self.is_full() {
            return false;
        }
        self.samples.push(sample);
        true
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() >= MAX_INTERFACES
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[InterfaceSample] {
        &self.samples
    }

    /// First sample with exactly this name.
    pub fn get(&self, name: &str) -> Option<&InterfaceSample> {
        self.samples.iter().find(|s| s.name == name)
    }
}

impl FromIterator<InterfaceSample> for Snapshot {
    fn from_iter<I: IntoIterator<Item = InterfaceSample>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for sample in iter {
            if !snapshot.push(sample) {
                break;
            }
        }
        snapshot
    }
}
