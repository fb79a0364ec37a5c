//! Bucket keys for grouping benchmark records.

use std::fmt;

/// A closed set of bucket names a [`Group`](crate::Group) is keyed by.
///
/// `ALL` lists every key in rendering order, and `index` must return the
/// position of `self` within `ALL`.
pub trait BucketKey: Copy + Eq + fmt::Debug + 'static {
    /// Every key, in canonical order
    const ALL: &'static [Self];

    /// Position of this key within [`BucketKey::ALL`]
    fn index(self) -> usize;

    /// Short stable label (used for serialization and logging)
    fn label(self) -> &'static str;
}

/// Packages benchmarked by the native harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeBucket {
    /// End-to-end encryption package (`.../crypto/e2ee`)
    E2ee,
    /// Tunnel server hot path (`.../tunnel/server`)
    TunnelServer,
}

impl NativeBucket {
    /// Trailing package path segment that selects this bucket
    pub fn package_suffix(self) -> &'static str {
        match self {
            NativeBucket::E2ee => "/crypto/e2ee",
            NativeBucket::TunnelServer => "/tunnel/server",
        }
    }

    /// Resolve a full package path to its bucket, if it is one we track
    ///
    /// # Example
    /// ```
    /// use bench_types::NativeBucket;
    ///
    /// assert_eq!(
    ///     NativeBucket::from_package("example.com/crypto/e2ee"),
    ///     Some(NativeBucket::E2ee)
    /// );
    /// assert_eq!(NativeBucket::from_package("example.com/rpc"), None);
    /// ```
    pub fn from_package(package: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|bucket| package.ends_with(bucket.package_suffix()))
    }
}

impl BucketKey for NativeBucket {
    const ALL: &'static [Self] = &[NativeBucket::E2ee, NativeBucket::TunnelServer];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            NativeBucket::E2ee => "e2ee",
            NativeBucket::TunnelServer => "tunnel",
        }
    }
}

/// Sections printed by the script harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptSection {
    /// E2EE handshake benchmarks
    Handshake,
    /// E2EE record sealing/opening benchmarks
    Record,
    /// Stream multiplexer benchmarks
    Yamux,
}

impl ScriptSection {
    /// Substring that announces this section in the harness output
    pub fn marker(self) -> &'static str {
        match self {
            ScriptSection::Handshake => "> e2ee handshake",
            ScriptSection::Record => "> e2ee record",
            ScriptSection::Yamux => "> yamux",
        }
    }

    /// Find the section announced by `line`, if any
    pub fn from_marker_line(line: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|section| line.contains(section.marker()))
    }
}

impl BucketKey for ScriptSection {
    const ALL: &'static [Self] = &[
        ScriptSection::Handshake,
        ScriptSection::Record,
        ScriptSection::Yamux,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            ScriptSection::Handshake => "handshake",
            ScriptSection::Record => "record",
            ScriptSection::Yamux => "yamux",
        }
    }
}
