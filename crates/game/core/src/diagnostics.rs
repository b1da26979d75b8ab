//! Grouping of the engine's diagnostic annotations.
//!
//! The rules engine annotates each resolved check with flat ASCII tags of the
//! shape `namespace[:sub...]:key=value`, or `namespace[:sub...]:flag` for
//! boolean flags. This module is the single place those strings are split.
//!
//! Namespaces are matched longest prefix first, so `att:calc:` and `def:calc:`
//! never land in the generic `calc:` group. Unrecognised namespaces and
//! malformed tags are dropped from the groups but kept in the raw list.

use arrayvec::ArrayVec;
use strum::EnumCount;
use tracing::trace;

/// Version of the typed record produced from the tag wire format.
pub const TAG_FORMAT_VERSION: u16 = 1;

/// Implicit value of a flag tag (no `=`).
const FLAG_VALUE: &str = "1";

/// Recognised diagnostic namespaces.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumCount,
    strum::AsRefStr,
    strum::Display,
)]
pub enum TagNamespace {
    /// Attacker-side intermediate values.
    #[strum(serialize = "att:calc")]
    AttCalc,
    /// Defender-side intermediate values.
    #[strum(serialize = "def:calc")]
    DefCalc,
    /// Outcome of the exchange.
    #[strum(serialize = "combat")]
    Combat,
    /// Generic calculation values.
    #[strum(serialize = "calc")]
    Calc,
}

impl TagNamespace {
    /// Matching order: longest prefix first.
    pub const ALL: [TagNamespace; TagNamespace::COUNT] = [
        TagNamespace::AttCalc,
        TagNamespace::DefCalc,
        TagNamespace::Combat,
        TagNamespace::Calc,
    ];

    /// Wire prefix including the trailing separator.
    pub const fn prefix(self) -> &'static str {
        match self {
            TagNamespace::AttCalc => "att:calc:",
            TagNamespace::DefCalc => "def:calc:",
            TagNamespace::Combat => "combat:",
            TagNamespace::Calc => "calc:",
        }
    }

    /// Splits a raw tag into its namespace and the remainder after the prefix.
    fn match_prefix(tag: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|namespace| {
            tag.strip_prefix(namespace.prefix()).map(|rest| (namespace, rest))
        })
    }
}

/// One parsed annotation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagEntry {
    pub namespace: TagNamespace,
    pub key: String,
    pub value: String,
}

impl TagEntry {
    /// Parses one raw tag; `None` for unrecognised or malformed tags.
    ///
    /// The key runs up to the first `=`; a tag without `=` is a flag with
    /// value `"1"`. An empty key is malformed.
    pub fn parse(tag: &str) -> Option<Self> {
        let (namespace, rest) = TagNamespace::match_prefix(tag)?;
        let (key, value) = rest.split_once('=').unwrap_or((rest, FLAG_VALUE));
        if key.is_empty() {
            return None;
        }

        Some(Self {
            namespace,
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }

    pub fn is_flag(&self) -> bool {
        self.value == FLAG_VALUE
    }
}

/// Entries of one namespace in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagGroup {
    pub namespace: TagNamespace,
    pub entries: Vec<TagEntry>,
}

/// Parsed annotations grouped by namespace, plus the untouched originals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagBreakdown {
    pub version: u16,
    groups: ArrayVec<TagGroup, { TagNamespace::COUNT }>,
    raw: Vec<String>,
}

impl TagBreakdown {
    /// Entries of `namespace`; empty if none were recognised.
    pub fn group(&self, namespace: TagNamespace) -> &[TagEntry] {
        self.groups
            .iter()
            .find(|group| group.namespace == namespace)
            .map(|group| group.entries.as_slice())
            .unwrap_or_default()
    }

    /// Non-empty groups in namespace matching order.
    pub fn groups(&self) -> impl Iterator<Item = &TagGroup> {
        self.groups.iter()
    }

    /// Every original tag, recognised or not, for fallback display.
    pub fn raw(&self) -> &[String] {
        &self.raw
    }

    /// Looks up the first value recorded for `key` within `namespace`.
    pub fn value(&self, namespace: TagNamespace, key: &str) -> Option<&str> {
        self.group(namespace)
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Number of raw tags that did not make it into any group.
    pub fn dropped(&self) -> usize {
        let grouped: usize = self.groups.iter().map(|group| group.entries.len()).sum();
        self.raw.len() - grouped
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Groups raw diagnostic tags by namespace, preserving relative order.
///
/// Never fails: tags outside the recognised namespaces, or with an empty key,
/// are skipped.
pub fn parse_tags<I, S>(tags: I) -> TagBreakdown
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buckets: [Vec<TagEntry>; TagNamespace::COUNT] = Default::default();
    let mut raw = Vec::new();

    for tag in tags {
        let tag = tag.as_ref();
        raw.push(tag.to_owned());

        match TagEntry::parse(tag) {
            Some(entry) => {
                let slot = TagNamespace::ALL
                    .iter()
                    .position(|namespace| *namespace == entry.namespace)
                    .unwrap_or_default();
                buckets[slot].push(entry);
            }
            None => trace!(tag, "skipping unrecognised diagnostic tag"),
        }
    }

    let groups = TagNamespace::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(namespace, entries)| TagGroup { namespace, entries })
        .collect();

    TagBreakdown {
        version: TAG_FORMAT_VERSION,
        groups,
        raw,
    }
}
