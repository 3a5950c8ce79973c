//! Link Resolver: fills head/deprel or SRL roles from typed `linkGrp`s.
//!
//! All three layers share one algorithm. They differ in the `linkGrp`
//! type they read, the prefix stripped from each `ana` label, and the
//! label that marks the virtual root:
//!
//! | layer | group     | label prefix | root    |
//! |-------|-----------|--------------|---------|
//! | UD    | `UD-SYN`  | `ud-syn:`    | `root`  |
//! | JOS   | `JOS-SYN` | `jos-syn:`   | `modra` |
//! | SRL   | `SRL`     | `srl:`       | -       |

use smol_str::SmolStr;

use super::msd::{position_of, strip_fixed_prefix};
use crate::conllu::{Sentence, misc};
use crate::error::{ConvertError, Result};
use crate::tei::{Element, attr, tag};

/// A typed link annotation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkLayer {
    Ud,
    Jos,
    Srl,
}

impl LinkLayer {
    /// Value of the `linkGrp/@type` attribute for this layer.
    pub fn group_type(self) -> &'static str {
        match self {
            Self::Ud => "UD-SYN",
            Self::Jos => "JOS-SYN",
            Self::Srl => "SRL",
        }
    }

    /// Length of the label prefix on `link/@ana`.
    pub fn label_prefix_len(self) -> usize {
        match self {
            Self::Ud => 7,
            Self::Jos => 8,
            Self::Srl => 4,
        }
    }

    /// Label whose head is the virtual root (position 0).
    pub fn root_label(self) -> Option<&'static str> {
        match self {
            Self::Ud => Some("root"),
            Self::Jos => Some("modra"),
            Self::Srl => None,
        }
    }
}

/// Counters from resolving one or more link groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    pub applied: usize,
    /// Links that replaced an assignment made earlier in the same layer.
    pub overwritten: usize,
}

impl LinkStats {
    pub fn merge(&mut self, other: LinkStats) {
        self.applied += other.applied;
        self.overwritten += other.overwritten;
    }
}

/// Whether the sentence has any `linkGrp` at all.
pub fn has_link_groups(sentence: &Element) -> bool {
    sentence.tei_children(tag::LINK_GROUP).next().is_some()
}

/// Resolve every link of `layer` in the source sentence onto `out`.
///
/// A sentence without a group of this type is left untouched. When two
/// links address the same dependent, the later one wins.
pub fn resolve_links(layer: LinkLayer, source: &Element, out: &mut Sentence) -> Result<LinkStats> {
    let mut stats = LinkStats::default();
    let mut assigned = vec![false; out.len()];

    let groups = source
        .tei_children(tag::LINK_GROUP)
        .filter(|group| group.attr(attr::TYPE) == Some(layer.group_type()));

    for group in groups {
        for link in group.tei_children(tag::LINK) {
            let dependent = match layer {
                LinkLayer::Ud | LinkLayer::Jos => apply_dependency(layer, link, out)?,
                LinkLayer::Srl => apply_role(link, out)?,
            };

            stats.applied += 1;
            let slot = &mut assigned[dependent - 1];
            if *slot {
                stats.overwritten += 1;
                tracing::warn!(
                    "{} link {} overwrites an earlier assignment for token {}",
                    layer.group_type(),
                    link.describe(),
                    dependent
                );
            }
            *slot = true;
        }
    }

    Ok(stats)
}

/// Apply one head/dependent link, returning the dependent position.
fn apply_dependency(layer: LinkLayer, link: &Element, out: &mut Sentence) -> Result<usize> {
    let label = link_label(layer, link)?;
    let target = link.require_attr(attr::TARGET)?;

    let mut refs = target.split_whitespace();
    let (Some(head_ref), Some(dependent_ref), None) = (refs.next(), refs.next(), refs.next())
    else {
        return Err(ConvertError::invalid_attribute(format!(
            "target '{target}' on {} must name a head and a dependent",
            link.describe()
        )));
    };

    let head = if layer.root_label() == Some(label) {
        0
    } else {
        let head = position_of(head_ref)?;
        if head > out.len() {
            return Err(out_of_range(head_ref, head, out));
        }
        head
    };
    let dependent = position_of(dependent_ref)?;

    let len = out.len();
    let token = out
        .token_mut(dependent)
        .ok_or_else(|| ConvertError::unresolved(range_message(dependent_ref, dependent, len)))?;
    token.head = Some(head);
    token.deprel = Some(SmolStr::new(label));

    Ok(dependent)
}

/// Apply one semantic role link, returning the dependent position.
fn apply_role(link: &Element, out: &mut Sentence) -> Result<usize> {
    let label = link_label(LinkLayer::Srl, link)?;
    let target = link.require_attr(attr::TARGET)?;
    let dependent_ref = target.split_whitespace().last().ok_or_else(|| {
        ConvertError::invalid_attribute(format!("empty target on {}", link.describe()))
    })?;
    let dependent = position_of(dependent_ref)?;

    let len = out.len();
    let token = out
        .token_mut(dependent)
        .ok_or_else(|| ConvertError::unresolved(range_message(dependent_ref, dependent, len)))?;
    token.set_misc(misc::SRL, label);

    Ok(dependent)
}

fn link_label<'a>(layer: LinkLayer, link: &'a Element) -> Result<&'a str> {
    let ana = link.require_attr(attr::ANA)?;
    strip_fixed_prefix(ana, layer.label_prefix_len(), "link ana")
}

fn out_of_range(reference: &str, position: usize, out: &Sentence) -> ConvertError {
    ConvertError::unresolved(range_message(reference, position, out.len()))
}

fn range_message(reference: &str, position: usize, len: usize) -> String {
    format!("'{reference}' (position {position}) is outside a sentence of {len} tokens")
}
