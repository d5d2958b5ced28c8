//! Ordered, named collections of RGB colors with nearest-match lookup.

use std::collections::HashMap;

use crate::cache::LookupCache;
use crate::core::{find_closest, DistanceMetric};
use crate::error::{EmptyGroupError, NotFoundError};
use crate::model::RgbColor;

/// A named member of a [`ColorGroup`].
///
/// A member pairs a name with an RGB color and remembers its zero-based
/// position in the group's declaration order. That position drives the
/// tie-break for nearest-match lookups, so it is part of the member's
/// identity, and two members are equal only if position, name, and color all
/// agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    index: usize,
    name: String,
    color: RgbColor,
}

impl Member {
    /// Access the member's zero-based position in declaration order.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Access the member's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the member's color.
    #[inline]
    pub fn color(&self) -> &RgbColor {
        &self.color
    }
}

impl std::fmt::Display for Member {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{} ({})", self.name, self.color))
    }
}

// ====================================================================================================================

/// An ordered, named palette of RGB colors.
///
/// A color group is constructed once from a sequence of name and color pairs
/// and is read-only thereafter. The declaration order of that sequence is
/// preserved by iteration and determines both the positions reported by
/// [`Member::index`] and the winner among equidistant members during
/// nearest-match lookup. Several names may share one RGB value; such synonyms
/// are kept as distinct members, with value lookup resolving to the earliest
/// one. Duplicate names are kept as well, with name lookup also resolving to
/// the earliest occurrence.
///
/// Nearest-match lookups through [`closest`](Self::closest) are memoized in a
/// bounded cache owned by the group, keyed by the queried color and the
/// active [`DistanceMetric`].
///
/// # Examples
///
/// ```
/// # use chromatch::{rgb, ColorGroup};
/// let group = ColorGroup::new(
///     "traffic light",
///     [
///         ("Stop", rgb!(204, 0, 0)),
///         ("Wait", rgb!(255, 192, 0)),
///         ("Go", rgb!(0, 153, 51)),
///     ],
/// );
///
/// assert_eq!(group.by_name("Wait")?.color(), &rgb!(255, 192, 0));
/// assert_eq!(group.closest(&rgb!(250, 20, 20))?.name(), "Stop");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ColorGroup {
    name: String,
    members: Vec<Member>,
    /// The members' channels in declaration order, for the distance scan.
    channels: Vec<[u8; 3]>,
    name_index: HashMap<String, usize>,
    value_index: HashMap<RgbColor, usize>,
    closest_memo: LookupCache<(RgbColor, DistanceMetric), usize>,
}

impl ColorGroup {
    /// Create a new color group from the given name and color pairs.
    ///
    /// The pairs are kept in declaration order. For duplicate names and for
    /// duplicate colors alike, exact lookup resolves to the first declared
    /// occurrence.
    pub fn new<N, S, M>(name: N, members: M) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        M: IntoIterator<Item = (S, RgbColor)>,
    {
        let members: Vec<Member> = members
            .into_iter()
            .enumerate()
            .map(|(index, (name, color))| Member {
                index,
                name: name.into(),
                color,
            })
            .collect();

        let channels = members
            .iter()
            .map(|member| member.color.channels())
            .collect();

        let mut name_index = HashMap::with_capacity(members.len());
        let mut value_index = HashMap::with_capacity(members.len());
        for member in &members {
            name_index
                .entry(member.name.clone())
                .or_insert(member.index);
            value_index
                .entry(member.color.clone())
                .or_insert(member.index);
        }

        Self {
            name: name.into(),
            members,
            channels,
            name_index,
            value_index,
            closest_memo: LookupCache::new(),
        }
    }

    /// Access the group's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Determine the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Determine whether the group has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up the member with the given name.
    ///
    /// If several members share the name, this method resolves to the first
    /// declared one. It fails with a [`NotFoundError`] if no member has the
    /// name; names are matched exactly, including case.
    pub fn by_name(&self, name: &str) -> Result<&Member, NotFoundError> {
        self.name_index
            .get(name)
            .map(|&index| &self.members[index])
            .ok_or_else(|| NotFoundError::Name {
                group: self.name.clone(),
                name: name.to_string(),
            })
    }

    /// Look up the member with exactly the given color.
    ///
    /// If several members share the color, this method resolves to the first
    /// declared one. It fails with a [`NotFoundError`] if no member matches
    /// exactly; use [`closest`](Self::closest) for tolerant lookup.
    pub fn by_value(&self, color: &RgbColor) -> Result<&Member, NotFoundError> {
        self.value_index
            .get(color)
            .map(|&index| &self.members[index])
            .ok_or_else(|| NotFoundError::Value {
                group: self.name.clone(),
                color: color.clone(),
            })
    }

    /// Find the member closest to the given color under the default metric.
    ///
    /// See [`closest_with`](Self::closest_with).
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{rgb, ColorGroup};
    /// let group = ColorGroup::new(
    ///     "grays",
    ///     [("Black", rgb!(0, 0, 0)), ("White", rgb!(255, 255, 255))],
    /// );
    /// assert_eq!(group.closest(&rgb!(10, 10, 10))?.name(), "Black");
    /// # Ok::<(), chromatch::error::EmptyGroupError>(())
    /// ```
    pub fn closest(&self, color: &RgbColor) -> Result<&Member, EmptyGroupError> {
        self.closest_with(color, DistanceMetric::default())
    }

    /// Find the member closest to the given color under the given metric.
    ///
    /// A color that equals some member's value resolves to that member
    /// directly, without scoring any distances; under synonyms, the first
    /// declared member with that value wins. Any other color is scored
    /// against every member and resolves to the member with the smallest
    /// distance. Equidistant members resolve to the earliest declared one,
    /// so the result is deterministic and repeatable. Results of the scan
    /// are memoized per color and metric.
    ///
    /// The lookup fails only if the group has no members at all.
    pub fn closest_with(
        &self,
        color: &RgbColor,
        metric: DistanceMetric,
    ) -> Result<&Member, EmptyGroupError> {
        if let Some(&index) = self.value_index.get(color) {
            return Ok(&self.members[index]);
        }
        if self.members.is_empty() {
            return Err(EmptyGroupError);
        }

        let index = self
            .closest_memo
            .get_or_insert_with((color.clone(), metric), || {
                find_closest(&color.channels(), &self.channels, |origin, candidate| {
                    metric.between(origin, candidate)
                })
                .unwrap_or_default()
            });
        Ok(&self.members[index])
    }

    /// Iterate over the members in declaration order.
    #[inline]
    pub fn iter(&self) -> Members<'_> {
        Members {
            members: &self.members,
            front: 0,
            back: self.members.len(),
        }
    }

    /// Iterate over the members in reverse declaration order.
    #[inline]
    pub fn reverse_iter(&self) -> std::iter::Rev<Members<'_>> {
        self.iter().rev()
    }
}

impl std::fmt::Debug for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorGroup")
            .field("name", &self.name)
            .field("members", &self.members)
            .finish()
    }
}

impl<'g> IntoIterator for &'g ColorGroup {
    type Item = &'g Member;
    type IntoIter = Members<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ====================================================================================================================

/// A double-ended iterator over a group's members in declaration order.
#[derive(Clone, Debug)]
pub struct Members<'g> {
    members: &'g [Member],
    front: usize,
    back: usize,
}

impl<'g> Iterator for Members<'g> {
    type Item = &'g Member;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let member = &self.members[self.front];
            self.front += 1;
            Some(member)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Members<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            Some(&self.members[self.back])
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Members<'_> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl std::iter::FusedIterator for Members<'_> {}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::ColorGroup;
    use crate::core::DistanceMetric;
    use crate::error::{EmptyGroupError, NotFoundError};
    use crate::model::RgbColor;
    use crate::rgb;

    fn grays() -> ColorGroup {
        ColorGroup::new(
            "grays",
            [
                ("Black", rgb!(0, 0, 0)),
                ("Smoke", rgb!(20, 20, 20)),
                ("Fog", rgb!(200, 200, 200)),
                ("White", rgb!(255, 255, 255)),
                // A synonym for an existing value.
                ("Ink", rgb!(0, 0, 0)),
            ],
        )
    }

    #[test]
    fn test_member_surface() -> Result<(), NotFoundError> {
        let group = grays();
        assert_eq!(group.name(), "grays");
        assert_eq!(group.len(), 5);
        assert!(!group.is_empty());

        let smoke = group.by_name("Smoke")?;
        assert_eq!(smoke.index(), 1);
        assert_eq!(smoke.name(), "Smoke");
        assert_eq!(smoke.color(), &rgb!(20, 20, 20));
        assert_eq!(smoke.to_string(), "Smoke (#141414)");
        Ok(())
    }

    #[test]
    fn test_lookup_by_name() -> Result<(), NotFoundError> {
        let group = grays();
        for (name, index) in [("Black", 0), ("Smoke", 1), ("White", 3), ("Ink", 4)] {
            assert_eq!(group.by_name(name)?.index(), index);
        }
        assert_eq!(
            group.by_name("smoke"),
            Err(NotFoundError::Name {
                group: "grays".to_string(),
                name: "smoke".to_string(),
            })
        );
        Ok(())
    }

    #[test]
    fn test_lookup_by_value() -> Result<(), NotFoundError> {
        let group = grays();
        // The synonym "Ink" shares the value; the first declared member wins.
        assert_eq!(group.by_value(&rgb!(0, 0, 0))?.name(), "Black");
        assert_eq!(group.by_value(&rgb!(200, 200, 200))?.name(), "Fog");
        assert_eq!(
            group.by_value(&rgb!(1, 2, 3)),
            Err(NotFoundError::Value {
                group: "grays".to_string(),
                color: rgb!(1, 2, 3),
            })
        );
        Ok(())
    }

    #[test]
    fn test_duplicate_names_keep_first() -> Result<(), NotFoundError> {
        let group = ColorGroup::new(
            "doubles",
            [
                ("Accent", rgb!(10, 0, 0)),
                ("Accent", rgb!(0, 10, 0)),
                ("Base", rgb!(0, 0, 10)),
            ],
        );
        assert_eq!(group.len(), 3);
        assert_eq!(group.by_name("Accent")?.index(), 0);
        // Iteration still shows both occurrences.
        let names: Vec<_> = group.iter().map(|member| member.name()).collect();
        assert_eq!(names, ["Accent", "Accent", "Base"]);
        Ok(())
    }

    #[test]
    fn test_closest_exact_match() -> Result<(), EmptyGroupError> {
        let group = grays();
        assert_eq!(group.closest(&rgb!(0, 0, 0))?.name(), "Black");
        assert_eq!(group.closest(&rgb!(255, 255, 255))?.name(), "White");
        // Exact matches bypass the scan and leave the memo untouched.
        assert!(group.closest_memo.is_empty());
        Ok(())
    }

    #[test]
    fn test_closest_scan() -> Result<(), EmptyGroupError> {
        let group = grays();
        assert_eq!(group.closest(&rgb!(3, 3, 3))?.name(), "Black");
        assert_eq!(group.closest(&rgb!(19, 19, 19))?.name(), "Smoke");
        assert_eq!(group.closest(&rgb!(210, 210, 210))?.name(), "Fog");
        assert_eq!(group.closest(&rgb!(250, 250, 250))?.name(), "White");
        Ok(())
    }

    #[test]
    fn test_closest_tie_break() -> Result<(), EmptyGroupError> {
        let group = ColorGroup::new(
            "ties",
            [("A", rgb!(0, 0, 0)), ("B", rgb!(20, 20, 20))],
        );
        // Distance 30 to both members; the earliest declared member wins.
        assert_eq!(group.closest(&rgb!(10, 10, 10))?.name(), "A");

        // The declaration order decides, not the values.
        let reversed = ColorGroup::new(
            "ties",
            [("B", rgb!(20, 20, 20)), ("A", rgb!(0, 0, 0))],
        );
        assert_eq!(reversed.closest(&rgb!(10, 10, 10))?.name(), "B");
        Ok(())
    }

    #[test]
    fn test_closest_metrics_may_disagree() -> Result<(), EmptyGroupError> {
        let group = ColorGroup::new(
            "pastels",
            [
                ("Mint", rgb!(197, 243, 200)),
                ("Periwinkle", rgb!(100, 151, 238)),
            ],
        );
        // A pale lavender: channel-wise it is much nearer to the mint, but
        // perceptually the blue hue dominates.
        let lavender = rgb!(219, 218, 246);
        assert_eq!(
            group
                .closest_with(&lavender, DistanceMetric::Manhattan)?
                .name(),
            "Mint"
        );
        assert_eq!(
            group.closest_with(&lavender, DistanceMetric::Cmc)?.name(),
            "Periwinkle"
        );
        Ok(())
    }

    #[test]
    fn test_closest_memoization() -> Result<(), EmptyGroupError> {
        let group = grays();
        assert!(group.closest_memo.is_empty());

        assert_eq!(group.closest(&rgb!(3, 3, 3))?.name(), "Black");
        assert_eq!(group.closest_memo.len(), 1);

        // A repeated query reuses the memo.
        assert_eq!(group.closest(&rgb!(3, 3, 3))?.name(), "Black");
        assert_eq!(group.closest_memo.len(), 1);

        // Metrics memoize independently.
        let _ = group.closest_with(&rgb!(3, 3, 3), DistanceMetric::Cmc)?;
        assert_eq!(group.closest_memo.len(), 2);
        Ok(())
    }

    #[test]
    fn test_closest_on_empty_group() {
        let group = ColorGroup::new("empty", Vec::<(&str, RgbColor)>::new());
        assert!(group.is_empty());
        assert_eq!(group.closest(&rgb!(1, 2, 3)), Err(EmptyGroupError));
    }

    #[test]
    fn test_iteration_order() {
        let group = grays();
        let forward: Vec<_> = group.iter().map(|member| member.name()).collect();
        assert_eq!(forward, ["Black", "Smoke", "Fog", "White", "Ink"]);

        let backward: Vec<_> = group.reverse_iter().map(|member| member.name()).collect();
        assert_eq!(backward, ["Ink", "White", "Fog", "Smoke", "Black"]);

        for (position, member) in group.iter().enumerate() {
            assert_eq!(member.index(), position);
        }

        let mut iterator = group.iter();
        assert_eq!(iterator.len(), 5);
        assert_eq!(iterator.next().map(super::Member::name), Some("Black"));
        assert_eq!(iterator.next_back().map(super::Member::name), Some("Ink"));
        assert_eq!(iterator.len(), 3);
    }
}
