//! Page geometry derived from the viewport and the panel set.
//!
//! Every visible panel is exactly one viewport wide and panels are tiled left
//! to right with no gaps. Hidden panels take no space and do not count as
//! pages.

use smallvec::SmallVec;

use crate::{
    drag::ClampedDrag,
    px::{Px, PxRect},
};

/// Outer margins of a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    /// Left margin.
    pub left: Px,
    /// Top margin.
    pub top: Px,
    /// Right margin.
    pub right: Px,
    /// Bottom margin.
    pub bottom: Px,
}

impl Margins {
    /// The same margin on every side.
    pub const fn all(value: Px) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// What the layout collaborator reports about one child panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    /// Hidden panels are skipped by layout and paging.
    pub visible: bool,
    /// Height the panel measured itself at, excluding margins.
    pub measured_height: Px,
    /// The panel's own margins.
    pub margins: Margins,
}

impl Panel {
    /// A visible panel with the given measured height and no margins.
    pub const fn visible(measured_height: Px) -> Self {
        Self {
            visible: true,
            measured_height,
            margins: Margins {
                left: Px::ZERO,
                top: Px::ZERO,
                right: Px::ZERO,
                bottom: Px::ZERO,
            },
        }
    }

    /// A hidden panel.
    pub const fn hidden() -> Self {
        Self {
            visible: false,
            measured_height: Px::ZERO,
            margins: Margins {
                left: Px::ZERO,
                top: Px::ZERO,
                right: Px::ZERO,
                bottom: Px::ZERO,
            },
        }
    }

    /// Returns this panel with different margins.
    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    fn outer_height(&self) -> Px {
        self.measured_height
            .saturating_add(self.margins.top)
            .saturating_add(self.margins.bottom)
    }
}

/// How the host constrains the pager's height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightConstraint {
    /// Use exactly this height.
    Fixed(Px),
    /// Wrap the tallest visible panel, optionally capped.
    Wrap {
        /// Upper bound imposed by the parent, if any.
        max: Option<Px>,
    },
}

/// Derived paging geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PagerGeometry {
    /// Width of one page; always the viewport width.
    pub page_width: Px,
    /// Number of visible panels.
    pub page_count: usize,
    /// Total scrollable width.
    pub content_width: Px,
}

impl PagerGeometry {
    /// Returns whether there is anything to page through.
    pub fn is_empty(&self) -> bool {
        self.page_count == 0 || self.page_width <= Px::ZERO
    }

    /// The edge-clamping drag engine for this geometry.
    pub fn drag(&self) -> ClampedDrag {
        ClampedDrag::new(self.content_width, self.page_width)
    }

    /// The largest offset at rest, `(page_count - 1) * page_width`.
    pub fn max_offset(&self) -> Px {
        self.drag().max_offset()
    }

    /// Offset at which `page` is exactly in view. Pages outside the content
    /// map to offsets outside `[0, max_offset]`.
    pub fn offset_for_page(&self, page: i64) -> Px {
        let offset = page.saturating_mul(i64::from(self.page_width.raw()));
        Px::new(offset.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }

    /// Clamps a page index into `0..page_count`.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.page_count.saturating_sub(1))
    }
}

/// Computes and caches pager geometry.
///
/// Counting visible panels walks the whole panel set, so the count is cached
/// after the first layout and reused on later measurement passes until
/// [`GeometryModel::invalidate`] is called.
#[derive(Clone, Debug, Default)]
pub struct GeometryModel {
    cached_page_count: Option<usize>,
}

impl GeometryModel {
    /// Creates a model with nothing cached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the cached page count so the next layout recounts.
    pub fn invalidate(&mut self) {
        self.cached_page_count = None;
    }

    /// Returns the cached page count, if any.
    pub fn cached_page_count(&self) -> Option<usize> {
        self.cached_page_count
    }

    /// Derives page width, page count and content width.
    pub fn layout(&mut self, viewport_width: Px, panels: &[Panel]) -> PagerGeometry {
        let page_count = *self
            .cached_page_count
            .get_or_insert_with(|| panels.iter().filter(|panel| panel.visible).count());
        let page_width = viewport_width.max(Px::ZERO);
        PagerGeometry {
            page_width,
            page_count,
            content_width: page_width.saturating_mul_count(page_count),
        }
    }

    /// Resolves the pager height for the given constraint.
    ///
    /// Only the visible panels counted by the last [`GeometryModel::layout`]
    /// take part, so the height agrees with the cached page count.
    pub fn measure_height(&self, constraint: HeightConstraint, panels: &[Panel]) -> Px {
        match constraint {
            HeightConstraint::Fixed(height) => height,
            HeightConstraint::Wrap { max } => {
                let tallest = panels
                    .iter()
                    .filter(|panel| panel.visible)
                    .take(self.cached_page_count.unwrap_or(usize::MAX))
                    .map(Panel::outer_height)
                    .max()
                    .unwrap_or(Px::ZERO);
                match max {
                    Some(max) => tallest.min(max),
                    None => tallest,
                }
            }
        }
    }
}

/// Places each visible panel in content coordinates.
///
/// The i-th visible panel spans `[W*i + left, W*(i+1) - right]` horizontally
/// and `[top, height - bottom]` vertically. Hidden panels produce no frame,
/// and visible panels beyond `geometry.page_count` are not placed.
pub fn panel_frames(
    geometry: &PagerGeometry,
    container_height: Px,
    panels: &[Panel],
) -> SmallVec<[PxRect; 4]> {
    let page_width = geometry.page_width;
    panels
        .iter()
        .filter(|panel| panel.visible)
        .take(geometry.page_count)
        .enumerate()
        .map(|(index, panel)| {
            let page_left = page_width.saturating_mul_count(index);
            let page_right = page_width.saturating_mul_count(index + 1);
            PxRect::from_edges(
                page_left + panel.margins.left,
                panel.margins.top,
                page_right - panel.margins.right,
                container_height - panel.margins.bottom,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> Vec<Panel> {
        vec![
            Panel::visible(Px(600)),
            Panel::hidden(),
            Panel::visible(Px(800)).with_margins(Margins {
                top: Px(10),
                bottom: Px(30),
                ..Margins::default()
            }),
            Panel::visible(Px(500)),
        ]
    }

    #[test]
    fn hidden_panels_do_not_count() {
        let mut model = GeometryModel::new();
        let geometry = model.layout(Px(1080), &panels());
        assert_eq!(geometry.page_width, Px(1080));
        assert_eq!(geometry.page_count, 3);
        assert_eq!(geometry.content_width, Px(3240));
        assert_eq!(geometry.max_offset(), Px(2160));
    }

    #[test]
    fn page_count_is_cached_until_invalidated() {
        let mut model = GeometryModel::new();
        model.layout(Px(1080), &panels());
        assert_eq!(model.cached_page_count(), Some(3));

        let mut more = panels();
        more.push(Panel::visible(Px(100)));
        assert_eq!(model.layout(Px(1080), &more).page_count, 3);

        model.invalidate();
        assert_eq!(model.layout(Px(1080), &more).page_count, 4);
    }

    #[test]
    fn no_visible_panels_means_no_content() {
        let mut model = GeometryModel::new();
        let geometry = model.layout(Px(1080), &[Panel::hidden()]);
        assert!(geometry.is_empty());
        assert_eq!(geometry.content_width, Px(0));
        assert_eq!(geometry.max_offset(), Px(0));
    }

    #[test]
    fn wrap_height_uses_tallest_panel_with_margins() {
        let model = GeometryModel::new();
        let height = model.measure_height(HeightConstraint::Wrap { max: None }, &panels());
        assert_eq!(height, Px(840));
    }

    #[test]
    fn wrap_height_respects_upper_bound() {
        let model = GeometryModel::new();
        let capped = HeightConstraint::Wrap {
            max: Some(Px(700)),
        };
        assert_eq!(model.measure_height(capped, &panels()), Px(700));
        let roomy = HeightConstraint::Wrap {
            max: Some(Px(2000)),
        };
        assert_eq!(model.measure_height(roomy, &panels()), Px(840));
    }

    #[test]
    fn fixed_height_ignores_panels() {
        let model = GeometryModel::new();
        assert_eq!(
            model.measure_height(HeightConstraint::Fixed(Px(1920)), &panels()),
            Px(1920)
        );
    }

    #[test]
    fn frames_tile_visible_panels() {
        let mut model = GeometryModel::new();
        let panels = panels();
        let geometry = model.layout(Px(1080), &panels);
        let frames = panel_frames(&geometry, Px(900), &panels);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], PxRect::new(Px(0), Px(0), Px(1080), Px(900)));
        assert_eq!(frames[1], PxRect::new(Px(1080), Px(10), Px(1080), Px(860)));
        assert_eq!(frames[2], PxRect::new(Px(2160), Px(0), Px(1080), Px(900)));
    }

    #[test]
    fn stale_page_count_limits_frames_and_height() {
        let mut model = GeometryModel::new();
        let geometry = model.layout(Px(1080), &[Panel::visible(Px(300)); 2]);

        let grown = [
            Panel::visible(Px(300)),
            Panel::visible(Px(300)),
            Panel::visible(Px(900)),
        ];
        let geometry_again = model.layout(Px(1080), &grown);
        assert_eq!(geometry_again, geometry);
        assert_eq!(
            model.measure_height(HeightConstraint::Wrap { max: None }, &grown),
            Px(300)
        );
        let frames = panel_frames(&geometry_again, Px(300), &grown);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].right(), geometry.content_width);
    }

    #[test]
    fn page_offsets_scale_with_width() {
        let geometry = PagerGeometry {
            page_width: Px(1000),
            page_count: 3,
            content_width: Px(3000),
        };
        assert_eq!(geometry.offset_for_page(2), Px(2000));
        assert_eq!(geometry.offset_for_page(-1), Px(-1000));
        assert_eq!(geometry.clamp_page(7), 2);
    }
}
