//! Coordinate markers sliding along their dimension glyphs.
//!
//! A glyph cell is `[line or circle, dot]`; the dot travels along child 0.

use super::{finish, move_along, require_variant, Sequencer};
use crate::animation::{Animation, Timing};
use crate::component::{Component, ComponentType, EmbeddingLayout, PartName, PartRef};
use crate::components::CELLS;
use crate::error::Result;

/// Row of the glyph cells inside a coordinate table
const GLYPH_ROW: usize = 1;
/// The AdS column, last of the non-compact coordinates
const ADS_COLUMN: usize = 3;

/// Move the marker of glyph `column` in the table found at `prefix` inside `part`
fn slide(
    component: &Component,
    part: PartName,
    prefix: &[usize],
    column: usize,
    timing: Timing,
) -> Result<Animation> {
    let cell: Vec<usize> = prefix
        .iter()
        .copied()
        .chain([CELLS, GLYPH_ROW, column])
        .collect();
    let with = |child: usize| {
        let mut path = cell.clone();
        path.push(child);
        PartRef::child(part, &path)
    };
    move_along(component, with(1), with(0), timing)
}

impl Sequencer {
    /// Slide the AdS marker along its throat
    pub fn move_non_compact(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "move_non_compact", |t| {
            t == ComponentType::TableEmbedding(EmbeddingLayout::Split)
        })?;
        let animation = slide(component, PartName::NonCompact, &[0], ADS_COLUMN, timing)?;
        Ok(finish(component, "move_non_compact", animation))
    }

    /// Walk the last three compact markers once around their circles
    pub fn move_compact(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "move_compact", |t| {
            t == ComponentType::TableEmbedding(EmbeddingLayout::Split)
        })?;
        let steps = [4, 3, 2]
            .into_iter()
            .map(|column| slide(component, PartName::Compact, &[0], column, timing))
            .collect::<Result<Vec<_>>>()?;
        Ok(finish(component, "move_compact", Animation::Group(steps)))
    }

    /// Both motions at once on the combined table
    pub fn move_all(component: &mut Component, timing: Timing) -> Result<Animation> {
        require_variant(component, "move_all", |t| {
            t == ComponentType::TableEmbedding(EmbeddingLayout::Together)
        })?;
        let steps = [8, 7, 6, ADS_COLUMN]
            .into_iter()
            .map(|column| slide(component, PartName::Table, &[], column, timing))
            .collect::<Result<Vec<_>>>()?;
        Ok(finish(component, "move_all", Animation::Group(steps)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::build;
    use super::*;
    use crate::animation::Transform;
    use crate::error::SceneError;

    #[test]
    fn test_ads_marker_runs_the_throat() {
        let mut component = build("table_embedding", "split");
        let marker = PartRef::child(PartName::NonCompact, &[0, 1, 1, 3, 1]);
        let line = PartRef::child(PartName::NonCompact, &[0, 1, 1, 3, 0]);
        let start = component.node(&marker).unwrap().center();

        let animation = Sequencer::move_non_compact(&mut component, Timing::linear(3.0)).unwrap();
        let step = animation.as_step().unwrap();
        assert_eq!(step.targets, vec![marker.clone()]);
        match &step.transform {
            Transform::MoveAlongPath { path, points } => {
                assert_eq!(*path, line);
                assert_eq!(points.len(), 2);
                assert!(points[0].approx_eq(start, 1e-9));
            }
            other => panic!("expected a path move, got {:?}", other),
        }
        let end = component.node(&marker).unwrap().center();
        assert!(end.y > start.y);
    }

    #[test]
    fn test_compact_markers_move_together() {
        let mut component = build("table_embedding", "split");
        let animation = Sequencer::move_compact(&mut component, Timing::linear(3.0)).unwrap();
        assert!(animation.is_group());
        assert_eq!(animation.steps().len(), 3);
        assert_eq!(animation.duration(), 3.0);
    }

    #[test]
    fn test_together_moves_four_markers() {
        let mut component = build("table_embedding", "together");
        let animation = Sequencer::move_all(&mut component, Timing::linear(3.0)).unwrap();
        let paths: Vec<_> = animation
            .steps()
            .iter()
            .map(|step| step.targets[0].path.clone())
            .collect();
        assert_eq!(
            paths,
            vec![
                vec![1, 1, 8, 1],
                vec![1, 1, 7, 1],
                vec![1, 1, 6, 1],
                vec![1, 1, 3, 1],
            ]
        );
    }

    #[test]
    fn test_layout_checks() {
        let mut together = build("table_embedding", "together");
        assert!(matches!(
            Sequencer::move_compact(&mut together, Timing::linear(3.0)),
            Err(SceneError::IncompatibleVariant { .. })
        ));
        let mut split = build("table_embedding", "split");
        assert!(matches!(
            Sequencer::move_all(&mut split, Timing::linear(3.0)),
            Err(SceneError::IncompatibleVariant { .. })
        ));
    }
}
