//! Pick-Index (KD-Tree) für schnelle Treffer-Abfragen auf Anchors und Controls.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::control_graph::{ControlPointGraph, PointId};

/// Ergebnis einer Distanzabfrage gegen den Pick-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickMatch {
    /// Gefundener Punkt
    pub point: PointId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Snapshot aller greifbaren Punkte eines Graphen.
///
/// Muss nach jeder Änderung am Graph neu gebaut werden.
#[derive(Debug, Clone)]
pub struct PickIndex {
    tree: KdTree<f64, 2>,
    points: Vec<PointId>,
}

impl PickIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            points: Vec::new(),
        }
    }

    /// Baut den Index aus allen aktuell greifbaren Punkten.
    pub fn from_graph(graph: &ControlPointGraph) -> Self {
        Self::from_points(&graph.pickable_points())
    }

    pub fn from_points(entries: &[(PointId, DVec2)]) -> Self {
        let coords: Vec<[f64; 2]> = entries.iter().map(|(_, p)| [p.x, p.y]).collect();
        let tree: KdTree<f64, 2> = (&coords).into();
        Self {
            tree,
            points: entries.iter().map(|(id, _)| *id).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Nächster Punkt zur Query-Position.
    pub fn nearest(&self, query: DVec2) -> Option<PickMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let point = *self.points.get(result.item as usize)?;

        Some(PickMatch {
            point,
            distance: result.distance.sqrt(),
        })
    }

    /// Alle Punkte innerhalb des Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<PickMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let point = *self.points.get(entry.item as usize)?;
                Some(PickMatch {
                    point,
                    distance: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Greift den nächsten Punkt im Radius; Controls schlagen Anchors bei Gleichstand.
    pub fn pick(&self, query: DVec2, radius: f64) -> Option<PointId> {
        let matches = self.within_radius(query, radius);
        let best = matches.first()?.distance;
        matches
            .iter()
            .take_while(|m| m.distance <= best)
            .find(|m| matches!(m.point, PointId::Control(_)))
            .or_else(|| matches.first())
            .map(|m| m.point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::control_graph::{AnchorId, ControlId};

    fn sample_points() -> Vec<(PointId, DVec2)> {
        vec![
            (PointId::Anchor(AnchorId(1)), DVec2::new(0.0, 0.0)),
            (PointId::Anchor(AnchorId(2)), DVec2::new(10.0, 0.0)),
            (PointId::Control(ControlId(3)), DVec2::new(4.0, 3.0)),
        ]
    }

    #[test]
    fn nearest_returns_expected_point() {
        let index = PickIndex::from_points(&sample_points());
        let nearest = index
            .nearest(DVec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(nearest.point, PointId::Control(ControlId(3)));
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let index = PickIndex::from_points(&sample_points());
        let points: Vec<PointId> = index
            .within_radius(DVec2::new(0.0, 0.0), 6.0)
            .into_iter()
            .map(|m| m.point)
            .collect();

        assert_eq!(
            points,
            vec![PointId::Anchor(AnchorId(1)), PointId::Control(ControlId(3))]
        );
    }

    #[test]
    fn pick_prefers_control_on_tie() {
        let points = vec![
            (PointId::Anchor(AnchorId(1)), DVec2::new(0.0, 0.0)),
            (PointId::Control(ControlId(2)), DVec2::new(0.0, 0.0)),
        ];
        let index = PickIndex::from_points(&points);
        assert_eq!(
            index.pick(DVec2::new(1.0, 0.0), 5.0),
            Some(PointId::Control(ControlId(2)))
        );
        assert_eq!(index.pick(DVec2::new(50.0, 0.0), 5.0), None);
    }

    #[test]
    fn index_follows_control_visibility() {
        let mut graph = ControlPointGraph::default();
        graph.append_anchor(DVec2::new(100.0, 100.0)).expect("a");
        graph.append_anchor(DVec2::new(200.0, 100.0)).expect("b");
        assert_eq!(PickIndex::from_graph(&graph).len(), 4);

        graph.toggle_controls().expect("Umschalten");
        let index = PickIndex::from_graph(&graph);
        assert_eq!(index.len(), 2);
        assert!(matches!(
            index.pick(DVec2::new(110.0, 100.0), 15.0),
            Some(PointId::Anchor(_))
        ));
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = PickIndex::empty();

        assert!(index.is_empty());
        assert!(index.nearest(DVec2::ZERO).is_none());
        assert!(index.pick(DVec2::ZERO, 10.0).is_none());
    }
}
