//! Anchor/Control-Topologie mit Drag-Handling und Spiegel-Constraints.
//!
//! Der Graph ist alleiniger Besitzer aller Anchors und Controls. Beziehungen
//! (Owner, Spiegel-Partner) sind reine Handles in einer Arena, keine Referenzen.
//! Nach jeder Änderung werden die beiden Achsen-Kurven (X und Y) komplett neu
//! aufgebaut; bei den üblichen wenigen Anchors ist das günstiger als
//! inkrementelle Pflege.

mod drag;


pub use drag::{MirrorMode, Modifiers};

use crate::core::bounding_box::{bounding_box, BoundingRect};
use crate::core::curve_path::{evaluate, CurvePath};
use crate::core::CurveError;
use glam::DVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Untergrenze der Segment-Stärke (verhindert nicht-positive Gewichte).
pub const STRENGTH_FLOOR: f64 = 0.1;
/// Standard-Abstand der Tangenten-Handles zum Anchor (horizontal).
pub const DEFAULT_HANDLE_OFFSET: f64 = 10.0;
/// Standard-Abstand des Stärke-Handles über dem Anchor.
pub const DEFAULT_STRENGTH_OFFSET: f64 = 20.0;

/// Stabiles Handle eines Anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnchorId(pub u64);

/// Stabiles Handle eines Controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlId(pub u64);

/// Beliebiger verschiebbarer Punkt im Graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointId {
    Anchor(AnchorId),
    Control(ControlId),
}

/// Rolle eines Controls relativ zu seinem Anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlRole {
    /// Eingehende Tangente (Segment vom Vorgänger)
    Prev,
    /// Ausgehende Tangente (Segment zum Nachfolger)
    Next,
    /// Vertikales Handle für die Segment-Stärke
    Strength,
}

/// Durchgangspunkt der Kurve.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub position: DVec2,
    pub prev_control: Option<ControlId>,
    pub next_control: Option<ControlId>,
    pub strength_control: Option<ControlId>,
    /// Drag-Rechteck (Canvas)
    pub bounds: BoundingRect,
}

impl Anchor {
    /// Alle besessenen Controls.
    pub fn owned_controls(&self) -> impl Iterator<Item = ControlId> {
        [self.prev_control, self.next_control, self.strength_control]
            .into_iter()
            .flatten()
    }
}

/// Hilfspunkt, der die Krümmung oder Stärke formt.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub position: DVec2,
    pub owner: AnchorId,
    /// Das andere Tangenten-Handle desselben Anchors
    pub mirror: Option<ControlId>,
    pub role: ControlRole,
    pub bounds: BoundingRect,
}

/// Geometrie-Einstellungen des Graphen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphConfig {
    /// Horizontaler Abstand neuer Tangenten-Handles
    pub handle_offset: f64,
    /// Vertikaler Abstand neuer Stärke-Handles; Teiler der Stärke-Berechnung
    pub strength_offset: f64,
    /// Stärke-Handles anlegen
    pub strength_enabled: bool,
    /// Canvas-Rechteck für Anchor-Drags
    pub canvas: BoundingRect,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            handle_offset: DEFAULT_HANDLE_OFFSET,
            strength_offset: DEFAULT_STRENGTH_OFFSET,
            strength_enabled: false,
            canvas: BoundingRect::from_corners(DVec2::ZERO, DVec2::new(800.0, 600.0)),
        }
    }
}

impl GraphConfig {
    /// Prüft, dass beide Handle-Abstände positiv und endlich sind.
    ///
    /// `strength_offset` ist Teiler der Stärke; bei 0 entstünden unendliche Gewichte.
    pub fn validate(&self) -> Result<(), CurveError> {
        for (field, value) in [
            ("handle_offset", self.handle_offset),
            ("strength_offset", self.strength_offset),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CurveError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }
}

/// Serialisierbarer Zustand eines Anchors (für Dokumente).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorRecord {
    pub position: DVec2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_control: Option<DVec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_control: Option<DVec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength_control: Option<DVec2>,
}

/// Drag-Sitzung: gegriffener Punkt und gecachte Handle-Offsets.
#[derive(Debug, Clone)]
struct DragSession {
    target: PointId,
    /// Offsets der Controls relativ zum Anchor beim Drag-Start
    offsets: Vec<(ControlId, DVec2)>,
}

/// Anchor/Control-Graph mit abgeleiteten X/Y-Kurven.
#[derive(Debug, Clone)]
pub struct ControlPointGraph {
    config: GraphConfig,
    anchors: IndexMap<AnchorId, Anchor>,
    controls: HashMap<ControlId, Control>,
    next_id: u64,
    controls_visible: bool,
    path_x: CurvePath,
    path_y: CurvePath,
    drag: Option<DragSession>,
    rebuild_count: u64,
}

impl Default for ControlPointGraph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl ControlPointGraph {
    /// Erstellt einen leeren Graph.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            anchors: IndexMap::new(),
            controls: HashMap::new(),
            next_id: 1,
            controls_visible: true,
            path_x: CurvePath::new(0.0),
            path_y: CurvePath::new(0.0),
            drag: None,
            rebuild_count: 0,
        }
    }

    /// Setzt die Start-Sichtbarkeit der Handles (ohne Neuaufbau).
    pub fn with_controls_visible(mut self, visible: bool) -> Self {
        self.controls_visible = visible;
        self
    }

    /// Baut einen Graph aus gespeicherten Anchor-Records auf.
    ///
    /// Stärke-Handles werden nur übernommen, wenn `config.strength_enabled` gesetzt ist.
    pub fn from_records(config: GraphConfig, records: &[AnchorRecord]) -> Result<Self, CurveError> {
        config.validate()?;
        let mut graph = Self::new(config);
        for record in records {
            let anchor_id = graph.alloc_anchor(record.position);
            if let Some(pos) = record.prev_control {
                graph.attach_control(anchor_id, ControlRole::Prev, pos);
            }
            if let Some(pos) = record.next_control {
                graph.attach_control(anchor_id, ControlRole::Next, pos);
            }
            if let (true, Some(pos)) = (config.strength_enabled, record.strength_control) {
                graph.attach_control(anchor_id, ControlRole::Strength, pos);
            }
            graph.pair_tangents(anchor_id);
            graph.refresh_control_bounds(anchor_id);
        }
        graph.rebuild()?;
        log::info!("Graph aus {} Anchor-Records aufgebaut", records.len());
        Ok(graph)
    }

    /// Exportiert alle Anchors mit ihren Handle-Positionen.
    pub fn records(&self) -> Vec<AnchorRecord> {
        self.anchors
            .values()
            .map(|anchor| AnchorRecord {
                position: anchor.position,
                prev_control: anchor.prev_control.and_then(|id| self.control_position(id)),
                next_control: anchor.next_control.and_then(|id| self.control_position(id)),
                strength_control: anchor
                    .strength_control
                    .and_then(|id| self.control_position(id)),
            })
            .collect()
    }

    // ── Zugriff ─────────────────────────────────────────────────────

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Anzahl der Anchors.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Anzahl der Controls (inkl. Stärke-Handles).
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }

    /// Anchor-IDs in Kurvenreihenfolge.
    pub fn anchor_ids(&self) -> impl Iterator<Item = AnchorId> + '_ {
        self.anchors.keys().copied()
    }

    pub fn anchor(&self, id: AnchorId) -> Option<&Anchor> {
        self.anchors.get(&id)
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(&id)
    }

    fn control_position(&self, id: ControlId) -> Option<DVec2> {
        self.controls.get(&id).map(|c| c.position)
    }

    /// Position eines beliebigen Punkts.
    pub fn position(&self, point: PointId) -> Option<DVec2> {
        match point {
            PointId::Anchor(id) => self.anchors.get(&id).map(|a| a.position),
            PointId::Control(id) => self.control_position(id),
        }
    }

    /// Ob Tangenten- und Stärke-Handles sichtbar (und greifbar) sind.
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Abgeleitete Kurve der X-Achse.
    pub fn path_x(&self) -> &CurvePath {
        &self.path_x
    }

    /// Abgeleitete Kurve der Y-Achse.
    pub fn path_y(&self) -> &CurvePath {
        &self.path_y
    }

    /// Anzahl der bisherigen Kurven-Neuaufbauten.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Punkt auf der Kurve bei geklemmter Zeit `t`.
    pub fn point_at(&self, t: f64) -> DVec2 {
        DVec2::new(evaluate(&self.path_x, t), evaluate(&self.path_y, t))
    }

    /// Alle aktuell greifbaren Punkte (versteckte Controls ausgenommen).
    pub fn pickable_points(&self) -> Vec<(PointId, DVec2)> {
        let mut points: Vec<(PointId, DVec2)> = self
            .anchors
            .iter()
            .map(|(id, a)| (PointId::Anchor(*id), a.position))
            .collect();
        if self.controls_visible {
            let mut controls: Vec<(ControlId, DVec2)> = self
                .controls
                .iter()
                .map(|(id, c)| (*id, c.position))
                .collect();
            controls.sort_by_key(|(id, _)| id.0);
            points.extend(
                controls
                    .into_iter()
                    .map(|(id, pos)| (PointId::Control(id), pos)),
            );
        }
        points
    }

    // ── Topologie ───────────────────────────────────────────────────

    /// Legt einen Anchor an und erzeugt seine Handles.
    ///
    /// Außer beim ersten Anchor entsteht ein `prev_control` bei (-offset, 0),
    /// außer beim letzten ein `next_control` bei (+offset, 0). Mit aktivierter
    /// Stärke kommt ein Stärke-Handle bei (0, -strength_offset) dazu.
    pub fn add_anchor(
        &mut self,
        is_first: bool,
        is_last: bool,
        x: f64,
        y: f64,
    ) -> Result<AnchorId, CurveError> {
        let position = DVec2::new(x, y);
        let anchor_id = self.alloc_anchor(position);
        let offset = self.config.handle_offset;

        if !is_first {
            self.attach_control(anchor_id, ControlRole::Prev, position - DVec2::new(offset, 0.0));
        }
        if !is_last {
            self.attach_control(anchor_id, ControlRole::Next, position + DVec2::new(offset, 0.0));
        }
        if self.config.strength_enabled {
            let strength_pos = position - DVec2::new(0.0, self.config.strength_offset);
            self.attach_control(anchor_id, ControlRole::Strength, strength_pos);
        }
        self.pair_tangents(anchor_id);
        self.refresh_control_bounds(anchor_id);

        log::debug!("Anchor {:?} angelegt bei ({:.1}, {:.1})", anchor_id, x, y);
        self.rebuild()?;
        Ok(anchor_id)
    }

    /// Hängt einen Anchor ans Ende der Kurve an.
    ///
    /// Der bisher letzte Anchor bekommt dabei sein fehlendes `next_control`.
    pub fn append_anchor(&mut self, position: DVec2) -> Result<AnchorId, CurveError> {
        let previous = self.anchors.last().map(|(id, a)| (*id, a.clone()));
        if let Some((prev_id, prev_anchor)) = previous {
            if prev_anchor.next_control.is_none() {
                let pos = prev_anchor.position + DVec2::new(self.config.handle_offset, 0.0);
                self.attach_control(prev_id, ControlRole::Next, pos);
                self.pair_tangents(prev_id);
                self.refresh_control_bounds(prev_id);
            }
        }
        let is_first = self.anchors.is_empty();
        self.add_anchor(is_first, true, position.x, position.y)
    }

    /// Entfernt einen Anchor samt aller besessenen Controls.
    pub fn remove_anchor(&mut self, id: AnchorId) -> Result<(), CurveError> {
        let anchor = self
            .anchors
            .shift_remove(&id)
            .ok_or(CurveError::UnknownAnchor(id.0))?;
        for control_id in anchor.owned_controls() {
            self.controls.remove(&control_id);
        }

        if let Some(session) = &self.drag {
            let hit = match session.target {
                PointId::Anchor(a) => a == id,
                PointId::Control(c) => !self.controls.contains_key(&c),
            };
            if hit {
                self.drag = None;
            }
        }

        log::debug!("Anchor {:?} entfernt", id);
        self.rebuild()
    }

    /// Entfernt alle Anchors.
    pub fn clear(&mut self) -> Result<(), CurveError> {
        self.anchors.clear();
        self.controls.clear();
        self.drag = None;
        self.rebuild()
    }

    /// Setzt die Canvas-Größe; Anchors werden in den neuen Canvas geklemmt.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), CurveError> {
        let canvas = BoundingRect::from_corners(DVec2::ZERO, DVec2::new(width, height));
        self.config.canvas = canvas;

        let ids: Vec<AnchorId> = self.anchors.keys().copied().collect();
        for id in ids {
            let Some(anchor) = self.anchors.get_mut(&id) else {
                continue;
            };
            anchor.bounds = canvas;
            let clamped = canvas.clamp(anchor.position);
            let delta = clamped - anchor.position;
            anchor.position = clamped;
            if delta != DVec2::ZERO {
                let owned: Vec<ControlId> = anchor.owned_controls().collect();
                for control_id in owned {
                    if let Some(control) = self.controls.get_mut(&control_id) {
                        control.position += delta;
                    }
                }
            }
            self.refresh_control_bounds(id);
        }

        log::debug!("Canvas-Größe gesetzt: {:.0} × {:.0}", width, height);
        self.rebuild()
    }

    /// Schaltet die Sichtbarkeit der Handles um.
    ///
    /// Baut die Kurven neu auf, obwohl sich die Geometrie nicht ändert; Konsumenten
    /// beobachten den Neuaufbau als Änderungssignal.
    pub fn toggle_controls(&mut self) -> Result<(), CurveError> {
        self.controls_visible = !self.controls_visible;
        if !self.controls_visible {
            if let Some(PointId::Control(_)) = self.drag.as_ref().map(|s| s.target) {
                self.drag = None;
            }
        }
        self.rebuild()
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn alloc_anchor(&mut self, position: DVec2) -> AnchorId {
        let id = AnchorId(self.alloc_id());
        self.anchors.insert(
            id,
            Anchor {
                position,
                prev_control: None,
                next_control: None,
                strength_control: None,
                bounds: self.config.canvas,
            },
        );
        id
    }

    fn attach_control(&mut self, owner: AnchorId, role: ControlRole, position: DVec2) {
        let id = ControlId(self.alloc_id());
        let Some(anchor) = self.anchors.get_mut(&owner) else {
            return;
        };
        match role {
            ControlRole::Prev => anchor.prev_control = Some(id),
            ControlRole::Next => anchor.next_control = Some(id),
            ControlRole::Strength => anchor.strength_control = Some(id),
        }
        self.controls.insert(
            id,
            Control {
                position,
                owner,
                mirror: None,
                role,
                bounds: anchor.bounds,
            },
        );
    }

    /// Registriert `prev_control` und `next_control` gegenseitig als Spiegel-Partner.
    fn pair_tangents(&mut self, anchor_id: AnchorId) {
        let Some(anchor) = self.anchors.get(&anchor_id) else {
            return;
        };
        if let (Some(prev), Some(next)) = (anchor.prev_control, anchor.next_control) {
            if let Some(c) = self.controls.get_mut(&prev) {
                c.mirror = Some(next);
            }
            if let Some(c) = self.controls.get_mut(&next) {
                c.mirror = Some(prev);
            }
        }
    }

    /// Tangenten-Handles erben das Anchor-Rechteck, das Stärke-Handle wird
    /// horizontal auf die Anchor-x-Position festgesetzt.
    fn refresh_control_bounds(&mut self, anchor_id: AnchorId) {
        let Some(anchor) = self.anchors.get(&anchor_id) else {
            return;
        };
        let bounds = anchor.bounds;
        let x = anchor.position.x;
        for control_id in [anchor.prev_control, anchor.next_control] {
            if let Some(control) = control_id.and_then(|id| self.controls.get_mut(&id)) {
                control.bounds = bounds;
            }
        }
        if let Some(control) = anchor
            .strength_control
            .and_then(|id| self.controls.get_mut(&id))
        {
            control.bounds = BoundingRect {
                min: DVec2::new(x, bounds.min.y),
                max: DVec2::new(x, bounds.max.y),
            };
        }
    }

    // ── Kurven ──────────────────────────────────────────────────────

    /// Segment-Stärke eines Anchors: `max(0.1, (anchor.y - strength.y) / strength_offset)`,
    /// ohne Stärke-Handle `1.0`.
    pub fn strength(&self, id: AnchorId) -> f64 {
        let Some(anchor) = self.anchors.get(&id) else {
            return 1.0;
        };
        match anchor.strength_control.and_then(|c| self.control_position(c)) {
            Some(handle) => {
                ((anchor.position.y - handle.y) / self.config.strength_offset).max(STRENGTH_FLOOR)
            }
            None => 1.0,
        }
    }

    /// Baut die X- und Y-Kurve komplett aus den aktuellen Positionen neu auf.
    ///
    /// Segment `i` läuft von Anchor `i` zu Anchor `i+1`; das Gewicht ist die
    /// Stärke des Ziel-Anchors. Kubisch mit beiden Tangenten-Handles,
    /// quadratisch mit einem, linear ohne.
    pub fn rebuild(&mut self) -> Result<(), CurveError> {
        let start = self
            .anchors
            .first()
            .map_or(DVec2::ZERO, |(_, a)| a.position);
        let mut path_x = CurvePath::new(start.x);
        let mut path_y = CurvePath::new(start.y);

        for i in 1..self.anchors.len() {
            let (Some((_, from)), Some((to_id, to))) =
                (self.anchors.get_index(i - 1), self.anchors.get_index(i))
            else {
                continue;
            };
            let weight = self.strength(*to_id);
            let c1 = from.next_control.and_then(|id| self.control_position(id));
            let c2 = to.prev_control.and_then(|id| self.control_position(id));
            let end = to.position;

            match (c1, c2) {
                (Some(c1), Some(c2)) => {
                    path_x.append_cubic(end.x, weight, c1.x, c2.x)?;
                    path_y.append_cubic(end.y, weight, c1.y, c2.y)?;
                }
                (Some(c), None) | (None, Some(c)) => {
                    path_x.append_quadratic(end.x, weight, c.x)?;
                    path_y.append_quadratic(end.y, weight, c.y)?;
                }
                (None, None) => {
                    path_x.append_linear(end.x, weight)?;
                    path_y.append_linear(end.y, weight)?;
                }
            }
        }

        self.path_x = path_x;
        self.path_y = path_y;
        self.rebuild_count += 1;
        log::debug!(
            "Kurven neu aufgebaut: {} Segmente, Gesamtgewicht {:.3}",
            self.path_x.len(),
            self.path_x.total_weight()
        );
        Ok(())
    }

    /// Kontrollpunkte von Segment `index` in kubischer Form.
    pub fn segment_points(&self, index: usize) -> Option<[DVec2; 4]> {
        let sx = self.path_x.segments().get(index)?;
        let sy = self.path_y.segments().get(index)?;
        let start = DVec2::new(
            self.path_x.segment_starts().nth(index)?,
            self.path_y.segment_starts().nth(index)?,
        );
        let (c1x, c2x) = sx.cubic_controls(start.x);
        let (c1y, c2y) = sy.cubic_controls(start.y);
        Some([
            start,
            DVec2::new(c1x, c1y),
            DVec2::new(c2x, c2y),
            DVec2::new(sx.end(), sy.end()),
        ])
    }

    /// Exakte Bounding-Box der gesamten Kurve (`None` ohne Anchors).
    pub fn bounds(&self) -> Option<BoundingRect> {
        let first = self.anchors.first()?.1.position;
        let mut rect = BoundingRect::from_point(first);
        for index in 0..self.path_x.len() {
            if let Some([p0, p1, p2, p3]) = self.segment_points(index) {
                rect = rect.union(&bounding_box(p0, p1, p2, p3));
            }
        }
        Some(rect)
    }
}
