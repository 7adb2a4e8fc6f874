//! Drag-Handling und Spiegel-Constraint-Auflösung.
//!
//! Ein Drag besteht aus `begin_drag` (Offsets cachen), beliebig vielen
//! `drag_to`-Aufrufen (einer pro Pointer-Move) und `end_drag`. Der Modifier-Zustand
//! wird bei jedem Move explizit übergeben.

use super::{AnchorId, ControlId, ControlPointGraph, ControlRole, DragSession, PointId};
use crate::core::CurveError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Snapshot der gedrückten Modifier-Tasten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
}

/// Wie ein Tangenten-Drag auf den Spiegel-Partner wirkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorMode {
    /// Länge und Richtung werden übertragen (Standard, ohne Shift)
    Handler,
    /// Nur die Richtung; Partner behält seinen Abstand (Shift + Ctrl)
    Direction,
    /// Partner bleibt unverändert (nur Shift)
    None,
}

impl MirrorMode {
    /// Shift schaltet den Handler-Modus ab; Ctrl wählt dann den Richtungs-Modus.
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if !modifiers.shift {
            MirrorMode::Handler
        } else if modifiers.ctrl {
            MirrorMode::Direction
        } else {
            MirrorMode::None
        }
    }
}

impl ControlPointGraph {
    /// Startet einen Drag und cached bei Anchors die Offsets aller Handles.
    pub fn begin_drag(&mut self, target: PointId) -> Result<(), CurveError> {
        let offsets: Vec<(ControlId, DVec2)> = match target {
            PointId::Anchor(id) => {
                let anchor = self.anchors.get(&id).ok_or(CurveError::UnknownAnchor(id.0))?;
                anchor
                    .owned_controls()
                    .filter_map(|cid| {
                        self.controls
                            .get(&cid)
                            .map(|c| (cid, c.position - anchor.position))
                    })
                    .collect()
            }
            PointId::Control(id) => {
                if !self.controls.contains_key(&id) {
                    return Err(CurveError::UnknownControl(id.0));
                }
                Vec::new()
            }
        };
        log::debug!("Drag gestartet: {:?}", target);
        self.drag = Some(DragSession { target, offsets });
        Ok(())
    }

    /// Aktuell gegriffener Punkt.
    pub fn dragging(&self) -> Option<PointId> {
        self.drag.as_ref().map(|s| s.target)
    }

    /// Bewegt den gegriffenen Punkt. Gibt `false` zurück, wenn kein Drag aktiv ist.
    ///
    /// Schlägt der Neuaufbau fehl, werden alle in diesem Schritt bewegten
    /// Punkte zurückgesetzt; Positionen und Kurven bleiben konsistent.
    pub fn drag_to(&mut self, position: DVec2, modifiers: Modifiers) -> Result<bool, CurveError> {
        let Some(session) = self.drag.take() else {
            return Ok(false);
        };
        let result = self.apply_drag(&session, position, modifiers);
        self.drag = Some(session);
        result.map(|_| true)
    }

    fn apply_drag(
        &mut self,
        session: &DragSession,
        position: DVec2,
        modifiers: Modifiers,
    ) -> Result<(), CurveError> {
        let mut saved: Vec<(PointId, DVec2)> = Vec::with_capacity(session.offsets.len() + 2);

        let owner = match session.target {
            PointId::Anchor(id) => {
                let anchor = self
                    .anchors
                    .get_mut(&id)
                    .ok_or(CurveError::UnknownAnchor(id.0))?;
                saved.push((session.target, anchor.position));
                let new_pos = anchor.bounds.clamp(position);
                anchor.position = new_pos;
                for (control_id, offset) in &session.offsets {
                    if let Some(control) = self.controls.get_mut(control_id) {
                        saved.push((PointId::Control(*control_id), control.position));
                        control.position = new_pos + *offset;
                    }
                }
                id
            }
            PointId::Control(id) => {
                let control = self
                    .controls
                    .get_mut(&id)
                    .ok_or(CurveError::UnknownControl(id.0))?;
                saved.push((session.target, control.position));
                let dragged = control.bounds.clamp(position);
                control.position = dragged;
                let owner = control.owner;
                if let (Some(partner), ControlRole::Prev | ControlRole::Next) =
                    (control.mirror, control.role)
                {
                    if let Some(previous) = self.control_position(partner) {
                        saved.push((PointId::Control(partner), previous));
                    }
                    let mode = MirrorMode::from_modifiers(modifiers);
                    self.mirror_partner(owner, dragged, partner, mode);
                }
                owner
            }
        };

        self.refresh_control_bounds(owner);
        if let Err(error) = self.rebuild() {
            log::warn!("Drag verworfen: {}", error);
            self.restore_positions(&saved);
            self.refresh_control_bounds(owner);
            return Err(error);
        }
        Ok(())
    }

    fn restore_positions(&mut self, saved: &[(PointId, DVec2)]) {
        for &(point, position) in saved {
            match point {
                PointId::Anchor(id) => {
                    if let Some(anchor) = self.anchors.get_mut(&id) {
                        anchor.position = position;
                    }
                }
                PointId::Control(id) => {
                    if let Some(control) = self.controls.get_mut(&id) {
                        control.position = position;
                    }
                }
            }
        }
    }

    /// Kurzform: Drag auf `target` (falls nötig starten) und sofort bewegen.
    pub fn drag_point(
        &mut self,
        target: PointId,
        position: DVec2,
        modifiers: Modifiers,
    ) -> Result<(), CurveError> {
        if self.dragging() != Some(target) {
            self.begin_drag(target)?;
        }
        self.drag_to(position, modifiers)?;
        Ok(())
    }

    /// Beendet den Drag und gibt den zuletzt gegriffenen Punkt zurück.
    pub fn end_drag(&mut self) -> Option<PointId> {
        let target = self.drag.take().map(|s| s.target);
        if let Some(target) = target {
            log::debug!("Drag beendet: {:?}", target);
        }
        target
    }

    /// Überträgt den Winkel `θ = atan2(dragged - anchor)` auf den Partner.
    ///
    /// Handler-Modus: `partner = anchor + |dragged - anchor|·(cos θ, sin θ)`.
    /// Richtungs-Modus: `partner = anchor + |partner - anchor|·(cos θ, sin θ)`.
    fn mirror_partner(
        &mut self,
        owner: AnchorId,
        dragged: DVec2,
        partner_id: ControlId,
        mode: MirrorMode,
    ) {
        if mode == MirrorMode::None {
            return;
        }
        let Some(anchor_pos) = self.anchors.get(&owner).map(|a| a.position) else {
            return;
        };
        let Some(partner) = self.controls.get_mut(&partner_id) else {
            return;
        };

        let offset = dragged - anchor_pos;
        let theta = offset.y.atan2(offset.x);
        let direction = DVec2::new(theta.cos(), theta.sin());
        let distance = match mode {
            MirrorMode::Handler => offset.length(),
            MirrorMode::Direction => anchor_pos.distance(partner.position),
            MirrorMode::None => return,
        };
        partner.position = anchor_pos + distance * direction;
    }
}
