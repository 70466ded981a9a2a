use crate::config::TreeConfig;
use crate::types::Depth;
use glam::Vec2;

/// A single straight branch of the tree, from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
    pub depth: Depth,
}

/// Generates all segments of a self-similar branching tree.
///
/// `angle` is in radians, measured from the positive x axis and increasing
/// clockwise in a y-down (screen) coordinate system, so an upward trunk is
/// `-PI / 2`. Each branch ends at `origin + (cos(angle), sin(angle)) * length`
/// and splits into two children scaled by `cfg.scale_factor`, offset by
/// `-cfg.branch_angle_delta` and `+cfg.branch_angle_delta`.
///
/// Branches shorter than `cfg.min_branch_length` are not emitted, which also
/// makes non-positive lengths yield an empty result. Segments come out in
/// pre-order: parent first, then the full minus-angle subtree, then the
/// plus-angle subtree.
pub fn generate(cfg: &TreeConfig, origin: Vec2, length: f32, angle: f32) -> Vec<Segment> {
    let mut segments = Vec::new();
    grow(cfg, origin, length, angle, 0, &mut segments);
    segments
}

fn grow(
    cfg: &TreeConfig,
    origin: Vec2,
    length: f32,
    angle: f32,
    depth: Depth,
    out: &mut Vec<Segment>,
) {
    if length < cfg.min_branch_length {
        return;
    }

    let end = origin + Vec2::from_angle(angle) * length;
    out.push(Segment {
        start: origin,
        end,
        depth,
    });

    let child_len = length * cfg.scale_factor;
    grow(cfg, end, child_len, angle - cfg.branch_angle_delta, depth + 1, out);
    grow(cfg, end, child_len, angle + cfg.branch_angle_delta, depth + 1, out);
}
