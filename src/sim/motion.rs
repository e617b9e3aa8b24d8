//! Per-tick displacement for the craft and hazards
//!
//! Velocity is never stored: each tick applies gravity (and thrust when held)
//! directly to the craft's y, and a constant leftward step to every hazard.

use super::state::{Craft, Hazard, Tuning};

/// Apply gravity, then thrust if held, then hard-clamp into the field
pub fn move_craft(craft: &mut Craft, thrust_held: bool, tuning: &Tuning) {
    let mut y = craft.pos.y + tuning.gravity;
    if thrust_held {
        y -= tuning.thrust;
    }
    craft.pos.y = y.clamp(tuning.craft_min_y(), tuning.craft_max_y());
}

/// Shift every hazard left and drop those fully past the left edge
///
/// Produces the new live collection; spawn order is preserved.
pub fn advance_hazards(hazards: Vec<Hazard>, tuning: &Tuning) -> Vec<Hazard> {
    hazards
        .into_iter()
        .filter_map(|mut hazard| {
            hazard.pos.x -= tuning.hazard_speed;
            (!hazard.is_gone()).then_some(hazard)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_gravity_and_thrust_combine() {
        let tuning = Tuning::default();
        let mut craft = Craft::spawn(&tuning);
        craft.pos.y = 150.0;
        move_craft(&mut craft, true, &tuning);
        assert!((craft.pos.y - 148.2).abs() < 1e-4);
    }

    #[test]
    fn test_gravity_alone() {
        let tuning = Tuning::default();
        let mut craft = Craft::spawn(&tuning);
        craft.pos.y = 150.0;
        move_craft(&mut craft, false, &tuning);
        assert!((craft.pos.y - 151.2).abs() < 1e-4);
    }

    #[test]
    fn test_clamped_at_top_and_bottom() {
        let tuning = Tuning::default();
        let mut craft = Craft::spawn(&tuning);

        craft.pos.y = 1.0;
        move_craft(&mut craft, true, &tuning);
        assert_eq!(craft.pos.y, 0.0);

        craft.pos.y = 284.0;
        move_craft(&mut craft, false, &tuning);
        assert_eq!(craft.pos.y, 284.0);
    }

    #[test]
    fn test_hazards_move_left_and_cull_after_exit() {
        let tuning = Tuning::default();
        let size = Vec2::splat(40.0);
        let hazards = vec![
            Hazard::new(1, Vec2::new(-37.0, 0.0), size),
            Hazard::new(2, Vec2::new(-39.0, 0.0), size),
            Hazard::new(3, Vec2::new(300.0, 0.0), size),
        ];

        let live = advance_hazards(hazards, &tuning);
        // -39 + 40 = 1 -> kept; -41 + 40 = -1 -> culled
        let ids: Vec<u32> = live.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(live[0].pos.x, -39.0);
        assert_eq!(live[1].pos.x, 298.0);
    }

    #[test]
    fn test_right_edge_at_zero_is_kept() {
        let tuning = Tuning::default();
        let hazards = vec![Hazard::new(1, Vec2::new(-38.0, 0.0), Vec2::splat(40.0))];
        let live = advance_hazards(hazards, &tuning);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].pos.x + live[0].size.x, 0.0);
    }
}
