//! Input handling and the per-frame update step.

use super::types::{Obstacle, RunStatus, Session};
use crate::constants::{
    AVATAR_SIZE, AVATAR_X, FIELD_HEIGHT, FIELD_WIDTH, FLOOR_MARGIN, GAP_SIZE, GRAVITY,
    HITBOX_INSET, JUMP_STRENGTH, PIPE_SPEED, PIPE_WIDTH, SPAWN_SPACING,
};
use rand::Rng;

/// Player actions. Edge-triggered: one action per discrete press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Primary input (Space / Up / Enter / mouse press). Impulse while
    /// active, start otherwise.
    Primary,
    /// Restart the run from any state, including mid-fall.
    Restart,
}

/// Apply a discrete input action to the session.
pub fn handle_input(session: &mut Session, input: GameInput) {
    match input {
        GameInput::Primary => match session.status {
            // Impulse is an instantaneous velocity reassignment, not additive
            RunStatus::Active => session.avatar_vel = JUMP_STRENGTH,
            RunStatus::Idle | RunStatus::Ended => session.start_run(),
        },
        GameInput::Restart => session.start_run(),
    }
}

/// Advance the simulation by one frame.
///
/// No-op unless the session is active. Deterministic given the session
/// and the injected random source (one draw per obstacle spawn).
pub fn step<R: Rng>(session: &mut Session, rng: &mut R) {
    if session.status != RunStatus::Active {
        return;
    }

    // Integrate physics: constant per-frame acceleration, no velocity clamp
    session.avatar_vel += GRAVITY;
    session.avatar_y += session.avatar_vel;

    // Floor breach ends the frame immediately; no ceiling check by design
    if session.avatar_y > FIELD_HEIGHT - AVATAR_SIZE - FLOOR_MARGIN {
        session.end_run();
        return;
    }

    // Spawn at most one obstacle per frame once spacing allows
    let want_spawn = session
        .obstacles
        .last()
        .map_or(true, |o| o.x < FIELD_WIDTH - SPAWN_SPACING);
    if want_spawn {
        session.spawn_obstacle(rng);
    }

    // Scroll left and drop obstacles fully past the left edge
    for obstacle in &mut session.obstacles {
        obstacle.x -= PIPE_SPEED;
    }
    session.obstacles.retain(|o| o.trailing_edge() > 0.0);

    // Collision and scoring, in screen order; first hit ends the frame.
    // Checked against the position the avatar is about to occupy.
    for i in 0..session.obstacles.len() {
        if hits_obstacle(session.avatar_y, &session.obstacles[i]) {
            session.end_run();
            return;
        }
        let obstacle = &mut session.obstacles[i];
        if !obstacle.scored && obstacle.passed_avatar() {
            obstacle.scored = true;
            session.score += 1;
        }
    }
}

/// Axis-aligned overlap test between the avatar and either barrier of an
/// obstacle. Both hitboxes shrink from their visual bounds by
/// `HITBOX_INSET` per side (deliberate leniency).
fn hits_obstacle(avatar_y: f64, obstacle: &Obstacle) -> bool {
    let avatar_left = AVATAR_X + HITBOX_INSET;
    let avatar_right = AVATAR_X + AVATAR_SIZE - HITBOX_INSET;
    let avatar_top = avatar_y + HITBOX_INSET;
    let avatar_bottom = avatar_y + AVATAR_SIZE - HITBOX_INSET;

    let pipe_left = obstacle.x + HITBOX_INSET;
    let pipe_right = obstacle.x + PIPE_WIDTH - HITBOX_INSET;
    if avatar_right <= pipe_left || avatar_left >= pipe_right {
        return false;
    }

    // Upper barrier spans [0, gap_top], lower spans [gap_top + GAP_SIZE, field bottom]
    let upper_bottom = obstacle.gap_top - HITBOX_INSET;
    let lower_top = obstacle.gap_top + GAP_SIZE + HITBOX_INSET;
    avatar_top < upper_bottom || avatar_bottom > lower_top
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn active_session() -> Session {
        let mut session = Session::new();
        session.start_run();
        session
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_primary_input_sets_velocity_while_active() {
        let mut session = active_session();
        session.avatar_vel = 9.0;
        handle_input(&mut session, GameInput::Primary);
        assert!((session.avatar_vel - JUMP_STRENGTH).abs() < f64::EPSILON);
    }

    #[test]
    fn test_primary_input_starts_from_idle_and_ended() {
        let mut session = Session::new();
        handle_input(&mut session, GameInput::Primary);
        assert_eq!(session.status, RunStatus::Active);

        session.end_run();
        handle_input(&mut session, GameInput::Primary);
        assert_eq!(session.status, RunStatus::Active);
    }

    #[test]
    fn test_gravity_integration() {
        let mut session = active_session();
        let vel = session.avatar_vel;
        let y = session.avatar_y;
        step(&mut session, &mut rng());
        assert!((session.avatar_vel - (vel + GRAVITY)).abs() < f64::EPSILON);
        assert!((session.avatar_y - (y + vel + GRAVITY)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_velocity_clamp() {
        let mut session = active_session();
        session.avatar_y = 50.0;
        session.avatar_vel = 100.0;
        step(&mut session, &mut rng());
        assert!((session.avatar_vel - (100.0 + GRAVITY)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_noop_unless_active() {
        let mut session = Session::new();
        let y = session.avatar_y;
        step(&mut session, &mut rng());
        assert!((session.avatar_y - y).abs() < f64::EPSILON);
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_floor_breach_skips_rest_of_frame() {
        let mut session = active_session();
        session.avatar_y = 560.0;
        session.avatar_vel = 5.0;
        step(&mut session, &mut rng());
        assert_eq!(session.status, RunStatus::Ended);
        // No obstacle processing happened on the terminating frame
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_no_ceiling_check() {
        let mut session = active_session();
        session.avatar_y = 5.0;
        session.avatar_vel = -20.0;
        step(&mut session, &mut rng());
        assert_eq!(session.status, RunStatus::Active);
        assert!(session.avatar_y < 0.0);
    }

    #[test]
    fn test_first_frame_spawns_obstacle() {
        let mut session = active_session();
        step(&mut session, &mut rng());
        assert_eq!(session.obstacles.len(), 1);
        // Spawned at the right edge, then advanced once
        assert!((session.obstacles[0].x - (FIELD_WIDTH - PIPE_SPEED)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_waits_for_spacing() {
        let mut session = active_session();
        session.obstacles.push(Obstacle {
            x: FIELD_WIDTH - SPAWN_SPACING + 50.0,
            gap_top: 200.0,
            scored: false,
        });
        step(&mut session, &mut rng());
        assert_eq!(session.obstacles.len(), 1);
    }

    #[test]
    fn test_obstacles_scroll_and_cull() {
        let mut session = active_session();
        session.obstacles.push(Obstacle {
            x: -PIPE_WIDTH + 1.0,
            gap_top: 200.0,
            scored: true,
        });
        session.obstacles.push(Obstacle {
            x: 200.0,
            gap_top: 200.0,
            scored: false,
        });
        step(&mut session, &mut rng());
        // Off-screen obstacle culled, remaining one moved left
        assert!(session.obstacles.iter().all(|o| o.trailing_edge() > 0.0));
        assert!(session
            .obstacles
            .iter()
            .any(|o| (o.x - (200.0 - PIPE_SPEED)).abs() < f64::EPSILON));
    }

    #[test]
    fn test_collision_in_upper_barrier() {
        let mut session = active_session();
        session.avatar_y = 50.0;
        session.avatar_vel = 0.0;
        session.obstacles.push(Obstacle {
            x: AVATAR_X + PIPE_SPEED,
            gap_top: 300.0,
            scored: false,
        });
        step(&mut session, &mut rng());
        assert_eq!(session.status, RunStatus::Ended);
    }

    #[test]
    fn test_no_collision_inside_gap() {
        // Gap [200, 430]: avatar hitbox fully inside registers no collision
        let obstacle = Obstacle {
            x: AVATAR_X,
            gap_top: 200.0,
            scored: false,
        };
        assert!(!hits_obstacle(250.0, &obstacle));
        assert!(hits_obstacle(150.0, &obstacle));
        assert!(hits_obstacle(420.0, &obstacle));
    }

    #[test]
    fn test_hitbox_inset_leniency() {
        // Just grazing the barrier visually, but inside the inset margin
        let obstacle = Obstacle {
            x: AVATAR_X,
            gap_top: 200.0,
            scored: false,
        };
        // Visual top edge at 198 overlaps the upper barrier by 2 units,
        // within the inset, so no collision
        assert!(!hits_obstacle(198.0, &obstacle));
    }

    #[test]
    fn test_scoring_exactly_once() {
        let mut session = active_session();
        session.avatar_y = 250.0;
        session.avatar_vel = 0.0;
        session.obstacles.push(Obstacle {
            // Trailing edge lands just left of the avatar after one scroll
            x: AVATAR_X - PIPE_WIDTH - 1.0,
            gap_top: 200.0,
            scored: false,
        });

        step(&mut session, &mut rng());
        assert_eq!(session.score, 1);
        assert!(session.obstacles[0].scored);

        let score = session.score;
        step(&mut session, &mut rng());
        assert_eq!(session.score, score);
    }

    #[test]
    fn test_not_scored_until_trailing_edge_crosses() {
        let mut session = active_session();
        session.avatar_y = 250.0;
        session.obstacles.push(Obstacle {
            x: 60.0,
            gap_top: 200.0,
            scored: false,
        });
        // Trailing edge 120 - PIPE_SPEED is still right of the avatar column
        step(&mut session, &mut rng());
        assert!(!session.obstacles[0].scored);
        assert_eq!(session.score, 0);
    }
}
