// Frame timing constants
pub const TICK_INTERVAL_MS: u64 = 16;

// Play field dimensions (game units, scaled to the terminal at draw time)
pub const FIELD_WIDTH: f64 = 400.0;
pub const FIELD_HEIGHT: f64 = 600.0;

// Avatar physics constants (per frame, deliberately frame-coupled)
pub const GRAVITY: f64 = 0.4;
pub const JUMP_STRENGTH: f64 = -7.5;

// Avatar geometry
pub const AVATAR_SIZE: f64 = 38.0;
pub const AVATAR_X: f64 = 50.0;

// Obstacle geometry and movement
pub const PIPE_WIDTH: f64 = 60.0;
pub const GAP_SIZE: f64 = 230.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const SPAWN_SPACING: f64 = 200.0;

// Terrain margins
pub const FLOOR_MARGIN: f64 = 10.0;
pub const GAP_MARGIN: f64 = 40.0;

// Collision leniency: hitboxes shrink from visual bounds by this much per side
pub const HITBOX_INSET: f64 = 4.0;
