// Map geometry (continuous units)
pub const CELL_SIZE: u32 = 20;
pub const GRID_SIZE: u32 = 20;
pub const MAP_SIZE: u32 = CELL_SIZE * GRID_SIZE;
pub const MARKER_SIZE: u32 = 10;
pub const MOVE_STEP: u32 = 5;

// Resource caps and starting values
pub const RESOURCE_CAP: u32 = 100;
pub const START_HEALTH: u32 = 100;
pub const START_ENERGY: u32 = 100;
pub const START_FUEL: u32 = 100;
pub const START_PARTS: u32 = 100;
pub const START_BULLETS: u32 = 100;
pub const START_MONEY: u32 = 1000;

// Passive decay per move, applied to fuel, parts and energy
pub const PASSIVE_DECAY: u32 = 1;
// Health lost per decaying resource sitting at zero
pub const STARVATION_DAMAGE: u32 = 1;

// Message logs (newest first)
pub const MESSAGE_LOG_CAPACITY: usize = 5;
pub const COMBAT_LOG_CAPACITY: usize = 5;

// Event roll: percentile in [1, 100], magnitude base in [-100, 100]
pub const EVENT_ROLL_MIN: u32 = 1;
pub const EVENT_ROLL_MAX: u32 = 100;
pub const EVENT_BASE_MIN: i32 = -100;
pub const EVENT_BASE_MAX: i32 = 100;

// Encounter enemy stats
pub const ENEMY_MAX_HEALTH: u32 = 100;
pub const ENEMY_DAMAGE_PER_HIT: u32 = 20;

// Combat tuning
pub const PLAYER_DAMAGE_MIN: u32 = 10;
pub const PLAYER_DAMAGE_MAX: u32 = 30; // exclusive
pub const VICTORY_REWARD_MIN: u32 = 50;
pub const VICTORY_REWARD_MAX: u32 = 150; // exclusive
pub const HEAL_AMOUNT: u32 = 30;
pub const RETREAT_PENALTY: u32 = 20;
pub const ENEMY_TURN_DELAY_MS: u64 = 1000;

// Front end
pub const TICK_INTERVAL_MS: u64 = 50;
