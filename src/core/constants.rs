// Leveling
pub const BASE_LEVEL_REQUIREMENTS: [u64; 5] = [1000, 2000, 3500, 5500, 8000];
pub const LEVEL_CURVE_BASE: f64 = 1000.0;
pub const LEVEL_CURVE_GROWTH: f64 = 1.5;
pub const STARTING_LEVEL: u32 = 1;

// Stat points per level crossed: (highest level in band, points)
pub const STAT_BONUS_BANDS: [(u32, u32); 3] = [(10, 3), (25, 4), (50, 5)];
pub const STAT_BONUS_MAX: u32 = 6;

// Starting character
pub const BASE_STAT_VALUE: u32 = 10;
pub const NUM_STATS: usize = 5;
pub const STARTING_HP: u32 = 100;
pub const STARTING_MP: u32 = 50;
pub const SHADOW_ARMY_BASE_CAPACITY: u32 = 10;

// HP / MP formulas
pub const BASE_HP: u32 = 100;
pub const HP_PER_VITALITY: u32 = 20;
pub const HP_PER_LEVEL: u32 = 10;
pub const BASE_MP: u32 = 50;
pub const MP_PER_INTELLIGENCE: u32 = 15;
pub const MP_PER_LEVEL: u32 = 5;

// Rank thresholds: a level strictly below the threshold stays in the rank
pub const RANK_LEVEL_THRESHOLDS: [u32; 5] = [10, 20, 30, 40, 50];

// Combat power weights
pub const POWER_PER_STRENGTH: f64 = 2.0;
pub const POWER_PER_AGILITY: f64 = 1.5;
pub const POWER_PER_INTELLIGENCE: f64 = 1.8;
pub const POWER_PER_VITALITY: f64 = 1.2;
pub const POWER_PER_SENSE: f64 = 1.0;
pub const POWER_PER_DEFENSE: f64 = 0.8;

// Loot generation
pub const GENERIC_RARITY_WEIGHTS: [u32; 5] = [50, 30, 15, 4, 1];
pub const DUNGEON_DROP_RARITY_CHANCES: [f64; 5] = [0.40, 0.30, 0.20, 0.08, 0.02];
pub const RARITY_MULTIPLIERS: [f64; 5] = [1.0, 1.5, 2.0, 3.0, 4.0];
pub const ITEM_VALUE_PER_LEVEL: u32 = 5;
pub const ITEM_JITTER_MIN: f64 = 0.8;
pub const ITEM_JITTER_MAX: f64 = 1.2;
pub const ITEM_STARTING_DURABILITY: u32 = 100;

// Dungeon combat: required power indexed by rank E..S
pub const DUNGEON_REQUIRED_POWER: [u32; 6] = [100, 300, 800, 2000, 5000, 12000];
pub const DUNGEON_SUCCESS_THRESHOLD: f64 = 0.7;
pub const DUNGEON_JITTER_MIN: f64 = 0.8;
pub const DUNGEON_JITTER_MAX: f64 = 1.2;
pub const DUNGEON_CLEAR_EXP_DIVISOR: u32 = 10;
pub const DUNGEON_CONSOLATION_EXP_DIVISOR: u32 = 50;
pub const DUNGEON_DROP_CHANCE: f64 = 0.3;
pub const DUNGEON_CLEAR_TIME_MIN_SECS: u32 = 300;
pub const DUNGEON_CLEAR_TIME_MAX_SECS: u32 = 1800;

// Instant dungeon
pub const INSTANT_MIN_ENCOUNTERS: u32 = 3;
pub const INSTANT_MAX_ENCOUNTERS: u32 = 7;
pub const INSTANT_ENEMY_POWER_MIN: f64 = 50.0;
pub const INSTANT_ENEMY_POWER_MAX: f64 = 200.0;
pub const INSTANT_LEVELS_PER_SCALE_STEP: u32 = 5;
pub const INSTANT_VICTORY_RATIO: f64 = 0.7;
pub const INSTANT_EXTRACTABLE_CHANCE: f64 = 0.3;
pub const INSTANT_EXP_DIVISOR: f64 = 10.0;

// Shadow extraction
pub const EXTRACTION_BONUS_PER_LEVEL: f64 = 0.02;
pub const EXTRACTION_MAX_SUCCESS_RATE: f64 = 0.95;
pub const SHADOW_ATTACK_SPREAD: i64 = 50;
pub const SHADOW_DEFENSE_SPREAD: i64 = 25;
pub const SHADOW_HP_PER_BASE: u32 = 5;
pub const SHADOW_STARTING_LOYALTY: u32 = 50;
pub const SHADOW_STARTING_MAX_EXPERIENCE: u64 = 1000;

// Shadow upgrade
pub const SHADOW_MAX_LEVEL: u32 = 100;
pub const SHADOW_MAX_EXPERIENCE_GROWTH: f64 = 1.5;
pub const SHADOW_STAT_GROWTH: f64 = 0.10;
pub const SHADOW_LOYALTY_PER_UPGRADE: u32 = 5;
pub const SHADOW_MAX_LOYALTY: u32 = 100;

// Daily quest
pub const DAILY_PUSHUPS_TARGET: u32 = 100;
pub const DAILY_SITUPS_TARGET: u32 = 100;
pub const DAILY_RUNNING_KM_TARGET: f64 = 10.0;
pub const DAILY_REWARD_EXPERIENCE: u64 = 1000;
pub const DAILY_REWARD_STRENGTH: u32 = 2;
pub const DAILY_REWARD_VITALITY: u32 = 1;
pub const DAILY_REWARD_AGILITY: u32 = 1;
pub const PENALTY_DURATION_MINUTES: i64 = 120;

// Generic quest rewards
pub const QUEST_DAILY_STRENGTH_CHANCE: f64 = 0.3;
pub const QUEST_WEEKLY_POTION_CHANCE: f64 = 0.5;
