//! Storage constants and runtime configuration defaults

// Grid storage
/// Side of the square chunks a layer allocates on first write
pub const CHUNK_SIDE: u16 = 16;

// Stroke images
/// Minimum alpha for a pixel to count as a stroke
pub const STROKE_ALPHA_THRESHOLD: u8 = 128;
/// Maximum accepted stroke image side in pixels
pub const MAX_STROKE_IMAGE_DIMENSION: u32 = 4096;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Fixed seed for reproducible scatter erasing
pub const DEFAULT_SEED: u64 = 42;
/// Random cells erased after painting unless overridden
pub const DEFAULT_SCATTER: usize = 0;
/// Output pixels per cell side
pub const DEFAULT_CELL_SCALE: u32 = 4;
/// Largest accepted cell scale
pub const MAX_CELL_SCALE: u32 = 64;
/// Log level used when none is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Suffix of the optional companion image listing cells to erase
pub const ERASE_SUFFIX: &str = "_erase";

// Render palette (RGBA)
/// Color of painted fill
pub const FILL_COLOR: [u8; 4] = [46, 52, 64, 255];
/// Base color of fringe cells, shaded per edge shape
pub const FRINGE_COLOR: [u8; 4] = [191, 97, 106, 255];
/// Base color of area cells, shaded per blend shape
pub const AREA_COLOR: [u8; 4] = [163, 190, 140, 255];
/// Darkest shade applied to the last sprite slot, as a fraction of the base
pub const MIN_SHADE: f32 = 0.55;
