//! Fixed domain constants: material yields, bar lengths, spacing standards
//! and waste defaults. All lengths in meters, areas in square meters.

// Panels

/// Coverage of one panel (m² per panel)
pub const PANEL_YIELD_M2: f64 = 2.98;

/// Wall segments narrower than this (and shorter than the height threshold)
/// are batched into the fractional panel bucket
pub const SMALL_SEGMENT_WIDTH_M: f64 = 0.60;

/// Height threshold paired with [`SMALL_SEGMENT_WIDTH_M`]
pub const SMALL_SEGMENT_HEIGHT_M: f64 = 2.44;

/// Ceiling/soffit contributions below this area go to the fractional bucket
pub const SMALL_ITEM_AREA_M2: f64 = 1.5;

// Wall framing

/// Track channel bar length
pub const TRACK_CHANNEL_LENGTH_M: f64 = 3.05;

/// Longest stud bar used for vertical splicing
pub const STUD_MAX_LENGTH_M: f64 = 3.66;

/// Overlap added per stud splice
pub const STUD_SPLICE_M: f64 = 0.30;

/// Cap nails per track channel bar
pub const CAP_NAILS_PER_TRACK: f64 = 8.0;

/// 1/2" screws per stud
pub const SCREWS_PER_STUD: f64 = 4.0;

/// 1" screws per panel
pub const SCREWS_PER_PANEL: f64 = 40.0;

// Ceiling framing

/// Furring (Canal Liston) bar length
pub const FURRING_CHANNEL_LENGTH_M: f64 = 3.66;

/// Support channel (Canal Soporte) bar length
pub const SUPPORT_CHANNEL_LENGTH_M: f64 = 3.66;

/// Main furring spacing in ceilings
pub const CEILING_FURRING_SPACING_M: f64 = 0.40;

/// Support channel and hanger grid spacing in ceilings
pub const CEILING_SUPPORT_SPACING_M: f64 = 0.90;

/// Extra length cut per hanger leg on top of the plenum
pub const HANGER_EXTRA_M: f64 = 0.10;

/// Extra support bars fraction once the run exceeds one bar
pub const SUPPORT_EXTRA_FACTOR: f64 = 0.30;

/// 1/2" screws per main furring bar
pub const SCREWS_PER_FURRING: f64 = 12.0;

/// Fasteners (cap nails or 1/2" screws) per hanger leg
pub const FASTENERS_PER_HANGER: f64 = 2.0;

// Edge trim

/// Edge trim (Angular de Lamina) bar length
pub const EDGE_TRIM_LENGTH_M: f64 = 2.44;

/// Overlap per edge trim splice
pub const EDGE_TRIM_SPLICE_M: f64 = 0.15;

/// Fasteners per edge trim bar
pub const FASTENERS_PER_EDGE_TRIM: f64 = 5.0;

// Soffits

/// Assumed profile height when a soffit's width/height cannot be used
pub const SOFFIT_PROFILE_HEIGHT_M: f64 = 0.30;

/// 1/2" screws per horizontal soffit furring bar
pub const SCREWS_PER_SOFFIT_FURRING: f64 = 2.0;

/// Cap nails per vertical soffit furring bar
pub const CAP_NAILS_PER_SOFFIT_FURRING: f64 = 2.0;

// Finishing yields

/// Joint compound coverage per box
pub const JOINT_COMPOUND_M2_PER_BOX: f64 = 22.0;

/// Basecoat coverage per sack
pub const BASECOAT_M2_PER_SACK: f64 = 8.0;

/// Joint tape (paper or mesh) per panel
pub const TAPE_M_PER_PANEL: f64 = 7.0;

/// Sandpaper sheets per panel (one sheet every two panels)
pub const SANDPAPER_SHEETS_PER_PANEL: f64 = 0.5;

/// Panels finished per sponge
pub const PANELS_PER_SPONGE: f64 = 15.0;

// Adjustment defaults

/// Global waste (merma) applied after the first rounding
pub const DEFAULT_WASTE_PERCENT: f64 = 5.0;

/// Panel waste applied to soffit contributions (no user input exists)
pub const DEFAULT_SOFFIT_PANEL_WASTE_PERCENT: f64 = 10.0;
