//! Value objects - Immutable objects defined by their attributes

mod capability;
mod match_filter;
mod matcher_settings;
mod material;
mod meta_variant;

// Capability-dependent metadata queries
pub use capability::Capability;

// Comparison categories and filters
pub use match_filter::{MatchCategory, MatchFilter};

// Matcher configuration
pub use matcher_settings::{category_env_var, MatcherSettings, MatcherWorkType};

pub use material::Material;

// Subtype metadata
pub use meta_variant::{
    BannerPattern, BookGeneration, DyeColor, FireworkEffect, FireworkShape, MetaVariant,
    PotionData, PotionEffect, Rgb, VariantKind,
};
