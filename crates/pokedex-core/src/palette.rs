//! Type Palette
//!
//! Utility classes for type badges and card backgrounds.

/// (type, badge color, card gradient)
pub const TYPE_PALETTE: &[(&str, &str, &str)] = &[
    ("normal", "bg-gray-400", "from-gray-400 to-gray-600"),
    ("fire", "bg-red-500", "from-red-400 to-orange-600"),
    ("water", "bg-blue-500", "from-blue-400 to-blue-600"),
    ("electric", "bg-yellow-400", "from-yellow-300 to-yellow-500"),
    ("grass", "bg-green-500", "from-green-400 to-green-600"),
    ("ice", "bg-blue-300", "from-blue-200 to-blue-400"),
    ("fighting", "bg-red-700", "from-red-600 to-red-800"),
    ("poison", "bg-purple-500", "from-purple-400 to-purple-600"),
    ("ground", "bg-yellow-600", "from-yellow-500 to-yellow-700"),
    ("flying", "bg-indigo-400", "from-indigo-300 to-indigo-500"),
    ("psychic", "bg-pink-500", "from-pink-400 to-pink-600"),
    ("bug", "bg-green-400", "from-green-300 to-green-500"),
    ("rock", "bg-yellow-800", "from-yellow-700 to-yellow-900"),
    ("ghost", "bg-purple-700", "from-purple-600 to-purple-800"),
    ("dragon", "bg-indigo-700", "from-indigo-600 to-indigo-800"),
    ("dark", "bg-gray-800", "from-gray-700 to-gray-900"),
    ("steel", "bg-gray-500", "from-gray-400 to-gray-600"),
    ("fairy", "bg-pink-300", "from-pink-200 to-pink-400"),
];

pub const DEFAULT_BADGE: &str = "bg-gray-400";
pub const DEFAULT_GRADIENT: &str = "from-gray-400 to-gray-600";

fn lookup(type_name: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    TYPE_PALETTE.iter().find(|(name, _, _)| *name == type_name)
}

pub fn badge_class(type_name: &str) -> &'static str {
    lookup(type_name).map_or(DEFAULT_BADGE, |(_, badge, _)| *badge)
}

/// Gradient for the primary type; untyped or unknown falls back to gray
pub fn gradient_class(primary_type: Option<&str>) -> &'static str {
    primary_type
        .and_then(lookup)
        .map_or(DEFAULT_GRADIENT, |(_, _, gradient)| *gradient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        assert_eq!(badge_class("fire"), "bg-red-500");
        assert_eq!(gradient_class(Some("water")), "from-blue-400 to-blue-600");
    }

    #[test]
    fn test_unknown_types_fall_back() {
        assert_eq!(badge_class("shadow"), DEFAULT_BADGE);
        assert_eq!(gradient_class(Some("stellar")), DEFAULT_GRADIENT);
        assert_eq!(gradient_class(None), DEFAULT_GRADIENT);
    }

    #[test]
    fn test_palette_covers_canonical_types() {
        assert_eq!(TYPE_PALETTE.len(), 18);
    }
}
