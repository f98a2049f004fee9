use std::sync::Arc;

use crate::food::data::{AliasMap, NutritionTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
    Alias,
}

/// Outcome of a successful name resolution.
///
/// An `Alias` match may name a food that is not in the table; callers must
/// check membership before treating it as found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub canonical: &'a str,
    pub kind: MatchKind,
}

/// Maps free-text food names onto canonical nutrition table keys.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    table: Arc<NutritionTable>,
    aliases: Arc<AliasMap>,
}

impl AliasResolver {
    pub fn new(table: Arc<NutritionTable>, aliases: Arc<AliasMap>) -> Self {
        Self { table, aliases }
    }

    pub fn table(&self) -> &NutritionTable {
        &self.table
    }

    /// Trims and lowercases. Lowercasing leaves Hangul untouched.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Resolves `raw` by exact key, then substring, then alias dictionary.
    ///
    /// The substring tier returns the first key in table order that contains
    /// the input or is contained in it. This is positional, not a best match:
    /// "참치김밥" resolves to "밥" because "밥" precedes "김밥" in the table.
    pub fn resolve(&self, raw: &str) -> Option<NameMatch<'_>> {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return None;
        }

        if let Some(name) = self.table.names().find(|name| *name == normalized) {
            return Some(NameMatch {
                canonical: name,
                kind: MatchKind::Exact,
            });
        }

        if let Some(name) = self
            .table
            .names()
            .find(|name| name.contains(normalized.as_str()) || normalized.contains(name))
        {
            return Some(NameMatch {
                canonical: name,
                kind: MatchKind::Substring,
            });
        }

        self.aliases.get(&normalized).map(|canonical| NameMatch {
            canonical,
            kind: MatchKind::Alias,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::data::FoodEntry;
    use crate::food::models::NutritionRecord;

    fn builtin_resolver() -> AliasResolver {
        AliasResolver::new(
            Arc::new(NutritionTable::builtin()),
            Arc::new(AliasMap::builtin()),
        )
    }

    #[test]
    fn test_exact_match_for_every_key() {
        let resolver = builtin_resolver();
        for name in resolver.table().names() {
            let found = resolver.resolve(name).unwrap();
            assert_eq!(found.canonical, name);
            assert_eq!(found.kind, MatchKind::Exact);
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let resolver = builtin_resolver();
        let found = resolver.resolve("  치킨 \n").unwrap();
        assert_eq!(found.canonical, "치킨");
        assert_eq!(found.kind, MatchKind::Exact);
    }

    #[test]
    fn test_key_containing_input_wins_by_position() {
        let resolver = builtin_resolver();
        // Both 김치찌개 and 된장찌개 contain 찌개; 김치찌개 comes first.
        for _ in 0..3 {
            let found = resolver.resolve("찌개").unwrap();
            assert_eq!(found.canonical, "김치찌개");
            assert_eq!(found.kind, MatchKind::Substring);
        }
    }

    #[test]
    fn test_input_containing_key_wins_by_position() {
        let resolver = builtin_resolver();
        let found = resolver.resolve("참치김밥").unwrap();
        assert_eq!(found.canonical, "밥");
        assert_eq!(found.kind, MatchKind::Substring);
    }

    #[test]
    fn test_tie_break_follows_custom_table_order() {
        let entry = |name: &str| FoodEntry {
            name: name.to_string(),
            nutrition: NutritionRecord::zeroed(),
        };
        let table = NutritionTable::new(vec![entry("떡국"), entry("떡")]).unwrap();
        let resolver = AliasResolver::new(Arc::new(table), Arc::new(AliasMap::default()));
        let found = resolver.resolve("떡볶이").unwrap();
        assert_eq!(found.canonical, "떡");

        let found = resolver.resolve("국").unwrap();
        assert_eq!(found.canonical, "떡국");
    }

    #[test]
    fn test_alias_resolves_to_table_key() {
        let resolver = builtin_resolver();
        let aliases = AliasMap::builtin();
        for (alias, canonical) in aliases.iter() {
            if !resolver.table().contains(canonical) {
                continue;
            }
            let found = resolver.resolve(alias).unwrap();
            assert_eq!(found.canonical, canonical, "alias {}", alias);
        }
    }

    #[test]
    fn test_alias_lookup_is_case_insensitive() {
        let resolver = builtin_resolver();
        let found = resolver.resolve("Kimchi Stew").unwrap();
        assert_eq!(found.canonical, "김치찌개");
        assert_eq!(found.kind, MatchKind::Alias);
    }

    #[test]
    fn test_alias_may_point_outside_table() {
        let resolver = builtin_resolver();
        let found = resolver.resolve("짜장면").unwrap();
        assert_eq!(found.canonical, "자장면");
        assert_eq!(found.kind, MatchKind::Alias);
        assert!(!resolver.table().contains(found.canonical));
    }

    #[test]
    fn test_unknown_and_empty_input() {
        let resolver = builtin_resolver();
        assert!(resolver.resolve("pizza margherita").is_none());
        assert!(resolver.resolve("").is_none());
        assert!(resolver.resolve("   ").is_none());
    }
}
