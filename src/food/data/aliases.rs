use std::collections::HashMap;

// Informal or romanized name -> canonical table name. Targets are not
// required to exist in the table.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("kimchi stew", "김치찌개"),
    ("kimchi jjigae", "김치찌개"),
    ("김치찌게", "김치찌개"),
    ("salad", "샐러드"),
    ("chicken breast", "닭가슴살"),
    ("rice", "밥"),
    ("흰쌀밥", "밥"),
    ("공기밥", "밥"),
    ("chicken", "치킨"),
    ("fried chicken", "치킨"),
    ("후라이드치킨", "치킨"),
    ("soybean paste stew", "된장찌개"),
    ("bulgogi", "불고기"),
    ("bibimbap", "비빔밥"),
    ("gimbap", "김밥"),
    ("kimbap", "김밥"),
    ("tteokbokki", "떡볶이"),
    ("ramen", "라면"),
    ("ramyeon", "라면"),
    ("pork belly", "삼겹살"),
    ("samgyeopsal", "삼겹살"),
    ("egg", "계란"),
    ("달걀", "계란"),
    ("salmon", "연어구이"),
    ("tofu", "두부"),
    ("japchae", "잡채"),
    ("seaweed soup", "미역국"),
    ("milk", "우유"),
    ("banana", "바나나"),
    ("apple", "사과"),
    ("짜장면", "자장면"),
    ("jjajangmyeon", "자장면"),
];

/// Fixed dictionary from informal food names to canonical table names.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    aliases: HashMap<String, String>,
}

impl AliasMap {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(alias, canonical)| (alias.into(), canonical.into()))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_ALIASES.iter().copied())
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical.as_str()))
    }
}
