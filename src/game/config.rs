//! Per-game constants, passed explicitly to the timer, gate and stats code.

/// Static description of one escape room game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub name: &'static str,
    /// Countdown length in seconds.
    pub total_secs: u32,
    /// Prefix for the page's local-storage keys (`{prefix}StartTime`, ...).
    pub storage_prefix: &'static str,
    /// Pages in play order; a room's progress value is its index here.
    pub rooms: &'static [&'static str],
    /// SHA-256 hex digest of each room's password, keyed by room id.
    pub digests: &'static [(&'static str, &'static str)],
    pub share_headline: &'static str,
    pub share_call: &'static str,
}

const ROOMS: &[&str] = &[
    "index.html",
    "room1.html",
    "room2.html",
    "room3.html",
    "room4.html",
    "victory.html",
];

pub const BIBLE: GameConfig = GameConfig {
    name: "bible",
    total_secs: 30 * 60,
    storage_prefix: "escape",
    rooms: ROOMS,
    digests: &[
        ("index", "7cefbabe5b85eeed081c02b79246437caebde64c0f15f13f76574b615523c008"),
        ("room1", "bdc5d8a48c23897906b09a9a3680bd2e9c8b3121edbda36f949800f0959c8d55"),
        ("room2", "5f9c4ab08cac7457e9111a30e4664920607ea2c115a1433d7be98e97e64244ca"),
        ("room3", "7eb2534933da28acb912f29c8c4cf93fbd9d962a8fefbc7ce36a658c43cc62fc"),
        ("room4", "9556b82499cc0aaf86aee7f0d253e17c61b7ef73d48a295f37d98f08b04ffa7f"),
    ],
    share_headline: "🏰 עברתי את חדר הבריחה של התנ\"ך!",
    share_call: "🔥 אתה מעז להיכנס?",
};

pub const EXODUS: GameConfig = GameConfig {
    name: "exodus",
    total_secs: 30 * 60,
    storage_prefix: "exodus_",
    rooms: ROOMS,
    digests: &[
        ("index", "b24b283344eaac737f4e392cbbdeedb5df5c54c156b6411013d6b6b3523fc67d"),
        ("room1", "fed88b40aba63cac05eadd5db0088c036005ec235c7be6fd87d656946b733332"),
        ("room2", "284b7e6d788f363f910f7beb1910473e23ce9d6c871f1ce0f31f22a982d48ad4"),
        ("room3", "d59eced1ded07f84c145592f65bdf854358e009c5cd705f5215bf18697fed103"),
        ("room4", "ad57366865126e55649ecb23ae1d48887544976efea46a48eb5d85a6eeb4d306"),
    ],
    share_headline: "🏛️ יצאתי ממצרים! חדר בריחה דיגיטלי — יציאת מצרים",
    share_call: "🔥 מספיק אמיץ?",
};

const GAMES: [&GameConfig; 2] = [&BIBLE, &EXODUS];

impl GameConfig {
    pub fn by_name(name: &str) -> Option<&'static GameConfig> {
        GAMES.into_iter().find(|g| g.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn room_digest(&self, room_id: &str) -> Option<&'static str> {
        self.digests
            .iter()
            .find(|(id, _)| *id == room_id)
            .map(|(_, digest)| *digest)
    }

    /// Progress index of `page` in the room order.
    pub fn room_index(&self, page: &str) -> Option<usize> {
        self.rooms.iter().position(|r| *r == page)
    }

    pub fn storage_key(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.storage_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(GameConfig::by_name("Exodus"), Some(&EXODUS));
        assert_eq!(GameConfig::by_name("bible").map(|g| g.total_secs), Some(1800));
        assert!(GameConfig::by_name("genesis").is_none());
        for game in GAMES {
            assert_eq!(GameConfig::by_name(&game.name.to_uppercase()), Some(game));
        }
    }

    #[test]
    fn test_storage_keys_match_page_scripts() {
        assert_eq!(BIBLE.storage_key("StartTime"), "escapeStartTime");
        assert_eq!(EXODUS.storage_key("Errors"), "exodus_Errors");
    }

    #[test]
    fn test_room_lookup() {
        assert_eq!(BIBLE.room_index("room2.html"), Some(2));
        assert_eq!(BIBLE.room_index("victory.html"), Some(5));
        assert!(EXODUS.room_digest("room4").is_some());
        assert!(EXODUS.room_digest("room5").is_none());
    }
}
