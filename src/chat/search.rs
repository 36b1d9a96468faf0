/// A past conversation listed by the search dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub title: &'static str,
    pub preview: &'static str,
    pub time: &'static str,
}

pub const CHAT_HISTORY: &[HistoryEntry] = &[
    HistoryEntry {
        title: "3D Model Tutorial",
        preview: "Learn basic 3D modeling techniques...",
        time: "2h ago",
    },
    HistoryEntry {
        title: "Animation Basics",
        preview: "Understanding keyframes and timing...",
        time: "1d ago",
    },
    HistoryEntry {
        title: "Lighting Setup",
        preview: "Professional lighting for 3D scenes...",
        time: "2d ago",
    },
];

/// Case-insensitive title match. An empty query matches nothing so the
/// dialog can show its prompt instead.
pub fn search<'a>(entries: &'a [HistoryEntry], query: &str) -> Vec<&'a HistoryEntry> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_nothing() {
        assert!(search(CHAT_HISTORY, "").is_empty());
    }

    #[test]
    fn matches_are_case_insensitive_and_ordered() {
        let titles = search(CHAT_HISTORY, "B")
            .into_iter()
            .map(|e| e.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, ["Animation Basics"]);

        let titles = search(CHAT_HISTORY, "i")
            .into_iter()
            .map(|e| e.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, ["3D Model Tutorial", "Animation Basics", "Lighting Setup"]);
    }

    #[test]
    fn previews_are_not_searched() {
        assert!(search(CHAT_HISTORY, "keyframes").is_empty());
    }
}
