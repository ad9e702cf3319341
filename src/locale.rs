use crate::evaluator::{HandCategory, Outcome, Seat};

/// Language used for category labels and showdown banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
#[non_exhaustive]
pub enum Locale {
    #[default]
    #[value(name = "en")]
    English,
    #[value(name = "ja")]
    Japanese,
}

impl Locale {
    pub fn category(self, category: HandCategory) -> &'static str {
        use HandCategory::*;
        match self {
            Locale::English => match category {
                HighCard => "High Card",
                OnePair => "One Pair",
                TwoPair => "Two Pair",
                ThreeOfAKind => "Three of a Kind",
                Straight => "Straight",
                Flush => "Flush",
                FullHouse => "Full House",
                FourOfAKind => "Four of a Kind",
                StraightFlush => "Straight Flush",
                RoyalFlush => "Royal Flush",
            },
            Locale::Japanese => match category {
                HighCard => "ハイカード",
                OnePair => "ワンペア",
                TwoPair => "ツーペア",
                ThreeOfAKind => "スリーカード",
                Straight => "ストレート",
                Flush => "フラッシュ",
                FullHouse => "フルハウス",
                FourOfAKind => "フォーカード",
                StraightFlush => "ストレートフラッシュ",
                RoyalFlush => "ロイヤルストレートフラッシュ",
            },
        }
    }

    /// Banner shown to `seat` once the river settles the hand.
    pub fn banner(self, outcome: Outcome, seat: Seat) -> &'static str {
        let result = match outcome.winner() {
            None => Banner::Tie,
            Some(winner) if winner == seat => Banner::Win,
            Some(_) => Banner::Lose,
        };
        match (self, result) {
            (Locale::English, Banner::Win) => "Win",
            (Locale::English, Banner::Lose) => "Lose",
            (Locale::English, Banner::Tie) => "Tie",
            (Locale::Japanese, Banner::Win) => "勝ち",
            (Locale::Japanese, Banner::Lose) => "負け",
            (Locale::Japanese, Banner::Tie) => "引き分け",
        }
    }

    pub fn player_name(self, seat: Seat) -> String {
        match self {
            Locale::English => format!("Player {}", seat.index() + 1),
            Locale::Japanese => format!("プレイヤー{}", seat.index() + 1),
        }
    }
}

#[derive(Clone, Copy)]
enum Banner {
    Win,
    Lose,
    Tie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_distinct_labels() {
        for locale in [Locale::English, Locale::Japanese] {
            let mut labels: Vec<_> = HandCategory::ALL.iter().map(|&c| locale.category(c)).collect();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), HandCategory::ALL.len());
        }
    }

    #[test]
    fn japanese_labels() {
        assert_eq!(HandCategory::ThreeOfAKind.label(Locale::Japanese), "スリーカード");
        assert_eq!(HandCategory::RoyalFlush.label(Locale::Japanese), "ロイヤルストレートフラッシュ");
        assert_eq!(HandCategory::FullHouse.to_string(), "Full House");
    }

    #[test]
    fn banners_follow_the_winner() {
        let ja = Locale::Japanese;
        assert_eq!(ja.banner(Outcome::SecondWins, Seat::First), "負け");
        assert_eq!(ja.banner(Outcome::SecondWins, Seat::Second), "勝ち");
        assert_eq!(ja.banner(Outcome::Tie, Seat::First), "引き分け");
        assert_eq!(Locale::English.banner(Outcome::FirstWins, Seat::First), "Win");
        assert_eq!(Locale::English.banner(Outcome::Tie, Seat::Second), "Tie");
    }

    #[test]
    fn player_names() {
        assert_eq!(Locale::English.player_name(Seat::Second), "Player 2");
        assert_eq!(Locale::Japanese.player_name(Seat::First), "プレイヤー1");
    }
}
